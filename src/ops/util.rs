//! Auxiliary functions for operations.

use crate::common::consts::PI;
use crate::common::consts::TWO_PI;
use crate::num::Complex;

/// Reduces `x` to the range [-pi, pi] by subtracting a multiple of 2*pi.
/// Multiples of pi computed in floating point reduce exactly to zero or pi.
pub(super) fn reduce_trig_arg(x: f64) -> f64 {
    if x.abs() <= PI {
        x
    } else {
        let k = (x / TWO_PI).round();
        x - k * TWO_PI
    }
}

/// i * z, rotation by pi/2.
#[inline]
pub(super) fn mult_i(z: &Complex) -> Complex {
    Complex::new(-z.im(), z.re())
}

/// -i * z, rotation by -pi/2.
#[inline]
pub(super) fn mult_minus_i(z: &Complex) -> Complex {
    Complex::new(z.im(), -z.re())
}

/// Returns `INFINITY * f` with zero `f` kept as a signed zero.
#[inline]
pub(super) fn inf_times(f: f64) -> f64 {
    if f == 0.0 {
        f
    } else {
        f64::INFINITY * f
    }
}

/// Direction of `1 / z` as a pair of components of the conjugate of `z`,
/// with zero components signed the way `recip` signs them.
pub(super) fn recip_dir(z: &Complex) -> (f64, f64) {
    let (x, y) = (z.re(), z.im());
    let wx = if x == 0.0 { 0.0f64.copysign(y) } else { x };
    let wy = if y == 0.0 { 0.0f64.copysign(x) } else { -y };
    (wx, wy)
}
