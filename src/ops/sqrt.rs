//! Square root.

use crate::common::consts::SQRT_SAFE_MAX;
use crate::common::consts::SQRT_SAFE_MIN;
use crate::common::util::Flavor;
use crate::num::Complex;

// 2^54 and 2^-27 for rescaling of tiny arguments.
const UPSCALE: f64 = 18014398509481984.0;
const UPSCALE_SQRT_INV: f64 = 1.0 / 134217728.0;

impl Complex {
    /// Returns the principal square root of `self`. The real part of the result is never negative,
    /// and the imaginary part has the sign of the imaginary part of `self`.
    pub fn sqrt(&self) -> Self {
        let (x, y) = (self.re(), self.im());

        match (Flavor::of(x), Flavor::of(y)) {
            (_, Flavor::Inf(_)) => Self::new(f64::INFINITY, y),

            (Flavor::Zero(_), Flavor::Zero(_)) => Self::new(0.0, y),

            (Flavor::Inf(sx), Flavor::NaN) => {
                if sx.is_positive() {
                    Self::new(f64::INFINITY, f64::NAN)
                } else {
                    Self::new(f64::NAN, f64::INFINITY)
                }
            }

            (Flavor::Inf(sx), Flavor::Zero(_) | Flavor::Value(_)) => {
                if sx.is_positive() {
                    Self::new(f64::INFINITY, 0.0f64.copysign(y))
                } else {
                    Self::new(0.0, f64::INFINITY.copysign(y))
                }
            }

            (Flavor::NaN, _) | (_, Flavor::NaN) => Self::nan(),

            (Flavor::Value(sx), Flavor::Zero(_)) => {
                if sx.is_positive() {
                    Self::new(x.sqrt(), y)
                } else {
                    Self::new(0.0, (-x).sqrt().copysign(y))
                }
            }

            (Flavor::Zero(_) | Flavor::Value(_), Flavor::Value(_)) => {
                let (re, im) = sqrt_finite(x, y);
                Self::new(re, im)
            }
        }
    }
}

// Finite x and finite nonzero y.
fn sqrt_finite(x: f64, y: f64) -> (f64, f64) {
    let (ax, ay) = (x.abs(), y.abs());

    let (x, y, scale) = if ax > *SQRT_SAFE_MAX || ay > *SQRT_SAFE_MAX {
        (x * 0.25, y * 0.25, 2.0)
    } else if ax < *SQRT_SAFE_MIN && ay < *SQRT_SAFE_MIN {
        (x * UPSCALE, y * UPSCALE, UPSCALE_SQRT_INV)
    } else {
        (x, y, 1.0)
    };

    let h = x.hypot(y);

    if x >= 0.0 {
        let a = ((h + x) * 0.5).sqrt();
        (a * scale, y / (2.0 * a) * scale)
    } else {
        let b = ((h - x) * 0.5).sqrt();
        let a = y.abs() / (2.0 * b);
        (a * scale, b.copysign(y) * scale)
    }
}
