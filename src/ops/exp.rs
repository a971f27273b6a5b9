//! Exponent.

use crate::common::consts::PI;
use crate::common::util::Flavor;
use crate::num::Complex;

// exp(x) overflows above this value, while exp(x/2)^2 * cos(y) may not.
const EXP_OVERFLOW: f64 = 709.0;

impl Complex {
    /// Returns `e` to the power of `self`.
    pub fn exp(&self) -> Self {
        let (x, y) = (self.re(), self.im());

        match Flavor::of(x) {
            Flavor::Inf(s) if s.is_positive() => match Flavor::of(y) {
                Flavor::Zero(_) => Self::new(f64::INFINITY, y),
                Flavor::Value(_) if y.abs() == PI => Self::new(f64::NEG_INFINITY, 0.0f64.copysign(y)),
                Flavor::Value(_) => Self::new(f64::INFINITY, f64::NAN),
                Flavor::Inf(_) | Flavor::NaN => Self::new(f64::INFINITY, f64::NAN),
            },
            Flavor::Inf(_) => match Flavor::of(y) {
                Flavor::Zero(_) | Flavor::Value(_) => {
                    let (s, c) = y.sin_cos();
                    Self::new(0.0 * c, 0.0 * s)
                }
                Flavor::Inf(_) | Flavor::NaN => Self::zero(),
            },
            Flavor::NaN => match Flavor::of(y) {
                Flavor::Zero(_) => Self::new(f64::NAN, y),
                _ => Self::nan(),
            },
            Flavor::Zero(_) | Flavor::Value(_) => match Flavor::of(y) {
                Flavor::Zero(_) => Self::new(x.exp(), y),
                Flavor::Value(_) => {
                    let (s, c) = y.sin_cos();
                    if x > EXP_OVERFLOW {
                        let e = (x / 2.0).exp();
                        Self::new(c * e * e, s * e * e)
                    } else {
                        let e = x.exp();
                        Self::new(e * c, e * s)
                    }
                }
                Flavor::Inf(_) | Flavor::NaN => Self::nan(),
            },
        }
    }
}
