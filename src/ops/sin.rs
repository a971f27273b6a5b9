//! Sine.

use crate::common::util::Flavor;
use crate::num::Complex;
use crate::ops::util::reduce_trig_arg;

impl Complex {
    /// Returns the sine of `self`.
    ///
    /// `sin(x + yi) = sin(x)*cosh(y) + cos(x)*sinh(y)*i`, the real part `x` is reduced to [-pi, pi] first.
    /// Infinite real part gives `NaN + NaNi`, infinite imaginary part gives `0 + Inf*i` when `sin(x)` vanishes,
    /// and `NaN + NaNi` otherwise.
    pub fn sin(&self) -> Self {
        let (x, y) = (self.re(), self.im());

        match (Flavor::of(x), Flavor::of(y)) {
            (Flavor::Zero(_), Flavor::NaN) => Self::new(x, f64::NAN),
            (Flavor::NaN, Flavor::Zero(_)) => Self::new(f64::NAN, y),
            (Flavor::NaN, _) | (_, Flavor::NaN) => Self::nan(),
            (Flavor::Inf(_), _) => Self::nan(),

            (Flavor::Zero(_), Flavor::Inf(_)) => Self::new(x, y),
            (Flavor::Value(_), Flavor::Inf(_)) => {
                let r = reduce_trig_arg(x);
                if r == 0.0 {
                    Self::new(r, y)
                } else {
                    Self::nan()
                }
            }

            (Flavor::Zero(_), _) => Self::new(x, y.sinh()),

            (_, Flavor::Zero(_)) => {
                let (s, c) = reduce_trig_arg(x).sin_cos();
                Self::new(s, c * y)
            }

            (Flavor::Value(_), Flavor::Value(_)) => {
                let (s, c) = reduce_trig_arg(x).sin_cos();
                let re = if s == 0.0 { s } else { s * y.cosh() };
                Self::new(re, c * y.sinh())
            }
        }
    }
}
