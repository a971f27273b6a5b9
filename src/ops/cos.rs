//! Cosine.

use crate::common::util::Flavor;
use crate::num::Complex;
use crate::ops::util::reduce_trig_arg;

impl Complex {
    /// Returns the cosine of `self`.
    ///
    /// `cos(x + yi) = cos(x)*cosh(y) - sin(x)*sinh(y)*i`, the real part `x` is reduced to [-pi, pi] first.
    /// Infinite real part gives `NaN + NaNi`, infinite imaginary part gives `Inf + 0i` when `sin(x)` vanishes,
    /// and `NaN + NaNi` otherwise.
    pub fn cos(&self) -> Self {
        let (x, y) = (self.re(), self.im());

        match (Flavor::of(x), Flavor::of(y)) {
            (Flavor::Zero(_), Flavor::NaN) | (Flavor::NaN, Flavor::Zero(_)) => Self::new(f64::NAN, 0.0),
            (Flavor::NaN, _) | (_, Flavor::NaN) => Self::nan(),
            (Flavor::Inf(_), _) => Self::nan(),

            (Flavor::Zero(_), Flavor::Inf(_)) => Self::new(f64::INFINITY, -(x * y.signum())),
            (Flavor::Value(_), Flavor::Inf(_)) => {
                let r = reduce_trig_arg(x);
                if r == 0.0 {
                    Self::new(f64::INFINITY, -(r * y.signum()))
                } else {
                    Self::nan()
                }
            }

            (Flavor::Zero(_), _) => Self::new(y.cosh(), -(x * y.sinh())),

            (_, Flavor::Zero(_)) => {
                let (s, c) = reduce_trig_arg(x).sin_cos();
                Self::new(c, -(s * y))
            }

            (Flavor::Value(_), Flavor::Value(_)) => {
                let (s, c) = reduce_trig_arg(x).sin_cos();
                let im = if s == 0.0 { -(s * y.signum()) } else { -(s * y.sinh()) };
                Self::new(c * y.cosh(), im)
            }
        }
    }
}
