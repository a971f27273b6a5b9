//! Hyperbolic sine.

use crate::common::util::Flavor;
use crate::num::Complex;
use crate::ops::util::inf_times;
use crate::ops::util::reduce_trig_arg;

impl Complex {
    /// Returns the hyperbolic sine of `self`.
    ///
    /// `sinh(x + yi) = sinh(x)*cos(y) + cosh(x)*sin(y)*i`, the imaginary part `y` is reduced to [-pi, pi] first.
    pub fn sinh(&self) -> Self {
        let (x, y) = (self.re(), self.im());

        match (Flavor::of(x), Flavor::of(y)) {
            (Flavor::Zero(_), Flavor::Inf(_) | Flavor::NaN) => Self::new(x, f64::NAN),
            (Flavor::NaN, Flavor::Zero(_)) => Self::new(f64::NAN, y),
            (Flavor::Inf(_), Flavor::Zero(_)) => Self::new(x, y),
            (Flavor::Inf(_), Flavor::Inf(_) | Flavor::NaN) => Self::new(x, f64::NAN),
            (Flavor::Inf(_), Flavor::Value(_)) => {
                let (s, c) = reduce_trig_arg(y).sin_cos();
                Self::new(x * c, inf_times(s))
            }
            (Flavor::NaN, _) | (_, Flavor::NaN) | (_, Flavor::Inf(_)) => Self::nan(),

            (_, Flavor::Zero(_)) => Self::new(x.sinh(), y),

            (Flavor::Zero(_) | Flavor::Value(_), Flavor::Value(_)) => {
                let (s, c) = reduce_trig_arg(y).sin_cos();
                let im = if s == 0.0 { s } else { x.cosh() * s };
                Self::new(x.sinh() * c, im)
            }
        }
    }
}
