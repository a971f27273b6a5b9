//! Hyperbolic cosine.

use crate::common::util::Flavor;
use crate::num::Complex;
use crate::ops::util::inf_times;
use crate::ops::util::reduce_trig_arg;

impl Complex {
    /// Returns the hyperbolic cosine of `self`.
    ///
    /// `cosh(x + yi) = cosh(x)*cos(y) + sinh(x)*sin(y)*i`, the imaginary part `y` is reduced to [-pi, pi] first.
    pub fn cosh(&self) -> Self {
        let (x, y) = (self.re(), self.im());

        match (Flavor::of(x), Flavor::of(y)) {
            (Flavor::Zero(_), Flavor::Inf(_) | Flavor::NaN) | (Flavor::NaN, Flavor::Zero(_)) => {
                Self::new(f64::NAN, 0.0)
            }
            (Flavor::Inf(_), Flavor::Zero(_)) => Self::new(f64::INFINITY, x.signum() * y),
            (Flavor::Inf(_), Flavor::Inf(_) | Flavor::NaN) => Self::new(f64::INFINITY, f64::NAN),
            (Flavor::Inf(_), Flavor::Value(_)) => {
                let (s, c) = reduce_trig_arg(y).sin_cos();
                Self::new(inf_times(c), x.signum() * inf_times(s))
            }
            (Flavor::NaN, _) | (_, Flavor::NaN) | (_, Flavor::Inf(_)) => Self::nan(),

            (_, Flavor::Zero(_)) => Self::new(x.cosh(), x.signum() * y),

            (Flavor::Zero(_) | Flavor::Value(_), Flavor::Value(_)) => {
                let (s, c) = reduce_trig_arg(y).sin_cos();
                let im = if s == 0.0 { x.signum() * s } else { x.sinh() * s };
                Self::new(x.cosh() * c, im)
            }
        }
    }
}
