//! Hyperbolic arccosine.

use crate::common::consts::HALF_PI;
use crate::common::consts::PI;
use crate::common::consts::QUARTER_PI;
use crate::common::consts::THREE_QUARTERS_PI;
use crate::common::util::Flavor;
use crate::num::Complex;
use crate::ops::util::mult_i;
use crate::ops::util::mult_minus_i;

impl Complex {
    /// Returns the hyperbolic arccosine of `self`.
    ///
    /// The result is `i * acos(self)` or `-i * acos(self)`, whichever has a non-negative real part.
    /// The imaginary part of the result is in [-pi, pi], the branch cut is on the real axis below 1.
    pub fn acosh(&self) -> Self {
        let (x, y) = (self.re(), self.im());

        match (Flavor::of(x), Flavor::of(y)) {
            (Flavor::Inf(_) | Flavor::NaN, Flavor::NaN) | (Flavor::NaN, Flavor::Inf(_)) => {
                if self.is_infinite() {
                    Self::new(f64::INFINITY, f64::NAN)
                } else {
                    Self::nan()
                }
            }
            (Flavor::Inf(sx), Flavor::Inf(_)) => {
                let im = if sx.is_positive() { QUARTER_PI } else { THREE_QUARTERS_PI };
                Self::new(f64::INFINITY, im.copysign(y))
            }
            (Flavor::Inf(sx), _) => {
                let im = if sx.is_positive() { 0.0 } else { PI };
                Self::new(f64::INFINITY, im.copysign(y))
            }
            (_, Flavor::Inf(_)) => Self::new(f64::INFINITY, HALF_PI.copysign(y)),
            (Flavor::NaN, _) | (_, Flavor::NaN) => Self::nan(),
            _ => {
                let w = self.acos();
                if y.is_sign_negative() {
                    mult_minus_i(&w)
                } else {
                    mult_i(&w)
                }
            }
        }
    }
}
