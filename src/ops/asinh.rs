//! Hyperbolic arcsine.

use crate::common::consts::HALF_PI;
use crate::common::consts::QUARTER_PI;
use crate::common::util::Flavor;
use crate::num::Complex;
use crate::ops::util::mult_i;
use crate::ops::util::mult_minus_i;

impl Complex {
    /// Returns the hyperbolic arcsine of `self` computed as `i * asin(-i * self)`.
    ///
    /// The imaginary part of the result is in [-pi/2, pi/2], branch cuts are on the imaginary axis outside [-i, i].
    pub fn asinh(&self) -> Self {
        let (x, y) = (self.re(), self.im());

        match (Flavor::of(x), Flavor::of(y)) {
            (Flavor::Inf(_), Flavor::NaN) => Self::new(x, f64::NAN),
            (Flavor::Inf(_), Flavor::Inf(_)) => Self::new(x, QUARTER_PI.copysign(y)),
            (Flavor::Inf(_), _) => Self::new(x, 0.0f64.copysign(y)),
            (Flavor::NaN, Flavor::Inf(_)) => Self::new(f64::INFINITY, f64::NAN),
            (_, Flavor::Inf(_)) => Self::new(f64::INFINITY.copysign(x), HALF_PI.copysign(y)),
            (Flavor::NaN, Flavor::Zero(_)) => Self::new(f64::NAN, y),
            (Flavor::NaN, _) | (_, Flavor::NaN) => Self::nan(),
            _ => mult_i(&mult_minus_i(self).asin()),
        }
    }
}
