//! Hyperbolic arccotangent.

use crate::common::consts::HALF_PI;
use crate::common::consts::TINY_ARGUMENT;
use crate::num::Complex;
use crate::ops::util::recip_dir;

impl Complex {
    /// Returns the hyperbolic arccotangent of `self` computed as `atanh(1 / self)`.
    ///
    /// `acoth(z) = 1/z` to working precision for large `z`.
    /// For zero and subnormal `self` the reciprocal overflows, and the result is `z +- pi/2*i`.
    pub fn acoth(&self) -> Self {
        let m = self.abs();

        if m < f64::MIN_POSITIVE {
            let (wx, wy) = recip_dir(self);
            return Self::new(self.re().abs().copysign(wx), HALF_PI.copysign(wy));
        }

        if m > 1.0 / *TINY_ARGUMENT {
            return self.recip();
        }

        self.recip().atanh()
    }
}
