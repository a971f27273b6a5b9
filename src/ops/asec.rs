//! Arcsecant.

use crate::common::consts::LN_2;
use crate::common::consts::PI;
use crate::num::Complex;
use crate::ops::util::recip_dir;

impl Complex {
    /// Returns the arcsecant of `self` computed as `acos(1 / self)`.
    ///
    /// For subnormal `self` the reciprocal overflows, and the asymptote
    /// `acos(w) = arg(w) - ln(2|w|)*i` of large `w` is used instead.
    pub fn asec(&self) -> Self {
        let (x, y) = (self.re(), self.im());

        if !self.is_zero() && self.abs() < f64::MIN_POSITIVE {
            let real = y.abs().atan2(x.abs());
            let real = if x.is_sign_negative() { PI - real } else { real };
            let (_, wy) = recip_dir(self);
            return Self::new(real, (LN_2 - self.abs().ln()).copysign(-wy));
        }

        self.recip().acos()
    }
}
