//! Arccosecant.

use crate::common::consts::LN_2;
use crate::num::Complex;
use crate::ops::util::recip_dir;

impl Complex {
    /// Returns the arccosecant of `self` computed as `asin(1 / self)`.
    pub fn acsc(&self) -> Self {
        let (x, y) = (self.re(), self.im());

        // 1 / self overflows
        if !self.is_zero() && self.abs() < f64::MIN_POSITIVE {
            let real = x.abs().atan2(y.abs()).copysign(x);
            let (_, wy) = recip_dir(self);
            return Self::new(real, (LN_2 - self.abs().ln()).copysign(wy));
        }

        self.recip().asin()
    }
}
