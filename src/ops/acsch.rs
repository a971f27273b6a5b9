//! Hyperbolic arccosecant.

use crate::common::consts::LN_2;
use crate::common::consts::TINY_ARGUMENT;
use crate::num::Complex;
use crate::ops::util::recip_dir;

impl Complex {
    /// Returns the hyperbolic arccosecant of `self` computed as `asinh(1 / self)`.
    ///
    /// `acsch(z) = 1/z` to working precision for large `z`.
    pub fn acsch(&self) -> Self {
        let m = self.abs();

        // asinh(w) = +-(ln(2|w|) + arg(+-w)*i) for large w
        if !self.is_zero() && m < f64::MIN_POSITIVE {
            let (wx, wy) = recip_dir(self);
            let re = (LN_2 - m.ln()).copysign(wx);
            let im = wy.abs().atan2(wx.abs()).copysign(wy);
            return Self::new(re, im);
        }

        if m > 1.0 / *TINY_ARGUMENT {
            return self.recip();
        }

        self.recip().asinh()
    }
}
