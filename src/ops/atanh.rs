//! Hyperbolic arctangent.

use crate::common::consts::ATANH_CROSSOVER;
use crate::common::consts::ATANH_SAFE_MAX;
use crate::common::consts::ATANH_SAFE_MIN;
use crate::common::consts::HALF_PI;
use crate::common::consts::LN_2;
use crate::common::consts::PI;
use crate::num::Complex;

impl Complex {
    /// Returns the hyperbolic arctangent of `self`.
    ///
    /// `atanh(z) = (ln(1 + z) - ln(1 - z)) / 2`, the imaginary part of the result is in [-pi/2, pi/2],
    /// branch cuts are on the real axis outside [-1, 1].
    ///
    /// The real part is `ln(((1 + x)^2 + y^2) / ((1 - x)^2 + y^2)) / 4`, evaluated as
    /// `log1p(4x / ((1 - x)^2 + y^2)) / 4` while the argument of `log1p` is small,
    /// and the squares are rearranged when they would overflow or underflow.
    pub fn atanh(&self) -> Self {
        let x = self.re().abs();
        let y = self.im().abs();

        if x.is_nan() {
            return if y.is_infinite() {
                Self::new(0.0, HALF_PI.copysign(self.im()))
            } else {
                Self::new(x, x)
            };
        }

        if y.is_nan() {
            return if x == 0.0 {
                Self::new(self.re(), y)
            } else if x.is_infinite() {
                Self::new(0.0f64.copysign(self.re()), y)
            } else {
                Self::new(y, y)
            };
        }

        let safe = |v: f64| v > *ATANH_SAFE_MIN && v < *ATANH_SAFE_MAX;

        let (real, imag) = if safe(x) && safe(y) {
            atanh_safe(x, y)
        } else {
            (atanh_real_exceptional(x, y), atanh_imag_exceptional(x, y))
        };

        Self::new(real.copysign(self.re()), (imag / 2.0).copysign(self.im()))
    }
}

// Returns the real part and the doubled imaginary part.
fn atanh_safe(x: f64, y: f64) -> (f64, f64) {
    let yy = y * y;
    let mxm1 = 1.0 - x;
    let den = mxm1 * mxm1 + yy;
    let alpha = 4.0 * x / den;

    let real = if alpha < ATANH_CROSSOVER {
        alpha.ln_1p() / 4.0
    } else {
        let xp1 = 1.0 + x;
        ((xp1 * xp1 + yy) / den).ln() / 4.0
    };

    (real, (2.0 * y).atan2(mxm1 * (1.0 + x) - yy))
}

fn atanh_real_exceptional(x: f64, y: f64) -> f64 {
    let mxm1 = 1.0 - x;

    let r = if x >= *ATANH_SAFE_MAX {
        if x.is_infinite() || y.is_infinite() {
            0.0
        } else if y >= *ATANH_SAFE_MAX {
            ((4.0 / y) / (x / y + y / x)).ln_1p()
        } else if y > 1.0 {
            (4.0 / (x + y * y / x)).ln_1p()
        } else {
            (4.0 / x).ln_1p()
        }
    } else if y >= *ATANH_SAFE_MAX {
        if x > 1.0 {
            ((4.0 * x / y) / (y + mxm1 * mxm1 / y)).ln_1p()
        } else {
            4.0 * x / y / y
        }
    } else if x != 1.0 {
        let mut div = mxm1 * mxm1;
        if y > *ATANH_SAFE_MIN {
            div += y * y;
        }
        (4.0 * x / div).ln_1p()
    } else {
        2.0 * (LN_2 - y.ln())
    };

    r / 4.0
}

// Doubled imaginary part.
fn atanh_imag_exceptional(x: f64, y: f64) -> f64 {
    if x >= *ATANH_SAFE_MAX || y >= *ATANH_SAFE_MAX {
        PI
    } else if x <= *ATANH_SAFE_MIN {
        if y <= *ATANH_SAFE_MIN {
            (2.0 * y).atan2(1.0)
        } else {
            (2.0 * y).atan2(1.0 - y * y)
        }
    } else if y == 0.0 && x == 1.0 {
        0.0
    } else {
        (2.0 * y).atan2((1.0 - x) * (1.0 + x))
    }
}
