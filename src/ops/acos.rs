//! Arccosine.

use crate::common::consts::ASIN_SAFE_MIN;
use crate::common::consts::B_CROSSOVER;
use crate::common::consts::EPSILON;
use crate::common::consts::HALF_PI;
use crate::common::consts::LN_2;
use crate::common::consts::PI;
use crate::common::consts::QUARTER_PI;
use crate::num::Complex;
use crate::ops::asin::in_safe_region;
use crate::ops::asin::HullTerms;

impl Complex {
    /// Returns the arccosine of `self`.
    ///
    /// The real part of the result is in [0, pi], branch cuts are on the real axis outside [-1, 1].
    /// The function is conjugate-symmetric, so `acos(x + 0i) = acos(x) - 0i` for `|x| <= 1`.
    pub fn acos(&self) -> Self {
        let x = self.re().abs();
        let y = self.im().abs();

        if x.is_nan() {
            return if y.is_infinite() { Self::new(x, -self.im()) } else { Self::new(x, x) };
        }

        if y.is_nan() {
            return if x.is_infinite() {
                Self::new(y, f64::INFINITY.copysign(self.im()))
            } else if x == 0.0 {
                Self::new(HALF_PI, y)
            } else {
                Self::new(y, y)
            };
        }

        let (real, imag) = if x.is_infinite() {
            if y.is_infinite() {
                (QUARTER_PI, f64::INFINITY)
            } else {
                (0.0, f64::INFINITY)
            }
        } else if y.is_infinite() {
            (HALF_PI, f64::INFINITY)
        } else if y == 0.0 && x <= 1.0 {
            let real = if x == 0.0 { HALF_PI } else { self.re().acos() };
            return Self::new(real, -self.im());
        } else if in_safe_region(x, y) {
            acos_safe(x, y)
        } else {
            acos_exceptional(x, y)
        };

        Self::new(
            if self.re().is_sign_negative() { PI - real } else { real },
            if self.im().is_sign_negative() { imag } else { -imag },
        )
    }
}

fn acos_safe(x: f64, y: f64) -> (f64, f64) {
    let t = HullTerms::new(x, y);
    let b = x / t.a;

    let real = if b <= B_CROSSOVER {
        b.acos()
    } else {
        let apx = t.a + x;
        if x <= 1.0 {
            ((0.5 * apx * (t.yy / (t.r + t.xp1) + (t.s - t.xm1))).sqrt() / x).atan()
        } else {
            (y * (0.5 * (apx / (t.r + t.xp1) + apx / (t.s + t.xm1))).sqrt() / x).atan()
        }
    };

    (real, t.imag(x))
}

fn acos_exceptional(x: f64, y: f64) -> (f64, f64) {
    let xp1 = 1.0 + x;
    let xm1 = x - 1.0;

    if y <= EPSILON * xm1.abs() {
        if x < 1.0 {
            (x.acos(), y / (xp1 * (1.0 - x)).sqrt())
        } else if f64::MAX / xp1 > xm1 {
            (y / (xm1 * xp1).sqrt(), (xm1 + (xp1 * xm1).sqrt()).ln_1p())
        } else {
            (y / x, LN_2 + x.ln())
        }
    } else if y <= *ASIN_SAFE_MIN {
        // x is 1 here
        (y.sqrt(), y.sqrt())
    } else if EPSILON * y - 1.0 >= x {
        (HALF_PI, LN_2 + y.ln())
    } else if x > 1.0 {
        let xoy = x / y;
        ((y / x).atan(), LN_2 + y.ln() + 0.5 * (xoy * xoy).ln_1p())
    } else {
        let a = (1.0 + y * y).sqrt();
        (HALF_PI, 0.5 * (2.0 * y * (y + a)).ln_1p())
    }
}
