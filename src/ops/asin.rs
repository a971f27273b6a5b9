//! Arcsine.
//!
//! asin and acos are computed with the algorithm of T. E. Hull, T. F. Fairgrieve, P. T. P. Tang,
//! "Implementing the complex arcsine and arccosine functions using exception handling",
//! ACM TOMS, vol. 23, no. 3, 1997.

use crate::common::consts::A_CROSSOVER;
use crate::common::consts::ASIN_SAFE_MAX;
use crate::common::consts::ASIN_SAFE_MIN;
use crate::common::consts::B_CROSSOVER;
use crate::common::consts::EPSILON;
use crate::common::consts::HALF_PI;
use crate::common::consts::LN_2;
use crate::common::consts::QUARTER_PI;
use crate::num::Complex;

/// Intermediate values of the Hull et al. algorithm for `x >= 0`, `y >= 0`.
/// `r` and `s` are the distances from `x + yi` to `-1` and `1`, `a = (r + s)/2`.
#[derive(Clone, Copy)]
pub(super) struct HullTerms {
    pub xp1: f64,
    pub xm1: f64,
    pub yy: f64,
    pub r: f64,
    pub s: f64,
    pub a: f64,
}

impl HullTerms {
    pub fn new(x: f64, y: f64) -> Self {
        let xp1 = 1.0 + x;
        let xm1 = x - 1.0;
        let yy = y * y;
        let r = (xp1 * xp1 + yy).sqrt();
        let s = (xm1 * xm1 + yy).sqrt();
        let a = 0.5 * (r + s);

        HullTerms { xp1, xm1, yy, r, s, a }
    }

    /// Returns `ln(a + sqrt(a^2 - 1))` avoiding cancellation in `a - 1` for small `a`.
    pub fn imag(&self, x: f64) -> f64 {
        let HullTerms { xp1, xm1, yy, r, s, a } = *self;

        if a <= A_CROSSOVER {
            let am1 = if x < 1.0 {
                0.5 * (yy / (r + xp1) + yy / (s - xm1))
            } else {
                0.5 * (yy / (r + xp1) + (s + xm1))
            };
            (am1 + (am1 * (a + 1.0)).sqrt()).ln_1p()
        } else {
            (a + (a * a - 1.0).sqrt()).ln()
        }
    }
}

/// True if both `x` and `y` are in the region where the squares of the algorithm
/// neither overflow nor underflow.
pub(super) fn in_safe_region(x: f64, y: f64) -> bool {
    x < *ASIN_SAFE_MAX && x > *ASIN_SAFE_MIN && y < *ASIN_SAFE_MAX && y > *ASIN_SAFE_MIN
}

impl Complex {
    /// Returns the arcsine of `self`.
    ///
    /// The real part of the result is in [-pi/2, pi/2], branch cuts are on the real axis outside [-1, 1].
    pub fn asin(&self) -> Self {
        let x = self.re().abs();
        let y = self.im().abs();

        let (real, imag) = if x.is_nan() {
            if y.is_infinite() {
                (x, f64::INFINITY)
            } else {
                return Self::new(x, x);
            }
        } else if y.is_nan() {
            if x == 0.0 {
                (0.0, y)
            } else if x.is_infinite() {
                (y, f64::INFINITY)
            } else {
                return Self::new(y, y);
            }
        } else if x.is_infinite() {
            if y.is_infinite() {
                (QUARTER_PI, f64::INFINITY)
            } else {
                (HALF_PI, f64::INFINITY)
            }
        } else if y.is_infinite() {
            (0.0, f64::INFINITY)
        } else if y == 0.0 && x <= 1.0 {
            return Self::new(self.re().asin(), self.im());
        } else if in_safe_region(x, y) {
            asin_safe(x, y)
        } else {
            asin_exceptional(x, y)
        };

        Self::new(
            if self.re().is_sign_negative() { -real } else { real },
            if self.im().is_sign_negative() { -imag } else { imag },
        )
    }
}

fn asin_safe(x: f64, y: f64) -> (f64, f64) {
    let t = HullTerms::new(x, y);
    let b = x / t.a;

    let real = if b <= B_CROSSOVER {
        b.asin()
    } else {
        let apx = t.a + x;
        if x <= 1.0 {
            (x / (0.5 * apx * (t.yy / (t.r + t.xp1) + (t.s - t.xm1))).sqrt()).atan()
        } else {
            (x / (y * (0.5 * (apx / (t.r + t.xp1) + apx / (t.s + t.xm1))).sqrt())).atan()
        }
    };

    (real, t.imag(x))
}

fn asin_exceptional(x: f64, y: f64) -> (f64, f64) {
    let xp1 = 1.0 + x;
    let xm1 = x - 1.0;

    if y <= EPSILON * xm1.abs() {
        if x < 1.0 {
            (x.asin(), y / (-xp1 * xm1).sqrt())
        } else if f64::MAX / xp1 > xm1 {
            (HALF_PI, (xm1 + (xp1 * xm1).sqrt()).ln_1p())
        } else {
            (HALF_PI, LN_2 + x.ln())
        }
    } else if y <= *ASIN_SAFE_MIN {
        // x is 1 here
        (HALF_PI - y.sqrt(), y.sqrt())
    } else if EPSILON * y - 1.0 >= x {
        (x / y, LN_2 + y.ln())
    } else if x > 1.0 {
        let xoy = x / y;
        ((x / y).atan(), LN_2 + y.ln() + 0.5 * (xoy * xoy).ln_1p())
    } else {
        let a = (1.0 + y * y).sqrt();
        (x / a, 0.5 * (2.0 * y * (y + a)).ln_1p())
    }
}
