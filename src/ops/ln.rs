//! Natural logarithm.

use crate::common::consts::HALF_PI;
use crate::common::consts::LN_2;
use crate::common::consts::PI;
use crate::common::consts::QUARTER_PI;
use crate::common::consts::THREE_QUARTERS_PI;
use crate::common::util::Flavor;
use crate::num::Complex;

impl Complex {
    /// Returns the natural logarithm of `self`, the principal value with the imaginary part in [-pi, pi].
    /// The sign of a zero imaginary part selects the side of the branch cut along the negative real axis.
    pub fn ln(&self) -> Self {
        let (x, y) = (self.re(), self.im());

        match (Flavor::of(x), Flavor::of(y)) {
            (Flavor::Zero(sx), Flavor::Zero(_)) => {
                if sx.is_negative() {
                    Self::new(f64::NEG_INFINITY, PI.copysign(y))
                } else {
                    Self::new(f64::NEG_INFINITY, y)
                }
            }

            (Flavor::Inf(_), Flavor::NaN) | (Flavor::NaN, Flavor::Inf(_)) => {
                Self::new(f64::INFINITY, f64::NAN)
            }

            (Flavor::NaN, _) | (_, Flavor::NaN) => Self::nan(),

            (Flavor::Inf(sx), Flavor::Inf(sy)) => {
                if sx.is_positive() {
                    Self::new(f64::INFINITY, sy.apply(QUARTER_PI))
                } else {
                    Self::new(f64::INFINITY, sy.apply(THREE_QUARTERS_PI))
                }
            }

            (Flavor::Inf(sx), Flavor::Zero(_) | Flavor::Value(_)) => {
                if sx.is_positive() {
                    Self::new(f64::INFINITY, 0.0f64.copysign(y))
                } else {
                    Self::new(f64::INFINITY, PI.copysign(y))
                }
            }

            (Flavor::Zero(_) | Flavor::Value(_), Flavor::Inf(sy)) => {
                Self::new(f64::INFINITY, sy.apply(HALF_PI))
            }

            (Flavor::Value(sx), Flavor::Zero(_)) => {
                if sx.is_positive() {
                    Self::new(x.ln(), y)
                } else {
                    Self::new((-x).ln(), PI.copysign(y))
                }
            }

            (Flavor::Zero(_), Flavor::Value(sy)) => Self::new(y.abs().ln(), sy.apply(HALF_PI)),

            (Flavor::Value(_), Flavor::Value(_)) => Self::new(self.ln_abs(), y.atan2(x)),
        }
    }

    // ln|z| for finite nonzero parts.
    fn ln_abs(&self) -> f64 {
        let h = self.abs();

        if h.is_infinite() {
            return (0.5 * self.re()).hypot(0.5 * self.im()).ln() + LN_2;
        }

        if h > 0.7 && h < 1.4 {
            // |z|^2 - 1 computed without cancellation
            let (ax, ay) = (self.re().abs(), self.im().abs());
            let (big, small) = if ax >= ay { (ax, ay) } else { (ay, ax) };
            0.5 * ((big - 1.0) * (big + 1.0) + small * small).ln_1p()
        } else {
            h.ln()
        }
    }
}
