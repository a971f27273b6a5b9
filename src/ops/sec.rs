//! Secant.

use crate::common::consts::ASYMPTOTE_THRESHOLD;
use crate::common::consts::POLE_THRESHOLD;
use crate::common::util::Flavor;
use crate::num::Complex;
use crate::ops::util::reduce_trig_arg;

impl Complex {
    /// Returns the secant of `self`.
    ///
    /// `sec(x + yi) = 2*(cos(x)*cosh(y) + sin(x)*sinh(y)*i) / (cos(2x) + cosh(2y))`.
    /// The result decays to a signed zero when `|y|` grows.
    pub fn sec(&self) -> Self {
        let (x, y) = (self.re(), self.im());

        match (Flavor::of(x), Flavor::of(y)) {
            (Flavor::NaN, _) | (_, Flavor::NaN) => Self::nan(),
            (Flavor::Inf(_), _) => Self::nan(),

            (_, Flavor::Inf(_)) => {
                let (s, c) = reduce_trig_arg(x).sin_cos();
                Self::new(0.0f64.copysign(c), 0.0f64.copysign(s) * y.signum())
            }

            (_, Flavor::Zero(_)) => {
                let (s, c) = reduce_trig_arg(x).sin_cos();
                Self::new(c.recip(), s * y)
            }

            (Flavor::Zero(_), _) => Self::new(y.cosh().recip(), x * y.signum()),

            (Flavor::Value(_), Flavor::Value(_)) => {
                let r = reduce_trig_arg(x);
                let (s, c) = r.sin_cos();

                if y.abs() > ASYMPTOTE_THRESHOLD {
                    let decay = 2.0 * (-y.abs()).exp();
                    return Self::new(decay * c, decay * s.copysign(s * y));
                }

                let d = (2.0 * r).cos() + (2.0 * y).cosh();
                if d.abs() < *POLE_THRESHOLD {
                    self.cos().recip()
                } else {
                    Self::new(2.0 * c * y.cosh() / d, 2.0 * s * y.sinh() / d)
                }
            }
        }
    }
}
