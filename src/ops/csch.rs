//! Hyperbolic cosecant.

use crate::common::consts::ASYMPTOTE_THRESHOLD;
use crate::common::consts::POLE_THRESHOLD;
use crate::common::util::Flavor;
use crate::num::Complex;
use crate::ops::util::reduce_trig_arg;

impl Complex {
    /// Returns the hyperbolic cosecant of `self`.
    ///
    /// `csch(x + yi) = 2*(sinh(x)*cos(y) - cosh(x)*sin(y)*i) / (cosh(2x) - cos(2y))`.
    pub fn csch(&self) -> Self {
        let (x, y) = (self.re(), self.im());

        match (Flavor::of(x), Flavor::of(y)) {
            (Flavor::NaN, _) | (_, Flavor::NaN) => Self::nan(),
            (_, Flavor::Inf(_)) => Self::nan(),

            (Flavor::Zero(_), Flavor::Zero(_)) => self.sinh().recip(),

            (_, Flavor::Zero(_)) => Self::new(x.sinh().recip(), -y),

            (Flavor::Inf(_), _) => {
                let (s, c) = reduce_trig_arg(y).sin_cos();
                Self::new(0.0f64.copysign(c) * x.signum(), -(0.0f64.copysign(s)))
            }

            (Flavor::Zero(_), _) => {
                let (s, c) = reduce_trig_arg(y).sin_cos();
                Self::new(x * c, -(s.recip()))
            }

            (Flavor::Value(_), Flavor::Value(_)) => {
                let r = reduce_trig_arg(y);
                let (s, c) = r.sin_cos();

                if x.abs() > ASYMPTOTE_THRESHOLD {
                    let decay = 2.0 * (-x.abs()).exp();
                    return Self::new(decay * c.copysign(c * x), -(decay * s));
                }

                let d = (2.0 * x).cosh() - (2.0 * r).cos();
                if d.abs() < *POLE_THRESHOLD {
                    self.sinh().recip()
                } else {
                    Self::new(2.0 * x.sinh() * c / d, -2.0 * x.cosh() * s / d)
                }
            }
        }
    }
}
