//! Hyperbolic secant.

use crate::common::consts::ASYMPTOTE_THRESHOLD;
use crate::common::consts::POLE_THRESHOLD;
use crate::common::util::Flavor;
use crate::num::Complex;
use crate::ops::util::reduce_trig_arg;

impl Complex {
    /// Returns the hyperbolic secant of `self`.
    ///
    /// `sech(x + yi) = 2*(cosh(x)*cos(y) - sinh(x)*sin(y)*i) / (cosh(2x) + cos(2y))`.
    pub fn sech(&self) -> Self {
        let (x, y) = (self.re(), self.im());

        match (Flavor::of(x), Flavor::of(y)) {
            (Flavor::NaN, _) | (_, Flavor::NaN) => Self::nan(),
            (_, Flavor::Inf(_)) => Self::nan(),

            (_, Flavor::Zero(_)) => Self::new(x.cosh().recip(), -(x.signum() * y)),

            (Flavor::Inf(_), _) => {
                let (s, c) = reduce_trig_arg(y).sin_cos();
                Self::new(0.0f64.copysign(c), -(0.0f64.copysign(s) * x.signum()))
            }

            (Flavor::Zero(_), _) => {
                let (s, c) = reduce_trig_arg(y).sin_cos();
                Self::new(c.recip(), -(x * s))
            }

            (Flavor::Value(_), Flavor::Value(_)) => {
                let r = reduce_trig_arg(y);
                let (s, c) = r.sin_cos();

                if x.abs() > ASYMPTOTE_THRESHOLD {
                    let decay = 2.0 * (-x.abs()).exp();
                    return Self::new(decay * c, -(decay * s.copysign(s * x)));
                }

                let d = (2.0 * x).cosh() + (2.0 * r).cos();
                if d.abs() < *POLE_THRESHOLD {
                    self.cosh().recip()
                } else {
                    Self::new(2.0 * x.cosh() * c / d, -2.0 * x.sinh() * s / d)
                }
            }
        }
    }
}
