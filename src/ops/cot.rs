//! Cotangent.

use crate::common::consts::ASYMPTOTE_THRESHOLD;
use crate::common::consts::POLE_THRESHOLD;
use crate::common::util::Flavor;
use crate::num::Complex;
use crate::ops::util::reduce_trig_arg;

impl Complex {
    /// Returns the cotangent of `self`.
    ///
    /// `cot(x + yi) = (sin(2x) - sinh(2y)*i) / (cosh(2y) - cos(2x))`.
    /// The imaginary part of the result approaches `-sign(y)` when `|y|` grows.
    pub fn cot(&self) -> Self {
        let (x, y) = (self.re(), self.im());

        match (Flavor::of(x), Flavor::of(y)) {
            (Flavor::NaN, Flavor::Inf(s)) => Self::new(0.0, s.invert().apply(1.0)),
            (Flavor::NaN, _) | (_, Flavor::NaN) => Self::nan(),
            (Flavor::Inf(_), _) => Self::nan(),

            (_, Flavor::Inf(s)) => {
                let r = reduce_trig_arg(x);
                Self::new(0.0f64.copysign((2.0 * r).sin()), s.invert().apply(1.0))
            }

            (Flavor::Zero(_), Flavor::Zero(_)) => self.tan().recip(),

            (_, Flavor::Zero(_)) => Self::new(reduce_trig_arg(x).tan().recip(), -y),

            (Flavor::Zero(_), _) => Self::new(x, -(y.tanh().recip())),

            (Flavor::Value(_), Flavor::Value(_)) => {
                let r = reduce_trig_arg(x);
                let s2 = (2.0 * r).sin();

                if y.abs() > ASYMPTOTE_THRESHOLD {
                    let decay = (-2.0 * y.abs()).exp();
                    return Self::new(2.0 * s2 * decay, -(1.0f64.copysign(y)));
                }

                let d = (2.0 * y).cosh() - (2.0 * r).cos();
                if d.abs() < *POLE_THRESHOLD {
                    self.cos().div(&self.sin())
                } else {
                    Self::new(s2 / d, -(2.0 * y).sinh() / d)
                }
            }
        }
    }
}
