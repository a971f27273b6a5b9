//! Cosecant.

use crate::common::consts::ASYMPTOTE_THRESHOLD;
use crate::common::consts::POLE_THRESHOLD;
use crate::common::util::Flavor;
use crate::num::Complex;
use crate::ops::util::reduce_trig_arg;

impl Complex {
    /// Returns the cosecant of `self`.
    ///
    /// `csc(x + yi) = 2*(sin(x)*cosh(y) - cos(x)*sinh(y)*i) / (cosh(2y) - cos(2x))`.
    pub fn csc(&self) -> Self {
        let (x, y) = (self.re(), self.im());

        match (Flavor::of(x), Flavor::of(y)) {
            (Flavor::NaN, _) | (_, Flavor::NaN) => Self::nan(),
            (Flavor::Inf(_), _) => Self::nan(),

            (_, Flavor::Inf(_)) => {
                let (s, c) = reduce_trig_arg(x).sin_cos();
                Self::new(0.0f64.copysign(s), -(0.0f64.copysign(c) * y.signum()))
            }

            (Flavor::Zero(_), Flavor::Zero(_)) => self.sin().recip(),

            (_, Flavor::Zero(_)) => {
                let (s, c) = reduce_trig_arg(x).sin_cos();
                Self::new(s.recip(), -(c * y))
            }

            (Flavor::Zero(_), _) => Self::new(x, -(y.sinh().recip())),

            (Flavor::Value(_), Flavor::Value(_)) => {
                let r = reduce_trig_arg(x);
                let (s, c) = r.sin_cos();

                if y.abs() > ASYMPTOTE_THRESHOLD {
                    let decay = 2.0 * (-y.abs()).exp();
                    return Self::new(decay * s, -(decay * c.copysign(c * y)));
                }

                let d = (2.0 * y).cosh() - (2.0 * r).cos();
                if d.abs() < *POLE_THRESHOLD {
                    self.sin().recip()
                } else {
                    Self::new(2.0 * s * y.cosh() / d, -2.0 * c * y.sinh() / d)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::common::consts::HALF_PI;

    const INF: f64 = f64::INFINITY;
    const NAN: f64 = f64::NAN;

    #[test]
    fn test_cosecant() {
        assert!(Complex::new(0.0, 0.0).csc().is_identical(&Complex::new(INF, 0.0)));
        assert!(Complex::new(HALF_PI, 0.0).csc().is_identical(&Complex::new(1.0, -(HALF_PI.cos() * 0.0))));

        let z = Complex::new(0.0, 2.0).csc();
        assert!(z.is_identical(&Complex::new(0.0, -(2.0f64.sinh().recip()))));

        let z = Complex::new(1.0, 1.0).csc();
        assert!(z.approx_eq(&Complex::new(0.6215180171704284, -0.30393100162842646), 1e-14));

        let z = Complex::new(-1.0, 1.0).csc();
        assert!(z.approx_eq(&Complex::new(-0.6215180171704284, -0.30393100162842646), 1e-14));

        let z = Complex::new(0.5, 30.0).csc();
        let decay = 2.0 * (-30.0f64).exp();
        assert!(z.approx_eq(&Complex::new(decay * 0.5f64.sin(), -decay * 0.5f64.cos()), 1e-15));
        assert!(z.re() > 0.0 && z.im() < 0.0);
    }

    #[test]
    fn test_cosecant_special() {
        assert!(Complex::new(-INF, 1.0).csc().is_identical(&Complex::nan()));
        assert!(Complex::new(1.0, INF).csc().is_identical(&Complex::new(0.0, -0.0)));
        assert!(Complex::new(-2.0, -INF).csc().is_identical(&Complex::new(-0.0, -0.0)));
        assert!(Complex::new(0.0, NAN).csc().is_identical(&Complex::nan()));
    }
}
