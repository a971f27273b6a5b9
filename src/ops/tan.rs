//! Tangent.

use crate::common::consts::ASYMPTOTE_THRESHOLD;
use crate::common::consts::POLE_THRESHOLD;
use crate::common::util::Flavor;
use crate::num::Complex;
use crate::ops::util::reduce_trig_arg;

impl Complex {
    /// Returns the tangent of `self`.
    ///
    /// `tan(x + yi) = (sin(2x) + sinh(2y)*i) / (cos(2x) + cosh(2y))`.
    /// The imaginary part of the result approaches `sign(y)` when `|y|` grows.
    pub fn tan(&self) -> Self {
        let (x, y) = (self.re(), self.im());

        match (Flavor::of(x), Flavor::of(y)) {
            (Flavor::Zero(_), Flavor::NaN) => Self::new(x, f64::NAN),
            (Flavor::NaN, Flavor::Zero(_)) => Self::new(f64::NAN, y),
            (Flavor::NaN, Flavor::Inf(s)) => Self::new(0.0, s.apply(1.0)),
            (Flavor::NaN, _) | (_, Flavor::NaN) => Self::nan(),
            (Flavor::Inf(_), _) => Self::nan(),

            (_, Flavor::Inf(s)) => {
                let r = reduce_trig_arg(x);
                Self::new(0.0f64.copysign((2.0 * r).sin()), s.apply(1.0))
            }

            (_, Flavor::Zero(_)) => Self::new(reduce_trig_arg(x).tan(), y),

            (Flavor::Zero(_), _) => Self::new(x, y.tanh()),

            (Flavor::Value(_), Flavor::Value(_)) => {
                let r = reduce_trig_arg(x);
                let s2 = (2.0 * r).sin();

                if y.abs() > ASYMPTOTE_THRESHOLD {
                    let decay = (-2.0 * y.abs()).exp();
                    return Self::new(2.0 * s2 * decay, 1.0f64.copysign(y));
                }

                let d = (2.0 * r).cos() + (2.0 * y).cosh();
                if d.abs() < *POLE_THRESHOLD {
                    self.sin().div(&self.cos())
                } else {
                    Self::new(s2 / d, (2.0 * y).sinh() / d)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::common::consts::HALF_PI;
    use crate::common::consts::PI;
    use crate::common::consts::QUARTER_PI;

    const INF: f64 = f64::INFINITY;
    const NAN: f64 = f64::NAN;

    #[test]
    fn test_tangent() {
        assert!(Complex::new(0.0, 0.0).tan().is_identical(&Complex::new(0.0, 0.0)));
        assert!(Complex::new(-0.0, -0.0).tan().is_identical(&Complex::new(-0.0, -0.0)));

        let z = Complex::new(QUARTER_PI, 0.0).tan();
        assert!(z.approx_eq(&Complex::new(1.0, 0.0), 1e-15));
        assert!(z.im() == 0.0 && z.im().is_sign_positive());

        let z = Complex::new(-0.0, 1.0).tan();
        assert!(z.is_identical(&Complex::new(-0.0, 1.0f64.tanh())));

        let z = Complex::new(1.0, 1.0).tan();
        assert!(z.approx_eq(&Complex::new(0.27175258531951174, 1.0839233273386946), 1e-14));

        let z = Complex::new(-1.0, -1.0).tan();
        assert!(z.approx_eq(&Complex::new(-0.27175258531951174, -1.0839233273386946), 1e-14));

        // asymptote
        let z = Complex::new(1.0, 30.0).tan();
        assert!(z.re() > 0.0 && z.re() < 1e-25);
        assert_eq!(z.im(), 1.0);

        let z = Complex::new(1.0, -30.0).tan();
        assert_eq!(z.im(), -1.0);

        // near the pole at pi/2
        let z = Complex::new(HALF_PI, 1e-9).tan();
        assert!(z.is_finite());
        assert!(z.im() > 1e8);

        // periodicity
        let z = Complex::new(1000.0 * PI + 0.5, 0.5).tan();
        let w = Complex::new(0.5, 0.5).tan();
        assert!(z.approx_eq(&w, 1e-10));
    }

    #[test]
    fn test_tangent_special() {
        assert!(Complex::new(INF, 1.0).tan().is_identical(&Complex::nan()));
        assert!(Complex::new(1.0, INF).tan().is_identical(&Complex::new(0.0, 1.0)));
        assert!(Complex::new(2.0, -INF).tan().is_identical(&Complex::new(-0.0, -1.0)));
        assert!(Complex::new(0.0, INF).tan().is_identical(&Complex::new(0.0, 1.0)));
        assert!(Complex::new(NAN, INF).tan().is_identical(&Complex::new(0.0, 1.0)));
        assert!(Complex::new(0.0, NAN).tan().is_identical(&Complex::new(0.0, NAN)));
        assert!(Complex::new(NAN, -0.0).tan().is_identical(&Complex::new(NAN, -0.0)));
        assert!(Complex::new(NAN, 1.0).tan().is_identical(&Complex::nan()));
    }
}
