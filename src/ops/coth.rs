//! Hyperbolic cotangent.

use crate::common::consts::ASYMPTOTE_THRESHOLD;
use crate::common::consts::POLE_THRESHOLD;
use crate::common::util::Flavor;
use crate::num::Complex;
use crate::ops::util::reduce_trig_arg;

impl Complex {
    /// Returns the hyperbolic cotangent of `self`.
    ///
    /// `coth(x + yi) = (sinh(2x) - sin(2y)*i) / (cosh(2x) - cos(2y))`.
    /// Infinite `x` with finite nonzero `y` gives `NaN + NaNi`, the same as for `tanh`.
    pub fn coth(&self) -> Self {
        let (x, y) = (self.re(), self.im());

        match (Flavor::of(x), Flavor::of(y)) {
            (Flavor::Inf(s), Flavor::Inf(_) | Flavor::NaN) => Self::new(s.apply(1.0), -(0.0f64.copysign(y))),
            (Flavor::NaN, _) | (_, Flavor::NaN) => Self::nan(),

            (Flavor::Zero(_), Flavor::Zero(_)) => self.tanh().recip(),

            (_, Flavor::Zero(_)) => Self::new(x.tanh().recip(), -y),

            (Flavor::Inf(_), _) | (_, Flavor::Inf(_)) => Self::nan(),

            (Flavor::Zero(_), _) => Self::new(x, -(reduce_trig_arg(y).tan().recip())),

            (Flavor::Value(_), Flavor::Value(_)) => {
                let r = reduce_trig_arg(y);
                let s2 = (2.0 * r).sin();

                if x.abs() > ASYMPTOTE_THRESHOLD {
                    let decay = (-2.0 * x.abs()).exp();
                    return Self::new(1.0f64.copysign(x), -2.0 * s2 * decay);
                }

                let d = (2.0 * x).cosh() - (2.0 * r).cos();
                if d.abs() < *POLE_THRESHOLD {
                    self.cosh().div(&self.sinh())
                } else {
                    Self::new((2.0 * x).sinh() / d, -s2 / d)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::common::consts::PI;

    const INF: f64 = f64::INFINITY;
    const NAN: f64 = f64::NAN;

    #[test]
    fn test_coth() {
        assert!(Complex::new(0.0, 0.0).coth().is_identical(&Complex::new(INF, 0.0)));
        assert!(Complex::new(2.0, 0.0).coth().is_identical(&Complex::new(2.0f64.tanh().recip(), -0.0)));

        let z = Complex::new(-0.0, 0.5).coth();
        assert!(z.is_identical(&Complex::new(-0.0, -(0.5f64.tan().recip()))));

        let z = Complex::new(1.0, 1.0).coth();
        assert!(z.approx_eq(&Complex::new(0.8680141428959249, -0.21762156185440268), 1e-14));

        let z = Complex::new(1.0, 1.0).coth().mul(&Complex::new(1.0, 1.0).tanh());
        assert!(z.approx_eq(&Complex::one(), 1e-14));

        let z = Complex::new(30.0, -1.0).coth();
        assert_eq!(z.re(), 1.0);
        assert!(z.im() > 0.0 && z.im() < 1e-25);

        // near the pole at pi i
        let z = Complex::new(1e-10, PI).coth();
        assert!(z.is_finite());
        assert!(z.abs() > 1e9);
    }

    #[test]
    fn test_coth_special() {
        let cases = [
            (INF, 0.0, 1.0, -0.0),
            (-INF, -0.0, -1.0, 0.0),
            (INF, 1.0, NAN, NAN),
            (1.0, -INF, NAN, NAN),
            (INF, INF, 1.0, -0.0),
            (-INF, -INF, -1.0, 0.0),
            (NAN, 0.0, NAN, NAN),
            (0.0, NAN, NAN, NAN),
        ];

        for (re, im, ex_re, ex_im) in cases {
            let z = Complex::new(re, im).coth();
            assert!(z.is_identical(&Complex::new(ex_re, ex_im)), "coth({} {}) = {:?}", re, im, z);
        }
    }
}
