//! Hyperbolic tangent.

use crate::common::consts::ASYMPTOTE_THRESHOLD;
use crate::common::consts::POLE_THRESHOLD;
use crate::common::util::Flavor;
use crate::num::Complex;
use crate::ops::util::reduce_trig_arg;

impl Complex {
    /// Returns the hyperbolic tangent of `self`.
    ///
    /// `tanh(x + yi) = (sinh(2x) + sin(2y)*i) / (cosh(2x) + cos(2y))`.
    ///
    /// Infinite `x` with finite nonzero `y` is an indeterminate `Inf / Inf` and gives `NaN + NaNi`,
    /// while on the real axis `tanh(+-Inf +- 0i) = +-1 +- 0i`.
    pub fn tanh(&self) -> Self {
        let (x, y) = (self.re(), self.im());

        match (Flavor::of(x), Flavor::of(y)) {
            (Flavor::NaN, Flavor::Zero(_)) => Self::new(f64::NAN, y),
            (Flavor::Zero(_), Flavor::NaN) => Self::new(x, f64::NAN),
            (Flavor::Inf(s), Flavor::Inf(_) | Flavor::NaN) => Self::new(s.apply(1.0), 0.0f64.copysign(y)),
            (Flavor::NaN, _) | (_, Flavor::NaN) => Self::nan(),

            (_, Flavor::Zero(_)) => Self::new(x.tanh(), y),

            (Flavor::Inf(_), _) | (_, Flavor::Inf(_)) => Self::nan(),

            (Flavor::Zero(_), _) => Self::new(x, reduce_trig_arg(y).tan()),

            (Flavor::Value(_), Flavor::Value(_)) => {
                let r = reduce_trig_arg(y);
                let s2 = (2.0 * r).sin();

                if x.abs() > ASYMPTOTE_THRESHOLD {
                    let decay = (-2.0 * x.abs()).exp();
                    return Self::new(1.0f64.copysign(x), 2.0 * s2 * decay);
                }

                let d = (2.0 * x).cosh() + (2.0 * r).cos();
                if d.abs() < *POLE_THRESHOLD {
                    self.sinh().div(&self.cosh())
                } else {
                    Self::new((2.0 * x).sinh() / d, s2 / d)
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
    fn test_tanh() {
        assert!(Complex::new(0.0, 0.0).tanh().is_identical(&Complex::new(0.0, 0.0)));
        assert!(Complex::new(-0.0, -0.0).tanh().is_identical(&Complex::new(-0.0, -0.0)));
        assert!(Complex::new(0.5, 0.0).tanh().is_identical(&Complex::new(0.5f64.tanh(), 0.0)));
        assert!(Complex::new(0.0, 0.5).tanh().is_identical(&Complex::new(0.0, 0.5f64.tan())));

        let z = Complex::new(1.0, 1.0).tanh();
        assert!(z.approx_eq(&Complex::new(1.0839233273386946, 0.27175258531951174), 1e-14));

        // tanh(iz) = i*tan(z)
        let z = Complex::new(0.4, -1.7);
        let a = Complex::new(-z.im(), z.re()).tanh();
        let t = z.tan();
        assert!(a.approx_eq(&Complex::new(-t.im(), t.re()), 1e-14));

        let z = Complex::new(-25.0, 1.0).tanh();
        assert_eq!(z.re(), -1.0);
        assert!(z.im() > 0.0 && z.im() < 1e-20);

        // near the pole at pi/2 i
        let z = Complex::new(1e-9, HALF_PI).tanh();
        assert!(z.is_finite());
        assert!(z.re() > 1e8);
    }

    #[test]
    fn test_tanh_special() {
        let cases = [
            (INF, 0.0, 1.0, 0.0),
            (-INF, -0.0, -1.0, -0.0),
            (INF, 1.0, NAN, NAN),
            (-INF, -2.0, NAN, NAN),
            (1.0, INF, NAN, NAN),
            (0.0, INF, NAN, NAN),
            (INF, INF, 1.0, 0.0),
            (-INF, NAN, -1.0, 0.0),
            (NAN, 0.0, NAN, 0.0),
            (0.0, NAN, 0.0, NAN),
            (NAN, 1.0, NAN, NAN),
            (1.0, NAN, NAN, NAN),
        ];

        for (re, im, ex_re, ex_im) in cases {
            let z = Complex::new(re, im).tanh();
            assert!(z.is_identical(&Complex::new(ex_re, ex_im)), "tanh({} {}) = {:?}", re, im, z);
        }
    }
}
