//! Arctangent.

use crate::common::consts::HALF_PI;
use crate::common::consts::TINY_ARGUMENT;
use crate::num::Complex;
use crate::ops::util::mult_i;
use crate::ops::util::mult_minus_i;

impl Complex {
    /// Returns the arctangent of `self` computed as `-i * atanh(i * self)`.
    ///
    /// The real part of the result is in [-pi/2, pi/2], branch cuts are on the imaginary axis outside [-i, i].
    pub fn atan(&self) -> Self {
        let (x, y) = (self.re(), self.im());

        if self.is_infinite() && !x.is_nan() {
            return Self::new(HALF_PI.copysign(x), 0.0f64.copysign(y));
        }

        if x.is_nan() && y.is_infinite() {
            return Self::new(x, 0.0f64.copysign(y));
        }

        if self.abs() < *TINY_ARGUMENT {
            return self.clone();
        }

        mult_minus_i(&mult_i(self).atanh())
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::common::consts::QUARTER_PI;

    const INF: f64 = f64::INFINITY;
    const NAN: f64 = f64::NAN;

    #[test]
    fn test_atan_special() {
        let cases = [
            (0.0, 0.0, 0.0, 0.0),
            (-0.0, 0.0, -0.0, 0.0),
            (0.0, -0.0, 0.0, -0.0),
            (INF, 1.0, HALF_PI, 0.0),
            (-INF, -1.0, -HALF_PI, -0.0),
            (1.0, INF, HALF_PI, 0.0),
            (-0.0, -INF, -HALF_PI, -0.0),
            (INF, NAN, HALF_PI, 0.0),
            (NAN, INF, NAN, 0.0),
            (NAN, -INF, NAN, -0.0),
            (0.0, 1.0, 0.0, INF),
            (-0.0, -1.0, -0.0, -INF),
            (NAN, 0.0, NAN, 0.0),
            (1.0, NAN, NAN, NAN),
        ];

        for (re, im, ex_re, ex_im) in cases {
            let z = Complex::new(re, im).atan();
            assert!(z.is_identical(&Complex::new(ex_re, ex_im)), "atan({} {}) = {:?}", re, im, z);
        }
    }

    #[test]
    fn test_atan() {
        assert!(Complex::new(1.0, 0.0).atan().approx_eq(&Complex::new(QUARTER_PI, 0.0), 1e-15));
        assert!(Complex::new(1.0, -0.0).atan().im().is_sign_negative());

        let z = Complex::new(1.0, 1.0).atan();
        assert!(z.approx_eq(&Complex::new(1.0172219678978514, 0.40235947810852507), 1e-15));

        let z = Complex::new(-0.5, 3.0).atan();
        assert!(z.approx_eq(&Complex::new(-1.5104844925048453, 0.33529348145985527), 1e-15));

        let z = Complex::new(0.5, -0.5).atan();
        assert!(z.approx_eq(&Complex::new(0.5535743588970452, -0.40235947810852507), 1e-15));

        // branch cut on the imaginary axis
        let z = Complex::new(0.0, 2.0).atan();
        assert!(z.approx_eq(&Complex::new(HALF_PI, 0.5493061443340549), 1e-15));
        let z = Complex::new(-0.0, 2.0).atan();
        assert!(z.approx_eq(&Complex::new(-HALF_PI, 0.5493061443340549), 1e-15));

        let z = Complex::new(1e-10, -2e-10).atan();
        assert!(z.is_identical(&Complex::new(1e-10, -2e-10)));

        // tan(atan(z)) = z
        for (re, im) in [(0.25, 0.5), (-4.0, 1.0), (2.0, -0.9)] {
            let z = Complex::new(re, im);
            assert!(z.atan().tan().approx_eq(&z, 1e-13));
        }
    }
}
