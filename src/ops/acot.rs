//! Arccotangent.

use crate::common::consts::HALF_PI;
use crate::common::consts::PI;
use crate::num::Complex;

impl Complex {
    /// Returns the arccotangent of `self` computed as `atan(1 / self)`.
    ///
    /// In the third quadrant the result is reflected as `acot(z) = pi - acot(-z)`,
    /// so the real part of the result is in [-pi/2, pi].
    pub fn acot(&self) -> Self {
        if self.re() < 0.0 && self.im() < 0.0 {
            let w = self.neg().acot_principal();
            return Self::new(PI - w.re(), -w.im());
        }

        self.acot_principal()
    }

    fn acot_principal(&self) -> Self {
        let (x, y) = (self.re(), self.im());

        if self.is_zero() {
            return Self::new(HALF_PI.copysign(x), -y);
        }

        if x == 0.0 && y.abs() == 1.0 {
            return Self::new(x, f64::INFINITY.copysign(-y));
        }

        self.recip().atan()
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    const INF: f64 = f64::INFINITY;
    const NAN: f64 = f64::NAN;

    #[test]
    fn test_acot() {
        assert!(Complex::new(0.0, 0.0).acot().is_identical(&Complex::new(HALF_PI, -0.0)));
        assert!(Complex::new(-0.0, 0.0).acot().is_identical(&Complex::new(-HALF_PI, -0.0)));
        assert!(Complex::new(0.0, 1.0).acot().is_identical(&Complex::new(0.0, -INF)));
        assert!(Complex::new(-0.0, -1.0).acot().is_identical(&Complex::new(-0.0, INF)));
        assert!(Complex::new(INF, 0.0).acot().is_identical(&Complex::new(0.0, 0.0)));
        assert!(Complex::new(NAN, 1.0).acot().is_nan());

        let z = Complex::new(1.0, 1.0).acot();
        assert!(z.approx_eq(&Complex::new(0.5535743588970452, -0.40235947810852507), 1e-15));

        let z = Complex::new(-1.0, 1.0).acot();
        assert!(z.approx_eq(&Complex::new(-0.5535743588970452, -0.40235947810852507), 1e-15));

        // reflected third quadrant
        let z = Complex::new(-1.0, -1.0).acot();
        assert!(z.approx_eq(&Complex::new(PI - 0.5535743588970452, 0.40235947810852507), 1e-15));

        let z = Complex::new(2.0, 0.0).acot();
        assert!(z.approx_eq(&Complex::new(0.5f64.atan(), 0.0), 1e-15));

        // cot(acot(z)) = z
        for (re, im) in [(0.25, 0.5), (-4.0, 1.0), (2.0, -0.9), (-0.3, -0.2)] {
            let z = Complex::new(re, im);
            assert!(z.acot().cot().approx_eq(&z, 1e-13));
        }
    }
}
