//! Hyperbolic arcsecant.

use crate::common::consts::LN_2;
use crate::num::Complex;
use crate::ops::util::recip_dir;

impl Complex {
    /// Returns the hyperbolic arcsecant of `self` computed as `acosh(1 / self)`.
    pub fn asech(&self) -> Self {
        let m = self.abs();

        // acosh(w) = ln(2|w|) + arg(w)*i for large w
        if !self.is_zero() && m < f64::MIN_POSITIVE {
            let (wx, wy) = recip_dir(self);
            return Self::new(LN_2 - m.ln(), wy.atan2(wx));
        }

        self.recip().acosh()
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
    fn test_asech() {
        assert!(Complex::new(1.0, 0.0).asech().is_identical(&Complex::new(0.0, 0.0)));
        assert!(Complex::new(0.0, 0.0).asech().is_identical(&Complex::new(INF, 0.0)));
        assert!(Complex::new(INF, 1.0).asech().is_identical(&Complex::new(0.0, HALF_PI)));
        assert!(Complex::new(1.0, NAN).asech().is_nan());

        let z = Complex::new(2.0, 0.0).asech();
        assert!(z.approx_eq(&Complex::new(0.0, PI / 3.0), 1e-15));

        let z = Complex::new(0.5, 0.0).asech();
        assert!(z.approx_eq(&Complex::new(1.3169578969248166, 0.0), 1e-15));

        let z = Complex::new(1.0, 1.0).asech();
        assert!(z.approx_eq(&Complex::new(0.5306375309525178, -1.1185178796437059), 1e-15));

        let z = Complex::new(-0.5, 3.0).asech();
        assert!(z.approx_eq(&Complex::new(0.3193004643129118, -1.6222299676245193), 1e-14));

        let z = Complex::new(0.5, -0.5).asech();
        assert!(z.approx_eq(&Complex::new(1.0612750619050357, 0.9045568943023813), 1e-15));

        // subnormal arguments
        let t = 1e-310;
        let m = Complex::new(t, t).abs();
        let z = Complex::new(t, t).asech();
        assert!(z.approx_eq(&Complex::new(LN_2 - m.ln(), -QUARTER_PI), 1e-15));
        let z = Complex::new(-t, 0.0).asech();
        assert!(z.approx_eq(&Complex::new(LN_2 - t.ln(), -PI), 1e-15));

        // conjugate symmetry
        for (re, im) in [(0.3, 0.7), (-2.0, 1e-5), (1e-310, 2e-310), (-1e5, -3.0)] {
            let z = Complex::new(re, im);
            assert!(z.conj().asech().is_identical(&z.asech().conj()), "asech({:?})", z);
        }

        // sech(asech(z)) = z
        for (re, im) in [(0.2, -0.1), (3.0, 4.0), (-0.9, 0.05)] {
            let z = Complex::new(re, im);
            assert!(z.asech().sech().approx_eq(&z, 1e-13));
        }
    }
}
