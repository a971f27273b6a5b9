//! Power.

use crate::common::consts::MAX_INTEGER_EXPONENT;
use crate::common::util::is_integer;
use crate::common::util::is_odd_integer;
use crate::num::Complex;

impl Complex {
    /// Returns `self` to the power of `e`.
    ///
    /// `z^0 = 1` for any `z`, including zero and NaN. Zero and infinite bases with real exponents
    /// follow the rules of the real `pow`, e.g. `(-Inf)^3 = -Inf`, `(-Inf)^0.5 = NaN`.
    /// Integer exponents are computed by repeated squaring, the exponent `0.5` is a square root,
    /// and all other cases are computed as `exp(e * ln(self))`.
    pub fn pow(&self, e: &Self) -> Self {
        let (x, y) = (self.re(), self.im());
        let (p, q) = (e.re(), e.im());

        if e.is_zero() {
            return Self::one();
        }

        if self.is_nan() || e.is_nan() {
            return Self::nan();
        }

        if self.is_zero() {
            return if p > 0.0 {
                Self::zero()
            } else if q == 0.0 {
                Self::infinity()
            } else {
                Self::nan()
            };
        }

        if q == 0.0 {
            if self.is_infinite() {
                if p < 0.0 {
                    return Self::zero();
                }

                if y == 0.0 {
                    if x > 0.0 {
                        return Self::infinity();
                    }

                    return if is_odd_integer(p) {
                        Self::new(f64::NEG_INFINITY, 0.0f64.copysign(y))
                    } else if is_integer(p) || p.is_infinite() {
                        Self::infinity()
                    } else {
                        Self::nan()
                    };
                }
            }

            if y == 0.0 && x > 0.0 {
                return Self::new(x.powf(p), y);
            }

            if is_integer(p) && p.abs() <= MAX_INTEGER_EXPONENT {
                return if p > 0.0 {
                    self.pow_int(p as u64)
                } else {
                    self.recip().pow_int((-p) as u64)
                };
            }

            if p == 0.5 {
                return self.sqrt();
            }
        }

        e.mul(&self.ln()).exp()
    }

    // Binary exponentiation, n > 0.
    fn pow_int(&self, mut n: u64) -> Self {
        let mut base = self.clone();
        let mut acc = Self::one();

        while n > 0 {
            if n & 1 == 1 {
                acc = acc.mul(&base);
            }
            n >>= 1;
            if n > 0 {
                base = base.mul(&base);
            }
        }

        acc
    }
}
