//! Elementary arithmetic.

use crate::common::util::unit_box;
use crate::num::Complex;
use crate::ops::util::inf_times;

impl Complex {
    /// Adds `z2` to `self` and returns the result of the addition.
    pub fn add(&self, z2: &Self) -> Self {
        Self::new(self.re() + z2.re(), self.im() + z2.im())
    }

    /// Subtracts `z2` from `self` and returns the result of the subtraction.
    pub fn sub(&self, z2: &Self) -> Self {
        Self::new(self.re() - z2.re(), self.im() - z2.im())
    }

    /// Returns `-self`. Both signs are inverted, including signs of zeroes and NaNs.
    pub fn neg(&self) -> Self {
        Self::new(-self.re(), -self.im())
    }

    /// Returns the complex conjugate of `self`.
    pub fn conj(&self) -> Self {
        Self::new(self.re(), -self.im())
    }

    /// Adds the real number `x`. The imaginary part is kept as is, including the sign of zero.
    pub fn add_real(&self, x: f64) -> Self {
        Self::new(self.re() + x, self.im())
    }

    /// Subtracts the real number `x`. The imaginary part is kept as is.
    pub fn sub_real(&self, x: f64) -> Self {
        Self::new(self.re() - x, self.im())
    }

    /// Multiplies both parts by the real number `x`.
    pub fn mul_real(&self, x: f64) -> Self {
        Self::new(self.re() * x, self.im() * x)
    }

    /// Divides both parts by the real number `x`.
    pub fn div_real(&self, x: f64) -> Self {
        Self::new(self.re() / x, self.im() / x)
    }

    /// Multiplies `self` by `z2` and returns the result of the multiplication.
    ///
    /// Any NaN part in an operand gives `NaN + NaNi`. A product containing the indeterminate
    /// form `0 * Inf` is `NaN + NaNi` as a whole. Other products of infinite operands
    /// are recovered to an infinity.
    pub fn mul(&self, z2: &Self) -> Self {
        let (a, b, c, d) = (self.re(), self.im(), z2.re(), z2.im());

        if self.is_nan() || z2.is_nan() {
            return Self::nan();
        }

        let x = a * c - b * d;
        let y = a * d + b * c;

        if x.is_nan() || y.is_nan() {
            if [(a, c), (b, d), (a, d), (b, c)]
                .iter()
                .any(|&(p, q)| (p == 0.0 && q.is_infinite()) || (p.is_infinite() && q == 0.0))
            {
                return Self::nan();
            }

            // Inf - Inf in the sum of products
            let (a, b) = if self.is_infinite() { (unit_box(a), unit_box(b)) } else { (a, b) };
            let (c, d) = if z2.is_infinite() { (unit_box(c), unit_box(d)) } else { (c, d) };

            return Self::new(inf_times(a * c - b * d), inf_times(a * d + b * c));
        }

        Self::new(x, y)
    }

    /// Divides `self` by `z2` and returns the result of the division.
    ///
    /// Division by zero gives an infinity, `0/0` gives `NaN + NaNi`.
    /// Finite numbers divided by infinities give zeroes with the sign of the respective dot product.
    /// The general case uses Kahan's scaling to avoid overflow of intermediate values.
    pub fn div(&self, z2: &Self) -> Self {
        let (a, b, c, d) = (self.re(), self.im(), z2.re(), z2.im());

        let num_finite = self.is_finite();
        let den_finite = z2.is_finite();

        if c == 0.0 && d == 0.0 {
            return if self.is_nan() || self.is_zero() {
                Self::nan()
            } else {
                Self::new(inf_times(a), inf_times(b))
            };
        }

        if a == 0.0 && b == 0.0 && den_finite {
            return Self::new(0.0f64.copysign(a * c + b * d), 0.0f64.copysign(b * c - a * d));
        }

        if num_finite && z2.is_nan() {
            return if c.is_infinite() || d.is_infinite() {
                // quadrant of the numerator
                Self::new(0.0f64.copysign(a), 0.0f64.copysign(b))
            } else {
                Self::nan()
            };
        }

        if num_finite && !den_finite {
            let (c, d) = (unit_box(c), unit_box(d));
            return Self::new(0.0 * (a * c + b * d), 0.0 * (b * c - a * d));
        }

        if c.is_infinite() && d.is_infinite() {
            if a.is_nan() && b == 0.0 {
                return Self::new(0.0f64.copysign(c), 0.0f64.copysign(-d));
            }
            if a == 0.0 && b.is_nan() {
                return Self::new(0.0f64.copysign(d), 0.0f64.copysign(c));
            }
        }

        if !self.is_nan() && !num_finite && den_finite {
            let (a, b) = (unit_box(a), unit_box(b));
            return Self::new(inf_times(a * c + b * d), inf_times(b * c - a * d));
        }

        if !num_finite || !den_finite {
            return Self::nan();
        }

        let (x, y) = kahan_div(a, b, c, d);

        Self::new(x, y)
    }

    /// Returns `1 / self`.
    pub fn recip(&self) -> Self {
        Self::one().div(self)
    }
}

// (a + bi) / (c + di) for finite values and nonzero denominator.
fn kahan_div(a: f64, b: f64, c: f64, d: f64) -> (f64, f64) {
    if c.abs() >= d.abs() {
        let r = d / c;
        let den = c + d * r;
        if r != 0.0 {
            ((a + b * r) / den, (b - a * r) / den)
        } else {
            ((a + axis_mul(d, b / c)) / den, (b - axis_mul(d, a / c)) / den)
        }
    } else {
        let r = c / d;
        let den = c * r + d;
        if r != 0.0 {
            ((a * r + b) / den, (b * r - a) / den)
        } else {
            ((axis_mul(c, a / d) + b) / den, (axis_mul(c, b / d) - a) / den)
        }
    }
}

// Product of the underflowed part `t` of the denominator and a quotient which may overflow.
// Zero `t` gives a signed zero instead of `0 * Inf`.
fn axis_mul(t: f64, q: f64) -> f64 {
    if t == 0.0 {
        t * q.signum()
    } else {
        t * q
    }
}
