//! Logarithms base 2, base 10 and arbitrary base.

use crate::common::consts::LOG10_E;
use crate::common::consts::LOG2_E;
use crate::num::Complex;

impl Complex {
    /// Returns the logarithm base 2 of `self`.
    pub fn log2(&self) -> Self {
        self.ln().mul_real(LOG2_E)
    }

    /// Returns the logarithm base 10 of `self`.
    pub fn log10(&self) -> Self {
        self.ln().mul_real(LOG10_E)
    }

    /// Returns the logarithm of `self` with the base `b`.
    pub fn log(&self, b: &Self) -> Self {
        self.ln().div(&b.ln())
    }
}
