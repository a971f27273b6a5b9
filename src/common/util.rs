//! Auxiliary functions.

use crate::defs::Sign;

/// Class of a single floating point component.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flavor {
    /// Signed zero.
    Zero(Sign),
    /// Finite nonzero number, including subnormal numbers.
    Value(Sign),
    /// Signed infinity.
    Inf(Sign),
    /// Not a number.
    NaN,
}

impl Flavor {
    /// Classifies `f`.
    pub fn of(f: f64) -> Self {
        if f.is_nan() {
            Flavor::NaN
        } else if f.is_infinite() {
            Flavor::Inf(Sign::of(f))
        } else if f == 0.0 {
            Flavor::Zero(Sign::of(f))
        } else {
            Flavor::Value(Sign::of(f))
        }
    }
}

/// Projects an infinity onto a unit and anything else onto a zero, keeping the sign bit.
/// Used to recover infinite results from indeterminate forms.
pub fn unit_box(f: f64) -> f64 {
    if f.is_infinite() {
        1.0f64.copysign(f)
    } else {
        0.0f64.copysign(f)
    }
}

/// Replaces NaN with a zero, keeping the sign bit.
pub fn nan_to_zero(f: f64) -> f64 {
    if f.is_nan() {
        0.0f64.copysign(f)
    } else {
        f
    }
}

/// True if `f` is a finite integer.
pub fn is_integer(f: f64) -> bool {
    f.is_finite() && f.fract() == 0.0
}

/// True if `f` is an odd integer.
pub fn is_odd_integer(f: f64) -> bool {
    is_integer(f) && (f % 2.0).abs() == 1.0
}

/// Bitwise identity of two components: NaN is identical to NaN, `-0` is not identical to `+0`.
pub fn same(a: f64, b: f64) -> bool {
    if a.is_nan() || b.is_nan() {
        a.is_nan() && b.is_nan()
    } else {
        a == b && a.is_sign_negative() == b.is_sign_negative()
    }
}
