//! Static constants and the numeric policy.
//!
//! All thresholds used by the operations are defined here. Values depending on
//! runtime functions are computed once on first use.

use lazy_static::lazy_static;

/// pi.
pub const PI: f64 = core::f64::consts::PI;

/// pi / 2.
pub const HALF_PI: f64 = core::f64::consts::FRAC_PI_2;

/// pi / 4.
pub const QUARTER_PI: f64 = core::f64::consts::FRAC_PI_4;

/// 3 * pi / 4.
pub const THREE_QUARTERS_PI: f64 = 3.0 * core::f64::consts::FRAC_PI_4;

/// 2 * pi.
pub const TWO_PI: f64 = core::f64::consts::TAU;

/// ln(2).
pub const LN_2: f64 = core::f64::consts::LN_2;

/// 1 / ln(2).
pub const LOG2_E: f64 = core::f64::consts::LOG2_E;

/// 1 / ln(10).
pub const LOG10_E: f64 = core::f64::consts::LOG10_E;

/// Machine epsilon.
pub const EPSILON: f64 = f64::EPSILON;

/// Crossover between `log1p` and `log` for the imaginary part of asin/acos.
pub const A_CROSSOVER: f64 = 10.0;

/// Crossover between `asin` and `atan` for the real part of asin/acos.
pub const B_CROSSOVER: f64 = 0.6417;

/// Crossover between the `log1p` form and the direct ratio form for the real part of atanh.
/// Below it the argument of `log1p` is small and the ratio form would cancel.
pub const ATANH_CROSSOVER: f64 = 0.3;

/// Beyond this magnitude of the hyperbolic argument `cosh(2t)` dominates any
/// bounded term up to `2 * exp(-2t) < EPSILON / 2`, i.e. `t > ln(4 / EPSILON) / 2 ~ 18.7`.
pub const ASYMPTOTE_THRESHOLD: f64 = 20.0;

/// Magnitude of trigonometric residues which `polar` rounds to zero,
/// so that `polar(1, pi/2)` is exactly `i`.
/// Kept for compatibility: `cos(pi/2)` evaluates to `6.1e-17`, any bound above it works.
pub const POLAR_RESIDUE: f64 = 1e-15;

/// Largest integer exponent evaluated with binary exponentiation in `pow`.
/// Every integer below it is exactly representable.
pub const MAX_INTEGER_EXPONENT: f64 = 9007199254740992.0;

lazy_static! {

    /// Upper bound of the safe region of the Hull et al. algorithm: sqrt(MAX) / 8.
    pub static ref ASIN_SAFE_MAX: f64 = f64::MAX.sqrt() / 8.0;

    /// Lower bound of the safe region of the Hull et al. algorithm: sqrt(MIN) * 4.
    pub static ref ASIN_SAFE_MIN: f64 = f64::MIN_POSITIVE.sqrt() * 4.0;

    /// Upper bound for the squares in atanh: sqrt(MAX) / 2.
    pub static ref ATANH_SAFE_MAX: f64 = f64::MAX.sqrt() / 2.0;

    /// Lower bound for the squares in atanh: sqrt(MIN) * 2.
    pub static ref ATANH_SAFE_MIN: f64 = f64::MIN_POSITIVE.sqrt() * 2.0;

    /// Components above it are scaled down before `sqrt` computes the magnitude.
    pub static ref SQRT_SAFE_MAX: f64 = f64::MAX / 4.0;

    /// Components below it are scaled up before `sqrt` computes the magnitude.
    pub static ref SQRT_SAFE_MIN: f64 = f64::MIN_POSITIVE * 4.0;

    /// Below this magnitude `atan(z) = z`, `atanh(z) = z`, `asinh(z) = z` to working precision:
    /// the cubic term `|z|^2 / 3` is under `EPSILON / 2`.
    pub static ref TINY_ARGUMENT: f64 = EPSILON.sqrt();

    /// Shared denominators of tan, cot, sec, csc and their hyperbolic counterparts below this value
    /// mean the argument is near a pole, where the closed form loses half of the digits
    /// to cancellation and the quotient form is used instead.
    pub static ref POLE_THRESHOLD: f64 = EPSILON.sqrt();
}
