//! Complex number definition, construction, magnitude and phase.

use crate::common::consts::{PI, POLAR_RESIDUE, TWO_PI};
use crate::common::util::same;
use crate::defs::Error;
use core::fmt::Debug;
use core::fmt::Formatter;
use core::sync::atomic::AtomicU64;
use core::sync::atomic::Ordering;

// Bit pattern of a NaN which `hypot` never produces from non-NaN input.
const MAGNITUDE_UNSET: u64 = u64::MAX;

/// Complex number with double precision real and imaginary parts.
///
/// The value is immutable: every operation returns a new number.
/// Both parts may hold any IEEE-754 value including signed zeros, infinities and NaN,
/// and operations follow C99 Annex G in treatment of those values.
pub struct Complex {
    re: f64,
    im: f64,
    magnitude: AtomicU64,
}

impl Complex {
    /// Returns a new number `re + im*i`.
    pub const fn new(re: f64, im: f64) -> Self {
        Complex {
            re,
            im,
            magnitude: AtomicU64::new(MAGNITUDE_UNSET),
        }
    }

    /// Returns a new number with the real part `re` and the imaginary part `+0`.
    pub const fn from_real(re: f64) -> Self {
        Self::new(re, 0.0)
    }

    /// Returns a new number with the real part `+0` and the imaginary part `im`.
    pub const fn from_imag(im: f64) -> Self {
        Self::new(0.0, im)
    }

    /// 0 + 0i
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// 1 + 0i
    pub const fn one() -> Self {
        Self::new(1.0, 0.0)
    }

    /// 0 + 1i
    pub const fn i() -> Self {
        Self::new(0.0, 1.0)
    }

    /// NaN + NaNi
    pub const fn nan() -> Self {
        Self::new(f64::NAN, f64::NAN)
    }

    /// +Infinity + 0i
    pub const fn infinity() -> Self {
        Self::new(f64::INFINITY, 0.0)
    }

    /// Returns a number with the magnitude `magnitude` and the phase `phase`.
    ///
    /// Negative magnitude is turned positive by rotating the phase by pi.
    /// The phase is normalized to (-pi, pi], and trigonometric residues below
    /// `1e-15` are rounded to zero, so `polar(2, pi/2)` is exactly `2i`.
    pub fn polar(magnitude: f64, phase: f64) -> Self {
        if magnitude.is_nan() || phase.is_nan() || phase.is_infinite() {
            return Self::nan();
        }

        let (m, mut p) = if magnitude < 0.0 { (-magnitude, phase + PI) } else { (magnitude, phase) };

        if p > PI || p <= -PI {
            p = p.rem_euclid(TWO_PI);
            if p > PI {
                p -= TWO_PI;
            }
        }

        let (mut s, mut c) = p.sin_cos();

        if c.abs() < POLAR_RESIDUE {
            c = 0.0;
        }

        if s.abs() < POLAR_RESIDUE {
            s = 0.0;
        }

        // infinite magnitude times a rounded zero is an axis, not NaN
        let re = if c == 0.0 { 0.0 } else { m * c };
        let im = if s == 0.0 { 0.0 } else { m * s };

        Self::new(re, im)
    }

    /// Returns the real part.
    #[inline]
    pub fn re(&self) -> f64 {
        self.re
    }

    /// Returns the imaginary part.
    #[inline]
    pub fn im(&self) -> f64 {
        self.im
    }

    /// Returns the magnitude `|z|`. Infinite if any part is infinite, even if the other part is NaN.
    /// The value is computed once and then cached.
    pub fn abs(&self) -> f64 {
        let cached = self.magnitude.load(Ordering::Relaxed);
        if cached != MAGNITUDE_UNSET {
            return f64::from_bits(cached);
        }

        let m = self.re.hypot(self.im);

        // write-once: a concurrent writer has stored the same value
        let _ = self.magnitude.compare_exchange(
            MAGNITUDE_UNSET,
            m.to_bits(),
            Ordering::Relaxed,
            Ordering::Relaxed,
        );

        m
    }

    /// Returns `re^2 + im^2`.
    pub fn norm_sqr(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Returns the phase in the range [-pi, pi]. The sign of zero parts selects the side of the branch cut.
    pub fn arg(&self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Returns the projection of `self` onto the unit circle, or `self` if it is zero.
    pub fn signum(&self) -> Self {
        if self.is_nan() {
            Self::nan()
        } else if self.is_zero() {
            self.clone()
        } else {
            let m = self.abs();
            if m.is_finite() {
                Self::new(self.re / m, self.im / m)
            } else {
                Self::polar(1.0, self.arg())
            }
        }
    }

    /// Returns magnitude and phase of the number.
    pub fn to_polar(&self) -> (f64, f64) {
        (self.abs(), self.arg())
    }

    /// True if both parts are zero of any sign.
    pub fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }

    /// True if the number is `1 + 0i`.
    pub fn is_one(&self) -> bool {
        self.re == 1.0 && self.im == 0.0
    }

    /// True if the number is `0 + 1i`.
    pub fn is_imaginary_unit(&self) -> bool {
        self.re == 0.0 && self.im == 1.0
    }

    /// True if any part is NaN.
    pub fn is_nan(&self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    /// True if any part is infinite. A number with one infinite and one NaN part is infinite.
    pub fn is_infinite(&self) -> bool {
        self.re.is_infinite() || self.im.is_infinite()
    }

    /// True if both parts are finite.
    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// True if the imaginary part is zero of any sign.
    pub fn is_real(&self) -> bool {
        self.im == 0.0
    }

    /// True if the parts of `self` and `other` have identical values: NaN is identical to NaN,
    /// and `-0` is not identical to `+0`.
    pub fn is_identical(&self, other: &Self) -> bool {
        same(self.re, other.re) && same(self.im, other.im)
    }

    /// True if every part of `self` differs from the same part of `other` by at most `tol`
    /// relative to the larger magnitude of the two, or `tol` absolute when both are below 1.
    /// Non-finite parts must be identical.
    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        fn close(a: f64, b: f64, tol: f64) -> bool {
            if !a.is_finite() || !b.is_finite() {
                same(a, b)
            } else {
                (a - b).abs() <= tol * a.abs().max(b.abs()).max(1.0)
            }
        }

        close(self.re, other.re, tol) && close(self.im, other.im, tol)
    }

    /// Complex numbers are not ordered.
    ///
    /// ## Errors
    ///
    ///  - UnsupportedOperation: always.
    pub fn less_than(&self, _other: &Self) -> Result<bool, Error> {
        Err(Error::UnsupportedOperation)
    }

    /// Complex numbers are not ordered.
    ///
    /// ## Errors
    ///
    ///  - UnsupportedOperation: always.
    pub fn greater_than(&self, _other: &Self) -> Result<bool, Error> {
        Err(Error::UnsupportedOperation)
    }

    #[cfg(feature = "random")]
    /// Returns a random number with normal (not subnormal) parts. Each part has a random sign
    /// and a binary exponent in the range from `exp_from` to `exp_to` inclusive.
    /// The exponent range is clamped to the range of normal double precision numbers.
    pub fn random_normal(exp_from: i32, exp_to: i32) -> Self {
        Self::new(random_part(exp_from, exp_to), random_part(exp_from, exp_to))
    }
}

#[cfg(feature = "random")]
fn random_part(exp_from: i32, exp_to: i32) -> f64 {
    let exp_from = exp_from.clamp(f64::MIN_EXP - 1, f64::MAX_EXP - 1);
    let exp_to = exp_to.clamp(exp_from, f64::MAX_EXP - 1);

    let e = if exp_to > exp_from {
        exp_from + (rand::random::<u32>() % (exp_to - exp_from + 1) as u32) as i32
    } else {
        exp_from
    };

    let biased = (e + f64::MAX_EXP - 1) as u64;
    let m = rand::random::<u64>() >> 12;
    let s = (rand::random::<u8>() & 1) as u64;

    f64::from_bits(s << 63 | biased << 52 | m)
}

impl Clone for Complex {
    fn clone(&self) -> Self {
        Complex {
            re: self.re,
            im: self.im,
            magnitude: AtomicU64::new(self.magnitude.load(Ordering::Relaxed)),
        }
    }
}

impl Debug for Complex {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Complex")
            .field("re", &self.re)
            .field("im", &self.im)
            .finish()
    }
}

impl PartialEq for Complex {
    fn eq(&self, other: &Self) -> bool {
        self.re == other.re && self.im == other.im
    }
}
