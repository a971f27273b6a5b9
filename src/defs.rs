//! Definitions.

/// Sign.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Sign {
    /// Negative.
    Neg = -1,
    /// Positive.
    Pos = 1,
}

impl Sign {
    /// Changes the sign to the opposite.
    pub fn invert(&self) -> Self {
        match *self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }

    /// Returns true if the sign is positive.
    pub fn is_positive(&self) -> bool {
        *self == Sign::Pos
    }

    /// Returns true if the sign is negative.
    pub fn is_negative(&self) -> bool {
        *self == Sign::Neg
    }

    /// Returns the sign bit of `f`. Zeroes and NaNs have a sign too.
    pub fn of(f: f64) -> Self {
        if f.is_sign_negative() {
            Sign::Neg
        } else {
            Sign::Pos
        }
    }

    /// Returns `f` with the magnitude of `f` and this sign.
    pub fn apply(&self, f: f64) -> f64 {
        match *self {
            Sign::Pos => f.abs(),
            Sign::Neg => -f.abs(),
        }
    }
}

/// Reason of a failed parsing.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum ParseErrorKind {
    /// The input contains nothing but whitespace.
    Empty,

    /// A component is not a valid decimal number, e.g. `1e` or `1.2.3`.
    InvalidNumber,

    /// A character which does not fit the grammar `a`, `bi`, `a+bi`.
    UnexpectedChar(char),
}

/// Possible errors.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Error {
    /// The string does not represent a complex number.
    InvalidFormat(ParseErrorKind),

    /// The operation is not defined for complex numbers, e.g. ordering.
    UnsupportedOperation,
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let repr = match self {
            Error::InvalidFormat(ParseErrorKind::Empty) => "invalid format: empty string",
            Error::InvalidFormat(ParseErrorKind::InvalidNumber) => "invalid format: malformed number",
            Error::InvalidFormat(ParseErrorKind::UnexpectedChar(c)) => {
                return write!(f, "invalid format: unexpected character '{}'", c);
            }
            Error::UnsupportedOperation => "operation is not supported for complex numbers",
        };
        f.write_str(repr)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_sign() {
        assert_eq!(Sign::of(-0.0), Sign::Neg);
        assert_eq!(Sign::of(0.0), Sign::Pos);
        assert_eq!(Sign::of(f64::NEG_INFINITY), Sign::Neg);
        assert_eq!(Sign::Pos.invert(), Sign::Neg);
        assert!(Sign::Neg.apply(0.0).is_sign_negative());
        assert_eq!(Sign::Pos.apply(-2.5), 2.5);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::InvalidFormat(ParseErrorKind::UnexpectedChar('x')).to_string(),
            "invalid format: unexpected character 'x'"
        );
        assert_eq!(
            Error::UnsupportedOperation.to_string(),
            "operation is not supported for complex numbers"
        );
    }
}
