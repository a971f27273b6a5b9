//! Complex number parsing and formatting.

use crate::defs::Error;
use crate::num::Complex;
use core::fmt::Write;

// Magnitudes outside [SCI_MIN, SCI_MAX) are written in scientific notation.
const SCI_MIN: f64 = 1e-5;
const SCI_MAX: f64 = 1e16;

impl Complex {
    /// Parses the number from the string `s` in algebraic form: `a`, `bi`, `a+bi`, `a-bi`.
    /// The coefficient of the imaginary unit can be omitted, as in `i`, `-i`, `2+i`.
    /// Parts are decimal numbers with an optional exponent, e.g. `1.5e-3`,
    /// or one of the words `inf`, `infinity`, `nan` in any case.
    /// Leading and trailing whitespace is ignored.
    ///
    /// ## Errors
    ///
    ///  - InvalidFormat: the string is empty, contains an invalid number, or does not fit the grammar.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let ps = crate::parser::parse(s)?;
        let (re, im) = ps.parts();
        Ok(Self::new(re, im))
    }

    /// Formats the number.
    ///
    /// The explicit form always contains both parts and the imaginary unit, including zero parts
    /// and their signs, e.g. `1-0i`, `-0+2.5i`, `NaN+Infinityi`. Parsing the explicit form restores the number exactly.
    ///
    /// The short form omits a zero imaginary part, a zero real part, and a unit coefficient of the imaginary unit,
    /// e.g. `1`, `2.5i`, `-i`, `3+i`. Zero is written as `0`.
    pub fn format(&self, explicit: bool) -> String {
        let mut s = String::new();
        let (re, im) = (self.re(), self.im());

        if explicit {
            write_part(&mut s, re);
            write_imag_term(&mut s, im, false);
        } else if self.is_zero() {
            s.push('0');
        } else if im == 0.0 {
            write_part(&mut s, re);
        } else if re == 0.0 {
            if im.abs() == 1.0 {
                if im < 0.0 {
                    s.push('-');
                }
                s.push('i');
            } else {
                write_part(&mut s, im);
                s.push('i');
            }
        } else {
            write_part(&mut s, re);
            write_imag_term(&mut s, im, true);
        }

        s
    }
}

fn write_part(s: &mut String, f: f64) {
    if f.is_nan() {
        s.push_str("NaN");
    } else if f.is_infinite() {
        s.push_str(if f > 0.0 { "Infinity" } else { "-Infinity" });
    } else if f != 0.0 && (f.abs() < SCI_MIN || f.abs() >= SCI_MAX) {
        let _ = write!(s, "{:e}", f);
    } else {
        let _ = write!(s, "{}", f);
    }
}

// Writes `+bi` or `-bi`.
fn write_imag_term(s: &mut String, im: f64, omit_unit: bool) {
    s.push(if im.is_sign_negative() && !im.is_nan() { '-' } else { '+' });

    let m = if im.is_nan() { im } else { im.abs() };

    if !(omit_unit && m == 1.0) {
        write_part(s, m);
    }

    s.push('i');
}

#[cfg(test)]
mod tests {

    use super::*;

    const INF: f64 = f64::INFINITY;
    const NAN: f64 = f64::NAN;

    #[test]
    fn test_format() {
        let short = [
            (1.0, 0.0, "1"),
            (0.0, 0.0, "0"),
            (-0.0, -0.0, "0"),
            (-2.5, -0.0, "-2.5"),
            (0.0, 1.0, "i"),
            (-0.0, -1.0, "-i"),
            (0.0, 2.5, "2.5i"),
            (3.0, 1.0, "3+i"),
            (3.0, -1.0, "3-i"),
            (1.0, -2.0, "1-2i"),
            (1e20, 1e-7, "1e20+1e-7i"),
            (0.0001, 123456.0, "0.0001+123456i"),
            (INF, NAN, "Infinity+NaNi"),
            (NAN, 0.0, "NaN"),
            (-INF, -INF, "-Infinity-Infinityi"),
        ];

        for (re, im, s) in short {
            assert_eq!(Complex::new(re, im).format(false), s);
        }

        let explicit = [
            (1.0, 0.0, "1+0i"),
            (1.0, -0.0, "1-0i"),
            (-0.0, 0.0, "-0+0i"),
            (0.0, 1.0, "0+1i"),
            (0.0, -1.0, "0-1i"),
            (-1.5e-300, 2.0, "-1.5e-300+2i"),
            (NAN, INF, "NaN+Infinityi"),
        ];

        for (re, im, s) in explicit {
            assert_eq!(Complex::new(re, im).format(true), s);
        }
    }

    #[test]
    fn test_format_parse() {
        let values = [0.0, -0.0, 1.0, -1.0, 0.1, -123.456, 1e300, -2.5e-310, 1e-5, 9.99e15, INF, -INF, NAN];

        for re in values {
            for im in values {
                let z = Complex::new(re, im);

                let s = z.format(true);
                let p = Complex::parse(&s).unwrap();
                assert!(p.is_identical(&z), "{} -> {:?}", s, p);

                // short form loses signs of zero parts
                let s = z.format(false);
                let p = Complex::parse(&s).unwrap();
                assert!(p == z || (p.is_nan() && z.is_nan()), "{} -> {:?}", s, p);
            }
        }
    }

    #[test]
    fn test_parse() {
        let z = Complex::parse("-4.2i").unwrap();
        assert!(z.is_identical(&Complex::new(0.0, -4.2)));

        assert!(Complex::parse("1+2").is_err());
        assert!(Complex::parse("").is_err());
    }
}
