//! Parser parses complex numbers in algebraic form: `a`, `bi`, `a+bi`, `a-bi`, `i`, `a+i`.

use crate::defs::Error;
use crate::defs::ParseErrorKind;
use crate::defs::Sign;
use core::str::Chars;
use smallvec::SmallVec;

// Words accepted as a component value.
const SPECIAL_WORDS: [&str; 3] = ["inf", "infinity", "nan"];

pub struct ParserState<'a> {
    chars: Chars<'a>,
    cur_ch: Option<char>,
    buf: SmallVec<[u8; 32]>,
    re: f64,
    im: f64,
}

impl<'a> ParserState<'a> {
    fn new(s: &'a str) -> Self {
        ParserState {
            chars: s.chars(),
            cur_ch: None,
            buf: SmallVec::new(),
            re: 0.0,
            im: 0.0,
        }
    }

    // Returns next character of a string in lower case,
    // or None if string end reached.
    fn next_char(&mut self) -> Option<char> {
        self.cur_ch = self.chars.next().map(|c| c.to_ascii_lowercase());
        self.cur_ch
    }

    fn cur_char(&self) -> Option<char> {
        self.cur_ch
    }

    // Moves the current character into the buffer.
    fn take_char(&mut self, c: char) {
        self.buf.push(c as u8);
        self.next_char();
    }

    /// Returns the real and the imaginary parts.
    pub fn parts(&self) -> (f64, f64) {
        (self.re, self.im)
    }
}

// A parsed term of the sum.
struct Term {
    value: f64,
    imaginary: bool,
}

/// Parse a complex number. Leading and trailing ASCII whitespace is ignored.
pub fn parse(s: &str) -> Result<ParserState<'_>, Error> {
    let s = s.trim_matches(|c: char| c.is_ascii_whitespace());

    if s.is_empty() {
        return Err(Error::InvalidFormat(ParseErrorKind::Empty));
    }

    let mut parser_state = ParserState::new(s);
    parser_state.next_char();

    let first = parse_term(&mut parser_state)?;

    if first.imaginary {
        parser_state.im = first.value;
    } else {
        parser_state.re = first.value;

        if let Some('+' | '-') = parser_state.cur_char() {
            let second = parse_term(&mut parser_state)?;
            if !second.imaginary {
                return Err(Error::InvalidFormat(ParseErrorKind::InvalidNumber));
            }
            parser_state.im = second.value;
        }
    }

    if let Some(c) = parser_state.cur_char() {
        return Err(Error::InvalidFormat(ParseErrorKind::UnexpectedChar(c)));
    }

    Ok(parser_state)
}

// Parses optional sign, a number or a special word, and an optional imaginary unit.
fn parse_term(parser_state: &mut ParserState) -> Result<Term, Error> {
    parser_state.buf.clear();

    let mut sign = Sign::Pos;
    if let Some(c @ ('+' | '-')) = parser_state.cur_char() {
        if c == '-' {
            sign = Sign::Neg;
        }
        parser_state.take_char(c);
    }

    let body_start = parser_state.buf.len();
    let mut imaginary = false;

    match parser_state.cur_char() {
        Some('0'..='9' | '.') => {
            parse_digits(parser_state);
            if Some('i') == parser_state.cur_char() {
                imaginary = true;
                parser_state.next_char();
            }
        }
        Some(c) if c.is_ascii_alphabetic() => {
            imaginary = parse_word(parser_state)?;
        }
        Some(c) => return Err(Error::InvalidFormat(ParseErrorKind::UnexpectedChar(c))),
        None => return Err(Error::InvalidFormat(ParseErrorKind::InvalidNumber)),
    }

    // bare imaginary unit
    let value = if imaginary && parser_state.buf.len() == body_start {
        sign.apply(1.0)
    } else {
        core::str::from_utf8(&parser_state.buf)
            .ok()
            .and_then(|t| t.parse::<f64>().ok())
            .ok_or(Error::InvalidFormat(ParseErrorKind::InvalidNumber))?
    };

    Ok(Term { value, imaginary })
}

// Decimal digits with an optional fractional part and exponent.
// Validity of the collected text is checked by the number conversion.
fn parse_digits(parser_state: &mut ParserState) {
    let mut exp = false;

    while let Some(c) = parser_state.cur_char() {
        match c {
            '0'..='9' | '.' => parser_state.take_char(c),
            'e' if !exp => {
                exp = true;
                parser_state.take_char(c);
                if let Some(s @ ('+' | '-')) = parser_state.cur_char() {
                    parser_state.take_char(s);
                }
            }
            _ => break,
        }
    }
}

// Parses `i`, `inf`, `infinity`, `nan`, optionally followed by `i`.
// Returns true if the term is imaginary.
fn parse_word(parser_state: &mut ParserState) -> Result<bool, Error> {
    let start = parser_state.buf.len();
    let first = parser_state.cur_char();

    while let Some(c) = parser_state.cur_char() {
        if c.is_ascii_alphabetic() {
            parser_state.take_char(c);
        } else {
            break;
        }
    }

    let word = core::str::from_utf8(&parser_state.buf[start..]).unwrap_or_default();

    let imaginary = if word == "i" {
        parser_state.buf.truncate(start);
        true
    } else if SPECIAL_WORDS.contains(&word) {
        false
    } else if word.len() > 1 && word.ends_with('i') && SPECIAL_WORDS.contains(&&word[..word.len() - 1]) {
        parser_state.buf.pop();
        true
    } else {
        return Err(Error::InvalidFormat(ParseErrorKind::UnexpectedChar(first.unwrap_or('?'))));
    };

    Ok(imaginary)
}

#[cfg(test)]
mod tests {

    use super::*;
    use itertools::iproduct;

    fn parts(s: &str) -> (f64, f64) {
        parse(s).unwrap().parts()
    }

    fn kind(s: &str) -> ParseErrorKind {
        match parse(s) {
            Err(Error::InvalidFormat(k)) => k,
            _ => panic!("{} must fail to parse", s),
        }
    }

    #[test]
    fn test_parser() {
        assert_eq!(parts("1"), (1.0, 0.0));
        assert_eq!(parts("-4.2i"), (0.0, -4.2));
        assert_eq!(parts("i"), (0.0, 1.0));
        assert_eq!(parts("+i"), (0.0, 1.0));
        assert_eq!(parts("-i"), (0.0, -1.0));
        assert_eq!(parts("3+i"), (3.0, 1.0));
        assert_eq!(parts("3-i"), (3.0, -1.0));
        assert_eq!(parts("1.5e3-2.5E-2i"), (1500.0, -0.025));
        assert_eq!(parts("  .5+5.i \t"), (0.5, 5.0));
        assert_eq!(parts("-2e+2+1e2i"), (-200.0, 100.0));

        let (re, im) = parts("-0-0i");
        assert!(re == 0.0 && re.is_sign_negative());
        assert!(im == 0.0 && im.is_sign_negative());

        let (re, im) = parts("0i");
        assert!(re.is_sign_positive() && im == 0.0);

        let (re, im) = parts("-Infinity+NaNi");
        assert_eq!(re, f64::NEG_INFINITY);
        assert!(im.is_nan());

        let (re, im) = parts("nan-infi");
        assert!(re.is_nan());
        assert_eq!(im, f64::NEG_INFINITY);

        assert_eq!(parts("INF"), (f64::INFINITY, 0.0));
        assert_eq!(parts("infinityi"), (0.0, f64::INFINITY));
    }

    #[test]
    fn test_parser_grid() {
        let reals = [("", 0.0), ("2", 2.0), ("-0.25", -0.25), ("1e2", 100.0)];
        let imags = [("", 0.0), ("+i", 1.0), ("-3i", -3.0), ("+.5e1i", 5.0)];

        for ((rs, re), (is, im)) in iproduct!(reals.iter(), imags.iter()) {
            let s = if rs.is_empty() { is.trim_start_matches('+').to_string() } else { format!("{}{}", rs, is) };
            if s.is_empty() {
                continue;
            }
            assert_eq!(parts(&s), (*re, *im), "{}", s);
        }
    }

    #[test]
    fn test_parser_errors() {
        assert_eq!(kind(""), ParseErrorKind::Empty);
        assert_eq!(kind("   "), ParseErrorKind::Empty);
        assert_eq!(kind("1e"), ParseErrorKind::InvalidNumber);
        assert_eq!(kind("1e+i"), ParseErrorKind::InvalidNumber);
        assert_eq!(kind("1.2.3"), ParseErrorKind::InvalidNumber);
        assert_eq!(kind("."), ParseErrorKind::InvalidNumber);
        assert_eq!(kind(".i"), ParseErrorKind::InvalidNumber);
        assert_eq!(kind("1+"), ParseErrorKind::InvalidNumber);
        assert_eq!(kind("1+2"), ParseErrorKind::InvalidNumber);
        assert_eq!(kind("-"), ParseErrorKind::InvalidNumber);
        assert_eq!(kind("1,000"), ParseErrorKind::UnexpectedChar(','));
        assert_eq!(kind("2i+1"), ParseErrorKind::UnexpectedChar('+'));
        assert_eq!(kind("1 + 2i"), ParseErrorKind::UnexpectedChar(' '));
        assert_eq!(kind("abc"), ParseErrorKind::UnexpectedChar('a'));
        assert_eq!(kind("1+ij"), ParseErrorKind::UnexpectedChar('i'));
        assert_eq!(kind("1i2"), ParseErrorKind::UnexpectedChar('2'));
        assert_eq!(kind("*"), ParseErrorKind::UnexpectedChar('*'));
    }
}
