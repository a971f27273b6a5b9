//! Serialization of Complex.
//! A number is serialized as a string in the explicit form, which preserves signs of zeros and non-finite parts.

use crate::Complex;
use serde::{Serialize, Serializer};

impl Serialize for Complex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.format(true))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::to_string;

    use crate::Complex;

    #[test]
    fn to_json() {
        assert_eq!(to_string(&Complex::zero()).unwrap(), "\"0+0i\"");
        assert_eq!(to_string(&Complex::new(-0.5, -2.0)).unwrap(), "\"-0.5-2i\"");
        assert_eq!(
            to_string(&Complex::new(f64::NEG_INFINITY, f64::NAN)).unwrap(),
            "\"-Infinity+NaNi\""
        );
        assert_eq!(
            to_string(&[Complex::one(), Complex::i()]).unwrap(),
            "[\"1+0i\",\"0+1i\"]"
        );
    }
}
