//! Deserialization of Complex.

use core::fmt::Formatter;

use crate::Complex;
use serde::de::Error;
use serde::de::SeqAccess;
use serde::de::Visitor;
use serde::{Deserialize, Deserializer};

pub struct ComplexVisitor {}

impl<'de> Deserialize<'de> for Complex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ComplexVisitor {})
    }
}

impl<'de> Visitor<'de> for ComplexVisitor {
    type Value = Complex;

    fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
        write!(formatter, "`String`, `Number`, or a sequence `[re, im]`")
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Complex::from_real(v as f64))
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Complex::from_real(v as f64))
    }

    fn visit_f64<E: Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Complex::from_real(v))
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        match Complex::parse(v) {
            Ok(o) => Ok(o),
            Err(e) => Err(Error::custom(format!("{e}"))),
        }
    }

    fn visit_string<E: Error>(self, v: String) -> Result<Self::Value, E> {
        self.visit_str(&v)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let re: f64 = seq.next_element()?.ok_or_else(|| Error::invalid_length(0, &self))?;
        let im: f64 = seq.next_element()?.ok_or_else(|| Error::invalid_length(1, &self))?;

        if seq.next_element::<f64>()?.is_some() {
            return Err(Error::invalid_length(3, &self));
        }

        Ok(Complex::new(re, im))
    }
}
