//! Serde adapter that carries a [`Decimal`] price as a JSON number.
//!
//! Prices go out through their decimal text, so `19.99` is written as the
//! shortest float that reads back as `19.99`, and come back through the
//! float's shortest text form. Typical two-place prices survive the trip
//! unchanged. Numeric strings are accepted on the way in as well.

use rust_decimal::Decimal;
use serde::{Deserializer, Serializer, de};
use std::fmt;
use std::str::FromStr;

pub fn serialize<S: Serializer>(
    value: &Decimal,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let float = f64::from_str(&value.to_string())
        .map_err(serde::ser::Error::custom)?;
    serializer.serialize_f64(float)
}

pub fn deserialize<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Decimal, D::Error> {
    deserializer.deserialize_any(PriceVisitor)
}

/// Parse decimal text, accepting exponent notation as a fallback.
/// Digit separators are not accepted.
pub fn parse(text: &str) -> Option<Decimal> {
    if text.contains('_') {
        return None;
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

struct PriceVisitor;

impl de::Visitor<'_> for PriceVisitor {
    type Value = Decimal;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a numeric price")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Decimal, E> {
        Ok(Decimal::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Decimal, E> {
        Ok(Decimal::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Decimal, E> {
        if !v.is_finite() {
            return Err(E::custom(format!("price out of range: {v}")));
        }
        parse(&v.to_string())
            .ok_or_else(|| E::custom(format!("price out of range: {v}")))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Decimal, E> {
        parse(v.trim())
            .ok_or_else(|| E::custom(format!("invalid price: {v:?}")))
    }
}
