//! Serde helpers that put monetary amounts on the wire as JSON numbers.
//!
//! Conversion goes through the decimal string form, so `18877.68` is emitted
//! as the nearest float to `18877.68` rather than an accumulated approximation.
//! Zero goes out as the integer `0`.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serializer, de::Error};

pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_zero() {
        return serializer.serialize_i64(0);
    }

    let float = value
        .to_string()
        .parse::<f64>()
        .map_err(serde::ser::Error::custom)?;
    serializer.serialize_f64(float)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let float = f64::deserialize(deserializer)?;
    if !float.is_finite() {
        return Err(D::Error::custom("amount must be finite"));
    }
    Decimal::from_str(&float.to_string()).map_err(D::Error::custom)
}
