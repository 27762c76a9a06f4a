//! Numeric coercion for request fields.
//!
//! The console reads every value from a text input, so a field may arrive as a JSON
//! number or as a numeric string. Both are accepted here; anything else (empty strings,
//! `null`, booleans, free text) fails deserialization and never reaches the engine.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};

struct NumberVisitor;

impl<'de> Visitor<'de> for NumberVisitor {
    type Value = f64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number or a numeric string")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            return Err(E::custom("expected a number, got an empty string"));
        }
        trimmed
            .parse::<f64>()
            .map_err(|_| E::custom(format!("expected a number, got \"{v}\"")))
    }
}

/// `deserialize_with` target for required numeric fields.
pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(NumberVisitor)
}

struct OptionalNumberVisitor;

impl<'de> Visitor<'de> for OptionalNumberVisitor {
    type Value = Option<f64>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("null, a number or a numeric string")
    }

    fn visit_none<E: de::Error>(self) -> Result<Option<f64>, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Option<f64>, E> {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        number(deserializer).map(Some)
    }
}

/// `deserialize_with` target for optional numeric fields (use together with `#[serde(default)]`).
pub fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_option(OptionalNumberVisitor)
}
