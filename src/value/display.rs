//! Text and JSON renderings of [`Value`].

use std::fmt;

use serde::Serialize;
use serde::ser::{SerializeMap, SerializeSeq};

use super::Value;
use crate::foundation::math::format_number;

// 2^53: integral numbers below this print without a fraction.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Canonical display text for `value`.
///
/// Primitives render as their plain text (`null` as the empty string),
/// colors as premultiplied `rgba(..)`, formatted text and images as their own
/// text, and arrays/objects as JSON. Lossy for non-primitives: meant for
/// display, not for parsing back.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(*n),
        Value::String(s) => s.clone(),
        Value::Color(c) => c.to_premultiplied_string(),
        Value::Formatted(f) => f.to_string(),
        Value::ResolvedImage(img) => img.to_string(),
        Value::Collator(_) | Value::Array(_) | Value::Object(_) | Value::Evaluable(_) => {
            serde_json::to_string(value).unwrap_or_default()
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&stringify(self))
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Value::Null | Value::Evaluable(_) => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) if n.fract() == 0.0 && n.abs() < MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Color(c) => serializer.serialize_str(&c.to_premultiplied_string()),
            Value::Collator(c) => c.serialize(serializer),
            Value::Formatted(f) => f.serialize(serializer),
            Value::ResolvedImage(img) => img.serialize(serializer),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/value/display.rs"]
mod tests;
