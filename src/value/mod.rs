//! Runtime values produced and consumed by style functions.

mod display;
mod evaluable;
mod text;
mod types;

pub use display::stringify;
pub use evaluable::{Evaluable, Feature};
pub use text::{Collator, Formatted, FormattedSection, ResolvedImage};
pub use types::{Type, classify};

use indexmap::IndexMap;

use crate::color::Color;

/// A value a style function can return or be keyed on.
///
/// `Evaluable` is the one deferred variant: it stands for a value that still
/// depends on `(zoom, feature)` and is only ever produced as a function
/// output, never found inside data.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Absent value.
    Null,
    /// Boolean.
    Bool(bool),
    /// Number (always `f64`).
    Number(f64),
    /// String.
    String(String),
    /// Parsed color.
    Color(Color),
    /// Locale-aware string comparison options.
    Collator(Collator),
    /// Rich text.
    Formatted(Formatted),
    /// Image reference.
    ResolvedImage(ResolvedImage),
    /// Ordered list.
    Array(Vec<Value>),
    /// String-keyed map in insertion order.
    Object(IndexMap<String, Value>),
    /// Deferred computation over `(zoom, feature)`.
    Evaluable(Evaluable),
}

impl Value {
    /// Numeric payload, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// String payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Color payload, if this is a color.
    pub fn as_color(&self) -> Option<&Color> {
        match self {
            Self::Color(c) => Some(c),
            _ => None,
        }
    }

    /// Deferred computation, if this is one.
    pub fn as_evaluable(&self) -> Option<&Evaluable> {
        match self {
            Self::Evaluable(e) => Some(e),
            _ => None,
        }
    }

    /// The runtime type of this value. See [`classify`].
    pub fn type_of(&self) -> Type {
        classify(self)
    }
}

/// `true` when `value` is concrete data: no deferred [`Evaluable`] anywhere in it.
///
/// Checked where values cross in from callers (feature properties), not on
/// stop outputs the compiler built itself.
pub fn is_value(value: &Value) -> bool {
    match value {
        Value::Null
        | Value::Bool(_)
        | Value::Number(_)
        | Value::String(_)
        | Value::Color(_)
        | Value::Collator(_)
        | Value::Formatted(_)
        | Value::ResolvedImage(_) => true,
        Value::Array(items) => items.iter().all(is_value),
        Value::Object(map) => map.values().all(is_value),
        Value::Evaluable(_) => false,
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(json: &serde_json::Value) -> Self {
        Value::from(json.clone())
    }
}

impl<'de> serde::Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <serde_json::Value as serde::Deserialize>::deserialize(deserializer).map(Value::from)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Color> for Value {
    fn from(c: Color) -> Self {
        Self::Color(c)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Array(items)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/value/value.rs"]
mod tests;
