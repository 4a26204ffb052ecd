//! Boundary (serde) structures for style functions.

use serde::{Deserialize, Serialize};

use crate::foundation::error::{StyleError, StyleResult};

/// A style function exactly as written in a style document.
///
/// `type` and `colorSpace` stay raw strings here; the compiler resolves them
/// so an unknown name is a configuration error rather than a parse error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionSpec {
    /// `exponential`, `interval`, `categorical` or `identity`. Inferred when absent.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Feature property the function reads. Absent for zoom-only functions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    /// Exponential base (zoom axis only for composite functions). Defaults to 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<f64>,
    /// Fallback when the function has no value for an input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    /// `rgb`, `lab` or `hcl`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_space: Option<String>,
    /// `[key, output]` pairs in ascending key order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stops: Option<Vec<Stop>>,
}

impl FunctionSpec {
    /// Parse a function object.
    pub fn from_json(json: &serde_json::Value) -> StyleResult<Self> {
        Self::deserialize(json).map_err(|e| StyleError::serde(e.to_string()))
    }

    /// Stops, or an empty slice when none were given.
    pub fn stops(&self) -> &[Stop] {
        self.stops.as_deref().unwrap_or_default()
    }

    /// `true` when the first stop is keyed by `{zoom, value}`.
    pub fn is_zoom_and_property(&self) -> bool {
        matches!(self.stops().first(), Some(Stop(StopKey::Zoom { .. }, _)))
    }
}

/// One knot of a piecewise function: `[key, output]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop(pub StopKey, pub serde_json::Value);

/// Input side of a [`Stop`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StopKey {
    /// Two-dimensional key of a zoom-and-property function.
    Zoom {
        /// Zoom level.
        zoom: f64,
        /// Property value.
        value: serde_json::Value,
    },
    /// Single zoom level or property value.
    Plain(serde_json::Value),
}

/// Interpolation / lookup strategy of a function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionType {
    /// Blend between bracketing stops.
    Exponential,
    /// Step function: the stop at or below the input.
    Interval,
    /// Exact-match lookup.
    Categorical,
    /// The input itself, coerced to the property type.
    Identity,
}

impl FunctionType {
    /// Resolve a `type` name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "exponential" => Some(Self::Exponential),
            "interval" => Some(Self::Interval),
            "categorical" => Some(Self::Categorical),
            "identity" => Some(Self::Identity),
            _ => None,
        }
    }

    /// Canonical name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Exponential => "exponential",
            Self::Interval => "interval",
            Self::Categorical => "categorical",
            Self::Identity => "identity",
        }
    }
}

/// A property value is a function when it is a JSON object; anything else is a constant.
pub fn is_function(value: &serde_json::Value) -> bool {
    value.is_object()
}

#[cfg(test)]
#[path = "../../tests/unit/function/spec.rs"]
mod tests;
