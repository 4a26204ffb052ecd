//! Static metadata about the style property a function feeds.

use indexmap::IndexSet;
use serde::Deserialize;

use crate::foundation::error::{StyleError, StyleResult};
use crate::value::Value;

/// Declared output type of a style property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyType {
    /// `number`
    Number,
    /// `string`
    String,
    /// `boolean`
    Boolean,
    /// `color`
    Color,
    /// `enum`, restricted to [`PropertyDescriptor::values`].
    Enum,
    /// `formatted`
    Formatted,
    /// `resolvedImage`
    ResolvedImage,
    /// `array` of a fixed element type.
    Array {
        /// Element type.
        value: Box<PropertyType>,
        /// Fixed length, if declared.
        length: Option<usize>,
    },
}

impl PropertyType {
    fn from_names(ty: &str, value: Option<&str>, length: Option<usize>) -> Option<Self> {
        Some(match ty {
            "number" => Self::Number,
            "string" => Self::String,
            "boolean" => Self::Boolean,
            "color" => Self::Color,
            "enum" => Self::Enum,
            "formatted" => Self::Formatted,
            "resolvedImage" => Self::ResolvedImage,
            "array" => Self::Array {
                value: Box::new(Self::from_names(value?, None, None)?),
                length,
            },
            _ => return None,
        })
    }
}

/// Type, default and capabilities of one style property.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDescriptor {
    /// Declared output type.
    pub ty: PropertyType,
    /// Value used when neither the function nor its input yields one.
    pub default: Option<Value>,
    /// Allowed values for [`PropertyType::Enum`].
    pub values: IndexSet<String>,
    /// Whether the property can be smoothly interpolated.
    pub interpolated: bool,
}

#[derive(Deserialize)]
struct PropertyDescriptorDef {
    #[serde(rename = "type")]
    ty: String,
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    length: Option<usize>,
    #[serde(default)]
    default: Option<serde_json::Value>,
    #[serde(default)]
    values: Option<EnumValuesDef>,
    #[serde(default)]
    expression: Option<ExpressionDef>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EnumValuesDef {
    List(Vec<String>),
    Documented(indexmap::IndexMap<String, serde_json::Value>),
}

#[derive(Deserialize)]
struct ExpressionDef {
    #[serde(default)]
    interpolated: bool,
}

impl PropertyDescriptor {
    /// Descriptor with no default, no enum values, not interpolatable.
    pub fn new(ty: PropertyType) -> Self {
        Self {
            ty,
            default: None,
            values: IndexSet::new(),
            interpolated: false,
        }
    }

    /// Set the default (builder pattern).
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Mark the property as interpolatable (builder pattern).
    pub fn interpolated(mut self) -> Self {
        self.interpolated = true;
        self
    }

    /// Enum property accepting `values`.
    pub fn enumeration<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            ..Self::new(PropertyType::Enum)
        }
    }

    /// Parse a style-spec property definition
    /// (`{"type": "number", "default": 1, "expression": {"interpolated": true}}`).
    pub fn from_json(json: &serde_json::Value) -> StyleResult<Self> {
        let def = PropertyDescriptorDef::deserialize(json)
            .map_err(|e| StyleError::serde(e.to_string()))?;

        let ty = PropertyType::from_names(&def.ty, def.value.as_deref(), def.length)
            .ok_or_else(|| match &def.value {
                Some(item) if def.ty == "array" => {
                    StyleError::config(format!("unknown array element type \"{item}\""))
                }
                None if def.ty == "array" => {
                    StyleError::config("array property must declare its element \"value\" type")
                }
                _ => StyleError::config(format!("unknown property type \"{}\"", def.ty)),
            })?;

        let values = match def.values {
            Some(EnumValuesDef::List(list)) => list.into_iter().collect(),
            Some(EnumValuesDef::Documented(map)) => map.into_keys().collect(),
            None => IndexSet::new(),
        };

        Ok(Self {
            ty,
            default: def.default.map(Value::from),
            values,
            interpolated: def.expression.is_some_and(|e| e.interpolated),
        })
    }

    /// Whether functions over this property default to exponential interpolation.
    pub fn supports_interpolation(&self) -> bool {
        self.interpolated
    }

    /// Whether `value` already has this property's type, without coercion.
    pub fn accepts(&self, value: &Value) -> bool {
        match (&self.ty, value) {
            (PropertyType::Number, Value::Number(_))
            | (PropertyType::String, Value::String(_))
            | (PropertyType::Boolean, Value::Bool(_))
            | (PropertyType::Color, Value::Color(_))
            | (PropertyType::Formatted, Value::Formatted(_))
            | (PropertyType::ResolvedImage, Value::ResolvedImage(_))
            | (PropertyType::Array { .. }, Value::Array(_)) => true,
            (PropertyType::Enum, Value::String(s)) => self.values.contains(s.as_str()),
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/function/property.rs"]
mod tests;
