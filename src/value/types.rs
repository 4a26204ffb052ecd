use std::fmt;

use super::Value;

/// Type tag for a [`Value`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Type {
    /// `null`
    Null,
    /// `number`
    Number,
    /// `string`
    String,
    /// `boolean`
    Boolean,
    /// `color`
    Color,
    /// `object`
    Object,
    /// Top type: any value.
    Value,
    /// `collator`
    Collator,
    /// `formatted`
    Formatted,
    /// `resolvedImage`
    ResolvedImage,
    /// A deferred computation.
    Evaluable,
    /// `array<item, length>`; `length` is `None` when unknown.
    Array {
        /// Element type, [`Type::Value`] for mixed arrays.
        item: Box<Type>,
        /// Fixed length, if known.
        length: Option<usize>,
    },
}

impl Type {
    /// Build an array type.
    pub fn array(item: Type, length: Option<usize>) -> Self {
        Self::Array {
            item: Box::new(item),
            length,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Number => f.write_str("number"),
            Self::String => f.write_str("string"),
            Self::Boolean => f.write_str("boolean"),
            Self::Color => f.write_str("color"),
            Self::Object => f.write_str("object"),
            Self::Value => f.write_str("value"),
            Self::Collator => f.write_str("collator"),
            Self::Formatted => f.write_str("formatted"),
            Self::ResolvedImage => f.write_str("resolvedImage"),
            Self::Evaluable => f.write_str("evaluable"),
            Self::Array { item, length } => match (item.as_ref(), length) {
                (Self::Value, None) => f.write_str("array"),
                (item, None) => write!(f, "array<{item}>"),
                (item, Some(n)) => write!(f, "array<{item}, {n}>"),
            },
        }
    }
}

/// Runtime type of `value`.
///
/// Arrays fold over their elements: the item type is the common element
/// type, widened to [`Type::Value`] as soon as two elements disagree. The
/// length is always recorded.
pub fn classify(value: &Value) -> Type {
    match value {
        Value::Null => Type::Null,
        Value::Bool(_) => Type::Boolean,
        Value::Number(_) => Type::Number,
        Value::String(_) => Type::String,
        Value::Color(_) => Type::Color,
        Value::Collator(_) => Type::Collator,
        Value::Formatted(_) => Type::Formatted,
        Value::ResolvedImage(_) => Type::ResolvedImage,
        Value::Evaluable(_) => Type::Evaluable,
        Value::Object(_) => Type::Object,
        Value::Array(items) => {
            let mut item_type: Option<Type> = None;
            for item in items {
                let t = classify(item);
                match &item_type {
                    None => item_type = Some(t),
                    Some(seen) if *seen == t => {}
                    Some(_) => {
                        item_type = Some(Type::Value);
                        break;
                    }
                }
            }
            Type::array(item_type.unwrap_or(Type::Value), Some(items.len()))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/value/types.rs"]
mod tests;
