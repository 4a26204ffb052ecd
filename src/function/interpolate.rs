use serde::Serialize;

use crate::color::{Color, ColorSpace};
use crate::foundation::math::lerp;
use crate::function::property::PropertyType;
use crate::value::Value;

/// Interpolation contract for output value types.
pub trait Interpolate: Sized {
    /// Interpolate from `a` to `b` with factor `t` in `[0, 1]`.
    fn interpolate(a: &Self, b: &Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(a: &Self, b: &Self, t: f64) -> Self {
        lerp(*a, *b, t)
    }
}

impl Interpolate for Color {
    fn interpolate(a: &Self, b: &Self, t: f64) -> Self {
        ColorSpace::Rgb.interpolate(a, b, t)
    }
}

impl Interpolate for Vec<f64> {
    fn interpolate(a: &Self, b: &Self, t: f64) -> Self {
        a.iter().zip(b).map(|(x, y)| lerp(*x, *y, t)).collect()
    }
}

/// Position of `input` between `lower` and `upper`, in `[0, 1]`.
///
/// Two stops define a curve `f(x) = a * base^x + c` through both of them;
/// the factor is how far along that curve `input` sits, so that
/// `y0 + (y1 - y0) * factor` lies on the curve. `base == 1` is linear.
pub fn interpolation_factor(input: f64, base: f64, lower: f64, upper: f64) -> f64 {
    let difference = upper - lower;
    let progress = input - lower;

    if difference == 0.0 {
        0.0
    } else if base == 1.0 {
        progress / difference
    } else {
        (base.powf(progress) - 1.0) / (base.powf(difference) - 1.0)
    }
}

/// How a zoom-dependent function moves between stops, as reported to the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "name", rename_all = "lowercase")]
pub enum InterpolationType {
    /// Straight line between stops.
    Linear,
    /// Exponential ease with the given base.
    Exponential {
        /// Growth rate; `1` behaves like [`InterpolationType::Linear`].
        base: f64,
    },
}

impl InterpolationType {
    /// Interpolation factor for `input` between `lower` and `upper`.
    pub fn factor(self, input: f64, lower: f64, upper: f64) -> f64 {
        match self {
            Self::Linear => interpolation_factor(input, 1.0, lower, upper),
            Self::Exponential { base } => interpolation_factor(input, base, lower, upper),
        }
    }
}

/// Output rule for a property type, chosen once at compile time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Blend {
    Number,
    Color(ColorSpace),
    NumberArray,
    /// No interpolation rule: the lower endpoint wins.
    Hold,
}

impl Blend {
    pub(crate) fn for_property(ty: &PropertyType, space: ColorSpace) -> Self {
        match ty {
            PropertyType::Number => Self::Number,
            PropertyType::Color => Self::Color(space),
            PropertyType::Array { value, .. } if **value == PropertyType::Number => {
                Self::NumberArray
            }
            _ => Self::Hold,
        }
    }

    /// Whether a stop output can be handed out as a value of this property.
    ///
    /// Malformed outputs (a string left in a color property because it did not
    /// parse) fail here and become a miss for the call.
    pub(crate) fn admits(self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Evaluable(_)) => true,
            (Self::Number, Value::Number(_)) => true,
            (Self::Color(_), Value::Color(_)) => true,
            (Self::NumberArray, Value::Array(items)) => items.iter().all(|v| v.as_f64().is_some()),
            (Self::Hold, _) => true,
            _ => false,
        }
    }

    /// Blend two concrete outputs. `None` when either side has the wrong shape.
    pub(crate) fn apply(self, a: &Value, b: &Value, t: f64) -> Option<Value> {
        match self {
            Self::Hold => Some(a.clone()),
            Self::Number => {
                let (a, b) = (a.as_f64()?, b.as_f64()?);
                Some(Value::Number(f64::interpolate(&a, &b, t)))
            }
            Self::Color(space) => {
                let (a, b) = (a.as_color()?, b.as_color()?);
                let blended = match space {
                    ColorSpace::Rgb => Color::interpolate(a, b, t),
                    other => other.interpolate(a, b, t),
                };
                Some(Value::Color(blended))
            }
            Self::NumberArray => {
                let (a, b) = (numbers(a)?, numbers(b)?);
                if a.len() != b.len() {
                    return None;
                }
                let blended = Vec::<f64>::interpolate(&a, &b, t);
                Some(Value::Array(blended.into_iter().map(Value::Number).collect()))
            }
        }
    }
}

fn numbers(value: &Value) -> Option<Vec<f64>> {
    match value {
        Value::Array(items) => items.iter().map(Value::as_f64).collect(),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/function/interpolate.rs"]
mod tests;
