//! The four lookup strategies behind a compiled function.

use std::collections::HashMap;

use crate::color::Color;
use crate::foundation::math::number_key;
use crate::function::interpolate::{Blend, interpolation_factor};
use crate::function::property::{PropertyDescriptor, PropertyType};
use crate::function::stops::find_floor;
use crate::value::{Evaluable, Formatted, ResolvedImage, Type, Value, classify, stringify};

/// Ordered fallbacks consulted on a miss: the function's own default, then
/// the property's.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct DefaultChain {
    fallbacks: Vec<Value>,
}

impl DefaultChain {
    pub(crate) fn new(function_default: Option<Value>, property_default: Option<Value>) -> Self {
        Self {
            fallbacks: function_default.into_iter().chain(property_default).collect(),
        }
    }

    pub(crate) fn resolve(&self) -> Option<Value> {
        self.fallbacks.first().cloned()
    }
}

/// Numeric stop keys with their outputs, ascending by key.
#[derive(Clone, Debug, Default)]
pub(crate) struct StopTable {
    pub(crate) keys: Vec<f64>,
    pub(crate) outputs: Vec<Value>,
}

impl StopTable {
    pub(crate) fn push(&mut self, key: f64, output: Value) {
        self.keys.push(key);
        self.outputs.push(output);
    }

    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum CategoryKey {
    Str(String),
    Num(u64),
    Bool(bool),
}

impl CategoryKey {
    fn of(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::Str(s.clone())),
            Value::Number(n) => number_key(*n).map(Self::Num),
            Value::Bool(b) => Some(Self::Bool(*b)),
            _ => None,
        }
    }
}

/// Exact-match table for categorical functions, built once at compile time.
#[derive(Clone, Debug)]
pub(crate) struct CategoricalTable {
    key_type: Type,
    entries: HashMap<CategoryKey, Value>,
}

impl CategoricalTable {
    /// The key type is taken from the first stop; later keys of another type
    /// can never match.
    pub(crate) fn build(stops: Vec<(Value, Value)>) -> Self {
        let key_type = stops
            .first()
            .map(|(k, _)| classify(k))
            .unwrap_or(Type::Null);

        let mut entries = HashMap::with_capacity(stops.len());
        for (key, output) in stops {
            match CategoryKey::of(&key) {
                Some(k) => {
                    entries.insert(k, output);
                }
                None => tracing::trace!(key = %stringify(&key), "skipping unhashable categorical key"),
            }
        }

        Self { key_type, entries }
    }

    fn lookup(&self, input: &Value) -> Option<&Value> {
        if classify(input) != self.key_type {
            return None;
        }
        self.entries.get(&CategoryKey::of(input)?)
    }
}

/// A one-dimensional function of a single input, with its strategy fixed.
#[derive(Clone, Debug)]
pub(crate) enum Piecewise {
    Exponential {
        stops: StopTable,
        base: f64,
        blend: Blend,
        defaults: DefaultChain,
    },
    Interval {
        stops: StopTable,
        blend: Blend,
        defaults: DefaultChain,
    },
    Categorical {
        table: CategoricalTable,
        blend: Blend,
        defaults: DefaultChain,
    },
    Identity {
        descriptor: PropertyDescriptor,
        defaults: DefaultChain,
    },
}

impl Piecewise {
    pub(crate) fn evaluate(&self, input: &Value) -> Option<Value> {
        match self {
            Self::Exponential {
                stops,
                base,
                blend,
                defaults,
            } => evaluate_exponential(stops, *base, *blend, input, defaults),
            Self::Interval {
                stops,
                blend,
                defaults,
            } => evaluate_interval(stops, *blend, input, defaults),
            Self::Categorical {
                table,
                blend,
                defaults,
            } => evaluate_categorical(table, *blend, input, defaults),
            Self::Identity {
                descriptor,
                defaults,
            } => evaluate_identity(descriptor, input, defaults),
        }
    }

    pub(crate) fn defaults(&self) -> &DefaultChain {
        match self {
            Self::Exponential { defaults, .. }
            | Self::Interval { defaults, .. }
            | Self::Categorical { defaults, .. }
            | Self::Identity { defaults, .. } => defaults,
        }
    }
}

/// Hand out a stop output, or fall through the defaults if it is malformed.
fn emit(output: &Value, blend: Blend, defaults: &DefaultChain) -> Option<Value> {
    if blend.admits(output) {
        return Some(output.clone());
    }
    tracing::trace!(output = %stringify(output), "stop output does not fit the property type");
    defaults.resolve()
}

/// Index of the stop to hand out unchanged, or `Err(i)` when the input lies
/// strictly between stop `i` and `i + 1`.
fn bracket(stops: &StopTable, x: f64) -> Result<usize, usize> {
    let n = stops.len();
    if n == 1 || x <= stops.keys[0] {
        return Ok(0);
    }
    if x >= stops.keys[n - 1] {
        return Ok(n - 1);
    }
    let i = find_floor(&stops.keys, x);
    if i + 1 >= n { Ok(i) } else { Err(i) }
}

pub(crate) fn evaluate_exponential(
    stops: &StopTable,
    base: f64,
    blend: Blend,
    input: &Value,
    defaults: &DefaultChain,
) -> Option<Value> {
    let Some(x) = input.as_f64() else {
        return defaults.resolve();
    };
    // NaN has no place between two stops, but a lone stop still answers.
    if stops.is_empty() || (x.is_nan() && stops.len() > 1) {
        return defaults.resolve();
    }

    let i = match bracket(stops, x) {
        Ok(i) => return emit(&stops.outputs[i], blend, defaults),
        Err(i) => i,
    };

    let t = interpolation_factor(x, base, stops.keys[i], stops.keys[i + 1]);
    let lower = &stops.outputs[i];
    let upper = &stops.outputs[i + 1];

    if let (Value::Evaluable(lower), Value::Evaluable(upper)) = (lower, upper) {
        return Some(Value::Evaluable(blend_evaluables(
            lower.clone(),
            upper.clone(),
            blend,
            t,
        )));
    }

    match blend.apply(lower, upper, t) {
        Some(v) => Some(v),
        None => {
            tracing::trace!(
                lower = %stringify(lower),
                upper = %stringify(upper),
                "cannot interpolate between stop outputs"
            );
            defaults.resolve()
        }
    }
}

/// Deferred blend: evaluates both sides with the caller's arguments, then
/// interpolates the results. Undefined on either side stays undefined.
fn blend_evaluables(lower: Evaluable, upper: Evaluable, blend: Blend, t: f64) -> Evaluable {
    Evaluable::new(move |zoom, feature| {
        let a = lower.evaluate(zoom, feature)?;
        let b = upper.evaluate(zoom, feature)?;
        blend.apply(&a, &b, t)
    })
}

pub(crate) fn evaluate_interval(
    stops: &StopTable,
    blend: Blend,
    input: &Value,
    defaults: &DefaultChain,
) -> Option<Value> {
    let Some(x) = input.as_f64() else {
        return defaults.resolve();
    };
    // NaN has no place between two stops, but a lone stop still answers.
    if stops.is_empty() || (x.is_nan() && stops.len() > 1) {
        return defaults.resolve();
    }

    let i = bracket(stops, x).unwrap_or_else(|i| i);
    emit(&stops.outputs[i], blend, defaults)
}

pub(crate) fn evaluate_categorical(
    table: &CategoricalTable,
    blend: Blend,
    input: &Value,
    defaults: &DefaultChain,
) -> Option<Value> {
    match table.lookup(input) {
        Some(output) => emit(output, blend, defaults),
        None => defaults.resolve(),
    }
}

pub(crate) fn evaluate_identity(
    descriptor: &PropertyDescriptor,
    input: &Value,
    defaults: &DefaultChain,
) -> Option<Value> {
    let coerced = match &descriptor.ty {
        PropertyType::Color => match input {
            Value::Color(c) => Some(Value::Color(*c)),
            Value::String(s) => Color::parse(s).map(Value::Color),
            _ => None,
        },
        PropertyType::Formatted => match input {
            Value::Formatted(f) => Some(Value::Formatted(f.clone())),
            other => Some(Value::Formatted(Formatted::from_string(stringify(other)))),
        },
        PropertyType::ResolvedImage => match input {
            Value::ResolvedImage(img) => Some(Value::ResolvedImage(img.clone())),
            other => ResolvedImage::build(&stringify(other)).map(Value::ResolvedImage),
        },
        _ => descriptor.accepts(input).then(|| input.clone()),
    };
    coerced.or_else(|| defaults.resolve())
}

#[cfg(test)]
#[path = "../../tests/unit/function/evaluate.rs"]
mod tests;
