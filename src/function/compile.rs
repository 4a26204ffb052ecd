//! Turns a [`FunctionSpec`] into a [`CompiledFunction`].

use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;

use crate::color::{Color, ColorSpace};
use crate::foundation::error::{StyleError, StyleResult};
use crate::foundation::math::number_key;
use crate::function::evaluate::{
    CategoricalTable, DefaultChain, Piecewise, StopTable, evaluate_exponential,
};
use crate::function::interpolate::{Blend, InterpolationType};
use crate::function::property::{PropertyDescriptor, PropertyType};
use crate::function::spec::{FunctionSpec, FunctionType, Stop, StopKey, is_function};
use crate::value::{Evaluable, Feature, Value, is_value, stringify};

/// What a compiled function's output depends on.
///
/// The renderer uses this to decide how often to re-evaluate: zoom-only
/// values once per frame, feature-dependent values once per feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionKind {
    /// Neither zoom nor feature.
    Constant,
    /// Feature property only.
    Source,
    /// Zoom only.
    Camera,
    /// Zoom and feature property.
    Composite,
}

impl FunctionKind {
    /// `true` for [`FunctionKind::Camera`] and [`FunctionKind::Composite`].
    pub fn is_zoom_dependent(self) -> bool {
        matches!(self, Self::Camera | Self::Composite)
    }

    /// `true` for [`FunctionKind::Source`] and [`FunctionKind::Composite`].
    pub fn is_feature_dependent(self) -> bool {
        matches!(self, Self::Source | Self::Composite)
    }
}

/// An immutable, ready-to-evaluate style function.
///
/// Safe to share across threads; evaluation never mutates it.
#[derive(Clone, Debug)]
pub struct CompiledFunction {
    kind: FunctionKind,
    interpolation: Option<InterpolationType>,
    zoom_stops: Vec<f64>,
    body: Body,
}

#[derive(Clone, Debug)]
enum Body {
    Constant(Value),
    Camera(Piecewise),
    Source {
        property: String,
        piecewise: Piecewise,
    },
    Composite {
        // Outputs are evaluables wrapping `sub_functions`, one per zoom level.
        zooms: StopTable,
        base: f64,
        blend: Blend,
        #[cfg_attr(not(test), allow(dead_code))]
        sub_functions: Vec<Arc<CompiledFunction>>,
    },
}

impl CompiledFunction {
    /// A function that always yields `value`.
    pub fn constant(value: Value) -> Self {
        Self {
            kind: FunctionKind::Constant,
            interpolation: None,
            zoom_stops: Vec::new(),
            body: Body::Constant(value),
        }
    }

    /// Dependence kind.
    pub fn kind(&self) -> FunctionKind {
        self.kind
    }

    /// How zoom stops are blended, for zoom-dependent functions that interpolate.
    pub fn interpolation(&self) -> Option<InterpolationType> {
        self.interpolation
    }

    /// Zoom breakpoints in stop order. Empty unless zoom-dependent.
    pub fn zoom_stops(&self) -> &[f64] {
        &self.zoom_stops
    }

    /// Interpolation factor between two zoom stops, `0` when the function does not interpolate.
    pub fn interpolation_factor(&self, input: f64, lower: f64, upper: f64) -> f64 {
        self.interpolation
            .map_or(0.0, |interp| interp.factor(input, lower, upper))
    }

    /// Value at `zoom` for `feature`. `None` means no paintable value.
    pub fn evaluate(&self, zoom: f64, feature: Option<&Feature>) -> Option<Value> {
        match &self.body {
            Body::Constant(value) => Some(value.clone()),
            Body::Camera(piecewise) => piecewise.evaluate(&Value::Number(zoom)),
            Body::Source {
                property,
                piecewise,
            } => match feature.and_then(|f| f.get(property)) {
                Some(input) if is_value(input) => piecewise.evaluate(input),
                Some(_) => {
                    tracing::trace!(%property, "ignoring deferred value in feature properties");
                    piecewise.defaults().resolve()
                }
                None => piecewise.defaults().resolve(),
            },
            Body::Composite {
                zooms, base, blend, ..
            } => {
                let bracketed = evaluate_exponential(
                    zooms,
                    *base,
                    *blend,
                    &Value::Number(zoom),
                    &DefaultChain::default(),
                )?;
                match bracketed {
                    Value::Evaluable(deferred) => deferred.evaluate(zoom, feature),
                    other => Some(other),
                }
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn sub_functions(&self) -> &[Arc<CompiledFunction>] {
        match &self.body {
            Body::Composite { sub_functions, .. } => sub_functions,
            _ => &[],
        }
    }
}

/// Compile a style function for a property.
///
/// Fails on an unknown `type` or `colorSpace`, a default that does not fit a
/// color property, malformed stop keys, or a function with neither stops nor
/// a default.
#[tracing::instrument(skip_all, fields(property = spec.property.as_deref().unwrap_or("")))]
pub fn compile(
    spec: &FunctionSpec,
    descriptor: &PropertyDescriptor,
) -> StyleResult<CompiledFunction> {
    let function_type = resolve_type(spec, descriptor)?;
    let color_space = resolve_color_space(spec)?;
    let blend = Blend::for_property(&descriptor.ty, color_space);

    let function_default =
        normalize_default(spec.default.as_ref().map(Value::from), descriptor, "function default")?;
    // The property default is unreachable behind a function default.
    let property_default = match function_default {
        Some(_) => None,
        None => normalize_default(descriptor.default.clone(), descriptor, "property default")?,
    };
    let defaults = DefaultChain::new(function_default, property_default);

    if spec.stops().is_empty() && function_type != FunctionType::Identity {
        let Some(value) = defaults.resolve() else {
            return Err(StyleError::config(format!(
                "{} function has no stops and no default",
                function_type.name()
            )));
        };
        tracing::debug!(value = %stringify(&value), "function without stops compiled to its default");
        return Ok(CompiledFunction::constant(value));
    }

    let compiled = if spec.is_zoom_and_property() {
        compile_composite(spec, descriptor, blend)?
    } else {
        let piecewise = build_piecewise(spec, descriptor, function_type, blend, defaults)?;
        match &spec.property {
            Some(property) => CompiledFunction {
                kind: FunctionKind::Source,
                interpolation: None,
                zoom_stops: Vec::new(),
                body: Body::Source {
                    property: property.clone(),
                    piecewise,
                },
            },
            None => CompiledFunction {
                kind: FunctionKind::Camera,
                interpolation: (function_type == FunctionType::Exponential).then(|| {
                    InterpolationType::Exponential {
                        base: spec.base.unwrap_or(1.0),
                    }
                }),
                zoom_stops: spec
                    .stops()
                    .iter()
                    .filter_map(|Stop(key, _)| match key {
                        StopKey::Plain(k) => k.as_f64(),
                        StopKey::Zoom { .. } => None,
                    })
                    .collect(),
                body: Body::Camera(piecewise),
            },
        }
    };

    tracing::debug!(
        kind = ?compiled.kind,
        function_type = function_type.name(),
        stops = spec.stops().len(),
        "compiled style function"
    );
    Ok(compiled)
}

/// Compile a property value that is either a constant or a function object.
pub fn compile_property(
    value: &serde_json::Value,
    descriptor: &PropertyDescriptor,
) -> StyleResult<CompiledFunction> {
    if is_function(value) {
        return compile(&FunctionSpec::from_json(value)?, descriptor);
    }
    let constant = Value::from(value);
    let constant = if descriptor.ty == PropertyType::Color {
        to_color(constant, "constant value")?
    } else {
        constant
    };
    Ok(CompiledFunction::constant(constant))
}

fn resolve_type(spec: &FunctionSpec, descriptor: &PropertyDescriptor) -> StyleResult<FunctionType> {
    match spec.kind.as_deref() {
        Some(name) => FunctionType::from_name(name)
            .ok_or_else(|| StyleError::config(format!("unknown function type \"{name}\""))),
        None if descriptor.supports_interpolation() => Ok(FunctionType::Exponential),
        None => Ok(FunctionType::Interval),
    }
}

fn resolve_color_space(spec: &FunctionSpec) -> StyleResult<ColorSpace> {
    match spec.color_space.as_deref() {
        Some(name) => ColorSpace::from_name(name)
            .ok_or_else(|| StyleError::config(format!("unknown color space \"{name}\""))),
        None => Ok(ColorSpace::Rgb),
    }
}

fn to_color(value: Value, what: &str) -> StyleResult<Value> {
    match value {
        Value::Color(_) => Ok(value),
        Value::String(s) => Color::parse(&s)
            .map(Value::Color)
            .ok_or_else(|| StyleError::config(format!("{what} \"{s}\" is not a color"))),
        other => Err(StyleError::config(format!(
            "{what} {} is not a color",
            stringify(&other)
        ))),
    }
}

fn normalize_default(
    value: Option<Value>,
    descriptor: &PropertyDescriptor,
    what: &str,
) -> StyleResult<Option<Value>> {
    match value {
        Some(v) if descriptor.ty == PropertyType::Color => to_color(v, what).map(Some),
        other => Ok(other),
    }
}

/// Color stop outputs are parsed up front. Ones that fail stay as they are
/// and turn into a miss when an evaluation reaches them.
fn normalize_output(value: Value, is_color: bool) -> Value {
    if is_color
        && let Value::String(s) = &value
        && let Some(c) = Color::parse(s)
    {
        return Value::Color(c);
    }
    value
}

fn plain_key(key: &StopKey, index: usize) -> StyleResult<Value> {
    match key {
        StopKey::Plain(k) => Ok(Value::from(k)),
        StopKey::Zoom { .. } => Err(StyleError::config(format!(
            "stop {index}: {{zoom, value}} key in a single-input function"
        ))),
    }
}

fn numeric_stops(
    spec: &FunctionSpec,
    function_type: FunctionType,
    is_color: bool,
) -> StyleResult<StopTable> {
    let mut table = StopTable::default();
    for (i, Stop(key, output)) in spec.stops().iter().enumerate() {
        let Some(x) = plain_key(key, i)?.as_f64() else {
            return Err(StyleError::config(format!(
                "stop {i}: {} functions need numeric stop keys",
                function_type.name()
            )));
        };
        table.push(x, normalize_output(Value::from(output), is_color));
    }
    Ok(table)
}

fn build_piecewise(
    spec: &FunctionSpec,
    descriptor: &PropertyDescriptor,
    function_type: FunctionType,
    blend: Blend,
    defaults: DefaultChain,
) -> StyleResult<Piecewise> {
    let is_color = descriptor.ty == PropertyType::Color;

    Ok(match function_type {
        FunctionType::Exponential => Piecewise::Exponential {
            stops: numeric_stops(spec, function_type, is_color)?,
            base: spec.base.unwrap_or(1.0),
            blend,
            defaults,
        },
        FunctionType::Interval => Piecewise::Interval {
            stops: numeric_stops(spec, function_type, is_color)?,
            blend,
            defaults,
        },
        FunctionType::Categorical => {
            let pairs = spec
                .stops()
                .iter()
                .enumerate()
                .map(|(i, Stop(key, output))| {
                    Ok((
                        plain_key(key, i)?,
                        normalize_output(Value::from(output), is_color),
                    ))
                })
                .collect::<StyleResult<Vec<_>>>()?;
            Piecewise::Categorical {
                table: CategoricalTable::build(pairs),
                blend,
                defaults,
            }
        }
        FunctionType::Identity => Piecewise::Identity {
            descriptor: descriptor.clone(),
            defaults,
        },
    })
}

/// Split `{zoom, value}` stops into one property function per zoom level, in
/// first-seen order, and interpolate between them along zoom.
fn compile_composite(
    spec: &FunctionSpec,
    descriptor: &PropertyDescriptor,
    blend: Blend,
) -> StyleResult<CompiledFunction> {
    if spec.property.is_none() {
        return Err(StyleError::config(
            "zoom-and-property function needs a \"property\"",
        ));
    }

    let mut levels: IndexMap<u64, (f64, Vec<Stop>)> = IndexMap::new();
    for (i, Stop(key, output)) in spec.stops().iter().enumerate() {
        let StopKey::Zoom { zoom, value } = key else {
            return Err(StyleError::config(format!(
                "stop {i}: expected a {{zoom, value}} key"
            )));
        };
        let Some(level) = number_key(*zoom) else {
            return Err(StyleError::config(format!("stop {i}: zoom is not a number")));
        };
        levels
            .entry(level)
            .or_insert_with(|| (*zoom, Vec::new()))
            .1
            .push(Stop(StopKey::Plain(value.clone()), output.clone()));
    }

    let mut zooms = StopTable::default();
    let mut sub_functions = Vec::with_capacity(levels.len());
    for (zoom, stops) in levels.into_values() {
        let level_spec = FunctionSpec {
            kind: spec.kind.clone(),
            property: spec.property.clone(),
            base: None,
            default: spec.default.clone(),
            color_space: spec.color_space.clone(),
            stops: Some(stops),
        };
        let sub = Arc::new(compile(&level_spec, descriptor)?);
        let handle = Arc::clone(&sub);
        zooms.push(
            zoom,
            Value::Evaluable(Evaluable::new(move |z, feature| handle.evaluate(z, feature))),
        );
        sub_functions.push(sub);
    }

    let base = spec.base.unwrap_or(1.0);
    Ok(CompiledFunction {
        kind: FunctionKind::Composite,
        interpolation: Some(if base == 1.0 {
            InterpolationType::Linear
        } else {
            InterpolationType::Exponential { base }
        }),
        zoom_stops: zooms.keys.clone(),
        body: Body::Composite {
            zooms,
            base,
            blend,
            sub_functions,
        },
    })
}

#[cfg(test)]
#[path = "../../tests/unit/function/compile.rs"]
mod tests;
