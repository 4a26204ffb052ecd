//! Pre-compilation checks over a [`FunctionSpec`].

use crate::color::ColorSpace;
use crate::foundation::error::{StyleError, StyleResult};
use crate::function::compile::{CompiledFunction, compile};
use crate::function::property::PropertyDescriptor;
use crate::function::spec::{FunctionSpec, FunctionType, Stop, StopKey};

/// Checks a function spec before it is compiled.
pub trait SchemaValidator {
    /// Every problem found, in stop order. Empty means it is valid.
    fn validate(&self, spec: &FunctionSpec, property_name: &str) -> Vec<StyleError>;
}

/// Structural checks on names, base and stops.
#[derive(Clone, Copy, Debug, Default)]
pub struct StopsValidator;

impl SchemaValidator for StopsValidator {
    fn validate(&self, spec: &FunctionSpec, property_name: &str) -> Vec<StyleError> {
        let mut errors = Vec::new();
        let mut report = |msg: String| {
            errors.push(StyleError::validation(format!("{property_name}: {msg}")));
        };

        let function_type = match spec.kind.as_deref() {
            Some(name) => {
                let parsed = FunctionType::from_name(name);
                if parsed.is_none() {
                    report(format!("unknown function type \"{name}\""));
                }
                parsed
            }
            None => None,
        };

        if let Some(name) = spec.color_space.as_deref()
            && ColorSpace::from_name(name).is_none()
        {
            report(format!("unknown color space \"{name}\""));
        }

        if let Some(base) = spec.base
            && !(base.is_finite() && base >= 0.0)
        {
            report(format!("base must be a non-negative number, found {base}"));
        }

        let stops = spec.stops();
        if stops.is_empty() {
            if function_type != Some(FunctionType::Identity) && spec.default.is_none() {
                report("function needs stops or a default".to_owned());
            }
            return errors;
        }

        let zoom_and_property = spec.is_zoom_and_property();
        if zoom_and_property && spec.property.is_none() {
            report("{zoom, value} stops need a \"property\"".to_owned());
        }
        let mut previous_zoom: Option<f64> = None;
        let mut previous_key: Option<f64> = None;
        let mut first_key_kind: Option<&'static str> = None;

        for (i, Stop(key, _)) in stops.iter().enumerate() {
            let input = match (key, zoom_and_property) {
                (StopKey::Zoom { zoom, value }, true) => {
                    if previous_zoom.is_some_and(|p| *zoom < p) {
                        report(format!("stop {i}: zoom levels must be in ascending order"));
                    }
                    if previous_zoom != Some(*zoom) {
                        previous_key = None;
                    }
                    previous_zoom = Some(*zoom);
                    value
                }
                (StopKey::Plain(value), false) => value,
                (_, true) => {
                    report(format!("stop {i}: expected a {{zoom, value}} key"));
                    continue;
                }
                (_, false) => {
                    report(format!("stop {i}: unexpected {{zoom, value}} key"));
                    continue;
                }
            };

            match function_type {
                Some(FunctionType::Categorical) => {
                    let kind = match input {
                        serde_json::Value::String(_) => "string",
                        serde_json::Value::Number(_) => "number",
                        serde_json::Value::Bool(_) => "boolean",
                        _ => {
                            report(format!(
                                "stop {i}: categorical keys must be strings, numbers or booleans"
                            ));
                            continue;
                        }
                    };
                    match first_key_kind {
                        Some(first) if first != kind => report(format!(
                            "stop {i}: {kind} key in a function keyed by {first}"
                        )),
                        Some(_) => {}
                        None => first_key_kind = Some(kind),
                    }
                }
                Some(FunctionType::Identity) => {}
                _ => {
                    let Some(x) = input.as_f64() else {
                        report(format!("stop {i}: key must be a number"));
                        continue;
                    };
                    if previous_key.is_some_and(|p| x < p) {
                        report(format!("stop {i}: keys must be in ascending order"));
                    }
                    previous_key = Some(x);
                }
            }
        }

        errors
    }
}

/// Validate, then compile. Fails with the first validation error.
pub fn compile_validated(
    spec: &FunctionSpec,
    descriptor: &PropertyDescriptor,
    property_name: &str,
    validator: &dyn SchemaValidator,
) -> StyleResult<CompiledFunction> {
    if let Some(first) = validator.validate(spec, property_name).into_iter().next() {
        return Err(first);
    }
    compile(spec, descriptor)
}

#[cfg(test)]
#[path = "../../tests/unit/function/validate.rs"]
mod tests;
