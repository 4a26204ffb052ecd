use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::Deserialize;

use super::Value;

type EvaluateFn = dyn Fn(f64, Option<&Feature>) -> Option<Value> + Send + Sync;

/// A feature as seen by data-driven functions: just its properties.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Feature {
    /// Property bag, in source order.
    #[serde(default)]
    pub properties: IndexMap<String, Value>,
}

impl Feature {
    /// Feature with no properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property (builder pattern).
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Look up a property.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }
}

/// A value that still depends on `(zoom, feature)`.
///
/// Cloning shares the underlying closure. Two evaluables are equal only when
/// they share it.
#[derive(Clone)]
pub struct Evaluable(Arc<EvaluateFn>);

impl Evaluable {
    /// Wrap a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(f64, Option<&Feature>) -> Option<Value> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Run the deferred computation. `None` means no value for these arguments.
    pub fn evaluate(&self, zoom: f64, feature: Option<&Feature>) -> Option<Value> {
        (self.0)(zoom, feature)
    }
}

impl PartialEq for Evaluable {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Evaluable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Evaluable(..)")
    }
}
