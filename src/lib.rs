//! Data-driven style functions for map rendering.
//!
//! A style property is either a constant or a function of zoom level and/or
//! a feature property. This crate turns function definitions into immutable
//! [`CompiledFunction`]s:
//!
//! - Parse a [`FunctionSpec`] (or use [`compile_property`] on raw JSON)
//! - Compile it against the target property's [`PropertyDescriptor`]
//! - Evaluate with a zoom level and an optional [`Feature`]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod foundation;

pub mod color;
pub mod function;
pub mod value;

pub use crate::color::{Color, ColorSpace};
pub use crate::foundation::error::{StyleError, StyleResult};
pub use crate::function::{
    CompiledFunction, FunctionKind, FunctionSpec, FunctionType, InterpolationType,
    PropertyDescriptor, PropertyType, SchemaValidator, StopsValidator, compile,
    compile_property, compile_validated, is_function,
};
pub use crate::value::{Feature, Type, Value, is_value, stringify};
