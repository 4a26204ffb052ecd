//! Style functions: parsing, validation, compilation and evaluation.

mod compile;
mod evaluate;
mod interpolate;
mod property;
mod spec;
mod stops;
mod validate;

pub use compile::{CompiledFunction, FunctionKind, compile, compile_property};
pub use interpolate::{Interpolate, InterpolationType, interpolation_factor};
pub use property::{PropertyDescriptor, PropertyType};
pub use spec::{FunctionSpec, FunctionType, Stop, StopKey, is_function};
pub use stops::find_floor;
pub use validate::{SchemaValidator, StopsValidator, compile_validated};
