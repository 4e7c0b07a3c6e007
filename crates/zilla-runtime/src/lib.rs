//! Object model of the zilla Go runtime, as seen by the compiler.
//!
//! Generated code manipulates values of a dynamic object system with named
//! properties. The compiler never executes that code; it only needs:
//! - The value-kind classification (`ValueKind`)
//! - Objects with `get_property` / `define_property`
//! - Function values that know their canonical emitted name
//! - A `Realm` whose global object is pre-seeded with built-ins
//! - The fixed identifiers the generated code refers to (`names`)

pub mod value;
pub use value::{JsFunction, JsObject, PropertyError, Value, ValueKind};

pub mod realm;
pub use realm::Realm;

// Builtin manifest - object/property to canonical symbol mapping
pub mod manifest;
pub use manifest::BuiltinManifest;

/// Identifiers of the Go runtime that generated code refers to by name.
pub mod names {
    /// Dynamically-typed value type used for every declared binding.
    pub const OBJECT_TYPE: &str = "Object";
    /// The global object.
    pub const GLOBAL_OBJECT: &str = "global";
    /// Method reading a named property of an object.
    pub const GET_PROPERTY: &str = "GetProperty";
    /// Method defining a named property on an object.
    pub const DEFINE_PROPERTY: &str = "DefineProperty";
    /// String value constructor.
    pub const STRING_CONSTRUCTOR: &str = "JSString";
    /// Numeric value constructor.
    pub const NUMBER_CONSTRUCTOR: &str = "JSNumber";
}
