//! Runtime values and their kinds.

use indexmap::IndexMap;
use std::fmt;

/// Classification of runtime values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Undefined,
    Object,
    Function,
    String,
    Number,
}

impl ValueKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Undefined => "undefined",
            ValueKind::Object => "object",
            ValueKind::Function => "function",
            ValueKind::String => "string",
            ValueKind::Number => "number",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Undefined,
    Object(JsObject),
    Function(JsFunction),
    String(String),
    Number(f64),
}

impl Value {
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Value::Undefined => ValueKind::Undefined,
            Value::Object(_) => ValueKind::Object,
            Value::Function(_) => ValueKind::Function,
            Value::String(_) => ValueKind::String,
            Value::Number(_) => ValueKind::Number,
        }
    }

    #[must_use]
    pub const fn as_object(&self) -> Option<&JsObject> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_function(&self) -> Option<&JsFunction> {
        match self {
            Value::Function(func) => Some(func),
            _ => None,
        }
    }
}

/// Error returned by property lookups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropertyError {
    NotFound(String),
}

impl fmt::Display for PropertyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyError::NotFound(name) => write!(f, "property '{name}' is not defined"),
        }
    }
}

impl std::error::Error for PropertyError {}

/// An object with named properties, kept in definition order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JsObject {
    properties: IndexMap<String, Value>,
}

impl JsObject {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_property(&self, name: &str) -> Result<&Value, PropertyError> {
        self.properties
            .get(name)
            .ok_or_else(|| PropertyError::NotFound(name.to_string()))
    }

    /// Define or overwrite a property.
    pub fn define_property(&mut self, name: impl Into<String>, value: Value) {
        self.properties.insert(name.into(), value);
    }

    #[must_use]
    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// A function value compiled into the runtime under a canonical symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsFunction {
    name: String,
}

impl JsFunction {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        JsFunction { name: name.into() }
    }

    /// Symbol that names this function in generated code.
    #[must_use]
    pub fn func_name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_then_get() {
        let mut obj = JsObject::new();
        obj.define_property("log", Value::Function(JsFunction::new("ConsoleLog")));
        let value = obj.get_property("log").unwrap();
        assert_eq!(value.kind(), ValueKind::Function);
        assert_eq!(value.as_function().unwrap().func_name(), "ConsoleLog");
    }

    #[test]
    fn test_missing_property_is_not_found() {
        let obj = JsObject::new();
        assert_eq!(
            obj.get_property("nope"),
            Err(PropertyError::NotFound("nope".to_string()))
        );
    }

    #[test]
    fn test_redefine_overwrites_in_place() {
        let mut obj = JsObject::new();
        obj.define_property("a", Value::Number(1.0));
        obj.define_property("b", Value::Undefined);
        obj.define_property("a", Value::String("x".to_string()));
        assert_eq!(obj.len(), 2);
        assert_eq!(obj.property_names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(obj.get_property("a").unwrap().kind(), ValueKind::String);
    }
}
