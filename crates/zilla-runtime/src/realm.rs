//! The global environment generated code runs against.

use tracing::debug;

use crate::manifest::BuiltinManifest;
use crate::value::{JsFunction, JsObject, Value};

/// Owner of the global object.
#[derive(Clone, Debug, Default)]
pub struct Realm {
    global: JsObject,
}

impl Realm {
    /// A realm with an empty global object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A realm pre-seeded with the runtime's default built-ins.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::from_manifest(BuiltinManifest::default_manifest())
    }

    /// Seed the global object with one object per manifest entry, holding a
    /// function value per listed property.
    #[must_use]
    pub fn from_manifest(manifest: &BuiltinManifest) -> Self {
        let mut realm = Realm::new();
        for (object, property, symbol) in manifest.iter() {
            realm.define_builtin(object, property, symbol);
        }
        debug!(
            objects = realm.global.len(),
            functions = manifest.len(),
            "seeded realm from builtin manifest"
        );
        realm
    }

    /// Register `object.property` as a built-in implemented by `symbol`.
    ///
    /// A non-object value already stored under `object` is replaced.
    pub fn define_builtin(&mut self, object: &str, property: &str, symbol: &str) {
        let mut target = match self.global.get_property(object) {
            Ok(Value::Object(existing)) => existing.clone(),
            _ => JsObject::new(),
        };
        target.define_property(property, Value::Function(JsFunction::new(symbol)));
        self.global.define_property(object, Value::Object(target));
    }

    #[must_use]
    pub const fn global(&self) -> &JsObject {
        &self.global
    }

    pub fn global_mut(&mut self) -> &mut JsObject {
        &mut self.global
    }
}
