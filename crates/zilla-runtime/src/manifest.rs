//! Static description of the runtime's pre-registered built-ins.
//!
//! A manifest maps a global object name to its function-valued properties and
//! the canonical Go symbol implementing each one. It is the read-only view of
//! the runtime the compiler needs, and can be supplied as configuration:
//!
//! ```json
//! { "console": { "log": "ConsoleLog" }, "Math": { "floor": "MathFloor" } }
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

static DEFAULT_MANIFEST: Lazy<BuiltinManifest> = Lazy::new(|| {
    let mut manifest = BuiltinManifest::new();
    for (object, property, symbol) in [
        ("console", "log", "ConsoleLog"),
        ("console", "error", "ConsoleError"),
        ("console", "warn", "ConsoleWarn"),
        ("Math", "floor", "MathFloor"),
        ("Math", "ceil", "MathCeil"),
        ("Math", "abs", "MathAbs"),
        ("Math", "max", "MathMax"),
        ("Math", "min", "MathMin"),
    ] {
        manifest.insert(object, property, symbol);
    }
    manifest
});

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuiltinManifest {
    objects: BTreeMap<String, BTreeMap<String, String>>,
}

impl BuiltinManifest {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-ins shipped with the Go runtime.
    #[must_use]
    pub fn default_manifest() -> &'static BuiltinManifest {
        &DEFAULT_MANIFEST
    }

    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn insert(
        &mut self,
        object: impl Into<String>,
        property: impl Into<String>,
        symbol: impl Into<String>,
    ) {
        self.objects
            .entry(object.into())
            .or_default()
            .insert(property.into(), symbol.into());
    }

    #[must_use]
    pub fn lookup(&self, object: &str, property: &str) -> Option<&str> {
        self.objects
            .get(object)
            .and_then(|props| props.get(property))
            .map(String::as_str)
    }

    /// Add every entry of `other`, replacing symbols for entries both define.
    pub fn extend(&mut self, other: &BuiltinManifest) {
        for (object, property, symbol) in other.iter() {
            self.insert(object, property, symbol);
        }
    }

    /// `(object, property, symbol)` triples in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.objects.iter().flat_map(|(object, props)| {
            props
                .iter()
                .map(move |(prop, symbol)| (object.as_str(), prop.as_str(), symbol.as_str()))
        })
    }

    pub fn objects(&self) -> impl Iterator<Item = &str> {
        self.objects.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.values().map(BTreeMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
