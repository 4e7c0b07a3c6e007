//! Binding Resolver.
//!
//! Tracks which identifiers the program has declared so far. The translator
//! asks it, per identifier occurrence, whether a direct local reference is
//! valid or the name must be looked up on the global object at run time.
//!
//! Bindings live in a stack of scope frames resolved innermost to outermost.
//! The compiled language has one flat namespace, so in practice only the
//! global frame is used. A name, once declared in a frame, is never removed.

use rustc_hash::FxHashSet;
use smallvec::{SmallVec, smallvec};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct BindingResolver {
    scopes: SmallVec<[FxHashSet<String>; 4]>,
}

impl Default for BindingResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl BindingResolver {
    /// A resolver with an empty global frame.
    #[must_use]
    pub fn new() -> Self {
        BindingResolver {
            scopes: smallvec![FxHashSet::default()],
        }
    }

    /// Declare `name` in the innermost frame. Returns false if the frame
    /// already held it.
    pub fn declare(&mut self, name: &str) -> bool {
        let depth = self.scopes.len();
        let Some(frame) = self.scopes.last_mut() else {
            return false;
        };
        let inserted = frame.insert(name.to_string());
        if inserted {
            debug!(name, depth, "declared binding");
        }
        inserted
    }

    /// Whether `name` resolves to a binding in any enclosing frame.
    #[must_use]
    pub fn is_declared(&self, name: &str) -> bool {
        self.scopes.iter().rev().any(|frame| frame.contains(name))
    }

    pub fn enter_scope(&mut self) {
        self.scopes.push(FxHashSet::default());
    }

    /// Pop the innermost frame. The global frame stays; returns false when
    /// asked to pop it.
    pub fn exit_scope(&mut self) -> bool {
        if self.scopes.len() == 1 {
            return false;
        }
        self.scopes.pop();
        true
    }

    /// Number of frames, the global frame included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Total number of declared names across frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scopes.iter().map(FxHashSet::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
