//! zilla - compile a JavaScript subset to Go source over a dynamic object model.
//!
//! This crate re-exports the workspace crates under one name:
//! - `common` - positions, diagnostics, limits
//! - `ast` - program tree and JSON loader
//! - `runtime` - object model and builtin manifest
//! - `compiler` - the translator

pub use zilla_ast as ast;
pub use zilla_common as common;
pub use zilla_compiler as compiler;
pub use zilla_runtime as runtime;

pub use zilla_compiler::{Code, CompileError, CompilerOptions, compile};

// Tracing subscriber setup for the binaries
pub mod tracing_config;
