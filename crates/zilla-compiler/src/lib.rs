//! Translator from the zilla JavaScript subset to Go source.
//!
//! A one-pass, syntax-directed code generator: each node of the program tree
//! is visited once, depth-first and left to right, and immediately appends the
//! equivalent Go text to a `Code` buffer.
//!
//! ```ignore
//! let file = zilla_ast::File::from_json_str(json)?;
//! let code = zilla_compiler::compile(&file.program, &CompilerOptions::default())?;
//! println!("{code}");
//! ```

// Output buffer
pub mod code;
pub use code::Code;

// Binding Resolver - names declared by the program so far
pub mod binder;
pub use binder::BindingResolver;
#[cfg(test)]
#[path = "tests/binder_tests.rs"]
mod binder_tests;

pub mod options;
pub use options::{CompilerOptions, NumericLiteralStyle};

pub mod error;
pub use error::{CompileError, CompileErrorKind};

// Program walker and statement/expression translator
pub mod compiler;
pub use compiler::{Compiler, compile, compile_with_realm};
#[cfg(test)]
#[path = "tests/translator_tests.rs"]
mod translator_tests;
