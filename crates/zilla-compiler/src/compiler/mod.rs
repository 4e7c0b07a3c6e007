//! Program walker and translator state.
//!
//! The translation is split across submodules that all extend `Compiler`:
//! - `statements` - statement dispatch and variable declarations
//! - `expressions` - expression dispatch and operator forms
//! - `literals` - identifiers and string/numeric literals
//! - `builtins` - the built-in function shortcut for static member access

use tracing::{debug, debug_span};
use zilla_ast::{Program, Statement};
use zilla_runtime::Realm;

use crate::binder::BindingResolver;
use crate::code::Code;
use crate::error::CompileError;
use crate::options::CompilerOptions;

mod builtins;
mod expressions;
mod literals;
mod statements;

/// Compile a program against the realm described by `options.builtins`, or
/// the runtime's default built-ins when none are configured.
pub fn compile(program: &Program, options: &CompilerOptions) -> Result<Code, CompileError> {
    let realm = match &options.builtins {
        Some(manifest) => Realm::from_manifest(manifest),
        None => Realm::with_defaults(),
    };
    compile_with_realm(program, &realm, options)
}

/// Compile a program, resolving built-ins against an explicit realm.
pub fn compile_with_realm(
    program: &Program,
    realm: &Realm,
    options: &CompilerOptions,
) -> Result<Code, CompileError> {
    let mut compiler = Compiler::new(realm, options);
    compiler.compile_program(program)?;
    Ok(compiler.finish())
}

/// Translator state for one program.
///
/// Holds the output buffer, the Binding Resolver that grows as declarations
/// are translated, and the realm consulted for built-in detection.
pub struct Compiler<'a> {
    code: Code,
    realm: &'a Realm,
    bindings: BindingResolver,
    options: &'a CompilerOptions,
    /// Current expression nesting depth.
    depth: u32,
}

impl<'a> Compiler<'a> {
    #[must_use]
    pub fn new(realm: &'a Realm, options: &'a CompilerOptions) -> Self {
        Compiler {
            code: Code::new(),
            realm,
            bindings: BindingResolver::new(),
            options,
            depth: 0,
        }
    }

    // =========================================================================
    // Program walker
    // =========================================================================

    /// Translate every top-level statement in order. Each one is preceded by
    /// its line comment and followed by a blank separator line.
    pub fn compile_program(&mut self, program: &Program) -> Result<(), CompileError> {
        let _span = debug_span!("compile_program", statements = program.body.len()).entered();

        for stmt in &program.body {
            if self.options.line_comments {
                self.write_line_no(stmt);
            }
            self.compile_statement(stmt)?;
            self.write_line("");
        }

        debug!(
            bindings = self.bindings.len(),
            lines = self.code.line_count(),
            "compiled program"
        );
        Ok(())
    }

    fn write_line_no(&mut self, stmt: &Statement) {
        self.write_line(&format!("// line {}: {}", stmt.loc().start_line(), stmt));
    }

    /// Bindings declared so far.
    #[must_use]
    pub const fn bindings(&self) -> &BindingResolver {
        &self.bindings
    }

    /// Take the generated code.
    #[must_use]
    pub fn finish(self) -> Code {
        self.code
    }

    // =========================================================================
    // Output helpers
    // =========================================================================

    fn write(&mut self, text: &str) {
        self.code.write(text);
    }

    fn write_line(&mut self, text: &str) {
        self.code.write_line(text);
    }
}
