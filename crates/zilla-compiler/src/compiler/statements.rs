use tracing::trace;
use zilla_ast::{Pattern, Statement, VariableDeclaration, VariableDeclarator};
use zilla_runtime::names::{DEFINE_PROPERTY, GLOBAL_OBJECT, OBJECT_TYPE};

use super::Compiler;
use super::literals::go_quoted;
use crate::error::{CompileError, CompileErrorKind};

impl<'a> Compiler<'a> {
    // =========================================================================
    // Statements
    // =========================================================================

    pub(super) fn compile_statement(&mut self, stmt: &Statement) -> Result<(), CompileError> {
        trace!(
            kind = stmt.kind_name(),
            line = stmt.loc().start_line(),
            "compiling statement"
        );
        match stmt {
            Statement::Expression(expr_stmt) => {
                self.compile_expression(&expr_stmt.expression)?;
                self.write_line("");
                Ok(())
            }
            Statement::VariableDeclaration(decl) => self.compile_variable_declaration(decl),
            Statement::Unsupported(node) => Err(CompileError::new(
                CompileErrorKind::UnsupportedStatement(node.kind.clone()),
                node.loc,
            )),
        }
    }

    // `let` and `const` compile like `var`: the program has one flat namespace.
    fn compile_variable_declaration(
        &mut self,
        decl: &VariableDeclaration,
    ) -> Result<(), CompileError> {
        for declarator in &decl.declarations {
            self.compile_variable_declarator(declarator)?;
        }
        Ok(())
    }

    /// ```text
    /// var x Object
    /// _ = x
    /// x = <init>
    /// global.DefineProperty("x", x)
    /// ```
    ///
    /// The name joins the Binding Table only after its own initializer has
    /// been translated, so `var x = x` reads the global `x`, while a later
    /// declarator in the same declaration sees it directly.
    fn compile_variable_declarator(
        &mut self,
        declarator: &VariableDeclarator,
    ) -> Result<(), CompileError> {
        let name = match &declarator.id {
            Pattern::Identifier(ident) => ident.name.as_str(),
            Pattern::Unsupported(node) => {
                return Err(CompileError::new(
                    CompileErrorKind::UnsupportedPattern(node.kind.clone()),
                    node.loc,
                ));
            }
        };

        self.write_line(&format!("var {name} {OBJECT_TYPE}"));
        // Declared bindings are not necessarily read again; keep Go's
        // unused-variable check quiet.
        self.write_line(&format!("_ = {name}"));
        if let Some(init) = &declarator.init {
            self.write(&format!("{name} = "));
            self.compile_expression(init)?;
            self.write_line("");
        }
        self.write_line(&format!(
            "{GLOBAL_OBJECT}.{DEFINE_PROPERTY}({}, {name})",
            go_quoted(name)
        ));

        self.bindings.declare(name);
        Ok(())
    }
}
