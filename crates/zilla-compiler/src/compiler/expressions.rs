use zilla_ast::{
    AssignmentExpression, BinaryExpression, CallExpression, Expression, MemberExpression,
};
use zilla_common::limits::MAX_EXPRESSION_DEPTH;
use zilla_runtime::names::OBJECT_TYPE;

use super::Compiler;
use crate::error::{CompileError, CompileErrorKind};

impl<'a> Compiler<'a> {
    // =========================================================================
    // Expressions
    // =========================================================================

    pub(super) fn compile_expression(&mut self, expr: &Expression) -> Result<(), CompileError> {
        if self.depth >= MAX_EXPRESSION_DEPTH {
            return Err(CompileError::new(
                CompileErrorKind::NestingTooDeep(MAX_EXPRESSION_DEPTH),
                expr.loc(),
            ));
        }

        self.depth += 1;
        let result = match expr {
            Expression::Call(call) => self.compile_call_expression(call),
            Expression::Assignment(assign) => self.compile_assignment_expression(assign),
            Expression::Binary(binary) => self.compile_binary_expression(binary),
            Expression::Member(member) => self.compile_member_expression(member),
            Expression::Identifier(ident) => {
                self.compile_identifier(&ident.name);
                Ok(())
            }
            Expression::StringLiteral(lit) => {
                self.compile_string_literal(&lit.value);
                Ok(())
            }
            Expression::NumericLiteral(lit) => {
                self.compile_numeric_literal(lit);
                Ok(())
            }
            Expression::Unsupported(node) => Err(CompileError::new(
                CompileErrorKind::UnsupportedExpression(node.kind.clone()),
                node.loc,
            )),
        };

        self.depth -= 1;
        result
    }

    /// `callee([]Object{arg0, arg1})`
    fn compile_call_expression(&mut self, call: &CallExpression) -> Result<(), CompileError> {
        self.compile_expression(&call.callee)?;
        self.write(&format!("([]{OBJECT_TYPE}{{"));
        for (i, arg) in call.arguments.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.compile_expression(arg)?;
        }
        self.write("})");
        Ok(())
    }

    fn compile_member_expression(
        &mut self,
        member: &MemberExpression,
    ) -> Result<(), CompileError> {
        if member.computed {
            return Err(CompileError::new(
                CompileErrorKind::ComputedMemberAccess,
                member.loc,
            ));
        }

        if let Some(symbol) = self.builtin_function(member) {
            self.write(symbol);
            return Ok(());
        }

        // A static property is a name, not a binding reference.
        let Some(property) = member.property.as_identifier() else {
            return Err(CompileError::new(
                CompileErrorKind::UnsupportedExpression(member.property.kind_name().to_string()),
                member.property.loc(),
            ));
        };
        self.compile_expression(&member.object)?;
        self.write(".");
        self.write(&property.name);
        Ok(())
    }

    // Operators pass through verbatim, unvalidated.
    fn compile_assignment_expression(
        &mut self,
        assign: &AssignmentExpression,
    ) -> Result<(), CompileError> {
        self.compile_expression(&assign.left)?;
        self.write(&format!(" {} ", assign.operator));
        self.compile_expression(&assign.right)
    }

    fn compile_binary_expression(&mut self, binary: &BinaryExpression) -> Result<(), CompileError> {
        self.compile_expression(&binary.left)?;
        self.write(&format!(" {} ", binary.operator));
        self.compile_expression(&binary.right)
    }
}
