//! Single-line JavaScript rendering of program tree nodes.
//!
//! The compiler writes this rendering into a `//` comment above each
//! translated statement, so it must never contain a line break.

use std::fmt::{self, Display, Formatter, Write};
use zilla_common::limits::MAX_RENDER_DEPTH;

use crate::node::{
    Expression, Identifier, NumericLiteral, Pattern, Program, Statement, StringLiteral,
    VariableDeclaration, VariableDeclarator,
};

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, stmt) in self.body.iter().enumerate() {
            if i > 0 {
                f.write_char(' ')?;
            }
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Expression(stmt) => write!(f, "{};", stmt.expression),
            Statement::VariableDeclaration(decl) => write!(f, "{decl};"),
            Statement::Unsupported(node) => write!(f, "<{}>", node.kind),
        }
    }
}

impl Display for VariableDeclaration {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.keyword())?;
        for (i, declarator) in self.declarations.iter().enumerate() {
            f.write_str(if i == 0 { " " } else { ", " })?;
            write!(f, "{declarator}")?;
        }
        Ok(())
    }
}

impl Display for VariableDeclarator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)?;
        if let Some(init) = &self.init {
            write!(f, " = {init}")?;
        }
        Ok(())
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Identifier(ident) => write!(f, "{ident}"),
            Pattern::Unsupported(node) => write!(f, "<{}>", node.kind),
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_expression(f, self, 0)
    }
}

/// Past `MAX_RENDER_DEPTH` a subexpression renders as `…`.
fn write_expression(f: &mut Formatter<'_>, expr: &Expression, depth: u32) -> fmt::Result {
    if depth >= MAX_RENDER_DEPTH {
        return f.write_char('…');
    }
    let depth = depth + 1;
    match expr {
        Expression::Call(call) => {
            write_expression(f, &call.callee, depth)?;
            f.write_char('(')?;
            for (i, arg) in call.arguments.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_expression(f, arg, depth)?;
            }
            f.write_char(')')
        }
        Expression::Assignment(assign) => {
            write_expression(f, &assign.left, depth)?;
            write!(f, " {} ", assign.operator)?;
            write_expression(f, &assign.right, depth)
        }
        Expression::Binary(binary) => {
            write_operand(f, &binary.left, depth)?;
            write!(f, " {} ", binary.operator)?;
            write_operand(f, &binary.right, depth)
        }
        Expression::Member(member) => {
            write_operand(f, &member.object, depth)?;
            if member.computed {
                f.write_char('[')?;
                write_expression(f, &member.property, depth)?;
                f.write_char(']')
            } else {
                f.write_char('.')?;
                write_expression(f, &member.property, depth)
            }
        }
        Expression::Identifier(ident) => write!(f, "{ident}"),
        Expression::StringLiteral(lit) => write!(f, "{lit}"),
        Expression::NumericLiteral(lit) => write!(f, "{lit}"),
        Expression::Unsupported(node) => write!(f, "<{}>", node.kind),
    }
}

/// Operands that are themselves operator expressions get parentheses, so the
/// rendering stays unambiguous without tracking precedence.
fn write_operand(f: &mut Formatter<'_>, expr: &Expression, depth: u32) -> fmt::Result {
    match expr {
        Expression::Binary(_) | Expression::Assignment(_) => {
            f.write_char('(')?;
            write_expression(f, expr, depth)?;
            f.write_char(')')
        }
        _ => write_expression(f, expr, depth),
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Display for StringLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        for ch in self.value.chars() {
            match ch {
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\t' => f.write_str("\\t")?,
                '\\' => f.write_str("\\\\")?,
                '"' => f.write_str("\\\"")?,
                c if (c as u32) < 0x20 || c == '\x7F' || c == '\u{2028}' || c == '\u{2029}' => {
                    write!(f, "\\u{:04X}", c as u32)?;
                }
                c => f.write_char(c)?,
            }
        }
        f.write_char('"')
    }
}

impl Display for NumericLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.raw {
            Some(raw) => f.write_str(raw),
            None => write!(f, "{}", self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::builder::*;

    #[test]
    fn test_renders_declaration_and_call() {
        let decl = var_decl(1, vec![("x", Some(num(1.0)))]);
        assert_eq!(decl.to_string(), "var x = 1;");

        let stmt = expr_stmt(2, call(member(ident("console"), "log"), vec![ident("x")]));
        assert_eq!(stmt.to_string(), "console.log(x);");
    }

    #[test]
    fn test_renders_computed_member_and_nested_binary() {
        let stmt = expr_stmt(1, computed_member(ident("obj"), ident("x")));
        assert_eq!(stmt.to_string(), "obj[x];");

        let expr = binary(binary(ident("a"), "+", ident("b")), "*", num(2.0));
        assert_eq!(expr.to_string(), "(a + b) * 2");
    }

    #[test]
    fn test_string_rendering_never_breaks_the_line() {
        let rendered = expr_stmt(1, str_lit("a\nb\u{2028}\"c\"")).to_string();
        assert!(!rendered.contains('\n'));
        assert_eq!(rendered, "\"a\\nb\\u2028\\\"c\\\"\";");
    }

    #[test]
    fn test_multiple_declarators() {
        let decl = var_decl(1, vec![("a", Some(num(1.0))), ("b", None)]);
        assert_eq!(decl.to_string(), "var a = 1, b;");
    }

    #[test]
    fn test_deep_nesting_is_elided() {
        let mut expr = ident("x");
        for _ in 0..5_000 {
            expr = call(ident("f"), vec![expr]);
        }
        let rendered = expr_stmt(1, expr).to_string();
        assert!(rendered.starts_with("f(f(f("), "{}", &rendered[..20]);
        assert!(rendered.contains('…'));
        assert!(!rendered.contains('x'));
        let depth = zilla_common::limits::MAX_RENDER_DEPTH as usize;
        assert_eq!(rendered.matches('(').count(), depth);
    }
}
