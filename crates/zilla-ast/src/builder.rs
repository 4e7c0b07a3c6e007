//! Helpers for building program trees in code.
//!
//! Expressions built here carry a default location; statements take the
//! source line they should report.

use zilla_common::SourceLocation;

use crate::node::{
    AssignmentExpression, BinaryExpression, CallExpression, Expression, ExpressionStatement,
    Identifier, MemberExpression, NumericLiteral, Pattern, Program, Statement, StringLiteral,
    UnsupportedNode, VariableDeclaration, VariableDeclarator, VariableKind,
};

#[must_use]
pub fn program(body: Vec<Statement>) -> Program {
    Program::new(body)
}

#[must_use]
pub fn expr_stmt(line: u32, expression: Expression) -> Statement {
    Statement::Expression(ExpressionStatement {
        expression,
        loc: SourceLocation::line(line),
    })
}

/// `var a = <init>, b;` from `(name, init)` pairs.
#[must_use]
pub fn var_decl(line: u32, declarators: Vec<(&str, Option<Expression>)>) -> Statement {
    let loc = SourceLocation::line(line);
    Statement::VariableDeclaration(VariableDeclaration {
        kind: VariableKind::Var,
        declarations: declarators
            .into_iter()
            .map(|(name, init)| VariableDeclarator {
                id: Pattern::Identifier(Identifier {
                    name: name.to_string(),
                    loc,
                }),
                init,
                loc,
            })
            .collect(),
        loc,
    })
}

#[must_use]
pub fn unsupported_stmt(line: u32, kind: &str) -> Statement {
    Statement::Unsupported(UnsupportedNode {
        kind: kind.to_string(),
        loc: SourceLocation::line(line),
    })
}

#[must_use]
pub fn ident(name: &str) -> Expression {
    Expression::Identifier(Identifier {
        name: name.to_string(),
        loc: SourceLocation::default(),
    })
}

#[must_use]
pub fn num(value: f64) -> Expression {
    Expression::NumericLiteral(NumericLiteral {
        value,
        raw: None,
        loc: SourceLocation::default(),
    })
}

/// Numeric literal that keeps its source spelling.
#[must_use]
pub fn num_raw(value: f64, raw: &str) -> Expression {
    Expression::NumericLiteral(NumericLiteral {
        value,
        raw: Some(raw.to_string()),
        loc: SourceLocation::default(),
    })
}

#[must_use]
pub fn str_lit(value: &str) -> Expression {
    Expression::StringLiteral(StringLiteral {
        value: value.to_string(),
        loc: SourceLocation::default(),
    })
}

#[must_use]
pub fn call(callee: Expression, arguments: Vec<Expression>) -> Expression {
    Expression::Call(Box::new(CallExpression {
        callee,
        arguments,
        loc: SourceLocation::default(),
    }))
}

/// Static `object.property` access.
#[must_use]
pub fn member(object: Expression, property: &str) -> Expression {
    Expression::Member(Box::new(MemberExpression {
        object,
        property: ident(property),
        computed: false,
        loc: SourceLocation::default(),
    }))
}

/// Computed `object[property]` access.
#[must_use]
pub fn computed_member(object: Expression, property: Expression) -> Expression {
    Expression::Member(Box::new(MemberExpression {
        object,
        property,
        computed: true,
        loc: SourceLocation::default(),
    }))
}

#[must_use]
pub fn assign(left: Expression, operator: &str, right: Expression) -> Expression {
    Expression::Assignment(Box::new(AssignmentExpression {
        operator: operator.to_string(),
        left,
        right,
        loc: SourceLocation::default(),
    }))
}

#[must_use]
pub fn binary(left: Expression, operator: &str, right: Expression) -> Expression {
    Expression::Binary(Box::new(BinaryExpression {
        operator: operator.to_string(),
        left,
        right,
        loc: SourceLocation::default(),
    }))
}

#[must_use]
pub fn unsupported_expr(kind: &str) -> Expression {
    Expression::Unsupported(UnsupportedNode {
        kind: kind.to_string(),
        loc: SourceLocation::default(),
    })
}
