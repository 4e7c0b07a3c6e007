//! Program tree for the zilla compiler.
//!
//! The tree is produced by an external JavaScript front-end and handed to the
//! compiler as Babel-compatible JSON. This crate provides:
//! - Node types (`Program`, `Statement`, `Expression`, ...)
//! - The JSON loader (`File::from_json_str`)
//! - Single-line source rendering of every node (`Display`)
//! - Builders for constructing trees in tests and benchmarks

pub mod node;
pub use node::{
    AssignmentExpression, BinaryExpression, CallExpression, Expression, ExpressionStatement, File,
    Identifier, MemberExpression, NumericLiteral, Pattern, Program, Statement, StringLiteral,
    UnsupportedNode, VariableDeclaration, VariableDeclarator, VariableKind,
};

// Single-line rendering used by diagnostic line comments
mod display;

// JSON loading
pub mod json;
pub use json::AstError;
#[cfg(test)]
#[path = "tests/json_tests.rs"]
mod json_tests;

pub mod builder;
