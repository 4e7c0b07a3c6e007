//! Loading program trees from front-end JSON.
//!
//! Accepts the Babel AST shape (`File` → `Program` → `body`), plus the ESTree
//! `Literal` node for string and numeric literals. Node types outside the
//! compiled subset load as `UnsupportedNode`s; only structurally broken input
//! is an `AstError`.

use serde_json::{Map, Value};
use std::fmt;
use tracing::debug;
use zilla_common::limits::MAX_TREE_LOAD_DEPTH;
use zilla_common::{Position, SourceLocation};

use crate::node::{
    AssignmentExpression, BinaryExpression, CallExpression, Expression, ExpressionStatement, File,
    Identifier, MemberExpression, NumericLiteral, Pattern, Program, Statement, StringLiteral,
    UnsupportedNode, VariableDeclaration, VariableDeclarator, VariableKind,
};

/// Errors produced while loading a program tree.
#[derive(Debug)]
pub enum AstError {
    /// The input is not valid JSON.
    Json(serde_json::Error),
    /// A required field is absent.
    MissingField { path: String, field: &'static str },
    /// A field is present but has the wrong shape.
    InvalidField { path: String, expected: &'static str },
    /// The root node is neither `File` nor `Program`.
    UnexpectedRoot(String),
    /// Nesting exceeds `MAX_TREE_LOAD_DEPTH`.
    TooDeep { path: String },
}

impl fmt::Display for AstError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AstError::Json(err) => write!(f, "malformed JSON: {err}"),
            AstError::MissingField { path, field } => {
                write!(f, "missing field '{field}' at {path}")
            }
            AstError::InvalidField { path, expected } => {
                write!(f, "expected {expected} at {path}")
            }
            AstError::UnexpectedRoot(kind) => {
                write!(f, "expected a File or Program root node, found '{kind}'")
            }
            AstError::TooDeep { path } => write!(
                f,
                "program tree is nested deeper than {MAX_TREE_LOAD_DEPTH} levels at {path}"
            ),
        }
    }
}

impl std::error::Error for AstError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AstError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AstError {
    fn from(err: serde_json::Error) -> Self {
        AstError::Json(err)
    }
}

impl File {
    /// Parse a program tree from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, AstError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json_value(&value)
    }

    /// Build a program tree from an already-parsed JSON value.
    pub fn from_json_value(value: &Value) -> Result<Self, AstError> {
        let mut loader = Loader { depth: 0 };
        let root = as_object(value, "$")?;
        let program = match node_type(root, "$")? {
            "File" => {
                let program = field(root, "$", "program")?;
                loader.program(as_object(program, "$.program")?, "$.program")?
            }
            "Program" => loader.program(root, "$")?,
            other => return Err(AstError::UnexpectedRoot(other.to_string())),
        };
        debug!(statements = program.body.len(), "loaded program tree");
        Ok(File { program })
    }
}

struct Loader {
    depth: u32,
}

impl Loader {
    fn program(&mut self, node: &Map<String, Value>, path: &str) -> Result<Program, AstError> {
        let body_path = format!("{path}.body");
        let body = as_array(field(node, path, "body")?, &body_path)?
            .iter()
            .enumerate()
            .map(|(i, stmt)| self.statement(stmt, &format!("{body_path}[{i}]")))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Program {
            body,
            loc: location(node),
        })
    }

    fn statement(&mut self, value: &Value, path: &str) -> Result<Statement, AstError> {
        let node = as_object(value, path)?;
        let loc = location(node);
        match node_type(node, path)? {
            "ExpressionStatement" => {
                let expr_path = format!("{path}.expression");
                let expression = self.expression(field(node, path, "expression")?, &expr_path)?;
                Ok(Statement::Expression(ExpressionStatement { expression, loc }))
            }
            "VariableDeclaration" => self.variable_declaration(node, path, loc),
            other => Ok(Statement::Unsupported(UnsupportedNode {
                kind: other.to_string(),
                loc,
            })),
        }
    }

    fn variable_declaration(
        &mut self,
        node: &Map<String, Value>,
        path: &str,
        loc: SourceLocation,
    ) -> Result<Statement, AstError> {
        let kind_path = format!("{path}.kind");
        let kind = match node.get("kind") {
            None => VariableKind::Var,
            Some(kind) => kind
                .as_str()
                .and_then(VariableKind::from_keyword)
                .ok_or(AstError::InvalidField {
                    path: kind_path,
                    expected: "one of \"var\", \"let\", \"const\"",
                })?,
        };

        let decls_path = format!("{path}.declarations");
        let mut declarations = Vec::new();
        for (i, decl) in as_array(field(node, path, "declarations")?, &decls_path)?
            .iter()
            .enumerate()
        {
            let decl_path = format!("{decls_path}[{i}]");
            let decl_node = as_object(decl, &decl_path)?;
            let id = self.pattern(field(decl_node, &decl_path, "id")?, &format!("{decl_path}.id"))?;
            let init = match decl_node.get("init") {
                None | Some(Value::Null) => None,
                Some(init) => Some(self.expression(init, &format!("{decl_path}.init"))?),
            };
            declarations.push(VariableDeclarator {
                id,
                init,
                loc: location(decl_node),
            });
        }

        Ok(Statement::VariableDeclaration(VariableDeclaration {
            kind,
            declarations,
            loc,
        }))
    }

    fn pattern(&mut self, value: &Value, path: &str) -> Result<Pattern, AstError> {
        let node = as_object(value, path)?;
        match node_type(node, path)? {
            "Identifier" => Ok(Pattern::Identifier(identifier(node, path)?)),
            other => Ok(Pattern::Unsupported(UnsupportedNode {
                kind: other.to_string(),
                loc: location(node),
            })),
        }
    }

    fn expression(&mut self, value: &Value, path: &str) -> Result<Expression, AstError> {
        self.depth += 1;
        if self.depth > MAX_TREE_LOAD_DEPTH {
            return Err(AstError::TooDeep {
                path: path.to_string(),
            });
        }
        let result = self.expression_inner(value, path);
        self.depth -= 1;
        result
    }

    fn expression_inner(&mut self, value: &Value, path: &str) -> Result<Expression, AstError> {
        let node = as_object(value, path)?;
        let loc = location(node);
        let child = |name: &str| format!("{path}.{name}");

        let expr = match node_type(node, path)? {
            "CallExpression" => {
                let callee = self.expression(field(node, path, "callee")?, &child("callee"))?;
                let args_path = child("arguments");
                let arguments = as_array(field(node, path, "arguments")?, &args_path)?
                    .iter()
                    .enumerate()
                    .map(|(i, arg)| self.expression(arg, &format!("{args_path}[{i}]")))
                    .collect::<Result<Vec<_>, _>>()?;
                Expression::Call(Box::new(CallExpression {
                    callee,
                    arguments,
                    loc,
                }))
            }
            "AssignmentExpression" => {
                let operator = str_field(node, path, "operator")?.to_string();
                let left = self.expression(field(node, path, "left")?, &child("left"))?;
                let right = self.expression(field(node, path, "right")?, &child("right"))?;
                Expression::Assignment(Box::new(AssignmentExpression {
                    operator,
                    left,
                    right,
                    loc,
                }))
            }
            "BinaryExpression" => {
                let operator = str_field(node, path, "operator")?.to_string();
                let left = self.expression(field(node, path, "left")?, &child("left"))?;
                let right = self.expression(field(node, path, "right")?, &child("right"))?;
                Expression::Binary(Box::new(BinaryExpression {
                    operator,
                    left,
                    right,
                    loc,
                }))
            }
            "MemberExpression" => {
                let object = self.expression(field(node, path, "object")?, &child("object"))?;
                let property =
                    self.expression(field(node, path, "property")?, &child("property"))?;
                let computed = match node.get("computed") {
                    None => false,
                    Some(flag) => flag.as_bool().ok_or(AstError::InvalidField {
                        path: child("computed"),
                        expected: "a boolean",
                    })?,
                };
                Expression::Member(Box::new(MemberExpression {
                    object,
                    property,
                    computed,
                    loc,
                }))
            }
            // Babel with `createParenthesizedExpressions` wraps grouped
            // expressions; the grouping carries no meaning for translation.
            "ParenthesizedExpression" => {
                return self.expression(field(node, path, "expression")?, &child("expression"));
            }
            "Identifier" => Expression::Identifier(identifier(node, path)?),
            "StringLiteral" => Expression::StringLiteral(StringLiteral {
                value: str_field(node, path, "value")?.to_string(),
                loc,
            }),
            "NumericLiteral" => Expression::NumericLiteral(NumericLiteral {
                value: number_field(node, path, "value")?,
                raw: node
                    .get("extra")
                    .and_then(|extra| extra.get("raw"))
                    .and_then(Value::as_str)
                    .map(str::to_string),
                loc,
            }),
            "Literal" => estree_literal(node, path, loc)?,
            other => Expression::Unsupported(UnsupportedNode {
                kind: other.to_string(),
                loc,
            }),
        };
        Ok(expr)
    }
}

/// ESTree folds every literal into one `Literal` node; only strings and
/// numbers map onto the compiled subset.
fn estree_literal(
    node: &Map<String, Value>,
    path: &str,
    loc: SourceLocation,
) -> Result<Expression, AstError> {
    let value = field(node, path, "value")?;
    let expr = match value {
        Value::String(text) => Expression::StringLiteral(StringLiteral {
            value: text.clone(),
            loc,
        }),
        Value::Number(number) => Expression::NumericLiteral(NumericLiteral {
            value: number.as_f64().ok_or(AstError::InvalidField {
                path: format!("{path}.value"),
                expected: "a finite number",
            })?,
            raw: node.get("raw").and_then(Value::as_str).map(str::to_string),
            loc,
        }),
        _ => Expression::Unsupported(UnsupportedNode {
            kind: "Literal".to_string(),
            loc,
        }),
    };
    Ok(expr)
}

fn identifier(node: &Map<String, Value>, path: &str) -> Result<Identifier, AstError> {
    Ok(Identifier {
        name: str_field(node, path, "name")?.to_string(),
        loc: location(node),
    })
}

// =============================================================================
// JSON access helpers
// =============================================================================

fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, AstError> {
    value.as_object().ok_or_else(|| AstError::InvalidField {
        path: path.to_string(),
        expected: "a node object",
    })
}

fn as_array<'a>(value: &'a Value, path: &str) -> Result<&'a Vec<Value>, AstError> {
    value.as_array().ok_or_else(|| AstError::InvalidField {
        path: path.to_string(),
        expected: "an array",
    })
}

fn field<'a>(
    node: &'a Map<String, Value>,
    path: &str,
    name: &'static str,
) -> Result<&'a Value, AstError> {
    node.get(name).ok_or_else(|| AstError::MissingField {
        path: path.to_string(),
        field: name,
    })
}

fn node_type<'a>(node: &'a Map<String, Value>, path: &str) -> Result<&'a str, AstError> {
    str_field(node, path, "type")
}

fn str_field<'a>(
    node: &'a Map<String, Value>,
    path: &str,
    name: &'static str,
) -> Result<&'a str, AstError> {
    field(node, path, name)?
        .as_str()
        .ok_or_else(|| AstError::InvalidField {
            path: format!("{path}.{name}"),
            expected: "a string",
        })
}

fn number_field(
    node: &Map<String, Value>,
    path: &str,
    name: &'static str,
) -> Result<f64, AstError> {
    field(node, path, name)?
        .as_f64()
        .ok_or_else(|| AstError::InvalidField {
            path: format!("{path}.{name}"),
            expected: "a number",
        })
}

/// Read Babel/ESTree `loc`. Front-ends run without location tracking omit it,
/// in which case the node reports line 0.
fn location(node: &Map<String, Value>) -> SourceLocation {
    let Some(loc) = node.get("loc") else {
        return SourceLocation::default();
    };
    SourceLocation::new(position(loc.get("start")), position(loc.get("end")))
}

fn position(value: Option<&Value>) -> Position {
    let read = |name: &str| {
        value
            .and_then(|pos| pos.get(name))
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(0)
    };
    Position::new(read("line"), read("column"))
}
