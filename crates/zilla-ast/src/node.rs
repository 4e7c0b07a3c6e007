//! Node types of the program tree.
//!
//! Only the constructs the compiler understands get dedicated variants. Any
//! other node the front-end produces is kept as an `UnsupportedNode` carrying
//! its original type name, so the compiler can reject it with a located
//! diagnostic instead of the loader failing on it.

use zilla_common::SourceLocation;

/// Root of a loaded program tree.
#[derive(Clone, Debug, PartialEq)]
pub struct File {
    pub program: Program,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    pub body: Vec<Statement>,
    pub loc: SourceLocation,
}

impl Program {
    #[must_use]
    pub fn new(body: Vec<Statement>) -> Self {
        Program {
            body,
            loc: SourceLocation::default(),
        }
    }
}

// =============================================================================
// Statements
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    Expression(ExpressionStatement),
    VariableDeclaration(VariableDeclaration),
    Unsupported(UnsupportedNode),
}

impl Statement {
    #[must_use]
    pub fn loc(&self) -> SourceLocation {
        match self {
            Statement::Expression(stmt) => stmt.loc,
            Statement::VariableDeclaration(decl) => decl.loc,
            Statement::Unsupported(node) => node.loc,
        }
    }

    /// The front-end's name for this node type.
    #[must_use]
    pub fn kind_name(&self) -> &str {
        match self {
            Statement::Expression(_) => "ExpressionStatement",
            Statement::VariableDeclaration(_) => "VariableDeclaration",
            Statement::Unsupported(node) => &node.kind,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExpressionStatement {
    pub expression: Expression,
    pub loc: SourceLocation,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VariableKind {
    #[default]
    Var,
    Let,
    Const,
}

impl VariableKind {
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            VariableKind::Var => "var",
            VariableKind::Let => "let",
            VariableKind::Const => "const",
        }
    }

    #[must_use]
    pub fn from_keyword(text: &str) -> Option<Self> {
        match text {
            "var" => Some(VariableKind::Var),
            "let" => Some(VariableKind::Let),
            "const" => Some(VariableKind::Const),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct VariableDeclaration {
    pub kind: VariableKind,
    pub declarations: Vec<VariableDeclarator>,
    pub loc: SourceLocation,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VariableDeclarator {
    pub id: Pattern,
    pub init: Option<Expression>,
    pub loc: SourceLocation,
}

/// Binding target of a declarator. Destructuring patterns are kept as
/// unsupported nodes.
#[derive(Clone, Debug, PartialEq)]
pub enum Pattern {
    Identifier(Identifier),
    Unsupported(UnsupportedNode),
}

// =============================================================================
// Expressions
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    Call(Box<CallExpression>),
    Assignment(Box<AssignmentExpression>),
    Binary(Box<BinaryExpression>),
    Member(Box<MemberExpression>),
    Identifier(Identifier),
    StringLiteral(StringLiteral),
    NumericLiteral(NumericLiteral),
    Unsupported(UnsupportedNode),
}

impl Expression {
    #[must_use]
    pub fn loc(&self) -> SourceLocation {
        match self {
            Expression::Call(call) => call.loc,
            Expression::Assignment(assign) => assign.loc,
            Expression::Binary(binary) => binary.loc,
            Expression::Member(member) => member.loc,
            Expression::Identifier(ident) => ident.loc,
            Expression::StringLiteral(lit) => lit.loc,
            Expression::NumericLiteral(lit) => lit.loc,
            Expression::Unsupported(node) => node.loc,
        }
    }

    #[must_use]
    pub fn kind_name(&self) -> &str {
        match self {
            Expression::Call(_) => "CallExpression",
            Expression::Assignment(_) => "AssignmentExpression",
            Expression::Binary(_) => "BinaryExpression",
            Expression::Member(_) => "MemberExpression",
            Expression::Identifier(_) => "Identifier",
            Expression::StringLiteral(_) => "StringLiteral",
            Expression::NumericLiteral(_) => "NumericLiteral",
            Expression::Unsupported(node) => &node.kind,
        }
    }

    #[must_use]
    pub fn as_identifier(&self) -> Option<&Identifier> {
        match self {
            Expression::Identifier(ident) => Some(ident),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CallExpression {
    pub callee: Expression,
    pub arguments: Vec<Expression>,
    pub loc: SourceLocation,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AssignmentExpression {
    pub operator: String,
    pub left: Expression,
    pub right: Expression,
    pub loc: SourceLocation,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BinaryExpression {
    pub operator: String,
    pub left: Expression,
    pub right: Expression,
    pub loc: SourceLocation,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MemberExpression {
    pub object: Expression,
    pub property: Expression,
    /// `obj[prop]` rather than `obj.prop`.
    pub computed: bool,
    pub loc: SourceLocation,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
    pub loc: SourceLocation,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringLiteral {
    pub value: String,
    pub loc: SourceLocation,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NumericLiteral {
    pub value: f64,
    /// Lexical form from the source (`0x2A`, `1e3`), when the front-end kept it.
    pub raw: Option<String>,
    pub loc: SourceLocation,
}

/// A node of a type the compiler does not model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnsupportedNode {
    pub kind: String,
    pub loc: SourceLocation,
}
