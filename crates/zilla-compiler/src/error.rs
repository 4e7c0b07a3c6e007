//! Translation errors.
//!
//! Every error aborts the compilation of the whole program; there is no
//! partial output. Misses in the Binding Table or in built-in detection are
//! not errors, they select the generic emission instead.

use std::fmt;
use zilla_common::diagnostics::diagnostic_codes;
use zilla_common::{Diagnostic, SourceLocation};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CompileErrorKind {
    /// Statement node type outside the compiled subset.
    UnsupportedStatement(String),
    /// Expression node type outside the compiled subset.
    UnsupportedExpression(String),
    /// Destructuring or other non-identifier declarator target.
    UnsupportedPattern(String),
    /// `obj[expr]` member access.
    ComputedMemberAccess,
    /// Expression nesting exceeded the limit carried in the variant.
    NestingTooDeep(u32),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompileError {
    pub kind: CompileErrorKind,
    pub loc: SourceLocation,
}

impl CompileError {
    #[must_use]
    pub const fn new(kind: CompileErrorKind, loc: SourceLocation) -> Self {
        CompileError { kind, loc }
    }

    #[must_use]
    pub const fn code(&self) -> u32 {
        match self.kind {
            CompileErrorKind::UnsupportedStatement(_) => diagnostic_codes::UNSUPPORTED_STATEMENT,
            CompileErrorKind::UnsupportedExpression(_) => diagnostic_codes::UNSUPPORTED_EXPRESSION,
            CompileErrorKind::UnsupportedPattern(_) => diagnostic_codes::UNSUPPORTED_PATTERN,
            CompileErrorKind::ComputedMemberAccess => diagnostic_codes::COMPUTED_MEMBER_ACCESS,
            CompileErrorKind::NestingTooDeep(_) => diagnostic_codes::NESTING_TOO_DEEP,
        }
    }

    /// Convert into a diagnostic reported against `file`.
    #[must_use]
    pub fn to_diagnostic(&self, file: &str) -> Diagnostic {
        let depth;
        let args: Vec<&str> = match &self.kind {
            CompileErrorKind::UnsupportedStatement(kind)
            | CompileErrorKind::UnsupportedExpression(kind)
            | CompileErrorKind::UnsupportedPattern(kind) => vec![kind.as_str()],
            CompileErrorKind::ComputedMemberAccess => Vec::new(),
            CompileErrorKind::NestingTooDeep(limit) => {
                depth = limit.to_string();
                vec![depth.as_str()]
            }
        };
        Diagnostic::from_code(file.to_string(), self.loc.start, self.code(), &args)
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            CompileErrorKind::UnsupportedStatement(kind) => {
                write!(f, "unsupported statement type '{kind}'")?;
            }
            CompileErrorKind::UnsupportedExpression(kind) => {
                write!(f, "unsupported expression type '{kind}'")?;
            }
            CompileErrorKind::UnsupportedPattern(kind) => {
                write!(f, "unsupported binding pattern '{kind}'")?;
            }
            CompileErrorKind::ComputedMemberAccess => {
                write!(f, "computed MemberExpression is not supported")?;
            }
            CompileErrorKind::NestingTooDeep(limit) => {
                write!(f, "expression nesting exceeds the maximum depth of {limit}")?;
            }
        }
        write!(f, " at {}", self.loc.start)
    }
}

impl std::error::Error for CompileError {}
