//! Diagnostic types shared by the compiler and the CLI reporter.

use serde::Serialize;
use std::fmt;

use crate::position::Position;

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning = 0,
    Error = 1,
    Suggestion = 2,
    Message = 3,
}

impl DiagnosticCategory {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            DiagnosticCategory::Warning => "warning",
            DiagnosticCategory::Error => "error",
            DiagnosticCategory::Suggestion => "suggestion",
            DiagnosticCategory::Message => "message",
        }
    }
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub mod diagnostic_codes {
    pub const UNSUPPORTED_STATEMENT: u32 = 1001;
    pub const UNSUPPORTED_EXPRESSION: u32 = 1002;
    pub const COMPUTED_MEMBER_ACCESS: u32 = 1003;
    pub const NESTING_TOO_DEEP: u32 = 1004;
    pub const UNSUPPORTED_PATTERN: u32 = 1005;
    pub const INVALID_PROGRAM_TREE: u32 = 1101;
}

/// A diagnostic message definition with code, category, and message template.
#[derive(Clone, Copy, Debug)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

pub const DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    DiagnosticMessage {
        code: diagnostic_codes::UNSUPPORTED_STATEMENT,
        category: DiagnosticCategory::Error,
        message: "Unsupported statement type '{0}'.",
    },
    DiagnosticMessage {
        code: diagnostic_codes::UNSUPPORTED_EXPRESSION,
        category: DiagnosticCategory::Error,
        message: "Unsupported expression type '{0}'.",
    },
    DiagnosticMessage {
        code: diagnostic_codes::COMPUTED_MEMBER_ACCESS,
        category: DiagnosticCategory::Error,
        message: "Computed member access is not supported.",
    },
    DiagnosticMessage {
        code: diagnostic_codes::NESTING_TOO_DEEP,
        category: DiagnosticCategory::Error,
        message: "Expression nesting exceeds the maximum depth of {0}.",
    },
    DiagnosticMessage {
        code: diagnostic_codes::UNSUPPORTED_PATTERN,
        category: DiagnosticCategory::Error,
        message: "Unsupported binding pattern '{0}'.",
    },
    DiagnosticMessage {
        code: diagnostic_codes::INVALID_PROGRAM_TREE,
        category: DiagnosticCategory::Error,
        message: "Invalid program tree: {0}",
    },
];

/// A compilation diagnostic anchored at a source position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub file: String,
    pub start: Position,
    pub message_text: String,
    pub category: DiagnosticCategory,
    pub code: u32,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    #[must_use]
    pub const fn error(file: String, start: Position, message: String, code: u32) -> Self {
        Self {
            file,
            start,
            message_text: message,
            category: DiagnosticCategory::Error,
            code,
        }
    }

    /// Build an error diagnostic from a registered message template.
    #[must_use]
    pub fn from_code(file: String, start: Position, code: u32, args: &[&str]) -> Self {
        let message = get_message_template(code)
            .map(|template| format_message(template, args))
            .unwrap_or_else(|| args.join(" "));
        let category = get_diagnostic_category(code).unwrap_or(DiagnosticCategory::Error);
        Self {
            file,
            start,
            message_text: message,
            category,
            code,
        }
    }

    /// Format the diagnostic in a simple one-line form.
    ///
    /// Returns a string like: "error[Z1003]: Computed member access is not supported."
    #[must_use]
    pub fn format_simple(&self) -> String {
        format!("{}[Z{}]: {}", self.category, self.code, self.message_text)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

/// Format a diagnostic message by replacing {0}, {1}, etc. with arguments.
#[must_use]
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

/// Look up a diagnostic message definition by code.
#[must_use]
pub fn get_diagnostic_message(code: u32) -> Option<&'static DiagnosticMessage> {
    DIAGNOSTIC_MESSAGES.iter().find(|m| m.code == code)
}

/// Get the message template for a diagnostic code.
#[must_use]
pub fn get_message_template(code: u32) -> Option<&'static str> {
    get_diagnostic_message(code).map(|m| m.message)
}

/// Get the category for a diagnostic code.
#[must_use]
pub fn get_diagnostic_category(code: u32) -> Option<DiagnosticCategory> {
    get_diagnostic_message(code).map(|m| m.category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message_replaces_placeholders() {
        assert_eq!(
            format_message("Unsupported '{0}' at {1}.", &["IfStatement", "3"]),
            "Unsupported 'IfStatement' at 3."
        );
    }

    #[test]
    fn test_from_code_uses_template() {
        let diag = Diagnostic::from_code(
            "main.json".to_string(),
            Position::new(2, 4),
            diagnostic_codes::UNSUPPORTED_EXPRESSION,
            &["ArrowFunctionExpression"],
        );
        assert_eq!(diag.category, DiagnosticCategory::Error);
        assert_eq!(
            diag.message_text,
            "Unsupported expression type 'ArrowFunctionExpression'."
        );
        assert_eq!(
            diag.to_string(),
            "error[Z1002]: Unsupported expression type 'ArrowFunctionExpression'."
        );
    }

    #[test]
    fn test_unknown_code_falls_back_to_args() {
        let diag = Diagnostic::from_code(String::new(), Position::default(), 9999, &["raw text"]);
        assert_eq!(diag.message_text, "raw text");
    }
}
