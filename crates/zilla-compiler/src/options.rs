//! Compiler options.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use zilla_runtime::BuiltinManifest;

/// How numeric literals are written into `JSNumber(...)` calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericLiteralStyle {
    /// Fixed-point with six decimals: `42` becomes `42.000000`.
    #[default]
    Fixed,
    /// The literal's source spelling, or the shortest rendering that reads
    /// back as the same value when the spelling is unknown.
    Lexical,
}

impl NumericLiteralStyle {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            NumericLiteralStyle::Fixed => "fixed",
            NumericLiteralStyle::Lexical => "lexical",
        }
    }
}

impl fmt::Display for NumericLiteralStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NumericLiteralStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(NumericLiteralStyle::Fixed),
            "lexical" => Ok(NumericLiteralStyle::Lexical),
            other => Err(format!(
                "invalid numeric literal style '{other}'. Expected 'fixed' or 'lexical'"
            )),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompilerOptions {
    /// Emit a `// line N: <source>` comment before each statement.
    pub line_comments: bool,
    pub numeric_literals: NumericLiteralStyle,
    /// Built-ins known to the runtime. `None` uses the runtime's defaults.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub builtins: Option<BuiltinManifest>,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        CompilerOptions {
            line_comments: true,
            numeric_literals: NumericLiteralStyle::Fixed,
            builtins: None,
        }
    }
}
