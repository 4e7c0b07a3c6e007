use std::fmt::Write;
use tracing::debug;
use zilla_ast::NumericLiteral;
use zilla_runtime::names::{GET_PROPERTY, GLOBAL_OBJECT, NUMBER_CONSTRUCTOR, STRING_CONSTRUCTOR};

use super::Compiler;
use crate::options::NumericLiteralStyle;

impl<'a> Compiler<'a> {
    // =========================================================================
    // Identifiers and literals
    // =========================================================================

    /// Names declared earlier in the program are direct references; anything
    /// else is looked up on the global object when the generated code runs.
    pub(super) fn compile_identifier(&mut self, name: &str) {
        if self.bindings.is_declared(name) {
            self.write(name);
        } else {
            debug!(name, "emitting dynamic global lookup");
            self.write(&format!("{GLOBAL_OBJECT}.{GET_PROPERTY}({})", go_quoted(name)));
        }
    }

    pub(super) fn compile_string_literal(&mut self, value: &str) {
        let mut out = String::with_capacity(value.len() + STRING_CONSTRUCTOR.len() + 4);
        out.push_str(STRING_CONSTRUCTOR);
        out.push_str("(\"");
        push_go_escaped(&mut out, value);
        out.push_str("\")");
        self.write(&out);
    }

    pub(super) fn compile_numeric_literal(&mut self, lit: &NumericLiteral) {
        let rendered = match self.options.numeric_literals {
            NumericLiteralStyle::Fixed => format!("{:.6}", lit.value),
            NumericLiteralStyle::Lexical => match &lit.raw {
                Some(raw) => raw.clone(),
                None => lit.value.to_string(),
            },
        };
        self.write(&format!("{NUMBER_CONSTRUCTOR}({rendered})"));
    }
}

/// `value` as a Go interpreted string literal, quotes included.
pub(super) fn go_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    push_go_escaped(&mut out, value);
    out.push('"');
    out
}

/// Escape `value` for a Go interpreted string literal, so the Go string holds
/// exactly the literal's text.
fn push_go_escaped(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 || c == '\x7F' => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
}
