//! Append-only buffer for generated Go source.

use std::fmt;
use zilla_common::limits::INITIAL_CODE_CAPACITY;

/// Generated code, accumulated in emission order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Code {
    buf: String,
}

impl Default for Code {
    fn default() -> Self {
        Self::new()
    }
}

impl Code {
    #[must_use]
    pub fn new() -> Self {
        Code {
            buf: String::with_capacity(INITIAL_CODE_CAPACITY),
        }
    }

    /// Append a fragment.
    pub fn write(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    /// Append a fragment and terminate the line.
    pub fn write_line(&mut self, text: &str) {
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.buf.lines()
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.buf.lines().count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }

    /// Render with a right-aligned 1-based line number before each line:
    ///
    /// ```text
    ///  9 | x = JSNumber(1.000000)
    /// 10 | global.DefineProperty("x", x)
    /// ```
    #[must_use]
    pub fn with_line_numbers(&self) -> String {
        let width = self.line_count().max(1).to_string().len();
        let mut out = String::with_capacity(self.buf.len() + self.line_count() * (width + 3));
        for (i, line) in self.lines().enumerate() {
            out.push_str(&format!("{:>width$} |", i + 1));
            if !line.is_empty() {
                out.push(' ');
                out.push_str(line);
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}
