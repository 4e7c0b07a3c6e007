use colored::Colorize;

use zilla_common::{Diagnostic, DiagnosticCategory};

pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    /// Render diagnostics one per line, followed by an error count summary.
    pub fn render(&self, diagnostics: &[Diagnostic]) -> String {
        let mut out = String::new();
        for diagnostic in diagnostics {
            out.push_str(&self.format_diagnostic(diagnostic));
            out.push('\n');
        }
        if let Some(summary) = self.format_summary(diagnostics) {
            out.push('\n');
            out.push_str(&summary);
            out.push('\n');
        }
        out
    }

    pub fn format_diagnostic(&self, diagnostic: &Diagnostic) -> String {
        let mut output = self.format_location(diagnostic);
        output.push_str(" - ");
        output.push_str(&self.format_category(diagnostic.category));

        let code = self.format_code(diagnostic.code);
        if !code.is_empty() {
            output.push(' ');
            output.push_str(&code);
        }
        output.push_str(": ");
        output.push_str(&diagnostic.message_text);
        output
    }

    fn format_location(&self, diagnostic: &Diagnostic) -> String {
        let file = if diagnostic.file.is_empty() {
            "<unknown>"
        } else {
            diagnostic.file.as_str()
        };

        // Line 0 means the position is unknown.
        if diagnostic.start.line == 0 {
            return self.paint_file(file);
        }

        let line = diagnostic.start.line.to_string();
        let column = (diagnostic.start.column + 1).to_string();
        if !self.color {
            return format!("{file}:{line}:{column}");
        }
        format!("{}:{}:{}", file.cyan(), line.yellow(), column.yellow())
    }

    fn paint_file(&self, file: &str) -> String {
        if self.color {
            file.cyan().to_string()
        } else {
            file.to_string()
        }
    }

    fn format_category(&self, category: DiagnosticCategory) -> String {
        let label = category.name();

        if !self.color {
            return label.to_string();
        }

        match category {
            DiagnosticCategory::Error => label.red().bold().to_string(),
            DiagnosticCategory::Warning => label.yellow().bold().to_string(),
            DiagnosticCategory::Suggestion => label.blue().bold().to_string(),
            DiagnosticCategory::Message => label.cyan().bold().to_string(),
        }
    }

    fn format_code(&self, code: u32) -> String {
        if code == 0 {
            return String::new();
        }

        let label = format!("Z{code}");
        if self.color {
            label.bright_blue().to_string()
        } else {
            label
        }
    }

    fn format_summary(&self, diagnostics: &[Diagnostic]) -> Option<String> {
        let errors = diagnostics
            .iter()
            .filter(|d| d.category == DiagnosticCategory::Error)
            .count();
        if errors == 0 {
            return None;
        }

        let mut files: Vec<&str> = diagnostics.iter().map(|d| d.file.as_str()).collect();
        files.sort_unstable();
        files.dedup();
        let text = match (errors, files.len()) {
            (1, _) => "Found 1 error.".to_string(),
            (n, 1) => format!("Found {n} errors in the same file."),
            (n, f) => format!("Found {n} errors in {f} files."),
        };
        Some(text)
    }
}
