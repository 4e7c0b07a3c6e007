//! Compile a set of program trees to Go.
//!
//! Each input is loaded and compiled independently. A file that fails to load
//! or compile contributes one diagnostic and produces no output; the other
//! files are still compiled.

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use tracing::{debug, info_span, warn};

use zilla_ast::{AstError, File};
use zilla_common::diagnostics::diagnostic_codes;
use zilla_common::{Diagnostic, Position};
use zilla_compiler::compile as compile_program;

use crate::args::CliArgs;
use crate::config::{ResolvedConfig, resolve_config};

/// Generated code for one input when no output directory is configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCode {
    pub source: PathBuf,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct CompilationResult {
    pub diagnostics: Vec<Diagnostic>,
    /// Files written under the output directory.
    pub emitted_files: Vec<PathBuf>,
    /// Code to print, in input order, when there is no output directory.
    pub generated: Vec<GeneratedCode>,
    pub files_read: Vec<PathBuf>,
}

impl CompilationResult {
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Generated code as printed to stdout. When more than one input was
    /// read, each file's code starts with a `// file: <path>` header line.
    #[must_use]
    pub fn stdout_text(&self) -> String {
        let with_headers = self.files_read.len() > 1;
        let mut out = String::new();
        for generated in &self.generated {
            if with_headers {
                out.push_str(&format!("// file: {}\n", generated.source.display()));
            }
            out.push_str(&generated.text);
        }
        out
    }
}

pub fn compile(args: &CliArgs, cwd: &Path) -> Result<CompilationResult> {
    let config = resolve_config(args, cwd)?;
    compile_files(&config)
}

pub fn compile_files(config: &ResolvedConfig) -> Result<CompilationResult> {
    if config.files.is_empty() {
        bail!("no input files");
    }
    if let Some(out_dir) = &config.out_dir {
        std::fs::create_dir_all(out_dir)
            .with_context(|| format!("failed to create output directory: {}", out_dir.display()))?;
    }

    let mut result = CompilationResult::default();
    for path in &config.files {
        let _span = info_span!("compile_file", path = %path.display()).entered();

        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input: {}", path.display()))?;
        result.files_read.push(path.clone());

        let text = match compile_source(&source, path, config) {
            Ok(text) => text,
            Err(diagnostic) => {
                warn!(code = diagnostic.code, "compilation failed");
                result.diagnostics.push(diagnostic);
                continue;
            }
        };

        match &config.out_dir {
            Some(out_dir) => {
                let out_path = output_path(out_dir, path);
                std::fs::write(&out_path, &text)
                    .with_context(|| format!("failed to write output: {}", out_path.display()))?;
                debug!(out = %out_path.display(), "emitted");
                result.emitted_files.push(out_path);
            }
            None => result.generated.push(GeneratedCode {
                source: path.clone(),
                text,
            }),
        }
    }

    Ok(result)
}

/// Load and compile one program tree, rendering it the way it is printed.
fn compile_source(source: &str, path: &Path, config: &ResolvedConfig) -> Result<String, Diagnostic> {
    let file_name = path.display().to_string();

    let file = File::from_json_str(source).map_err(|err| tree_diagnostic(&file_name, &err))?;
    let code = compile_program(&file.program, &config.compiler)
        .map_err(|err| err.to_diagnostic(&file_name))?;

    if config.line_numbers {
        Ok(code.with_line_numbers())
    } else {
        Ok(code.into_string())
    }
}

fn tree_diagnostic(file: &str, err: &AstError) -> Diagnostic {
    // JSON syntax errors carry a position in the input text.
    let start = match err {
        AstError::Json(json) if json.line() > 0 => Position::new(
            u32::try_from(json.line()).unwrap_or(u32::MAX),
            u32::try_from(json.column().saturating_sub(1)).unwrap_or(u32::MAX),
        ),
        _ => Position::default(),
    };
    Diagnostic::from_code(
        file.to_string(),
        start,
        diagnostic_codes::INVALID_PROGRAM_TREE,
        &[&err.to_string()],
    )
}

/// `<out_dir>/<stem>.go` for an input path.
#[must_use]
pub fn output_path(out_dir: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "out".to_string());
    out_dir.join(format!("{stem}.go"))
}
