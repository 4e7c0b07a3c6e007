use clap::{ArgAction, Parser};
use std::path::PathBuf;

use zilla_compiler::NumericLiteralStyle;

/// CLI arguments for the zilla binary.
#[derive(Parser, Debug, Default)]
#[command(
    name = "zilla",
    version,
    about = "Compile JavaScript program trees to Go"
)]
pub struct CliArgs {
    // ==================== Project ====================
    /// Path to zilla.json or a directory containing it.
    #[arg(short = 'p', long = "project")]
    pub project: Option<PathBuf>,

    /// Redirect generated code to this directory, one `<stem>.go` per input.
    #[arg(long = "outDir", alias = "out-dir")]
    pub out_dir: Option<PathBuf>,

    /// JSON file mapping global objects to built-in functions, merged over the defaults.
    #[arg(long)]
    pub builtins: Option<PathBuf>,

    // ==================== Emit ====================
    /// Do not emit a `// line N:` comment before each statement.
    #[arg(long = "noLineComments", alias = "no-line-comments")]
    pub no_line_comments: bool,

    /// How numeric literals are written: 'fixed' (six decimals) or 'lexical'.
    #[arg(long = "numericLiterals", alias = "numeric-literals")]
    pub numeric_literals: Option<NumericLiteralStyle>,

    /// Prefix every generated line with its line number.
    #[arg(long = "lineNumbers", alias = "line-numbers")]
    pub line_numbers: bool,

    // ==================== Output Formatting ====================
    /// Enable color and formatting in diagnostics output.
    #[arg(
        long,
        num_args = 0..=1,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub pretty: Option<bool>,

    /// Disable colored diagnostics.
    #[arg(long = "noColor", alias = "no-color")]
    pub no_color: bool,

    /// Program trees to compile (Babel/ESTree JSON).
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl CliArgs {
    /// Whether diagnostics should be colored, given whether stderr is a terminal.
    #[must_use]
    pub fn use_color(&self, is_terminal: bool) -> bool {
        if self.no_color {
            return false;
        }
        self.pretty.unwrap_or(is_terminal)
    }
}
