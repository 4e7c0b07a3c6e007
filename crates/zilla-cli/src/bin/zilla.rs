#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{IsTerminal, Write};

use zilla_cli::args::CliArgs;
use zilla_cli::driver;
use zilla_cli::reporter::Reporter;

const EXIT_SUCCESS: i32 = 0;
const EXIT_DIAGNOSTICS: i32 = 1;

fn main() -> Result<()> {
    // Initialize tracing if ZILLA_LOG or RUST_LOG is set (zero cost otherwise).
    // Supports ZILLA_LOG_FORMAT=tree|json|text (see src/tracing_config.rs).
    zilla::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;

    let result = driver::compile(&args, &cwd)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(result.stdout_text().as_bytes())
        .context("failed to write generated code")?;
    stdout.flush().context("failed to flush stdout")?;

    if result.has_errors() {
        let reporter = Reporter::new(args.use_color(std::io::stderr().is_terminal()));
        eprint!("{}", reporter.render(&result.diagnostics));
        std::process::exit(EXIT_DIAGNOSTICS);
    }

    std::process::exit(EXIT_SUCCESS);
}
