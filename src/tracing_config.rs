//! Logging setup for the `zilla` binary.
//!
//! `ZILLA_LOG` takes an `EnvFilter` directive list (`RUST_LOG` is the
//! fallback). `ZILLA_LOG_FORMAT` picks how events are written:
//!
//! | value            | output                                     |
//! |------------------|--------------------------------------------|
//! | `text` (default) | one line per event                         |
//! | `tree`           | spans indented by nesting (`tracing-tree`) |
//! | `json`           | one JSON object per event                  |
//!
//! ```bash
//! # Dynamic lookups and built-in shortcuts as they are chosen
//! ZILLA_LOG=zilla_compiler=debug zilla program.json
//!
//! # Every statement, grouped under its file and program span
//! ZILLA_LOG=trace ZILLA_LOG_FORMAT=tree zilla a.json b.json
//! ```
//!
//! Logs go to stderr; stdout carries generated Go code.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Parse a `ZILLA_LOG_FORMAT` value; anything unrecognised is `Text`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// What to log and how, resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingSettings {
    /// `EnvFilter` directives.
    pub directives: String,
    pub format: LogFormat,
}

impl TracingSettings {
    /// Resolve settings through `lookup`, which maps a variable name to its
    /// value. `None` when logging was not requested.
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let directives = lookup("ZILLA_LOG").or_else(|| lookup("RUST_LOG"))?;
        let format = lookup("ZILLA_LOG_FORMAT")
            .map(|value| LogFormat::parse(&value))
            .unwrap_or_default();
        Some(TracingSettings { directives, format })
    }

    #[must_use]
    pub fn from_env() -> Option<Self> {
        Self::resolve(|name| std::env::var(name).ok())
    }

    fn layer(&self) -> Box<dyn Layer<Registry> + Send + Sync> {
        let filter = EnvFilter::builder().parse_lossy(&self.directives);
        match self.format {
            LogFormat::Text => fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(filter)
                .boxed(),
            LogFormat::Tree => tracing_tree::HierarchicalLayer::new(2)
                .with_writer(std::io::stderr)
                .with_indent_lines(true)
                .with_targets(true)
                .with_filter(filter)
                .boxed(),
            LogFormat::Json => fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_filter(filter)
                .boxed(),
        }
    }
}

/// Install the global subscriber when `ZILLA_LOG` or `RUST_LOG` is set.
/// Without either, nothing is installed and tracing macros stay disabled.
pub fn init_tracing() {
    let Some(settings) = TracingSettings::from_env() else {
        return;
    };
    Registry::default().with(settings.layer()).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn resolve(vars: &[(&str, &str)]) -> Option<TracingSettings> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        TracingSettings::resolve(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("tree"), LogFormat::Tree);
        assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
        assert_eq!(LogFormat::parse(""), LogFormat::Text);
        assert_eq!(LogFormat::parse("yaml"), LogFormat::Text);
    }

    #[test]
    fn test_nothing_requested() {
        assert_eq!(resolve(&[("ZILLA_LOG_FORMAT", "tree")]), None);
    }

    #[test]
    fn test_zilla_log_wins_over_rust_log() {
        let settings = resolve(&[
            ("ZILLA_LOG", "zilla_compiler=trace"),
            ("RUST_LOG", "warn"),
            ("ZILLA_LOG_FORMAT", "json"),
        ])
        .unwrap();
        assert_eq!(settings.directives, "zilla_compiler=trace");
        assert_eq!(settings.format, LogFormat::Json);
    }

    #[test]
    fn test_rust_log_fallback_defaults_to_text() {
        let settings = resolve(&[("RUST_LOG", "debug")]).unwrap();
        assert_eq!(settings.directives, "debug");
        assert_eq!(settings.format, LogFormat::Text);
    }
}
