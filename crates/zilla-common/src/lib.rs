//! Common types and utilities for the zilla compiler.
//!
//! This crate provides foundational types used across all zilla crates:
//! - Position/location types for line/column source locations
//! - Diagnostics (`Diagnostic`, `DiagnosticCategory`, diagnostic codes)
//! - Compiler limits and thresholds

// Position/Location types for line/column source locations
pub mod position;
pub use position::{Position, SourceLocation};

// Diagnostics shared by the compiler and the CLI reporter
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory};

// Centralized limits and thresholds
pub mod limits;
