//! Lint output formatters.
//!
//! This module provides formatters for outputting lint results
//! in different formats (human-readable, JSON).

pub mod human;
pub mod json;

use crate::lint::RunReport;
use std::io::Write;

/// Output format for lint results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

impl OutputFormat {
    /// Resolve a `--format` value. Unknown names fall back to human output.
    pub fn from_name(name: &str) -> Self {
        match name {
            "json" => Self::Json,
            _ => Self::Human,
        }
    }
}

/// Trait for formatting lint output.
pub trait LintFormatter {
    /// Format a run's results to the given writer.
    fn format<W: Write>(&self, run: &RunReport, writer: &mut W) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
