//! JSON output formatter.
//!
//! Formats lint results as machine-readable JSON for tooling integration.

use super::LintFormatter;
use crate::lint::{Diagnostic, FileOutcome, RunReport};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

/// Formats lint output as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    files: Vec<JsonFile>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonFile {
    path: String,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    categories: BTreeMap<&'static str, Vec<JsonDiagnostic>>,
}

#[derive(Serialize)]
struct JsonDiagnostic {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

#[derive(Serialize)]
struct JsonSummary {
    files: usize,
    linted: usize,
    failed: usize,
    violations: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }

    fn diagnostic(diag: &Diagnostic) -> JsonDiagnostic {
        JsonDiagnostic {
            path: diag.path.clone(),
            line: diag.line,
            message: diag.message.clone(),
        }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LintFormatter for JsonFormatter {
    fn format<W: Write>(&self, run: &RunReport, writer: &mut W) -> std::io::Result<()> {
        let files = run
            .files
            .iter()
            .map(|file| {
                let path = file.path.display().to_string();
                match &file.outcome {
                    FileOutcome::Linted(report) => JsonFile {
                        path,
                        status: "linted",
                        error: None,
                        categories: report
                            .iter()
                            .map(|(region, diags)| {
                                (region.key(), diags.iter().map(Self::diagnostic).collect())
                            })
                            .collect(),
                    },
                    FileOutcome::ParseError(message) => JsonFile {
                        path,
                        status: "parse_error",
                        error: Some(message.clone()),
                        categories: BTreeMap::new(),
                    },
                    FileOutcome::NotFound => JsonFile {
                        path,
                        status: "not_found",
                        error: None,
                        categories: BTreeMap::new(),
                    },
                }
            })
            .collect();

        let output = JsonOutput {
            files,
            summary: JsonSummary {
                files: run.files.len(),
                linted: run.linted().count(),
                failed: run.failures(),
                violations: run.violations(),
            },
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)?;
        Ok(())
    }
}
