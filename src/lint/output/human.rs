//! Human-readable output formatter.
//!
//! Groups diagnostics per file and region, one bulleted path per line.

use super::LintFormatter;
use crate::lint::{FileOutcome, Region, RunReport};
use crate::style::StyleChecker;
use std::io::Write;

/// Formats lint output for human consumption.
pub struct HumanFormatter {
    component_rule: String,
    parameter_rule: String,
}

impl HumanFormatter {
    /// Create a formatter describing the given checkers in its headings.
    pub fn new(component: &StyleChecker, parameter: &StyleChecker) -> Self {
        Self {
            component_rule: component.describe(),
            parameter_rule: parameter.describe(),
        }
    }

    fn heading(&self, region: Region) -> String {
        match region {
            Region::Components => format!("Component names should {}:", self.component_rule),
            Region::Parameters => format!("Parameter keys should {}:", self.parameter_rule),
            Region::Scripts => "Script issues:".to_string(),
        }
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write>(&self, run: &RunReport, writer: &mut W) -> std::io::Result<()> {
        for file in &run.files {
            let path = file.path.display();
            match &file.outcome {
                FileOutcome::Linted(report) if report.is_empty() => {}
                FileOutcome::Linted(report) => {
                    writeln!(writer)?;
                    writeln!(writer, "Error in file: {}", path)?;
                    for (region, diagnostics) in report.iter() {
                        if diagnostics.is_empty() {
                            continue;
                        }
                        writeln!(writer, "  {}", self.heading(region))?;
                        for diag in diagnostics {
                            writeln!(writer, "    - {}", diag)?;
                        }
                    }
                }
                FileOutcome::ParseError(message) => {
                    writeln!(writer, "Error parsing file {}: {}", path, message)?;
                }
                FileOutcome::NotFound => writeln!(writer, "File not found: {}", path)?,
            }
        }

        // Summary
        let violations = run.violations();
        if violations > 0 {
            let files = run.linted().filter(|(_, r)| !r.is_empty()).count();
            writeln!(writer)?;
            writeln!(
                writer,
                "Found {} style inconsistenc{} in {} file(s)",
                violations,
                if violations == 1 { "y" } else { "ies" },
                files
            )?;
        }

        Ok(())
    }
}
