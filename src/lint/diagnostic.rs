//! Lint diagnostic messages.
//!
//! This module provides the [`Diagnostic`] type for naming problems found
//! in a view, and the [`Region`] of the view each one belongs to.

use serde::Serialize;

/// The part of a view a diagnostic was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// Component names (`meta.name`).
    Components,
    /// Parameter keys under `custom` and `params`.
    Parameters,
    /// Embedded script bodies.
    Scripts,
}

impl Region {
    /// The category key used in reports.
    pub fn key(&self) -> &'static str {
        match self {
            Region::Components => "components",
            Region::Parameters => "parameters",
            Region::Scripts => "scripts",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A single naming or script problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Region of the view the problem is in.
    pub region: Region,
    /// Qualified path: `root/Container/Label` for components,
    /// `root/Label.custom.myParam` for parameters and scripts.
    pub path: String,
    /// Line within the script body (scripts only).
    pub line: Option<usize>,
    /// Message from the script linter (scripts only).
    pub message: Option<String>,
}

impl Diagnostic {
    /// A component name that breaks the component style.
    pub fn component(path: impl Into<String>) -> Self {
        Self {
            region: Region::Components,
            path: path.into(),
            line: None,
            message: None,
        }
    }

    /// A parameter key that breaks the parameter style.
    pub fn parameter(path: impl Into<String>) -> Self {
        Self {
            region: Region::Parameters,
            path: path.into(),
            line: None,
            message: None,
        }
    }

    /// A problem reported by the script linter.
    pub fn script(path: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self {
            region: Region::Scripts,
            path: path.into(),
            line: Some(line),
            message: Some(message.into()),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path)?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_diagnostic_has_no_line() {
        let diag = Diagnostic::component("root/badName");
        assert_eq!(diag.region, Region::Components);
        assert!(diag.line.is_none());
        assert_eq!(diag.to_string(), "root/badName");
    }

    #[test]
    fn script_diagnostic_displays_line_and_message() {
        let diag = Diagnostic::script("root.scripts.customMethods.run.script", 4, "E0602: x");
        assert_eq!(diag.region, Region::Scripts);
        assert_eq!(
            diag.to_string(),
            "root.scripts.customMethods.run.script:4: E0602: x"
        );
    }

    #[test]
    fn region_keys() {
        assert_eq!(Region::Components.key(), "components");
        assert_eq!(Region::Parameters.to_string(), "parameters");
        assert_eq!(Region::Scripts.key(), "scripts");
    }

    #[test]
    fn regions_order_like_reports() {
        assert!(Region::Components < Region::Parameters);
        assert!(Region::Parameters < Region::Scripts);
    }
}
