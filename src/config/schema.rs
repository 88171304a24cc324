//! Configuration schema types.
//!
//! All fields are optional in the file. Unknown fields are rejected so
//! typos surface as errors instead of being silently ignored.

use serde::{Deserialize, Serialize};

/// Files linted when no pattern is configured.
pub const DEFAULT_FILES: &str = "**/view.json";

/// Script linter run when none is configured.
pub const DEFAULT_SCRIPT_LINTER: &str = "pylint";

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LintConfig {
    /// Files or glob patterns to lint.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,

    /// Named convention for component names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_style: Option<String>,

    /// Named convention for parameter keys.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_style: Option<String>,

    /// Custom pattern for component names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_style_rgx: Option<String>,

    /// Custom pattern for parameter keys.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_style_rgx: Option<String>,

    /// Accept runs of capitals (`XMLParser`, `myHTTPClient`).
    #[serde(skip_serializing_if = "is_false")]
    pub allow_acronyms: bool,

    /// Embedded script linting.
    pub scripts: ScriptConfig,
}

impl LintConfig {
    /// The configured file patterns, or the default one.
    pub fn file_patterns(&self) -> Vec<String> {
        if self.files.is_empty() {
            vec![DEFAULT_FILES.to_string()]
        } else {
            self.files.clone()
        }
    }
}

/// Settings for the external script linter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScriptConfig {
    /// Whether handler bodies are checked at all.
    pub enabled: bool,

    /// Program to run.
    pub linter: String,

    /// Extra arguments passed to the program.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            linter: DEFAULT_SCRIPT_LINTER.to_string(),
            args: Vec::new(),
        }
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}
