//! Command-line overrides for file configuration.
//!
//! # Merge Rules
//!
//! - A region's selector given on the command line (named style or
//!   pattern) replaces both selector fields of that region from the file
//! - `files`, the script linter program and its arguments replace the
//!   file's values when given
//! - Flags (`allow_acronyms`, `--no-scripts`) can only switch behaviour
//!   on, never back off

use crate::config::schema::LintConfig;

/// Values supplied on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub files: Option<Vec<String>>,
    pub component_style: Option<String>,
    pub component_style_rgx: Option<String>,
    pub parameter_style: Option<String>,
    pub parameter_style_rgx: Option<String>,
    pub allow_acronyms: bool,
    pub disable_scripts: bool,
    pub script_linter: Option<String>,
    pub script_linter_args: Option<Vec<String>>,
}

impl ConfigOverrides {
    /// Split a comma-separated list of files or patterns.
    ///
    /// Commas, not whitespace, separate entries since view names may
    /// contain spaces.
    pub fn split_files(list: &str) -> Vec<String> {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Split script linter arguments on whitespace.
    pub fn split_args(args: &str) -> Vec<String> {
        args.split_whitespace().map(str::to_string).collect()
    }
}

impl LintConfig {
    /// Apply command-line overrides on top of this configuration.
    pub fn apply(&mut self, overrides: &ConfigOverrides) {
        if let Some(files) = &overrides.files {
            self.files = files.clone();
        }

        if overrides.component_style.is_some() || overrides.component_style_rgx.is_some() {
            self.component_style = overrides.component_style.clone();
            self.component_style_rgx = overrides.component_style_rgx.clone();
        }

        if overrides.parameter_style.is_some() || overrides.parameter_style_rgx.is_some() {
            self.parameter_style = overrides.parameter_style.clone();
            self.parameter_style_rgx = overrides.parameter_style_rgx.clone();
        }

        if overrides.allow_acronyms {
            self.allow_acronyms = true;
        }

        if overrides.disable_scripts {
            self.scripts.enabled = false;
        }

        if let Some(linter) = &overrides.script_linter {
            self.scripts.linter = linter.clone();
        }

        if let Some(args) = &overrides.script_linter_args {
            self.scripts.args = args.clone();
        }
    }

    /// This configuration with `overrides` applied.
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        self.apply(overrides);
        self
    }
}
