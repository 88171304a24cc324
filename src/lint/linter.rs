//! Lint orchestration.
//!
//! The [`Linter`] owns the validated style checkers and the script lint
//! session for one run. It lints parsed documents, JSON text, files and
//! glob patterns, and keeps the run's counters.

use super::discovery::discover_files;
use super::report::{ErrorReport, FileOutcome, FileReport, RunReport};
use super::walker::Walker;
use crate::config::{resolve_styles, LintConfig, ResolvedStyles};
use crate::document::{parse_document, DocumentNode, PathContext};
use crate::error::{LintError, Result};
use crate::script::{PylintLinter, ScriptLintSession, ScriptLinter};
use crate::style::StyleChecker;
use std::path::{Path, PathBuf};

/// Lints view documents with one configuration.
pub struct Linter {
    styles: ResolvedStyles,
    scripts: Option<ScriptLintSession>,
    files_linted: usize,
}

impl Linter {
    /// Create a linter without script linting.
    pub fn new(styles: ResolvedStyles) -> Self {
        Self {
            styles,
            scripts: None,
            files_linted: 0,
        }
    }

    /// Create a linter from configuration.
    ///
    /// # Errors
    ///
    /// Any configuration error: conflicting or missing selectors, a
    /// disallowed style, or a pattern that does not compile.
    pub fn from_config(config: &LintConfig) -> Result<Self> {
        let linter = Self::new(resolve_styles(config)?);
        if !config.scripts.enabled {
            return Ok(linter);
        }

        let pylint = PylintLinter::new(config.scripts.linter.clone(), config.scripts.args.clone());
        Ok(linter.with_script_linter(Box::new(pylint)))
    }

    /// Check embedded scripts with `linter`.
    pub fn with_script_linter(mut self, linter: Box<dyn ScriptLinter>) -> Self {
        self.scripts = Some(ScriptLintSession::new(linter));
        self
    }

    pub fn component_checker(&self) -> &StyleChecker {
        &self.styles.component
    }

    pub fn parameter_checker(&self) -> &StyleChecker {
        &self.styles.parameter
    }

    /// Whether reports carry a scripts category.
    pub fn scripts_enabled(&self) -> bool {
        self.scripts.is_some()
    }

    /// Documents parsed and walked so far.
    pub fn files_linted(&self) -> usize {
        self.files_linted
    }

    /// Scripts checked so far.
    pub fn scripts_linted(&self) -> usize {
        self.scripts
            .as_ref()
            .map_or(0, ScriptLintSession::scripts_linted)
    }

    /// Drain warnings raised by the script linter.
    pub fn take_warnings(&mut self) -> Vec<String> {
        self.scripts
            .as_mut()
            .map(ScriptLintSession::take_warnings)
            .unwrap_or_default()
    }

    /// Walk a parsed document.
    pub fn lint_document(&mut self, document: &DocumentNode) -> ErrorReport {
        let mut report = ErrorReport::new(self.scripts_enabled());

        let mut walker = Walker::new(&self.styles.component, &self.styles.parameter);
        if let Some(session) = self.scripts.as_mut() {
            walker = walker.with_scripts(session);
        }
        walker.walk(document, &mut report, &PathContext::new());

        report
    }

    /// Parse and walk JSON text. `path` is only used in the error.
    ///
    /// # Errors
    ///
    /// `DocumentParseError` if `content` is not valid JSON.
    pub fn lint_source(&mut self, content: &str, path: &Path) -> Result<ErrorReport> {
        let document = parse_document(content).map_err(|e| LintError::DocumentParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let report = self.lint_document(&document);
        self.files_linted += 1;
        tracing::debug!(
            "Linted {}: {} issue(s)",
            path.display(),
            report.count()
        );
        Ok(report)
    }

    /// Lint the file at `path`.
    pub fn lint_file(&mut self, path: &Path) -> FileReport {
        self.lint_file_at(path, path.to_path_buf())
    }

    /// Lint `files`, resolved against `root`.
    pub fn lint_files(&mut self, root: &Path, files: &[PathBuf]) -> RunReport {
        files
            .iter()
            .map(|file| self.lint_file_at(&root.join(file), file.clone()))
            .collect()
    }

    /// Lint every file matching `patterns` below `root`.
    ///
    /// No matching file is not an error: the run is simply empty.
    pub fn lint_patterns(&mut self, root: &Path, patterns: &[String]) -> Result<RunReport> {
        let files = discover_files(root, patterns)?;
        Ok(self.lint_files(root, &files))
    }

    /// Lint every file matching a single `pattern` below `root`.
    pub fn lint_pattern(&mut self, root: &Path, pattern: &str) -> Result<RunReport> {
        self.lint_patterns(root, &[pattern.to_string()])
    }

    fn lint_file_at(&mut self, location: &Path, display: PathBuf) -> FileReport {
        if !location.exists() {
            tracing::debug!("{} does not exist", location.display());
            return FileReport::new(display, FileOutcome::NotFound);
        }

        let content = match std::fs::read_to_string(location) {
            Ok(content) => content,
            Err(e) => return FileReport::new(display, FileOutcome::ParseError(e.to_string())),
        };

        match self.lint_source(&content, &display) {
            Ok(report) => FileReport::new(display, FileOutcome::Linted(report)),
            Err(LintError::DocumentParseError { message, .. }) => {
                FileReport::new(display, FileOutcome::ParseError(message))
            }
            Err(e) => FileReport::new(display, FileOutcome::ParseError(e.to_string())),
        }
    }
}
