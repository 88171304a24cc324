//! Embedded script linting.
//!
//! View documents carry Jython handler bodies. Checking them is delegated
//! to an external tool through the [`ScriptLinter`] trait:
//!
//! - [`PylintLinter`] - Runs `pylint` on each script in a temporary file
//! - [`StubScriptLinter`] - Canned results for tests
//! - [`ScriptLintSession`] - Per-run wrapper that degrades gracefully
//!
//! # Example
//!
//! ```
//! use ignition_lint::script::{ScriptIssue, ScriptLintSession, StubScriptLinter};
//!
//! let stub = StubScriptLinter::with_issues(vec![ScriptIssue::new(1, "E0602: undefined")]);
//! let mut session = ScriptLintSession::new(Box::new(stub));
//!
//! let issues = session.lint("print(x)", "root.scripts.customMethods.run.script");
//! assert_eq!(issues.len(), 1);
//! assert_eq!(session.scripts_linted(), 1);
//! ```

pub mod mock;
pub mod pylint;

pub use mock::{ScriptCall, ScriptCallLog, StubBehavior, StubScriptLinter};
pub use pylint::{PylintLinter, SCRIPT_PRELUDE, SCRIPT_PRELUDE_LINES};

use crate::error::{LintError, Result};

/// One problem reported in a script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptIssue {
    /// Line within the script body (1-indexed, prelude already removed).
    pub line: usize,
    /// Linter message, with temporary file names replaced by the script path.
    pub message: String,
}

impl ScriptIssue {
    /// Create a new issue.
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

/// A tool that checks a single script body.
pub trait ScriptLinter {
    /// Human-readable name of the tool.
    fn name(&self) -> &str;

    /// Check `source`. `context` is the qualified path of the script inside
    /// the view and replaces any temporary file name in the results.
    ///
    /// # Errors
    ///
    /// `ScriptLinterUnavailable` when the tool cannot be started at all;
    /// any other error means this one script could not be checked.
    fn lint(&mut self, source: &str, context: &str) -> Result<Vec<ScriptIssue>>;
}

/// A script linter bound to one run.
///
/// If the tool turns out to be unavailable, the session disables itself and
/// records a single warning. Other failures drop that script's results.
pub struct ScriptLintSession {
    linter: Box<dyn ScriptLinter>,
    disabled: bool,
    scripts_linted: usize,
    warnings: Vec<String>,
}

impl ScriptLintSession {
    /// Create a session around `linter`.
    pub fn new(linter: Box<dyn ScriptLinter>) -> Self {
        Self {
            linter,
            disabled: false,
            scripts_linted: 0,
            warnings: Vec::new(),
        }
    }

    /// Whether scripts are still being checked.
    pub fn is_active(&self) -> bool {
        !self.disabled
    }

    /// Number of scripts checked successfully so far.
    pub fn scripts_linted(&self) -> usize {
        self.scripts_linted
    }

    /// Drain the warnings collected since the last call.
    pub fn take_warnings(&mut self) -> Vec<String> {
        std::mem::take(&mut self.warnings)
    }

    /// Check one script. Never fails: problems with the tool are logged.
    pub fn lint(&mut self, source: &str, context: &str) -> Vec<ScriptIssue> {
        if self.disabled {
            return Vec::new();
        }

        match self.linter.lint(source, context) {
            Ok(issues) => {
                self.scripts_linted += 1;
                tracing::debug!(
                    "{} reported {} issue(s) in {}",
                    self.linter.name(),
                    issues.len(),
                    context
                );
                issues
            }
            Err(e @ LintError::ScriptLinterUnavailable { .. }) => {
                tracing::warn!("{}", e);
                self.disabled = true;
                self.warnings
                    .push(format!("{}. Script linting is disabled for this run.", e));
                Vec::new()
            }
            Err(e) => {
                tracing::warn!("Dropping results for {}: {}", context, e);
                Vec::new()
            }
        }
    }
}
