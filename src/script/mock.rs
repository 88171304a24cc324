//! Script linter test double.
//!
//! `StubScriptLinter` implements [`ScriptLinter`] without spawning any
//! process. It returns canned results and records every script it receives.
//!
//! # Example
//!
//! ```
//! use ignition_lint::script::{ScriptLinter, StubScriptLinter};
//!
//! let mut stub = StubScriptLinter::clean();
//! let log = stub.call_log();
//!
//! stub.lint("system.perspective.print('hi')", "root.scripts.onStartup.script").unwrap();
//!
//! assert_eq!(log.calls()[0].context, "root.scripts.onStartup.script");
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use super::{ScriptIssue, ScriptLinter};
use crate::error::{LintError, Result};

/// What a [`StubScriptLinter`] does when asked to lint.
#[derive(Debug, Clone)]
pub enum StubBehavior {
    /// Report these issues for every script.
    Issues(Vec<ScriptIssue>),
    /// Behave as if the tool is not installed.
    Unavailable,
    /// Fail every script with an unexpected error.
    Fail,
}

/// A script received by the stub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptCall {
    pub source: String,
    pub context: String,
}

/// Shared handle to the calls a stub has received.
#[derive(Debug, Clone, Default)]
pub struct ScriptCallLog(Rc<RefCell<Vec<ScriptCall>>>);

impl ScriptCallLog {
    /// All calls so far, in order.
    pub fn calls(&self) -> Vec<ScriptCall> {
        self.0.borrow().clone()
    }

    /// The qualified paths of all scripts received so far.
    pub fn contexts(&self) -> Vec<String> {
        self.0.borrow().iter().map(|c| c.context.clone()).collect()
    }
}

/// Script linter with canned behaviour.
#[derive(Debug)]
pub struct StubScriptLinter {
    behavior: StubBehavior,
    log: ScriptCallLog,
}

impl StubScriptLinter {
    /// Create a stub with the given behaviour.
    pub fn new(behavior: StubBehavior) -> Self {
        Self {
            behavior,
            log: ScriptCallLog::default(),
        }
    }

    /// A stub that finds nothing.
    pub fn clean() -> Self {
        Self::new(StubBehavior::Issues(Vec::new()))
    }

    /// A stub that reports `issues` for every script.
    pub fn with_issues(issues: Vec<ScriptIssue>) -> Self {
        Self::new(StubBehavior::Issues(issues))
    }

    /// A stub whose tool is missing.
    pub fn unavailable() -> Self {
        Self::new(StubBehavior::Unavailable)
    }

    /// A stub that fails on every script.
    pub fn failing() -> Self {
        Self::new(StubBehavior::Fail)
    }

    /// Handle for inspecting calls after the stub has been moved.
    pub fn call_log(&self) -> ScriptCallLog {
        self.log.clone()
    }
}

impl ScriptLinter for StubScriptLinter {
    fn name(&self) -> &str {
        "stub"
    }

    fn lint(&mut self, source: &str, context: &str) -> Result<Vec<ScriptIssue>> {
        self.log.0.borrow_mut().push(ScriptCall {
            source: source.to_string(),
            context: context.to_string(),
        });

        match &self.behavior {
            StubBehavior::Issues(issues) => Ok(issues.clone()),
            StubBehavior::Unavailable => Err(LintError::ScriptLinterUnavailable {
                program: "stub".to_string(),
                message: "not installed".to_string(),
            }),
            StubBehavior::Fail => Err(LintError::ScriptLinterFailed {
                context: context.to_string(),
                message: "stub failure".to_string(),
            }),
        }
    }
}
