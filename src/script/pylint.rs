//! `pylint`-backed script linter.
//!
//! Handler bodies in a view are function bodies without the `def` line.
//! Each one is wrapped in a fixed prelude, written to a temporary `.py`
//! file, and checked with `pylint`. Reported line numbers are shifted back
//! by the prelude length so they point into the original body.

use anyhow::Context;
use regex::Regex;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::LazyLock;

use super::{ScriptIssue, ScriptLinter};
use crate::error::{LintError, Result};

/// Lines written ahead of every script body.
pub const SCRIPT_PRELUDE: [&str; 2] = [
    "# pylint: disable=missing-module-docstring,missing-function-docstring,unused-argument,invalid-name",
    "def ignition_script(self, *args, **kwargs):",
];

/// Number of lines every reported line number must be shifted by.
pub const SCRIPT_PRELUDE_LINES: usize = SCRIPT_PRELUDE.len();

const MSG_TEMPLATE: &str = "--msg-template={line}:{column}: {msg_id}: {msg} ({symbol})";

// pylint exit status bits
const EXIT_FATAL: i32 = 1;
const EXIT_USAGE: i32 = 32;

static RE_ISSUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+):\d+: (.+)$").unwrap());

// Position quoted by syntax errors, e.g. "(<module>, line 4)"
static RE_QUOTED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bline (\d+)\b").unwrap());

/// Runs `pylint` on one script at a time.
#[derive(Debug, Clone)]
pub struct PylintLinter {
    program: String,
    args: Vec<String>,
}

impl PylintLinter {
    /// Create a linter invoking `program` with extra `args`.
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// The program that will be executed.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Build the file contents for a script body.
    pub fn wrap_source(source: &str) -> String {
        let mut wrapped = SCRIPT_PRELUDE.join("\n");
        wrapped.push('\n');

        // Comment-only bodies still need a statement.
        let mut has_body = false;
        for line in source.lines() {
            let code = line.trim();
            if !code.is_empty() && !code.starts_with('#') {
                has_body = true;
            }
            wrapped.push('\t');
            wrapped.push_str(line);
            wrapped.push('\n');
        }

        if !has_body {
            wrapped.push_str("\tpass\n");
        }

        wrapped
    }

    /// Turn pylint output into issues against the original body.
    pub fn parse_output(output: &str, temp_path: &Path, context: &str) -> Vec<ScriptIssue> {
        let path_text = temp_path.display().to_string();
        let module = temp_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned());

        output
            .lines()
            .filter_map(|line| RE_ISSUE.captures(line.trim_end()))
            .filter_map(|caps| {
                let reported: usize = caps[1].parse().ok()?;
                let mut message = caps[2].replace(&path_text, context);
                if let Some(module) = &module {
                    message = message.replace(module.as_str(), context);
                }
                if message.starts_with("E0001") {
                    message = shift_quoted_lines(&message);
                }
                Some(ScriptIssue::new(
                    reported.saturating_sub(SCRIPT_PRELUDE_LINES),
                    message,
                ))
            })
            .collect()
    }

    fn write_script(source: &str) -> Result<tempfile::NamedTempFile> {
        let mut file = tempfile::Builder::new()
            .prefix("ignition_script_")
            .suffix(".py")
            .tempfile()
            .context("creating temporary script file")?;
        file.write_all(Self::wrap_source(source).as_bytes())
            .context("writing temporary script file")?;
        file.flush().context("flushing temporary script file")?;
        Ok(file)
    }
}

fn shift_quoted_lines(message: &str) -> String {
    RE_QUOTED_LINE
        .replace_all(message, |caps: &regex::Captures| match caps[1].parse::<usize>() {
            Ok(line) => format!("line {}", line.saturating_sub(SCRIPT_PRELUDE_LINES)),
            Err(_) => caps[0].to_string(),
        })
        .into_owned()
}

impl Default for PylintLinter {
    fn default() -> Self {
        Self::new("pylint", Vec::new())
    }
}

impl ScriptLinter for PylintLinter {
    fn name(&self) -> &str {
        &self.program
    }

    fn lint(&mut self, source: &str, context: &str) -> Result<Vec<ScriptIssue>> {
        // Deleted on drop.
        let file = Self::write_script(source)?;

        let output = Command::new(&self.program)
            .arg(MSG_TEMPLATE)
            .arg("--score=n")
            .args(&self.args)
            .arg(file.path())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied => {
                    LintError::ScriptLinterUnavailable {
                        program: self.program.clone(),
                        message: e.to_string(),
                    }
                }
                _ => LintError::Io(e),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let issues = Self::parse_output(&stdout, file.path(), context);

        let Some(code) = output.status.code() else {
            return Err(LintError::ScriptLinterFailed {
                context: context.to_string(),
                message: format!("{} was terminated by a signal", self.program),
            });
        };

        if code & EXIT_USAGE != 0 || (code & EXIT_FATAL != 0 && issues.is_empty()) {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = match stderr.trim() {
                "" => format!("{} exited with code {}", self.program, code),
                detail => detail.replace(&file.path().display().to_string(), context),
            };
            return Err(LintError::ScriptLinterFailed {
                context: context.to_string(),
                message,
            });
        }

        Ok(issues)
    }
}
