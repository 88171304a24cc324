//! Script extraction.
//!
//! Finds handler bodies under a component's `scripts` and `events` keys
//! and forwards each one, with its qualified path, to the script linter.

use super::diagnostic::Diagnostic;
use super::report::ErrorReport;
use crate::document::{join_dotted, DocumentNode};
use crate::script::ScriptLintSession;

/// Keys under a script root that never hold a handler body.
pub const SCRIPT_SKIP_KEYS: [&str; 4] = ["name", "params", "extensionFunctions", "messageType"];

/// Keys whose string value is a handler body.
pub const SCRIPT_CONTENT_KEYS: [&str; 2] = ["script", "code"];

/// Walks script subtrees, feeding bodies to a [`ScriptLintSession`].
pub struct ScriptExtractor<'s> {
    session: &'s mut ScriptLintSession,
}

impl<'s> ScriptExtractor<'s> {
    pub fn new(session: &'s mut ScriptLintSession) -> Self {
        Self { session }
    }

    /// Whether bodies found now would still be checked.
    pub fn is_active(&self) -> bool {
        self.session.is_active()
    }

    /// Walk a script subtree rooted at `path`.
    ///
    /// Lists of handlers (message handlers, custom methods) are keyed by
    /// each entry's `messageType` or `name`, falling back to its index.
    pub fn walk_scripts(&mut self, node: &DocumentNode, report: &mut ErrorReport, path: &str) {
        match node {
            DocumentNode::Object(entries) => {
                for (key, value) in entries {
                    if SCRIPT_SKIP_KEYS.contains(&key.as_str()) || value.is_bool() {
                        continue;
                    }

                    let qualified = join_dotted(path, key);
                    if SCRIPT_CONTENT_KEYS.contains(&key.as_str()) {
                        if let Some(source) = value.as_str() {
                            self.forward(source, report, &qualified);
                        }
                        continue;
                    }

                    if matches!(value, DocumentNode::Object(_) | DocumentNode::Array(_)) {
                        self.walk_scripts(value, report, &qualified);
                    }
                }
            }
            DocumentNode::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    if !matches!(item, DocumentNode::Object(_)) {
                        continue;
                    }
                    let segment = entry_label(item).unwrap_or_else(|| index.to_string());
                    self.walk_scripts(item, report, &join_dotted(path, &segment));
                }
            }
            DocumentNode::Scalar(_) => {}
        }
    }

    fn forward(&mut self, source: &str, report: &mut ErrorReport, path: &str) {
        for issue in self.session.lint(source, path) {
            report.record(Diagnostic::script(path, issue.line, issue.message));
        }
    }
}

fn entry_label(entry: &DocumentNode) -> Option<String> {
    ["messageType", "name"]
        .iter()
        .find_map(|key| entry.get(key).and_then(DocumentNode::as_str))
        .filter(|label| !label.is_empty())
        .map(str::to_string)
}
