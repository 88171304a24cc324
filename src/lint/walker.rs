//! Document traversal.
//!
//! [`Walker`] descends a view depth-first. Objects carrying `meta.name`
//! are components; keys under `custom` and `params` are parameters; keys
//! under `scripts` and `events` hold handler bodies. Everything else is
//! structure and is only descended through.

use super::diagnostic::Diagnostic;
use super::report::ErrorReport;
use super::scripts::ScriptExtractor;
use crate::document::{join_dotted, DocumentNode, PathContext, ROOT_COMPONENT};
use crate::script::ScriptLintSession;
use crate::style::StyleChecker;

/// Keys that are never descended as ordinary structure.
pub const STRUCTURAL_SKIP_KEYS: [&str; 8] = [
    "props",
    "position",
    "type",
    "meta",
    "propConfig",
    "events",
    "extensionFunctions",
    "scripts",
];

/// Keys whose children are declared parameters.
pub const PARAMETER_AREAS: [&str; 2] = ["custom", "params"];

/// Keys whose children are handler bodies.
pub const SCRIPT_ROOTS: [&str; 2] = ["scripts", "events"];

/// Prefix of dataset-internal keys. They and their subtrees are ignored.
pub const DATASET_MARKER: char = '$';

/// Parameters below this path are pass-through values, not declarations.
pub const PASS_THROUGH_PARAMS: &str = "props.params";

/// Classifies the names in one document.
pub struct Walker<'a> {
    components: &'a StyleChecker,
    parameters: &'a StyleChecker,
    scripts: Option<ScriptExtractor<'a>>,
}

impl<'a> Walker<'a> {
    /// Create a walker that checks names only.
    pub fn new(components: &'a StyleChecker, parameters: &'a StyleChecker) -> Self {
        Self {
            components,
            parameters,
            scripts: None,
        }
    }

    /// Also forward script bodies to `session`.
    pub fn with_scripts(mut self, session: &'a mut ScriptLintSession) -> Self {
        self.scripts = Some(ScriptExtractor::new(session));
        self
    }

    fn scripts_active(&self) -> bool {
        self.scripts.as_ref().is_some_and(ScriptExtractor::is_active)
    }

    /// Walk `node`, recording diagnostics into `report`.
    pub fn walk(&mut self, node: &DocumentNode, report: &mut ErrorReport, path: &PathContext) {
        let DocumentNode::Object(entries) = node else {
            return;
        };

        let entered;
        let path = match node.component_name() {
            Some(name) => {
                entered = path.enter_component(name);
                if name != ROOT_COMPONENT && !self.components.is_correct(name) {
                    report.record(Diagnostic::component(entered.component()));
                }
                &entered
            }
            None => path,
        };

        for (key, value) in entries {
            let key = key.as_str();

            if SCRIPT_ROOTS.contains(&key) && self.scripts_active() {
                let root = path.qualify(key);
                if let Some(scripts) = self.scripts.as_mut() {
                    scripts.walk_scripts(value, report, &root);
                }
                continue;
            }

            if STRUCTURAL_SKIP_KEYS.contains(&key) || value.is_empty_container() {
                continue;
            }

            match value {
                DocumentNode::Object(_) if PARAMETER_AREAS.contains(&key) => {
                    self.walk_parameters(value, report, &path.qualify(key));
                }
                DocumentNode::Object(_) => self.walk(value, report, &path.with_field(key)),
                // Elements are walked as direct children: no path segment.
                DocumentNode::Array(items) => {
                    for item in items {
                        self.walk(item, report, path);
                    }
                }
                DocumentNode::Scalar(_) => {}
            }
        }
    }

    /// Walk a parameter area rooted at `path`.
    ///
    /// Keys with object values are containers and are only descended;
    /// every other key is a parameter and is checked against the
    /// parameter style, unless it sits below `props.params`.
    pub fn walk_parameters(&self, node: &DocumentNode, report: &mut ErrorReport, path: &str) {
        let DocumentNode::Object(entries) = node else {
            return;
        };

        for (key, value) in entries {
            if key.starts_with(DATASET_MARKER) {
                continue;
            }

            let qualified = join_dotted(path, key);
            match value {
                DocumentNode::Object(_) => self.walk_parameters(value, report, &qualified),
                _ => {
                    if !path.contains(PASS_THROUGH_PARAMS) && !self.parameters.is_correct(key) {
                        report.record(Diagnostic::parameter(qualified));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parse_document;
    use crate::lint::Region;
    use crate::script::{ScriptLintSession, StubScriptLinter};
    use crate::style::NamingStyle;

    fn pascal() -> StyleChecker {
        StyleChecker::named(NamingStyle::PascalCase, false)
    }

    fn camel() -> StyleChecker {
        StyleChecker::named(NamingStyle::CamelCase, false)
    }

    fn walk(json: &str, components: &StyleChecker, parameters: &StyleChecker) -> ErrorReport {
        let doc = parse_document(json).unwrap();
        let mut report = ErrorReport::new(false);
        Walker::new(components, parameters).walk(&doc, &mut report, &PathContext::new());
        report
    }

    #[test]
    fn flags_nested_component_with_full_path() {
        let report = walk(
            r#"{"root": {"meta": {"name": "root"}, "children": [
                {"meta": {"name": "Container"}, "children": [
                    {"meta": {"name": "badLabel"}}
                ]}
            ]}}"#,
            &pascal(),
            &camel(),
        );
        assert_eq!(
            report.paths(Region::Components),
            vec!["root/Container/badLabel"]
        );
    }

    #[test]
    fn root_name_is_never_classified() {
        let report = walk(
            r#"{"root": {"meta": {"name": "root"}}}"#,
            &StyleChecker::named(NamingStyle::UpperCase, false),
            &camel(),
        );
        assert!(report.is_empty());
    }

    #[test]
    fn siblings_do_not_see_each_other() {
        let report = walk(
            r#"{"root": {"meta": {"name": "root"}, "children": [
                {"meta": {"name": "firstBad"}, "custom": {"a": 1}},
                {"meta": {"name": "secondBad"}}
            ]}}"#,
            &pascal(),
            &camel(),
        );
        assert_eq!(
            report.paths(Region::Components),
            vec!["root/firstBad", "root/secondBad"]
        );
    }

    #[test]
    fn view_level_parameters_use_view_label() {
        let report = walk(
            r#"{"custom": {"BadParam": 1}, "params": {"OtherBad": "x"}}"#,
            &pascal(),
            &camel(),
        );
        assert_eq!(
            report.paths(Region::Parameters),
            vec!["view.custom.BadParam", "view.params.OtherBad"]
        );
    }

    #[test]
    fn nested_parameter_containers_are_descended_not_checked() {
        let report = walk(
            r#"{"root": {"meta": {"name": "root"}, "custom": {
                "Settings": {"InnerBad": true, "innerGood": [1, 2]}
            }}}"#,
            &pascal(),
            &camel(),
        );
        assert_eq!(
            report.paths(Region::Parameters),
            vec!["root.custom.Settings.InnerBad"]
        );
    }

    #[test]
    fn dataset_keys_are_ignored() {
        let report = walk(
            r#"{"custom": {"$columns": {"BadName": 1}, "$types": [1]}}"#,
            &pascal(),
            &camel(),
        );
        assert!(report.is_empty());
    }

    #[test]
    fn props_are_not_descended() {
        let report = walk(
            r#"{"root": {"meta": {"name": "root"}, "props": {
                "params": {"BadPassThrough": 1},
                "style": {"meta": {"name": "hidden"}}
            }}}"#,
            &pascal(),
            &camel(),
        );
        assert!(report.is_empty());
    }

    #[test]
    fn pass_through_params_are_not_checked() {
        let walker_components = pascal();
        let walker_parameters = camel();
        let walker = Walker::new(&walker_components, &walker_parameters);
        let doc = parse_document(r#"{"BadPassThrough": 1, "nested": {"AlsoBad": 2}}"#).unwrap();
        let mut report = ErrorReport::new(false);
        walker.walk_parameters(&doc, &mut report, "root/Embed.props.params");
        assert!(report.is_empty());
    }

    #[test]
    fn walk_parameters_with_empty_path_uses_bare_keys() {
        let components = pascal();
        let parameters = StyleChecker::named(NamingStyle::SnakeCase, false);
        let walker = Walker::new(&components, &parameters);
        let doc = parse_document(r#"{"Param1": 1, "param_2": 2}"#).unwrap();
        let mut report = ErrorReport::new(false);
        walker.walk_parameters(&doc, &mut report, "");
        assert_eq!(report.paths(Region::Parameters), vec!["Param1"]);
    }

    #[test]
    fn structural_keys_extend_parameter_paths() {
        let report = walk(
            r#"{"root": {"meta": {"name": "root"}, "layout": {"grid": {"custom": {"Bad": 1}}}}}"#,
            &pascal(),
            &camel(),
        );
        assert_eq!(
            report.paths(Region::Parameters),
            vec!["root.layout.grid.custom.Bad"]
        );
    }

    #[test]
    fn components_reset_field_lineage() {
        let report = walk(
            r#"{"root": {"meta": {"name": "root"}, "children": [
                {"meta": {"name": "Label"}, "custom": {"Bad": 1}}
            ]}}"#,
            &pascal(),
            &camel(),
        );
        assert_eq!(report.paths(Region::Parameters), vec!["root/Label.custom.Bad"]);
    }

    #[test]
    fn array_keys_add_no_path_segment() {
        let report = walk(
            r#"{"root": {"meta": {"name": "root"}, "items": [
                {"custom": {"Bad": 1}},
                {"custom": {"AlsoBad": 2}}
            ]}}"#,
            &pascal(),
            &camel(),
        );
        assert_eq!(
            report.paths(Region::Parameters),
            vec!["root.custom.Bad", "root.custom.AlsoBad"]
        );
    }

    #[test]
    fn scripts_are_skipped_without_a_session() {
        let report = walk(
            r#"{"root": {"meta": {"name": "root"}, "scripts": {"customMethods": [
                {"name": "run", "script": "x", "params": ["BadArg"]}
            ]}}}"#,
            &pascal(),
            &camel(),
        );
        assert!(report.is_empty());
    }

    #[test]
    fn scripts_and_events_are_forwarded_with_a_session() {
        let components = pascal();
        let parameters = camel();
        let stub = StubScriptLinter::clean();
        let log = stub.call_log();
        let mut session = ScriptLintSession::new(Box::new(stub));
        let doc = parse_document(
            r#"{"root": {"meta": {"name": "root"}, "children": [
                {"meta": {"name": "Button"}, "events": {"component": {"onActionPerformed": {
                    "type": "script", "scope": "G", "config": {"script": "print(1)"}
                }}}}
            ], "scripts": {"onStartup": {"script": "x = 1"}}}}"#,
        )
        .unwrap();
        let mut report = ErrorReport::new(true);
        Walker::new(&components, &parameters)
            .with_scripts(&mut session)
            .walk(&doc, &mut report, &PathContext::new());

        assert_eq!(
            log.contexts(),
            vec![
                "root/Button.events.component.onActionPerformed.config.script",
                "root.scripts.onStartup.script",
            ]
        );
        assert_eq!(session.scripts_linted(), 2);
    }
}
