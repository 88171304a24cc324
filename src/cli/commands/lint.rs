//! Lint command implementation.
//!
//! Lints every view matching the configured patterns and reports naming
//! problems. This is what `ignition-lint` runs without a subcommand.

use std::path::{Path, PathBuf};

use crate::cli::args::LintArgs;
use crate::config::{load_config, LintConfig};
use crate::error::Result;
use crate::lint::{
    HumanFormatter, JsonFormatter, LintFormatter, Linter, OutputFormat, RunReport,
};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The lint command implementation.
pub struct LintCommand {
    project_root: PathBuf,
    args: LintArgs,
}

impl LintCommand {
    /// Create a new lint command.
    pub fn new(project_root: &Path, args: LintArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &LintArgs {
        &self.args
    }

    /// Load the configuration file and apply the command-line overrides.
    fn resolve_config(&self) -> Result<LintConfig> {
        let config = load_config(&self.project_root, self.args.config.as_deref())?;
        Ok(config.with_overrides(&self.args.overrides()))
    }

    /// Format the run using the requested formatter.
    fn format_output(&self, linter: &Linter, run: &RunReport) -> String {
        let mut output = Vec::new();

        match OutputFormat::from_name(&self.args.format) {
            OutputFormat::Json => {
                JsonFormatter::new().format(run, &mut output).ok();
            }
            OutputFormat::Human => {
                let formatter =
                    HumanFormatter::new(linter.component_checker(), linter.parameter_checker());
                formatter.format(run, &mut output).ok();
            }
        }

        String::from_utf8(output).unwrap_or_default()
    }
}

impl Command for LintCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.resolve_config()?;
        let mut linter = Linter::from_config(&config)?;

        let patterns = config.file_patterns();
        let run = linter.lint_patterns(&self.project_root, &patterns)?;

        for warning in linter.take_warnings() {
            ui.warning(&warning);
        }

        let format = OutputFormat::from_name(&self.args.format);
        if format == OutputFormat::Human && run.files.is_empty() {
            ui.message("No files found matching the specified patterns");
            return Ok(CommandResult::success());
        }

        let output = self.format_output(&linter, &run);
        match format {
            OutputFormat::Json => ui.message(output.trim_end()),
            OutputFormat::Human => {
                for line in output.lines() {
                    ui.message(line);
                }
            }
        }

        ui.detail(&format!(
            "Linted {} file(s) and {} script(s)",
            linter.files_linted(),
            linter.scripts_linted()
        ));

        if !run.is_clean() {
            return Ok(CommandResult::failure(1));
        }

        if format == OutputFormat::Human {
            ui.success("No style inconsistencies found");
        }
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LintError;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    const CLEAN_VIEW: &str = r#"{
        "custom": {"viewParam": 1},
        "root": {"meta": {"name": "root"}, "children": [{"meta": {"name": "MainLabel"}}]}
    }"#;

    const BAD_VIEW: &str = r#"{
        "root": {"meta": {"name": "root"}, "children": [
            {"meta": {"name": "mainLabel"}, "custom": {"BadParam": true}}
        ]}
    }"#;

    fn setup_view(relative: &str, content: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
        temp
    }

    fn args() -> LintArgs {
        LintArgs {
            component_style: Some("PascalCase".to_string()),
            parameter_style: Some("camelCase".to_string()),
            no_scripts: true,
            format: "human".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn lint_command_creation() {
        let temp = TempDir::new().unwrap();
        let cmd = LintCommand::new(temp.path(), args());
        assert_eq!(cmd.project_root(), temp.path());
        assert_eq!(cmd.args().format, "human");
    }

    #[test]
    fn clean_views_succeed() {
        let temp = setup_view("views/Main/view.json", CLEAN_VIEW);
        let mut ui = MockUI::new();

        let result = LintCommand::new(temp.path(), args()).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_success("No style inconsistencies found"));
    }

    #[test]
    fn violations_fail_with_report() {
        let temp = setup_view("views/Main/view.json", BAD_VIEW);
        let mut ui = MockUI::new();

        let result = LintCommand::new(temp.path(), args()).execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_message("Error in file: views/Main/view.json"));
        assert!(ui.has_message("Component names should be in PascalCase:"));
        assert!(ui.has_message("- root/mainLabel"));
        assert!(ui.has_message("- root/mainLabel.custom.BadParam"));
        assert!(ui.successes().is_empty());
    }

    #[test]
    fn no_matching_files_is_not_a_failure() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = LintCommand::new(temp.path(), args()).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("No files found matching the specified patterns"));
    }

    #[test]
    fn parse_errors_are_reported_but_do_not_fail() {
        let temp = setup_view("broken/view.json", r#"{"key": "value}"#);
        let mut ui = MockUI::new();

        let result = LintCommand::new(temp.path(), args()).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("Error parsing file broken/view.json"));
    }

    #[test]
    fn missing_explicit_file_is_reported() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let args = LintArgs {
            files: Some("missing/view.json".to_string()),
            ..args()
        };

        let result = LintCommand::new(temp.path(), args).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("File not found: missing/view.json"));
    }

    #[test]
    fn configuration_errors_are_returned() {
        let temp = setup_view("view.json", CLEAN_VIEW);
        let mut ui = MockUI::new();
        let args = LintArgs {
            parameter_style: None,
            ..args()
        };

        let err = LintCommand::new(temp.path(), args).execute(&mut ui).unwrap_err();
        assert!(matches!(err, LintError::MissingStyle { .. }));
    }

    #[test]
    fn config_file_supplies_styles() {
        let temp = setup_view("view.json", BAD_VIEW);
        fs::write(
            temp.path().join(".ignition-lint.yml"),
            "component_style: camelCase\nparameter_style: PascalCase\nscripts:\n  enabled: false\n",
        )
        .unwrap();
        let mut ui = MockUI::new();
        let args = LintArgs {
            format: "human".to_string(),
            ..Default::default()
        };

        let result = LintCommand::new(temp.path(), args).execute(&mut ui).unwrap();
        assert!(result.success);
    }

    #[test]
    fn json_format_prints_document() {
        let temp = setup_view("view.json", BAD_VIEW);
        let mut ui = MockUI::new();
        let args = LintArgs {
            format: "json".to_string(),
            ..args()
        };

        let result = LintCommand::new(temp.path(), args).execute(&mut ui).unwrap();

        assert!(!result.success);
        let json: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(json["summary"]["violations"], 2);
        assert!(ui.successes().is_empty());
    }

    #[test]
    fn unavailable_script_linter_warns() {
        let temp = setup_view(
            "view.json",
            r#"{"root": {"meta": {"name": "root"}, "scripts": {"onStartup": {"script": "x = 1"}}}}"#,
        );
        let mut ui = MockUI::new();
        let args = LintArgs {
            no_scripts: false,
            script_linter: Some("ignition-lint-no-such-program".to_string()),
            ..args()
        };

        let result = LintCommand::new(temp.path(), args).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_warning("Script linting is disabled"));
    }

    #[test]
    fn verbose_details_count_files() {
        let temp = setup_view("view.json", CLEAN_VIEW);
        let mut ui = MockUI::new();

        LintCommand::new(temp.path(), args()).execute(&mut ui).unwrap();

        assert_eq!(ui.details(), &["Linted 1 file(s) and 0 script(s)"]);
    }
}
