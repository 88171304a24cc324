//! Integration tests for the ignition-lint binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CLEAN_VIEW: &str = r#"{
    "custom": {"selectedSite": 1},
    "root": {"meta": {"name": "root"}, "children": [{"meta": {"name": "MainLabel"}}]}
}"#;

const BAD_VIEW: &str = r#"{
    "root": {"meta": {"name": "root"}, "children": [
        {"meta": {"name": "mainLabel"}, "custom": {"BadParam": true}}
    ]}
}"#;

fn write_view(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn lint_in(dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("ignition-lint"));
    cmd.current_dir(dir).arg("--no-scripts");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("ignition-lint"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--component-style"))
        .stdout(predicate::str::contains("--parameter-style-rgx"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("ignition-lint"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_reports_fixture_violations() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = lint_in(Path::new(env!("CARGO_MANIFEST_DIR")));
    cmd.args([
        "--files",
        "tests/cases/camelCase/view.json,tests/cases/PascalCase/view.json",
        "--component-style",
        "PascalCase",
        "--parameter-style",
        "PascalCase",
    ]);
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            "Error in file: tests/cases/camelCase/view.json",
        ))
        .stdout(predicate::str::contains("root/iconCamelCase"))
        .stdout(predicate::str::contains("view.params.viewParam"))
        .stdout(predicate::str::contains("Found 5 style inconsistencies in 1 file(s)"))
        .stdout(predicate::str::contains("tests/cases/PascalCase/view.json").not());
    Ok(())
}

#[test]
fn cli_clean_project_succeeds() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    write_view(temp.path(), "views/Main/view.json", CLEAN_VIEW);

    lint_in(temp.path())
        .args(["--component-style", "PascalCase", "--parameter-style", "camelCase"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No style inconsistencies found"));
    Ok(())
}

#[test]
fn cli_reports_relative_paths() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    write_view(temp.path(), "views/Main/view.json", BAD_VIEW);

    lint_in(temp.path())
        .args(["--component-style", "PascalCase", "--parameter-style", "camelCase"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Error in file: views/Main/view.json"))
        .stdout(predicate::str::contains("Component names should be in PascalCase:"))
        .stdout(predicate::str::contains("root/mainLabel.custom.BadParam"));
    Ok(())
}

#[test]
fn cli_no_matching_files_succeeds() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    lint_in(temp.path())
        .args(["--files", "nonexistent/**/view.json"])
        .args(["--component-style", "PascalCase", "--parameter-style", "camelCase"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No files found matching the specified patterns",
        ));
    Ok(())
}

#[test]
fn cli_rejects_conflicting_selectors() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(
        temp.path().join(".ignition-lint.yml"),
        "component_style: PascalCase\ncomponent_style_rgx: \"^[A-Z]\"\nparameter_style: camelCase\n",
    )?;

    lint_in(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Cannot specify both"));
    Ok(())
}

#[test]
fn cli_flag_replaces_config_selector() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(
        temp.path().join(".ignition-lint.yml"),
        "component_style: PascalCase\ncomponent_style_rgx: \"^[A-Z]\"\nparameter_style: camelCase\n",
    )?;
    write_view(temp.path(), "views/Main/view.json", CLEAN_VIEW);

    lint_in(temp.path())
        .args(["--component-style", "PascalCase"])
        .assert()
        .success();
    Ok(())
}

#[test]
fn cli_requires_a_style_for_each_region() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    lint_in(temp.path())
        .args(["--component-style", "PascalCase"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Parameter naming style not specified"));
    Ok(())
}

#[test]
fn cli_parse_errors_do_not_fail() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    write_view(temp.path(), "views/Broken/view.json", r#"{"key": "value}"#);

    lint_in(temp.path())
        .args(["--component-style", "PascalCase", "--parameter-style", "camelCase"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error parsing file views/Broken/view.json",
        ));
    Ok(())
}

#[test]
fn cli_json_format() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    write_view(temp.path(), "views/Main/view.json", BAD_VIEW);

    let output = lint_in(temp.path())
        .args(["--component-style", "PascalCase", "--parameter-style", "camelCase"])
        .args(["--format", "json"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["summary"]["violations"], 2);
    assert_eq!(json["files"][0]["path"], "views/Main/view.json");
    assert_eq!(
        json["files"][0]["categories"]["components"][0]["path"],
        "root/mainLabel"
    );
    Ok(())
}

#[test]
fn cli_generates_completions() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("ignition-lint"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ignition-lint"));
    Ok(())
}
