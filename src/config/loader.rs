//! Configuration file discovery and loading.

use crate::config::schema::LintConfig;
use crate::error::{LintError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File names looked for in the project root, in priority order.
pub const CONFIG_FILE_NAMES: [&str; 2] = [".ignition-lint.yml", "ignition-lint.yml"];

/// Find a configuration file in `project_root`.
pub fn find_config_file(project_root: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| project_root.join(name))
        .find(|path| path.is_file())
}

/// Load configuration for a run.
///
/// An explicit path must exist. Without one, a discovered file is used if
/// present; otherwise the defaults apply.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<LintConfig> {
    let path = match explicit {
        Some(path) => {
            let path = if path.is_absolute() {
                path.to_path_buf()
            } else {
                project_root.join(path)
            };
            if !path.is_file() {
                return Err(LintError::ConfigNotFound { path });
            }
            path
        }
        None => match find_config_file(project_root) {
            Some(path) => path,
            None => {
                tracing::debug!("No configuration file in {}", project_root.display());
                return Ok(LintConfig::default());
            }
        },
    };

    load_config_file(&path)
}

/// Load and parse a single configuration file.
pub fn load_config_file(path: &Path) -> Result<LintConfig> {
    tracing::debug!("Loading configuration from {}", path.display());
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => LintError::ConfigNotFound {
            path: path.to_path_buf(),
        },
        _ => LintError::Io(e),
    })?;
    parse_config(&content, path)
}

/// Parse configuration from a YAML string.
pub fn parse_config(content: &str, path: &Path) -> Result<LintConfig> {
    // An empty file means "all defaults".
    if content.trim().is_empty() {
        return Ok(LintConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| LintError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
