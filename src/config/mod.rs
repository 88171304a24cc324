//! Configuration loading, merging, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Command-line overrides in [`overrides`]
//! - Selector validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use ignition_lint::config::{load_config, resolve_styles};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(
//!     temp.path().join(".ignition-lint.yml"),
//!     "component_style: PascalCase\nparameter_style: camelCase\n",
//! )
//! .unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! let styles = resolve_styles(&config).unwrap();
//! assert!(styles.component.is_correct("MainContainer"));
//! ```
//!
//! # Configuration File Locations
//!
//! An explicit `--config` path wins. Otherwise `.ignition-lint.yml` and
//! then `ignition-lint.yml` are looked for in the working directory.

pub mod loader;
pub mod overrides;
pub mod schema;
pub mod validator;

pub use loader::{find_config_file, load_config, load_config_file, parse_config, CONFIG_FILE_NAMES};
pub use overrides::ConfigOverrides;
pub use schema::{LintConfig, ScriptConfig, DEFAULT_FILES, DEFAULT_SCRIPT_LINTER};
pub use validator::{resolve_styles, validate, ResolvedStyles};
