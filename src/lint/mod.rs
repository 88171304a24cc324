//! View linting.
//!
//! This module walks view documents and reports naming problems:
//!
//! - [`Walker`] - Depth-first traversal applying the style checkers
//! - [`ScriptExtractor`] - Forwards embedded scripts to the script linter
//! - [`ErrorReport`] - Diagnostics of one document, grouped by [`Region`]
//! - [`Linter`] - Orchestrates documents, files and patterns for one run
//! - Output formatters: [`HumanFormatter`], [`JsonFormatter`]
//!
//! # Example
//!
//! ```
//! use ignition_lint::config::LintConfig;
//! use ignition_lint::lint::{Linter, Region};
//! use std::path::Path;
//!
//! let config = LintConfig {
//!     component_style: Some("PascalCase".to_string()),
//!     parameter_style: Some("camelCase".to_string()),
//!     ..Default::default()
//! };
//! let mut linter = Linter::from_config(&config).unwrap();
//!
//! let report = linter
//!     .lint_source(
//!         r#"{"root": {"meta": {"name": "root"}, "custom": {"BadKey": 1}}}"#,
//!         Path::new("view.json"),
//!     )
//!     .unwrap();
//! assert_eq!(report.paths(Region::Parameters), vec!["root.custom.BadKey"]);
//! ```

pub mod diagnostic;
pub mod discovery;
pub mod linter;
pub mod output;
pub mod report;
pub mod scripts;
pub mod walker;

pub use diagnostic::{Diagnostic, Region};
pub use discovery::{discover_files, is_glob};
pub use linter::Linter;
pub use output::{HumanFormatter, JsonFormatter, LintFormatter, OutputFormat};
pub use report::{ErrorReport, FileOutcome, FileReport, RunReport};
pub use scripts::ScriptExtractor;
pub use walker::Walker;
