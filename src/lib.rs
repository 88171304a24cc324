//! ignition-lint - Naming style checks for Ignition Perspective views.
//!
//! ignition-lint walks `view.json` documents and reports component names
//! and parameter keys that break the configured naming convention. Script
//! bodies embedded in views can be handed to an external linter.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, merging, and validation
//! - [`document`] - Decoded view documents and traversal paths
//! - [`error`] - Error types and result aliases
//! - [`lint`] - Traversal, reports, and output formatting
//! - [`script`] - External script linting
//! - [`style`] - Naming convention checks
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use ignition_lint::style::StyleChecker;
//!
//! let checker = StyleChecker::new("camelCase", false).unwrap();
//! assert!(checker.is_correct("myParam"));
//! assert!(!checker.is_correct("MyParam"));
//! ```
//!
//! For linting whole views, see [`lint::Linter`] and the integration tests.

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod lint;
pub mod script;
pub mod style;
pub mod ui;

pub use error::{LintError, Result};
