//! Naming style classification.
//!
//! This module decides whether a name follows a casing convention:
//!
//! - [`NamingStyle`] - The closed set of named conventions
//! - [`StyleRule`] - A named convention or a custom pattern
//! - [`StyleChecker`] - The predicate built from a rule
//!
//! # Example
//!
//! ```
//! use ignition_lint::style::StyleChecker;
//!
//! let checker = StyleChecker::new("PascalCase", false).unwrap();
//! assert!(checker.is_correct("MyButton"));
//! assert!(!checker.is_correct("myButton"));
//!
//! // Unknown names are compiled as patterns.
//! let checker = StyleChecker::new("btn_[a-z]+", false).unwrap();
//! assert!(checker.is_correct("btn_submit"));
//! ```

pub mod acronym;
pub mod checker;
pub mod naming;

pub use checker::{StyleChecker, StyleRule};
pub use naming::NamingStyle;
