//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Linting runs when no subcommand
//! is given.

pub mod completions;
pub mod dispatcher;
pub mod lint;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
