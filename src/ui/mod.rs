//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real terminal output
//! - [`MockUI`] for testing
//! - [`LintTheme`] for consistent styling

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, LintTheme};

/// Main UI trait for all user interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Show a line of report output.
    fn message(&mut self, msg: &str);

    /// Show a detail line (verbose mode only).
    fn detail(&mut self, msg: &str);

    /// Show a success message.
    fn success(&mut self, msg: &str);

    /// Show a warning message.
    fn warning(&mut self, msg: &str);

    /// Show an error message.
    fn error(&mut self, msg: &str);
}
