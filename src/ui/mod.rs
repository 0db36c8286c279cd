//! User-facing report output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`ConsoleUI`] for terminals and CI logs
//! - [`MockUI`] for capturing lines in tests
//!
//! Diagnostics go through `tracing`; only the lines a person (or a CI
//! runner) is meant to read go through here.

pub mod console;
pub mod mock;
pub mod output;
pub mod theme;

pub use console::ConsoleUI;
pub use mock::MockUI;
pub use output::OutputMode;
pub use theme::{should_use_colors, WatchTheme};

/// Prefix that makes GitHub Actions highlight a log line as an error.
pub const ALARM_MARKER: &str = "::error::";

/// Trait for report output.
///
/// This trait allows capturing the output in tests.
pub trait UserInterface {
    /// Display an informational message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Raise an alarm: a line prefixed with [`ALARM_MARKER`].
    fn alarm(&mut self, msg: &str);
}

/// Create the console UI for the given mode.
///
/// `no_color` forces the plain theme; otherwise colors follow the terminal
/// and `NO_COLOR`.
pub fn create_ui(mode: OutputMode, no_color: bool) -> Box<dyn UserInterface> {
    if no_color {
        Box::new(ConsoleUI::with_theme(mode, WatchTheme::plain()))
    } else {
        Box::new(ConsoleUI::new(mode))
    }
}
