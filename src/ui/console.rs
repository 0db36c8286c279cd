//! Console UI for terminals and CI logs.

use super::theme::WatchTheme;
use super::{OutputMode, UserInterface, ALARM_MARKER};

/// Writes report lines to stdout/stderr.
///
/// Informational and success lines go to stdout, warnings and errors to
/// stderr. The alarm line always goes to stdout, unstyled, so CI runners
/// recognize its marker.
pub struct ConsoleUI {
    mode: OutputMode,
    theme: WatchTheme,
}

impl ConsoleUI {
    /// Create a console UI, detecting whether colors are usable.
    pub fn new(mode: OutputMode) -> Self {
        Self::with_theme(mode, WatchTheme::detect())
    }

    /// Create a console UI with an explicit theme.
    pub fn with_theme(mode: OutputMode, theme: WatchTheme) -> Self {
        Self { mode, theme }
    }
}

impl UserInterface for ConsoleUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_message(msg));
        }
    }

    fn success(&mut self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{}", self.theme.format_warning(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn alarm(&mut self, msg: &str) {
        println!("{}{}", ALARM_MARKER, msg);
    }
}
