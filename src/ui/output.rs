//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show progress lines as well as the outcome.
    #[default]
    Normal,
    /// Show only the outcome: success, alarm or error.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows informational messages.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Normal)
    }
}
