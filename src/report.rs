//! Comparing releases and reporting the outcome.
//!
//! [`decide`] is the pure comparison; [`Reporter`] turns progress, decisions
//! and errors into the lines people and CI runners read.

use crate::error::{Result, WatchError};
use crate::ui::UserInterface;

/// Outcome of comparing the published release with the expected one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The page shows the expected release.
    Unchanged { release: String },
    /// The page shows a different release.
    Changed { expected: String, current: String },
}

impl Decision {
    /// Whether the release differs from the expectation.
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed { .. })
    }

    /// The release found on the page.
    pub fn current(&self) -> &str {
        match self {
            Self::Unchanged { release } => release,
            Self::Changed { current, .. } => current,
        }
    }

    /// Turn a change into [`WatchError::VersionMismatch`].
    ///
    /// Returns the unchanged release on success.
    pub fn into_result(self) -> Result<String> {
        match self {
            Self::Unchanged { release } => Ok(release),
            Self::Changed { expected, current } => {
                Err(WatchError::VersionMismatch { expected, current })
            }
        }
    }
}

/// Compare releases by exact string equality.
///
/// No numeric coercion and no trimming: `"03040"` and `"3040"` differ.
///
/// # Example
///
/// ```
/// use release_watch::report::{decide, Decision};
///
/// assert!(!decide("3040", "3040").is_changed());
/// assert_eq!(
///     decide("3040", "3041"),
///     Decision::Changed { expected: "3040".into(), current: "3041".into() }
/// );
/// ```
pub fn decide(expected: &str, current: &str) -> Decision {
    if expected == current {
        Decision::Unchanged {
            release: current.to_string(),
        }
    } else {
        Decision::Changed {
            expected: expected.to_string(),
            current: current.to_string(),
        }
    }
}

/// Writes the lines of a check to a [`UserInterface`].
pub struct Reporter<'a> {
    ui: &'a mut dyn UserInterface,
}

impl<'a> Reporter<'a> {
    /// Report through `ui`.
    pub fn new(ui: &'a mut dyn UserInterface) -> Self {
        Self { ui }
    }

    /// Log the release the page should show.
    pub fn expected(&mut self, release: &str) {
        self.ui.message(&format!("Expected release: {}", release));
    }

    /// Log the release extracted from the page.
    pub fn current(&mut self, release: &str) {
        self.ui.message(&format!("Current release found: {}", release));
    }

    /// Warn that export was requested without an env file.
    pub fn skipped_export(&mut self) {
        self.ui
            .warning("--export-env was given but no env file is set; nothing exported");
    }

    /// Confirm the page still shows the expected release.
    pub fn success(&mut self, release: &str) {
        self.ui.success(&format!(
            "Current release ({}) matches the expected release",
            release
        ));
    }

    /// Report a terminal error.
    ///
    /// A release change raises an alarm; anything else is an error line.
    pub fn failure(&mut self, err: &WatchError) {
        if err.is_alarm() {
            self.ui.alarm(&format!("!!! ALARM: {}", err));
        } else {
            self.ui.error(&format!("Error: {}", err));
        }
    }
}
