//! The release check pipeline.
//!
//! A check runs `Start → ConfigLoaded → Fetched → Extracted → Decided`.
//! Any failing stage ends the check; there are no retries.

use std::fmt;
use std::path::Path;

use crate::config::{EnvFile, WatchConfig, CURRENT_RELEASE_KEY, RELEASE_CHANGED_KEY};
use crate::error::Result;
use crate::extract::extract_release;
use crate::fetch::PageFetcher;
use crate::report::{decide, Decision, Reporter};
use crate::ui::UserInterface;

/// Pipeline stage reached by a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    ConfigLoaded,
    Fetched,
    Extracted,
    Decided,
}

impl Stage {
    fn advance(&mut self, next: Stage) {
        tracing::debug!("{} -> {}", self, next);
        *self = next;
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Start => write!(f, "start"),
            Stage::ConfigLoaded => write!(f, "config_loaded"),
            Stage::Fetched => write!(f, "fetched"),
            Stage::Extracted => write!(f, "extracted"),
            Stage::Decided => write!(f, "decided"),
        }
    }
}

/// What a completed check observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// The page that was fetched.
    pub url: String,
    /// The release the page was expected to show.
    pub expected: String,
    /// The comparison result.
    pub decision: Decision,
    /// Whether appending to the CI env file failed. The failure has
    /// already been reported; the run must still exit non-zero.
    pub export_failed: bool,
}

/// One check of one page.
///
/// # Example
///
/// ```
/// use release_watch::config::{WatchConfig, DEFAULT_URL};
/// use release_watch::fetch::MockFetcher;
/// use release_watch::pipeline::ReleaseCheck;
/// use release_watch::ui::MockUI;
///
/// let config = WatchConfig::new(DEFAULT_URL, Some("3040")).unwrap();
/// let check = ReleaseCheck::new(config, MockFetcher::with_body("Release 3041"));
///
/// let mut ui = MockUI::new();
/// let report = check.run(&mut ui).unwrap();
/// assert!(report.decision.is_changed());
/// ```
pub struct ReleaseCheck<F: PageFetcher> {
    config: WatchConfig,
    fetcher: F,
}

impl<F: PageFetcher> ReleaseCheck<F> {
    pub fn new(config: WatchConfig, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    /// Fetch, extract and compare.
    ///
    /// A changed release is a successful run here; callers decide how to
    /// surface it (see [`Decision::into_result`]). Progress lines are
    /// written to `ui`, the outcome is not.
    ///
    /// A failed env-file export does not end the check: it is reported as
    /// an error line and flagged in [`CheckReport::export_failed`], so the
    /// decision is still surfaced.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<CheckReport> {
        let mut stage = Stage::Start;
        let result = self.run_stages(ui, &mut stage);
        if let Err(e) = &result {
            tracing::debug!("Check stopped after {}: {}", stage, e);
        }
        result
    }

    fn run_stages(&self, ui: &mut dyn UserInterface, stage: &mut Stage) -> Result<CheckReport> {
        let mut reporter = Reporter::new(ui);
        let expected = self.config.expected_release();
        let url = self.config.url().as_str();

        stage.advance(Stage::ConfigLoaded);
        reporter.expected(expected);

        let body = self.fetcher.fetch(url)?;
        stage.advance(Stage::Fetched);

        let current = extract_release(&body, url)?;
        stage.advance(Stage::Extracted);
        reporter.current(&current);

        let decision = decide(expected, &current);
        stage.advance(Stage::Decided);

        let mut export_failed = false;
        match self.config.export_target() {
            Some(path) => {
                if let Err(e) = export(path, &decision) {
                    tracing::debug!("Export to {} failed: {}", path.display(), e);
                    reporter.failure(&e);
                    export_failed = true;
                }
            }
            None if self.config.export_requested() => reporter.skipped_export(),
            None => {}
        }

        Ok(CheckReport {
            url: url.to_string(),
            expected: expected.to_string(),
            decision,
            export_failed,
        })
    }
}

/// Append the observed release to the CI env file.
fn export(path: &Path, decision: &Decision) -> Result<()> {
    let changed = if decision.is_changed() { "true" } else { "false" };
    EnvFile::new(path).append(&[
        (CURRENT_RELEASE_KEY, decision.current()),
        (RELEASE_CHANGED_KEY, changed),
    ])
}
