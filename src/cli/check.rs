//! The `release-watch` command.
//!
//! Wires the parsed [`Cli`] into a [`ReleaseCheck`] and maps its outcome to
//! an exit code.

use crate::cli::args::Cli;
use crate::config::WatchConfig;
use crate::error::Result;
use crate::fetch::{HttpFetcher, PageFetcher};
use crate::pipeline::{CheckReport, ReleaseCheck};
use crate::report::Reporter;
use crate::ui::UserInterface;

/// Exit code when the release matched but the env-file export failed.
const EXPORT_FAILED_EXIT_CODE: i32 = 1;

/// Result of command execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Checks the watched page against the expected release.
#[derive(Debug, Clone)]
pub struct CheckCommand {
    url: String,
    expected: Option<String>,
    env_file: Option<std::path::PathBuf>,
    export_env: bool,
}

impl CheckCommand {
    /// Capture the inputs of a check from parsed arguments.
    pub fn new(cli: &Cli) -> Self {
        Self {
            url: cli.url.clone(),
            expected: cli.expected.clone(),
            env_file: cli
                .env_file
                .clone()
                .filter(|p| !p.as_os_str().is_empty()),
            export_env: cli.export_env,
        }
    }

    /// Validate the captured inputs.
    pub fn config(&self) -> Result<WatchConfig> {
        Ok(WatchConfig::new(&self.url, self.expected.as_deref())?
            .with_env_file(self.env_file.clone(), self.export_env))
    }

    /// Run the check against the network.
    pub fn execute(&self, ui: &mut dyn UserInterface) -> CommandResult {
        self.execute_with(HttpFetcher::new, ui)
    }

    /// Run the check with a fetcher produced by `build`.
    ///
    /// `build` is only called once the configuration is valid, so a missing
    /// expectation never reaches the network.
    ///
    /// The decision is always reported once a release was extracted; a failed
    /// env-file export only turns the exit code non-zero.
    pub fn execute_with<F, B>(&self, build: B, ui: &mut dyn UserInterface) -> CommandResult
    where
        F: PageFetcher,
        B: FnOnce() -> Result<F>,
    {
        let outcome = self.check(build, ui);
        let mut reporter = Reporter::new(ui);

        let (decided, export_failed) = match outcome {
            Ok(report) => (report.decision.into_result(), report.export_failed),
            Err(err) => (Err(err), false),
        };

        let result = match decided {
            Ok(release) => {
                reporter.success(&release);
                CommandResult::success()
            }
            Err(err) => {
                reporter.failure(&err);
                CommandResult::failure(err.exit_code())
            }
        };

        if export_failed && result.success {
            CommandResult::failure(EXPORT_FAILED_EXIT_CODE)
        } else {
            result
        }
    }

    fn check<F, B>(&self, build: B, ui: &mut dyn UserInterface) -> Result<CheckReport>
    where
        F: PageFetcher,
        B: FnOnce() -> Result<F>,
    {
        let config = self.config()?;
        let fetcher = build()?;
        ReleaseCheck::new(config, fetcher).run(ui)
    }
}
