//! Release Watch - alarm when a published release changes.
//!
//! Release Watch fetches a public page, extracts its `Release <digits>`
//! marker and compares it with the release CI expects. A change fails the
//! run and prints a `::error::` line so the surrounding workflow can alert.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Validated check inputs and CI env-file export
//! - [`error`] - Error types and result aliases
//! - [`extract`] - Release marker extraction
//! - [`fetch`] - Page fetching over HTTP, and a mock for tests
//! - [`pipeline`] - The fetch → extract → compare check
//! - [`report`] - Comparison and outcome reporting
//! - [`ui`] - Console output and a capturing mock
//!
//! # Example
//!
//! ```
//! use release_watch::config::{WatchConfig, DEFAULT_URL};
//! use release_watch::fetch::MockFetcher;
//! use release_watch::pipeline::ReleaseCheck;
//! use release_watch::ui::MockUI;
//!
//! let config = WatchConfig::new(DEFAULT_URL, Some("3040")).unwrap();
//! let check = ReleaseCheck::new(config, MockFetcher::with_body("<h2>Release 3040</h2>"));
//!
//! let report = check.run(&mut MockUI::new()).unwrap();
//! assert_eq!(report.decision.into_result().unwrap(), "3040");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod pipeline;
pub mod report;
pub mod ui;

pub use error::{Result, WatchError};
