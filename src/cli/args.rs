//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! Each input that CI usually provides has an environment fallback.

use clap::Parser;
use std::path::PathBuf;

use crate::config::DEFAULT_URL;
use crate::ui::OutputMode;

/// Release Watch - alarm when a published release changes.
#[derive(Debug, Parser)]
#[command(name = "release-watch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Release the page is expected to show
    #[arg(short, long, env = "EXPECTED_RELEASE")]
    pub expected: Option<String>,

    /// Page to watch
    #[arg(short, long, env = "RELEASE_WATCH_URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// CI env file that results can be exported to
    #[arg(long, env = "GITHUB_ENV")]
    pub env_file: Option<PathBuf>,

    /// Append CURRENT_RELEASE and RELEASE_CHANGED to the env file
    #[arg(long)]
    pub export_env: bool,

    /// Only print the outcome
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Output mode selected by the flags.
    pub fn output_mode(&self) -> OutputMode {
        if self.quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Normal
        }
    }
}
