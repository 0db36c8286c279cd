//! Command-line interface for Release Watch.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`check`] - The check command and its exit-code mapping

pub mod args;
pub mod check;

pub use args::Cli;
pub use check::{CheckCommand, CommandResult};
