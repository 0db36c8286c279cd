//! Error types for release checks.
//!
//! This module defines [`WatchError`], the error type returned by every stage
//! of a check, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every variant is terminal for the run and maps to exit code 1
//! - [`WatchError::VersionMismatch`] is not a technical failure; it is
//!   reported as an alarm instead of an error line
//! - Use `anyhow::Error` (via `WatchError::Other`) for unexpected errors

use thiserror::Error;

/// Core error type for release checks.
#[derive(Debug, Error)]
pub enum WatchError {
    /// A required configuration value is absent or empty.
    #[error("Required configuration '{name}' is not set")]
    ConfigurationMissing { name: String },

    /// The target URL could not be parsed.
    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// Transport failure reaching the target (DNS, TLS, reset, timeout).
    #[error("Network error fetching {url}: {message}")]
    NetworkError { url: String, message: String },

    /// The target answered with something other than 200.
    #[error("Request to {url} failed with status code {status}")]
    HttpStatusError { url: String, status: u16 },

    /// The page has no `Release <digits>` marker.
    #[error("Pattern 'Release ####' not found in page {url}")]
    PatternNotFound { url: String },

    /// The published release differs from the expected one.
    #[error("Release changed! Previous: {expected}, New: {current}")]
    VersionMismatch { expected: String, current: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WatchError {
    /// Process exit code for this error.
    ///
    /// A detected change deliberately shares the code of a technical failure
    /// so that schedulers treat both as actionable.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Whether this error signals a detected release change.
    pub fn is_alarm(&self) -> bool {
        matches!(self, Self::VersionMismatch { .. })
    }
}

/// Result type alias for release checks.
pub type Result<T> = std::result::Result<T, WatchError>;
