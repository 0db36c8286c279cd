//! Release marker extraction.
//!
//! The watched page announces its current version as `Release <digits>`,
//! e.g. "Leiaute do Documento 3040 - Release 3041". The marker word is
//! matched case-insensitively and the digit run must be at least four long.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, WatchError};

/// Source of the release marker regex.
pub const RELEASE_PATTERN: &str = r"(?i)Release\s+([0-9]{4,})";

static RELEASE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(RELEASE_PATTERN).expect("RELEASE_PATTERN must compile"));

/// Return the digits of the first release marker in `body`, if any.
///
/// Later markers are ignored.
///
/// # Example
///
/// ```
/// use release_watch::extract::find_release;
///
/// assert_eq!(find_release("Leiaute - RELEASE 3041"), Some("3041"));
/// assert_eq!(find_release("Release 12"), None);
/// ```
pub fn find_release(body: &str) -> Option<&str> {
    RELEASE_REGEX
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Like [`find_release`], failing with [`WatchError::PatternNotFound`].
///
/// `url` is only used to label the error.
pub fn extract_release(body: &str, url: &str) -> Result<String> {
    match find_release(body) {
        Some(release) => {
            tracing::debug!("Found release marker {} in {} bytes", release, body.len());
            Ok(release.to_string())
        }
        None => Err(WatchError::PatternNotFound {
            url: url.to_string(),
        }),
    }
}
