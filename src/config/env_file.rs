//! CI env-file export.
//!
//! CI runners such as GitHub Actions hand each step a file path (via
//! `GITHUB_ENV`) whose `KEY=value` lines become environment variables for
//! the steps that follow. [`EnvFile`] appends to and reads back such files.

use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, WatchError};

/// Key holding the release observed on the page.
pub const CURRENT_RELEASE_KEY: &str = "CURRENT_RELEASE";

/// Key holding `true` when the observed release differs from the expected one.
pub const RELEASE_CHANGED_KEY: &str = "RELEASE_CHANGED";

/// A `KEY=value` env file shared with later CI steps.
///
/// # Example
///
/// ```
/// use release_watch::config::EnvFile;
/// use tempfile::TempDir;
///
/// let temp = TempDir::new().unwrap();
/// let env_file = EnvFile::new(temp.path().join("github_env"));
///
/// env_file.append(&[("CURRENT_RELEASE", "3041")]).unwrap();
///
/// let vars = env_file.read_vars().unwrap();
/// assert_eq!(vars.get("CURRENT_RELEASE"), Some(&"3041".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct EnvFile {
    path: PathBuf,
}

impl EnvFile {
    /// Wrap the env file at `path`. Nothing is touched until a write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the env file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `KEY=value` lines, creating the file if needed.
    ///
    /// Existing lines are kept; runners read the file top to bottom, so a
    /// later line for the same key wins.
    pub fn append(&self, vars: &[(&str, &str)]) -> Result<()> {
        let mut content = String::new();
        for (key, value) in vars {
            if key.is_empty() || key.contains(['=', '\n', '\r']) {
                return Err(invalid_entry(format!("invalid env file key '{}'", key)));
            }
            if value.contains(['\n', '\r']) {
                return Err(invalid_entry(format!(
                    "value for '{}' spans multiple lines",
                    key
                )));
            }
            content.push_str(key);
            content.push('=');
            content.push_str(value);
            content.push('\n');
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(content.as_bytes())?;

        tracing::debug!("Appended {} entries to {}", vars.len(), self.path.display());
        Ok(())
    }

    /// Read the file back into a map. Later lines override earlier ones.
    pub fn read_vars(&self) -> Result<HashMap<String, String>> {
        let content = std::fs::read_to_string(&self.path)?;
        Ok(parse(&content))
    }
}

fn invalid_entry(message: String) -> WatchError {
    WatchError::Io(io::Error::new(io::ErrorKind::InvalidInput, message))
}

fn parse(content: &str) -> HashMap<String, String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect()
}
