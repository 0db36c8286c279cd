//! Check configuration.
//!
//! [`WatchConfig`] is built once at startup and passed into the pipeline.
//! Nothing below this layer reads the process environment.

use std::path::{Path, PathBuf};

use reqwest::Url;

use crate::error::{Result, WatchError};

/// Page published with the current release marker.
pub const DEFAULT_URL: &str =
    "https://www.bcb.gov.br/api/paginasite/sitebcb/estabilidadefinanceira/scrdoc3040";

/// Environment variable holding the expected release.
pub const EXPECTED_RELEASE_VAR: &str = "EXPECTED_RELEASE";

/// Environment variable overriding the watched URL.
pub const URL_VAR: &str = "RELEASE_WATCH_URL";

/// Environment variable pointing at the CI env file.
pub const ENV_FILE_VAR: &str = "GITHUB_ENV";

/// Validated inputs for a single check.
///
/// # Example
///
/// ```
/// use release_watch::config::{WatchConfig, DEFAULT_URL};
///
/// let config = WatchConfig::new(DEFAULT_URL, Some("3040")).unwrap();
/// assert_eq!(config.expected_release(), "3040");
///
/// // An unset expectation can never be validated.
/// assert!(WatchConfig::new(DEFAULT_URL, None).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct WatchConfig {
    url: Url,
    expected_release: String,
    env_file: Option<PathBuf>,
    export_env: bool,
}

impl WatchConfig {
    /// Validate the watched URL and expected release.
    ///
    /// The expected release is checked first, so a missing expectation is
    /// reported even when the URL is also bad. The value is kept verbatim;
    /// it is only rejected when empty or whitespace.
    pub fn new(url: &str, expected_release: Option<&str>) -> Result<Self> {
        let expected_release = match expected_release {
            Some(value) if !value.trim().is_empty() => value.to_string(),
            _ => {
                return Err(WatchError::ConfigurationMissing {
                    name: EXPECTED_RELEASE_VAR.to_string(),
                })
            }
        };

        let url = Url::parse(url).map_err(|e| WatchError::InvalidUrl {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            url,
            expected_release,
            env_file: None,
            export_env: false,
        })
    }

    /// Build from a key lookup, e.g. a snapshot of the environment.
    ///
    /// Reads [`EXPECTED_RELEASE_VAR`], [`URL_VAR`] (falling back to
    /// [`DEFAULT_URL`]) and [`ENV_FILE_VAR`]. Export stays disabled.
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use release_watch::config::WatchConfig;
    ///
    /// let env = HashMap::from([("EXPECTED_RELEASE", "3040")]);
    /// let config = WatchConfig::from_lookup(|key| env.get(key).map(|v| v.to_string())).unwrap();
    /// assert_eq!(config.expected_release(), "3040");
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let expected = lookup(EXPECTED_RELEASE_VAR);
        let url = lookup(URL_VAR).unwrap_or_else(|| DEFAULT_URL.to_string());
        let env_file = lookup(ENV_FILE_VAR)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        Ok(Self::new(&url, expected.as_deref())?.with_env_file(env_file, false))
    }

    /// Set the CI env file and whether results are exported to it.
    pub fn with_env_file(mut self, env_file: Option<PathBuf>, export_env: bool) -> Self {
        self.env_file = env_file;
        self.export_env = export_env;
        self
    }

    /// The watched page.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The release the page is expected to show.
    pub fn expected_release(&self) -> &str {
        &self.expected_release
    }

    /// The CI env file, if one was provided.
    pub fn env_file(&self) -> Option<&Path> {
        self.env_file.as_deref()
    }

    /// Whether exporting results to the env file was requested.
    pub fn export_requested(&self) -> bool {
        self.export_env
    }

    /// Env file to export results to, when export is enabled and a file is set.
    pub fn export_target(&self) -> Option<&Path> {
        if self.export_env {
            self.env_file()
        } else {
            None
        }
    }
}
