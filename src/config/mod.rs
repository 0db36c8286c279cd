//! Configuration for release checks.
//!
//! - [`watch`] holds [`WatchConfig`], the validated inputs of one check
//! - [`env_file`] writes results to the CI env file for later steps

pub mod env_file;
pub mod watch;

pub use env_file::{EnvFile, CURRENT_RELEASE_KEY, RELEASE_CHANGED_KEY};
pub use watch::{
    WatchConfig, DEFAULT_URL, ENV_FILE_VAR, EXPECTED_RELEASE_VAR, URL_VAR,
};
