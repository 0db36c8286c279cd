//! Page fetching.
//!
//! The pipeline only sees the [`PageFetcher`] trait, so tests can swap the
//! network for a canned page:
//!
//! - [`HttpFetcher`] performs a real blocking GET
//! - [`MockFetcher`] returns a fixed body or failure and records calls

pub mod http;
pub mod mock;

pub use http::HttpFetcher;
pub use mock::MockFetcher;

use crate::error::Result;

/// Retrieves the full text of a page.
pub trait PageFetcher {
    /// Fetch `url` and return its body once fully read.
    ///
    /// Implementations fail with [`WatchError::HttpStatusError`] for any
    /// status other than 200 and with [`WatchError::NetworkError`] for
    /// transport failures.
    ///
    /// [`WatchError::HttpStatusError`]: crate::error::WatchError::HttpStatusError
    /// [`WatchError::NetworkError`]: crate::error::WatchError::NetworkError
    fn fetch(&self, url: &str) -> Result<String>;
}

impl<T: PageFetcher + ?Sized> PageFetcher for &T {
    fn fetch(&self, url: &str) -> Result<String> {
        (**self).fetch(url)
    }
}
