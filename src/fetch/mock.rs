//! Canned page fetcher for tests.
//!
//! `MockFetcher` implements [`PageFetcher`] without touching the network
//! and records every URL it was asked for.
//!
//! # Example
//!
//! ```
//! use release_watch::fetch::{MockFetcher, PageFetcher};
//!
//! let fetcher = MockFetcher::with_body("<p>Release 3040</p>");
//! let body = fetcher.fetch("https://example.com/page").unwrap();
//!
//! assert!(body.contains("3040"));
//! assert_eq!(fetcher.calls(), vec!["https://example.com/page".to_string()]);
//! ```

use std::cell::RefCell;

use super::PageFetcher;
use crate::error::{Result, WatchError};

#[derive(Debug, Clone)]
enum MockResponse {
    Body(String),
    Status(u16),
    NetworkFailure(String),
}

/// Fetcher returning a fixed response.
#[derive(Debug)]
pub struct MockFetcher {
    response: MockResponse,
    calls: RefCell<Vec<String>>,
}

impl MockFetcher {
    fn new(response: MockResponse) -> Self {
        Self {
            response,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Answer every request with 200 and `body`.
    pub fn with_body(body: impl Into<String>) -> Self {
        Self::new(MockResponse::Body(body.into()))
    }

    /// Answer every request with `status`.
    pub fn with_status(status: u16) -> Self {
        Self::new(MockResponse::Status(status))
    }

    /// Fail every request at the transport level.
    pub fn with_network_error(message: impl Into<String>) -> Self {
        Self::new(MockResponse::NetworkFailure(message.into()))
    }

    /// URLs requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Number of requests made.
    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl PageFetcher for MockFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        self.calls.borrow_mut().push(url.to_string());

        match &self.response {
            MockResponse::Body(body) => Ok(body.clone()),
            MockResponse::Status(200) => Ok(String::new()),
            MockResponse::Status(status) => Err(WatchError::HttpStatusError {
                url: url.to_string(),
                status: *status,
            }),
            MockResponse::NetworkFailure(message) => Err(WatchError::NetworkError {
                url: url.to_string(),
                message: message.clone(),
            }),
        }
    }
}
