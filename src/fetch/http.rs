//! HTTP page fetching.

use anyhow::Context;
use reqwest::blocking::Client;
use reqwest::StatusCode;

use super::PageFetcher;
use crate::error::{Result, WatchError};

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("release-watch/", env!("CARGO_PKG_VERSION"));

/// Fetches pages over HTTP/HTTPS.
///
/// Uses the client's default timeout and redirect policy; there are no
/// retries.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher with the default client settings.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| network_error(url, &e))?;

        let status = response.status();
        tracing::debug!("{} answered {}", url, status);

        if status != StatusCode::OK {
            return Err(WatchError::HttpStatusError {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|e| network_error(url, &e))?;
        tracing::debug!("Read {} bytes from {}", body.len(), url);

        Ok(body)
    }
}

/// Flatten a reqwest error and its sources into one message.
fn network_error(url: &str, err: &reqwest::Error) -> WatchError {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    WatchError::NetworkError {
        url: url.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn user_agent_includes_version() {
        assert!(USER_AGENT.starts_with("release-watch/"));
        assert!(USER_AGENT.ends_with(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn fetch_returns_body_on_200() {
        let server = MockServer::start();
        let html = "<html><body><h1>Leiaute - Release 3040</h1></body></html>";

        server.mock(|when, then| {
            when.method(GET).path("/scrdoc3040");
            then.status(200).body(html);
        });

        let fetcher = HttpFetcher::new().unwrap();
        let body = fetcher.fetch(&server.url("/scrdoc3040")).unwrap();

        assert_eq!(body, html);
    }

    #[test]
    fn fetch_sends_user_agent() {
        let server = MockServer::start();

        let mock = server.mock(|when, then| {
            when.method(GET).path("/page").header("user-agent", USER_AGENT);
            then.status(200).body("ok");
        });

        let fetcher = HttpFetcher::new().unwrap();
        fetcher.fetch(&server.url("/page")).unwrap();

        mock.assert();
    }

    #[test]
    fn fetch_returns_status_error_on_503() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(GET).path("/page");
            then.status(503).body("Service Unavailable");
        });

        let fetcher = HttpFetcher::new().unwrap();
        let result = fetcher.fetch(&server.url("/page"));

        assert!(matches!(
            result,
            Err(WatchError::HttpStatusError { status: 503, .. })
        ));
    }

    #[test]
    fn fetch_treats_other_success_codes_as_errors() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(GET).path("/page");
            then.status(204);
        });

        let fetcher = HttpFetcher::new().unwrap();
        let result = fetcher.fetch(&server.url("/page"));

        assert!(matches!(
            result,
            Err(WatchError::HttpStatusError { status: 204, .. })
        ));
    }

    #[test]
    fn fetch_follows_redirects() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(GET).path("/old");
            then.status(301).header("Location", server.url("/new"));
        });
        server.mock(|when, then| {
            when.method(GET).path("/new");
            then.status(200).body("Release 3040");
        });

        let fetcher = HttpFetcher::new().unwrap();
        let body = fetcher.fetch(&server.url("/old")).unwrap();

        assert_eq!(body, "Release 3040");
    }

    #[test]
    fn fetch_returns_network_error_when_unreachable() {
        // Port 1 is reserved and nothing listens on it.
        let fetcher = HttpFetcher::new().unwrap();
        let result = fetcher.fetch("http://127.0.0.1:1/page");

        match result {
            Err(WatchError::NetworkError { url, message }) => {
                assert_eq!(url, "http://127.0.0.1:1/page");
                assert!(!message.is_empty());
            }
            other => panic!("expected network error, got {:?}", other),
        }
    }
}
