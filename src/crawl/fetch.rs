// src/crawl/fetch.rs
// =============================================================================
// This module downloads pages.
//
// The crawler only needs one thing from the network: "give me the bytes at
// this URL, or tell me why you can't". That contract is the PageFetcher
// trait. The real implementation (HttpFetcher) uses reqwest; tests plug in
// an in-memory map instead so a crawl never touches the network.
//
// Rust concepts:
// - Traits: An interface that several types can implement
// - impl Future in traits: lets the trait method be async
// =============================================================================

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::error::{CrawlError, Result};

/// Sent with every request
pub const USER_AGENT: &str = concat!("site-mapper/", env!("CARGO_PKG_VERSION"));

/// Per-request timeout used when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// Anything that can turn a URL into page bytes
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<u8>>>;
}

// Fetches pages over HTTP(S) with a single reused client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(CrawlError::Client)?;

        Ok(HttpFetcher { client })
    }
}

impl PageFetcher for HttpFetcher {
    // The whole body is read before returning, so the connection goes back
    // to the pool (or is closed) on every path
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let fetch_err = |source| CrawlError::Fetch {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(fetch_err)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CrawlError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await.map_err(fetch_err)?;
        debug!(url, bytes = body.len(), "fetched page");

        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/html")
                    .set_body_bytes(b"<a href=\"/a\">A</a>".as_slice()),
            )
            .mount(&mock_server)
            .await;

        let fetcher = HttpFetcher::new(DEFAULT_TIMEOUT).unwrap();
        let body = fetcher
            .fetch(&format!("{}/page", mock_server.uri()))
            .await
            .unwrap();

        assert_eq!(body, b"<a href=\"/a\">A</a>");
    }

    #[tokio::test]
    async fn test_fetch_not_found_is_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let fetcher = HttpFetcher::new(DEFAULT_TIMEOUT).unwrap();
        let err = fetcher
            .fetch(&format!("{}/missing", mock_server.uri()))
            .await
            .unwrap_err();

        match err {
            CrawlError::Status { status, .. } => assert_eq!(status.as_u16(), 404),
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_unreachable_host_is_error() {
        // Port 9 (discard) on localhost is not served by anything in tests
        let fetcher = HttpFetcher::new(Duration::from_secs(2)).unwrap();
        let err = fetcher.fetch("http://127.0.0.1:9/").await.unwrap_err();

        assert!(matches!(err, CrawlError::Fetch { .. }));
    }
}
