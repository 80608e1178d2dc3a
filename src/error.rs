// src/error.rs
// =============================================================================
// Error types for the crawl pipeline.
//
// Every failure the crawler can hit has its own variant here:
// - Client: the HTTP client could not be set up
// - Fetch / Status: the page could not be downloaded
// - Parse: the downloaded bytes are not usable markup
// - Io / Xml / Json: the results could not be written
// - InvalidDomain: the --domain value does not form a usable root URL
//
// Library-style modules return CrawlError; main.rs wraps it with anyhow to
// add context and print the whole chain.
// =============================================================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrawlError {
    /// Network or transport failure while requesting a page
    #[error("failed to fetch {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("failed to fetch {url}: HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The page content could not be parsed as markup
    #[error("failed to parse page: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid domain '{0}'")]
    InvalidDomain(String),
}

impl CrawlError {
    // Prefixes a parse failure with the page it came from
    pub fn at_page(self, url: &str) -> Self {
        match self {
            CrawlError::Parse(message) => CrawlError::Parse(format!("{}: {}", url, message)),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, CrawlError>;
