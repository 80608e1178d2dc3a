// src/config.rs
// =============================================================================
// Turns raw command-line flags into a validated crawl configuration.
//
// The user may type the domain as "example.com", "https://example.com" or
// "http://example.com/". From that we derive two things:
// - domain: the bare host used by the same-domain filter ("example.com")
// - root_url: the first page to fetch ("https://example.com")
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::cli::Cli;
use crate::crawl::{FailurePolicy, MaxDepth};
use crate::error::{CrawlError, Result};

const SCHEMES: [&str; 2] = ["https://", "http://"];

// Where the results go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Plain,
    Json,
    Sitemap(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlConfig {
    pub domain: String,
    pub root_url: String,
    pub max_depth: MaxDepth,
    pub output: Output,
    pub timeout: Duration,
    pub failure_policy: FailurePolicy,
}

impl CrawlConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let (domain, root_url) = resolve_domain(&cli.domain)?;

        let output = if !cli.outfile.trim().is_empty() {
            Output::Sitemap(PathBuf::from(cli.outfile.trim()))
        } else if cli.json {
            Output::Json
        } else {
            Output::Plain
        };

        let failure_policy = if cli.keep_going {
            FailurePolicy::Skip
        } else {
            FailurePolicy::Abort
        };

        Ok(CrawlConfig {
            domain,
            root_url,
            max_depth: MaxDepth::from_flag(cli.depth),
            output,
            timeout: Duration::from_secs(cli.timeout),
            failure_policy,
        })
    }
}

// Splits the --domain value into (bare domain, root URL)
//
// Examples:
//   "example.com"          -> ("example.com", "https://example.com")
//   "http://example.com/"  -> ("example.com", "http://example.com")
//   "https://example.com"  -> ("example.com", "https://example.com")
fn resolve_domain(raw: &str) -> Result<(String, String)> {
    let trimmed = raw.trim();

    let (scheme, rest) = SCHEMES
        .iter()
        .find_map(|scheme| trimmed.strip_prefix(scheme).map(|rest| (*scheme, rest)))
        .unwrap_or((SCHEMES[0], trimmed));
    let domain = rest.trim_end_matches('/');

    if domain.is_empty() {
        return Err(CrawlError::InvalidDomain(raw.to_string()));
    }

    let root_url = format!("{}{}", scheme, domain);

    // Reject anything that isn't a URL with a host, like "exa mple.com"
    let parsed = Url::parse(&root_url).map_err(|_| CrawlError::InvalidDomain(raw.to_string()))?;
    if parsed.host_str().is_none() {
        return Err(CrawlError::InvalidDomain(raw.to_string()));
    }

    Ok((domain.to_string(), root_url))
}
