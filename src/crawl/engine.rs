// src/crawl/engine.rs
// =============================================================================
// This module walks the site, one depth level at a time.
//
// How it works:
// 1. The frontier starts as a single link: the root page (depth 0)
// 2. Each link in the frontier is claimed in the visited registry;
//    links that were already claimed are skipped
// 3. If the depth limit allows it, the page is fetched and its links are
//    extracted, filtered to the domain, normalized and deduplicated
// 4. Everything found on depth d pages becomes the frontier for depth d + 1
// 5. Stop when a frontier comes back empty
//
// Pages are fetched one at a time, in frontier order. Because every link is
// claimed at the shallowest depth it can be reached from, the final
// registry does not depend on the order links appear on a page.
//
// Rust concepts:
// - Generics: Crawler<F> works with any PageFetcher (HTTP or test map)
// - Builder methods: with_max_depth() etc. take and return self
// =============================================================================

use tracing::{debug, info, warn};

use super::dedupe::dedupe;
use super::extract::extract_links;
use super::fetch::PageFetcher;
use super::filter::filter_and_normalize;
use super::link::Link;
use super::registry::VisitedRegistry;
use crate::error::Result;

// How far from the root page the crawler may follow links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxDepth {
    Unlimited,
    /// Pages at this depth are recorded but not expanded
    Limited(usize),
}

impl MaxDepth {
    // Maps the --depth flag: any negative value means unlimited
    pub fn from_flag(depth: i64) -> Self {
        match usize::try_from(depth) {
            Ok(max) => MaxDepth::Limited(max),
            Err(_) => MaxDepth::Unlimited,
        }
    }

    // Whether a page found at `depth` may have its links followed
    pub fn allows(self, depth: usize) -> bool {
        match self {
            MaxDepth::Unlimited => true,
            MaxDepth::Limited(max) => depth < max,
        }
    }
}

// What to do when a page cannot be fetched or parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop the whole crawl and return the error
    #[default]
    Abort,
    /// Log a warning and carry on with the rest of the frontier
    Skip,
}

pub struct Crawler<F> {
    fetcher: F,
    domain: String,
    max_depth: MaxDepth,
    failure_policy: FailurePolicy,
}

impl<F: PageFetcher> Crawler<F> {
    pub fn new(fetcher: F, domain: impl Into<String>) -> Self {
        Crawler {
            fetcher,
            domain: domain.into(),
            max_depth: MaxDepth::Unlimited,
            failure_policy: FailurePolicy::default(),
        }
    }

    pub fn with_max_depth(mut self, max_depth: MaxDepth) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_failure_policy(mut self, failure_policy: FailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }

    // Crawls the domain starting from root_url
    //
    // Returns: the registry of every link accepted into the crawl, or the
    // first fetch/parse error when the policy is Abort
    pub async fn crawl(&self, root_url: &str) -> Result<VisitedRegistry> {
        info!(root = root_url, domain = %self.domain, max_depth = ?self.max_depth, "starting crawl");

        let mut registry = VisitedRegistry::new();
        let mut frontier = vec![Link::root(root_url)];
        let mut depth = 0;

        while !frontier.is_empty() {
            let mut next_frontier = Vec::new();

            for link in frontier {
                let href = link.href.clone();
                if !registry.claim(link) {
                    continue;
                }

                if !self.max_depth.allows(depth) {
                    continue;
                }

                match self.expand(&href, depth).await {
                    Ok(children) => next_frontier.extend(children),
                    Err(e) if self.failure_policy == FailurePolicy::Skip => {
                        warn!(url = %href, error = %e, "skipping page");
                    }
                    Err(e) => return Err(e),
                }
            }

            frontier = next_frontier;
            depth += 1;
        }

        info!(links = registry.len(), "crawl finished");
        Ok(registry)
    }

    // Fetches one page and returns its same-domain links, normalized and unique
    async fn expand(&self, url: &str, depth: usize) -> Result<Vec<Link>> {
        let body = self.fetcher.fetch(url).await?;
        let raw = extract_links(&body).map_err(|e| e.at_page(url))?;
        let links = dedupe(filter_and_normalize(&raw, &self.domain));

        debug!(url, depth, found = raw.len(), kept = links.len(), "expanded page");
        Ok(links)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a loop over frontiers instead of recursion?
//    - A recursive crawl puts one stack frame per link hop on the call stack
//    - Deep sites could overflow it
//    - A Vec per depth level keeps memory on the heap and makes depth
//      tracking a plain counter
//
// 2. Why claim before fetching?
//    - The registry answers "have we seen this URL?"
//    - Claiming first means a page that links to itself (or to a page that
//      links back) is never fetched twice
//
// 3. What does `Err(e) if ... =>` mean?
//    - A match guard: the arm only matches when the condition is true
//    - Otherwise matching falls through to the next arm (return the error)
// -----------------------------------------------------------------------------
