// src/crawl/mod.rs
// =============================================================================
// This module handles crawling a single domain.
//
// Submodules, leaves first:
// - link: the Link type (href + anchor text)
// - fetch: downloads page bytes (PageFetcher trait, HttpFetcher)
// - extract: finds every <a href> in a page
// - filter: keeps same-domain links and makes them absolute
// - dedupe: sorts links and drops repeated hrefs
// - registry: the set of every link accepted into the crawl
// - engine: the breadth-first crawl loop that ties it all together
// =============================================================================

mod dedupe;
mod engine;
mod extract;
mod fetch;
mod filter;
mod link;
mod registry;

// Re-export what main.rs and output.rs need
pub use engine::{Crawler, FailurePolicy, MaxDepth};
pub use fetch::{HttpFetcher, DEFAULT_TIMEOUT};
pub use link::Link;
pub use registry::VisitedRegistry;
