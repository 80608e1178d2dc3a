// src/crawl/dedupe.rs
// =============================================================================
// Removes duplicate links from one page's worth of results.
//
// The output is sorted by href and every href appears once. When the same
// href shows up with different anchor texts, the first occurrence in the
// input wins: sort_by is stable, so equal hrefs keep their input order and
// dedup_by keeps the first of each run.
// =============================================================================

use super::link::Link;

pub fn dedupe(mut links: Vec<Link>) -> Vec<Link> {
    links.sort_by(|a, b| a.href.cmp(&b.href));
    links.dedup_by(|later, earlier| later.href == earlier.href);
    links
}
