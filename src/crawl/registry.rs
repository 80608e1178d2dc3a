// src/crawl/registry.rs
// =============================================================================
// The visited registry: every link the crawl has accepted, keyed by href.
//
// A link is claimed at most once. Being in the registry is the only
// "already processed" signal the crawler has, which is also what stops it
// from looping forever on pages that link to each other.
//
// Rust concepts:
// - BTreeMap: a map that keeps its keys sorted, so output comes out in
//   href order without an extra sort
// =============================================================================

use std::collections::BTreeMap;

use super::link::Link;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VisitedRegistry {
    links: BTreeMap<String, Link>,
}

impl VisitedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // Records the link if its href is new
    //
    // Returns true when the link was inserted, false when the href was
    // already claimed (the stored link is left untouched).
    pub fn claim(&mut self, link: Link) -> bool {
        if self.links.contains_key(&link.href) {
            return false;
        }
        self.links.insert(link.href.clone(), link);
        true
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Hrefs in ascending order
    pub fn hrefs(&self) -> impl Iterator<Item = &str> {
        self.links.keys().map(String::as_str)
    }

    /// Links in ascending href order
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.links.values()
    }
}
