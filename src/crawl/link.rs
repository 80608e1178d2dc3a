// src/crawl/link.rs
// =============================================================================
// The Link type: one anchor found on a page.
//
// A Link is just the href (where it points) and the anchor text (what the
// user clicks on). Links are never changed in place: normalizing a link
// builds a new one.
// =============================================================================

use serde::{Deserialize, Serialize};

/// Anchor text given to the link the crawl starts from
pub const ROOT_LINK_TEXT: &str = "Root link";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    /// Absolute URL, or root-relative path straight out of the markup
    pub href: String,
    /// Anchor text, may be empty
    pub text: String,
}

impl Link {
    pub fn new(href: impl Into<String>, text: impl Into<String>) -> Self {
        Link {
            href: href.into(),
            text: text.into(),
        }
    }

    // The first link fed into the crawl
    pub fn root(url: impl Into<String>) -> Self {
        Link::new(url, ROOT_LINK_TEXT)
    }
}
