// src/crawl/extract.rs
// =============================================================================
// This module pulls the raw links out of a page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// Nothing is filtered here. Every <a href> on the page comes back in
// document order, including duplicates, mailto: links, fragments and links
// to other sites. Deciding what to keep is the job of filter.rs.
// =============================================================================

use scraper::{ElementRef, Html, Selector};

use super::link::Link;
use crate::error::{CrawlError, Result};

// Extracts every anchor (href, text) pair from raw page bytes
//
// Parameters:
//   body: the page content as downloaded
//
// Returns: the links in document order. Bytes that are not UTF-8 (images,
// PDFs, Latin-1 pages) are decoded lossily and usually yield no links.
//
// Example:
//   body = b"<a href='/docs'>Docs</a><a href='mailto:x@y.com'></a>"
//   result = [Link("/docs", "Docs"), Link("mailto:x@y.com", "")]
pub fn extract_links(body: &[u8]) -> Result<Vec<Link>> {
    let html = String::from_utf8_lossy(body);

    let selector = Selector::parse("a[href]")
        .map_err(|e| CrawlError::Parse(format!("bad selector: {}", e)))?;

    let document = Html::parse_document(&html);

    let links = document
        .select(&selector)
        .filter_map(|element| {
            element
                .value()
                .attr("href")
                .map(|href| Link::new(href, anchor_text(&element)))
        })
        .collect();

    Ok(links)
}

// Collapses the text of an element (and its children) into one line
fn anchor_text(element: &ElementRef) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does extract_links take &[u8] and not &str?
//    - reqwest hands us raw bytes, and a link can point at a PDF or an image
//    - String::from_utf8_lossy swaps invalid sequences for U+FFFD instead of
//      failing, and only copies when it has to (it returns a Cow<str>)
//
// 2. What is filter_map?
//    - map + filter in one step: return Some(x) to keep x, None to drop it
//    - Here it drops anchors whose href attribute is missing
// -----------------------------------------------------------------------------
