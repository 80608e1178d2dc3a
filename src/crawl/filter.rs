// src/crawl/filter.rs
// =============================================================================
// This module keeps the crawler on the target domain.
//
// Two steps, always in this order:
// 1. Filter: drop every link that does not point at the target domain
//    (other sites, mailto:, javascript:, #fragments, empty hrefs)
// 2. Normalize: rewrite root-relative links ("/docs") into absolute
//    https URLs ("https://example.com/docs")
//
// Both are plain functions on strings. Page-relative links like "../other"
// are dropped, not resolved: only root-relative and absolute same-domain
// links are followed.
// =============================================================================

use super::link::Link;

const SCHEMES: [&str; 2] = ["https://", "http://"];

// Returns true if href points at `domain`
//
// Examples (domain = "example.com"):
//   "/a"                    -> true  (root-relative)
//   "https://example.com/a" -> true
//   "http://example.com/a"  -> true
//   "//example.com/a"       -> true  (protocol-relative, same host)
//   "http://other.com/a"    -> false
//   "mailto:x@y.com"        -> false
//   "" or "   "             -> false
pub fn is_same_domain(href: &str, domain: &str) -> bool {
    let href = href.trim();

    // "//host/..." also starts with '/', but it names a host, not a path
    if let Some(rest) = href.strip_prefix("//") {
        return has_host_prefix(rest, domain);
    }

    href.starts_with('/')
        || SCHEMES.iter().any(|scheme| {
            href.strip_prefix(scheme)
                .is_some_and(|rest| has_host_prefix(rest, domain))
        })
}

// "example.com/..." but not "example.com.evil.org/..."
fn has_host_prefix(rest: &str, domain: &str) -> bool {
    rest.strip_prefix(domain)
        .is_some_and(|path| path.starts_with('/'))
}

// Rewrites a same-domain link into its absolute https form
//
// Only call this on links that passed is_same_domain().
pub fn normalize(link: &Link, domain: &str) -> Link {
    let href = link.href.trim();

    let href = if let Some(rest) = href.strip_prefix("//") {
        format!("{}{}", SCHEMES[0], rest)
    } else if href.starts_with('/') {
        format!("{}{}{}", SCHEMES[0], domain, href)
    } else {
        href.to_string()
    };

    Link::new(href, link.text.clone())
}

// Filters then normalizes a batch of raw links
//
// The result is unsorted and may still contain duplicate hrefs.
pub fn filter_and_normalize(links: &[Link], domain: &str) -> Vec<Link> {
    links
        .iter()
        .filter(|link| is_same_domain(&link.href, domain))
        .map(|link| normalize(link, domain))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOMAIN: &str = "example.com";

    #[test]
    fn test_filter_reference_cases() {
        assert!(is_same_domain("/a", DOMAIN));
        assert!(is_same_domain("http://example.com/a", DOMAIN));
        assert!(is_same_domain("https://example.com/a", DOMAIN));
        assert!(!is_same_domain("http://other.com/a", DOMAIN));
        assert!(!is_same_domain("mailto:x@y.com", DOMAIN));
        assert!(!is_same_domain("", DOMAIN));
        assert!(!is_same_domain("   ", DOMAIN));
    }

    #[test]
    fn test_filter_rejects_lookalike_hosts() {
        assert!(!is_same_domain("https://example.com.evil.org/a", DOMAIN));
        assert!(!is_same_domain("https://example.company/a", DOMAIN));
        // No path after the host: not matched, same as the root URL itself
        assert!(!is_same_domain("https://example.com", DOMAIN));
    }

    #[test]
    fn test_filter_skips_fragments_and_scripts() {
        assert!(!is_same_domain("#section", DOMAIN));
        assert!(!is_same_domain("javascript:void(0)", DOMAIN));
        assert!(!is_same_domain("docs/page", DOMAIN));
    }

    #[test]
    fn test_protocol_relative_links() {
        assert!(is_same_domain("//example.com/a", DOMAIN));
        assert!(!is_same_domain("//cdn.other.com/lib.js", DOMAIN));
        assert!(filter_and_normalize(&[Link::new("//other.com/x", "")], DOMAIN).is_empty());
        let link = normalize(&Link::new("//example.com/a", ""), DOMAIN);
        assert_eq!(link.href, "https://example.com/a");
    }

    #[test]
    fn test_normalize_root_relative_prefers_https() {
        let link = normalize(&Link::new("/a", "A"), DOMAIN);
        assert_eq!(link, Link::new("https://example.com/a", "A"));
    }

    #[test]
    fn test_normalize_keeps_absolute_links() {
        let link = normalize(&Link::new("http://example.com/a", "A"), DOMAIN);
        assert_eq!(link.href, "http://example.com/a");
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        let link = normalize(&Link::new("  /a \n", ""), DOMAIN);
        assert_eq!(link.href, "https://example.com/a");
    }

    #[test]
    fn test_filter_and_normalize_keeps_duplicates() {
        let links = vec![
            Link::new("/a", "one"),
            Link::new("https://example.com/a", "two"),
            Link::new("http://other.com/x", "other"),
            Link::new("mailto:x@y.com", "mail"),
        ];
        let result = filter_and_normalize(&links, DOMAIN);
        assert_eq!(
            result,
            vec![
                Link::new("https://example.com/a", "one"),
                Link::new("https://example.com/a", "two"),
            ]
        );
    }
}
