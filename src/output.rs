// src/output.rs
// =============================================================================
// This module prints or saves the crawl results.
//
// Three formats:
// - Plain: a count line, then every href in one bracketed list (stdout)
// - JSON: an array of {href, text} objects (stdout)
// - Sitemap: a sitemaps.org <urlset> document (file)
//
// All writers take the finished registry and never look at anything else.
// Everything comes out sorted by href because the registry is a BTreeMap.
//
// Rust concepts:
// - impl Write: the same function can write to stdout, a file or a Vec<u8>
// =============================================================================

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::crawl::{Link, VisitedRegistry};
use crate::error::Result;

pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

// Writes the plain listing
//
// Example:
//   Number of links : 2
//   [https://e.com https://e.com/a]
pub fn write_plain(registry: &VisitedRegistry, mut writer: impl Write) -> Result<()> {
    writeln!(writer, "Number of links : {}", registry.len())?;

    let hrefs: Vec<&str> = registry.hrefs().collect();
    writeln!(writer, "[{}]", hrefs.join(" "))?;

    writer.flush()?;
    Ok(())
}

// Writes the links (with their anchor text) as a pretty JSON array
pub fn write_json(registry: &VisitedRegistry, mut writer: impl Write) -> Result<()> {
    let links: Vec<&Link> = registry.links().collect();
    serde_json::to_writer_pretty(&mut writer, &links)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

// Writes the registry as a sitemap document
pub fn write_sitemap<W: Write>(registry: &VisitedRegistry, writer: W) -> Result<()> {
    let mut xml = Writer::new_with_indent(writer, b' ', 2);

    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    xml.write_event(Event::Start(
        BytesStart::new("urlset").with_attributes([("xmlns", SITEMAP_NAMESPACE)]),
    ))?;

    for href in registry.hrefs() {
        xml.write_event(Event::Start(BytesStart::new("url")))?;
        xml.write_event(Event::Start(BytesStart::new("loc")))?;
        // BytesText::new escapes &, < and > for us
        xml.write_event(Event::Text(BytesText::new(href)))?;
        xml.write_event(Event::End(BytesEnd::new("loc")))?;
        xml.write_event(Event::End(BytesEnd::new("url")))?;
    }

    xml.write_event(Event::End(BytesEnd::new("urlset")))?;

    let mut writer = xml.into_inner();
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

// Creates (or truncates) the file at path and writes the sitemap into it
pub fn save_sitemap(registry: &VisitedRegistry, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_sitemap(registry, BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(hrefs: &[&str]) -> VisitedRegistry {
        let mut registry = VisitedRegistry::new();
        for href in hrefs {
            registry.claim(Link::new(*href, "text"));
        }
        registry
    }

    #[test]
    fn test_plain_output_is_sorted() {
        let registry = registry(&["https://e.com/b", "https://e.com/a"]);
        let mut out = Vec::new();
        write_plain(&registry, &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert_eq!(
            out,
            "Number of links : 2\n[https://e.com/a https://e.com/b]\n"
        );
    }

    #[test]
    fn test_json_output() {
        let registry = registry(&["https://e.com/b", "https://e.com/a"]);
        let mut out = Vec::new();
        write_json(&registry, &mut out).unwrap();

        let parsed: Vec<Link> = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            parsed,
            vec![
                Link::new("https://e.com/a", "text"),
                Link::new("https://e.com/b", "text"),
            ]
        );
    }

    #[test]
    fn test_sitemap_output() {
        let registry = registry(&["https://e.com/b", "https://e.com"]);
        let mut out = Vec::new();
        write_sitemap(&registry, &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(out.contains(
            r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#
        ));
        assert!(out.trim_end().ends_with("</urlset>"));

        let root = out.find("<loc>https://e.com</loc>").unwrap();
        let page = out.find("<loc>https://e.com/b</loc>").unwrap();
        assert!(root < page);
        assert_eq!(out.matches("<url>").count(), 2);
    }

    #[test]
    fn test_sitemap_escapes_urls() {
        let registry = registry(&["https://e.com/search?a=1&b=2"]);
        let mut out = Vec::new();
        write_sitemap(&registry, &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("<loc>https://e.com/search?a=1&amp;b=2</loc>"));
    }

    #[test]
    fn test_save_sitemap_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitemap.xml");
        let registry = registry(&["https://e.com", "https://e.com/a"]);

        save_sitemap(&registry, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("<loc>https://e.com/a</loc>"));
    }

    #[test]
    fn test_save_sitemap_bad_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("sitemap.xml");

        assert!(save_sitemap(&registry(&["https://e.com"]), &path).is_err());
    }
}
