// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using a
// Rust struct and attributes (the #[...] things). There are no subcommands:
// site-mapper does one job, and the flags only tune it.
// =============================================================================

use clap::{ArgAction, Parser};

use crate::crawl::DEFAULT_TIMEOUT;

/// Domain crawled when --domain is not given
pub const DEFAULT_DOMAIN: &str = "www.calhoun.io";

#[derive(Parser, Debug)]
#[command(
    name = "site-mapper",
    version,
    about = "Crawl a single domain and list every page it links to",
    long_about = "site-mapper starts at the root page of a domain, follows every same-domain link \
                  up to an optional depth, and prints the sorted list of pages or writes it as an \
                  XML sitemap."
)]
pub struct Cli {
    /// Domain to crawl (e.g., example.com or https://example.com)
    ///
    /// https:// is added when no scheme is given
    #[arg(long, default_value = DEFAULT_DOMAIN)]
    pub domain: String,

    /// Write an XML sitemap to this file instead of printing to stdout
    #[arg(long, default_value = "")]
    pub outfile: String,

    /// Maximum number of links to follow from the root page (-1 = unlimited)
    ///
    /// Depth 0 = just the root page
    /// Depth 1 = root page + every page it links to
    #[arg(
        long,
        default_value_t = -1,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i64).range(-1..)
    )]
    pub depth: i64,

    /// Print the links (with anchor text) as JSON instead of the plain listing
    #[arg(long)]
    pub json: bool,

    /// Per-request timeout in seconds
    #[arg(
        long,
        default_value_t = DEFAULT_TIMEOUT.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Log and skip pages that fail to load instead of stopping the crawl
    #[arg(long)]
    pub keep_going: bool,

    /// More logging on stderr (-v = info, -vv = debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
