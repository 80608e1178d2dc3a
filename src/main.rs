// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr, so stdout only carries results)
// 3. Crawl the domain
// 4. Print the links, or save them as an XML sitemap
// 5. Exit with proper code (0 = success, 1 = error)
//
// If the crawl fails nothing is printed or written: there are no partial
// results.
// =============================================================================

mod cli; // src/cli.rs - command-line parsing
mod config; // src/config.rs - turning flags into a crawl configuration
mod crawl; // src/crawl/ - the crawler itself
mod error; // src/error.rs - error types
mod output; // src/output.rs - plain, JSON and sitemap writers

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};

use cli::Cli;
use config::{CrawlConfig, Output};
use crawl::{Crawler, HttpFetcher};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

// Crawls according to the flags and emits the result
async fn run(cli: Cli) -> Result<()> {
    let config = CrawlConfig::from_cli(&cli)?;

    let fetcher = HttpFetcher::new(config.timeout)?;
    let crawler = Crawler::new(fetcher, config.domain.as_str())
        .with_max_depth(config.max_depth)
        .with_failure_policy(config.failure_policy);

    let registry = crawler
        .crawl(&config.root_url)
        .await
        .with_context(|| format!("crawl of {} failed", config.root_url))?;

    match &config.output {
        Output::Plain => output::write_plain(&registry, std::io::stdout().lock())?,
        Output::Json => output::write_json(&registry, std::io::stdout().lock())?,
        Output::Sitemap(path) => {
            output::save_sitemap(&registry, path)
                .with_context(|| format!("could not write sitemap to {}", path.display()))?;
            info!(path = %path.display(), links = registry.len(), "sitemap written");
        }
    }

    Ok(())
}

// -v = info, -vv (or more) = debug, default = warnings only
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
