//! Sitegraph main entry point
//!
//! Command-line driver: crawls a domain from one seed URL, prints every
//! discovered page with its outbound links, and finishes with a throughput
//! summary.

use anyhow::Context;
use clap::Parser;
use sitegraph::{Crawler, Page};
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Sitegraph: map every reachable page within a single web domain
#[derive(Parser, Debug)]
#[command(name = "sitegraph")]
#[command(version)]
#[command(about = "Map every reachable page within a single web domain", long_about = None)]
struct Cli {
    /// Seed URL, e.g. https://example.com/
    #[arg(value_name = "URL")]
    url: String,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let root = Url::parse(&cli.url)
        .with_context(|| format!("invalid seed URL: {}", cli.url))?;

    let started = Instant::now();
    let mut results = Crawler::new(root)?.crawl();

    let mut pages_crawled: u64 = 0;
    let mut error_count: u64 = 0;
    while let Some(page) = results.recv().await {
        print_page(&page);
        if page.error.is_some() {
            error_count += 1;
        }
        pages_crawled += 1;
    }

    let elapsed = started.elapsed();
    let rate = pages_crawled as f64 / elapsed.as_secs_f64();
    println!(
        "Crawled {} pages in {:?} ({:.2} pages/sec) with {} errors",
        pages_crawled, elapsed, rate, error_count
    );

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitegraph=warn"),
            1 => EnvFilter::new("sitegraph=info"),
            2 => EnvFilter::new("sitegraph=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn print_page(page: &Page) {
    println!("URL:\t{}", page.location);

    if let Some(error) = &page.error {
        println!("Error: {error}");
        return;
    }

    println!("Links:");
    for link in &page.links {
        println!("\t{link}");
    }

    println!();
}
