//! Sitegraph: a single-domain link graph crawler
//!
//! This crate crawls every reachable page within one web domain, starting
//! from a seed URL, and emits a stream of [`Page`] records describing each
//! page's outbound links and any fetch error it ran into.

pub mod crawler;
pub mod page;
pub mod scope;

use thiserror::Error;

/// Errors that prevent a crawl from starting
///
/// Per-page failures (connection errors, bad statuses) never surface here;
/// they are attached to the [`Page`] they belong to and the crawl carries on.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("seed URL has no host: {url}")]
    MissingHost { url: String },

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Result type alias for sitegraph operations
pub type Result<T> = std::result::Result<T, CrawlError>;

// Re-export commonly used types
pub use crawler::{crawl, Crawler};
pub use page::{Page, PageError};
