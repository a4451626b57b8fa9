//! Crawler module for concurrent page fetching and crawl coordination
//!
//! This module contains the core crawling machinery:
//! - HTTP fetching and response classification
//! - HTML link extraction
//! - The frontier dispatch loop with its visited set
//! - Pending-work tracking for quiescence detection
//! - Overall crawl coordination and result aggregation

mod coordinator;
mod fetcher;
mod frontier;
mod parser;
mod tracker;

pub use coordinator::{crawl, Crawler};
pub use fetcher::{build_http_client, fetch_page, FetchOutcome};
pub use parser::extract_links;
pub use tracker::WorkTracker;
