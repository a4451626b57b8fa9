//! Crawl coordination: wiring, aggregation, and shutdown
//!
//! The coordinator starts the dispatch and aggregation loops as independent
//! tasks, seeds the frontier with the crawl root, and arms a waiter that
//! closes everything down once the pending-work tracker reports quiescence.
//! The caller gets the result stream back immediately and drains it until
//! it closes, which happens exactly once.

use crate::crawler::fetcher::{build_http_client, FetchOutcome};
use crate::crawler::frontier::{dispatch_loop, Frontier};
use crate::crawler::tracker::WorkTracker;
use crate::page::Page;
use crate::CrawlError;
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use url::Url;

/// A configured single-domain crawler
pub struct Crawler {
    root: Url,
    client: Client,
}

impl Crawler {
    /// Creates a crawler for the given domain root
    ///
    /// The root's hostname defines the crawl scope; a URL without a host
    /// (e.g. `file:` or `data:`) is rejected up front since no scope
    /// comparison would ever succeed.
    ///
    /// # Arguments
    ///
    /// * `root` - The absolute URL the crawl is seeded with
    ///
    /// # Returns
    ///
    /// * `Ok(Crawler)` - Ready to start
    /// * `Err(CrawlError)` - The seed has no host or the client failed to build
    pub fn new(root: Url) -> crate::Result<Self> {
        if root.host_str().is_none() {
            return Err(CrawlError::MissingHost {
                url: root.to_string(),
            });
        }
        let client = build_http_client()?;
        Ok(Self { root, client })
    }

    /// Starts the crawl and returns the stream of crawled pages
    ///
    /// The crawl proceeds asynchronously on spawned tasks; the caller
    /// drains the returned receiver until it closes. Must be called from
    /// within a Tokio runtime.
    ///
    /// # Returns
    ///
    /// The result stream. Pages arrive in fetch-completion order
    /// (nondeterministic under concurrency) and the stream closes exactly
    /// once, when every discovered URL has reached a terminal disposition.
    pub fn crawl(self) -> mpsc::UnboundedReceiver<Page> {
        let tracker = Arc::new(WorkTracker::new());
        let (candidate_tx, candidate_rx) = mpsc::unbounded_channel();
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        let (result_tx, result_rx) = mpsc::unbounded_channel();
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let frontier = Frontier::new(candidate_tx, tracker.clone());

        tokio::spawn(dispatch_loop(
            candidate_rx,
            shutdown_rx,
            self.root.clone(),
            self.client.clone(),
            outcome_tx,
            tracker.clone(),
        ));
        tokio::spawn(aggregate_loop(
            outcome_rx,
            frontier.clone(),
            result_tx,
            tracker.clone(),
        ));

        // Seed before arming the waiter so the pending count is nonzero
        // when the waiter first looks at it.
        tracing::info!(root = %self.root, "starting crawl");
        frontier.enqueue(self.root.as_str());
        drop(frontier);

        tokio::spawn(async move {
            tracker.wait_idle().await;
            tracing::info!("crawl reached quiescence, closing result stream");
            let _ = shutdown_tx.send(true);
        });

        result_rx
    }
}

/// Consumes fetch outcomes, feeding discovered links back to the frontier
///
/// For every reported page: enqueue each of its links, forward the page to
/// the consumer, then resolve the page's own pending slot. Skips resolve
/// their slot without producing output. The decrement always comes last so
/// quiescence cannot fire while this outcome's consequences are unrecorded.
async fn aggregate_loop(
    mut outcomes: mpsc::UnboundedReceiver<FetchOutcome>,
    frontier: Frontier,
    results: mpsc::UnboundedSender<Page>,
    tracker: Arc<WorkTracker>,
) {
    while let Some(outcome) = outcomes.recv().await {
        match outcome {
            FetchOutcome::Skipped { url, content_type } => {
                tracing::debug!(%url, content_type, "skipping non-HTML resource");
            }
            FetchOutcome::Page(page) => {
                for link in &page.links {
                    frontier.enqueue(link.clone());
                }
                let _ = results.send(page);
            }
        }
        tracker.done();
    }

    tracing::debug!("aggregation loop finished");
}

/// Convenience entry point: builds a [`Crawler`] and starts it
///
/// # Example
///
/// ```no_run
/// use sitegraph::crawler::crawl;
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let root = Url::parse("https://example.com/")?;
/// let mut pages = crawl(root)?;
/// while let Some(page) = pages.recv().await {
///     println!("{page}");
/// }
/// # Ok(())
/// # }
/// ```
pub fn crawl(root: Url) -> crate::Result<mpsc::UnboundedReceiver<Page>> {
    Ok(Crawler::new(root)?.crawl())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_seed_without_host() {
        let root = Url::parse("data:text/plain,hello").unwrap();
        assert!(matches!(
            Crawler::new(root),
            Err(CrawlError::MissingHost { .. })
        ));
    }

    #[tokio::test]
    async fn test_unreachable_seed_yields_one_error_page() {
        let root = Url::parse("http://127.0.0.1:1/").unwrap();
        let mut results = Crawler::new(root.clone()).unwrap().crawl();

        let page = results.recv().await.expect("one page expected");
        assert_eq!(page.location, root);
        assert!(page.error.is_some());

        // Stream must close after the only candidate resolves.
        assert!(results.recv().await.is_none());
    }
}
