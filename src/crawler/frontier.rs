//! Frontier dispatch: the single authority over which URLs have been seen
//!
//! Candidates arrive as raw href strings from many concurrent producers (the
//! seed and every aggregated page). The dispatch loop is the one logical
//! owner of the visited set: it resolves each candidate against the crawl
//! root, filters it for scope, deduplicates it, and spawns one fetch task
//! per first-seen in-scope URL. Because only this loop touches the set, no
//! lock is needed on it.

use crate::crawler::fetcher::{fetch_page, FetchOutcome};
use crate::crawler::tracker::WorkTracker;
use crate::scope;
use reqwest::Client;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use url::Url;

/// Handle for enqueueing candidate URLs onto the frontier
///
/// Safe to call from any task; every enqueue is counted by the tracker
/// before the candidate is sent, so the pending count never under-reports
/// in-flight work.
#[derive(Clone)]
pub struct Frontier {
    candidates: mpsc::UnboundedSender<String>,
    tracker: Arc<WorkTracker>,
}

impl Frontier {
    pub fn new(
        candidates: mpsc::UnboundedSender<String>,
        tracker: Arc<WorkTracker>,
    ) -> Self {
        Self {
            candidates,
            tracker,
        }
    }

    /// Adds one candidate href to the frontier
    pub fn enqueue(&self, candidate: impl Into<String>) {
        self.tracker.add();
        // A send failure means the dispatch loop is gone, which only happens
        // after quiescence; the candidate can be dropped.
        let _ = self.candidates.send(candidate.into());
    }
}

/// Drains the candidate queue, dispatching one fetch task per accepted URL
///
/// Rejected candidates (unresolvable, out-of-scope, already visited) are
/// resolved on the spot with a tracker decrement. Accepted candidates keep
/// the count elevated until their fetch outcome is aggregated.
pub(crate) async fn dispatch_loop(
    mut candidates: mpsc::UnboundedReceiver<String>,
    mut shutdown: watch::Receiver<bool>,
    root: Url,
    client: Client,
    outcomes: mpsc::UnboundedSender<FetchOutcome>,
    tracker: Arc<WorkTracker>,
) {
    let mut visited: HashSet<String> = HashSet::new();

    loop {
        let candidate = tokio::select! {
            _ = shutdown.changed() => break,
            received = candidates.recv() => match received {
                Some(candidate) => candidate,
                None => break,
            },
        };

        let resolved = match scope::resolve(&root, &candidate) {
            Some(url) => url,
            None => {
                tracing::debug!(%candidate, "dropping unresolvable candidate");
                tracker.done();
                continue;
            }
        };

        if !scope::in_scope(&root, &resolved) {
            tracing::debug!(url = %resolved, "dropping out-of-scope candidate");
            tracker.done();
            continue;
        }

        if !visited.insert(resolved.to_string()) {
            tracing::trace!(url = %resolved, "dropping already-visited candidate");
            tracker.done();
            continue;
        }

        tracing::debug!(url = %resolved, "dispatching fetch");
        let client = client.clone();
        let outcomes = outcomes.clone();
        tokio::spawn(async move {
            let outcome = fetch_page(&client, resolved).await;
            let _ = outcomes.send(outcome);
        });
    }

    tracing::debug!(visited = visited.len(), "dispatch loop finished");
}
