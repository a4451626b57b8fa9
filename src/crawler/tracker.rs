//! Pending-work tracking for quiescence detection
//!
//! The hard part of terminating this crawl is knowing when a dynamically
//! growing unit of work has fully drained: the frontier grows while it is
//! being traversed, so an empty queue alone proves nothing. The tracker
//! counts every enqueued candidate and every terminal disposition; the crawl
//! is complete exactly when the count returns to zero.

use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Notify;

/// Counts in-flight crawl work and wakes a waiter when it drains
///
/// Invariant: `pending == candidates enqueued - candidates resolved`, where
/// a candidate is resolved once it has been rejected (out-of-scope,
/// duplicate, unresolvable), skipped (non-HTML), or reported as a [`Page`].
/// `add` and `done` must be paired exactly once per candidate.
///
/// [`Page`]: crate::page::Page
#[derive(Debug, Default)]
pub struct WorkTracker {
    pending: AtomicUsize,
    idle: Notify,
}

impl WorkTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one newly enqueued candidate
    pub fn add(&self) {
        self.pending.fetch_add(1, Ordering::SeqCst);
    }

    /// Records one terminal disposition, waking waiters on the last one
    pub fn done(&self) {
        let previous = self.pending.fetch_sub(1, Ordering::SeqCst);
        debug_assert!(previous > 0, "done() called with no pending work");
        if previous == 1 {
            self.idle.notify_waiters();
        }
    }

    /// Blocks until the pending count is zero
    ///
    /// The caller must ensure at least one `add` has happened before waiting,
    /// otherwise this returns immediately on a crawl that has not started.
    pub async fn wait_idle(&self) {
        loop {
            // Register before checking so a concurrent done() cannot slip
            // between the load and the await.
            let notified = self.idle.notified();
            if self.pending.load(Ordering::SeqCst) == 0 {
                return;
            }
            notified.await;
        }
    }

    /// Current number of unresolved candidates
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }
}
