//! The unit of crawl output
//!
//! A [`Page`] is created once by the fetcher when a fetch attempt concludes,
//! is immutable from then on, and is consumed exactly once by the result
//! aggregator. Resources that turn out not to be HTML never become a `Page`
//! at all.

use std::fmt;
use thiserror::Error;
use url::Url;

/// A crawled page: where it lives, what it links to, and whether it failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Absolute URL identifying the page
    pub location: Url,

    /// Outbound link hrefs exactly as they appeared in the markup (trimmed
    /// but not resolved or filtered), in document order
    pub links: Vec<String>,

    /// Set when the fetch or body read failed; an errored page carries no
    /// useful links
    pub error: Option<PageError>,
}

impl Page {
    /// Creates a successfully fetched page with its extracted links
    pub fn with_links(location: Url, links: Vec<String>) -> Self {
        Self {
            location,
            links,
            error: None,
        }
    }

    /// Creates a page whose fetch failed
    pub fn failed(location: Url, error: PageError) -> Self {
        Self {
            location,
            links: Vec::new(),
            error: Some(error),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            Some(error) => write!(f, "Page{{location: {}, error: {}}}", self.location, error),
            None => write!(
                f,
                "Page{{location: {}, links: [{}]}}",
                self.location,
                self.links.join(", ")
            ),
        }
    }
}

/// Page-level failure taxonomy
///
/// Every variant is terminal for its URL within one crawl run; there are no
/// retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    /// Connection, DNS, or timeout failure before any response arrived
    #[error("request to '{url}' failed: {message}")]
    Transport { url: String, message: String },

    /// The server answered with a non-2xx status
    #[error("non-successful response from '{url}', status: '{status}'")]
    Http { url: String, status: String },

    /// A 2xx HTML response whose body could not be read or decoded
    #[error("failed to read body of '{url}': {message}")]
    Body { url: String, message: String },
}
