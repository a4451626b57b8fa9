//! HTTP fetcher implementation
//!
//! One GET per URL, no retries. The fetcher classifies each attempt into a
//! [`FetchOutcome`]: a [`Page`] (with links on success, with an error on a
//! transport or HTTP failure) or a skip when the resource is not HTML.

use crate::crawler::parser::extract_links;
use crate::page::{Page, PageError};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Result of a single fetch attempt
#[derive(Debug)]
pub enum FetchOutcome {
    /// The fetch concluded with a reportable page (success or error)
    Page(Page),

    /// A 2xx response whose content is not HTML; counted but never reported
    Skipped {
        /// The URL that was fetched
        url: Url,
        /// The Content-Type the server declared
        content_type: String,
    },
}

/// Builds the HTTP client shared by all fetch tasks
///
/// The client identifies itself with the crate name and version, applies a
/// 30s request and 10s connect timeout, and transparently decompresses
/// gzip and brotli bodies. Redirects follow reqwest's default policy.
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches one URL and classifies the outcome
///
/// Three terminal shapes:
/// - transport failure (DNS, connect, timeout) → `Page` with a transport error
/// - non-2xx status → `Page` with an error carrying the status line
/// - 2xx non-HTML → `Skipped`
/// - 2xx HTML → `Page` with the document's anchor hrefs
///
/// A body that cannot be read after a 2xx HTML response (a mid-stream
/// transport failure or a broken content encoding) is reported as a
/// page-level error rather than failing the crawl. html5ever itself never
/// rejects markup, so this is the only post-status failure a page can carry.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `url` - The absolute, in-scope URL to fetch
///
/// # Returns
///
/// A [`FetchOutcome`] indicating a reportable page or a non-HTML skip
pub async fn fetch_page(client: &Client, url: Url) -> FetchOutcome {
    let response = match client.get(url.clone()).send().await {
        Ok(response) => response,
        Err(e) => {
            return FetchOutcome::Page(Page::failed(
                url.clone(),
                PageError::Transport {
                    url: url.to_string(),
                    message: e.to_string(),
                },
            ));
        }
    };

    let status = response.status();
    if !status.is_success() {
        let status_text = match status.canonical_reason() {
            Some(reason) => format!("{} {}", status.as_u16(), reason),
            None => status.as_u16().to_string(),
        };
        return FetchOutcome::Page(Page::failed(
            url.clone(),
            PageError::Http {
                url: url.to_string(),
                status: status_text,
            },
        ));
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_string();

    if !content_type.contains("text/html") {
        return FetchOutcome::Skipped { url, content_type };
    }

    match response.text().await {
        Ok(body) => {
            let links = extract_links(&body, &url);
            FetchOutcome::Page(Page::with_links(url, links))
        }
        Err(e) => FetchOutcome::Page(Page::failed(
            url.clone(),
            PageError::Body {
                url: url.to_string(),
                message: e.to_string(),
            },
        )),
    }
}
