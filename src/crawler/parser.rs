//! HTML link extraction
//!
//! The crawler only cares about one thing in a document: the `href` of every
//! anchor element, in document order. Hrefs are kept verbatim (after
//! trimming surrounding whitespace) so the emitted [`Page`] shows links
//! exactly as the markup wrote them; resolution against the crawl root
//! happens later, in the dispatcher.
//!
//! [`Page`]: crate::page::Page

use scraper::{Html, Selector};
use url::Url;

/// Extracts every anchor href from an HTML document
///
/// An anchor with a missing, empty, or unresolvable `href` contributes no
/// link but never fails the page. Malformed markup is parsed best-effort by
/// html5ever, so a broken subtree costs at most the links inside it.
///
/// `base` is used only to check that each href is resolvable; the returned
/// strings are the trimmed hrefs as written.
pub fn extract_links(html: &str, base: &Url) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();

    if let Ok(anchor_selector) = Selector::parse("a") {
        for element in document.select(&anchor_selector) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };

            let href = href.trim();
            if href.is_empty() {
                continue;
            }

            if base.join(href).is_err() {
                tracing::debug!(href, "dropping unparsable link");
                continue;
            }

            links.push(href.to_string());
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> Url {
        Url::parse("https://example.com/page").unwrap()
    }

    #[test]
    fn test_extract_absolute_link() {
        let html = r#"<html><body><a href="https://other.com/page">Link</a></body></html>"#;
        let links = extract_links(html, &base_url());
        assert_eq!(links, vec!["https://other.com/page"]);
    }

    #[test]
    fn test_extract_relative_link_kept_verbatim() {
        let html = r#"<html><body><a href="/other">Link</a></body></html>"#;
        let links = extract_links(html, &base_url());
        assert_eq!(links, vec!["/other"]);
    }

    #[test]
    fn test_href_is_trimmed() {
        let html = r#"<html><body><a href="  /somelink  ">Link</a></body></html>"#;
        let links = extract_links(html, &base_url());
        assert_eq!(links, vec!["/somelink"]);
    }

    #[test]
    fn test_missing_href_skipped() {
        let html = r#"<html><body><a target="_blank">Link</a></body></html>"#;
        let links = extract_links(html, &base_url());
        assert!(links.is_empty());
    }

    #[test]
    fn test_empty_href_skipped() {
        let html = r#"<html><body><a href="">Link</a><a href="   ">Link</a></body></html>"#;
        let links = extract_links(html, &base_url());
        assert!(links.is_empty());
    }

    #[test]
    fn test_unparsable_href_skipped() {
        let html = r#"<html><body><a href="http://[not-a-host">Link</a></body></html>"#;
        let links = extract_links(html, &base_url());
        assert!(links.is_empty());
    }

    #[test]
    fn test_document_order_preserved() {
        let html = r#"
            <html>
            <body>
                <a href="/first">1</a>
                <p><a href="/second">2</a></p>
                <a href="/third">3</a>
            </body>
            </html>
        "#;
        let links = extract_links(html, &base_url());
        assert_eq!(links, vec!["/first", "/second", "/third"]);
    }

    #[test]
    fn test_duplicate_hrefs_kept() {
        let html = r#"<html><body><a href="/same">A</a><a href="/same">B</a></body></html>"#;
        let links = extract_links(html, &base_url());
        assert_eq!(links, vec!["/same", "/same"]);
    }

    #[test]
    fn test_no_anchors() {
        let html = r#"<html><body><p>No links here</p></body></html>"#;
        let links = extract_links(html, &base_url());
        assert!(links.is_empty());
    }

    #[test]
    fn test_malformed_markup_is_best_effort() {
        let html = r#"<html><body><a href="/kept">Link<div></span></body>"#;
        let links = extract_links(html, &base_url());
        assert_eq!(links, vec!["/kept"]);
    }
}
