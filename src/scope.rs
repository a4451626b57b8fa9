//! URL resolution and host scoping
//!
//! Candidates pulled off the frontier are raw href strings. [`resolve`]
//! turns them into absolute URLs against the crawl root, and [`in_scope`]
//! decides whether a resolved URL belongs to the crawl's domain.
//!
//! Scoping compares hostnames only: scheme and port are deliberately ignored,
//! and no path normalization is performed, so `/a` and `/a/` are distinct
//! URLs that will be tracked and fetched separately. Both behaviors are
//! documented policy, not bugs.

use url::Url;

/// Resolves a possibly-relative candidate against the crawl root
///
/// A bare path, a path with query, a fragment-only reference, and a full
/// URL all resolve per the standard relative-reference rules.
///
/// # Arguments
///
/// * `base` - The crawl root to resolve against
/// * `candidate` - The raw href string, already trimmed
///
/// # Returns
///
/// * `Some(Url)` - The absolute URL
/// * `None` - The candidate is not resolvable against `base`
///
/// # Examples
///
/// ```
/// use sitegraph::scope::resolve;
/// use url::Url;
///
/// let root = Url::parse("https://example.com/").unwrap();
/// let resolved = resolve(&root, "/about?tab=1").unwrap();
/// assert_eq!(resolved.as_str(), "https://example.com/about?tab=1");
/// ```
pub fn resolve(base: &Url, candidate: &str) -> Option<Url> {
    base.join(candidate).ok()
}

/// Decides whether a resolved URL belongs to the crawl's domain
///
/// Pure predicate: scheme and port play no part in the comparison, so
/// re-evaluating it for the same pair of URLs always gives the same answer.
///
/// # Arguments
///
/// * `base` - The crawl root whose hostname defines the scope
/// * `url` - The resolved absolute URL to test
///
/// # Returns
///
/// `true` when `url` has the same hostname as `base`
pub fn in_scope(base: &Url, url: &Url) -> bool {
    base.host_str() == url.host_str()
}
