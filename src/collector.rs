use crate::results::Link;
use scraper::{Html, Selector};
use url::Url;

/// Collects harvestable links from a rendered page, in document order.
///
/// Relative hrefs are resolved against `base` before filtering. An anchor
/// contributes a link only when its resolved URL passes
/// [`is_harvest_target`] and its trimmed visible text is non-empty.
pub fn collect_links(doc: &Html, base: &Url, origin_prefix: &str) -> Vec<Link> {
    let anchor_selector = Selector::parse("a").unwrap();
    let mut links = Vec::new();

    for anchor in doc.select(&anchor_selector) {
        let href = match anchor.value().attr("href") {
            Some(href) if !href.is_empty() => href,
            _ => continue,
        };

        // anchor.href in a browser is already absolute; here we resolve it
        let resolved = match base.join(href) {
            Ok(resolved) => resolved,
            Err(_) => continue,
        };

        let url = resolved.to_string();
        if !is_harvest_target(&url, origin_prefix) {
            continue;
        }

        let title = anchor.text().collect::<String>().trim().to_string();
        if title.is_empty() {
            continue;
        }

        links.push(Link::new(url, title));
    }

    ::log::debug!("Collector found {} links", links.len());
    if !links.is_empty() {
        ::log::debug!(
            "First few links: {:?}",
            links.iter().take(5).map(|l| &l.url).collect::<Vec<_>>()
        );
    }

    links
}

/// Filter predicate for a resolved URL string.
///
/// The origin check is an exact string-prefix match, not a parsed-origin
/// comparison. Fragments and query strings are rejected wholesale, so
/// in-page anchors and parameterized URLs never enter the crawl.
pub fn is_harvest_target(url: &str, origin_prefix: &str) -> bool {
    url.starts_with(origin_prefix) && !url.contains('#') && !url.contains('?')
}
