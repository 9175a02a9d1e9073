// src/fetch/html.rs
// =============================================================================
// This module extracts outbound links from a loaded HTML page.
//
// It mimics what a browser reports as `a.href`:
// - every <a> element with an href attribute
// - resolved against the page URL (after redirects)
// - fragments are kept, "/page#top" and "/page" are different links
//
// We use the `scraper` crate for the DOM and `url` for resolving.
// =============================================================================

use scraper::{Html, Selector};
use url::Url;

// Extracts all links from HTML content
//
// Parameters:
//   html: the HTML content to parse
//   page_url: the URL the page was actually served from
//
// Returns: link strings in document order. Duplicates are kept; the crawl
// engine's visited set takes care of them.
//
// Example:
//   html = "<a href='/docs'>Docs</a>"
//   page_url = "https://example.com/"
//   result = ["https://example.com/docs"]
pub fn extract_links(html: &str, page_url: &Url) -> Vec<String> {
    let document = Html::parse_document(html);

    // The selector is a constant and known to be valid
    let selector = Selector::parse("a[href]").unwrap();

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve_href(page_url, href))
        .collect()
}

// Resolves one href the way a browser would
//
// Returns:
//   None            - empty href
//   Some(absolute)  - the resolved URL, whatever its scheme; mailto:, tel: and
//                     friends are kept, the fetcher reports them as broken
//   Some(raw href)  - the href could not be resolved at all; the crawl engine
//                     will report it as invalid and skip it
fn resolve_href(page_url: &Url, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    match page_url.join(href) {
        Ok(url) => Some(url.to_string()),
        Err(_) => Some(href.to_string()),
    }
}
