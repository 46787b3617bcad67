// src/fetch/html.rs
// =============================================================================
// This module extracts links and visible text from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// And the `url` crate to resolve relative links against the page URL.
// =============================================================================

use scraper::{Html, Selector};
use url::Url;

// Extracts every hyperlink target from HTML content, as absolute URLs
//
// Parameters:
//   html: the HTML content to parse
//   base_url: the URL of the page (for resolving relative links)
//
// Returns: absolute http/https URLs in document order. Duplicates are kept;
// the caller decides how to deduplicate.
//
// Example:
//   html = "<a href='/docs'>Docs</a>"
//   base_url = "https://example.com"
//   result = ["https://example.com/docs"]
pub fn extract_links(html: &str, base_url: &str) -> Vec<String> {
    let mut links = Vec::new();

    let base = match Url::parse(base_url) {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!(base_url, error = %e, "cannot resolve links against invalid base URL");
            return links;
        }
    };

    let document = Html::parse_document(html);

    // "a[href]" is a constant, known-valid selector
    let selector = Selector::parse("a[href]").unwrap();

    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            if let Some(absolute_url) = resolve_link(&base, href.trim()) {
                links.push(absolute_url);
            }
        }
    }

    links
}

// Returns the text of the page's <body>, with runs of whitespace collapsed
// to single spaces. Script and style contents are not text.
pub fn body_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let selector = Selector::parse("body").unwrap();

    let Some(body) = document.select(&selector).next() else {
        return String::new();
    };

    let mut raw = String::new();
    for node in body.descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node
            .parent()
            .and_then(|parent| parent.value().as_element())
            .map(|element| matches!(element.name(), "script" | "style" | "noscript"))
            .unwrap_or(false);
        if !hidden {
            raw.push_str(text);
        }
    }

    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

// Resolves a link (possibly relative) to an absolute http/https URL
//
// Skips in-page anchors and non-web schemes (mailto:, tel:, javascript:,
// data:, ...), since those can never be crawled.
fn resolve_link(base: &Url, href: &str) -> Option<String> {
    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let url = base.join(href).ok()?;
    match url.scheme() {
        "http" | "https" => Some(url.to_string()),
        _ => None,
    }
}
