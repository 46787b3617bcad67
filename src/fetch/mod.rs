// src/fetch/mod.rs
// =============================================================================
// This module is the boundary between the spider and the web.
//
// Submodules:
// - http: fetches pages over HTTP with reqwest
// - html: pulls links and body text out of an HTML document
// - memory: an in-memory site used by the tests
//
// The spider never talks to reqwest directly. It only sees the PageSource
// trait, so the crawl/search logic can run against canned pages in tests and
// against the real network in the binary.
// =============================================================================

mod html;
mod http;
#[cfg(test)]
pub mod memory;

use async_trait::async_trait;

use crate::error::FetchError;

pub use html::{body_text, extract_links};
pub use http::HttpSource;

/// An HTML document that was fetched successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Final URL of the document (after redirects); relative links resolve
    /// against this.
    pub url: String,
    pub content_type: String,
    pub html: String,
}

/// Anything that can turn a URL into an HTML page, or say why it couldn't.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Page, FetchError>;
}

/// Only HTML responses are crawled or searched.
pub fn is_html(content_type: &str) -> bool {
    content_type.to_ascii_lowercase().contains("text/html")
}
