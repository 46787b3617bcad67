// src/fetch/memory.rs
// =============================================================================
// An in-memory "website" for tests.
//
// Pages and failures are registered up front; fetching an unknown URL
// behaves like a 404. Every fetch is recorded so tests can assert on the
// exact order in which the spider touched the network.
// =============================================================================

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use super::{Page, PageSource};
use crate::error::FetchError;

#[derive(Debug, Default)]
pub struct MemorySite {
    pages: HashMap<String, Result<Page, FetchError>>,
    requests: Mutex<Vec<String>>,
}

impl MemorySite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an HTML page served at `url`.
    pub fn page(mut self, url: &str, html: &str) -> Self {
        let page = Page {
            url: url.to_string(),
            content_type: "text/html; charset=utf-8".to_string(),
            html: html.to_string(),
        };
        self.pages.insert(url.to_string(), Ok(page));
        self
    }

    /// Registers a page whose body is just links to `targets`.
    pub fn linking(self, url: &str, targets: &[&str]) -> Self {
        let anchors: String = targets
            .iter()
            .map(|target| format!("<a href=\"{target}\">link</a>\n"))
            .collect();
        self.page(url, &format!("<html><body>{anchors}</body></html>"))
    }

    /// Makes every fetch of `url` fail with `error`.
    pub fn failure(mut self, url: &str, error: FetchError) -> Self {
        self.pages.insert(url.to_string(), Err(error));
        self
    }

    /// URLs fetched so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageSource for MemorySite {
    async fn fetch(&self, url: &str) -> Result<Page, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .unwrap_or(Err(FetchError::Status(404)))
    }
}
