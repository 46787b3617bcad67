// src/fetch/http.rs
// =============================================================================
// Fetches pages over HTTP.
//
// Every failure mode is turned into a FetchError instead of bubbling up:
// - the URL doesn't parse
// - the request fails (DNS, connection refused, timeout, TLS)
// - the server answers with a non-2xx status
// - the response isn't HTML (images, PDFs, JSON, ...)
//
// Requests are made one at a time; the client is reused so connections are
// pooled between pages on the same host.
// =============================================================================

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::debug;
use url::Url;

use super::{is_html, Page, PageSource};
use crate::config::SpiderConfig;
use crate::error::FetchError;

/// A PageSource backed by a real reqwest client.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(config: &SpiderConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageSource for HttpSource {
    async fn fetch(&self, url: &str) -> Result<Page, FetchError> {
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        debug!(url, "fetching page");

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        if !is_html(&content_type) {
            return Err(FetchError::NotHtml(content_type));
        }

        // Links on a redirected page are relative to where we ended up
        let final_url = response.url().to_string();

        let html = response
            .text()
            .await
            .map_err(|e| FetchError::from_reqwest(&e))?;

        debug!(url = %final_url, bytes = html.len(), "fetched page");

        Ok(Page {
            url: final_url,
            content_type,
            html,
        })
    }
}
