// src/error.rs
// =============================================================================
// Error types for the spider.
//
// There are two very different kinds of failure here:
// - FetchError: one URL could not be turned into an HTML page. This is an
//   everyday event while crawling (dead links, images, timeouts) and is
//   always recovered from: the URL simply contributes nothing.
// - SpiderError: the extractor was used in the wrong order. That is a bug
//   in the caller, so it is returned as a hard error.
//
// We use `thiserror` to derive std::error::Error + Display for both.
// =============================================================================

use thiserror::Error;

/// Why a single page could not be fetched.
///
/// Variants carry messages instead of the underlying `reqwest::Error` so the
/// type stays `Clone` and test doubles can replay the same failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The URL itself could not be parsed
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Connection refused, DNS failure, TLS failure, etc.
    #[error("network error: {0}")]
    Network(String),

    /// The request did not finish within the client timeout
    #[error("request timed out")]
    Timeout,

    /// The server answered with a non-2xx status
    #[error("HTTP {0}")]
    Status(u16),

    /// The response was not an HTML document
    #[error("unsupported content type: {0}")]
    NotHtml(String),

    /// The body could not be read
    #[error("failed to read body: {0}")]
    Body(String),
}

impl FetchError {
    // Categorizes a reqwest error the same way the status checks do:
    // timeouts are split out, everything else is a network failure
    pub fn from_reqwest(error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            FetchError::Timeout
        } else if error.is_body() || error.is_decode() {
            FetchError::Body(error.to_string())
        } else {
            FetchError::Network(error.to_string())
        }
    }
}

/// Errors that are surfaced to whoever drives the spider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpiderError {
    /// `search_for_word` was called before any page was crawled successfully
    #[error("crawl must succeed at least once before searching for a word")]
    InvalidState,
}
