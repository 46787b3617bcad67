// src/config.rs
// =============================================================================
// Runtime settings for one spider.
//
// There is no config file: the CLI fills this in from its flags (or their
// environment variables) and everything else uses the defaults below.
// =============================================================================

use std::time::Duration;

/// Maximum number of distinct pages visited in one run.
pub const MAX_PAGES: usize = 10;

/// Per-request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Some servers refuse obvious bots, so we present a desktop browser.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 6.1; WOW64) AppleWebKit/535.1 \
                                      (KHTML, like Gecko) Chrome/13.0.782.112 Safari/535.1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpiderConfig {
    /// Page budget for the crawl phase
    pub max_pages: usize,
    /// Timeout applied to every HTTP request
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for SpiderConfig {
    fn default() -> Self {
        Self {
            max_pages: MAX_PAGES,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
