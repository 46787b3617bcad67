// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Usage:
//   word-spider [SEED_URL] [WORD] [--max-pages N] [--timeout-secs S]
//               [--user-agent UA] [--json]
//
// Both positionals have defaults, so running `word-spider` with no
// arguments does a demo search.
// =============================================================================

use clap::Parser;
use std::time::Duration;
use word_spider::config::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, MAX_PAGES};
use word_spider::SpiderConfig;

pub const DEFAULT_SEED_URL: &str = "http://arstechnica.com/";
pub const DEFAULT_WORD: &str = "computer";

#[derive(Parser, Debug)]
#[command(
    name = "word-spider",
    version,
    about = "Crawl a website breadth-first and search the pages it links to for a word",
    long_about = "word-spider visits up to --max-pages pages, starting at SEED_URL and following \
                  links in the order they were found. It then fetches every link it discovered \
                  and reports the pages whose text contains WORD (ignoring case)."
)]
pub struct Cli {
    /// URL to start crawling from
    #[arg(default_value = DEFAULT_SEED_URL)]
    pub seed_url: String,

    /// Word to search for (case-insensitive)
    #[arg(default_value = DEFAULT_WORD)]
    pub word: String,

    /// Maximum number of distinct pages to visit
    #[arg(long, env = "WORD_SPIDER_MAX_PAGES", default_value_t = MAX_PAGES)]
    pub max_pages: usize,

    /// Timeout for each HTTP request, in seconds
    #[arg(long, env = "WORD_SPIDER_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Print the outcome (and the crawl log) as JSON instead of plain lines
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn config(&self) -> SpiderConfig {
        SpiderConfig {
            max_pages: self.max_pages,
            timeout: Duration::from_secs(self.timeout_secs),
            user_agent: self.user_agent.clone(),
        }
    }
}
