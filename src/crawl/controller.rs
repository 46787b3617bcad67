// src/crawl/controller.rs
// =============================================================================
// The spider: a bounded breadth-first crawl followed by a word search.
//
// How a search works:
// 1. Visit the seed URL first
// 2. Fetch the page, list its links, and queue them (FIFO = breadth-first)
// 3. Take the next queued URL that hasn't been visited and repeat, until
//    `max_pages` pages were visited or the queue runs out
// 4. Search every link discovered along the way for the word
//
// Note what gets searched: the links *discovered* while crawling, not the
// pages *visited*. A page that was visited but failed to load contributes
// nothing; a link that was found but never visited (budget ran out) is
// still searched.
//
// Everything here is sequential: one request at a time, in a fixed order,
// so the same site always produces the same output.
// =============================================================================

use serde::Serialize;
use tracing::{info, warn};
use url::Url;

use super::extractor::LinkExtractor;
use super::frontier::Frontier;
use crate::config::MAX_PAGES;
use crate::error::SpiderError;
use crate::fetch::PageSource;
use crate::report::{Diagnostic, Reporter};

/// Why the crawl phase ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// `max_pages` pages were visited
    BudgetReached,
    /// Every queued link had already been visited
    FrontierExhausted,
}

/// A visited page that couldn't be crawled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrawlFailure {
    pub url: String,
    pub reason: String,
}

/// Everything one call to `Spider::search` found out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    pub seed: String,
    pub word: String,
    /// Pages visited, in visit order (the seed first)
    pub visited: Vec<String>,
    pub failures: Vec<CrawlFailure>,
    /// Number of distinct links discovered (and searched)
    pub corpus_size: usize,
    /// Links whose page contained the word
    pub matches: Vec<String>,
    pub found: bool,
    pub stop_reason: StopReason,
}

pub struct Spider<S, R> {
    source: S,
    reporter: R,
    max_pages: usize,
}

impl<S, R> Spider<S, R>
where
    S: PageSource,
    R: Reporter,
{
    pub fn new(source: S, reporter: R) -> Self {
        Self {
            source,
            reporter,
            max_pages: MAX_PAGES,
        }
    }

    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Crawls outward from `seed_url`, then searches every discovered link
    /// for `word` (ignoring case).
    ///
    /// Pages that fail to load never abort the run. The only error is
    /// `InvalidState`, when the crawl discovered no links at all (so there is
    /// nothing to search).
    pub async fn search(&mut self, seed_url: &str, word: &str) -> Result<SearchOutcome, SpiderError> {
        // Fresh state for every run
        let mut frontier = Frontier::new(self.max_pages);
        let mut extractor = LinkExtractor::new(&self.source);
        let mut failures = Vec::new();
        let mut first = true;

        // Discovered links are in Url's canonical form, so the seed must be
        // too or a link back to it would look like a new page
        let seed = Url::parse(seed_url)
            .map(|url| url.to_string())
            .unwrap_or_else(|_| seed_url.to_string());

        let stop_reason = loop {
            if !frontier.has_budget() {
                break StopReason::BudgetReached;
            }

            let current = if first {
                first = false;
                frontier.visit_seed(&seed);
                seed.clone()
            } else {
                // The seed is never crawled twice: an empty queue ends the run
                match frontier.next_unvisited() {
                    Some(url) => url,
                    None => break StopReason::FrontierExhausted,
                }
            };

            match extractor.crawl(&current, &mut self.reporter).await {
                Ok(links) => frontier.enqueue(links),
                Err(error) => {
                    warn!(url = %current, %error, "crawl failed, no links from this page");
                    failures.push(CrawlFailure {
                        url: current,
                        reason: error.to_string(),
                    });
                }
            }
        };

        info!(
            visited = frontier.visited().len(),
            queued = frontier.queued(),
            failed = failures.len(),
            corpus = extractor.links().len(),
            ?stop_reason,
            "crawl phase finished"
        );

        let matches = extractor.pages_containing(word, &mut self.reporter).await?;
        let found = !matches.is_empty();

        if !found {
            self.reporter.report(Diagnostic::NotFound {
                word: word.to_string(),
            });
        }

        info!(word, found, matches = matches.len(), "search phase finished");

        Ok(SearchOutcome {
            seed,
            word: word.to_string(),
            corpus_size: extractor.links().len(),
            visited: frontier.into_visited(),
            failures,
            matches,
            found,
            stop_reason,
        })
    }
}
