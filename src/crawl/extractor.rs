// src/crawl/extractor.rs
// =============================================================================
// Crawls single pages and searches the pages they link to.
//
// A LinkExtractor remembers every link it has ever seen (the "corpus"),
// across all the pages it was asked to crawl. After the crawl phase, the
// corpus is exactly the set of pages searched for the word.
//
// Searching needs something to search: until a crawl has turned up at least
// one link, search_for_word fails with SpiderError::InvalidState.
// =============================================================================

use std::collections::HashSet;
use tracing::debug;

use crate::error::{FetchError, SpiderError};
use crate::fetch::{body_text, extract_links, PageSource};
use crate::report::{Diagnostic, Reporter};

pub struct LinkExtractor<'a, S: ?Sized> {
    source: &'a S,
    // Links in the order they were first discovered
    corpus: Vec<String>,
    known: HashSet<String>,
}

impl<'a, S> LinkExtractor<'a, S>
where
    S: PageSource + ?Sized,
{
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            corpus: Vec::new(),
            known: HashSet::new(),
        }
    }

    /// Fetches `url` and collects the links on it.
    ///
    /// Returns the page's own links (deduplicated, in document order), which
    /// may include links already known from earlier pages. Only links that
    /// are new to the corpus are reported, numbered from 1 on each page.
    pub async fn crawl(
        &mut self,
        url: &str,
        reporter: &mut dyn Reporter,
    ) -> Result<Vec<String>, FetchError> {
        let page = self.source.fetch(url).await?;

        reporter.report(Diagnostic::Crawling {
            url: url.to_string(),
        });

        let mut on_page = HashSet::new();
        let mut page_links = Vec::new();
        let mut ordinal = 0;

        let extracted = extract_links(&page.html, &page.url);
        debug!(
            url,
            content_type = %page.content_type,
            links = extracted.len(),
            "crawled page"
        );

        for link in extracted {
            if !on_page.insert(link.clone()) {
                continue;
            }
            if self.known.insert(link.clone()) {
                ordinal += 1;
                reporter.report(Diagnostic::Discovered {
                    ordinal,
                    url: link.clone(),
                });
                self.corpus.push(link.clone());
            }
            page_links.push(link);
        }

        Ok(page_links)
    }

    /// A copy of every link discovered so far, in discovery order.
    pub fn links(&self) -> Vec<String> {
        self.corpus.clone()
    }

    /// Case-insensitive search for `word` in the body text of every known link.
    pub async fn search_for_word(
        &self,
        word: &str,
        reporter: &mut dyn Reporter,
    ) -> Result<bool, SpiderError> {
        let matches = self.pages_containing(word, reporter).await?;
        Ok(!matches.is_empty())
    }

    /// Same as `search_for_word`, but returns the links whose page contained
    /// the word (in corpus order).
    ///
    /// Links that can't be fetched are skipped; they never count as a match
    /// and never stop the search.
    pub async fn pages_containing(
        &self,
        word: &str,
        reporter: &mut dyn Reporter,
    ) -> Result<Vec<String>, SpiderError> {
        if self.corpus.is_empty() {
            return Err(SpiderError::InvalidState);
        }

        let word = word.to_lowercase();
        reporter.report(Diagnostic::Searching { word: word.clone() });

        let mut matches = Vec::new();
        for link in &self.corpus {
            let page = match self.source.fetch(link).await {
                Ok(page) => page,
                Err(error) => {
                    debug!(url = %link, %error, "skipping page during search");
                    continue;
                }
            };

            if body_text(&page.html).to_lowercase().contains(&word) {
                reporter.report(Diagnostic::Found {
                    word: word.clone(),
                    url: link.clone(),
                });
                matches.push(link.clone());
            }
        }

        Ok(matches)
    }
}
