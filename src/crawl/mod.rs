// src/crawl/mod.rs
// =============================================================================
// This module holds the crawl-then-search logic.
//
// Submodules:
// - frontier: visited set + FIFO queue for one run (what makes it BFS)
// - extractor: crawls one page at a time and searches the discovered links
// - controller: the Spider, which drives both phases under a page budget
//
// Nothing here knows about HTTP; pages come from a fetch::PageSource.
// =============================================================================

mod controller;
mod extractor;
mod frontier;

pub use controller::{CrawlFailure, SearchOutcome, Spider, StopReason};
pub use extractor::LinkExtractor;
pub use frontier::Frontier;
