// src/lib.rs
// =============================================================================
// word-spider: crawl a site breadth-first, then search what was found.
//
// Modules:
// - fetch: getting pages (HTTP or in-memory) and reading links/text out of them
// - crawl: the frontier, the link extractor and the Spider that drives them
// - report: the diagnostic lines printed during a run
// - config / error: settings and error types shared by the above
// =============================================================================

pub mod config;
pub mod crawl;
pub mod error;
pub mod fetch;
pub mod report;

pub use config::SpiderConfig;
pub use crawl::{SearchOutcome, Spider, StopReason};
pub use error::{FetchError, SpiderError};
