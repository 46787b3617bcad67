// src/report.rs
// =============================================================================
// The spider's diagnostic output.
//
// These are the human-readable lines printed while crawling and searching.
// They are not logging (that's tracing, on stderr): the exact wording is
// part of the tool's output and is asserted on by the tests, so each line
// is a variant of the Diagnostic enum with a fixed Display format.
//
// Where the lines go is decided by a Reporter:
// - Console prints them to stdout
// - Transcript keeps them in memory (tests and --json output)
// =============================================================================

use std::fmt;

/// One line of diagnostic output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A page was fetched and is about to have its links listed
    Crawling { url: String },
    /// A link seen for the first time, numbered from 1 within its page
    Discovered { ordinal: usize, url: String },
    /// The search phase is starting
    Searching { word: String },
    Found { word: String, url: String },
    NotFound { word: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Crawling { url } => write!(f, "Performing Crawl at {url}"),
            Diagnostic::Discovered { ordinal, url } => write!(f, "{ordinal}: {url}"),
            Diagnostic::Searching { word } => write!(f, "Performing Search for {word}:"),
            Diagnostic::Found { word, url } => write!(f, "Found {word} at: {url}"),
            Diagnostic::NotFound { word } => write!(f, "{word} NOT FOUND"),
        }
    }
}

/// Destination for diagnostic lines.
pub trait Reporter {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Prints every line to stdout.
#[derive(Debug, Default)]
pub struct Console;

impl Reporter for Console {
    fn report(&mut self, diagnostic: Diagnostic) {
        println!("{diagnostic}");
    }
}

/// Records every line in memory.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Reporter for Transcript {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.lines.push(diagnostic.to_string());
    }
}
