// src/crawl/frontier.rs
// =============================================================================
// The crawl frontier: which pages we've visited and which we still could.
//
// - visited: HashSet for O(1) "seen it?" checks, plus a Vec that remembers
//   the order pages were visited in
// - queue: VecDeque used as a FIFO, which is what makes the crawl
//   breadth-first (push_back new links, pop_front the next page)
//
// Links are queued without checking whether they were visited. Duplicates
// are thrown away when they reach the front of the queue, so no page is
// ever visited twice.
// =============================================================================

use std::collections::{HashSet, VecDeque};

#[derive(Debug)]
pub struct Frontier {
    max_pages: usize,
    visited: HashSet<String>,
    visit_order: Vec<String>,
    queue: VecDeque<String>,
}

impl Frontier {
    pub fn new(max_pages: usize) -> Self {
        Self {
            max_pages,
            visited: HashSet::new(),
            visit_order: Vec::new(),
            queue: VecDeque::new(),
        }
    }

    /// True while fewer than `max_pages` pages have been visited.
    pub fn has_budget(&self) -> bool {
        self.visited.len() < self.max_pages
    }

    /// Marks the seed as visited without going through the queue.
    pub fn visit_seed(&mut self, seed: &str) {
        self.mark_visited(seed.to_string());
    }

    /// Pops queued URLs until one that hasn't been visited turns up, and
    /// marks it visited. Returns None once the queue runs dry.
    pub fn next_unvisited(&mut self) -> Option<String> {
        while let Some(url) = self.queue.pop_front() {
            if !self.visited.contains(&url) {
                self.mark_visited(url.clone());
                return Some(url);
            }
        }
        None
    }

    /// Appends links to the back of the queue, in the order given.
    pub fn enqueue<I>(&mut self, links: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.queue.extend(links);
    }

    /// Visited pages, in the order they were visited.
    pub fn visited(&self) -> &[String] {
        &self.visit_order
    }

    /// Number of queue entries, duplicates included.
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    pub fn into_visited(self) -> Vec<String> {
        self.visit_order
    }

    fn mark_visited(&mut self, url: String) {
        if self.visited.insert(url.clone()) {
            self.visit_order.push(url);
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why both a HashSet and a Vec for visited pages?
//    - The HashSet answers "seen it?" in O(1)
//    - The Vec remembers the order, which tests and --json output rely on
//
// 2. What does `I: IntoIterator<Item = String>` buy us?
//    - enqueue() accepts a Vec, an array, or any iterator of owned Strings
//    - VecDeque::extend consumes it without an intermediate collection
// -----------------------------------------------------------------------------
