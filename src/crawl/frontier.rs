// src/crawl/frontier.rs
// =============================================================================
// The two collections that drive a breadth-first crawl:
//
// - Frontier: URLs waiting to be loaded, first in first out
// - VisitedSet: URLs we already loaded (or tried to), never shrinks
//
// Both wrap a std collection and only expose the operations the crawl needs,
// so nobody can reorder the queue or forget a visited page by accident.
// =============================================================================

use std::collections::{HashSet, VecDeque};
use url::Url;

#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<Url>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends to the back. The same URL may be queued more than once; the
    /// visited check at dequeue time drops the extra copies.
    pub fn enqueue(&mut self, url: Url) {
        self.queue.push_back(url);
    }

    pub fn dequeue(&mut self) -> Option<Url> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct VisitedSet {
    urls: HashSet<Url>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, url: &Url) -> bool {
        self.urls.contains(url)
    }

    /// Returns false if the URL was already there
    pub fn insert(&mut self, url: Url) -> bool {
        self.urls.insert(url)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }
}
