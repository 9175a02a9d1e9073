// src/crawl/engine.rs
// =============================================================================
// This module implements the crawl itself, breadth-first.
//
// How it works:
// 1. Start with the seed URL in the frontier
// 2. Take the next URL; skip it if we've already been there
// 3. Load it through the fetcher
// 4. Broken (error status or failed navigation)? Record it, move on
// 5. Loaded fine? Queue every link on the page that we haven't visited yet
//    and that the crawl mode allows (internal only, or everything)
// 6. Repeat until the frontier is empty
//
// One page at a time: the next fetch starts only after the previous page is
// fully processed. That is what keeps the order breadth-first.
//
// Rust concepts:
// - Generics: `CrawlEngine<F: Fetcher>` works with the real HTTP fetcher and
//   with the fake one in the tests below
// - Ownership: `run(self)` consumes the engine, so its frontier and visited
//   set can't be touched once the crawl is over
// =============================================================================

use crate::checker::{self, Scope, StatusClass};
use crate::fetch::{FetchOutcome, Fetcher};
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use super::frontier::{Frontier, VisitedSet};

/// Which links the crawl follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CrawlMode {
    /// Only pages on the seed's host are loaded
    InternalOnly,
    /// External pages are loaded too, and their links followed
    InternalAndExternal,
}

impl CrawlMode {
    pub fn from_external_flag(external: bool) -> Self {
        if external {
            CrawlMode::InternalAndExternal
        } else {
            CrawlMode::InternalOnly
        }
    }

    pub fn follows(&self, scope: Scope) -> bool {
        match self {
            CrawlMode::InternalOnly => scope == Scope::Internal,
            CrawlMode::InternalAndExternal => true,
        }
    }
}

/// One URL that did not load successfully
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrokenLinkRecord {
    pub url: Url,
    pub scope: Scope,
    pub error: String,
}

/// Everything the crawl produced, handed to the reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrawlResult {
    pub mode: CrawlMode,
    pub visited_count: usize,
    pub broken_links: Vec<BrokenLinkRecord>,
}

impl CrawlResult {
    pub fn broken_count(&self, scope: Scope) -> usize {
        self.broken_links
            .iter()
            .filter(|record| record.scope == scope)
            .count()
    }
}

pub struct CrawlEngine<F> {
    base: Url,
    mode: CrawlMode,
    fetcher: F,
    frontier: Frontier,
    visited: VisitedSet,
    broken: Vec<BrokenLinkRecord>,
}

impl<F: Fetcher> CrawlEngine<F> {
    pub fn new(seed: Url, mode: CrawlMode, fetcher: F) -> Self {
        let mut frontier = Frontier::new();
        frontier.enqueue(seed.clone());

        Self {
            base: seed,
            mode,
            fetcher,
            frontier,
            visited: VisitedSet::new(),
            broken: Vec::new(),
        }
    }

    /// Crawls until there is nothing left to visit
    ///
    /// Never fails: every problem with a single page ends up as a
    /// `BrokenLinkRecord` in the result.
    pub async fn run(mut self) -> CrawlResult {
        while let Some(current) = self.frontier.dequeue() {
            if !self.visited.insert(current.clone()) {
                continue;
            }

            println!("Checking: {}", current);

            let outcome = self.fetcher.fetch(&current).await;

            match outcome {
                FetchOutcome::Loaded {
                    status,
                    final_url,
                    links,
                } => match checker::classify_status(status) {
                    StatusClass::Success => {
                        if final_url != current {
                            debug!(from = %current, to = %final_url, "redirected");
                        }
                        self.discover(links);
                    }
                    StatusClass::Failed(category) => {
                        let record = self.record(current, category);
                        eprintln!("Error: {} - {} ({})", record.url, record.error, record.scope);
                    }
                },
                FetchOutcome::Failed(failure) => {
                    debug!(url = %current, failure = %failure, "navigation failed");
                    let category = checker::classify_failure(&failure);
                    let record = self.record(current, category);
                    eprintln!("Failed to load {}: {} ({})", record.url, record.error, record.scope);
                }
            }
        }

        debug_assert!(self.frontier.is_empty());

        CrawlResult {
            mode: self.mode,
            visited_count: self.visited.len(),
            broken_links: self.broken,
        }
    }

    // Queues the links found on a successfully loaded page
    fn discover(&mut self, links: Vec<String>) {
        for raw in links {
            let link = match checker::parse(&raw) {
                Ok(link) => link,
                Err(e) => {
                    warn!(link = %raw, error = %e, "Invalid URL");
                    continue;
                }
            };

            let scope = checker::classify_scope(&link, &self.base);
            if !self.visited.contains(&link) && self.mode.follows(scope) {
                self.frontier.enqueue(link);
            }
        }

        debug!(queued = self.frontier.len(), "frontier updated");
    }

    // Scope comes from the URL we asked for, not where redirects took us
    fn record(&mut self, url: Url, error: String) -> &BrokenLinkRecord {
        let scope = checker::classify_scope(&url, &self.base);
        self.broken.push(BrokenLinkRecord { url, scope, error });
        &self.broken[self.broken.len() - 1]
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why check `visited` twice (when queueing and when dequeuing)?
//    - The same link can be queued by two pages before either copy is loaded
//    - The check at dequeue time is the one that guarantees "once"
//    - The check at queue time just keeps the frontier from growing
//
// 2. What does `visited.insert()` returning false mean?
//    - HashSet::insert tells us whether the value was new
//    - So "insert, and skip if it was already there" is one call
//
// 3. Why does `record()` return a reference?
//    - The caller prints the record it just stored, scope included,
//      without computing the scope a second time
// -----------------------------------------------------------------------------
