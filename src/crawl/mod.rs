// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Breadth-first crawling starting from a URL
// - Every distinct URL is loaded at most once
// - Internal-only by default, external pages on request
// - Broken pages are collected, never abort the crawl
// =============================================================================

mod engine;
mod frontier;

pub use engine::{BrokenLinkRecord, CrawlEngine, CrawlMode, CrawlResult};
