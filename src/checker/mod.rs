// src/checker/mod.rs
// =============================================================================
// Classifiers used by the crawl engine.
//
// Submodules:
// - address: Parses URLs and tells internal links from external ones
// - status: Turns HTTP status codes and navigation failures into error text
//
// Both are pure functions: no network, no state.
// =============================================================================

mod address;
mod status;

pub use address::{classify_scope, parse, Scope};
pub use status::{classify_failure, classify_status, StatusClass};
