// src/fetch/mod.rs
// =============================================================================
// The fetch adapter: the only part of the program that talks to the network.
//
// The crawl engine only sees the `Fetcher` trait:
//   give it a URL -> get back (status, links on the page) or a failure
//
// Submodules:
// - http: The real fetcher, built on reqwest
// - html: Pulls <a href> links out of a loaded HTML page
//
// Rust concepts:
// - Traits: The engine is generic over any `Fetcher`, so tests can plug in
//   a fake website made of a HashMap
// - BoxFuture: A boxed future, the classic way to return async work from a
//   trait method
// =============================================================================

mod html;
mod http;

pub use self::http::{HttpFetcher, DEFAULT_TIMEOUT};

use futures::future::BoxFuture;
use std::fmt;
use url::Url;

/// Why a navigation produced no status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationFailureKind {
    Timeout,
    NetworkError,
    DnsFailure,
    ConnectionRefused,
    TlsError,
    /// Anything the adapter could not put in a better bucket
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationFailure {
    pub kind: NavigationFailureKind,
    /// The underlying error text, shown as-is for `Other`
    pub message: String,
}

impl NavigationFailure {
    pub fn new(kind: NavigationFailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for NavigationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

// What happened when we tried to load one URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The server answered. Redirects are already followed, `status` is the
    /// answer of the last hop and `final_url` is where we ended up.
    Loaded {
        status: u16,
        final_url: Url,
        /// Raw link strings found on the page (usually absolute, but
        /// anything unresolvable is passed through untouched)
        links: Vec<String>,
    },
    /// No status code could be obtained
    Failed(NavigationFailure),
}

/// Loads pages for the crawl engine
///
/// One call = one navigation. The engine never calls `fetch` twice at the
/// same time.
pub trait Fetcher {
    fn fetch<'a>(&'a self, url: &'a Url) -> BoxFuture<'a, FetchOutcome>;
}

// Lets callers lend a fetcher to the engine and keep using it afterwards
impl<T: Fetcher + ?Sized> Fetcher for &T {
    fn fetch<'a>(&'a self, url: &'a Url) -> BoxFuture<'a, FetchOutcome> {
        (**self).fetch(url)
    }
}
