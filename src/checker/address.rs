// src/checker/address.rs
// =============================================================================
// This module decides two things about a URL string:
// 1. Is it a valid absolute URL we can crawl?
// 2. Is it "internal" (same host as the start URL) or "external"?
//
// Normalization is whatever the `url` crate does while parsing (lowercase
// scheme and host, drop default ports, empty path becomes "/"). Nothing else:
// trailing slashes and query order are left alone, so "/a" and "/a/" are two
// different pages.
// =============================================================================

use serde::Serialize;
use std::fmt;
use thiserror::Error;
use url::Url;

// Why a URL string was rejected
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("invalid URL '{raw}': {source}")]
    Invalid {
        raw: String,
        #[source]
        source: url::ParseError,
    },
}

/// Whether a URL lives on the same host as the start URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Scope {
    Internal,
    External,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Internal => "Internal",
            Scope::External => "External",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Parses a raw string into an absolute URL
//
// Fails only when the string is not a URL at all, or is relative (no
// scheme). mailto:, tel:, file: ... are valid URLs and pass.
pub fn parse(raw: &str) -> Result<Url, AddressError> {
    Url::parse(raw).map_err(|source| AddressError::Invalid {
        raw: raw.to_string(),
        source,
    })
}

// Internal iff both hosts are equal. Ports are not part of the comparison,
// so http://example.com:8080/ is internal to https://example.com/.
// URLs without a host (mailto:, javascript:) compare as "no host", which is
// external to any http(s) start URL.
pub fn classify_scope(url: &Url, base: &Url) -> Scope {
    if url.host_str() == base.host_str() {
        Scope::Internal
    } else {
        Scope::External
    }
}
