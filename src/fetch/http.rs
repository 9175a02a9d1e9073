// src/fetch/http.rs
// =============================================================================
// The real fetcher: loads a page over HTTP(S) with reqwest.
//
// Key functionality:
// - GET request with a bounded timeout (30 seconds unless configured)
// - Follows redirects and reports the status of the final hop
// - Reads the body of successful HTML pages and extracts their links
// - Sorts network errors into timeout / DNS / refused / TLS / network / other
//
// Non-HTML resources (images, PDFs, ...) only report their status code, we
// never download their bodies.
// =============================================================================

use super::{html, FetchOutcome, Fetcher, NavigationFailure, NavigationFailureKind};
use anyhow::{Context, Result};
use futures::future::{BoxFuture, FutureExt};
use reqwest::header::CONTENT_TYPE;
use reqwest::{redirect, Client, Response};
use std::error::Error as StdError;
use std::io;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// How long a single navigation may take before it counts as timed out
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// More hops than this is treated as a redirect loop
const MAX_REDIRECTS: usize = 10;

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Builds the HTTP client. Failing here means we can't crawl at all.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(concat!("link-sentinel/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to create HTTP client")?;

        Ok(Self { client })
    }

    async fn load(&self, url: &Url) -> FetchOutcome {
        let response = match self.client.get(url.clone()).send().await {
            Ok(response) => response,
            Err(e) => return FetchOutcome::Failed(categorize_error(&e)),
        };

        let status = response.status();
        let final_url = response.url().clone();

        // Error pages are not trusted, so their links are never followed
        let wants_links = (status.is_success() || status.is_redirection()) && is_html(&response);

        // The status line already arrived, so a body cut off midway still
        // counts as a loaded page; we only lose its links
        let links = if wants_links {
            match response.text().await {
                Ok(body) => html::extract_links(&body, &final_url),
                Err(e) => {
                    warn!(url = %url, error = %e, "failed to read page body");
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };

        debug!(
            url = %url,
            final_url = %final_url,
            status = status.as_u16(),
            links = links.len(),
            "page loaded"
        );

        FetchOutcome::Loaded {
            status: status.as_u16(),
            final_url,
            links,
        }
    }
}

impl Fetcher for HttpFetcher {
    fn fetch<'a>(&'a self, url: &'a Url) -> BoxFuture<'a, FetchOutcome> {
        self.load(url).boxed()
    }
}

// A missing Content-Type is treated as HTML, like a browser sniffing the page
fn is_html(response: &Response) -> bool {
    match response.headers().get(CONTENT_TYPE) {
        None => true,
        Some(value) => value
            .to_str()
            .map(|ct| {
                let ct = ct.to_ascii_lowercase();
                ct.contains("text/html") || ct.contains("application/xhtml+xml")
            })
            .unwrap_or(false),
    }
}

// Sorts a reqwest error into a failure kind
//
// reqwest only tells us "timeout", "connect", "redirect", ... The finer
// details (DNS, refused, TLS) live further down the error's source chain,
// in hyper / std::io / rustls errors.
fn categorize_error(error: &reqwest::Error) -> NavigationFailure {
    let message = error.to_string();

    if error.is_timeout() {
        return NavigationFailure::new(NavigationFailureKind::Timeout, message);
    }

    // reqwest refuses to build requests for anything but http(s) URLs with a
    // host: mailto:, tel:, javascript:, file: ... end up here
    if error.is_builder() {
        return NavigationFailure::new(NavigationFailureKind::Other, message);
    }

    let root: &(dyn StdError + 'static) = error;
    let mut chain_text = String::new();

    for cause in std::iter::successors(root.source(), |&e| e.source()) {
        if let Some(io_error) = cause.downcast_ref::<io::Error>() {
            match io_error.kind() {
                io::ErrorKind::ConnectionRefused => {
                    return NavigationFailure::new(NavigationFailureKind::ConnectionRefused, message);
                }
                io::ErrorKind::TimedOut => {
                    return NavigationFailure::new(NavigationFailureKind::Timeout, message);
                }
                _ => {}
            }
        }
        chain_text.push_str(&cause.to_string().to_ascii_lowercase());
        chain_text.push('\n');
    }

    let kind = if is_dns_failure(&chain_text) {
        NavigationFailureKind::DnsFailure
    } else if is_tls_failure(&chain_text) {
        NavigationFailureKind::TlsError
    } else if error.is_connect() || error.is_request() || error.is_body() {
        NavigationFailureKind::NetworkError
    } else {
        NavigationFailureKind::Other
    };

    NavigationFailure::new(kind, message)
}

fn is_dns_failure(text: &str) -> bool {
    text.contains("dns error")
        || text.contains("failed to lookup address")
        || text.contains("name or service not known")
        || text.contains("no such host")
}

fn is_tls_failure(text: &str) -> bool {
    text.contains("certificate") || text.contains("tls") || text.contains("ssl") || text.contains("handshake")
}
