// src/checker/status.rs
// =============================================================================
// This module turns the outcome of loading a page into an error category.
//
// Two inputs are possible:
// - An HTTP status code (the server answered, maybe with an error)
// - A navigation failure (we never got a status code at all)
//
// The category strings end up in broken-links.csv / broken-links.md, so they
// must stay exactly as written here.
//
// HTTP status codes:
// - 200-299: Success
// - 300-399: Success too; redirects were already followed by the fetcher,
//            so a 3xx here is whatever the final hop answered
// - everything else: a broken link
// =============================================================================

use crate::fetch::{NavigationFailure, NavigationFailureKind};

// Result of classifying a status code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusClass {
    /// The page loaded fine
    Success,
    /// The page is broken, with a human-readable reason
    Failed(String),
}

pub fn classify_status(code: u16) -> StatusClass {
    if (200..400).contains(&code) {
        return StatusClass::Success;
    }

    let category = match code {
        404 => "Page not found (404)".to_string(),
        403 => "Access forbidden (403)".to_string(),
        500 => "Server error (500)".to_string(),
        502 => "Bad gateway (502)".to_string(),
        503 => "Service unavailable (503)".to_string(),
        504 => "Gateway timeout (504)".to_string(),
        other => format!("Returned status {}", other),
    };

    StatusClass::Failed(category)
}

// Every failure kind maps to a category; `Other` keeps the adapter's message
pub fn classify_failure(failure: &NavigationFailure) -> String {
    match &failure.kind {
        NavigationFailureKind::Timeout => "Page load timed out".to_string(),
        NavigationFailureKind::NetworkError => "Network connection failed".to_string(),
        NavigationFailureKind::DnsFailure => "DNS lookup failed".to_string(),
        NavigationFailureKind::ConnectionRefused => "Connection refused".to_string(),
        NavigationFailureKind::TlsError => "SSL/TLS error".to_string(),
        NavigationFailureKind::Other => failure.message.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed(s: &str) -> StatusClass {
        StatusClass::Failed(s.to_string())
    }

    #[test]
    fn test_success_range() {
        assert_eq!(classify_status(200), StatusClass::Success);
        assert_eq!(classify_status(204), StatusClass::Success);
        assert_eq!(classify_status(301), StatusClass::Success);
        assert_eq!(classify_status(399), StatusClass::Success);
    }

    #[test]
    fn test_known_error_codes() {
        assert_eq!(classify_status(404), failed("Page not found (404)"));
        assert_eq!(classify_status(403), failed("Access forbidden (403)"));
        assert_eq!(classify_status(500), failed("Server error (500)"));
        assert_eq!(classify_status(502), failed("Bad gateway (502)"));
        assert_eq!(classify_status(503), failed("Service unavailable (503)"));
        assert_eq!(classify_status(504), failed("Gateway timeout (504)"));
    }

    #[test]
    fn test_unknown_codes_are_generic() {
        assert_eq!(classify_status(418), failed("Returned status 418"));
        assert_eq!(classify_status(400), failed("Returned status 400"));
        assert_eq!(classify_status(101), failed("Returned status 101"));
    }

    #[test]
    fn test_failure_kinds() {
        let cases = [
            (NavigationFailureKind::Timeout, "Page load timed out"),
            (NavigationFailureKind::NetworkError, "Network connection failed"),
            (NavigationFailureKind::DnsFailure, "DNS lookup failed"),
            (NavigationFailureKind::ConnectionRefused, "Connection refused"),
            (NavigationFailureKind::TlsError, "SSL/TLS error"),
        ];

        for (kind, expected) in cases {
            let failure = NavigationFailure::new(kind, "ignored");
            assert_eq!(classify_failure(&failure), expected);
        }
    }

    #[test]
    fn test_other_failure_is_verbatim() {
        let failure = NavigationFailure::new(
            NavigationFailureKind::Other,
            "error following redirect: too many redirects",
        );
        assert_eq!(
            classify_failure(&failure),
            "error following redirect: too many redirects"
        );
    }
}
