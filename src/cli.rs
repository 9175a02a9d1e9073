// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Usage:
//   link-sentinel <URL> [--external|-e] [--timeout SECS] [--output-dir DIR] [--json]
//
// There is no config file; everything is a flag. Diagnostic logging is
// controlled by the RUST_LOG environment variable instead.
// =============================================================================

use crate::fetch::DEFAULT_TIMEOUT;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "link-sentinel",
    version,
    about = "Crawl a website and report broken links",
    long_about = "link-sentinel starts from one URL, visits every page reachable from it \
                  (breadth-first, each page once) and reports the pages that fail to load. \
                  Reports are written to broken-links.csv and broken-links.md when anything is broken."
)]
pub struct Cli {
    /// Website URL to start from, including the protocol (e.g., https://example.com)
    pub url: String,

    /// Check external links as well as internal ones
    ///
    /// External pages are loaded too, and the links on them are followed.
    #[arg(short, long)]
    pub external: bool,

    /// Seconds to wait for a page before giving up on it
    #[arg(
        long,
        value_name = "SECS",
        default_value_t = DEFAULT_TIMEOUT.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Directory the reports are written to
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Also print the crawl result as JSON after the summary
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["link-sentinel", "https://example.com"]).unwrap();
        assert_eq!(cli.url, "https://example.com");
        assert!(!cli.external);
        assert_eq!(cli.timeout, 30);
        assert_eq!(cli.output_dir, PathBuf::from("."));
        assert!(!cli.json);
    }

    #[test]
    fn test_external_flag_short_and_long() {
        let short = Cli::try_parse_from(["link-sentinel", "-e", "https://example.com"]).unwrap();
        let long = Cli::try_parse_from(["link-sentinel", "https://example.com", "--external"]).unwrap();
        assert!(short.external);
        assert!(long.external);
    }

    #[test]
    fn test_missing_url_is_an_error() {
        assert!(Cli::try_parse_from(["link-sentinel"]).is_err());
        assert!(Cli::try_parse_from(["link-sentinel", "--external"]).is_err());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        assert!(Cli::try_parse_from(["link-sentinel", "https://example.com", "--timeout", "0"]).is_err());
    }
}
