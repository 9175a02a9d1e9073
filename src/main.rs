// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging and parse command-line arguments
// 2. Validate the start URL (bad URL = usage message, exit 1, no crawl)
// 3. Crawl the site, one page at a time
// 4. Print a summary and write the reports if anything is broken
// 5. Exit with the proper code (0 = crawl finished, 1 = bad input,
//    2 = unexpected error)
//
// Finding broken links is a normal outcome, so it still exits with 0.
// =============================================================================

mod checker; // src/checker/ - URL and error classification
mod cli; // src/cli.rs - command-line parsing
mod crawl; // src/crawl/ - the breadth-first crawl
mod fetch; // src/fetch/ - loading pages over HTTP
mod report; // src/report/ - CSV and Markdown reports

use anyhow::{Context, Result};
use checker::Scope;
use clap::{CommandFactory, Parser};
use cli::Cli;
use crawl::{CrawlEngine, CrawlMode, CrawlResult};
use fetch::HttpFetcher;
use report::DirectorySink;
use std::time::Duration;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    init_tracing();

    // clap exits on its own (with a usage message) if the URL is missing
    let cli = Cli::parse();

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!(error = ?e, "link check aborted");
            eprintln!("An error occurred: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr so they never mix with the report output on stdout.
// Default level is warn; RUST_LOG=debug shows every fetch.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

// Returns the exit code, or an error for anything unexpected
async fn run(cli: Cli) -> Result<i32> {
    let seed = match checker::parse(&cli.url) {
        Ok(url) => url,
        Err(e) => {
            debug!(error = %e, "rejected start URL");
            eprintln!(
                "Invalid URL format. Please provide a valid URL including the protocol (e.g., https://example.com)"
            );
            eprintln!("{}", Cli::command().render_usage());
            return Ok(1);
        }
    };

    let mode = CrawlMode::from_external_flag(cli.external);

    println!("Starting link check from: {}", cli.url);
    if mode == CrawlMode::InternalAndExternal {
        println!("External link checking enabled");
    }

    let fetcher = HttpFetcher::new(Duration::from_secs(cli.timeout))?;
    let result = CrawlEngine::new(seed, mode, fetcher).run().await;

    for line in summary_lines(&result) {
        println!("{}", line);
    }

    let mut sink = DirectorySink::new(&cli.output_dir);
    report::emit(&result, &mut sink).context("failed to write reports")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    Ok(0)
}

fn summary_lines(result: &CrawlResult) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        "Scan completed!".to_string(),
        format!("Total URLs checked: {}", result.visited_count),
        format!("Broken links found: {}", result.broken_links.len()),
    ];

    if result.broken_links.is_empty() {
        lines.push("No broken links detected.".to_string());
    } else if result.mode == CrawlMode::InternalAndExternal {
        lines.push(format!(
            "  Internal broken links: {}",
            result.broken_count(Scope::Internal)
        ));
        lines.push(format!(
            "  External broken links: {}",
            result.broken_count(Scope::External)
        ));
    }

    lines
}
