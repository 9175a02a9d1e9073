// src/report/mod.rs
// =============================================================================
// This module writes the broken-links reports.
//
// Two steps, kept apart on purpose:
// 1. Render: CrawlResult -> text (pure, same input gives the same bytes)
// 2. Write: hand the text to a ReportSink (a directory on disk, or memory
//    in tests)
//
// Submodules:
// - csv: broken-links.csv
// - markdown: broken-links.md
// - sink: where the files go
// =============================================================================

mod csv;
mod markdown;
mod sink;

pub use sink::DirectorySink;
#[cfg(test)]
pub use sink::MemorySink;
pub use sink::ReportSink;

use crate::crawl::{BrokenLinkRecord, CrawlMode, CrawlResult};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub const CSV_FILE: &str = "broken-links.csv";
pub const MARKDOWN_FILE: &str = "broken-links.md";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to render CSV: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("report is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("failed to write {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Both reports, rendered and ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub csv: String,
    pub markdown: String,
}

impl Report {
    pub fn render(result: &CrawlResult) -> Result<Self, ReportError> {
        Ok(Self {
            csv: csv::render(result)?,
            markdown: markdown::render(result),
        })
    }
}

// Renders and writes both reports. Nothing is written when the crawl found
// no broken links.
pub fn emit(result: &CrawlResult, sink: &mut impl ReportSink) -> Result<(), ReportError> {
    if result.broken_links.is_empty() {
        return Ok(());
    }

    let report = Report::render(result)?;

    sink.write(CSV_FILE, report.csv.as_bytes())?;
    println!("CSV report generated: {}", CSV_FILE);

    sink.write(MARKDOWN_FILE, report.markdown.as_bytes())?;
    println!("Markdown report generated: {}", MARKDOWN_FILE);

    Ok(())
}

// The "Domain Type" column only exists when external pages were crawled
fn columns(mode: CrawlMode) -> &'static [&'static str] {
    match mode {
        CrawlMode::InternalOnly => &["URL", "Error"],
        CrawlMode::InternalAndExternal => &["URL", "Domain Type", "Error"],
    }
}

fn fields(record: &BrokenLinkRecord, mode: CrawlMode) -> Vec<&str> {
    match mode {
        CrawlMode::InternalOnly => vec![record.url.as_str(), record.error.as_str()],
        CrawlMode::InternalAndExternal => {
            vec![record.url.as_str(), record.scope.as_str(), record.error.as_str()]
        }
    }
}
