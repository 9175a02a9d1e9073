// src/report/csv.rs
// =============================================================================
// Renders broken-links.csv
//
// Format:
//   URL,Domain Type,Error            <- header, plain
//   "https://x/gone","Internal","Page not found (404)"
//
// Every field of every record is wrapped in double quotes. A quote inside a
// field is doubled, as CSV readers expect.
// =============================================================================

use super::{columns, fields, ReportError};
use crate::crawl::CrawlResult;
use ::csv::{QuoteStyle, Terminator, WriterBuilder};

pub fn render(result: &CrawlResult) -> Result<String, ReportError> {
    let mut out = columns(result.mode).join(",");
    out.push('\n');

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for record in &result.broken_links {
        writer.write_record(fields(record, result.mode))?;
    }

    let rows = writer
        .into_inner()
        .map_err(|e| ::csv::Error::from(e.into_error()))?;
    out.push_str(&String::from_utf8(rows)?);

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawl::CrawlMode;
    use crate::report::tests::sample;

    #[test]
    fn test_external_mode_layout() {
        let csv = render(&sample(CrawlMode::InternalAndExternal)).unwrap();
        assert_eq!(
            csv,
            "URL,Domain Type,Error\n\
             \"https://example.com/gone\",\"Internal\",\"Page not found (404)\"\n\
             \"https://other.com/\",\"External\",\"DNS lookup failed\"\n"
        );
    }

    #[test]
    fn test_internal_mode_has_no_scope_column() {
        let csv = render(&sample(CrawlMode::InternalOnly)).unwrap();
        assert_eq!(
            csv,
            "URL,Error\n\
             \"https://example.com/gone\",\"Page not found (404)\"\n\
             \"https://other.com/\",\"DNS lookup failed\"\n"
        );
    }

    #[test]
    fn test_quotes_in_error_are_escaped() {
        let mut result = sample(CrawlMode::InternalOnly);
        result.broken_links.truncate(1);
        result.broken_links[0].error = r#"bad "thing""#.to_string();

        let csv = render(&result).unwrap();
        assert!(csv.ends_with("\"https://example.com/gone\",\"bad \"\"thing\"\"\"\n"));
    }
}
