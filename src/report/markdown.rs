// src/report/markdown.rs
// =============================================================================
// Renders broken-links.md, a heading plus one pipe table:
//
//   # Broken Links Report
//
//   | URL | Domain Type | Error |
//   | --- | ----------- | ----- |
//   | https://x/gone | Internal | Page not found (404) |
// =============================================================================

use super::{columns, fields};
use crate::crawl::CrawlResult;

pub fn render(result: &CrawlResult) -> String {
    let header = columns(result.mode);

    let mut md = String::from("# Broken Links Report\n\n");
    md.push_str(&row(header.iter().copied()));

    // Divider dashes as wide as the header text
    let divider: Vec<String> = header.iter().map(|h| "-".repeat(h.len().max(3))).collect();
    md.push_str(&row(divider.iter().map(String::as_str)));

    for record in &result.broken_links {
        let cells: Vec<String> = fields(record, result.mode)
            .into_iter()
            .map(escape_cell)
            .collect();
        md.push_str(&row(cells.iter().map(String::as_str)));
    }

    md
}

fn row<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    let mut line = String::from("|");
    for cell in cells {
        line.push(' ');
        line.push_str(cell);
        line.push_str(" |");
    }
    line.push('\n');
    line
}

// A bare pipe would end the cell early, a line break the whole row
fn escape_cell(text: &str) -> String {
    text.replace("\r\n", " ")
        .replace(|c: char| c == '\r' || c == '\n', " ")
        .replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawl::CrawlMode;
    use crate::report::tests::sample;

    #[test]
    fn test_external_mode_table() {
        let md = render(&sample(CrawlMode::InternalAndExternal));
        assert_eq!(
            md,
            "# Broken Links Report\n\
             \n\
             | URL | Domain Type | Error |\n\
             | --- | ----------- | ----- |\n\
             | https://example.com/gone | Internal | Page not found (404) |\n\
             | https://other.com/ | External | DNS lookup failed |\n"
        );
    }

    #[test]
    fn test_internal_mode_table() {
        let md = render(&sample(CrawlMode::InternalOnly));
        assert!(md.contains("| URL | Error |\n| --- | ----- |\n"));
        assert!(md.contains("| https://other.com/ | DNS lookup failed |\n"));
        assert!(!md.contains("Domain Type"));
    }

    #[test]
    fn test_pipes_are_escaped() {
        assert_eq!(escape_cell("a|b"), "a\\|b");
    }

    #[test]
    fn test_multiline_error_stays_on_one_row() {
        let mut result = sample(CrawlMode::InternalOnly);
        result.broken_links.truncate(1);
        result.broken_links[0].error = "connection reset\nwhile reading\r\nbody".to_string();

        let md = render(&result);

        assert!(md.ends_with(
            "| https://example.com/gone | connection reset while reading body |\n"
        ));
        assert_eq!(md.lines().count(), 5);
    }
}
