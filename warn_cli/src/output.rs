use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use warn_lib::{ScrapeOutput, WarnError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Markdown,
}

impl OutputFormat {
    pub fn from_arg(value: &str) -> Self {
        match value {
            "json" => OutputFormat::Json,
            "markdown" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize, Debug, PartialEq)]
pub struct SummaryRow {
    #[tabled(rename = "State")]
    #[serde(rename = "State")]
    pub state: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    pub status: String,
    #[tabled(rename = "Rows")]
    #[serde(rename = "Rows")]
    pub rows: String,
    #[tabled(rename = "Output")]
    #[serde(rename = "Output")]
    pub output: String,
}

#[derive(Tabled, Serialize)]
struct ScraperRow {
    #[tabled(rename = "State")]
    #[serde(rename = "State")]
    state: String,
}

// -- Row builders --

pub fn summary_row(state: &str, result: &Result<ScrapeOutput, WarnError>) -> SummaryRow {
    match result {
        Ok(output) => SummaryRow {
            state: state.to_uppercase(),
            status: "ok".to_string(),
            rows: output.rows.to_string(),
            output: output.path.display().to_string(),
        },
        Err(e) => SummaryRow {
            state: state.to_uppercase(),
            status: format!("failed: {}", e),
            rows: String::new(),
            output: String::new(),
        },
    }
}

fn build_scraper_rows(states: &[&str]) -> Vec<ScraperRow> {
    states
        .iter()
        .map(|s| ScraperRow {
            state: s.to_uppercase(),
        })
        .collect()
}

// -- Rendering --

fn render<T: Tabled>(rows: Vec<T>, format: &OutputFormat) -> String {
    let mut table = Table::new(rows);
    if *format == OutputFormat::Markdown {
        table.with(Style::markdown());
    }
    table.to_string()
}

pub fn print_summary(rows: Vec<SummaryRow>, format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&rows),
        _ => println!("{}", render(rows, format)),
    }
}

pub fn print_scrapers(states: &[&str], format: &OutputFormat) {
    let rows = build_scraper_rows(states);
    match format {
        OutputFormat::Json => print_json(&rows),
        _ => println!("{}", render(rows, format)),
    }
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn ok_output(rows: usize) -> ScrapeOutput {
        ScrapeOutput {
            state: "sd",
            path: PathBuf::from("/tmp/exports/sd.csv"),
            rows,
        }
    }

    #[test]
    fn test_output_format_from_arg() {
        assert_eq!(OutputFormat::from_arg("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_arg("markdown"), OutputFormat::Markdown);
        assert_eq!(OutputFormat::from_arg("table"), OutputFormat::Table);
    }

    #[test]
    fn test_summary_row_success() {
        let row = summary_row("sd", &Ok(ok_output(42)));
        assert_eq!(row.state, "SD");
        assert_eq!(row.status, "ok");
        assert_eq!(row.rows, "42");
        assert_eq!(row.output, "/tmp/exports/sd.csv");
    }

    #[test]
    fn test_summary_row_failure() {
        let row = summary_row("ut", &Err(WarnError::NoTablesFound));
        assert_eq!(row.state, "UT");
        assert_eq!(row.status, "failed: No tables found");
        assert!(row.rows.is_empty());
        assert!(row.output.is_empty());
    }

    #[test]
    fn test_summary_table_headers() {
        let rows = vec![summary_row("sd", &Ok(ok_output(3)))];
        let rendered = render(rows, &OutputFormat::Table);
        for header in ["State", "Status", "Rows", "Output"] {
            assert!(rendered.contains(header), "missing header {}", header);
        }
        assert!(rendered.contains("SD"));
    }

    #[test]
    fn test_summary_markdown_style() {
        let rows = vec![summary_row("sd", &Ok(ok_output(3)))];
        let rendered = render(rows, &OutputFormat::Markdown);
        let first = rendered.lines().next().unwrap();
        assert!(first.starts_with('|'));
        assert!(rendered.contains("|---"));
    }

    #[test]
    fn test_summary_json_keys() {
        let rows = vec![summary_row("wi", &Ok(ok_output(7)))];
        let value = serde_json::to_value(&rows).unwrap();
        assert_eq!(value[0]["State"], "WI");
        assert_eq!(value[0]["Rows"], "7");
        assert_eq!(value[0]["Status"], "ok");
    }

    #[test]
    fn test_scraper_rows_uppercase() {
        let rows = build_scraper_rows(&["ak", "wi"]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].state, "AK");
        assert_eq!(rows[1].state, "WI");
    }
}
