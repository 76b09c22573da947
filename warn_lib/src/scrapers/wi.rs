//! Wisconsin. One page per year, newest first. Besides the notice table, a
//! page may carry two-column "Updates to Previously Filed Notices" tables,
//! which are skipped. Layoff dates often trail free-text remarks.

use regex::Regex;
use reqwest::StatusCode;

use crate::error::WarnError;
use crate::tables::{parse_tables, ElementSelector, Row, Table};

use super::{ScrapeContext, ScrapeOutput};

const FIRST_YEAR: i32 = 2016;

pub fn year_url(year: i32) -> String {
    format!(
        "https://dwd.wisconsin.gov/dislocatedworker/warn/{}/default.htm",
        year
    )
}

pub async fn scrape(ctx: &ScrapeContext) -> Result<ScrapeOutput, WarnError> {
    let date_prefix = Regex::new(r"^[0-9]{1,2}/[0-9]{1,2}/[0-9]{4}")
        .map_err(|e| WarnError::InvalidInput(format!("regex compile error: {}", e)))?;

    let mut rows: Vec<Row> = Vec::new();
    for year in (FIRST_YEAR..=ctx.current_year).rev() {
        let key = format!("wi/{}.html", year);
        let html = match ctx
            .fetch_cached(&key, &year_url(year), year < ctx.current_year - 1)
            .await
        {
            Ok(html) => html,
            Err(WarnError::Fetch(e)) if e.status() == Some(StatusCode::NOT_FOUND) => {
                tracing::warn!("wi: no page for {} yet, skipping", year);
                continue;
            }
            Err(e) => return Err(e),
        };

        let tables = parse_tables(&html, &ElementSelector::table(), true)?;
        rows.extend(notice_rows(tables, rows.is_empty()));
    }

    for row in rows.iter_mut() {
        for cell in row.iter_mut() {
            trim_after_date(cell, &date_prefix);
        }
    }

    ctx.finish("wi", &rows)
}

/// Rows of the notice tables on one page. Each table starts with its header
/// row, which is kept only when `keep_header` is set and only once.
fn notice_rows(tables: Vec<Table>, keep_header: bool) -> Vec<Row> {
    let mut keep_header = keep_header;
    let mut rows = Vec::new();
    for table in tables.into_iter().filter(is_notice_table) {
        let skip = if keep_header { 0 } else { 1 };
        keep_header = false;
        rows.extend(table.into_iter().skip(skip));
    }
    rows
}

fn is_notice_table(table: &Table) -> bool {
    table.first().is_some_and(|header| header.len() > 2)
}

/// Cuts anything after a leading `m/d/yyyy` date.
fn trim_after_date(cell: &mut String, date_prefix: &Regex) {
    if let Some(m) = date_prefix.find(cell) {
        let end = m.end();
        cell.truncate(end);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn date_prefix() -> Regex {
        Regex::new(r"^[0-9]{1,2}/[0-9]{1,2}/[0-9]{4}").unwrap()
    }

    #[test]
    fn skips_update_tables() {
        let notices = vec![
            row(&["Company", "City", "Affected", "Date"]),
            row(&["Acme", "Madison", "50", "1/2/2021"]),
        ];
        let updates = vec![row(&["Company", "Update"]), row(&["Acme", "Revised count"])];
        let rows = notice_rows(vec![updates, notices], true);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], "Company");
        assert_eq!(rows[1][1], "Madison");
    }

    #[test]
    fn header_dropped_on_later_pages() {
        let notices = vec![
            row(&["Company", "City", "Affected"]),
            row(&["Widgets", "Racine", "12"]),
        ];
        let rows = notice_rows(vec![notices], false);
        assert_eq!(rows, vec![row(&["Widgets", "Racine", "12"])]);
    }

    #[test]
    fn header_kept_once_per_page() {
        let a = vec![row(&["C", "City", "N"]), row(&["A", "X", "1"])];
        let b = vec![row(&["C", "City", "N"]), row(&["B", "Y", "2"])];
        let rows = notice_rows(vec![a, b], true);
        assert_eq!(
            rows,
            vec![row(&["C", "City", "N"]), row(&["A", "X", "1"]), row(&["B", "Y", "2"])]
        );
    }

    #[test]
    fn date_remarks_removed() {
        let re = date_prefix();
        let mut cell = "3/15/2021 (revised from 2/1/2021)".to_string();
        trim_after_date(&mut cell, &re);
        assert_eq!(cell, "3/15/2021");
    }

    #[test]
    fn non_date_cells_untouched() {
        let re = date_prefix();
        let mut cell = "Plant closing 2021".to_string();
        trim_after_date(&mut cell, &re);
        assert_eq!(cell, "Plant closing 2021");
    }

    #[test]
    fn url_for_year() {
        assert_eq!(
            year_url(2020),
            "https://dwd.wisconsin.gov/dislocatedworker/warn/2020/default.htm"
        );
    }
}
