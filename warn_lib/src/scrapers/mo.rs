//! Missouri. One page per year, newest first. Each table closes with a
//! "Total" row that is not a notice.

use crate::error::WarnError;
use crate::tables::{parse_tables, ElementSelector, Row, Table};

use super::{first_table, ScrapeContext, ScrapeOutput};

const FIRST_YEAR: i32 = 2015;
const LAST_YEAR: i32 = 2019;

pub fn year_url(year: i32) -> String {
    format!("https://jobs.mo.gov/warn{}", year)
}

pub async fn scrape(ctx: &ScrapeContext) -> Result<ScrapeOutput, WarnError> {
    let mut rows: Vec<Row> = Vec::new();

    for (i, year) in (FIRST_YEAR..=LAST_YEAR).rev().enumerate() {
        let key = format!("mo/{}.html", year);
        let html = ctx
            .fetch_cached(&key, &year_url(year), year < ctx.current_year - 1)
            .await?;

        let table = first_table(parse_tables(&html, &ElementSelector::table(), i == 0)?)?;
        rows.extend(without_total(table));
    }

    ctx.finish("mo", &rows)
}

fn without_total(mut table: Table) -> Table {
    let is_total = table
        .last()
        .and_then(|row| row.first())
        .is_some_and(|cell| cell.trim_end_matches(':').eq_ignore_ascii_case("total"));
    if is_total {
        table.pop();
    }
    table
}
