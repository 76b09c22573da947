//! Connecticut. One page per year since 2015, each a Word export whose
//! notice table has nine columns. The 2016 page repeats some cells, which
//! shows up as rows with more than nine cells.

use crate::error::WarnError;
use crate::tables::{parse_tables, ElementSelector, Row};

use super::{ScrapeContext, ScrapeOutput};

const FIRST_YEAR: i32 = 2015;
const COLUMNS: usize = 9;

pub const HEADER: [&str; COLUMNS] = [
    "warn_date",
    "affected_company",
    "layoff_location",
    "number_workers",
    "layoff_date",
    "closing",
    "closing_date",
    "union",
    "union_address",
];

pub fn year_url(year: i32) -> String {
    format!(
        "https://www.ctdol.state.ct.us/progsupt/bussrvce/warnreports/warn{}.htm",
        year
    )
}

pub async fn scrape(ctx: &ScrapeContext) -> Result<ScrapeOutput, WarnError> {
    let mut rows: Vec<Row> = vec![HEADER.iter().map(|h| h.to_string()).collect()];

    for year in FIRST_YEAR..=ctx.current_year {
        let key = format!("ct/{}.html", year);
        let html = ctx
            .fetch_cached(&key, &year_url(year), year < ctx.current_year)
            .await?;

        let selector = ElementSelector::table().with_class(table_class(year));
        for table in parse_tables(&html, &selector, false)? {
            rows.extend(table.into_iter().filter_map(normalize_row));
        }
    }

    ctx.finish("ct", &rows)
}

fn table_class(year: i32) -> &'static str {
    if year == 2016 {
        "style15"
    } else {
        "MsoTableNormal"
    }
}

/// Short rows are incomplete and dropped; long rows get repeated cells merged.
fn normalize_row(cells: Row) -> Option<Row> {
    match cells.len() {
        n if n < COLUMNS => None,
        n if n > COLUMNS => Some(merge_repeated_cells(cells)),
        _ => Some(cells),
    }
}

/// Drops each cell that repeats the one before it.
fn merge_repeated_cells(mut cells: Row) -> Row {
    cells.dedup();
    cells
}
