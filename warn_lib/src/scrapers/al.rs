//! Alabama. The list ends with a few lines of notes that sit inside the
//! table; real notices always start with "Closing" or "Layoff".

use regex::Regex;

use crate::error::WarnError;
use crate::tables::{parse_tables, ElementSelector, Row};

use super::{first_table, ScrapeContext, ScrapeOutput};

pub const SOURCE_URL: &str = "https://www.madeinalabama.com/warn-list/";

pub async fn scrape(ctx: &ScrapeContext) -> Result<ScrapeOutput, WarnError> {
    let html = ctx.fetch_cached("al/source.html", SOURCE_URL, false).await?;
    let table = first_table(parse_tables(&html, &ElementSelector::table(), true)?)?;

    let total = table.len();
    let rows = notice_rows(table)?;
    if rows.len() != total {
        tracing::warn!("al: discarded {} dirty data row(s)", total - rows.len());
    }

    ctx.finish("al", &rows)
}

fn notice_rows(rows: Vec<Row>) -> Result<Vec<Row>, WarnError> {
    let notice_type = Regex::new(r"(?i)^(clos|lay)")
        .map_err(|e| WarnError::InvalidInput(format!("regex compile error: {}", e)))?;
    Ok(rows
        .into_iter()
        .filter(|row| row.first().is_some_and(|c| notice_type.is_match(c)))
        .collect())
}
