//! Indiana. Current notices and the archive live on separate pages with the
//! same columns; the archive's header row is skipped.

use crate::error::WarnError;
use crate::tables::{parse_tables, ElementSelector};

use super::{first_table, ScrapeContext, ScrapeOutput};

pub const LATEST_URL: &str = "https://www.in.gov/dwd/2567.htm";
pub const ARCHIVE_URL: &str = "https://www.in.gov/dwd/3125.htm";

pub async fn scrape(ctx: &ScrapeContext) -> Result<ScrapeOutput, WarnError> {
    let latest_html = ctx.fetch_cached("in/latest.html", LATEST_URL, false).await?;
    let mut rows = first_table(parse_tables(&latest_html, &ElementSelector::table(), true)?)?;

    let archive_html = ctx.fetch_cached("in/archive.html", ARCHIVE_URL, false).await?;
    rows.extend(first_table(parse_tables(
        &archive_html,
        &ElementSelector::table(),
        false,
    )?)?);

    ctx.finish("in", &rows)
}
