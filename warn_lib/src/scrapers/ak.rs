//! Alaska.

use crate::error::WarnError;
use crate::tables::{parse_tables, ElementSelector};

use super::{first_table, ScrapeContext, ScrapeOutput};

pub const SOURCE_URL: &str = "https://jobs.alaska.gov/RR/WARN_notices.htm";

pub async fn scrape(ctx: &ScrapeContext) -> Result<ScrapeOutput, WarnError> {
    // The page mis-declares its charset; dashes and apostrophes only survive as UTF-8.
    let html = ctx.fetch_utf8("ak/source.html", SOURCE_URL).await?;
    let rows = first_table(parse_tables(&html, &ElementSelector::table(), true)?)?;
    ctx.finish("ak", &rows)
}
