//! South Dakota.

use crate::error::WarnError;
use crate::tables::{parse_tables, ElementSelector};

use super::{first_table, ScrapeContext, ScrapeOutput};

pub const SOURCE_URL: &str = "https://dlr.sd.gov/workforce_services/businesses/warn_notices.aspx";

pub async fn scrape(ctx: &ScrapeContext) -> Result<ScrapeOutput, WarnError> {
    let html = ctx.fetch_cached("sd/source.html", SOURCE_URL, false).await?;
    let rows = first_table(parse_tables(&html, &ElementSelector::table(), true)?)?;
    ctx.finish("sd", &rows)
}
