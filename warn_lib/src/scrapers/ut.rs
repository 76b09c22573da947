//! Utah. Notices are split over several tables on one page.

use crate::error::WarnError;
use crate::tables::{parse_tables, ElementSelector};

use super::{ScrapeContext, ScrapeOutput};

pub const SOURCE_URL: &str = "https://jobs.utah.gov/employer/business/warnnotices.html";

pub async fn scrape(ctx: &ScrapeContext) -> Result<ScrapeOutput, WarnError> {
    let html = ctx.fetch_cached("ut/source.html", SOURCE_URL, false).await?;
    let rows: Vec<_> = parse_tables(&html, &ElementSelector::table(), true)?
        .into_iter()
        .flatten()
        .collect();
    ctx.finish("ut", &rows)
}
