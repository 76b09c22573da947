//! Georgia. The search form returns one statewide list per year back to
//! 2002. The two most recent years still receive amendments, so only older
//! pages come from the cache.

use crate::error::WarnError;
use crate::tables::{parse_tables, ElementSelector, Row};

use super::{first_table, ScrapeContext, ScrapeOutput};

const BASE_URL: &str = "https://www.dol.state.ga.us/public/es/warn/searchwarns/list";
const FIRST_YEAR: i32 = 2002;
/// Statewide results.
const AREA: u32 = 9;

pub fn year_url(year: i32) -> String {
    format!("{}?geoArea={}&year={}&step=search", BASE_URL, AREA, year)
}

pub async fn scrape(ctx: &ScrapeContext) -> Result<ScrapeOutput, WarnError> {
    let selector = ElementSelector::table().with_id("emplrList");
    let mut rows: Vec<Row> = Vec::new();

    for (i, year) in (FIRST_YEAR..=ctx.current_year).rev().enumerate() {
        let key = format!("ga/{}.html", year);
        let html = ctx
            .fetch_cached(&key, &year_url(year), year < ctx.current_year - 1)
            .await?;

        // Every page repeats the header; keep the first one only.
        let table = first_table(parse_tables(&html, &selector, i == 0)?)?;
        rows.extend(table);
    }

    ctx.finish("ga", &rows)
}
