//! Maryland. The landing page links to one page per year (`<a class="sub">`),
//! each holding a single notice table.

use scraper::Html;
use url::Url;

use crate::error::WarnError;
use crate::tables::{parse_tables, select_elements, ElementSelector, Row};

use super::{first_table, ScrapeContext, ScrapeOutput};

pub const SOURCE_URL: &str = "http://www.dllr.state.md.us/employment/warn.shtml";

pub async fn scrape(ctx: &ScrapeContext) -> Result<ScrapeOutput, WarnError> {
    let html = ctx.fetch_utf8("md/source.html", SOURCE_URL).await?;
    let pages = year_page_urls(&html, SOURCE_URL)?;
    if pages.is_empty() {
        return Err(WarnError::PageStructure(
            "md: no year links found on the landing page".into(),
        ));
    }

    let mut rows: Vec<Row> = Vec::new();
    for (i, url) in pages.iter().enumerate() {
        let key = format!("md/{}.html", page_name(url));
        let page = ctx.fetch_utf8(&key, url.as_str()).await?;
        let table = first_table(parse_tables(&page, &ElementSelector::table(), i == 0)?)?;
        rows.extend(table);
    }

    ctx.finish("md", &rows)
}

/// Absolute URLs of every `<a class="sub">` link, in page order.
fn year_page_urls(html: &str, page_url: &str) -> Result<Vec<Url>, WarnError> {
    let base = Url::parse(page_url)?;
    let document = Html::parse_document(html);
    let selector = ElementSelector::new("a").with_class("sub");
    select_elements(&document, &selector)
        .filter_map(|a| a.value().attr("href"))
        .map(|href| base.join(href.trim()).map_err(WarnError::from))
        .collect()
}

fn page_name(url: &Url) -> String {
    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|name| !name.is_empty())
        .unwrap_or("index")
        .to_string()
}
