//! Washington. The search page is an ASP.NET GridView: the first page is a
//! plain GET, later pages are form postbacks that echo the page's
//! `__VIEWSTATE` and `__EVENTVALIDATION` fields. When results span several
//! pages, a pager of page links is rendered above and below the grid.

use scraper::Html;

use crate::error::WarnError;
use crate::fetch::FetchClient;
use crate::tables::{parse_tables, select_elements, ElementSelector, Row, Table};

use super::{first_table, ScrapeContext, ScrapeOutput};

pub const SOURCE_URL: &str = "https://fortress.wa.gov/esd/file/warn/Public/SearchWARN.aspx";

/// The site turns away the default client name.
const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:68.0) Gecko/20100101 Firefox/68.0";

const GRID_TARGET: &str = "ucPSW$gvMain";
const MAX_PAGES: u32 = 1000;

pub async fn scrape(ctx: &ScrapeContext) -> Result<ScrapeOutput, WarnError> {
    // Postbacks only validate within the session that served the form.
    let session = FetchClient::with_user_agent(BROWSER_USER_AGENT)?;
    let url = ctx.resolve_url(SOURCE_URL)?;

    let mut html = ctx
        .fetch_cached_with(&session, "wa/source.html", SOURCE_URL, false)
        .await?;
    let first_page = first_table(parse_tables(&html, &ElementSelector::table(), true)?)?;
    let mut previous = grid_rows(first_page);
    if previous.is_empty() {
        return Err(WarnError::PageStructure("wa: search grid has no rows".into()));
    }
    let mut rows = previous.clone();

    for page in 2..=MAX_PAGES {
        let Some(form) = postback_form(&html, page) else {
            tracing::debug!("wa: no postback state on page {}, stopping", page - 1);
            break;
        };
        html = match session.post_form(&url, &form).await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!("wa: page {} request failed ({}), stopping", page, e);
                break;
            }
        };
        ctx.cache.write(&format!("wa/{}.html", page), &html)?;

        let Ok(tables) = parse_tables(&html, &ElementSelector::table(), true) else {
            break;
        };
        let current = grid_rows(first_table(tables)?);
        // Past the last page the grid either empties or serves the same rows again.
        if current.len() <= 1 || current == previous {
            break;
        }
        rows.extend(current.iter().skip(1).cloned());
        previous = current;
    }

    ctx.finish("wa", &rows)
}

/// The header and data rows of one grid page, with any pager rows at either
/// end removed.
fn grid_rows(table: Table) -> Vec<Row> {
    let leading = table.iter().take_while(|row| is_pager_row(row)).count();
    let trailing = table[leading..]
        .iter()
        .rev()
        .take_while(|row| is_pager_row(row))
        .count();
    let keep = table.len() - leading - trailing;
    table.into_iter().skip(leading).take(keep).collect()
}

/// Pager rows hold nothing but page numbers and "..." links.
fn is_pager_row(row: &Row) -> bool {
    row.iter().all(|cell| {
        cell.chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace() || c == '.')
    })
}

/// Form fields asking the grid for `page`, or `None` when the page carries no
/// postback state.
fn postback_form(html: &str, page: u32) -> Option<Vec<(String, String)>> {
    let document = Html::parse_document(html);
    let view_state = hidden_input(&document, "__VIEWSTATE")?;
    let event_validation = hidden_input(&document, "__EVENTVALIDATION")?;
    Some(vec![
        ("__EVENTTARGET".to_string(), GRID_TARGET.to_string()),
        ("__EVENTARGUMENT".to_string(), format!("Page${}", page)),
        ("__VIEWSTATE".to_string(), view_state),
        ("__EVENTVALIDATION".to_string(), event_validation),
    ])
}

fn hidden_input(document: &Html, name: &str) -> Option<String> {
    let selector = ElementSelector::new("input");
    let value = select_elements(document, &selector)
        .find(|input| input.value().attr("name") == Some(name))
        .and_then(|input| input.value().attr("value"))
        .map(|value| value.to_string());
    value
}
