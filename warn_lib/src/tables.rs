//! HTML table extraction.
//!
//! Pages are parsed with `scraper`'s HTML5 tree builder, which never fails on
//! malformed markup: whatever tables and rows it can recognise are returned.
//! Government sites emit plenty of invalid HTML, so this leniency is part of
//! the contract. The only hard error is a selector that matches no table.

use scraper::{ElementRef, Html};

use crate::error::WarnError;
use crate::text::clean_text;

/// One row of cleaned cell strings.
pub type Row = Vec<String>;

/// The non-empty rows of one `<table>` element, in document order.
pub type Table = Vec<Row>;

/// Attribute filter for picking elements out of a parsed document.
///
/// `class` matches when any of the element's classes equals the value; `id`
/// matches by equality. Fields left as `None` impose no constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSelector {
    tag: String,
    class: Option<String>,
    id: Option<String>,
}

impl Default for ElementSelector {
    fn default() -> Self {
        Self::table()
    }
}

impl ElementSelector {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            class: None,
            id: None,
        }
    }

    /// Matches every `<table>`.
    pub fn table() -> Self {
        Self::new("table")
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.class = Some(class.to_string());
        self
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn matches(&self, element: &ElementRef<'_>) -> bool {
        let el = element.value();
        if el.name() != self.tag {
            return false;
        }
        if let Some(class) = &self.class {
            if !el.classes().any(|c| c == class) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if el.id() != Some(id.as_str()) {
                return false;
            }
        }
        true
    }
}

/// Walks `scope` and its descendants, yielding matching elements in document order.
pub fn select_within<'a>(
    scope: ElementRef<'a>,
    selector: &'a ElementSelector,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    scope
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(move |el| selector.matches(el))
}

/// Every element of `document` matching `selector`, in document order.
pub fn select_elements<'a>(
    document: &'a Html,
    selector: &'a ElementSelector,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    select_within(document.root_element(), selector)
}

/// Parses `html` and extracts every table matching `selector`.
///
/// Each descendant `tr` becomes a row of cleaned `td` texts, plus `th` texts
/// when `include_headers` is set. Rows whose cells are all blank are dropped.
///
/// Returns [`WarnError::NoTablesFound`] when no table matches.
pub fn parse_tables(
    html: &str,
    selector: &ElementSelector,
    include_headers: bool,
) -> Result<Vec<Table>, WarnError> {
    let document = Html::parse_document(html);
    let tables: Vec<Table> = select_elements(&document, selector)
        .map(|table| extract_rows(table, include_headers))
        .collect();

    if tables.is_empty() {
        return Err(WarnError::NoTablesFound);
    }

    tracing::debug!(
        "Parsed {} table(s) matching <{}>",
        tables.len(),
        selector.tag()
    );
    Ok(tables)
}

fn extract_rows(table: ElementRef<'_>, include_headers: bool) -> Table {
    let row_selector = ElementSelector::new("tr");
    select_within(table, &row_selector)
        .map(|tr| {
            tr.descendants()
                .filter_map(ElementRef::wrap)
                .filter(|el| is_cell(el, include_headers))
                .map(|cell| clean_text(cell.text().collect::<String>().as_str()))
                .collect::<Row>()
        })
        .filter(|row| row.iter().any(|cell| !cell.is_empty()))
        .collect()
}

fn is_cell(element: &ElementRef<'_>, include_headers: bool) -> bool {
    match element.value().name() {
        "td" => true,
        "th" => include_headers,
        _ => false,
    }
}
