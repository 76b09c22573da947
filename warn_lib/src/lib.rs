//! Library layer for the WARN notice scraper: page cache, HTML table
//! extraction, CSV export, and one scraper per state.
//!
//! Every scraper follows the same path: fetch (or read from [`PageCache`])
//! one or more pages, pull rows out with [`parse_tables`], apply the cleanup
//! that state needs, and write the result with [`write_rows_to_csv`].

pub mod cache;
pub mod config;
pub mod error;
pub mod export;
pub mod fetch;
pub mod scrapers;
pub mod tables;
pub mod text;
pub mod validation;

pub use cache::PageCache;
pub use config::WarnConfig;
pub use error::WarnError;
pub use export::write_rows_to_csv;
pub use fetch::{FetchClient, FetchError};
pub use scrapers::{all_scrapers, scrape, ScrapeContext, ScrapeOutput};
pub use tables::{parse_tables, ElementSelector, Row, Table};
pub use text::clean_text;
