pub mod list;
pub mod scrape;
