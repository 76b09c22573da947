//! One scraper per state. Each fetches its source pages (through the page
//! cache where the data is historical), extracts the notice tables, applies
//! the cleanup that state's pages need, and writes `<data_dir>/<state>.csv`.

use std::path::PathBuf;

use chrono::{Datelike, Local};
use url::Url;

use crate::cache::PageCache;
use crate::config::WarnConfig;
use crate::error::WarnError;
use crate::export::write_rows_to_csv;
use crate::fetch::FetchClient;
use crate::tables::{Row, Table};
use crate::validation::validate_state;

pub mod ak;
pub mod al;
pub mod ct;
pub mod ga;
pub mod r#in;
pub mod md;
pub mod mo;
pub mod sd;
pub mod ut;
pub mod wa;
pub mod wi;

/// Postal codes of every state with a scraper, sorted.
pub const STATES: &[&str] = &["ak", "al", "ct", "ga", "in", "md", "mo", "sd", "ut", "wa", "wi"];

/// Everything a scraper needs for one run.
pub struct ScrapeContext {
    pub client: FetchClient,
    pub cache: PageCache,
    pub data_dir: PathBuf,
    /// Decides which yearly pages are old enough to trust from the cache.
    pub current_year: i32,
    base_url: Option<Url>,
}

/// What a finished scraper produced.
#[derive(Debug, Clone)]
pub struct ScrapeOutput {
    pub state: &'static str,
    pub path: PathBuf,
    pub rows: usize,
}

impl ScrapeContext {
    pub fn new(config: &WarnConfig) -> Result<Self, WarnError> {
        let base_url = config
            .base_url
            .as_deref()
            .map(Url::parse)
            .transpose()?;
        Ok(Self {
            client: FetchClient::new()?,
            cache: PageCache::new(&config.cache_dir),
            data_dir: config.data_dir.clone(),
            current_year: Local::now().year(),
            base_url,
        })
    }

    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = year;
        self
    }

    /// Points `url` at the configured base URL, keeping its path and query.
    /// Without a base URL the address is returned unchanged.
    pub fn resolve_url(&self, url: &str) -> Result<String, WarnError> {
        let Some(base) = &self.base_url else {
            return Ok(url.to_string());
        };
        let source = Url::parse(url)?;
        let mut target = base.clone();
        target.set_path(source.path());
        target.set_query(source.query());
        Ok(target.into())
    }

    /// Where `state`'s CSV is written.
    pub fn data_path(&self, state: &str) -> PathBuf {
        self.data_dir.join(format!("{}.csv", state))
    }

    /// Returns the page body, from the cache when `trust_cache` holds and a
    /// copy exists, otherwise fetched live with `client` and cached under `key`.
    pub(crate) async fn fetch_cached_with(
        &self,
        client: &FetchClient,
        key: &str,
        url: &str,
        trust_cache: bool,
    ) -> Result<String, WarnError> {
        if trust_cache && self.cache.exists(key) {
            tracing::debug!("Using cached page {}", key);
            return self.cache.read(key);
        }
        let html = client.get(&self.resolve_url(url)?).await?;
        self.cache.write(key, &html)?;
        Ok(html)
    }

    pub(crate) async fn fetch_cached(
        &self,
        key: &str,
        url: &str,
        trust_cache: bool,
    ) -> Result<String, WarnError> {
        self.fetch_cached_with(&self.client, key, url, trust_cache)
            .await
    }

    /// Fetches `url` live, decoded as UTF-8, and always refreshes the cache copy.
    pub(crate) async fn fetch_utf8(&self, key: &str, url: &str) -> Result<String, WarnError> {
        let html = self.client.get_utf8(&self.resolve_url(url)?).await?;
        self.cache.write(key, &html)?;
        Ok(html)
    }

    pub(crate) fn finish(
        &self,
        state: &'static str,
        rows: &[Row],
    ) -> Result<ScrapeOutput, WarnError> {
        let path = self.data_path(state);
        write_rows_to_csv(&path, rows)?;
        tracing::info!("{}: wrote {} rows to {}", state, rows.len(), path.display());
        Ok(ScrapeOutput {
            state,
            path,
            rows: rows.len(),
        })
    }
}

/// All scrapers, sorted by postal code.
pub fn all_scrapers() -> Vec<&'static str> {
    STATES.to_vec()
}

/// Runs the scraper for `state`.
pub async fn scrape(state: &str, ctx: &ScrapeContext) -> Result<ScrapeOutput, WarnError> {
    match validate_state(state)? {
        "ak" => ak::scrape(ctx).await,
        "al" => al::scrape(ctx).await,
        "ct" => ct::scrape(ctx).await,
        "ga" => ga::scrape(ctx).await,
        "in" => r#in::scrape(ctx).await,
        "md" => md::scrape(ctx).await,
        "mo" => mo::scrape(ctx).await,
        "sd" => sd::scrape(ctx).await,
        "ut" => ut::scrape(ctx).await,
        "wa" => wa::scrape(ctx).await,
        "wi" => wi::scrape(ctx).await,
        other => Err(WarnError::InvalidInput(format!(
            "no scraper registered for '{}'",
            other
        ))),
    }
}

/// The first table of a page, which is where most states put their notices.
pub(crate) fn first_table(mut tables: Vec<Table>) -> Result<Table, WarnError> {
    if tables.is_empty() {
        return Err(WarnError::NoTablesFound);
    }
    Ok(tables.swap_remove(0))
}
