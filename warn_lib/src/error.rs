//! Error types for the library layer.

use std::fmt;

use crate::fetch::FetchError;

/// Errors produced by the library layer: table extraction, the page cache,
/// CSV export, and the per-state scrapers built on top of them.
#[derive(Debug)]
pub enum WarnError {
    /// The selector matched zero `<table>` elements.
    NoTablesFound,
    /// A cache read was attempted for a key with no stored page.
    CacheMiss(String),
    /// An HTTP request failed.
    Fetch(FetchError),
    /// A filesystem operation failed.
    Io(std::io::Error),
    /// Writing CSV output failed.
    Csv(csv::Error),
    /// Caller-provided input failed validation (cache keys, state codes, URLs).
    InvalidInput(String),
    /// A page is missing structure a scraper depends on.
    PageStructure(String),
}

impl fmt::Display for WarnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTablesFound => write!(f, "No tables found"),
            Self::CacheMiss(key) => write!(f, "Cache miss: {}", key),
            Self::Fetch(e) => write!(f, "Fetch error: {}", e),
            Self::Io(e) => write!(f, "I/O error: {}", e),
            Self::Csv(e) => write!(f, "CSV error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::PageStructure(msg) => write!(f, "Unexpected page structure: {}", msg),
        }
    }
}

impl std::error::Error for WarnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Fetch(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FetchError> for WarnError {
    fn from(e: FetchError) -> Self {
        Self::Fetch(e)
    }
}

impl From<std::io::Error> for WarnError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<csv::Error> for WarnError {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e)
    }
}

impl From<url::ParseError> for WarnError {
    fn from(e: url::ParseError) -> Self {
        Self::InvalidInput(format!("invalid URL: {}", e))
    }
}
