//! Output directory layout and environment overrides.

use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::WarnError;

/// Overrides the output root directory.
pub const OUTPUT_DIR_ENV: &str = "WARN_OUTPUT_DIR";
/// Sends every scraper request to this origin instead of the state's host.
pub const BASE_URL_ENV: &str = "WARN_BASE_URL";

const DEFAULT_DIR_NAME: &str = ".warn-scraper";
const CACHE_SUBDIR: &str = "cache";
const DATA_SUBDIR: &str = "exports";
const LOG_SUBDIR: &str = "logs";

/// Where scrapers read and write. Built once at startup and passed down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarnConfig {
    pub output_dir: PathBuf,
    pub cache_dir: PathBuf,
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
    pub base_url: Option<String>,
}

impl WarnConfig {
    /// Lays out the fixed `cache`, `exports` and `logs` subdirectories under `output_dir`.
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        let output_dir = output_dir.into();
        Self {
            cache_dir: output_dir.join(CACHE_SUBDIR),
            data_dir: output_dir.join(DATA_SUBDIR),
            log_dir: output_dir.join(LOG_SUBDIR),
            output_dir,
            base_url: None,
        }
    }

    /// Reads `WARN_OUTPUT_DIR` and `WARN_BASE_URL`, falling back to
    /// `~/.warn-scraper` for the output root.
    pub fn from_env() -> Result<Self, WarnError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, WarnError> {
        let output_dir = match lookup(OUTPUT_DIR_ENV).filter(|v| !v.trim().is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => default_output_dir()?,
        };
        let mut config = Self::with_output_dir(output_dir);
        config.base_url = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty());
        Ok(config)
    }

    pub fn with_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = dir.into();
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        self.base_url = base_url;
        self
    }

    /// Path of the log file inside `log_dir`.
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join("warn.log")
    }

    /// Creates only the log directory, for callers that may still redirect
    /// the cache or export directories.
    pub fn ensure_log_dir(&self) -> Result<(), WarnError> {
        create_directory(&self.log_dir)
    }

    /// Creates the cache, export and log directories.
    pub fn ensure_dirs(&self) -> Result<(), WarnError> {
        for dir in [&self.cache_dir, &self.data_dir, &self.log_dir] {
            create_directory(dir)?;
        }
        Ok(())
    }
}

fn default_output_dir() -> Result<PathBuf, WarnError> {
    let dirs = BaseDirs::new().ok_or_else(|| {
        WarnError::InvalidInput(format!(
            "could not determine a home directory; set {}",
            OUTPUT_DIR_ENV
        ))
    })?;
    Ok(dirs.home_dir().join(DEFAULT_DIR_NAME))
}

fn create_directory(dir: &Path) -> Result<(), WarnError> {
    if dir.exists() {
        return Ok(());
    }
    tracing::debug!("Creating directory at {}", dir.display());
    fs::create_dir_all(dir)?;
    Ok(())
}
