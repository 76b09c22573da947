//! File-backed cache of raw page bodies.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::WarnError;
use crate::validation::validate_cache_key;

/// Stores fetched pages under `<root>/<key>`.
///
/// Keys are relative paths such as `"wi/2021.html"`; `/` separates
/// directories. There is no expiry: callers decide when a cached page is
/// still trustworthy (usually "it belongs to a past year").
#[derive(Debug, Clone)]
pub struct PageCache {
    root: PathBuf,
}

impl PageCache {
    /// Creates a cache rooted at `root`. The directory is created lazily on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the on-disk path for `key`.
    pub fn path(&self, key: &str) -> Result<PathBuf, WarnError> {
        validate_cache_key(key)?;
        Ok(self.root.join(key))
    }

    /// Returns `true` if a page is stored under `key`. Unusable keys are never present.
    pub fn exists(&self, key: &str) -> bool {
        self.path(key).map(|p| p.is_file()).unwrap_or(false)
    }

    /// Returns the page stored under `key`, or [`WarnError::CacheMiss`].
    pub fn read(&self, key: &str) -> Result<String, WarnError> {
        let path = self.path(key)?;
        if !path.is_file() {
            return Err(WarnError::CacheMiss(key.to_string()));
        }
        tracing::debug!("Reading from cache {}", path.display());
        Ok(fs::read_to_string(path)?)
    }

    /// Stores `body` under `key`, overwriting any previous page, and returns
    /// the file path. Intermediate directories are created as needed.
    pub fn write(&self, key: &str, body: &str) -> Result<PathBuf, WarnError> {
        let path = self.path(key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        tracing::debug!("Writing to cache {}", path.display());
        fs::write(&path, body)?;
        Ok(path)
    }

    /// Removes every page stored under the `prefix` directory. Returns
    /// `false` when there was nothing to remove.
    pub fn delete_namespace(&self, prefix: &str) -> Result<bool, WarnError> {
        let dir = self.path(prefix)?;
        if !dir.exists() {
            return Ok(false);
        }
        tracing::debug!("Deleting cached pages under {}", dir.display());
        if dir.is_dir() {
            fs::remove_dir_all(&dir)?;
        } else {
            fs::remove_file(&dir)?;
        }
        Ok(true)
    }
}
