use std::path::{Component, Path};

use crate::error::WarnError;
use crate::scrapers::STATES;

/// Normalizes a state code and checks that a scraper exists for it.
pub fn validate_state(input: &str) -> Result<&'static str, WarnError> {
    let code = input.trim().to_ascii_lowercase();
    STATES
        .iter()
        .copied()
        .find(|s| *s == code)
        .ok_or_else(|| {
            WarnError::InvalidInput(format!(
                "no scraper for state '{}'. Available: {}",
                input.trim(),
                STATES.join(", ")
            ))
        })
}

/// A cache key must be a non-empty relative path that stays below the cache root.
pub fn validate_cache_key(key: &str) -> Result<(), WarnError> {
    if key.trim().is_empty() {
        return Err(WarnError::InvalidInput("cache key is empty".into()));
    }
    let escapes = Path::new(key).components().any(|c| {
        matches!(
            c,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    });
    if escapes {
        return Err(WarnError::InvalidInput(format!(
            "cache key '{}' must be a relative path inside the cache",
            key
        )));
    }
    Ok(())
}
