//! Cache location and maintenance.

use hobart_data::{CsvCache, DataError};
use std::path::PathBuf;

/// Get the default cache directory path.
///
/// Uses platform-specific cache directories:
/// - Linux: `~/.cache/hobart/`
/// - macOS: `~/Library/Caches/hobart/`
/// - Windows: `%LOCALAPPDATA%\hobart\`
pub(crate) fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hobart")
}

/// Open the cache, creating the directory if needed.
pub(crate) fn open_cache() -> Result<CsvCache, DataError> {
    CsvCache::new(default_cache_dir())
}

/// Print where the cache lives and how many entries it holds.
pub(crate) fn print_cache_info(cache: &CsvCache) -> Result<(), DataError> {
    println!("Cache directory: {}", cache.root().display());
    println!("Cached entries:  {}", cache.len()?);
    Ok(())
}
