//! Plain CSV files keyed by symbol and date.
//!
//! Layout under the cache root:
//!
//! ```text
//! fundamentals/<YYYY-MM-DD>/<SYMBOL>.csv    attribute,value
//! prices/<START>_<END>/<SYMBOL>.csv         date,adjusted_close
//! ```
//!
//! The format is unversioned; unreadable files are treated as misses by
//! callers. Entries only serve the day they were written for:
//! [`CsvCache::prune_stale`] drops every other day's directory.

use crate::error::{DataError, Result};
use crate::model::{Attribute, FundamentalsRecord};
use crate::prices::{PricePoint, PriceSeries};
use crate::source::DateWindow;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
struct AttributeRow {
    attribute: String,
    value: Option<f64>,
}

/// File-backed cache for fundamentals and price series.
#[derive(Debug, Clone)]
pub struct CsvCache {
    root: PathBuf,
}

impl CsvCache {
    /// Open a cache rooted at `root`, creating the directory if needed.
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Cache root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn fundamentals_path(&self, symbol: &str, as_of: NaiveDate) -> PathBuf {
        self.root
            .join("fundamentals")
            .join(as_of.format("%Y-%m-%d").to_string())
            .join(file_name(symbol))
    }

    fn series_path(&self, symbol: &str, window: &DateWindow) -> PathBuf {
        self.root
            .join("prices")
            .join(format!(
                "{}_{}",
                window.start_date().format("%Y-%m-%d"),
                window.end_date().format("%Y-%m-%d")
            ))
            .join(file_name(symbol))
    }

    /// Fundamentals cached for `symbol` on `as_of`.
    pub fn get_fundamentals(
        &self,
        symbol: &str,
        as_of: NaiveDate,
    ) -> Result<Option<FundamentalsRecord>> {
        let path = self.fundamentals_path(symbol, as_of);
        if !path.exists() {
            return Ok(None);
        }

        let mut record = FundamentalsRecord::new(symbol);
        let mut reader = csv::Reader::from_path(&path)?;
        for row in reader.deserialize::<AttributeRow>() {
            let row = row?;
            let attribute = Attribute::from_column(&row.attribute).ok_or_else(|| {
                DataError::Cache(format!("unknown attribute {} in {}", row.attribute, path.display()))
            })?;
            record.set(attribute, row.value);
        }
        Ok(Some(record))
    }

    /// Store fundamentals for `as_of`.
    pub fn put_fundamentals(&self, record: &FundamentalsRecord, as_of: NaiveDate) -> Result<()> {
        let path = self.fundamentals_path(&record.symbol, as_of);
        let mut writer = csv::Writer::from_path(prepare(&path)?)?;
        for attribute in Attribute::ALL {
            writer.serialize(AttributeRow {
                attribute: attribute.column().to_string(),
                value: record.get(attribute),
            })?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Price series cached for `symbol` over exactly `window`.
    pub fn get_series(&self, symbol: &str, window: &DateWindow) -> Result<Option<PriceSeries>> {
        let path = self.series_path(symbol, window);
        if !path.exists() {
            return Ok(None);
        }

        let mut reader = csv::Reader::from_path(&path)?;
        let points = reader
            .deserialize::<PricePoint>()
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Some(PriceSeries::new(symbol, points)))
    }

    /// Store a price series for `window`.
    pub fn put_series(&self, series: &PriceSeries, window: &DateWindow) -> Result<()> {
        let path = self.series_path(&series.symbol, window);
        let mut writer = csv::Writer::from_path(prepare(&path)?)?;
        for point in &series.points {
            writer.serialize(point)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Remove every cached file. Returns the number of files removed.
    pub fn clear(&self) -> Result<usize> {
        let removed = count_files(&self.root)?;
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.is_dir() {
                fs::remove_dir_all(&path)?;
            } else {
                fs::remove_file(&path)?;
            }
        }
        Ok(removed)
    }

    /// Remove fundamentals not dated `as_of` and price series whose window
    /// does not end on `as_of`. Directories whose name is not a recognised
    /// date key are removed too. Returns the number of files removed.
    pub fn prune_stale(&self, as_of: NaiveDate) -> Result<usize> {
        let fundamentals = prune_dirs(&self.root.join("fundamentals"), |name| {
            parse_date(name) == Some(as_of)
        })?;
        let prices = prune_dirs(&self.root.join("prices"), |name| {
            name.split_once('_')
                .and_then(|(start, end)| parse_date(start).and(parse_date(end)))
                == Some(as_of)
        })?;
        Ok(fundamentals + prices)
    }

    /// Number of cached files.
    pub fn len(&self) -> Result<usize> {
        count_files(&self.root)
    }

    /// Whether the cache holds no files.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

fn file_name(symbol: &str) -> String {
    let safe: String = symbol
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '.' { c } else { '_' })
        .collect();
    format!("{}.csv", safe.to_uppercase())
}

fn prepare(path: &Path) -> Result<&Path> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(path)
}

fn parse_date(name: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(name, "%Y-%m-%d").ok()
}

fn prune_dirs(dir: &Path, keep: impl Fn(&str) -> bool) -> Result<usize> {
    if !dir.is_dir() {
        return Ok(0);
    }
    let mut removed = 0;
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        if keep(name) {
            continue;
        }
        if path.is_dir() {
            removed += count_files(&path)?;
            fs::remove_dir_all(&path)?;
        } else {
            removed += 1;
            fs::remove_file(&path)?;
        }
    }
    Ok(removed)
}

fn count_files(dir: &Path) -> Result<usize> {
    let mut count = 0;
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            count += count_files(&path)?;
        } else {
            count += 1;
        }
    }
    Ok(count)
}
