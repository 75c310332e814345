//! Price series assembly.
//!
//! Fetches the adjusted close history of every selected ticker and outer-joins
//! the series on date into a single table. A ticker whose fetch fails keeps an
//! all-null column; assembly never aborts for a single ticker.

use crate::cache::CsvCache;
use crate::error::Result;
use crate::model::{FetchOutcome, TickerResult};
use crate::source::{DateWindow, MarketDataSource};
use crate::throttle::{CancellationFlag, FetchConfig, FetchProgress, fetch_each};
use chrono::{DateTime, NaiveDate, Utc};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::{info, warn};

/// One daily observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Trading date
    pub date: NaiveDate,
    /// Split and dividend adjusted close
    pub adjusted_close: f64,
}

/// Date-ordered adjusted closes for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    /// Stock symbol
    pub symbol: String,
    /// Observations sorted by date, one per date
    pub points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series, sorting by date and dropping duplicate dates
    /// (last wins) and non-positive or non-finite prices.
    pub fn new(symbol: impl Into<String>, points: impl IntoIterator<Item = PricePoint>) -> Self {
        let by_date: BTreeMap<NaiveDate, f64> = points
            .into_iter()
            .filter(|p| p.adjusted_close.is_finite() && p.adjusted_close > 0.0)
            .map(|p| (p.date, p.adjusted_close))
            .collect();

        Self {
            symbol: symbol.into(),
            points: by_date
                .into_iter()
                .map(|(date, adjusted_close)| PricePoint {
                    date,
                    adjusted_close,
                })
                .collect(),
        }
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no observations.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Most recent adjusted close.
    pub fn latest(&self) -> Option<f64> {
        self.points.last().map(|p| p.adjusted_close)
    }

    /// Simple return from the first to the last observation.
    pub fn total_return(&self) -> Option<f64> {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.points.len() > 1 => {
                Some(last.adjusted_close / first.adjusted_close - 1.0)
            }
            _ => None,
        }
    }
}

/// Outer-joined, date-indexed adjusted closes with one column per ticker.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTable {
    dates: Vec<NaiveDate>,
    symbols: Vec<String>,
    columns: Vec<Vec<Option<f64>>>,
}

impl PriceTable {
    /// Outer-join series on date. `None` marks a failed ticker, which keeps
    /// an all-null column at its position.
    pub fn outer_join(series: Vec<(String, Option<PriceSeries>)>) -> Self {
        let mut dates: Vec<NaiveDate> = series
            .iter()
            .filter_map(|(_, s)| s.as_ref())
            .flat_map(|s| s.points.iter().map(|p| p.date))
            .collect();
        dates.sort_unstable();
        dates.dedup();

        let row_of: HashMap<NaiveDate, usize> =
            dates.iter().enumerate().map(|(i, d)| (*d, i)).collect();

        let mut symbols = Vec::with_capacity(series.len());
        let mut columns = Vec::with_capacity(series.len());
        for (symbol, maybe_series) in series {
            let mut column = vec![None; dates.len()];
            if let Some(s) = maybe_series {
                for point in &s.points {
                    column[row_of[&point.date]] = Some(point.adjusted_close);
                }
            }
            symbols.push(symbol);
            columns.push(column);
        }

        Self {
            dates,
            symbols,
            columns,
        }
    }

    /// Row index.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Column names, in selection order.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Number of dates.
    pub fn height(&self) -> usize {
        self.dates.len()
    }

    /// Number of tickers.
    pub fn width(&self) -> usize {
        self.symbols.len()
    }

    /// Column for a symbol.
    pub fn column(&self, symbol: &str) -> Option<&[Option<f64>]> {
        self.symbols
            .iter()
            .position(|s| s == symbol)
            .map(|i| self.columns[i].as_slice())
    }

    /// Iterate `(symbol, column)` pairs.
    pub fn iter_columns(&self) -> impl Iterator<Item = (&str, &[Option<f64>])> {
        self.symbols
            .iter()
            .map(String::as_str)
            .zip(self.columns.iter().map(Vec::as_slice))
    }

    /// Symbols whose column holds no value at all.
    pub fn empty_symbols(&self) -> Vec<&str> {
        self.iter_columns()
            .filter(|(_, c)| c.iter().all(Option::is_none))
            .map(|(s, _)| s)
            .collect()
    }

    /// Last non-null price of every non-empty column, in column order.
    pub fn latest_prices(&self) -> Vec<(String, f64)> {
        self.iter_columns()
            .filter_map(|(s, c)| c.iter().rev().find_map(|v| *v).map(|p| (s.to_string(), p)))
            .collect()
    }

    /// Convert to a polars frame with a `date` column followed by one
    /// Float64 column per ticker.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let epoch = DateTime::<Utc>::UNIX_EPOCH.date_naive();
        let days: Vec<i32> = self
            .dates
            .iter()
            .map(|d| (*d - epoch).num_days() as i32)
            .collect();

        let mut columns: Vec<Column> = Vec::with_capacity(self.width() + 1);
        columns.push(
            Series::new("date".into(), days)
                .cast(&DataType::Date)?
                .into(),
        );
        for (symbol, values) in self.iter_columns() {
            columns.push(Series::new(symbol.into(), values.to_vec()).into());
        }

        Ok(DataFrame::new(columns)?)
    }
}

/// Result of assembling prices for a selection.
#[derive(Debug, Clone)]
pub struct PriceAssembly {
    /// The joined table, one column per requested symbol
    pub table: PriceTable,
    /// Symbols whose fetch failed, with the reason
    pub failures: Vec<(String, String)>,
}

impl PriceAssembly {
    /// Number of tickers whose fetch failed.
    pub fn failed_count(&self) -> usize {
        self.failures.len()
    }
}

/// Assembles the price table for the selected tickers.
#[derive(Debug, Clone, Default)]
pub struct PriceAssembler {
    config: FetchConfig,
}

impl PriceAssembler {
    /// Create an assembler with the given fetch policy.
    pub const fn new(config: FetchConfig) -> Self {
        Self { config }
    }

    /// Fetch policy in use.
    pub const fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Fetch and join the series of every symbol over `window`.
    ///
    /// Cached series are used when a cache is given and holds the exact
    /// window; freshly fetched series are written back. Only cancellation
    /// aborts the assembly.
    pub async fn assemble<S: MarketDataSource>(
        &self,
        source: &S,
        symbols: &[String],
        window: &DateWindow,
        cache: Option<&CsvCache>,
        cancel: &CancellationFlag,
        progress: &dyn FetchProgress,
    ) -> Result<PriceAssembly> {
        let mut cached: HashMap<String, PriceSeries> = HashMap::new();
        if let Some(cache) = cache {
            for symbol in symbols {
                if let Ok(Some(series)) = cache.get_series(symbol, window) {
                    cached.insert(symbol.clone(), series);
                }
            }
        }

        let to_fetch: Vec<String> = symbols
            .iter()
            .filter(|s| !cached.contains_key(*s))
            .cloned()
            .collect();

        info!(
            total = symbols.len(),
            cached = cached.len(),
            fetching = to_fetch.len(),
            "assembling price series"
        );

        let fetched = fetch_each(&to_fetch, &self.config, cancel, progress, |symbol| async move {
            source.fetch_adjusted_closes(&symbol, window).await
        })
        .await?;

        let mut fetched: HashMap<String, FetchOutcome<PriceSeries>> = fetched
            .into_iter()
            .map(|TickerResult { symbol, outcome }| (symbol, outcome))
            .collect();

        let mut failures = Vec::new();
        let mut joined = Vec::with_capacity(symbols.len());
        for symbol in symbols {
            let series = if let Some(series) = cached.remove(symbol) {
                Some(series)
            } else {
                match fetched.remove(symbol) {
                    Some(FetchOutcome::Fetched(series)) => {
                        if let Some(cache) = cache
                            && let Err(e) = cache.put_series(&series, window)
                        {
                            warn!(symbol = %symbol, error = %e, "failed to cache prices");
                        }
                        Some(series)
                    }
                    Some(FetchOutcome::Failed { reason }) => {
                        failures.push((symbol.clone(), reason));
                        None
                    }
                    None => {
                        failures.push((symbol.clone(), "not fetched".to_string()));
                        None
                    }
                }
            };
            joined.push((symbol.clone(), series));
        }

        if !failures.is_empty() {
            warn!(failed = failures.len(), "some price series could not be fetched");
        }

        Ok(PriceAssembly {
            table: PriceTable::outer_join(joined),
            failures,
        })
    }
}
