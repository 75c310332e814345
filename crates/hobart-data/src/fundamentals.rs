//! Universe-wide fundamentals fetching.

use crate::cache::CsvCache;
use crate::error::{DataError, Result};
use crate::model::{Attribute, FetchOutcome, FundamentalsRecord, TickerResult};
use crate::source::{DateWindow, MarketDataSource};
use crate::throttle::{CancellationFlag, FetchConfig, FetchProgress, fetch_each};
use polars::prelude::*;
use std::collections::HashMap;
use tracing::{info, warn};

/// Fundamentals for a universe, with the tickers that could not be fetched.
#[derive(Debug, Clone, Default)]
pub struct FundamentalsBatch {
    records: Vec<FundamentalsRecord>,
    /// Symbols whose fetch failed, with the reason
    pub failures: Vec<(String, String)>,
}

impl FundamentalsBatch {
    /// Build a batch from fetched records and failures.
    pub const fn new(records: Vec<FundamentalsRecord>, failures: Vec<(String, String)>) -> Self {
        Self { records, failures }
    }

    /// Fetched records, in universe order.
    pub fn records(&self) -> &[FundamentalsRecord] {
        &self.records
    }

    /// Take the fetched records.
    pub fn into_records(self) -> Vec<FundamentalsRecord> {
        self.records
    }

    /// Number of tickers whose fetch failed.
    pub fn failed_count(&self) -> usize {
        self.failures.len()
    }
}

/// Fetches fundamentals for every constituent of a universe.
#[derive(Debug, Clone, Default)]
pub struct FundamentalsFetcher {
    config: FetchConfig,
}

impl FundamentalsFetcher {
    /// Create a fetcher with the given fetch policy.
    pub const fn new(config: FetchConfig) -> Self {
        Self { config }
    }

    /// Fetch every symbol, consulting the cache for `window`'s end date first.
    ///
    /// Per-ticker failures are collected in the batch. A batch in which no
    /// ticker produced data is an error.
    pub async fn fetch_universe<S: MarketDataSource>(
        &self,
        source: &S,
        symbols: &[String],
        window: &DateWindow,
        cache: Option<&CsvCache>,
        cancel: &CancellationFlag,
        progress: &dyn FetchProgress,
    ) -> Result<FundamentalsBatch> {
        let as_of = window.end_date();

        let mut cached: HashMap<String, FundamentalsRecord> = HashMap::new();
        if let Some(cache) = cache {
            for symbol in symbols {
                match cache.get_fundamentals(symbol, as_of) {
                    Ok(Some(record)) => {
                        cached.insert(symbol.clone(), record);
                    }
                    Ok(None) => {}
                    Err(e) => warn!(symbol = %symbol, error = %e, "ignoring unreadable cache entry"),
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
            "fetching fundamentals"
        );

        let fetched = fetch_each(&to_fetch, &self.config, cancel, progress, |symbol| async move {
            source.fetch_fundamentals(&symbol).await
        })
        .await?;

        let mut fetched: HashMap<String, FetchOutcome<FundamentalsRecord>> = fetched
            .into_iter()
            .map(|TickerResult { symbol, outcome }| (symbol, outcome))
            .collect();

        let mut records = Vec::with_capacity(symbols.len());
        let mut failures = Vec::new();
        for symbol in symbols {
            if let Some(record) = cached.remove(symbol) {
                records.push(record);
                continue;
            }
            match fetched.remove(symbol) {
                Some(FetchOutcome::Fetched(record)) => {
                    if let Some(cache) = cache
                        && let Err(e) = cache.put_fundamentals(&record, as_of)
                    {
                        warn!(symbol = %symbol, error = %e, "failed to cache fundamentals");
                    }
                    records.push(record);
                }
                Some(FetchOutcome::Failed { reason }) => failures.push((symbol.clone(), reason)),
                None => failures.push((symbol.clone(), "not fetched".to_string())),
            }
        }

        if records.is_empty() {
            return Err(DataError::EmptyBatch {
                attempted: symbols.len(),
            });
        }
        if !failures.is_empty() {
            warn!(failed = failures.len(), "some fundamentals could not be fetched");
        }

        Ok(FundamentalsBatch::new(records, failures))
    }
}

/// Build a frame with a `symbol` column and one Float64 column per attribute.
pub fn records_to_dataframe(records: &[FundamentalsRecord]) -> Result<DataFrame> {
    let mut columns: Vec<Column> = Vec::with_capacity(Attribute::COUNT + 1);
    columns.push(
        Series::new(
            "symbol".into(),
            records.iter().map(|r| r.symbol.as_str()).collect::<Vec<_>>(),
        )
        .into(),
    );
    for attribute in Attribute::ALL {
        let values: Vec<Option<f64>> = records.iter().map(|r| r.get(attribute)).collect();
        columns.push(Series::new(attribute.column().into(), values).into());
    }
    Ok(DataFrame::new(columns)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_to_dataframe() {
        let records = vec![
            FundamentalsRecord::new("AAPL").with(Attribute::ForwardPe, Some(28.0)),
            FundamentalsRecord::new("MSFT"),
        ];

        let df = records_to_dataframe(&records).unwrap();
        assert_eq!(df.shape(), (2, Attribute::COUNT + 1));
        assert_eq!(df.column("forward_pe").unwrap().null_count(), 1);
        assert_eq!(df.column("market_cap").unwrap().null_count(), 2);
    }

    #[test]
    fn test_batch_accessors() {
        let batch = FundamentalsBatch::new(
            vec![FundamentalsRecord::new("A")],
            vec![("B".to_string(), "timeout".to_string())],
        );
        assert_eq!(batch.records().len(), 1);
        assert_eq!(batch.failed_count(), 1);
    }
}
