#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/hobart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cache;
pub mod error;
pub mod fundamentals;
pub mod model;
pub mod prices;
pub mod source;
pub mod throttle;
pub mod yahoo;

pub use cache::CsvCache;
pub use error::{DataError, Result};
pub use fundamentals::{FundamentalsBatch, FundamentalsFetcher, records_to_dataframe};
pub use model::{Attribute, Direction, FetchOutcome, FundamentalsRecord, TickerResult};
pub use prices::{PriceAssembler, PriceAssembly, PricePoint, PriceSeries, PriceTable};
pub use source::{DEFAULT_LOOKBACK_DAYS, DateWindow, MarketDataSource};
pub use throttle::{CancellationFlag, FetchConfig, FetchProgress, fetch_each};
pub use yahoo::YahooMarketData;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
