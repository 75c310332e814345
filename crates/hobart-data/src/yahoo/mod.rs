//! Yahoo Finance data providers.

pub mod fundamentals;
pub mod quotes;

pub use fundamentals::{YahooFundamentalsProvider, parse_quote_summary};
pub use quotes::{YahooQuoteProvider, yahoo_symbol};

use crate::error::Result;
use crate::model::{Attribute, FundamentalsRecord};
use crate::prices::PriceSeries;
use crate::source::{DateWindow, MarketDataSource};

/// Calendar days behind the quarterly return attribute.
pub const QUARTER_DAYS: i64 = 91;

/// Yahoo Finance as a [`MarketDataSource`].
///
/// Fundamentals come from quoteSummary; the quarterly return is derived from
/// the last [`QUARTER_DAYS`] of chart history. A failed chart request leaves
/// only that attribute absent. Each fundamentals call therefore makes two
/// provider requests within its paced slot.
#[derive(Debug)]
pub struct YahooMarketData {
    quotes: YahooQuoteProvider,
    fundamentals: YahooFundamentalsProvider,
}

impl YahooMarketData {
    /// Create both underlying providers.
    pub fn try_new() -> Result<Self> {
        Ok(Self {
            quotes: YahooQuoteProvider::try_new()?,
            fundamentals: YahooFundamentalsProvider::try_new()?,
        })
    }
}

impl MarketDataSource for YahooMarketData {
    async fn fetch_fundamentals(&self, symbol: &str) -> Result<FundamentalsRecord> {
        let mut record = self.fundamentals.fetch_fundamentals(symbol).await?;

        let quarter = DateWindow::ending_now(QUARTER_DAYS);
        let quarterly_return = match self.quotes.fetch_adjusted_closes(symbol, &quarter).await {
            Ok(series) => series.total_return(),
            Err(e) => {
                tracing::debug!(symbol, error = %e, "no quarterly return");
                None
            }
        };
        record.set(Attribute::QuarterlyReturn, quarterly_return);

        Ok(record)
    }

    async fn fetch_adjusted_closes(&self, symbol: &str, window: &DateWindow) -> Result<PriceSeries> {
        self.quotes.fetch_adjusted_closes(symbol, window).await
    }
}
