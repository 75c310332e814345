//! Adjusted close history from Yahoo Finance.

use crate::error::{DataError, Result};
use crate::prices::{PricePoint, PriceSeries};
use crate::source::DateWindow;
use chrono::DateTime;
use tracing::debug;
use yahoo_finance_api as yahoo;

/// Yahoo Finance chart-history provider.
pub struct YahooQuoteProvider {
    provider: yahoo::YahooConnector,
}

impl std::fmt::Debug for YahooQuoteProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YahooQuoteProvider").finish_non_exhaustive()
    }
}

impl YahooQuoteProvider {
    /// Create a new Yahoo Finance quote provider.
    pub fn try_new() -> Result<Self> {
        Ok(Self {
            provider: yahoo::YahooConnector::new()?,
        })
    }

    /// Fetch daily adjusted closes for a single symbol.
    ///
    /// # Arguments
    /// * `symbol` - The ticker symbol (e.g., "AAPL")
    /// * `window` - Inclusive date window
    pub async fn fetch_adjusted_closes(
        &self,
        symbol: &str,
        window: &DateWindow,
    ) -> Result<PriceSeries> {
        if symbol.is_empty() {
            return Err(DataError::InvalidSymbol("Empty symbol".to_string()));
        }
        if window.start > window.end {
            return Err(DataError::InvalidDateRange {
                start: window.start.to_rfc3339(),
                end: window.end.to_rfc3339(),
            });
        }

        // Convert chrono DateTime to time::OffsetDateTime
        let start_time = time::OffsetDateTime::from_unix_timestamp(window.start.timestamp())
            .map_err(|e| DataError::TimeConversion(e.to_string()))?;
        let end_time = time::OffsetDateTime::from_unix_timestamp(window.end.timestamp())
            .map_err(|e| DataError::TimeConversion(e.to_string()))?;

        let response = self
            .provider
            .get_quote_history(&yahoo_symbol(symbol), start_time, end_time)
            .await?;

        let quotes = response
            .quotes()
            .map_err(|e| DataError::YahooApi(e.to_string()))?;

        if quotes.is_empty() {
            return Err(DataError::MissingData {
                symbol: symbol.to_string(),
                reason: "No data returned from Yahoo Finance".to_string(),
            });
        }

        let mut points = Vec::with_capacity(quotes.len());
        for quote in &quotes {
            let date = DateTime::from_timestamp(quote.timestamp, 0)
                .ok_or_else(|| DataError::TimeConversion(format!("bad timestamp {}", quote.timestamp)))?
                .date_naive();
            points.push(PricePoint {
                date,
                adjusted_close: quote.adjclose,
            });
        }

        let series = PriceSeries::new(symbol, points);
        debug!(symbol, observations = series.len(), "fetched price history");
        Ok(series)
    }
}

/// Map an index-style ticker to Yahoo's spelling (`BRK.B` -> `BRK-B`).
pub fn yahoo_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase().replace('.', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yahoo_symbol() {
        assert_eq!(yahoo_symbol("BRK.B"), "BRK-B");
        assert_eq!(yahoo_symbol(" aapl "), "AAPL");
    }

    #[tokio::test]
    async fn test_invalid_symbol() {
        let provider = YahooQuoteProvider::try_new().unwrap();
        let window = DateWindow::ending_now(30);

        let result = provider.fetch_adjusted_closes("", &window).await;
        assert!(matches!(result, Err(DataError::InvalidSymbol(_))));
    }
}
