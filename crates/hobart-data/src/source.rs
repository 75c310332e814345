//! The narrow interface to a fundamentals and price provider.

use crate::error::Result;
use crate::model::FundamentalsRecord;
use crate::prices::PriceSeries;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Days of price history assembled for the optimizer.
pub const DEFAULT_LOOKBACK_DAYS: i64 = 365;

/// A closed time window for historical requests.
///
/// Computed once per run and passed to every stage that needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    /// Inclusive start of the window.
    pub start: DateTime<Utc>,
    /// Inclusive end of the window.
    pub end: DateTime<Utc>,
}

impl DateWindow {
    /// The `days` days ending at `end`.
    pub fn trailing_days(end: DateTime<Utc>, days: i64) -> Self {
        Self {
            start: end - Duration::days(days.max(0)),
            end,
        }
    }

    /// The `days` days ending now.
    pub fn ending_now(days: i64) -> Self {
        Self::trailing_days(Utc::now(), days)
    }

    /// Start date (UTC calendar day).
    pub fn start_date(&self) -> NaiveDate {
        self.start.date_naive()
    }

    /// End date (UTC calendar day).
    pub fn end_date(&self) -> NaiveDate {
        self.end.date_naive()
    }
}

/// Per-ticker market data lookups.
///
/// A call may issue several provider requests for its ticker. Callers pace,
/// time out and isolate failures per call, so every request a call makes
/// falls inside one paced slot and one deadline.
pub trait MarketDataSource {
    /// Fetch the named fundamentals attributes for one ticker.
    fn fetch_fundamentals(&self, symbol: &str) -> impl Future<Output = Result<FundamentalsRecord>>;

    /// Fetch daily adjusted closes for one ticker over `window`.
    fn fetch_adjusted_closes(
        &self,
        symbol: &str,
        window: &DateWindow,
    ) -> impl Future<Output = Result<PriceSeries>>;
}

impl<S: MarketDataSource + ?Sized> MarketDataSource for &S {
    fn fetch_fundamentals(&self, symbol: &str) -> impl Future<Output = Result<FundamentalsRecord>> {
        (**self).fetch_fundamentals(symbol)
    }

    fn fetch_adjusted_closes(
        &self,
        symbol: &str,
        window: &DateWindow,
    ) -> impl Future<Output = Result<PriceSeries>> {
        (**self).fetch_adjusted_closes(symbol, window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_window() {
        let end = Utc::now();
        let window = DateWindow::trailing_days(end, DEFAULT_LOOKBACK_DAYS);
        assert_eq!(window.end, end);
        assert_eq!((window.end - window.start).num_days(), 365);
    }
}
