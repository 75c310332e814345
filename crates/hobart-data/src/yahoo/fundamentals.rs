//! Fundamental data fetching from Yahoo Finance.

use super::quotes::yahoo_symbol;
use crate::error::{DataError, Result};
use crate::model::{Attribute, FundamentalsRecord};
use serde_json::Value;
use tracing::debug;

const QUOTE_SUMMARY_URL: &str = "https://query2.finance.yahoo.com/v10/finance/quoteSummary";
const MODULES: &str = "price,summaryDetail,defaultKeyStatistics,financialData";

/// Where each attribute lives in a quoteSummary payload, in lookup order.
const FIELD_PATHS: &[(Attribute, &[(&str, &str)])] = &[
    (
        Attribute::MarketCap,
        &[("price", "marketCap"), ("summaryDetail", "marketCap")],
    ),
    (
        Attribute::ForwardPe,
        &[("summaryDetail", "forwardPE"), ("defaultKeyStatistics", "forwardPE")],
    ),
    (Attribute::PriceToBook, &[("defaultKeyStatistics", "priceToBook")]),
    (Attribute::ForwardEps, &[("defaultKeyStatistics", "forwardEps")]),
    (Attribute::DebtToEquity, &[("financialData", "debtToEquity")]),
    (Attribute::ReturnOnEquity, &[("financialData", "returnOnEquity")]),
    (Attribute::ReturnOnAssets, &[("financialData", "returnOnAssets")]),
    (Attribute::RevenueGrowth, &[("financialData", "revenueGrowth")]),
    (Attribute::QuickRatio, &[("financialData", "quickRatio")]),
    (Attribute::DividendYield, &[("summaryDetail", "dividendYield")]),
];

/// Yahoo Finance quoteSummary provider.
#[derive(Debug)]
pub struct YahooFundamentalsProvider {
    client: reqwest::Client,
}

impl YahooFundamentalsProvider {
    /// Create a new Yahoo Finance fundamentals provider.
    pub fn try_new() -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::builder()
                .user_agent("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)")
                .build()?,
        })
    }

    /// Fetch fundamental attributes for a single symbol.
    ///
    /// The quarterly return is not part of quoteSummary and is left absent.
    pub async fn fetch_fundamentals(&self, symbol: &str) -> Result<FundamentalsRecord> {
        if symbol.is_empty() {
            return Err(DataError::InvalidSymbol("Empty symbol".to_string()));
        }

        let url = format!("{}/{}", QUOTE_SUMMARY_URL, yahoo_symbol(symbol));
        let response = self
            .client
            .get(&url)
            .query(&[("modules", MODULES)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataError::Http(format!("{status} for {symbol}")));
        }

        let body: Value = response.json().await?;
        let record = parse_quote_summary(symbol, &body)?;
        debug!(symbol, missing = record.missing().len(), "fetched fundamentals");
        Ok(record)
    }
}

/// Extract attributes from a quoteSummary response body.
pub fn parse_quote_summary(symbol: &str, body: &Value) -> Result<FundamentalsRecord> {
    let summary = &body["quoteSummary"];

    if let Some(error) = summary.get("error").filter(|e| !e.is_null()) {
        let description = error["description"]
            .as_str()
            .map_or_else(|| error.to_string(), str::to_string);
        return Err(DataError::YahooApi(description));
    }

    let result = summary["result"]
        .get(0)
        .ok_or_else(|| DataError::MissingData {
            symbol: symbol.to_string(),
            reason: "empty quoteSummary result".to_string(),
        })?;

    let mut record = FundamentalsRecord::new(symbol);
    for (attribute, paths) in FIELD_PATHS {
        let value = paths
            .iter()
            .find_map(|(module, field)| numeric(&result[*module][*field]));
        record.set(*attribute, value);
    }

    Ok(record)
}

/// Yahoo wraps numbers as `{"raw": 1.0, "fmt": "1.00"}`; plain numbers are
/// accepted too. Empty objects mean "not reported".
fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Object(map) => map.get("raw").and_then(Value::as_f64),
        _ => None,
    }
}
