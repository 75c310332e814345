//! Core data records shared across the pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a larger raw value is preferable for an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Larger values rank higher.
    HigherIsBetter,
    /// Smaller values rank higher; percentiles are stored inverted.
    LowerIsBetter,
}

/// Named numeric attribute of a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Attribute {
    /// Market capitalization
    MarketCap,
    /// Forward price-to-earnings ratio
    ForwardPe,
    /// Price to book ratio
    PriceToBook,
    /// Forward earnings per share
    ForwardEps,
    /// Debt to equity ratio
    DebtToEquity,
    /// Return on equity
    ReturnOnEquity,
    /// Return on assets
    ReturnOnAssets,
    /// Year-over-year revenue growth
    RevenueGrowth,
    /// Quick (acid-test) ratio
    QuickRatio,
    /// Dividend yield
    DividendYield,
    /// Price return over the last quarter
    QuarterlyReturn,
}

impl Attribute {
    /// Number of attributes.
    pub const COUNT: usize = 11;

    /// All attributes in canonical order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::MarketCap,
        Self::ForwardPe,
        Self::PriceToBook,
        Self::ForwardEps,
        Self::DebtToEquity,
        Self::ReturnOnEquity,
        Self::ReturnOnAssets,
        Self::RevenueGrowth,
        Self::QuickRatio,
        Self::DividendYield,
        Self::QuarterlyReturn,
    ];

    /// Position in [`Attribute::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Column name used in frames and CSV files.
    pub const fn column(self) -> &'static str {
        match self {
            Self::MarketCap => "market_cap",
            Self::ForwardPe => "forward_pe",
            Self::PriceToBook => "price_to_book",
            Self::ForwardEps => "forward_eps",
            Self::DebtToEquity => "debt_to_equity",
            Self::ReturnOnEquity => "return_on_equity",
            Self::ReturnOnAssets => "return_on_assets",
            Self::RevenueGrowth => "revenue_growth",
            Self::QuickRatio => "quick_ratio",
            Self::DividendYield => "dividend_yield",
            Self::QuarterlyReturn => "quarterly_return",
        }
    }

    /// Human readable name.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::MarketCap => "Market Cap",
            Self::ForwardPe => "Forward P/E",
            Self::PriceToBook => "Price/Book",
            Self::ForwardEps => "Forward EPS",
            Self::DebtToEquity => "Debt/Equity",
            Self::ReturnOnEquity => "Return on Equity",
            Self::ReturnOnAssets => "Return on Assets",
            Self::RevenueGrowth => "Revenue Growth",
            Self::QuickRatio => "Quick Ratio",
            Self::DividendYield => "Dividend Yield",
            Self::QuarterlyReturn => "Quarterly Return",
        }
    }

    /// Ranking direction.
    pub const fn direction(self) -> Direction {
        match self {
            Self::ForwardPe | Self::DebtToEquity => Direction::LowerIsBetter,
            _ => Direction::HigherIsBetter,
        }
    }

    /// Look up an attribute by its column name.
    pub fn from_column(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.column() == name)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Raw fundamentals for one ticker. Any attribute may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundamentalsRecord {
    /// Stock symbol
    pub symbol: String,
    values: [Option<f64>; Attribute::COUNT],
}

impl FundamentalsRecord {
    /// Create a record with every attribute absent.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            values: [None; Attribute::COUNT],
        }
    }

    /// Builder-style setter.
    pub fn with(mut self, attribute: Attribute, value: Option<f64>) -> Self {
        self.set(attribute, value);
        self
    }

    /// Get an attribute value.
    pub const fn get(&self, attribute: Attribute) -> Option<f64> {
        self.values[attribute.index()]
    }

    /// Set an attribute value. Non-finite values are stored as absent.
    pub fn set(&mut self, attribute: Attribute, value: Option<f64>) {
        self.values[attribute.index()] = value.filter(|v| v.is_finite());
    }

    /// True when every listed attribute is present.
    pub fn has_all(&self, attributes: &[Attribute]) -> bool {
        attributes.iter().all(|a| self.get(*a).is_some())
    }

    /// Attributes that are absent.
    pub fn missing(&self) -> Vec<Attribute> {
        Attribute::ALL
            .into_iter()
            .filter(|a| self.get(*a).is_none())
            .collect()
    }
}

/// Explicit per-ticker result of an external fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    /// The provider returned data.
    Fetched(T),
    /// The provider failed for this ticker only.
    Failed {
        /// Diagnostic text
        reason: String,
    },
}

impl<T> FetchOutcome<T> {
    /// True for [`FetchOutcome::Fetched`].
    pub const fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    /// Borrow the fetched value.
    pub const fn fetched(&self) -> Option<&T> {
        match self {
            Self::Fetched(value) => Some(value),
            Self::Failed { .. } => None,
        }
    }

    /// Take the fetched value.
    pub fn into_fetched(self) -> Option<T> {
        match self {
            Self::Fetched(value) => Some(value),
            Self::Failed { .. } => None,
        }
    }
}

/// A ticker paired with its fetch outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct TickerResult<T> {
    /// Stock symbol
    pub symbol: String,
    /// What the provider returned
    pub outcome: FetchOutcome<T>,
}
