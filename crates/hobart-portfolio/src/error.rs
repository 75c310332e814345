//! Error types for optimization and allocation.

use crate::covariance::CovarianceError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Failures of a weight optimizer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimizerError {
    /// Not enough assets with price history
    #[error("Need at least {required} assets with price history, got {actual}")]
    TooFewAssets {
        /// Minimum number of assets
        required: usize,
        /// Assets available
        actual: usize,
    },

    /// Not enough aligned return observations
    #[error("Insufficient price history: need {required} return observations, got {actual}")]
    InsufficientHistory {
        /// Minimum observations
        required: usize,
        /// Observations available
        actual: usize,
    },

    /// An asset's returns have no variance or the matrix is unusable
    #[error("Degenerate covariance: {0}")]
    DegenerateCovariance(String),

    /// Covariance estimation failed
    #[error(transparent)]
    Covariance(#[from] CovarianceError),

    /// Weights are negative, non-finite, or do not sum to one
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    /// Returns matrix shape does not match its symbols
    #[error("Dimension mismatch: {symbols} symbols for {columns} columns")]
    DimensionMismatch {
        /// Number of symbols
        symbols: usize,
        /// Number of columns
        columns: usize,
    },
}

/// Failures of budget validation and whole-share allocation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AllocationError {
    /// Budget input is not a number
    #[error("'{0}' is not a valid amount")]
    NotANumber(String),

    /// Budget outside the configured range
    #[error("Budget must be between ${min} and ${max} (got ${budget})")]
    BudgetOutOfRange {
        /// Entered budget
        budget: Decimal,
        /// Minimum budget
        min: Decimal,
        /// Maximum budget
        max: Decimal,
    },

    /// Budget bounds are inverted or non-positive
    #[error("Invalid budget bounds: min ${min}, max ${max}")]
    InvalidBounds {
        /// Minimum budget
        min: Decimal,
        /// Maximum budget
        max: Decimal,
    },

    /// Budget is zero or negative
    #[error("Budget must be positive (got ${0})")]
    NonPositiveBudget(Decimal),

    /// A weighted ticker has no latest price
    #[error("No price for {0}")]
    MissingPrice(String),

    /// A price is zero, negative or not finite
    #[error("Invalid price for {symbol}: {price}")]
    InvalidPrice {
        /// Stock symbol
        symbol: String,
        /// Offending price
        price: f64,
    },

    /// A share count or cost does not fit the decimal or share range
    #[error("Allocation for {symbol} overflows at this price")]
    Overflow {
        /// Stock symbol
        symbol: String,
    },
}
