//! Error types for scoring and selection.

use hobart_data::DataError;
use thiserror::Error;

/// Result type for scoring operations.
pub type Result<T> = std::result::Result<T, FactorError>;

/// Errors raised while scoring candidates.
#[derive(Debug, Error)]
pub enum FactorError {
    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// Data layer error
    #[error(transparent)]
    Data(#[from] DataError),

    /// Composite weights are negative or do not sum to one
    #[error("Invalid composite weights: {0}")]
    InvalidWeights(String),

    /// Every ticker lacked at least one scoring attribute
    #[error("No ticker has every scoring attribute ({dropped} dropped)")]
    NoCandidates {
        /// Number of tickers dropped
        dropped: usize,
    },
}

/// Reasons a requested portfolio size is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Input is not a whole number
    #[error("'{0}' is not a whole number")]
    NotAnInteger(String),

    /// Below the minimum portfolio size
    #[error("A portfolio needs at least {min} companies (got {requested})")]
    TooSmall {
        /// Requested size
        requested: i64,
        /// Minimum size
        min: usize,
    },

    /// More than the ranked list holds
    #[error("Only {available} companies are available (got {requested})")]
    ExceedsAvailable {
        /// Requested size
        requested: i64,
        /// Ranked candidates
        available: usize,
    },

    /// Above the global cap
    #[error("Portfolios are capped at {cap} companies (got {requested})")]
    ExceedsCap {
        /// Requested size
        requested: i64,
        /// Configured cap
        cap: usize,
    },

    /// No size can ever be valid
    #[error("Only {available} companies could be scored; at least {min} are needed")]
    InsufficientCandidates {
        /// Ranked candidates
        available: usize,
        /// Minimum size
        min: usize,
    },
}
