//! Pipeline errors.

use crate::universe::UniverseError;
use hobart_data::DataError;
use hobart_factors::{FactorError, SelectionError};
use hobart_output::{ExportError, ReportError};
use hobart_portfolio::{AllocationError, OptimizerError};
use thiserror::Error;

/// Errors that end an interactive session.
///
/// Invalid answers at a prompt never surface here; they are reported and the
/// prompt repeats.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Universe lookup failed
    #[error(transparent)]
    Universe(#[from] UniverseError),

    /// Bulk data fetching failed
    #[error(transparent)]
    Data(#[from] DataError),

    /// Scoring failed
    #[error(transparent)]
    Factors(#[from] FactorError),

    /// Too few candidates survived scoring to form a portfolio
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// Weight optimization failed
    #[error("Portfolio optimization failed: {0}")]
    Optimizer(#[from] OptimizerError),

    /// Discrete allocation failed
    #[error("Allocation failed: {0}")]
    Allocation(#[from] AllocationError),

    /// Export failed
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Report failed
    #[error(transparent)]
    Report(#[from] ReportError),

    /// Reading or writing the terminal failed
    #[error("Terminal IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PipelineError {
    /// Whether the session can continue after reporting this error.
    ///
    /// A run that yields too few candidates or cannot be optimized is
    /// abandoned and the user may start over; everything else is fatal.
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Selection(_) | Self::Optimizer(_) | Self::Factors(FactorError::NoCandidates { .. })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_errors() {
        assert!(PipelineError::from(OptimizerError::TooFewAssets {
            required: 2,
            actual: 1
        })
        .is_recoverable());
        assert!(PipelineError::from(FactorError::NoCandidates { dropped: 4 }).is_recoverable());
        assert!(PipelineError::from(SelectionError::InsufficientCandidates {
            available: 2,
            min: 3
        })
        .is_recoverable());

        assert!(!PipelineError::from(DataError::EmptyBatch { attempted: 30 }).is_recoverable());
        assert!(!PipelineError::from(DataError::Cancelled).is_recoverable());
        assert!(!PipelineError::from(UniverseError::UnknownIndex("x".into())).is_recoverable());
    }

    #[test]
    fn test_optimizer_message_is_distinct() {
        let message = PipelineError::from(OptimizerError::TooFewAssets {
            required: 2,
            actual: 1,
        })
        .to_string();
        assert!(message.starts_with("Portfolio optimization failed"));
    }
}
