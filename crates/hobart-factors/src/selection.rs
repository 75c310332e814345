//! Portfolio size validation.

use crate::error::SelectionError;
use serde::{Deserialize, Serialize};

/// Smallest portfolio Hobart will build.
pub const MIN_PORTFOLIO_SIZE: usize = 3;

/// Default global cap on portfolio size.
pub const DEFAULT_MAX_PORTFOLIO_SIZE: usize = 50;

/// Data-dependent bounds on the number of companies to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionBounds {
    available: usize,
    cap: usize,
}

impl SelectionBounds {
    /// Bounds for `available` ranked candidates under a global `cap`.
    pub const fn new(available: usize, cap: usize) -> Self {
        Self { available, cap }
    }

    /// Smallest valid size.
    pub const fn min(&self) -> usize {
        MIN_PORTFOLIO_SIZE
    }

    /// Largest valid size.
    pub const fn max(&self) -> usize {
        if self.available < self.cap {
            self.available
        } else {
            self.cap
        }
    }

    /// Fail when no size can be valid.
    pub const fn check_satisfiable(&self) -> Result<(), SelectionError> {
        if self.max() < MIN_PORTFOLIO_SIZE {
            return Err(SelectionError::InsufficientCandidates {
                available: self.available,
                min: MIN_PORTFOLIO_SIZE,
            });
        }
        Ok(())
    }

    /// Parse and check a user-entered portfolio size.
    pub fn validate_portfolio_size(&self, input: &str) -> Result<usize, SelectionError> {
        let trimmed = input.trim();
        let requested: i64 = trimmed
            .parse()
            .map_err(|_| SelectionError::NotAnInteger(trimmed.to_string()))?;

        if requested < MIN_PORTFOLIO_SIZE as i64 {
            return Err(SelectionError::TooSmall {
                requested,
                min: MIN_PORTFOLIO_SIZE,
            });
        }
        if requested > self.cap as i64 {
            return Err(SelectionError::ExceedsCap {
                requested,
                cap: self.cap,
            });
        }
        if requested > self.available as i64 {
            return Err(SelectionError::ExceedsAvailable {
                requested,
                available: self.available,
            });
        }

        Ok(requested as usize)
    }
}
