//! Asset covariance estimation
//!
//! Estimators take a returns matrix (rows are periods, columns are assets)
//! and produce an N x N covariance matrix.

pub mod ledoit_wolf;

pub use ledoit_wolf::{LedoitWolfConfig, LedoitWolfEstimator, ShrinkageTarget};

use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during covariance estimation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CovarianceError {
    /// Insufficient data for estimation
    #[error("Insufficient data: need at least {required} observations, got {actual}")]
    InsufficientData {
        /// Required number of observations
        required: usize,
        /// Actual number of observations
        actual: usize,
    },

    /// Returns contain NaN or infinite values
    #[error("Returns contain non-finite values")]
    NonFinite,
}

/// Trait for covariance matrix estimators
pub trait CovarianceEstimator {
    /// Estimate the covariance matrix of `returns` (periods x assets).
    fn estimate(&self, returns: &Array2<f64>) -> Result<Array2<f64>, CovarianceError>;
}

/// Which estimator an optimizer should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CovarianceMethod {
    /// Unbiased sample covariance
    #[default]
    Sample,
    /// Ledoit-Wolf shrinkage toward a scaled identity
    LedoitWolf,
}

impl CovarianceMethod {
    /// Estimate with the selected method and its default configuration.
    pub fn estimate(self, returns: &Array2<f64>) -> Result<Array2<f64>, CovarianceError> {
        match self {
            Self::Sample => SampleCovariance.estimate(returns),
            Self::LedoitWolf => LedoitWolfEstimator::default().estimate(returns),
        }
    }
}

/// Unbiased (n - 1) sample covariance.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleCovariance;

impl CovarianceEstimator for SampleCovariance {
    fn estimate(&self, returns: &Array2<f64>) -> Result<Array2<f64>, CovarianceError> {
        let n_periods = check(returns, 2)?;
        let centered = center(returns)?;
        Ok(centered.t().dot(&centered) / (n_periods as f64 - 1.0))
    }
}

/// Reject too-short or non-finite input, returning the number of periods.
pub(crate) fn check(returns: &Array2<f64>, required: usize) -> Result<usize, CovarianceError> {
    let n_periods = returns.nrows();
    if n_periods < required {
        return Err(CovarianceError::InsufficientData {
            required,
            actual: n_periods,
        });
    }
    if returns.iter().any(|v| !v.is_finite()) {
        return Err(CovarianceError::NonFinite);
    }
    Ok(n_periods)
}

/// Subtract each column's mean.
pub(crate) fn center(returns: &Array2<f64>) -> Result<Array2<f64>, CovarianceError> {
    let means: Array1<f64> = returns
        .mean_axis(Axis(0))
        .ok_or(CovarianceError::InsufficientData {
            required: 1,
            actual: 0,
        })?;
    Ok(returns - &means.insert_axis(Axis(0)))
}

/// Correlation matrix implied by a covariance matrix.
///
/// Returns `None` when any variance is not strictly positive.
pub fn correlation(cov: &Array2<f64>) -> Option<Array2<f64>> {
    let std_devs: Array1<f64> = cov.diag().mapv(f64::sqrt);
    if std_devs.iter().any(|s| !(s.is_finite() && *s > 0.0)) {
        return None;
    }
    let n = cov.nrows();
    let mut corr = Array2::zeros((n, n));
    for i in 0..n {
        for j in 0..n {
            corr[[i, j]] = if i == j {
                1.0
            } else {
                (cov[[i, j]] / (std_devs[i] * std_devs[j])).clamp(-1.0, 1.0)
            };
        }
    }
    Some(corr)
}
