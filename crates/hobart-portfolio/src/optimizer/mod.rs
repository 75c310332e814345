//! Portfolio weight optimization.

pub mod hrp;

pub use hrp::{HrpConfig, HrpOptimizer};

use crate::error::OptimizerError;
use crate::returns::ReturnsMatrix;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Tolerance on the sum of target weights.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Ordered, non-negative per-ticker weights summing to one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetWeights(Vec<(String, f64)>);

impl TargetWeights {
    /// Validate and wrap `(symbol, weight)` pairs.
    pub fn new(weights: Vec<(String, f64)>) -> Result<Self, OptimizerError> {
        if weights.is_empty() {
            return Err(OptimizerError::InvalidWeights("no weights".to_string()));
        }
        if let Some((symbol, w)) = weights.iter().find(|(_, w)| !w.is_finite() || *w < 0.0) {
            return Err(OptimizerError::InvalidWeights(format!(
                "{symbol} has weight {w}"
            )));
        }
        let total: f64 = weights.iter().map(|(_, w)| w).sum();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(OptimizerError::InvalidWeights(format!(
                "weights sum to {total}"
            )));
        }
        Ok(Self(weights))
    }

    /// Pairs in order.
    pub fn as_slice(&self) -> &[(String, f64)] {
        &self.0
    }

    /// Iterate `(symbol, weight)` in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(s, w)| (s.as_str(), *w))
    }

    /// Weight of one symbol.
    pub fn get(&self, symbol: &str) -> Option<f64> {
        self.0.iter().find(|(s, _)| s == symbol).map(|(_, w)| *w)
    }

    /// Number of tickers.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no tickers.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn vector(&self) -> Array1<f64> {
        self.0.iter().map(|(_, w)| *w).collect()
    }
}

/// Annualized statistics of a weighted portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortfolioPerformance {
    /// Expected annual return
    pub expected_annual_return: f64,
    /// Annual volatility
    pub annual_volatility: f64,
    /// Sharpe ratio
    pub sharpe_ratio: f64,
}

impl PortfolioPerformance {
    /// Annualize arithmetic mean returns and covariance for `weights`.
    ///
    /// `mean_returns` and `cov` are per period; `weights` must be in the same
    /// asset order.
    pub fn compute(
        weights: &TargetWeights,
        mean_returns: &Array1<f64>,
        cov: &Array2<f64>,
        risk_free_rate: f64,
        periods_per_year: f64,
    ) -> Self {
        let w = weights.vector();
        let expected_annual_return = w.dot(mean_returns) * periods_per_year;
        let variance = w.dot(&cov.dot(&w)) * periods_per_year;
        let annual_volatility = variance.max(0.0).sqrt();
        let sharpe_ratio = if annual_volatility > 0.0 {
            (expected_annual_return - risk_free_rate) / annual_volatility
        } else {
            0.0
        };

        Self {
            expected_annual_return,
            annual_volatility,
            sharpe_ratio,
        }
    }
}

/// Target weights with optional performance figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizedPortfolio {
    /// Per-ticker target weights
    pub weights: TargetWeights,
    /// Expected performance, if the optimizer reports it
    pub performance: Option<PortfolioPerformance>,
}

/// Turns historical returns into target weights.
pub trait WeightOptimizer {
    /// Short name for reports.
    fn name(&self) -> &str;

    /// Compute target weights for the assets of `returns`, in column order.
    fn optimize(&self, returns: &ReturnsMatrix) -> Result<OptimizedPortfolio, OptimizerError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    fn weights(pairs: &[(&str, f64)]) -> Result<TargetWeights, OptimizerError> {
        TargetWeights::new(pairs.iter().map(|(s, w)| (s.to_string(), *w)).collect())
    }

    #[test]
    fn test_target_weights_validation() {
        assert!(weights(&[("A", 0.5), ("B", 0.5)]).is_ok());
        assert!(weights(&[("A", 0.0), ("B", 1.0)]).is_ok());
        assert!(weights(&[("A", -0.1), ("B", 1.1)]).is_err());
        assert!(weights(&[("A", 0.5), ("B", 0.4)]).is_err());
        assert!(weights(&[("A", f64::NAN), ("B", 1.0)]).is_err());
        assert!(weights(&[]).is_err());
    }

    #[test]
    fn test_lookup() {
        let w = weights(&[("A", 0.25), ("B", 0.75)]).unwrap();
        assert_eq!(w.get("B"), Some(0.75));
        assert_eq!(w.get("C"), None);
        assert_eq!(w.iter().map(|(s, _)| s).collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn test_performance() {
        let w = weights(&[("A", 0.5), ("B", 0.5)]).unwrap();
        let mean = array![0.001, 0.0005];
        let cov = array![[0.0001, 0.0], [0.0, 0.0004]];

        let perf = PortfolioPerformance::compute(&w, &mean, &cov, 0.02, 252.0);

        assert_relative_eq!(perf.expected_annual_return, 0.00075 * 252.0, epsilon = 1e-12);
        let vol = (0.25 * 0.0001 + 0.25 * 0.0004_f64) * 252.0;
        assert_relative_eq!(perf.annual_volatility, vol.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(
            perf.sharpe_ratio,
            (0.189 - 0.02) / vol.sqrt(),
            epsilon = 1e-9
        );
    }
}
