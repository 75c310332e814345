//! Ledoit-Wolf Shrinkage Covariance Estimator
//!
//! Σ_LW = δ* F + (1 − δ*) S, with S the (1/n) sample covariance, F a
//! structured target and δ* the analytical shrinkage intensity of
//! Ledoit & Wolf (2004), clamped to [0, 1].
//!
//! A year of daily returns for up to fifty assets is short relative to the
//! number of covariance entries, which is where shrinkage helps.

use super::{CovarianceError, CovarianceEstimator, center, check};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Shrinkage target types
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ShrinkageTarget {
    /// Average variance on the diagonal: F = (trace(S) / n) I
    #[default]
    Identity,
    /// Sample variances with the average pairwise correlation
    ConstantCorrelation,
}

/// Ledoit-Wolf estimator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedoitWolfConfig {
    /// Minimum number of observations (default: 2)
    pub min_observations: usize,
    /// Shrinkage target (default: Identity)
    pub target: ShrinkageTarget,
}

impl Default for LedoitWolfConfig {
    fn default() -> Self {
        Self {
            min_observations: 2,
            target: ShrinkageTarget::Identity,
        }
    }
}

/// Ledoit-Wolf shrinkage covariance estimator
#[derive(Debug, Default)]
pub struct LedoitWolfEstimator {
    config: LedoitWolfConfig,
}

impl LedoitWolfEstimator {
    /// Create an estimator with the given configuration
    pub const fn new(config: LedoitWolfConfig) -> Self {
        Self { config }
    }

    fn target(&self, sample: &Array2<f64>) -> Array2<f64> {
        let n = sample.nrows();
        match self.config.target {
            ShrinkageTarget::Identity => {
                let mu = sample.diag().sum() / n as f64;
                Array2::eye(n) * mu
            }
            ShrinkageTarget::ConstantCorrelation => {
                let variances: Array1<f64> = sample.diag().to_owned();
                let std_devs = variances.mapv(f64::sqrt);

                let mut sum = 0.0;
                let mut pairs = 0usize;
                for i in 0..n {
                    for j in (i + 1)..n {
                        let denom = std_devs[i] * std_devs[j];
                        if denom > 0.0 {
                            sum += sample[[i, j]] / denom;
                            pairs += 1;
                        }
                    }
                }
                let rho = if pairs > 0 { sum / pairs as f64 } else { 0.0 };

                Array2::from_shape_fn((n, n), |(i, j)| {
                    if i == j {
                        variances[i]
                    } else {
                        rho * std_devs[i] * std_devs[j]
                    }
                })
            }
        }
    }

    /// Squared Frobenius distance of each period's outer product from `m`,
    /// averaged over periods.
    fn mean_outer_distance(centered: &Array2<f64>, m: &Array2<f64>) -> f64 {
        let n_assets = m.nrows();
        let total: f64 = centered
            .rows()
            .into_iter()
            .map(|y| {
                let mut acc = 0.0;
                for i in 0..n_assets {
                    for j in 0..n_assets {
                        let d = y[i] * y[j] - m[[i, j]];
                        acc += d * d;
                    }
                }
                acc
            })
            .sum();
        total / centered.nrows() as f64
    }

    fn intensity(centered: &Array2<f64>, sample: &Array2<f64>, target: &Array2<f64>) -> f64 {
        let pi = Self::mean_outer_distance(centered, sample);
        let rho = Self::mean_outer_distance(centered, target) - pi;
        let gamma: f64 = (sample - target).mapv(|d| d * d).sum();

        if gamma > 0.0 {
            (rho / gamma).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Shrinkage intensity δ* for `returns`.
    pub fn shrinkage_intensity(&self, returns: &Array2<f64>) -> Result<f64, CovarianceError> {
        let n_periods = check(returns, self.config.min_observations)?;
        let centered = center(returns)?;
        let sample = centered.t().dot(&centered) / n_periods as f64;
        let target = self.target(&sample);
        Ok(Self::intensity(&centered, &sample, &target))
    }
}

impl CovarianceEstimator for LedoitWolfEstimator {
    fn estimate(&self, returns: &Array2<f64>) -> Result<Array2<f64>, CovarianceError> {
        let n_periods = check(returns, self.config.min_observations)?;
        let centered = center(returns)?;
        let sample = centered.t().dot(&centered) / n_periods as f64;
        let target = self.target(&sample);
        let delta = Self::intensity(&centered, &sample, &target);

        Ok(&target * delta + &sample * (1.0 - delta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    fn wavy(periods: usize, assets: usize) -> Array2<f64> {
        Array2::from_shape_fn((periods, assets), |(t, a)| {
            0.01 * ((t * (a + 2)) as f64 * 0.37).sin()
        })
    }

    #[test]
    fn test_identity_target() {
        let estimator = LedoitWolfEstimator::default();
        let sample = array![[4.0, 1.0, 0.5], [1.0, 9.0, 1.5], [0.5, 1.5, 16.0]];
        let target = estimator.target(&sample);

        let mu = 29.0 / 3.0;
        assert_relative_eq!(target[[0, 0]], mu, epsilon = 1e-12);
        assert_relative_eq!(target[[2, 2]], mu, epsilon = 1e-12);
        assert_relative_eq!(target[[0, 1]], 0.0);
    }

    #[test]
    fn test_constant_correlation_target() {
        let estimator = LedoitWolfEstimator::new(LedoitWolfConfig {
            target: ShrinkageTarget::ConstantCorrelation,
            ..Default::default()
        });
        let sample = array![[4.0, 2.0], [2.0, 9.0]];
        let target = estimator.target(&sample);

        assert_relative_eq!(target[[0, 0]], 4.0);
        assert_relative_eq!(target[[1, 1]], 9.0);
        assert_relative_eq!(target[[0, 1]], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_intensity_in_unit_interval() {
        let estimator = LedoitWolfEstimator::default();
        for (periods, assets) in [(10, 3), (60, 5), (250, 8)] {
            let delta = estimator.shrinkage_intensity(&wavy(periods, assets)).unwrap();
            assert!((0.0..=1.0).contains(&delta), "delta {delta}");
        }
    }

    #[test]
    fn test_estimate_is_symmetric_with_positive_diagonal() {
        let cov = LedoitWolfEstimator::default().estimate(&wavy(40, 4)).unwrap();
        assert_eq!(cov.dim(), (4, 4));
        for i in 0..4 {
            assert!(cov[[i, i]] > 0.0);
            for j in 0..4 {
                assert_relative_eq!(cov[[i, j]], cov[[j, i]], epsilon = 1e-15);
            }
        }
    }

    #[test]
    fn test_insufficient_data() {
        let returns = Array2::<f64>::zeros((1, 3));
        assert!(LedoitWolfEstimator::default().estimate(&returns).is_err());
    }
}
