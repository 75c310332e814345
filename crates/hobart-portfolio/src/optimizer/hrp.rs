//! Hierarchical Risk Parity
//!
//! 1. Correlation distance d_ij = sqrt((1 − ρ_ij) / 2).
//! 2. Single-linkage agglomerative clustering on d.
//! 3. Quasi-diagonal ordering: leaves of the dendrogram, left to right.
//! 4. Recursive bisection of the ordered list; each half's share is set by
//!    inverse-variance cluster variances, α = 1 − V_left / (V_left + V_right).
//!
//! Every weight is strictly positive and the weights sum to one.

use super::{OptimizedPortfolio, PortfolioPerformance, TargetWeights, WeightOptimizer};
use crate::covariance::{CovarianceMethod, correlation};
use crate::error::OptimizerError;
use crate::returns::ReturnsMatrix;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Configuration for [`HrpOptimizer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HrpConfig {
    /// Annual risk-free rate for the Sharpe ratio (default: 0.02)
    pub risk_free_rate: f64,
    /// Return periods per year (default: 252 trading days)
    pub periods_per_year: f64,
    /// Minimum number of return observations (default: 2)
    pub min_observations: usize,
    /// Covariance estimator (default: sample)
    pub covariance: CovarianceMethod,
}

impl Default for HrpConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: 0.02,
            periods_per_year: 252.0,
            min_observations: 2,
            covariance: CovarianceMethod::Sample,
        }
    }
}

/// Hierarchical risk parity weight optimizer.
#[derive(Debug, Clone, Default)]
pub struct HrpOptimizer {
    config: HrpConfig,
}

impl HrpOptimizer {
    /// Create an optimizer with the given configuration.
    pub const fn new(config: HrpConfig) -> Self {
        Self { config }
    }

    /// Configuration in use.
    pub const fn config(&self) -> &HrpConfig {
        &self.config
    }
}

impl WeightOptimizer for HrpOptimizer {
    fn name(&self) -> &str {
        "hrp"
    }

    fn optimize(&self, returns: &ReturnsMatrix) -> Result<OptimizedPortfolio, OptimizerError> {
        let n_assets = returns.n_assets();
        if n_assets < 2 {
            return Err(OptimizerError::TooFewAssets {
                required: 2,
                actual: n_assets,
            });
        }
        let required = self.config.min_observations.max(2);
        if returns.n_periods() < required {
            return Err(OptimizerError::InsufficientHistory {
                required,
                actual: returns.n_periods(),
            });
        }

        let cov = self.config.covariance.estimate(returns.values())?;
        let corr = correlation(&cov).ok_or_else(|| {
            let flat: Vec<&str> = returns
                .symbols()
                .iter()
                .zip(cov.diag())
                .filter(|(_, v)| !(v.is_finite() && **v > 0.0))
                .map(|(s, _)| s.as_str())
                .collect();
            OptimizerError::DegenerateCovariance(format!("no return variance for {}", flat.join(", ")))
        })?;

        let distance = corr.mapv(|rho| ((1.0 - rho) / 2.0).clamp(0.0, 1.0).sqrt());
        let order = quasi_diagonal_order(&distance);
        let raw = recursive_bisection(&cov, &order);

        debug!(?order, "hrp leaf order");

        let weights = TargetWeights::new(
            returns
                .symbols()
                .iter()
                .cloned()
                .zip(raw)
                .collect(),
        )?;

        let performance = PortfolioPerformance::compute(
            &weights,
            &returns.mean_returns(),
            &cov,
            self.config.risk_free_rate,
            self.config.periods_per_year,
        );

        info!(
            assets = n_assets,
            periods = returns.n_periods(),
            expected_return = performance.expected_annual_return,
            volatility = performance.annual_volatility,
            "optimized target weights"
        );

        Ok(OptimizedPortfolio {
            weights,
            performance: Some(performance),
        })
    }
}

/// Dendrogram node.
#[derive(Debug, Clone)]
enum Cluster {
    Leaf(usize),
    Merged(Box<Cluster>, Box<Cluster>),
}

impl Cluster {
    fn leaves(&self, out: &mut Vec<usize>) {
        match self {
            Self::Leaf(i) => out.push(*i),
            Self::Merged(left, right) => {
                left.leaves(out);
                right.leaves(out);
            }
        }
    }
}

/// Leaf order of the single-linkage dendrogram over `distance`.
///
/// At each step the closest pair of clusters merges, ties going to the pair
/// formed earliest; the cluster created first becomes the left child.
fn quasi_diagonal_order(distance: &Array2<f64>) -> Vec<usize> {
    let n = distance.nrows();
    // (creation id, members, tree)
    let mut active: Vec<(usize, Vec<usize>, Cluster)> =
        (0..n).map(|i| (i, vec![i], Cluster::Leaf(i))).collect();
    let mut next_id = n;

    while active.len() > 1 {
        let mut best = (0, 1, f64::INFINITY);
        for a in 0..active.len() {
            for b in (a + 1)..active.len() {
                let link = active[a]
                    .1
                    .iter()
                    .flat_map(|&i| active[b].1.iter().map(move |&j| (i, j)))
                    .map(|(i, j)| distance[[i, j]])
                    .fold(f64::INFINITY, f64::min);
                if link < best.2 {
                    best = (a, b, link);
                }
            }
        }

        let (a, b, _) = best;
        let (id_b, members_b, tree_b) = active.remove(b);
        let (id_a, members_a, tree_a) = active.remove(a);
        let (left, right) = if id_a < id_b {
            (tree_a, tree_b)
        } else {
            (tree_b, tree_a)
        };
        let mut members = members_a;
        members.extend(members_b);
        active.push((next_id, members, Cluster::Merged(Box::new(left), Box::new(right))));
        next_id += 1;
    }

    let mut order = Vec::with_capacity(n);
    if let Some((_, _, root)) = active.pop() {
        root.leaves(&mut order);
    }
    order
}

/// Variance of a cluster held at inverse-variance weights.
fn cluster_variance(cov: &Array2<f64>, members: &[usize]) -> f64 {
    let inverse: Vec<f64> = members.iter().map(|&i| 1.0 / cov[[i, i]]).collect();
    let total: f64 = inverse.iter().sum();
    let w: Vec<f64> = inverse.iter().map(|v| v / total).collect();

    let mut variance = 0.0;
    for (a, &i) in members.iter().enumerate() {
        for (b, &j) in members.iter().enumerate() {
            variance += w[a] * w[b] * cov[[i, j]];
        }
    }
    variance
}

/// Weights in original asset order.
fn recursive_bisection(cov: &Array2<f64>, order: &[usize]) -> Vec<f64> {
    let mut weights = vec![1.0; cov.nrows()];
    let mut clusters: Vec<&[usize]> = vec![order];

    while !clusters.is_empty() {
        let mut next = Vec::new();
        for cluster in clusters {
            if cluster.len() < 2 {
                continue;
            }
            let (left, right) = cluster.split_at(cluster.len() / 2);
            let v_left = cluster_variance(cov, left);
            let v_right = cluster_variance(cov, right);
            let alpha = 1.0 - v_left / (v_left + v_right);

            for &i in left {
                weights[i] *= alpha;
            }
            for &i in right {
                weights[i] *= 1.0 - alpha;
            }
            next.push(left);
            next.push(right);
        }
        clusters = next;
    }

    weights
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_returns(seed: u64, periods: usize, assets: usize) -> ReturnsMatrix {
        let mut rng = StdRng::seed_from_u64(seed);
        let market: Vec<f64> = (0..periods).map(|_| rng.gen_range(-0.02..0.02)).collect();
        let values = Array2::from_shape_fn((periods, assets), |(t, a)| {
            let beta = 0.5 + a as f64 * 0.1;
            beta * market[t] + rng.gen_range(-0.01..0.01) * (1.0 + a as f64)
        });
        let symbols = (0..assets).map(|a| format!("S{a}")).collect();
        ReturnsMatrix::new(symbols, values).unwrap()
    }

    #[test]
    fn test_two_uncorrelated_assets_get_inverse_variance_weights() {
        let cov = array![[0.01, 0.0], [0.0, 0.04]];
        let weights = recursive_bisection(&cov, &[0, 1]);
        assert_relative_eq!(weights[0], 0.8, epsilon = 1e-12);
        assert_relative_eq!(weights[1], 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_single_linkage_groups_close_assets() {
        // 0 and 2 are close, 1 and 3 are close
        let distance = array![
            [0.0, 0.9, 0.1, 0.8],
            [0.9, 0.0, 0.7, 0.2],
            [0.1, 0.7, 0.0, 0.95],
            [0.8, 0.2, 0.95, 0.0]
        ];
        let order = quasi_diagonal_order(&distance);
        assert_eq!(order.len(), 4);
        let pos = |i: usize| order.iter().position(|&x| x == i).unwrap();
        assert_eq!(pos(0).abs_diff(pos(2)), 1);
        assert_eq!(pos(1).abs_diff(pos(3)), 1);
    }

    #[test]
    fn test_weights_positive_and_sum_to_one() {
        for seed in 0..5 {
            let returns = random_returns(seed, 120, 6);
            let result = HrpOptimizer::default().optimize(&returns).unwrap();

            let total: f64 = result.weights.iter().map(|(_, w)| w).sum();
            assert_relative_eq!(total, 1.0, epsilon = 1e-9);
            assert!(result.weights.iter().all(|(_, w)| w > 0.0));
            assert_eq!(
                result.weights.iter().map(|(s, _)| s.to_string()).collect::<Vec<_>>(),
                returns.symbols()
            );

            let perf = result.performance.unwrap();
            assert!(perf.annual_volatility > 0.0);
        }
    }

    #[test]
    fn test_ledoit_wolf_covariance_option() {
        let optimizer = HrpOptimizer::new(HrpConfig {
            covariance: CovarianceMethod::LedoitWolf,
            ..Default::default()
        });
        let result = optimizer.optimize(&random_returns(9, 60, 4)).unwrap();
        let total: f64 = result.weights.iter().map(|(_, w)| w).sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_too_few_assets() {
        let returns = random_returns(1, 30, 1);
        assert_eq!(
            HrpOptimizer::default().optimize(&returns).unwrap_err(),
            OptimizerError::TooFewAssets {
                required: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_insufficient_history() {
        let returns = random_returns(1, 1, 3);
        assert!(matches!(
            HrpOptimizer::default().optimize(&returns),
            Err(OptimizerError::InsufficientHistory { actual: 1, .. })
        ));
    }

    #[test]
    fn test_constant_price_is_degenerate() {
        let values = array![[0.01, 0.0], [-0.02, 0.0], [0.015, 0.0]];
        let returns = ReturnsMatrix::new(vec!["A".into(), "FLAT".into()], values).unwrap();
        match HrpOptimizer::default().optimize(&returns) {
            Err(OptimizerError::DegenerateCovariance(msg)) => assert!(msg.contains("FLAT")),
            other => panic!("expected degenerate covariance, got {other:?}"),
        }
    }
}
