//! Composite Score
//!
//! Combines eight percentile-ranked attributes into a single score and ranks
//! the universe by it. Tickers missing any contributing attribute are dropped
//! before percentiles are computed, so the population is the same for every
//! contributing column.

use crate::error::{FactorError, Result};
use crate::percentile::{pct_column, percentile_ranks};
use hobart_data::{Attribute, FundamentalsRecord, records_to_dataframe};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Name of the composite score column.
pub const COMPOSITE_COLUMN: &str = "composite_score";

const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Weights of the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositeWeights {
    /// Weight for forward P/E (inverted)
    pub forward_pe: f64,
    /// Weight for forward EPS
    pub forward_eps: f64,
    /// Weight for debt-to-equity (inverted)
    pub debt_to_equity: f64,
    /// Weight for return on equity
    pub return_on_equity: f64,
    /// Weight for return on assets
    pub return_on_assets: f64,
    /// Weight for revenue growth
    pub revenue_growth: f64,
    /// Weight for quick ratio
    pub quick_ratio: f64,
    /// Weight for quarterly return
    pub quarterly_return: f64,
}

impl Default for CompositeWeights {
    fn default() -> Self {
        Self {
            forward_pe: 0.1,
            forward_eps: 0.1,
            debt_to_equity: 0.1,
            return_on_equity: 0.1,
            return_on_assets: 0.1,
            revenue_growth: 0.2,
            quick_ratio: 0.1,
            quarterly_return: 0.2,
        }
    }
}

impl CompositeWeights {
    /// Attributes that contribute to the composite, in weight order.
    pub const CONTRIBUTING: [Attribute; 8] = [
        Attribute::ForwardPe,
        Attribute::ForwardEps,
        Attribute::DebtToEquity,
        Attribute::ReturnOnEquity,
        Attribute::ReturnOnAssets,
        Attribute::RevenueGrowth,
        Attribute::QuickRatio,
        Attribute::QuarterlyReturn,
    ];

    /// `(attribute, weight)` pairs.
    pub const fn pairs(&self) -> [(Attribute, f64); 8] {
        [
            (Attribute::ForwardPe, self.forward_pe),
            (Attribute::ForwardEps, self.forward_eps),
            (Attribute::DebtToEquity, self.debt_to_equity),
            (Attribute::ReturnOnEquity, self.return_on_equity),
            (Attribute::ReturnOnAssets, self.return_on_assets),
            (Attribute::RevenueGrowth, self.revenue_growth),
            (Attribute::QuickRatio, self.quick_ratio),
            (Attribute::QuarterlyReturn, self.quarterly_return),
        ]
    }

    /// Check the weights are finite, non-negative and sum to one.
    pub fn validate(&self) -> Result<()> {
        let pairs = self.pairs();
        if let Some((attribute, weight)) = pairs.iter().find(|(_, w)| !w.is_finite() || *w < 0.0) {
            return Err(FactorError::InvalidWeights(format!(
                "{attribute} weight {weight} must be a non-negative number"
            )));
        }
        let total: f64 = pairs.iter().map(|(_, w)| w).sum();
        if (total - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(FactorError::InvalidWeights(format!(
                "weights sum to {total}, expected 1"
            )));
        }
        Ok(())
    }

    /// Weighted sum of a candidate's percentiles, `None` if a contributing
    /// percentile is absent.
    pub fn combine(&self, percentiles: &[Option<f64>; Attribute::COUNT]) -> Option<f64> {
        self.pairs()
            .iter()
            .map(|(attribute, weight)| percentiles[attribute.index()].map(|p| p * weight))
            .sum()
    }

    fn expr(&self) -> Expr {
        self.pairs()
            .into_iter()
            .fold(lit(0.0), |acc, (attribute, weight)| {
                acc + col(pct_column(attribute)) * lit(weight)
            })
            .alias(COMPOSITE_COLUMN)
    }
}

/// A scored ticker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCandidate {
    /// Stock symbol
    pub symbol: String,
    /// Composite score in [0, 100]
    pub composite: f64,
    /// Percentile of every attribute, indexed by [`Attribute::index`]
    pub percentiles: [Option<f64>; Attribute::COUNT],
    /// Raw fundamentals the percentiles were derived from
    pub raw: FundamentalsRecord,
}

impl ScoredCandidate {
    /// Percentile of one attribute.
    pub const fn percentile(&self, attribute: Attribute) -> Option<f64> {
        self.percentiles[attribute.index()]
    }
}

/// Candidates ordered by composite score, highest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RankedCandidates(Vec<ScoredCandidate>);

impl RankedCandidates {
    /// Wrap an already ordered list.
    pub const fn from_sorted(candidates: Vec<ScoredCandidate>) -> Self {
        Self(candidates)
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Candidates in rank order.
    pub fn as_slice(&self) -> &[ScoredCandidate] {
        &self.0
    }

    /// Iterate in rank order.
    pub fn iter(&self) -> std::slice::Iter<'_, ScoredCandidate> {
        self.0.iter()
    }

    /// Symbols in rank order.
    pub fn symbols(&self) -> Vec<String> {
        self.0.iter().map(|c| c.symbol.clone()).collect()
    }

    /// The first `n` candidates. `n` beyond the length returns everything.
    pub fn top(&self, n: usize) -> Self {
        Self(self.0.iter().take(n).cloned().collect())
    }
}

impl<'a> IntoIterator for &'a RankedCandidates {
    type Item = &'a ScoredCandidate;
    type IntoIter = std::slice::Iter<'a, ScoredCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ranked candidates plus the tickers excluded for missing data.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoringOutcome {
    /// Candidates ordered by composite score
    pub ranked: RankedCandidates,
    /// Symbols dropped for lacking a contributing attribute, in input order
    pub dropped: Vec<String>,
}

impl ScoringOutcome {
    /// Number of dropped tickers.
    pub fn dropped_count(&self) -> usize {
        self.dropped.len()
    }
}

/// Scores a universe's fundamentals.
#[derive(Debug, Clone, Default)]
pub struct CompositeScorer {
    weights: CompositeWeights,
}

impl CompositeScorer {
    /// Create a scorer, rejecting invalid weights.
    pub fn new(weights: CompositeWeights) -> Result<Self> {
        weights.validate()?;
        Ok(Self { weights })
    }

    /// Weights in use.
    pub const fn weights(&self) -> &CompositeWeights {
        &self.weights
    }

    /// Score and rank `records`.
    ///
    /// Ties keep the input order. Errors only if no record carries every
    /// contributing attribute.
    pub fn score(&self, records: &[FundamentalsRecord]) -> Result<ScoringOutcome> {
        let (kept, dropped): (Vec<&FundamentalsRecord>, Vec<&FundamentalsRecord>) = records
            .iter()
            .partition(|r| r.has_all(&CompositeWeights::CONTRIBUTING));

        let dropped: Vec<String> = dropped.into_iter().map(|r| r.symbol.clone()).collect();
        for symbol in &dropped {
            debug!(symbol = %symbol, "dropped for missing scoring attributes");
        }
        if kept.is_empty() {
            return Err(FactorError::NoCandidates {
                dropped: dropped.len(),
            });
        }

        let kept: Vec<FundamentalsRecord> = kept.into_iter().cloned().collect();
        let frame = records_to_dataframe(&kept)?
            .lazy()
            .with_row_index("input_order", None);

        let scored = percentile_ranks(frame, &Attribute::ALL)
            .with_columns([self.weights.expr()])
            .sort(
                [COMPOSITE_COLUMN],
                SortMultipleOptions::default()
                    .with_order_descending(true)
                    .with_maintain_order(true),
            )
            .collect()?;

        let order = scored
            .column("input_order")?
            .as_materialized_series()
            .idx()?;
        let composite = scored.column(COMPOSITE_COLUMN)?.f64()?;
        let pct_columns = Attribute::ALL
            .iter()
            .map(|a| Ok(scored.column(&pct_column(*a))?.f64()?.clone()))
            .collect::<Result<Vec<Float64Chunked>>>()?;

        let mut ranked = Vec::with_capacity(scored.height());
        for row in 0..scored.height() {
            let (Some(index), Some(score)) = (order.get(row), composite.get(row)) else {
                continue;
            };
            let mut percentiles = [None; Attribute::COUNT];
            for (slot, column) in percentiles.iter_mut().zip(&pct_columns) {
                *slot = column.get(row);
            }
            let raw = kept[index as usize].clone();
            ranked.push(ScoredCandidate {
                symbol: raw.symbol.clone(),
                composite: score,
                percentiles,
                raw,
            });
        }

        info!(
            scored = ranked.len(),
            dropped = dropped.len(),
            "scored universe"
        );

        Ok(ScoringOutcome {
            ranked: RankedCandidates::from_sorted(ranked),
            dropped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn complete(symbol: &str, base: f64) -> FundamentalsRecord {
        CompositeWeights::CONTRIBUTING
            .into_iter()
            .fold(FundamentalsRecord::new(symbol), |r, a| r.with(a, Some(base)))
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        let weights = CompositeWeights::default();
        weights.validate().unwrap();
        let total: f64 = weights.pairs().iter().map(|(_, w)| w).sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_weights_rejected() {
        let negative = CompositeWeights {
            forward_pe: -0.1,
            quarterly_return: 0.4,
            ..Default::default()
        };
        assert!(matches!(negative.validate(), Err(FactorError::InvalidWeights(_))));

        let short = CompositeWeights {
            revenue_growth: 0.1,
            ..Default::default()
        };
        assert!(CompositeScorer::new(short).is_err());
    }

    #[test]
    fn test_raising_a_percentile_never_lowers_composite() {
        let weights = CompositeWeights::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let mut pct = [None; Attribute::COUNT];
            for attribute in CompositeWeights::CONTRIBUTING {
                pct[attribute.index()] = Some(rng.gen_range(0.0..=100.0));
            }
            let before = weights.combine(&pct).unwrap();

            let bumped = CompositeWeights::CONTRIBUTING[rng.gen_range(0..8)];
            let current = pct[bumped.index()].unwrap();
            pct[bumped.index()] = Some(rng.gen_range(current..=100.0));

            assert!(weights.combine(&pct).unwrap() >= before);
        }
    }

    #[test]
    fn test_combine_requires_every_contributor() {
        let mut pct = [Some(50.0); Attribute::COUNT];
        assert_relative_eq!(CompositeWeights::default().combine(&pct).unwrap(), 50.0);
        pct[Attribute::QuickRatio.index()] = None;
        assert_eq!(CompositeWeights::default().combine(&pct), None);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let records = vec![complete("B", 1.0), complete("A", 1.0), complete("C", 1.0)];
        let outcome = CompositeScorer::default().score(&records).unwrap();
        assert_eq!(outcome.ranked.symbols(), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_all_dropped_is_an_error() {
        let records = vec![FundamentalsRecord::new("A"), FundamentalsRecord::new("B")];
        assert!(matches!(
            CompositeScorer::default().score(&records),
            Err(FactorError::NoCandidates { dropped: 2 })
        ));
    }

    #[test]
    fn test_top_of_full_length_is_identity() {
        let records = vec![complete("A", 1.0), complete("B", 2.0), complete("C", 3.0)];
        let ranked = CompositeScorer::default().score(&records).unwrap().ranked;
        assert_eq!(ranked.top(ranked.len()), ranked);
        assert_eq!(ranked.top(2).symbols(), vec!["C", "B"]);
    }
}
