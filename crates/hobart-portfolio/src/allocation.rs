//! Discrete Allocation
//!
//! Converts target weights, latest prices and a cash budget into whole-share
//! counts:
//!
//! 1. ideal_i = w_i × B; shares_i = floor(ideal_i / price_i).
//! 2. remaining = B − Σ shares_i × price_i.
//! 3. While some ticker with w_i > 0 has price_i ≤ remaining, give one share
//!    to the one with the largest shortfall ideal_i − shares_i × price_i
//!    (earliest in weight order on ties).
//!
//! All money is `Decimal`, so Σ shares_i × price_i + leftover == B exactly.

use crate::error::AllocationError;
use crate::optimizer::TargetWeights;
use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Accepted range for the investment budget, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetBounds {
    min: Decimal,
    max: Decimal,
}

impl Default for BudgetBounds {
    fn default() -> Self {
        Self {
            min: Decimal::ONE_HUNDRED,
            max: Decimal::from(10_000_000),
        }
    }
}

impl BudgetBounds {
    /// Create bounds; `min` must be positive and not above `max`.
    pub fn new(min: Decimal, max: Decimal) -> Result<Self, AllocationError> {
        if min <= Decimal::ZERO || min > max {
            return Err(AllocationError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound.
    pub const fn min(&self) -> Decimal {
        self.min
    }

    /// Upper bound.
    pub const fn max(&self) -> Decimal {
        self.max
    }

    /// Parse a user-entered amount such as `"$25,000.50"` and check it.
    pub fn validate(&self, input: &str) -> Result<Decimal, AllocationError> {
        let trimmed = input.trim();
        let cleaned: String = trimmed
            .strip_prefix('$')
            .unwrap_or(trimmed)
            .chars()
            .filter(|c| *c != ',')
            .collect();

        let budget = Decimal::from_str(cleaned.trim())
            .map_err(|_| AllocationError::NotANumber(trimmed.to_string()))?;

        if budget < self.min || budget > self.max {
            return Err(AllocationError::BudgetOutOfRange {
                budget,
                min: self.min,
                max: self.max,
            });
        }
        Ok(budget)
    }
}

/// One line of the purchase plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Stock symbol
    pub symbol: String,
    /// Target weight
    pub weight: f64,
    /// Latest price used
    pub price: Decimal,
    /// Whole shares to buy
    pub shares: u64,
}

impl Position {
    /// Cash spent on this line.
    ///
    /// Saturates at `Decimal::MAX`; plans built by [`DiscreteAllocator`]
    /// never cost more than their budget.
    pub fn cost(&self) -> Decimal {
        self.price
            .checked_mul(Decimal::from(self.shares))
            .unwrap_or(Decimal::MAX)
    }

    /// Fraction of `budget` spent on this line.
    pub fn actual_weight(&self, budget: Decimal) -> f64 {
        if budget.is_zero() {
            return 0.0;
        }
        (self.cost() / budget).to_f64().unwrap_or(0.0)
    }
}

/// Whole-share purchase plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscreteAllocation {
    /// Positions in target weight order
    pub positions: Vec<Position>,
    /// Unspent cash
    pub leftover: Decimal,
    /// Budget allocated
    pub budget: Decimal,
}

impl DiscreteAllocation {
    /// Shares of one symbol.
    pub fn shares(&self, symbol: &str) -> Option<u64> {
        self.positions
            .iter()
            .find(|p| p.symbol == symbol)
            .map(|p| p.shares)
    }

    /// Total cash spent.
    pub fn invested(&self) -> Decimal {
        self.positions.iter().map(Position::cost).sum()
    }

    /// Whether no share was bought.
    pub fn is_empty(&self) -> bool {
        self.positions.iter().all(|p| p.shares == 0)
    }
}

/// Greedy largest-shortfall whole-share allocator.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscreteAllocator;

impl DiscreteAllocator {
    /// Allocate `budget` across `weights` at `prices`.
    ///
    /// Tickers with zero weight may lack a price; every other ticker needs a
    /// positive, finite one.
    pub fn allocate(
        &self,
        weights: &TargetWeights,
        prices: &[(String, f64)],
        budget: Decimal,
    ) -> Result<DiscreteAllocation, AllocationError> {
        if budget <= Decimal::ZERO {
            return Err(AllocationError::NonPositiveBudget(budget));
        }
        let prices: HashMap<&str, f64> = prices.iter().map(|(s, p)| (s.as_str(), *p)).collect();

        let mut positions = Vec::with_capacity(weights.len());
        let mut ideal = Vec::with_capacity(weights.len());
        for (symbol, weight) in weights.iter() {
            let price = match prices.get(symbol) {
                Some(p) => to_price(symbol, *p)?,
                None if weight > 0.0 => return Err(AllocationError::MissingPrice(symbol.to_string())),
                None => Decimal::ZERO,
            };
            let overflow = || AllocationError::Overflow {
                symbol: symbol.to_string(),
            };
            let target = Decimal::from_f64(weight)
                .unwrap_or(Decimal::ZERO)
                .checked_mul(budget)
                .ok_or_else(overflow)?;
            let shares = if weight > 0.0 {
                target
                    .checked_div(price)
                    .ok_or_else(overflow)?
                    .floor()
                    .to_u64()
                    .ok_or_else(overflow)?
            } else {
                0
            };
            positions.push(Position {
                symbol: symbol.to_string(),
                weight,
                price,
                shares,
            });
            ideal.push(target);
        }

        let mut remaining = budget - positions.iter().map(Position::cost).sum::<Decimal>();

        // decimal weights may sum a hair above one
        while remaining < Decimal::ZERO {
            let Some(i) = (0..positions.len())
                .filter(|&i| positions[i].shares > 0)
                .max_by_key(|&i| positions[i].cost() - ideal[i])
            else {
                break;
            };
            positions[i].shares -= 1;
            remaining += positions[i].price;
        }

        let mut awarded = 0usize;

        loop {
            let next = positions
                .iter()
                .enumerate()
                .filter(|(_, p)| p.weight > 0.0 && p.price <= remaining)
                .map(|(i, p)| (i, ideal[i] - p.cost()))
                .fold(None, |best: Option<(usize, Decimal)>, (i, shortfall)| match best {
                    Some((_, top)) if top >= shortfall => best,
                    _ => Some((i, shortfall)),
                });

            let Some((i, _)) = next else { break };
            positions[i].shares += 1;
            remaining -= positions[i].price;
            awarded += 1;
        }

        debug!(
            positions = positions.len(),
            greedy_shares = awarded,
            leftover = %remaining,
            "allocated budget"
        );

        Ok(DiscreteAllocation {
            positions,
            leftover: remaining,
            budget,
        })
    }
}

fn to_price(symbol: &str, price: f64) -> Result<Decimal, AllocationError> {
    let invalid = || AllocationError::InvalidPrice {
        symbol: symbol.to_string(),
        price,
    };
    if !price.is_finite() || price <= 0.0 {
        return Err(invalid());
    }
    let decimal = Decimal::from_f64(price).ok_or_else(invalid)?;
    if decimal <= Decimal::ZERO {
        return Err(invalid());
    }
    Ok(decimal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn weights(pairs: &[(&str, f64)]) -> TargetWeights {
        TargetWeights::new(pairs.iter().map(|(s, w)| (s.to_string(), *w)).collect()).unwrap()
    }

    fn prices(pairs: &[(&str, f64)]) -> Vec<(String, f64)> {
        pairs.iter().map(|(s, p)| (s.to_string(), *p)).collect()
    }

    #[test]
    fn test_greedy_fills_affordable_ticker() {
        let plan = DiscreteAllocator
            .allocate(
                &weights(&[("A", 0.5), ("B", 0.5)]),
                &prices(&[("A", 100.0), ("B", 30.0)]),
                dec!(100),
            )
            .unwrap();

        assert_eq!(plan.shares("A"), Some(0));
        assert_eq!(plan.shares("B"), Some(3));
        assert_eq!(plan.leftover, dec!(10));
        assert_eq!(plan.invested() + plan.leftover, dec!(100));
    }

    #[test]
    fn test_budget_below_every_price() {
        let plan = DiscreteAllocator
            .allocate(
                &weights(&[("A", 0.6), ("B", 0.4)]),
                &prices(&[("A", 250.0), ("B", 120.5)]),
                dec!(120),
            )
            .unwrap();
        assert!(plan.is_empty());
        assert_eq!(plan.leftover, dec!(120));
    }

    #[test]
    fn test_zero_weight_never_bought() {
        let plan = DiscreteAllocator
            .allocate(
                &weights(&[("A", 1.0), ("Z", 0.0)]),
                &prices(&[("A", 400.0), ("Z", 1.0)]),
                dec!(1000),
            )
            .unwrap();
        assert_eq!(plan.shares("A"), Some(2));
        assert_eq!(plan.shares("Z"), Some(0));
        assert_eq!(plan.leftover, dec!(200));
    }

    #[test]
    fn test_shortfall_ties_follow_weight_order() {
        // equal weights and prices: the floor step buys one each, then the
        // remaining 50 goes to the first ticker
        let plan = DiscreteAllocator
            .allocate(
                &weights(&[("B", 0.5), ("A", 0.5)]),
                &prices(&[("A", 50.0), ("B", 50.0)]),
                dec!(150),
            )
            .unwrap();
        assert_eq!(plan.shares("B"), Some(2));
        assert_eq!(plan.shares("A"), Some(1));
        assert_eq!(plan.leftover, Decimal::ZERO);
    }

    #[test]
    fn test_missing_price_for_weighted_ticker() {
        let result = DiscreteAllocator.allocate(
            &weights(&[("A", 0.5), ("B", 0.5)]),
            &prices(&[("A", 10.0)]),
            dec!(100),
        );
        assert_eq!(result, Err(AllocationError::MissingPrice("B".to_string())));
    }

    #[test]
    fn test_invalid_price_and_budget() {
        let w = weights(&[("A", 1.0)]);
        assert!(matches!(
            DiscreteAllocator.allocate(&w, &prices(&[("A", 0.0)]), dec!(100)),
            Err(AllocationError::InvalidPrice { .. })
        ));
        assert!(matches!(
            DiscreteAllocator.allocate(&w, &prices(&[("A", 10.0)]), dec!(0)),
            Err(AllocationError::NonPositiveBudget(_))
        ));
    }

    #[rstest]
    #[case::quotient_exceeds_decimal(1e-24)]
    #[case::shares_exceed_u64(1e-15)]
    fn test_tiny_price_reports_overflow(#[case] price: f64) {
        let result =
            DiscreteAllocator.allocate(&weights(&[("A", 1.0)]), &prices(&[("A", price)]), dec!(10000000));
        assert_eq!(
            result,
            Err(AllocationError::Overflow {
                symbol: "A".to_string()
            })
        );
    }

    #[test]
    fn test_cash_is_conserved_exactly() {
        let mut rng = StdRng::seed_from_u64(2024);

        for _ in 0..300 {
            let n = rng.gen_range(1..=8);
            let mut raw: Vec<f64> = (0..n)
                .map(|_| if rng.gen_bool(0.2) { 0.0 } else { rng.gen_range(0.01..1.0) })
                .collect();
            if raw.iter().all(|w| *w == 0.0) {
                raw[0] = 1.0;
            }
            let total: f64 = raw.iter().sum();
            let symbols: Vec<String> = (0..n).map(|i| format!("T{i}")).collect();
            let target = TargetWeights::new(
                symbols.iter().cloned().zip(raw.iter().map(|w| w / total)).collect(),
            )
            .unwrap();
            let price_list: Vec<(String, f64)> = symbols
                .iter()
                .map(|s| (s.clone(), (rng.gen_range(100..=90_000) as f64) / 100.0))
                .collect();
            let budget = Decimal::new(rng.gen_range(100..=5_000_000), 2);

            let plan = DiscreteAllocator.allocate(&target, &price_list, budget).unwrap();

            assert_eq!(plan.invested() + plan.leftover, budget);
            assert!(plan.leftover >= Decimal::ZERO);

            let eligible: Vec<&Position> = plan.positions.iter().filter(|p| p.weight > 0.0).collect();
            for p in &eligible {
                assert!(plan.leftover < p.price, "{} still affordable", p.symbol);
            }
            let cheapest = eligible.iter().map(|p| p.price).min().unwrap();
            assert_eq!(plan.is_empty(), budget < cheapest);
        }
    }

    #[rstest]
    #[case("1000", dec!(1000))]
    #[case("$25,000.50", dec!(25000.50))]
    #[case("  100 ", dec!(100))]
    #[case("10,000,000", dec!(10000000))]
    fn test_budget_accepts(#[case] input: &str, #[case] expected: Decimal) {
        assert_eq!(BudgetBounds::default().validate(input), Ok(expected));
    }

    #[rstest]
    #[case("99.99")]
    #[case("10000000.01")]
    #[case("-500")]
    fn test_budget_out_of_range(#[case] input: &str) {
        assert!(matches!(
            BudgetBounds::default().validate(input),
            Err(AllocationError::BudgetOutOfRange { .. })
        ));
    }

    #[rstest]
    #[case("")]
    #[case("lots")]
    #[case("1e3x")]
    fn test_budget_not_a_number(#[case] input: &str) {
        assert!(matches!(
            BudgetBounds::default().validate(input),
            Err(AllocationError::NotANumber(_))
        ));
    }

    #[test]
    fn test_budget_bounds_rejects_inverted() {
        assert!(BudgetBounds::new(dec!(500), dec!(100)).is_err());
        assert!(BudgetBounds::new(dec!(0), dec!(100)).is_err());
        assert!(BudgetBounds::new(dec!(1), dec!(1)).is_ok());
    }
}
