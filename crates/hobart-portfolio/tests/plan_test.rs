//! From an assembled price table to a whole-share plan.

use chrono::NaiveDate;
use hobart_data::{PricePoint, PriceSeries, PriceTable};
use hobart_portfolio::{
    BudgetBounds, DiscreteAllocator, HrpOptimizer, OptimizerError, ReturnsMatrix, WeightOptimizer,
};
use rust_decimal::Decimal;

fn trending(symbol: &str, start: f64, drift: f64, wobble: f64) -> PriceSeries {
    let first = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    PriceSeries::new(
        symbol,
        (0..200).map(|day| {
            let t = day as f64;
            PricePoint {
                date: first + chrono::Duration::days(day),
                adjusted_close: start * (1.0 + drift * t) * (1.0 + wobble * (t * 0.7).sin()),
            }
        }),
    )
}

#[test]
fn test_failed_ticker_is_excluded_from_plan() {
    let table = PriceTable::outer_join(vec![
        ("AAA".to_string(), Some(trending("AAA", 120.0, 0.001, 0.01))),
        ("BBB".to_string(), Some(trending("BBB", 45.0, 0.0005, 0.03))),
        ("MISSING".to_string(), None),
        ("CCC".to_string(), Some(trending("CCC", 310.0, -0.0002, 0.02))),
    ]);

    let returns = ReturnsMatrix::from_prices(&table).unwrap();
    assert_eq!(returns.symbols(), &["AAA", "BBB", "CCC"]);
    assert_eq!(returns.n_periods(), 199);

    let optimized = HrpOptimizer::default().optimize(&returns).unwrap();
    let budget = BudgetBounds::default().validate("$10,000").unwrap();
    let plan = DiscreteAllocator
        .allocate(&optimized.weights, &table.latest_prices(), budget)
        .unwrap();

    assert_eq!(plan.positions.len(), 3);
    assert_eq!(plan.invested() + plan.leftover, Decimal::from(10_000));
    assert!(plan.positions.iter().all(|p| plan.leftover < p.price));
    assert!(plan.shares("MISSING").is_none());

    // the least volatile asset gets the largest target weight
    let aaa = optimized.weights.get("AAA").unwrap();
    assert!(aaa > optimized.weights.get("BBB").unwrap());
}

#[test]
fn test_single_surviving_ticker_cannot_be_optimized() {
    let table = PriceTable::outer_join(vec![
        ("AAA".to_string(), Some(trending("AAA", 120.0, 0.001, 0.01))),
        ("BBB".to_string(), None),
        ("CCC".to_string(), None),
    ]);
    let returns = ReturnsMatrix::from_prices(&table).unwrap();

    assert!(matches!(
        HrpOptimizer::default().optimize(&returns),
        Err(OptimizerError::TooFewAssets { actual: 1, .. })
    ));
}
