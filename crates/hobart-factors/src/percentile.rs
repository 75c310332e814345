//! Percentile Ranks
//!
//! rank(t, a) = 100 × |{non-null values of a ≤ value(t)}| / |{non-null values of a}|
//!
//! Ties share the inclusive count (the "max" rank method). Null inputs stay
//! null and do not enter the population. Lower-is-better attributes are
//! stored as `100 − rank`. Results are rounded to two decimals.

use hobart_data::{Attribute, Direction};
use polars::prelude::*;

/// Name of the percentile column derived from an attribute.
pub fn pct_column(attribute: Attribute) -> String {
    format!("{}_pct", attribute.column())
}

/// Percentile expression for one attribute, aliased to [`pct_column`].
pub fn percentile_expr(attribute: Attribute) -> Expr {
    let raw = col(attribute.column());

    let rank = raw
        .clone()
        .rank(
            RankOptions {
                method: RankMethod::Max,
                descending: false,
            },
            None,
        )
        .cast(DataType::Float64);
    let population = raw.is_not_null().sum().cast(DataType::Float64);
    let pct = rank * lit(100.0) / population;

    let oriented = match attribute.direction() {
        Direction::HigherIsBetter => pct,
        Direction::LowerIsBetter => lit(100.0) - pct,
    };

    oriented.round(2).alias(pct_column(attribute))
}

/// Add one `<attribute>_pct` column per attribute.
///
/// The frame must carry a Float64 column named after each attribute.
pub fn percentile_ranks(frame: LazyFrame, attributes: &[Attribute]) -> LazyFrame {
    let exprs: Vec<Expr> = attributes.iter().copied().map(percentile_expr).collect();
    frame.with_columns(exprs)
}
