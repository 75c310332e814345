//! Daily returns from an assembled price table.

use crate::error::OptimizerError;
use hobart_data::PriceTable;
use ndarray::{Array1, Array2, Axis};
use tracing::debug;

/// Periods x assets matrix of simple returns.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnsMatrix {
    symbols: Vec<String>,
    values: Array2<f64>,
}

impl ReturnsMatrix {
    /// Wrap a returns matrix whose columns are `symbols`.
    pub fn new(symbols: Vec<String>, values: Array2<f64>) -> Result<Self, OptimizerError> {
        if symbols.len() != values.ncols() {
            return Err(OptimizerError::DimensionMismatch {
                symbols: symbols.len(),
                columns: values.ncols(),
            });
        }
        Ok(Self { symbols, values })
    }

    /// Simple daily returns of every ticker that has prices.
    ///
    /// All-null columns (failed fetches) are skipped. Only dates on which
    /// every remaining ticker has a price are used, and returns are taken
    /// between consecutive such dates.
    pub fn from_prices(table: &PriceTable) -> Result<Self, OptimizerError> {
        let columns: Vec<(&str, &[Option<f64>])> = table
            .iter_columns()
            .filter(|(_, c)| c.iter().any(Option::is_some))
            .collect();

        let complete_rows: Vec<Vec<f64>> = (0..table.height())
            .filter_map(|row| columns.iter().map(|(_, c)| c[row]).collect::<Option<Vec<f64>>>())
            .collect();

        let n_periods = complete_rows.len().saturating_sub(1);
        let n_assets = columns.len();
        let mut values = Array2::zeros((n_periods, n_assets));
        for (t, pair) in complete_rows.windows(2).enumerate() {
            for a in 0..n_assets {
                values[[t, a]] = pair[1][a] / pair[0][a] - 1.0;
            }
        }

        debug!(
            assets = n_assets,
            skipped = table.width() - n_assets,
            periods = n_periods,
            "built returns matrix"
        );

        Self::new(
            columns.iter().map(|(s, _)| (*s).to_string()).collect(),
            values,
        )
    }

    /// Column symbols.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// The raw matrix.
    pub const fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// Number of assets.
    pub fn n_assets(&self) -> usize {
        self.values.ncols()
    }

    /// Number of return observations.
    pub fn n_periods(&self) -> usize {
        self.values.nrows()
    }

    /// Mean return per period of each asset.
    pub fn mean_returns(&self) -> Array1<f64> {
        self.values
            .mean_axis(Axis(0))
            .unwrap_or_else(|| Array1::zeros(self.n_assets()))
    }
}
