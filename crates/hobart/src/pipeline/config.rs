//! Pipeline configuration.

use hobart_data::{DEFAULT_LOOKBACK_DAYS, FetchConfig};
use hobart_factors::{CompositeWeights, DEFAULT_MAX_PORTFOLIO_SIZE, MIN_PORTFOLIO_SIZE};
use hobart_output::ExportFormat;
use hobart_portfolio::BudgetBounds;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where and how to export each run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Directory the files are written to
    pub dir: PathBuf,
    /// File format
    pub format: ExportFormat,
}

/// Immutable settings for an interactive session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Pacing, timeout and retry policy for provider requests
    pub fetch: FetchConfig,
    /// Days of price history behind the target weights (default: 365)
    pub lookback_days: i64,
    /// Largest portfolio the user may choose (default: 50)
    pub max_portfolio_size: usize,
    /// Accepted budget range
    pub budget: BudgetBounds,
    /// Composite score weights
    pub weights: CompositeWeights,
    /// Directory of the day-scoped CSV cache, if caching
    pub cache_dir: Option<PathBuf>,
    /// Export of ranked candidates and plans, if requested
    pub export: Option<ExportSettings>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            fetch: FetchConfig::default(),
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            max_portfolio_size: DEFAULT_MAX_PORTFOLIO_SIZE,
            budget: BudgetBounds::default(),
            weights: CompositeWeights::default(),
            cache_dir: None,
            export: None,
        }
    }
}

impl PipelineConfig {
    /// Check the settings are usable.
    pub fn validate(&self) -> Result<(), String> {
        if self.lookback_days < 2 {
            return Err(format!(
                "lookback must cover at least 2 days, got {}",
                self.lookback_days
            ));
        }
        if self.max_portfolio_size < MIN_PORTFOLIO_SIZE {
            return Err(format!(
                "maximum portfolio size must be at least {MIN_PORTFOLIO_SIZE}, got {}",
                self.max_portfolio_size
            ));
        }
        self.weights.validate().map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = PipelineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.lookback_days, 365);
        assert_eq!(config.max_portfolio_size, 50);
        assert_eq!(config.fetch.max_in_flight, 1);
    }

    #[test]
    fn test_rejects_small_cap() {
        let config = PipelineConfig {
            max_portfolio_size: 2,
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().contains("at least 3"));
    }
}
