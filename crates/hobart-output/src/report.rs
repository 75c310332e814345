//! JSON report of one pipeline run.

use crate::export::{CandidateExport, PlanExport};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A required field was never set.
    #[error("Report is missing {0}")]
    Incomplete(&'static str),
}

/// Everything one pass of the pipeline produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunReport {
    /// Index the universe came from.
    pub index: String,

    /// Report generation timestamp.
    pub generated_at: DateTime<Utc>,

    /// First day of the price lookback window.
    pub window_start: NaiveDate,

    /// Last day of the price lookback window.
    pub window_end: NaiveDate,

    /// Number of constituents in the universe.
    pub universe_size: usize,

    /// Tickers whose fundamentals could not be fetched.
    pub fundamentals_failed: Vec<String>,

    /// Tickers dropped from scoring for incomplete data.
    pub dropped: Vec<String>,

    /// Ranked candidates.
    pub candidates: Vec<CandidateExport>,

    /// Tickers the user chose, in rank order.
    pub selected: Vec<String>,

    /// Selected tickers whose price history could not be fetched.
    pub price_failures: Vec<String>,

    /// Name of the weight optimizer.
    pub optimizer: Option<String>,

    /// Whole-share purchase plan.
    pub plan: Option<PlanExport>,
}

impl RunReport {
    /// Convert report to JSON string.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the JSON report to `path`.
    pub fn write_to(&self, path: &Path) -> Result<(), ReportError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// Builder for creating reports.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    index: Option<String>,
    window: Option<(NaiveDate, NaiveDate)>,
    universe_size: usize,
    fundamentals_failed: Vec<String>,
    dropped: Vec<String>,
    candidates: Vec<CandidateExport>,
    selected: Vec<String>,
    price_failures: Vec<String>,
    optimizer: Option<String>,
    plan: Option<PlanExport>,
}

impl ReportBuilder {
    /// Create a new report builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the index name.
    pub fn index(mut self, index: impl Into<String>) -> Self {
        self.index = Some(index.into());
        self
    }

    /// Set the price lookback window.
    pub const fn window(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.window = Some((start, end));
        self
    }

    /// Set the universe size.
    pub const fn universe_size(mut self, size: usize) -> Self {
        self.universe_size = size;
        self
    }

    /// Set the tickers whose fundamentals failed.
    pub fn fundamentals_failed(mut self, symbols: Vec<String>) -> Self {
        self.fundamentals_failed = symbols;
        self
    }

    /// Set the tickers dropped for incomplete data.
    pub fn dropped(mut self, symbols: Vec<String>) -> Self {
        self.dropped = symbols;
        self
    }

    /// Set the ranked candidates.
    pub fn candidates(mut self, candidates: Vec<CandidateExport>) -> Self {
        self.candidates = candidates;
        self
    }

    /// Set the selected tickers.
    pub fn selected(mut self, symbols: Vec<String>) -> Self {
        self.selected = symbols;
        self
    }

    /// Set the tickers whose prices failed.
    pub fn price_failures(mut self, symbols: Vec<String>) -> Self {
        self.price_failures = symbols;
        self
    }

    /// Set the optimizer name.
    pub fn optimizer(mut self, name: impl Into<String>) -> Self {
        self.optimizer = Some(name.into());
        self
    }

    /// Set the purchase plan.
    pub fn plan(mut self, plan: PlanExport) -> Self {
        self.plan = Some(plan);
        self
    }

    /// Build the report.
    pub fn build(self) -> Result<RunReport, ReportError> {
        let index = self.index.ok_or(ReportError::Incomplete("index"))?;
        let (window_start, window_end) = self.window.ok_or(ReportError::Incomplete("window"))?;

        Ok(RunReport {
            index,
            generated_at: Utc::now(),
            window_start,
            window_end,
            universe_size: self.universe_size,
            fundamentals_failed: self.fundamentals_failed,
            dropped: self.dropped,
            candidates: self.candidates,
            selected: self.selected,
            price_failures: self.price_failures,
            optimizer: self.optimizer,
            plan: self.plan,
        })
    }
}
