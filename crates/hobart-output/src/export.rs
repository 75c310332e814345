//! CSV and JSON export of ranked candidates and purchase plans.

use chrono::NaiveDate;
use hobart_data::Attribute;
use hobart_factors::{RankedCandidates, pct_column};
use hobart_portfolio::{DiscreteAllocation, PortfolioPerformance};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid format error.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Export format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    /// Comma-separated values format.
    #[default]
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "pretty-json" | "pretty_json" | "prettyjson" => Ok(Self::PrettyJson),
            other => Err(ExportError::InvalidFormat(other.to_string())),
        }
    }
}

/// One ranked candidate, flattened for export.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CandidateExport {
    /// 1-based rank by composite score.
    pub rank: usize,

    /// Stock symbol.
    pub symbol: String,

    /// Company name, when the universe provides it.
    pub name: Option<String>,

    /// GICS sector, when the universe provides it.
    pub sector: Option<String>,

    /// Composite score.
    pub composite_score: f64,

    /// Percentile per attribute column name.
    pub percentiles: BTreeMap<String, Option<f64>>,
}

impl CandidateExport {
    /// Flatten a ranked list. `describe` maps a symbol to its company name
    /// and sector.
    pub fn from_ranked<F>(ranked: &RankedCandidates, describe: F) -> Vec<Self>
    where
        F: Fn(&str) -> Option<(String, String)>,
    {
        ranked
            .iter()
            .enumerate()
            .map(|(i, candidate)| {
                let (name, sector) = match describe(&candidate.symbol) {
                    Some((name, sector)) => (Some(name), Some(sector)),
                    None => (None, None),
                };
                Self {
                    rank: i + 1,
                    symbol: candidate.symbol.clone(),
                    name,
                    sector,
                    composite_score: candidate.composite,
                    percentiles: Attribute::ALL
                        .into_iter()
                        .map(|a| (a.column().to_string(), candidate.percentile(a)))
                        .collect(),
                }
            })
            .collect()
    }

    /// Percentile of one attribute.
    pub fn percentile(&self, attribute: Attribute) -> Option<f64> {
        self.percentiles.get(attribute.column()).copied().flatten()
    }
}

/// One line of a purchase plan, flattened for export.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AllocationExport {
    /// Stock symbol.
    pub symbol: String,

    /// Weight requested by the optimizer.
    pub target_weight: f64,

    /// Share of the budget actually spent.
    pub actual_weight: f64,

    /// Latest price.
    pub price: Decimal,

    /// Whole shares to buy.
    pub shares: u64,

    /// Cash spent.
    pub cost: Decimal,
}

/// A purchase plan with its cash totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanExport {
    /// Date the prices were taken.
    pub date: NaiveDate,

    /// Budget allocated.
    pub budget: Decimal,

    /// Cash spent on shares.
    pub invested: Decimal,

    /// Unspent cash.
    pub leftover: Decimal,

    /// Plan lines in target weight order.
    pub positions: Vec<AllocationExport>,

    /// Expected performance of the target weights.
    pub performance: Option<PortfolioPerformance>,
}

impl PlanExport {
    /// Flatten an allocation.
    pub fn new(
        date: NaiveDate,
        allocation: &DiscreteAllocation,
        performance: Option<PortfolioPerformance>,
    ) -> Self {
        let positions = allocation
            .positions
            .iter()
            .map(|p| AllocationExport {
                symbol: p.symbol.clone(),
                target_weight: p.weight,
                actual_weight: p.actual_weight(allocation.budget),
                price: p.price,
                shares: p.shares,
                cost: p.cost(),
            })
            .collect();

        Self {
            date,
            budget: allocation.budget,
            invested: allocation.invested(),
            leftover: allocation.leftover,
            positions,
            performance,
        }
    }

    /// Number of tickers receiving at least one share.
    pub fn funded_count(&self) -> usize {
        self.positions.iter().filter(|p| p.shares > 0).count()
    }
}

/// Trait for exporting data in various formats.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError>;

    /// Export data to a file in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
        let content = self.export_to_string(format)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

fn into_string(wtr: csv::Writer<Vec<u8>>) -> Result<String, ExportError> {
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes).map_err(|e| ExportError::InvalidFormat(e.to_string()))
}

fn optional(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl Exporter for [CandidateExport] {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(vec![]);
                let mut header: Vec<String> = ["rank", "symbol", "name", "sector", "composite_score"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect();
                header.extend(Attribute::ALL.into_iter().map(pct_column));
                wtr.write_record(&header)?;

                for candidate in self {
                    let mut row = vec![
                        candidate.rank.to_string(),
                        candidate.symbol.clone(),
                        candidate.name.clone().unwrap_or_default(),
                        candidate.sector.clone().unwrap_or_default(),
                        candidate.composite_score.to_string(),
                    ];
                    row.extend(
                        Attribute::ALL
                            .into_iter()
                            .map(|a| optional(candidate.percentile(a))),
                    );
                    wtr.write_record(&row)?;
                }
                into_string(wtr)
            }
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

impl Exporter for [AllocationExport] {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(vec![]);
                for record in self {
                    wtr.serialize(record)?;
                }
                into_string(wtr)
            }
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

impl Exporter for PlanExport {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => {
                let mut output = String::new();

                output.push_str(&format!("# Date: {}\n", self.date));
                output.push_str(&format!("# Budget: {}\n", self.budget));
                output.push_str(&format!("# Invested: {}\n", self.invested));
                output.push_str(&format!("# Leftover: {}\n", self.leftover));

                let mut wtr = csv::Writer::from_writer(vec![]);
                wtr.write_record([
                    "symbol",
                    "target_weight",
                    "actual_weight",
                    "price",
                    "shares",
                    "cost",
                ])?;
                for position in &self.positions {
                    wtr.write_record([
                        &position.symbol,
                        &position.target_weight.to_string(),
                        &position.actual_weight.to_string(),
                        &position.price.to_string(),
                        &position.shares.to_string(),
                        &position.cost.to_string(),
                    ])?;
                }
                output.push_str(&into_string(wtr)?);
                Ok(output)
            }
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

/// Write `<stem>_candidates.<ext>` and, when a plan is given,
/// `<stem>_plan.<ext>` under `dir`, creating it if needed.
///
/// Returns the paths written.
pub fn export_run(
    dir: &Path,
    stem: &str,
    candidates: &[CandidateExport],
    plan: Option<&PlanExport>,
    format: ExportFormat,
) -> Result<Vec<PathBuf>, ExportError> {
    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(2);
    let path = dir.join(format!("{stem}_candidates.{}", format.extension()));
    candidates.export_to_file(&path, format)?;
    written.push(path);

    if let Some(plan) = plan {
        let path = dir.join(format!("{stem}_plan.{}", format.extension()));
        plan.export_to_file(&path, format)?;
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hobart_portfolio::Position;
    use rust_decimal_macros::dec;

    fn plan() -> PlanExport {
        let allocation = DiscreteAllocation {
            positions: vec![
                Position {
                    symbol: "A".to_string(),
                    weight: 0.5,
                    price: dec!(100),
                    shares: 0,
                },
                Position {
                    symbol: "B".to_string(),
                    weight: 0.5,
                    price: dec!(30),
                    shares: 3,
                },
            ],
            leftover: dec!(10),
            budget: dec!(100),
        };
        PlanExport::new(
            NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            &allocation,
            None,
        )
    }

    #[test]
    fn test_plan_totals() {
        let plan = plan();
        assert_eq!(plan.invested, dec!(90));
        assert_eq!(plan.leftover, dec!(10));
        assert_eq!(plan.funded_count(), 1);
        assert_eq!(plan.positions[1].cost, dec!(90));
        assert!((plan.positions[1].actual_weight - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_plan_csv() {
        let csv = plan().export_to_string(ExportFormat::Csv).unwrap();
        assert!(csv.contains("# Budget: 100"));
        assert!(csv.contains("# Leftover: 10"));
        assert!(csv.contains("symbol,target_weight,actual_weight,price,shares,cost"));
        assert!(csv.contains("B,0.5,0.9,30,3,90"));
    }

    #[test]
    fn test_plan_pretty_json() {
        let json = plan().export_to_string(ExportFormat::PrettyJson).unwrap();
        assert!(json.contains("\"leftover\""));
        assert!(json.contains("  "));
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["positions"][1]["shares"], 3);
    }

    #[test]
    fn test_allocation_lines_csv() {
        let csv = plan().positions.export_to_string(ExportFormat::Csv).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("symbol,target_weight,actual_weight,price,shares,cost")
        );
        assert_eq!(lines.count(), 2);
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!(
            "pretty-json".parse::<ExportFormat>().unwrap(),
            ExportFormat::PrettyJson
        );
        assert!(matches!(
            "xml".parse::<ExportFormat>(),
            Err(ExportError::InvalidFormat(_))
        ));
        assert_eq!(ExportFormat::PrettyJson.extension(), "json");
    }
}
