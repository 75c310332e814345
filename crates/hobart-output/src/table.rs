//! Fixed-width terminal tables.

use crate::export::{CandidateExport, PlanExport};
use hobart_data::Direction;
use hobart_factors::GlossaryEntry;
use hobart_portfolio::PortfolioPerformance;

const WIDTH: usize = 80;

fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(width.saturating_sub(1)).collect();
    clipped.push('~');
    clipped
}

/// Ranked candidates, highest composite score first.
pub fn render_ranked_table(title: &str, candidates: &[CandidateExport]) -> String {
    let mut output = String::new();

    output.push_str(&format!("\n{title}\n"));
    output.push_str(&"=".repeat(WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{:<5} {:<8} {:<30} {:<24} {:>9}\n",
        "Rank", "Symbol", "Company", "Sector", "Score"
    ));
    output.push_str(&"-".repeat(WIDTH));
    output.push('\n');

    for candidate in candidates {
        output.push_str(&format!(
            "{:<5} {:<8} {:<30} {:<24} {:>9.2}\n",
            candidate.rank,
            candidate.symbol,
            clip(candidate.name.as_deref().unwrap_or("-"), 30),
            clip(candidate.sector.as_deref().unwrap_or("-"), 24),
            candidate.composite_score
        ));
    }

    output.push_str(&"=".repeat(WIDTH));
    output.push('\n');
    output
}

/// One line naming the tickers excluded for incomplete data, or nothing.
pub fn render_dropped(dropped: &[String]) -> String {
    if dropped.is_empty() {
        return String::new();
    }
    format!(
        "Dropped {} ticker(s) with incomplete data: {}\n",
        dropped.len(),
        dropped.join(", ")
    )
}

/// The whole-share purchase plan and its cash totals.
pub fn render_allocation_table(plan: &PlanExport) -> String {
    let mut output = String::new();

    output.push_str(&format!("\nPurchase Plan ({})\n", plan.date));
    output.push_str(&"=".repeat(WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{:<10} {:>10} {:>12} {:>10} {:>14} {:>10}\n",
        "Symbol", "Target", "Price", "Shares", "Cost", "Actual"
    ));
    output.push_str(&"-".repeat(WIDTH));
    output.push('\n');

    for position in &plan.positions {
        output.push_str(&format!(
            "{:<10} {:>9.2}% {:>12.2} {:>10} {:>14.2} {:>9.2}%\n",
            position.symbol,
            position.target_weight * 100.0,
            position.price,
            position.shares,
            position.cost,
            position.actual_weight * 100.0
        ));
    }

    output.push_str(&"-".repeat(WIDTH));
    output.push('\n');
    output.push_str(&format!("{:<20} {:>14.2}\n", "Budget", plan.budget));
    output.push_str(&format!("{:<20} {:>14.2}\n", "Invested", plan.invested));
    output.push_str(&format!("{:<20} {:>14.2}\n", "Leftover", plan.leftover));
    output.push_str(&"=".repeat(WIDTH));
    output.push('\n');
    output
}

/// Expected annual return, volatility and Sharpe ratio.
pub fn render_performance(performance: &PortfolioPerformance) -> String {
    let mut output = String::new();
    output.push_str("\nExpected Performance\n");
    output.push_str(&"-".repeat(40));
    output.push('\n');
    output.push_str(&format!(
        "{:<24} {:>11.2}%\n",
        "Expected annual return",
        performance.expected_annual_return * 100.0
    ));
    output.push_str(&format!(
        "{:<24} {:>11.2}%\n",
        "Annual volatility",
        performance.annual_volatility * 100.0
    ));
    output.push_str(&format!(
        "{:<24} {:>12.2}\n",
        "Sharpe ratio", performance.sharpe_ratio
    ));
    output
}

/// Numbered glossary menu.
pub fn render_glossary(entries: &[GlossaryEntry]) -> String {
    let mut output = String::new();
    output.push_str("\nAttribute Glossary\n");
    output.push_str(&"=".repeat(WIDTH));
    output.push('\n');
    for entry in entries {
        output.push_str(&format!(
            "{:>3}. {:<22} ({})\n",
            entry.number,
            entry.attribute.display_name(),
            entry.attribute.column()
        ));
    }
    output.push_str(&"=".repeat(WIDTH));
    output.push('\n');
    output
}

/// Full description of one glossary entry.
pub fn render_glossary_entry(entry: &GlossaryEntry) -> String {
    let direction = match entry.direction() {
        Direction::HigherIsBetter => "higher is better",
        Direction::LowerIsBetter => "lower is better",
    };
    format!(
        "\n{}. {} [{}]\n{}\n",
        entry.number,
        entry.attribute.display_name(),
        direction,
        entry.description
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use hobart_factors::{glossary, lookup};
    use std::collections::BTreeMap;

    fn candidate(rank: usize, symbol: &str, name: Option<&str>) -> CandidateExport {
        CandidateExport {
            rank,
            symbol: symbol.to_string(),
            name: name.map(str::to_string),
            sector: name.map(|_| "Information Technology".to_string()),
            composite_score: 71.256,
            percentiles: BTreeMap::new(),
        }
    }

    #[test]
    fn test_ranked_table() {
        let table = render_ranked_table(
            "Top Candidates",
            &[
                candidate(1, "MSFT", Some("Microsoft Corporation")),
                candidate(2, "ZZZ", None),
            ],
        );
        assert!(table.contains("Top Candidates"));
        assert!(table.contains("MSFT"));
        assert!(table.contains("Microsoft Corporation"));
        assert!(table.contains("71.26"));
        assert!(table.lines().any(|l| l.starts_with('2') && l.contains(" - ")));
    }

    #[test]
    fn test_long_names_are_clipped() {
        assert_eq!(clip("short", 10), "short");
        let clipped = clip("An Extremely Long Company Name Incorporated", 12);
        assert_eq!(clipped.chars().count(), 12);
        assert!(clipped.ends_with('~'));
    }

    #[test]
    fn test_dropped_line() {
        assert_eq!(render_dropped(&[]), "");
        let line = render_dropped(&["AAA".to_string(), "BBB".to_string()]);
        assert!(line.starts_with("Dropped 2 ticker(s)"));
        assert!(line.contains("AAA, BBB"));
    }

    #[test]
    fn test_performance_summary() {
        let text = render_performance(&PortfolioPerformance {
            expected_annual_return: 0.1234,
            annual_volatility: 0.2,
            sharpe_ratio: 0.517,
        });
        assert!(text.contains("12.34%"));
        assert!(text.contains("20.00%"));
        assert!(text.contains("0.52"));
    }

    #[test]
    fn test_glossary_rendering() {
        let menu = render_glossary(&glossary());
        assert_eq!(menu.lines().filter(|l| l.contains(". ")).count(), 11);
        assert!(menu.contains("forward_pe"));

        let entry = render_glossary_entry(&lookup("debt to equity").unwrap());
        assert!(entry.contains("lower is better"));
    }
}
