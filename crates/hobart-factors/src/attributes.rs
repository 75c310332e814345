//! Attribute Glossary
//!
//! Numbered descriptions of every attribute Hobart fetches, with lookup by
//! number, column name or display name.

use hobart_data::{Attribute, Direction};
use serde::Serialize;

/// One glossary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GlossaryEntry {
    /// 1-based position in the glossary menu
    pub number: usize,
    /// The attribute described
    pub attribute: Attribute,
    /// What the attribute measures
    pub description: &'static str,
}

impl GlossaryEntry {
    /// Whether a larger value is preferable.
    pub const fn direction(&self) -> Direction {
        self.attribute.direction()
    }
}

const fn describe(attribute: Attribute) -> &'static str {
    match attribute {
        Attribute::MarketCap => {
            "Total market value of a company's outstanding shares: share price times shares outstanding."
        }
        Attribute::ForwardPe => {
            "Share price divided by expected earnings per share over the next twelve months. Lower means cheaper relative to earnings."
        }
        Attribute::PriceToBook => {
            "Share price divided by book value per share; how the market values the company against its net assets."
        }
        Attribute::ForwardEps => {
            "Analysts' expected earnings per share over the next twelve months."
        }
        Attribute::DebtToEquity => {
            "Total debt divided by shareholders' equity. Lower means less reliance on borrowing."
        }
        Attribute::ReturnOnEquity => {
            "Net income divided by shareholders' equity; profit generated per unit of owner capital."
        }
        Attribute::ReturnOnAssets => {
            "Net income divided by total assets; how efficiently assets produce profit."
        }
        Attribute::RevenueGrowth => {
            "Year-over-year change in revenue for the most recent quarter."
        }
        Attribute::QuickRatio => {
            "Liquid current assets (cash, marketable securities, receivables) divided by current liabilities."
        }
        Attribute::DividendYield => {
            "Annual dividends per share divided by the share price."
        }
        Attribute::QuarterlyReturn => {
            "Change in adjusted share price over roughly the last three months."
        }
    }
}

/// Every glossary entry, numbered from 1 in canonical attribute order.
pub fn glossary() -> Vec<GlossaryEntry> {
    Attribute::ALL
        .into_iter()
        .enumerate()
        .map(|(i, attribute)| GlossaryEntry {
            number: i + 1,
            attribute,
            description: describe(attribute),
        })
        .collect()
}

/// Find an entry by number (`"2"`), column name (`"forward_pe"`) or display
/// name (`"Forward P/E"`), ignoring case and surrounding whitespace.
pub fn lookup(query: &str) -> Option<GlossaryEntry> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }

    if let Ok(number) = query.parse::<usize>() {
        return glossary().into_iter().find(|e| e.number == number);
    }

    let wanted = normalize(query);
    glossary().into_iter().find(|e| {
        normalize(e.attribute.column()) == wanted || normalize(e.attribute.display_name()) == wanted
    })
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_glossary_is_numbered_from_one() {
        let entries = glossary();
        assert_eq!(entries.len(), Attribute::COUNT);
        assert_eq!(entries[0].number, 1);
        assert_eq!(entries[10].attribute, Attribute::QuarterlyReturn);
        assert!(entries.iter().all(|e| !e.description.is_empty()));
    }

    #[rstest]
    #[case("2", Attribute::ForwardPe)]
    #[case("forward_pe", Attribute::ForwardPe)]
    #[case("Forward P/E", Attribute::ForwardPe)]
    #[case("  debt/equity ", Attribute::DebtToEquity)]
    #[case("QUICK_RATIO", Attribute::QuickRatio)]
    #[case("11", Attribute::QuarterlyReturn)]
    fn test_lookup(#[case] query: &str, #[case] expected: Attribute) {
        assert_eq!(lookup(query).map(|e| e.attribute), Some(expected));
    }

    #[rstest]
    #[case("")]
    #[case("0")]
    #[case("12")]
    #[case("beta")]
    fn test_lookup_misses(#[case] query: &str) {
        assert_eq!(lookup(query), None);
    }
}
