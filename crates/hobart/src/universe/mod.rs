//! Stock universes.
//!
//! A universe is the list of constituents of one of the supported indices,
//! each with a company name and GICS sector. [`UniverseSource`] is the seam
//! behind which the constituents are looked up; [`StaticUniverse`] serves
//! them from a built-in table.

pub mod gics;
mod listings;

pub use gics::GicsSector;

use listings::{DJI, LISTINGS, OEX};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::str::FromStr;
use thiserror::Error;

/// Errors from universe lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UniverseError {
    /// The index name or number was not recognized
    #[error("Unknown index {0:?}; choose dow, sap100 or sap500")]
    UnknownIndex(String),

    /// The source could not produce the constituents
    #[error("Constituents of {index} unavailable: {reason}")]
    Unavailable {
        /// Index requested
        index: IndexChoice,
        /// Why the lookup failed
        reason: String,
    },

    /// The source produced no constituents
    #[error("No constituents found for {0}")]
    Empty(IndexChoice),
}

/// Supported indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndexChoice {
    /// Dow Jones Industrial Average
    Dow,
    /// S&P 100
    Sap100,
    /// S&P 500
    Sap500,
}

impl IndexChoice {
    /// Every index in menu order.
    pub const ALL: [Self; 3] = [Self::Dow, Self::Sap100, Self::Sap500];

    /// Short name accepted at the prompt.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dow => "dow",
            Self::Sap100 => "sap100",
            Self::Sap500 => "sap500",
        }
    }

    /// Full index name.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Dow => "Dow Jones Industrial Average",
            Self::Sap100 => "S&P 100",
            Self::Sap500 => "S&P 500",
        }
    }

    /// 1-based menu number.
    pub const fn number(self) -> usize {
        match self {
            Self::Dow => 1,
            Self::Sap100 => 2,
            Self::Sap500 => 3,
        }
    }

    const fn includes(self, flags: u8) -> bool {
        match self {
            Self::Dow => flags & DJI != 0,
            Self::Sap100 => flags & OEX != 0,
            Self::Sap500 => true,
        }
    }
}

impl fmt::Display for IndexChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IndexChoice {
    type Err = UniverseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let choice = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|index| choice == index.name() || choice == index.number().to_string())
            .ok_or(UniverseError::UnknownIndex(choice))
    }
}

/// One member of an index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constituent {
    /// Ticker symbol.
    pub symbol: String,
    /// Company name.
    pub name: String,
    /// GICS sector.
    pub sector: GicsSector,
}

impl Constituent {
    /// Create a new constituent.
    pub fn new(symbol: impl Into<String>, name: impl Into<String>, sector: GicsSector) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            sector,
        }
    }
}

/// The constituents of one index, in listing order.
#[derive(Debug, Clone)]
pub struct Universe {
    index: IndexChoice,
    constituents: Vec<Constituent>,
    by_symbol: HashMap<String, usize>,
}

impl Universe {
    /// Build a universe. Repeated symbols keep their first listing.
    pub fn new(index: IndexChoice, constituents: Vec<Constituent>) -> Result<Self, UniverseError> {
        let mut by_symbol = HashMap::with_capacity(constituents.len());
        let mut unique = Vec::with_capacity(constituents.len());
        for constituent in constituents {
            if by_symbol.contains_key(&constituent.symbol) {
                continue;
            }
            by_symbol.insert(constituent.symbol.clone(), unique.len());
            unique.push(constituent);
        }
        if unique.is_empty() {
            return Err(UniverseError::Empty(index));
        }

        Ok(Self {
            index,
            constituents: unique,
            by_symbol,
        })
    }

    /// The index this universe lists.
    pub const fn index(&self) -> IndexChoice {
        self.index
    }

    /// All constituents.
    pub fn constituents(&self) -> &[Constituent] {
        &self.constituents
    }

    /// All symbols, in listing order.
    pub fn symbols(&self) -> Vec<String> {
        self.constituents.iter().map(|c| c.symbol.clone()).collect()
    }

    /// Look up one constituent.
    pub fn get(&self, symbol: &str) -> Option<&Constituent> {
        self.by_symbol.get(symbol).map(|&i| &self.constituents[i])
    }

    /// Check if a symbol is in the universe.
    pub fn contains(&self, symbol: &str) -> bool {
        self.by_symbol.contains_key(symbol)
    }

    /// Company name and sector name of a symbol.
    pub fn describe(&self, symbol: &str) -> Option<(String, String)> {
        self.get(symbol)
            .map(|c| (c.name.clone(), c.sector.name().to_string()))
    }

    /// Number of constituents.
    pub fn len(&self) -> usize {
        self.constituents.len()
    }

    /// Whether the universe is empty. Never true for a built universe.
    pub fn is_empty(&self) -> bool {
        self.constituents.is_empty()
    }

    /// Count of constituents per sector.
    pub fn sector_counts(&self) -> HashMap<GicsSector, usize> {
        let mut counts = HashMap::new();
        for constituent in &self.constituents {
            *counts.entry(constituent.sector).or_insert(0) += 1;
        }
        counts
    }
}

/// Source of index constituents.
pub trait UniverseSource {
    /// Look up the constituents of `index`.
    fn constituents(
        &self,
        index: IndexChoice,
    ) -> impl Future<Output = Result<Vec<Constituent>, UniverseError>>;
}

impl<S: UniverseSource + ?Sized> UniverseSource for &S {
    fn constituents(
        &self,
        index: IndexChoice,
    ) -> impl Future<Output = Result<Vec<Constituent>, UniverseError>> {
        (**self).constituents(index)
    }
}

/// Built-in constituent lists, sorted by symbol.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticUniverse;

impl StaticUniverse {
    /// Constituents of `index` without going through the async seam.
    pub fn list(index: IndexChoice) -> Vec<Constituent> {
        let mut constituents: Vec<Constituent> = LISTINGS
            .iter()
            .flat_map(|(sector, listings)| {
                listings
                    .iter()
                    .filter(move |(_, _, flags)| index.includes(*flags))
                    .map(move |(symbol, name, _)| Constituent::new(*symbol, *name, *sector))
            })
            .collect();
        constituents.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        constituents
    }
}

impl UniverseSource for StaticUniverse {
    async fn constituents(&self, index: IndexChoice) -> Result<Vec<Constituent>, UniverseError> {
        Ok(Self::list(index))
    }
}
