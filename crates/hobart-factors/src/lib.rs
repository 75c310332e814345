#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/hobart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod attributes;
pub mod composite;
pub mod error;
pub mod percentile;
pub mod selection;

pub use attributes::{GlossaryEntry, glossary, lookup};
pub use composite::{
    COMPOSITE_COLUMN, CompositeScorer, CompositeWeights, RankedCandidates, ScoredCandidate,
    ScoringOutcome,
};
pub use error::{FactorError, Result, SelectionError};
pub use percentile::{pct_column, percentile_expr, percentile_ranks};
pub use selection::{DEFAULT_MAX_PORTFOLIO_SIZE, MIN_PORTFOLIO_SIZE, SelectionBounds};
