#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/hobart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod allocation;
pub mod covariance;
pub mod error;
pub mod optimizer;
pub mod returns;

// Re-export main types
pub use allocation::{BudgetBounds, DiscreteAllocation, DiscreteAllocator, Position};
pub use covariance::{
    CovarianceError, CovarianceEstimator, CovarianceMethod, LedoitWolfEstimator, SampleCovariance,
};
pub use error::{AllocationError, OptimizerError};
pub use optimizer::{
    HrpConfig, HrpOptimizer, OptimizedPortfolio, PortfolioPerformance, TargetWeights,
    WeightOptimizer,
};
pub use returns::ReturnsMatrix;
