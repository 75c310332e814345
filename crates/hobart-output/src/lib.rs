#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/hobart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod export;
pub mod report;
pub mod table;

pub use export::{
    AllocationExport, CandidateExport, ExportError, ExportFormat, Exporter, PlanExport, export_run,
};
pub use report::{ReportBuilder, ReportError, RunReport};
pub use table::{
    render_allocation_table, render_dropped, render_glossary, render_glossary_entry,
    render_performance, render_ranked_table,
};
