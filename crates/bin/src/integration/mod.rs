//! Terminal-facing pieces of the CLI: line prompts, fetch progress bars and
//! the on-disk cache location.

pub(crate) mod cache_manager;
pub(crate) mod progress;
pub(crate) mod prompt;
