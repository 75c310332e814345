//! Caching layer for market data.

pub mod csv_cache;

pub use csv_cache::CsvCache;
