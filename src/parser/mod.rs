//! Stats parsing and schema definitions.
//!
//! This module handles:
//! - Parsing raw bundler stats JSON
//! - Filtering and validating module records
//! - Defining the output schema

pub mod schema;
pub mod stats;

// Re-export main types
pub use schema::{ModuleRecord, StatsEntry, TreemapDocument};
pub use stats::{
    filter_by_folder, parse_stats, parse_stats_str, retain_absolute, to_document,
    validate_records, ParsedStats,
};
