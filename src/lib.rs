//! Bundle Treemap
//!
//! Aggregates the flat module list of a JavaScript bundle into a
//! package-aware tree for treemap visualizations.
//!
//! This crate provides the core implementation for the
//! `bundle-treemap` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! bundle-treemap build --input stats.json --output treemap.json --summary
//! ```
//!
//! As a library:
//!
//! ```ignore
//! let records = vec![ModuleRecord::new("/src/a.js", 100, Some("app"))];
//! validate_records(&records)?;
//! let tree = build_module_tree(&records);
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod treemap;
pub mod utils;
