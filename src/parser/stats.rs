//! Bundler stats parser.
//!
//! Parses raw stats JSON into module records and checks the preconditions
//! the aggregation pipeline relies on.

use super::schema::{ModuleRecord, StatsEntry, TreemapDocument};
use crate::aggregator::ModuleTree;
use crate::treemap::{color_palette, level_count, TreemapConfig};
use crate::utils::config::{MODULE_FIELD_NAMES, PATH_SEPARATOR, RUNTIME_FIELD_NAMES, SCHEMA_VERSION};
use crate::utils::error::{InputError, ParseError};
use log::{debug, warn};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Detected stats format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatsFormat {
    /// Plain array of module records
    RecordList,
    /// Stats entry object with a `modules` field
    StatsEntry,
}

/// Parsed stats (internal representation)
#[derive(Debug, Clone)]
pub struct ParsedStats {
    pub entry: StatsEntry,
    pub records: Vec<ModuleRecord>,
}

/// Parse raw stats JSON
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `raw_stats` - Raw JSON exported by the bundler
/// * `include_runtime` - Also include the modules prepended for the runtime
///
/// # Errors
/// * `ParseError::JsonError` - Entry metadata has the wrong types
/// * `ParseError::InvalidFormat` - No module list, or no module could be read
pub fn parse_stats(raw_stats: &Value, include_runtime: bool) -> Result<ParsedStats, ParseError> {
    let format = detect_stats_format(raw_stats)?;
    debug!("Detected stats format: {:?}", format);

    let parsed = match (format, raw_stats) {
        (StatsFormat::RecordList, Value::Array(items)) => ParsedStats {
            entry: StatsEntry::default(),
            records: parse_records_array(items)?,
        },
        (StatsFormat::StatsEntry, Value::Object(object)) => parse_stats_entry(object, include_runtime)?,
        _ => {
            return Err(ParseError::InvalidFormat(
                "Stats must be an array or an object".to_string(),
            ))
        }
    };

    debug!("Parsed {} module records", parsed.records.len());
    Ok(parsed)
}

/// Parse stats from a JSON string
pub fn parse_stats_str(raw: &str, include_runtime: bool) -> Result<ParsedStats, ParseError> {
    let value: Value = serde_json::from_str(raw)?;
    parse_stats(&value, include_runtime)
}

fn detect_stats_format(raw_stats: &Value) -> Result<StatsFormat, ParseError> {
    match raw_stats {
        Value::Array(_) => Ok(StatsFormat::RecordList),
        Value::Object(object) if find_field(object, MODULE_FIELD_NAMES).is_some() => {
            Ok(StatsFormat::StatsEntry)
        }
        Value::Object(_) => Err(ParseError::InvalidFormat(format!(
            "Stats object has none of the fields {:?}",
            MODULE_FIELD_NAMES
        ))),
        other => Err(ParseError::InvalidFormat(format!(
            "Expected stats array or object, got {}",
            json_type_name(other)
        ))),
    }
}

fn parse_stats_entry(object: &Map<String, Value>, include_runtime: bool) -> Result<ParsedStats, ParseError> {
    let entry: StatsEntry = serde_json::from_value(Value::Object(object.clone()))?;

    let mut records = match find_field(object, MODULE_FIELD_NAMES) {
        Some(modules) => parse_modules_value(modules)?,
        None => Vec::new(),
    };

    if include_runtime {
        if let Some(runtime) = find_field(object, RUNTIME_FIELD_NAMES) {
            let runtime_records = parse_modules_value(runtime)?;
            debug!("Including {} runtime modules", runtime_records.len());
            records.extend(runtime_records);
        }
    }

    Ok(ParsedStats { entry, records })
}

fn find_field<'a>(object: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names.iter().find_map(|name| object.get(*name))
}

/// Modules are either a list of records or a map keyed by absolute path
fn parse_modules_value(modules: &Value) -> Result<Vec<ModuleRecord>, ParseError> {
    match modules {
        Value::Array(items) => parse_records_array(items),
        Value::Object(map) => parse_records_map(map),
        other => Err(ParseError::InvalidFormat(format!(
            "Module list must be an array or an object, got {}",
            json_type_name(other)
        ))),
    }
}

/// Parse array of module records
///
/// Malformed entries are logged and skipped.
fn parse_records_array(items: &[Value]) -> Result<Vec<ModuleRecord>, ParseError> {
    let mut records = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        match serde_json::from_value::<ModuleRecord>(item.clone()) {
            Ok(record) => records.push(record),
            Err(e) => warn!("Failed to parse module {}: {}", index, e),
        }
    }

    if records.is_empty() && !items.is_empty() {
        return Err(ParseError::InvalidFormat(
            "All module records failed to parse".to_string(),
        ));
    }

    Ok(records)
}

fn parse_records_map(map: &Map<String, Value>) -> Result<Vec<ModuleRecord>, ParseError> {
    let mut records = Vec::with_capacity(map.len());

    for (key, item) in map {
        match serde_json::from_value::<ModuleRecord>(item.clone()) {
            Ok(mut record) => {
                if record.path.is_empty() {
                    record.path = key.clone();
                }
                records.push(record);
            }
            Err(e) => warn!("Failed to parse module {}: {}", key, e),
        }
    }

    if records.is_empty() && !map.is_empty() {
        return Err(ParseError::InvalidFormat(
            "All module records failed to parse".to_string(),
        ));
    }

    Ok(records)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Drop records whose path is not absolute (virtual or bundler-internal modules)
///
/// **Public** - the treemap only shows files that exist on disk
pub fn retain_absolute(records: Vec<ModuleRecord>) -> Vec<ModuleRecord> {
    let total = records.len();
    let kept: Vec<ModuleRecord> = records.into_iter().filter(ModuleRecord::is_absolute).collect();

    if kept.len() < total {
        warn!(
            "Skipped {} modules without an absolute path",
            total - kept.len()
        );
    }

    kept
}

/// Keep only the records inside `folder` (folder view)
pub fn filter_by_folder(records: Vec<ModuleRecord>, folder: &str) -> Vec<ModuleRecord> {
    let folder = folder.trim_end_matches(PATH_SEPARATOR);
    if folder.is_empty() {
        return records;
    }

    records
        .into_iter()
        .filter(|record| {
            record
                .path
                .strip_prefix(folder)
                .is_some_and(|rest| rest.starts_with(PATH_SEPARATOR))
        })
        .collect()
}

/// Check the caller contract of the aggregation pipeline
///
/// **Public** - run before `aggregator::build_module_tree`
///
/// # Errors
/// * `InputError::EmptyInput` - No records at all
/// * `InputError::MalformedPath` - Empty or relative path
/// * `InputError::DuplicatePath` - Two records share a path
pub fn validate_records(records: &[ModuleRecord]) -> Result<(), InputError> {
    if records.is_empty() {
        return Err(InputError::EmptyInput);
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());
    for record in records {
        if !record.is_absolute() {
            return Err(InputError::MalformedPath(record.path.clone()));
        }
        if !seen.insert(record.path.as_str()) {
            return Err(InputError::DuplicatePath(record.path.clone()));
        }
    }

    Ok(())
}

/// Convert a module tree to the output document
///
/// **Public** - used by commands to create final output
pub fn to_document(tree: &ModuleTree, config: &TreemapConfig) -> TreemapDocument {
    use chrono::Utc;

    TreemapDocument {
        version: SCHEMA_VERSION.to_string(),
        name: config.name.clone(),
        generated_at: Utc::now().to_rfc3339(),
        total_size: tree.total_size(),
        max_depth: tree.max_depth,
        max_package_count: tree.max_package_count,
        colors: color_palette(tree.max_package_count)
            .into_iter()
            .map(str::to_string)
            .collect(),
        levels: level_count(tree.max_depth),
        packages: tree.packages.clone(),
        nodes: tree.nodes().to_vec(),
    }
}
