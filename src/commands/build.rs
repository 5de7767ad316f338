//! Build command implementation.
//!
//! The build command:
//! 1. Reads the bundler stats file
//! 2. Parses module records
//! 3. Filters and validates them
//! 4. Aggregates the module tree
//! 5. Writes the treemap document

use super::models::BuildArgs;
use crate::aggregator::{build_module_tree, calculate_distribution};
use crate::output::write_treemap;
use crate::parser::{filter_by_folder, parse_stats_str, retain_absolute, to_document, validate_records};
use crate::treemap::{generate_text_summary, TreemapConfig};
use crate::utils::config::{DEFAULT_BUNDLE_NAME, MAX_TOP_PACKAGES};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::time::Instant;

/// Execute the build command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Stats file missing or unreadable
/// * Stats parsing errors
/// * No usable modules, or duplicate module paths
/// * File write errors
pub fn execute_build(args: BuildArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Building treemap from: {}", args.input.display());

    // Step 1: Read stats
    info!("Step 1/5: Reading stats file...");
    let raw = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read stats file {}", args.input.display()))?;

    // Step 2: Parse module records
    info!("Step 2/5: Parsing module records...");
    let parsed = parse_stats_str(&raw, args.include_runtime).context("Failed to parse stats")?;

    // Step 3: Filter and validate
    info!("Step 3/5: Validating module records...");
    let mut records = retain_absolute(parsed.records);
    if let Some(folder) = &args.folder {
        records = filter_by_folder(records, folder);
        debug!("{} modules inside {}", records.len(), folder);
    }
    validate_records(&records).context("Module records cannot be aggregated")?;

    // Step 4: Aggregate
    info!("Step 4/5: Aggregating {} modules...", records.len());
    let tree = build_module_tree(&records);

    let distribution = calculate_distribution(&tree.root, &tree.packages);
    info!("Size distribution: {}", distribution.summary());
    if distribution.is_dominated() {
        warn!(
            "Largest package owns {:.1}% of the bundle",
            distribution.largest_package_percentage
        );
    }

    // Step 5: Write output
    info!("Step 5/5: Writing treemap...");
    let name = args
        .name
        .as_deref()
        .or(parsed.entry.bundle_name())
        .unwrap_or(DEFAULT_BUNDLE_NAME);
    let config = TreemapConfig::new().with_name(name);

    let document = to_document(&tree, &config);
    write_treemap(&document, &args.output_json).context("Failed to write treemap JSON")?;

    info!("✓ Treemap written to: {}", args.output_json.display());

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("BUNDLE SUMMARY");
        println!("{}", "=".repeat(80));
        println!("Bundle:   {}", config.name);
        println!("Modules:  {}", distribution.module_count);
        println!("Packages: {}", distribution.package_count);
        println!("\n{}", generate_text_summary(&tree, args.top_packages));
        println!("{}", "=".repeat(80));
    }

    let elapsed = start_time.elapsed();
    info!("Build completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Validate build arguments
///
/// **Public** - can be called before execute_build for early validation
pub fn validate_args(args: &BuildArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.output_json.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    if args.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
        anyhow::bail!("Bundle name cannot be empty");
    }

    if let Some(folder) = &args.folder {
        if !folder.starts_with('/') {
            anyhow::bail!("Folder must be an absolute path");
        }
    }

    if args.top_packages == 0 {
        anyhow::bail!("top_packages must be greater than 0");
    }

    if args.top_packages > MAX_TOP_PACKAGES {
        anyhow::bail!("top_packages is too large (max {})", MAX_TOP_PACKAGES);
    }

    Ok(())
}
