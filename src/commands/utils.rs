use crate::output::read_treemap;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Validate a treemap JSON file
pub fn validate_treemap_file(file_path: PathBuf) -> Result<()> {
    println!("Validating treemap: {}", file_path.display());

    let document = read_treemap(&file_path)?;

    println!("✓ Valid treemap JSON");
    println!("  Version: {}", document.version);
    println!("  Bundle: {}", document.name);
    println!("  Total Size: {} bytes", document.total_size);
    println!("  Packages: {}", document.packages.len());
    println!("  Top-level Nodes: {}", document.nodes.len());

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Bundle Treemap Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string            - Schema version (e.g., '1.0.0')");
        println!("  name: string               - Bundle name");
        println!("  generated_at: string       - ISO 8601 timestamp");
        println!("  total_size: number         - Total bundle size in bytes");
        println!("  max_depth: number          - Segments in the longest module path");
        println!("  max_package_count: number  - Distinct packages plus one");
        println!("  colors: array              - One color per color index");
        println!("  levels: number             - Style levels needed by the renderer");
        println!("  packages: array            - Packages ranked by size");
        println!("    name, size, color_index");
        println!("  nodes: array               - Top-level treemap nodes");
        println!("    name: string             - Display label");
        println!("    path: string             - Segment or module path");
        println!("    module_ref | folder_ref  - Inspect target");
        println!("    value: [size, color]     - Size in bytes and color index");
        println!("    package_name: string     - Owning package (empty if mixed)");
        println!("    is_package_root: bool    - Package boundary");
        println!("    descendant_leaf_count    - Modules below the node");
        println!("    display: object?         - ratio, ratio_label, size_label, tooltip_label");
        println!("    children: array          - Child nodes");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Bundle Treemap v{}", env!("CARGO_PKG_VERSION"));
    println!("Treemap Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Aggregates JavaScript bundle module sizes into a package-aware treemap.");
}
