//! Terminal summary of a module tree.

use super::labels::{format_file_size, ratio_label};
use crate::aggregator::{ModuleTree, TreeNode};

/// Create a text summary: largest packages as a table, then top-level nodes
pub fn generate_text_summary(tree: &ModuleTree, max_packages: usize) -> String {
    let mut lines = Vec::new();
    let total = tree.total_size().max(1);

    lines.push("  📦 LARGEST PACKAGES".to_string());
    lines.push("  ┏━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┳━━━━━━━━━━━━━━┳━━━━━━━━━━┓".to_string());
    lines.push(format!("  ┃ {:<42} ┃ {:^12} ┃ {:^8} ┃", "Package (Largest First)", "SIZE", "%"));
    lines.push("  ┣━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━╋━━━━━━━━━━━━━━╋━━━━━━━━━━┫".to_string());

    for package in tree.packages.iter().take(max_packages) {
        lines.push(format!(
            "  ┃ {:<42} ┃ {:>12} ┃ {:>8} ┃",
            truncate_start(&package.name, 42),
            format_file_size(package.size),
            ratio_label(package.size as f64 / total as f64)
        ));
    }

    lines.push("  ┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┻━━━━━━━━━━━━━━┻━━━━━━━━━━┛".to_string());

    lines.push(String::new());
    lines.push("  🗂  TOP-LEVEL OVERVIEW".to_string());
    lines.push(format!(
        "  bundle ██████████████████████████████████████████████████ {}",
        format_file_size(tree.total_size())
    ));

    let mut top_level: Vec<&TreeNode> = tree.nodes().iter().collect();
    top_level.sort_by(|a, b| b.value.size.cmp(&a.value.size));

    for node in top_level.iter().take(5) {
        let percentage = (node.value.size as f64 / total as f64) * 100.0;
        let bar = "█".repeat((percentage / 2.0) as usize);
        lines.push(format!(
            "  └─ {:<30} {:50} {:>6.1}%",
            truncate_start(&node.name, 30),
            bar,
            percentage
        ));
    }

    if tree.packages.len() > max_packages {
        lines.push(String::new());
        lines.push(format!(
            "   (Showing top {} of {} packages)",
            max_packages,
            tree.packages.len()
        ));
    }

    lines.join("\n")
}

/// Keep the end of long names, which carries the interesting part of a path
fn truncate_start(name: &str, width: usize) -> String {
    let count = name.chars().count();
    if count <= width {
        return name.to_string();
    }
    let tail: String = name.chars().skip(count - (width - 3)).collect();
    format!("...{}", tail)
}
