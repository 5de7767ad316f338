//! Size, color-order and ratio calculation for the final tree.
//!
//! Packages are ranked by their total size so that the color index of a node
//! reflects how heavy its package is, not the order it appeared in the input.

use super::tree::{NodeDisplay, PackageSize, TreeNode};
use crate::treemap::labels::{format_file_size, ratio_label, tooltip_label};
use crate::utils::config::{UNASSIGNED_COLOR_INDEX, UNKNOWN_PACKAGE};
use log::{debug, warn};
use std::collections::HashMap;

/// Rank packages, recolor nodes and derive display fields
///
/// **Public** - stage 5 of the pipeline
///
/// # Returns
/// Package ranking, largest package first
///
/// When the bundle has no bytes at all the ratio step is skipped and every
/// node keeps `display == None`.
pub fn calculate_sizes(root: &mut TreeNode) -> Vec<PackageSize> {
    let ranking = rank_packages(root);
    debug!("Ranked {} packages by size", ranking.len());

    let color_indices: HashMap<&str, usize> = ranking
        .iter()
        .map(|package| (package.name.as_str(), package.color_index))
        .collect();
    assign_color_indices(root, &color_indices);

    root.value.size = root.children.iter().map(TreeNode::size).sum();
    let total = root.value.size;

    if total == 0 {
        warn!("Bundle has no bytes, skipping ratio calculation");
    } else {
        apply_display(root, total);
    }

    count_leaves(root);

    ranking
}

/// Representative size per package, from the first node carrying its name
///
/// **Public** - exposed for the summary view
pub fn rank_packages(root: &TreeNode) -> Vec<PackageSize> {
    let mut sizes: Vec<(String, u64)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    root.walk(&mut |node| {
        if node.package_name.is_empty() {
            return;
        }
        match positions.get(node.package_name.as_str()).copied() {
            // A zero-sized first sighting is replaced by the next one
            Some(position) if sizes[position].1 == 0 => sizes[position].1 = node.value.size,
            Some(_) => {}
            None => {
                positions.insert(node.package_name.as_str(), sizes.len());
                sizes.push((node.package_name.clone(), node.value.size));
            }
        }
    });

    // Stable: equal sizes keep first-seen order
    sizes.sort_by(|a, b| b.1.cmp(&a.1));

    sizes
        .into_iter()
        .enumerate()
        .map(|(rank, (name, size))| PackageSize {
            name,
            size,
            color_index: rank + 1,
        })
        .collect()
}

fn assign_color_indices(node: &mut TreeNode, color_indices: &HashMap<&str, usize>) {
    node.value.color_index = color_indices
        .get(node.package_name.as_str())
        .copied()
        .unwrap_or(UNASSIGNED_COLOR_INDEX);

    for child in &mut node.children {
        assign_color_indices(child, color_indices);
    }
}

fn apply_display(node: &mut TreeNode, total: u64) {
    node.display = Some(display_for(node.value.size, total));

    for child in &mut node.children {
        apply_display(child, total);
    }
}

/// Display strings for a node of `size` bytes in a bundle of `total` bytes
///
/// **Public** - also used by renderers that build nodes themselves
pub fn display_for(size: u64, total: u64) -> NodeDisplay {
    let ratio = size as f64 / total as f64;
    let ratio_label = ratio_label(ratio);
    let size_label = format_file_size(size);

    NodeDisplay {
        ratio,
        tooltip_label: tooltip_label(&ratio_label, &size_label),
        ratio_label,
        size_label,
    }
}

/// Count module descendants; returns what `node` contributes to its parent
fn count_leaves(node: &mut TreeNode) -> usize {
    node.descendant_leaf_count = node.children.iter_mut().map(count_leaves).sum();
    node.descendant_leaf_count + usize::from(node.is_leaf())
}

/// Size statistics of a finished tree
///
/// **Public** - returned from calculate_distribution
#[derive(Debug, Clone, Default)]
pub struct SizeDistribution {
    /// Total bundle size in bytes
    pub total_size: u64,

    /// Number of modules
    pub module_count: usize,

    /// Number of distinct packages
    pub package_count: usize,

    /// Bytes owned by the largest package
    pub largest_package_size: u64,

    /// Share of the bundle owned by the largest package
    pub largest_package_percentage: f64,

    /// Bytes of modules the bundler could not attribute
    pub unknown_size: u64,
}

impl SizeDistribution {
    /// Returns true if one package owns more than half of the bundle
    pub fn is_dominated(&self) -> bool {
        self.largest_package_percentage > 50.0
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Total: {} | Modules: {} | Packages: {} | Largest: {} ({:.1}%)",
            format_file_size(self.total_size),
            self.module_count,
            self.package_count,
            format_file_size(self.largest_package_size),
            self.largest_package_percentage
        )
    }
}

/// Calculate size statistics
///
/// **Public** - provides summary statistics
pub fn calculate_distribution(root: &TreeNode, packages: &[PackageSize]) -> SizeDistribution {
    if root.children.is_empty() {
        return SizeDistribution::default();
    }

    let leaves = root.leaves();
    let total_size = root.value.size;
    let largest_package_size = packages.first().map(|p| p.size).unwrap_or(0);
    let unknown_size = leaves
        .iter()
        .filter(|leaf| leaf.package_name == UNKNOWN_PACKAGE)
        .map(|leaf| leaf.value.size)
        .sum();

    SizeDistribution {
        total_size,
        module_count: leaves.len(),
        package_count: packages.len(),
        largest_package_size,
        largest_package_percentage: if total_size > 0 {
            (largest_package_size as f64 / total_size as f64) * 100.0
        } else {
            0.0
        },
        unknown_size,
    }
}
