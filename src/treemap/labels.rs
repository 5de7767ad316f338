//! Text formatting for sizes, ratios and node labels.

use crate::aggregator::TreeNode;
use crate::utils::config::{BELOW_MIN_RATIO_LABEL, MIN_VISIBLE_PERCENTAGE};

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// Human-readable byte size: `512 B`, `1.5 KB`, `2.0 MB`
pub fn format_file_size(bytes: u64) -> String {
    if bytes < KIB {
        format!("{} B", bytes)
    } else if bytes < MIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    }
}

/// Percentage label for a 0..1 ratio, two decimals
///
/// Exact halves round up (`0.125` → `0.13%`).
pub fn ratio_label(ratio: f64) -> String {
    let percentage = ratio * 100.0;
    if percentage <= MIN_VISIBLE_PERCENTAGE {
        BELOW_MIN_RATIO_LABEL.to_string()
    } else {
        format!("{}%", two_decimals_half_up(percentage))
    }
}

/// `{:.2}` rounds exact ties to even; bump those ties to the upper neighbour
fn two_decimals_half_up(value: f64) -> String {
    // Wide enough to print every percentage above the visible minimum exactly
    let exact = format!("{:.64}", value);
    let is_tie = exact
        .split_once('.')
        .and_then(|(_, fraction)| fraction.get(2..))
        .is_some_and(|rest| rest.trim_end_matches('0') == "5");

    if is_tie {
        format!("{:.2}", value + 0.005)
    } else {
        format!("{:.2}", value)
    }
}

pub fn tooltip_label(ratio_label: &str, size_label: &str) -> String {
    format!("{} ({})", ratio_label, size_label)
}

/// Box label of a node: its name and share of the bundle
///
/// Falls back to the formatted size when no ratio was computed. Leaf boxes
/// put the two parts on separate lines (`multi_level`), group headers keep
/// them on one.
pub fn node_label(node: &TreeNode, multi_level: bool) -> String {
    let ratio = match &node.display {
        Some(display) => display.ratio_label.clone(),
        None => format_file_size(node.value.size),
    };
    let separator = if multi_level { "\n" } else { " " };
    format!("{}{}{}", node.name, separator, ratio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::metrics::display_for;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(1023), "1023 B");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(3 * 1024 * 1024), "3.0 MB");
    }

    #[test]
    fn test_ratio_label() {
        assert_eq!(ratio_label(1.0), "100.00%");
        assert_eq!(ratio_label(2.0 / 3.0), "66.67%");
        assert_eq!(ratio_label(0.00005), BELOW_MIN_RATIO_LABEL);
        assert_eq!(ratio_label(0.0), BELOW_MIN_RATIO_LABEL);
        assert_eq!(ratio_label(0.0002), "0.02%");
    }

    #[test]
    fn test_ratio_label_rounds_ties_up() {
        assert_eq!(ratio_label(1.0 / 800.0), "0.13%");
        assert_eq!(ratio_label(0.5 / 800.0), "0.06%");
        assert_eq!(ratio_label(1.0 / 3.0), "33.33%");
    }

    #[test]
    fn test_node_label() {
        let mut node = TreeNode::folder("src", "src", "/src");
        node.value.size = 2048;
        assert_eq!(node_label(&node, false), "src 2.0 KB");

        node.display = Some(display_for(2048, 4096));
        assert_eq!(node_label(&node, true), "src\n50.00%");
    }
}
