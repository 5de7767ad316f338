//! Presentation helpers for treemap renderers.
//!
//! Everything here is a pure function of the finished tree:
//! - Size and ratio labels
//! - Tooltip content
//! - Color palette and level count
//! - Text summaries for the terminal

pub mod labels;
pub mod palette;
pub mod summary;
pub mod tooltip;

// Re-export main types
pub use labels::{format_file_size, node_label, ratio_label};
pub use palette::{color_palette, level_count};
pub use summary::generate_text_summary;
pub use tooltip::{describe_bundle, describe_node, NodeIcon, NodeTooltip, OpenAction};

use crate::utils::config::DEFAULT_BUNDLE_NAME;

/// Treemap configuration
#[derive(Debug, Clone)]
pub struct TreemapConfig {
    /// Bundle name shown in the breadcrumb and the bundle tooltip
    pub name: String,
}

impl Default for TreemapConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_BUNDLE_NAME.to_string(),
        }
    }
}

impl TreemapConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
