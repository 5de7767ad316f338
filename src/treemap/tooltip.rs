//! Structured tooltip content for treemap nodes.
//!
//! Renderers turn a [`NodeTooltip`] into markup; this module only decides
//! what goes into it.

use super::TreemapConfig;
use crate::aggregator::{NodeRef, TreeNode};
use serde::{Deserialize, Serialize};

/// Icon shown next to the tooltip title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeIcon {
    Package,
    File,
    Folder,
}

/// What a modifier-click on the node opens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpenAction {
    Module(String),
    Folder(String),
}

impl From<&NodeRef> for OpenAction {
    fn from(node_ref: &NodeRef) -> Self {
        match node_ref {
            NodeRef::Module(path) => OpenAction::Module(path.clone()),
            NodeRef::Folder(path) => OpenAction::Folder(path.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeTooltip {
    pub icon: NodeIcon,

    /// Package name for package roots, node name otherwise
    pub title: String,

    /// Package roots are shown in bold
    pub emphasized: bool,

    pub ratio_label: String,

    /// Modules below the node; `None` for modules themselves
    pub file_count: Option<usize>,

    pub size_label: String,

    /// Names from the top level down to this node, joined by `/`
    pub path: String,

    pub open_action: Option<OpenAction>,
}

/// Describe a node reached through `tree_path` (top-level name first)
pub fn describe_node(node: &TreeNode, tree_path: &[&str]) -> NodeTooltip {
    let icon = if node.is_package_root {
        NodeIcon::Package
    } else if node.is_module() {
        NodeIcon::File
    } else {
        NodeIcon::Folder
    };

    let title = if node.is_package_root {
        node.package_name.clone()
    } else {
        node.name.clone()
    };

    let (ratio_label, size_label) = match &node.display {
        Some(display) => (display.ratio_label.clone(), display.size_label.clone()),
        None => (String::new(), super::labels::format_file_size(node.value.size)),
    };

    NodeTooltip {
        icon,
        title,
        emphasized: node.is_package_root,
        ratio_label,
        file_count: (node.descendant_leaf_count > 0).then_some(node.descendant_leaf_count),
        size_label,
        path: tree_path.join("/"),
        open_action: Some(OpenAction::from(&node.node_ref)),
    }
}

/// Tooltip of the whole bundle (the area outside every node)
pub fn describe_bundle(config: &TreemapConfig, total_size: u64, module_count: usize) -> NodeTooltip {
    NodeTooltip {
        icon: NodeIcon::Package,
        title: config.name.clone(),
        emphasized: false,
        ratio_label: "100%".to_string(),
        file_count: (module_count > 0).then_some(module_count),
        size_label: super::labels::format_file_size(total_size),
        path: String::new(),
        open_action: None,
    }
}
