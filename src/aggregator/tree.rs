//! Tree node types shared by every pipeline stage.
//!
//! A node is either a module (leaf) or a folder. The distinction lives in
//! [`NodeRef`] so a node can never carry both references at once.

use crate::utils::config::{DEPENDENCY_ROOT_MARKER, ROOT_NAME, SCOPE_MARKER, UNASSIGNED_COLOR_INDEX};
use serde::{Deserialize, Serialize};

/// What a node points at when the user inspects it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeRef {
    /// Absolute path of the bundled module
    #[serde(rename = "module_ref")]
    Module(String),

    /// Absolute path of the directory
    #[serde(rename = "folder_ref")]
    Folder(String),
}

impl NodeRef {
    pub fn is_module(&self) -> bool {
        matches!(self, NodeRef::Module(_))
    }
}

/// Aggregate size and package color bucket of a node
///
/// Serialized as `[size, color_index]`, the shape treemap renderers expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "(u64, usize)", into = "(u64, usize)")]
pub struct NodeValue {
    /// Total bytes of every module below (or at) this node
    pub size: u64,

    /// Package color bucket, `0` when the node has no single package
    pub color_index: usize,
}

impl NodeValue {
    pub fn new(size: u64, color_index: usize) -> Self {
        Self { size, color_index }
    }
}

impl From<(u64, usize)> for NodeValue {
    fn from((size, color_index): (u64, usize)) -> Self {
        Self { size, color_index }
    }
}

impl From<NodeValue> for (u64, usize) {
    fn from(value: NodeValue) -> Self {
        (value.size, value.color_index)
    }
}

/// Display strings derived in the final stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDisplay {
    /// Share of the bundle, between 0 and 1
    pub ratio: f64,

    /// Percentage label, e.g. `"66.67%"` or `"< 0.01%"`
    pub ratio_label: String,

    /// Human-readable size, e.g. `"1.5 KB"`
    pub size_label: String,

    /// `"<ratio> (<size>)"`
    pub tooltip_label: String,
}

/// A directory or module in the aggregated tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Display label, possibly several merged segments (`src/components`)
    pub name: String,

    /// Segment for folders, full path for modules, composite for unfolded scopes
    pub path: String,

    #[serde(flatten)]
    pub node_ref: NodeRef,

    pub value: NodeValue,

    /// Owning package, empty when the subtree mixes packages
    pub package_name: String,

    pub is_package_root: bool,

    /// Number of modules below this node (a module does not count itself)
    pub descendant_leaf_count: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<NodeDisplay>,

    #[serde(default)]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create an empty folder node
    pub fn folder(name: impl Into<String>, path: impl Into<String>, folder_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            node_ref: NodeRef::Folder(folder_path.into()),
            value: NodeValue::default(),
            package_name: String::new(),
            is_package_root: false,
            descendant_leaf_count: 0,
            display: None,
            children: Vec::new(),
        }
    }

    /// Create the implicit root of a bundle
    pub fn root() -> Self {
        Self::folder(ROOT_NAME, ROOT_NAME, ROOT_NAME)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_module(&self) -> bool {
        self.node_ref.is_module()
    }

    pub fn size(&self) -> u64 {
        self.value.size
    }

    /// Whether this node's structural name starts with `node_modules`
    pub fn is_dependency_root(&self) -> bool {
        self.name.starts_with(DEPENDENCY_ROOT_MARKER)
    }

    /// A directory named like `@scope`
    pub fn is_scope_container(&self) -> bool {
        !self.children.is_empty() && self.name.starts_with(SCOPE_MARKER)
    }

    /// A scope directory whose children belong to different packages
    pub fn is_unresolved_scope(&self) -> bool {
        self.is_scope_container() && self.package_name.is_empty()
    }

    pub(crate) fn clear_package(&mut self) {
        self.package_name.clear();
        self.value.color_index = UNASSIGNED_COLOR_INDEX;
        self.is_package_root = false;
    }

    /// Visit this node and every descendant, parents first
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a TreeNode)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }

    /// Iterate over the module (leaf) nodes below this node
    pub fn leaves(&self) -> Vec<&TreeNode> {
        let mut leaves = Vec::new();
        self.walk(&mut |node| {
            if node.is_leaf() {
                leaves.push(node);
            }
        });
        leaves
    }

    /// Find a direct child by display name
    pub fn child(&self, name: &str) -> Option<&TreeNode> {
        self.children.iter().find(|child| child.name == name)
    }
}

/// Result of one pipeline run, frozen once returned
#[derive(Debug, Clone)]
pub struct ModuleTree {
    /// Implicit root; its children are what the rendering layer displays
    pub root: TreeNode,

    /// Segment count of the longest input path
    pub max_depth: usize,

    /// Distinct packages seen plus one (index 0 is reserved)
    pub max_package_count: usize,

    /// Packages ordered by representative size, largest first
    pub packages: Vec<PackageSize>,
}

impl ModuleTree {
    /// Root-level nodes handed to the rendering layer
    pub fn nodes(&self) -> &[TreeNode] {
        &self.root.children
    }

    pub fn total_size(&self) -> u64 {
        self.root.value.size
    }

    /// False when ratios could not be computed (no bytes at all)
    pub fn has_data(&self) -> bool {
        self.root.display.is_some()
    }
}

/// A package and the size used to rank it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageSize {
    pub name: String,
    pub size: u64,
    pub color_index: usize,
}
