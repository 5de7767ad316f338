//! Build the path-prefix tree from flat module records.
//!
//! Each absolute path such as `/app/node_modules/react/index.js` becomes a
//! chain of folder nodes (`app`, `node_modules`, `react`) ending in a module
//! node (`index.js`). Folder sizes are accumulated while inserting, so no
//! second pass is needed.

use super::tree::{NodeRef, NodeValue, TreeNode};
use crate::parser::ModuleRecord;
use crate::utils::config::{PATH_SEPARATOR, UNKNOWN_PACKAGE};
use log::debug;
use std::collections::HashMap;

/// Package name to color index table
///
/// Indices are handed out on first sight, starting at 1. A fresh table is
/// created for every pipeline run so unrelated bundles never share colors.
#[derive(Debug, Default)]
pub struct PackageIndex {
    indices: HashMap<String, usize>,
}

impl PackageIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the color index of `name`, assigning the next one if unseen
    pub fn index_for(&mut self, name: &str) -> usize {
        if let Some(&index) = self.indices.get(name) {
            return index;
        }
        let index = self.indices.len() + 1;
        self.indices.insert(name.to_string(), index);
        index
    }

    /// Number of distinct packages seen
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Distinct packages plus the reserved index 0
    pub fn max_package_count(&self) -> usize {
        self.indices.len() + 1
    }
}

/// Output of the tree builder
#[derive(Debug)]
pub struct BuiltTree {
    pub root: TreeNode,
    pub max_depth: usize,
}

/// Insert every record into a fresh prefix tree
///
/// **Public** - stage 1 of the pipeline
///
/// Records must have unique absolute paths; colliding paths produce an
/// undefined (but finite) tree.
pub fn build_tree(records: &[ModuleRecord], packages: &mut PackageIndex) -> BuiltTree {
    debug!("Building module tree from {} records", records.len());

    let mut root = TreeNode::root();
    let mut max_depth = 0;

    for record in records {
        let segments: Vec<&str> = record
            .path
            .split(PATH_SEPARATOR)
            .filter(|segment| !segment.is_empty())
            .collect();

        max_depth = max_depth.max(segments.len());
        insert_record(&mut root, record, &segments, packages);
    }

    debug!(
        "Module tree built: depth {}, {} packages",
        max_depth,
        packages.len()
    );

    BuiltTree { root, max_depth }
}

/// Walk (and create) the folder chain for one record
fn insert_record(
    root: &mut TreeNode,
    record: &ModuleRecord,
    segments: &[&str],
    packages: &mut PackageIndex,
) {
    let mut current = root;
    let mut folder_path = String::new();

    for (index, segment) in segments.iter().enumerate() {
        folder_path.push(PATH_SEPARATOR);
        folder_path.push_str(segment);

        let position = match current.children.iter().position(|child| child.path == *segment) {
            Some(position) => position,
            None => {
                current
                    .children
                    .push(TreeNode::folder(*segment, *segment, folder_path.as_str()));
                current.children.len() - 1
            }
        };

        let next = &mut current.children[position];

        if index == segments.len() - 1 {
            make_module(next, record, packages);
        } else {
            next.value.size += record.size;
        }

        current = next;
    }
}

/// Turn a freshly walked node into the module node for `record`
fn make_module(node: &mut TreeNode, record: &ModuleRecord, packages: &mut PackageIndex) {
    let package = record
        .package
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or(UNKNOWN_PACKAGE);

    node.path = record.path.clone();
    node.node_ref = NodeRef::Module(record.path.clone());
    node.value = NodeValue::new(record.size, packages.index_for(package));
    node.package_name = package.to_string();
}
