//! Split `@scope` folders into one node per scoped package.
//!
//! A folder such as `@babel` holding `core` and `runtime` is not a package of
//! its own. It is replaced by `@babel/core` and `@babel/runtime` so scoped
//! packages group and display as single units.

use super::tree::TreeNode;
use crate::utils::config::PATH_SEPARATOR;
use log::debug;

/// Unfold unresolved scope folders everywhere in the tree
///
/// **Public** - stage 4 of the pipeline
pub fn unfold_scopes(node: &mut TreeNode) {
    if node.children.iter().any(TreeNode::is_unresolved_scope) {
        let children = std::mem::take(&mut node.children);
        node.children = unfold_children(children);
    }

    for child in &mut node.children {
        unfold_scopes(child);
    }
}

/// Replace each unresolved scope in place, re-checking the replacements
fn unfold_children(children: Vec<TreeNode>) -> Vec<TreeNode> {
    let mut unfolded = Vec::with_capacity(children.len());
    let mut pending: Vec<TreeNode> = children.into_iter().rev().collect();

    while let Some(child) = pending.pop() {
        if !child.is_unresolved_scope() {
            unfolded.push(child);
            continue;
        }

        debug!(
            "Unfolding scope {} into {} packages",
            child.name,
            child.children.len()
        );

        let TreeNode {
            name: scope_name,
            path: scope_path,
            children: scoped,
            ..
        } = child;

        for package in scoped.into_iter().rev() {
            pending.push(scoped_node(&scope_name, &scope_path, package));
        }
    }

    unfolded
}

/// Rename a scope's child to `scope/child`
fn scoped_node(scope_name: &str, scope_path: &str, mut node: TreeNode) -> TreeNode {
    node.name = format!("{}{}{}", scope_name, PATH_SEPARATOR, node.name);
    if !node.is_module() {
        node.path = format!("{}{}{}", scope_path, PATH_SEPARATOR, node.path);
    }
    node.is_package_root = node.name == node.package_name;
    node
}
