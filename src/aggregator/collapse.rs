//! Collapse single-child folder chains into one display node.
//!
//! `src` → `components` → `Button.tsx` is shown as `src/components` (or
//! `src/components/Button.tsx`) instead of nested boxes that carry no
//! branching information.

use super::tree::TreeNode;
use crate::utils::config::PATH_SEPARATOR;

/// Collapse chains below the root
///
/// **Public** - stage 3 of the pipeline
///
/// The implicit root itself is never merged. Running this twice yields the
/// same tree as running it once.
pub fn collapse_chains(root: &mut TreeNode) {
    for child in &mut root.children {
        collapse_node(child, false);
    }
}

/// Children of an unresolved scope become `@scope/<child>` later and must
/// keep their own name until then.
fn collapse_node(node: &mut TreeNode, in_open_scope: bool) {
    while !in_open_scope && is_pass_through(node) {
        let Some(child) = node.children.pop() else {
            break;
        };
        absorb(node, child);
    }

    let open_scope = node.is_unresolved_scope();
    for child in &mut node.children {
        collapse_node(child, open_scope);
    }
}

/// One child, not a package root, and not sitting on a scope folder
fn is_pass_through(node: &TreeNode) -> bool {
    match node.children.as_slice() {
        [child] => node.name != node.package_name && !child.is_scope_container(),
        _ => false,
    }
}

/// Merge `child` into `node`, keeping the combined name
fn absorb(node: &mut TreeNode, child: TreeNode) {
    node.name = format!("{}{}{}", node.name, PATH_SEPARATOR, child.name);
    node.path = child.path;
    node.node_ref = child.node_ref;
    node.children = child.children;
    node.package_name = child.package_name;
    node.value = child.value;
    node.is_package_root = node.name == node.package_name;
}
