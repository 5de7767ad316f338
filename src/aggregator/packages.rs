//! Resolve the owning package of every folder, bottom-up.
//!
//! A folder belongs to a package only when all of its children agree on one.
//! Children that are themselves `node_modules` folders are skipped: nested
//! dependencies never decide who owns the folder that installs them.

use super::builder::PackageIndex;
use super::tree::TreeNode;
use log::debug;

/// Resolve package names for the whole tree
///
/// **Public** - stage 2 of the pipeline
///
/// The root always ends without a package, even when the whole bundle is a
/// single package.
pub fn fold_packages(root: &mut TreeNode, packages: &mut PackageIndex) {
    for child in &mut root.children {
        resolve_package(child, packages);
    }
    root.clear_package();

    debug!(
        "Resolved packages for {} top-level nodes",
        root.children.len()
    );
}

/// Resolve one node after all of its children
fn resolve_package(node: &mut TreeNode, packages: &mut PackageIndex) {
    // Modules carry their package from the builder
    if !node.package_name.is_empty() {
        return;
    }

    for child in &mut node.children {
        resolve_package(child, packages);
    }

    let mut candidates: Vec<&str> = Vec::with_capacity(node.children.len());
    for child in &node.children {
        if !child.is_dependency_root() {
            candidates.push(child.package_name.as_str());
        }
    }

    match shared_package(&candidates).map(str::to_string) {
        Some(name) => {
            node.value.color_index = packages.index_for(&name);
            node.is_package_root = name == node.name;
            node.package_name = name;
        }
        None => node.clear_package(),
    }
}

/// The single non-empty name every candidate agrees on, if any
///
/// An empty candidate comes from a mixed child and makes the parent mixed too.
fn shared_package<'a>(candidates: &[&'a str]) -> Option<&'a str> {
    let (&first, rest) = candidates.split_first()?;
    if first.is_empty() || rest.iter().any(|name| *name != first) {
        return None;
    }
    Some(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::builder::build_tree;
    use crate::parser::ModuleRecord;

    fn folded(records: &[ModuleRecord]) -> TreeNode {
        let mut packages = PackageIndex::new();
        let mut root = build_tree(records, &mut packages).root;
        fold_packages(&mut root, &mut packages);
        root
    }

    #[test]
    fn test_shared_package() {
        assert_eq!(shared_package(&["a", "a"]), Some("a"));
        assert_eq!(shared_package(&["a", "b"]), None);
        assert_eq!(shared_package(&["a", ""]), None);
        assert_eq!(shared_package(&[]), None);
    }

    #[test]
    fn test_homogeneous_folder_adopts_package() {
        let root = folded(&[
            ModuleRecord::new("/node_modules/react/index.js", 10, Some("react")),
            ModuleRecord::new("/node_modules/react/cjs/react.js", 90, Some("react")),
        ]);

        let node_modules = root.child("node_modules").unwrap();
        let react = node_modules.child("react").unwrap();
        assert_eq!(react.package_name, "react");
        assert!(react.is_package_root);
        assert_eq!(react.value.color_index, 1);

        let cjs = react.child("cjs").unwrap();
        assert_eq!(cjs.package_name, "react");
        assert!(!cjs.is_package_root);

        assert_eq!(node_modules.package_name, "react");
        assert!(!node_modules.is_package_root);
    }

    #[test]
    fn test_mixed_folder_is_ambiguous() {
        let root = folded(&[
            ModuleRecord::new("/node_modules/react/index.js", 10, Some("react")),
            ModuleRecord::new("/node_modules/lodash/index.js", 20, Some("lodash")),
        ]);

        let node_modules = root.child("node_modules").unwrap();
        assert_eq!(node_modules.package_name, "");
        assert_eq!(node_modules.value.color_index, 0);
        assert!(!node_modules.is_package_root);
    }

    #[test]
    fn test_nested_dependencies_do_not_leak_upward() {
        let root = folded(&[
            ModuleRecord::new("/node_modules/a/index.js", 10, Some("a")),
            ModuleRecord::new("/node_modules/a/node_modules/b/index.js", 5, Some("b")),
        ]);

        let a = root.child("node_modules").unwrap().child("a").unwrap();
        assert_eq!(a.package_name, "a");
        assert!(a.is_package_root);

        let nested = a.child("node_modules").unwrap();
        assert_eq!(nested.package_name, "b");
    }

    #[test]
    fn test_mixed_child_makes_parent_mixed() {
        let root = folded(&[
            ModuleRecord::new("/app/lib/x.js", 1, Some("x")),
            ModuleRecord::new("/app/lib/y.js", 1, Some("y")),
            ModuleRecord::new("/app/z.js", 1, Some("x")),
        ]);

        let app = root.child("app").unwrap();
        assert_eq!(app.child("lib").unwrap().package_name, "");
        assert_eq!(app.package_name, "");
    }

    #[test]
    fn test_root_never_carries_a_package() {
        let root = folded(&[ModuleRecord::new("/src/a.js", 1, Some("pkg"))]);

        assert_eq!(root.package_name, "");
        assert_eq!(root.value.color_index, 0);
        assert_eq!(root.child("src").unwrap().package_name, "pkg");
    }
}
