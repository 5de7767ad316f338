use bundle_treemap::aggregator::{
    build_module_tree, build_tree, collapse_chains, fold_packages, unfold_scopes, ModuleTree,
    NodeRef, PackageIndex, TreeNode,
};
use bundle_treemap::parser::ModuleRecord;
use pretty_assertions::assert_eq;

fn sample_bundle() -> Vec<ModuleRecord> {
    vec![
        ModuleRecord::new("/app/src/index.js", 1200, None),
        ModuleRecord::new("/app/src/components/Button.js", 800, None),
        ModuleRecord::new("/app/src/components/Header.js", 400, None),
        ModuleRecord::new("/app/node_modules/react/index.js", 300, Some("react")),
        ModuleRecord::new("/app/node_modules/react/cjs/react.production.js", 9000, Some("react")),
        ModuleRecord::new("/app/node_modules/@babel/runtime/helpers/a.js", 50, Some("@babel/runtime")),
        ModuleRecord::new("/app/node_modules/@babel/runtime/index.js", 70, Some("@babel/runtime")),
        ModuleRecord::new("/app/node_modules/@babel/core/index.js", 20, Some("@babel/core")),
        ModuleRecord::new("/app/node_modules/@babel/core/lib/parse.js", 0, Some("@babel/core")),
        ModuleRecord::new("/app/node_modules/left-pad/index.js", 1, Some("left-pad")),
        ModuleRecord::new(
            "/app/node_modules/left-pad/node_modules/tiny/index.js",
            2,
            Some("tiny"),
        ),
        ModuleRecord::new("/app/node_modules/left-pad/node_modules/tiny/lib.js", 3, Some("tiny")),
    ]
}

fn all_nodes(tree: &ModuleTree) -> Vec<&TreeNode> {
    let mut nodes = Vec::new();
    tree.root.walk(&mut |node| nodes.push(node));
    nodes
}

#[test]
fn test_size_is_conserved() {
    let records = sample_bundle();
    let tree = build_module_tree(&records);

    let input_total: u64 = records.iter().map(|r| r.size).sum();
    let leaf_total: u64 = tree.root.leaves().iter().map(|leaf| leaf.value.size).sum();

    assert_eq!(tree.total_size(), input_total);
    assert_eq!(leaf_total, input_total);
}

#[test]
fn test_folder_size_is_sum_of_children() {
    let tree = build_module_tree(&sample_bundle());

    for node in all_nodes(&tree) {
        if !node.children.is_empty() {
            let children: u64 = node.children.iter().map(|c| c.value.size).sum();
            assert_eq!(node.value.size, children, "size mismatch at {}", node.name);
        }
    }
}

#[test]
fn test_ratios_are_bounded_and_additive() {
    let tree = build_module_tree(&sample_bundle());

    for node in all_nodes(&tree) {
        let display = node.display.as_ref().unwrap();
        assert!((0.0..=1.0).contains(&display.ratio));

        if !node.children.is_empty() {
            let children: f64 = node
                .children
                .iter()
                .map(|c| c.display.as_ref().unwrap().ratio)
                .sum();
            assert!((children - display.ratio).abs() < 1e-9);
        }
    }
}

#[test]
fn test_exactly_one_reference_per_node() {
    let tree = build_module_tree(&sample_bundle());

    for node in all_nodes(&tree) {
        match &node.node_ref {
            NodeRef::Module(path) => {
                assert!(node.is_leaf());
                assert_eq!(&node.path, path);
            }
            NodeRef::Folder(path) => assert!(path.starts_with('/')),
        }
    }
}

/// Leaves owned by `node`, not counting nested dependency folders
fn owned_leaves(node: &TreeNode) -> Vec<&TreeNode> {
    if node.is_leaf() {
        return vec![node];
    }
    node.children
        .iter()
        .filter(|child| !child.is_dependency_root())
        .flat_map(owned_leaves)
        .collect()
}

#[test]
fn test_package_names_are_homogeneous() {
    let tree = build_module_tree(&sample_bundle());

    for node in all_nodes(&tree) {
        if node.package_name.is_empty() {
            continue;
        }
        for leaf in owned_leaves(node) {
            assert_eq!(leaf.package_name, node.package_name, "under {}", node.name);
        }
    }
}

#[test]
fn test_sample_bundle_shape() {
    let tree = build_module_tree(&sample_bundle());

    assert_eq!(tree.max_depth, 6);
    assert_eq!(tree.max_package_count, 7);
    assert_eq!(tree.nodes().len(), 1);

    let app = &tree.nodes()[0];
    assert_eq!(app.name, "app");
    // node_modules never decides the owner of the folder installing it
    assert_eq!(app.package_name, "[unknown]");
    assert!(!app.is_package_root);

    let node_modules = app.child("node_modules").unwrap();
    let names: Vec<&str> = node_modules.children.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["react", "@babel/runtime", "@babel/core", "left-pad"]);

    let runtime = node_modules.child("@babel/runtime").unwrap();
    assert!(runtime.is_package_root);
    assert_eq!(runtime.path, "@babel/runtime");
    assert_eq!(runtime.children[0].name, "helpers/a.js");
    assert!(runtime.children[0].is_module());

    let core = node_modules.child("@babel/core").unwrap();
    assert!(core.is_package_root);
    assert_eq!(core.children[0].name, "index.js");
    assert_eq!(core.child("lib/parse.js").unwrap().value.size, 0);

    let left_pad = node_modules.child("left-pad").unwrap();
    assert_eq!(left_pad.package_name, "left-pad");
    assert!(left_pad.is_package_root);
    let nested = left_pad.child("node_modules/tiny").unwrap();
    assert_eq!(nested.package_name, "tiny");
    assert_eq!(nested.value.size, 5);
    assert_eq!(left_pad.value.size, 6);

    let src = app.child("src").unwrap();
    assert_eq!(src.package_name, "[unknown]");
    assert_eq!(src.descendant_leaf_count, 3);
}

#[test]
fn test_color_indices_follow_package_size() {
    let tree = build_module_tree(&sample_bundle());

    let order: Vec<&str> = tree.packages.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        order,
        vec!["[unknown]", "react", "@babel/runtime", "@babel/core", "left-pad", "tiny"]
    );

    let node_modules = tree.nodes()[0].child("node_modules").unwrap();
    assert_eq!(node_modules.child("react").unwrap().value.color_index, 2);
    assert_eq!(node_modules.value.color_index, 0);
    assert_eq!(tree.nodes()[0].value.color_index, 1);
    assert_eq!(tree.nodes()[0].child("src").unwrap().value.color_index, 1);
    assert_eq!(tree.packages[0].size, tree.total_size());
}

#[test]
fn test_two_module_scenario() {
    let tree = build_module_tree(&[
        ModuleRecord::new("/src/a.js", 100, Some("pkg")),
        ModuleRecord::new("/src/b.js", 50, Some("pkg")),
    ]);

    assert_eq!(tree.total_size(), 150);
    assert_eq!(tree.nodes().len(), 1);

    let src = &tree.nodes()[0];
    assert_eq!(src.name, "src");
    assert_eq!(src.children.len(), 2);
    assert_eq!(src.children[0].display.as_ref().unwrap().ratio_label, "66.67%");
    assert_eq!(src.children[1].display.as_ref().unwrap().ratio_label, "33.33%");
    assert_eq!(
        src.children[0].display.as_ref().unwrap().tooltip_label,
        "66.67% (100 B)"
    );
}

#[test]
fn test_ratio_ties_round_up() {
    let tree = build_module_tree(&[
        ModuleRecord::new("/src/a.js", 1, None),
        ModuleRecord::new("/src/b.js", 799, None),
    ]);

    let a = tree.nodes()[0].child("a.js").unwrap();
    assert_eq!(a.display.as_ref().unwrap().ratio_label, "0.13%");
    assert_eq!(a.display.as_ref().unwrap().tooltip_label, "0.13% (1 B)");
}

#[test]
fn test_zero_size_scenario() {
    let tree = build_module_tree(&[ModuleRecord::new("/index.js", 0, None)]);

    assert_eq!(tree.total_size(), 0);
    assert!(!tree.has_data());
    assert!(tree.nodes()[0].display.is_none());
}

#[test]
fn test_scoped_package_scenario() {
    let tree = build_module_tree(&[
        ModuleRecord::new("/node_modules/@scope/pkg/x.js", 10, Some("@scope/pkg")),
        ModuleRecord::new("/node_modules/@scope/pkg/y.js", 20, Some("@scope/pkg")),
    ]);

    let node_modules = &tree.nodes()[0];
    assert_eq!(node_modules.name, "node_modules");
    assert_eq!(node_modules.children.len(), 1);

    let scoped = &node_modules.children[0];
    assert_eq!(scoped.name, "@scope/pkg");
    assert!(scoped.is_package_root);
    assert_eq!(scoped.children.len(), 2);
    assert!(scoped.child("pkg").is_none());
}

#[test]
fn test_mixed_scope_keeps_each_package_as_a_unit() {
    let tree = build_module_tree(&[
        ModuleRecord::new("/node_modules/@s/p/lib/a.js", 1, Some("@s/p")),
        ModuleRecord::new("/node_modules/@s/p/lib/b.js", 1, Some("@s/p")),
        ModuleRecord::new("/node_modules/@s/q/i.js", 1, Some("@s/q")),
    ]);

    let node_modules = &tree.nodes()[0];
    let names: Vec<&str> = node_modules.children.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["@s/p", "@s/q"]);

    let p = node_modules.child("@s/p").unwrap();
    assert!(p.is_package_root);
    assert_eq!(p.path, "@s/p");
    assert_eq!(p.children[0].name, "lib");

    let q = node_modules.child("@s/q").unwrap();
    assert!(q.is_package_root);
    assert_eq!(q.children[0].path, "/node_modules/@s/q/i.js");
}

#[test]
fn test_collapse_is_idempotent_on_sample() {
    let mut packages = PackageIndex::new();
    let mut root = build_tree(&sample_bundle(), &mut packages).root;
    fold_packages(&mut root, &mut packages);
    collapse_chains(&mut root);
    unfold_scopes(&mut root);

    let once = root.clone();
    collapse_chains(&mut root);
    assert_eq!(root, once);
}

#[test]
fn test_no_unresolved_scope_after_unfolding() {
    let tree = build_module_tree(&sample_bundle());

    for node in all_nodes(&tree) {
        if !node.is_leaf() && node.name.starts_with('@') {
            assert_eq!(node.name, node.package_name);
        }
    }
}

#[test]
fn test_color_table_is_per_invocation() {
    let first = build_module_tree(&sample_bundle());
    let second = build_module_tree(&[ModuleRecord::new("/x/a.js", 1, Some("solo"))]);

    assert_eq!(first.max_package_count, 7);
    assert_eq!(second.max_package_count, 2);
    assert_eq!(second.nodes()[0].value.color_index, 1);
}
