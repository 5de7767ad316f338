//! Aggregation of flat module records into a treemap tree.
//!
//! The pipeline runs five stages over one exclusively owned tree:
//! 1. Build the path-prefix tree (`builder`)
//! 2. Resolve owning packages bottom-up (`packages`)
//! 3. Collapse single-child folder chains (`collapse`)
//! 4. Unfold `@scope` folders into scoped packages (`scopes`)
//! 5. Rank packages and compute sizes and ratios (`metrics`)

pub mod builder;
pub mod collapse;
pub mod metrics;
pub mod packages;
pub mod scopes;
pub mod tree;

// Re-export main types and functions
pub use builder::{build_tree, PackageIndex};
pub use collapse::collapse_chains;
pub use metrics::{calculate_distribution, calculate_sizes, SizeDistribution};
pub use packages::fold_packages;
pub use scopes::unfold_scopes;
pub use tree::{ModuleTree, NodeDisplay, NodeRef, NodeValue, PackageSize, TreeNode};

use crate::parser::ModuleRecord;
use log::debug;

/// Run the whole pipeline over one bundle
///
/// **Public** - main entry point of the aggregation core
///
/// Records must be pre-validated (see `parser::validate_records`): absolute,
/// unique paths. An all-zero bundle still yields a tree, but without ratios.
pub fn build_module_tree(records: &[ModuleRecord]) -> ModuleTree {
    let mut packages = PackageIndex::new();

    let built = build_tree(records, &mut packages);
    let mut root = built.root;

    fold_packages(&mut root, &mut packages);
    collapse_chains(&mut root);
    unfold_scopes(&mut root);
    let ranking = calculate_sizes(&mut root);

    debug!(
        "Module tree ready: {} top-level nodes, {} bytes",
        root.children.len(),
        root.value.size
    );

    ModuleTree {
        root,
        max_depth: built.max_depth,
        max_package_count: packages.max_package_count(),
        packages: ranking,
    }
}
