//! Configuration and constants for the treemap pipeline and CLI.

/// Current output schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Name and path of the implicit root node
pub const ROOT_NAME: &str = "/";

/// Separator used in module paths and merged node names
pub const PATH_SEPARATOR: char = '/';

/// Package name assigned to modules the bundler could not attribute
pub const UNKNOWN_PACKAGE: &str = "[unknown]";

/// Directory segment marking the start of installed dependencies
pub const DEPENDENCY_ROOT_MARKER: &str = "node_modules";

/// Prefix of scoped package directories (e.g. `@babel`)
pub const SCOPE_MARKER: char = '@';

/// Color index for nodes without a resolved package
pub const UNASSIGNED_COLOR_INDEX: usize = 0;

// Ratios at or below this percentage are shown as BELOW_MIN_RATIO_LABEL
pub const MIN_VISIBLE_PERCENTAGE: f64 = 0.01;
pub const BELOW_MIN_RATIO_LABEL: &str = "< 0.01%";

/// Bundle name used when none is given
pub const DEFAULT_BUNDLE_NAME: &str = "Bundle";

/// Color buckets handed to the rendering layer, cycled per package rank
pub const TREEMAP_COLORS: &[&str] = &[
    "#37434A", "#282A35", "#3C5056", "#263C5F", "#313158", "#4A325C",
];

/// Framing levels above the per-depth levels (bundle border, top-level groups)
pub const FRAME_LEVELS: usize = 2;

// Field names for stats parsing (stats entries and plain exports differ)
pub const MODULE_FIELD_NAMES: &[&str] = &["modules", "moduleList", "module_list"];
pub const RUNTIME_FIELD_NAMES: &[&str] = &["runtimeModules", "runtime_modules"];

/// Upper bound for the `--top-packages` option
pub const MAX_TOP_PACKAGES: usize = 1000;
