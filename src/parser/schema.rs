//! Input and output JSON schema definitions.
//!
//! Input: module records exported by the bundler, either as a plain list or
//! wrapped in a stats entry. Output: the versioned treemap document we write
//! to disk.

use crate::aggregator::{PackageSize, TreeNode};
use serde::{Deserialize, Serialize};

/// One bundled module: absolute path, size and owning package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRecord {
    /// Absolute, `/`-separated module path
    #[serde(default)]
    pub path: String,

    /// Module size in bytes
    #[serde(default)]
    pub size: u64,

    /// Owning package, if the module comes from a dependency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
}

impl ModuleRecord {
    pub fn new(path: impl Into<String>, size: u64, package: Option<&str>) -> Self {
        Self {
            path: path.into(),
            size,
            package: package.map(str::to_string),
        }
    }

    pub fn is_absolute(&self) -> bool {
        self.path.starts_with('/')
    }
}

/// Metadata of a stats entry (one bundle of one platform)
///
/// Module lists are extracted separately because they come in several shapes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsEntry {
    #[serde(default)]
    pub id: Option<String>,

    /// `android`, `ios` or `web`
    #[serde(default)]
    pub platform: Option<String>,

    #[serde(default)]
    pub project_root: Option<String>,

    #[serde(default)]
    pub entry_point: Option<String>,
}

impl StatsEntry {
    /// Name for the bundle, e.g. `ios` or the entry id
    pub fn bundle_name(&self) -> Option<&str> {
        self.platform.as_deref().or(self.id.as_deref())
    }
}

/// Top-level treemap document written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreemapDocument {
    /// Schema version for compatibility checking
    pub version: String,

    /// Bundle name shown by the renderer
    pub name: String,

    /// Timestamp when the document was generated
    pub generated_at: String,

    /// Total bundle size in bytes
    pub total_size: u64,

    /// Segment count of the longest module path
    pub max_depth: usize,

    /// Distinct packages plus one
    pub max_package_count: usize,

    /// One color per color index
    pub colors: Vec<String>,

    /// Number of style levels the renderer needs
    pub levels: usize,

    /// Packages ranked by size
    pub packages: Vec<PackageSize>,

    /// Root-level nodes of the treemap
    pub nodes: Vec<TreeNode>,
}
