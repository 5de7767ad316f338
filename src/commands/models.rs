use std::path::PathBuf;

/// Arguments for the build command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct BuildArgs {
    /// Bundler stats JSON to read
    pub input: PathBuf,

    /// Output path for the treemap JSON
    pub output_json: PathBuf,

    /// Bundle name; `None` falls back to the stats platform
    pub name: Option<String>,

    /// Restrict the treemap to modules inside this folder
    pub folder: Option<String>,

    /// Include the modules prepended for the runtime
    pub include_runtime: bool,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Number of packages listed in the summary
    pub top_packages: usize,
}

impl Default for BuildArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("stats.json"),
            output_json: PathBuf::from("treemap.json"),
            name: None,
            folder: None,
            include_runtime: false,
            print_summary: false,
            top_packages: 20,
        }
    }
}
