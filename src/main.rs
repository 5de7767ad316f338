//! Bundle Treemap CLI
//!
//! Turns bundler stats into a treemap document that any renderer can draw.

use anyhow::Result;
use bundle_treemap::commands::{
    display_schema, display_version, execute_build, validate_args, validate_treemap_file, BuildArgs,
};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

/// Bundle Treemap - module size aggregation for JavaScript bundles
#[derive(Parser, Debug)]
#[command(name = "bundle-treemap")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a treemap document from bundler stats
    Build {
        /// Stats JSON exported by the bundler
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for the treemap JSON
        #[arg(short, long, default_value = "treemap.json")]
        output: PathBuf,

        /// Bundle name (defaults to the stats platform)
        #[arg(short, long, env = "BUNDLE_TREEMAP_NAME")]
        name: Option<String>,

        /// Only include modules inside this absolute folder
        #[arg(long)]
        folder: Option<String>,

        /// Include modules prepended for the runtime
        #[arg(long)]
        include_runtime: bool,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Number of packages listed in the summary
        #[arg(long, default_value = "20")]
        top_packages: usize,
    },

    /// Validate a treemap JSON file
    Validate {
        /// Path to treemap JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Build {
            input,
            output,
            name,
            folder,
            include_runtime,
            summary,
            top_packages,
        } => {
            let args = BuildArgs {
                input,
                output_json: output,
                name,
                folder,
                include_runtime,
                print_summary: summary,
                top_packages,
            };

            validate_args(&args)?;
            execute_build(args)?;
        }

        Commands::Validate { file } => {
            validate_treemap_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
