use clap::{Parser, Subcommand, ValueEnum};

/// CLI arguments for districtdb-cli
#[derive(Debug, Parser)]
#[command(
    name = "districtdb",
    version,
    about = "CLI for querying and building the districtdb-core Korean district database"
)]
pub struct CliArgs {
    /// Path to the dataset: tree JSON, flat list JSON, or a .bin cache
    /// (.gz variants accepted). Defaults to the bundled dataset.
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the database contents
    Stats,

    /// List all top-level provinces
    Provinces,

    /// Search regions by jamo-aware substring (초성/half-typed input works)
    Search {
        /// Query string, e.g. "강남", "강ㄴ", "ㅎ"
        query: String,
    },

    /// Compile a flat district list (JSON array of paths) into the
    /// compressed tree format
    Build {
        /// Source JSON file
        source: String,

        /// Output file
        #[arg(short = 'o', long = "output")]
        output: String,

        /// Output encoding
        #[arg(long, value_enum, default_value = "json")]
        format: BuildFormat,

        /// Gzip the output (requires the 'compact' feature)
        #[arg(long)]
        gzip: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum BuildFormat {
    /// Minified tree JSON
    Json,
    /// Bincode binary
    Bin,
}
