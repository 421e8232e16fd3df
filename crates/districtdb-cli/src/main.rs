//! districtdb-cli — Command-line interface for districtdb-core
//!
//! This binary provides a simple way to inspect and query the Korean
//! district database from your terminal, and to compile the flat district
//! list into the compressed tree format.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ districtdb-cli stats
//!
//! - List the provinces
//!   $ districtdb-cli provinces
//!
//! - Search regions (초성 and half-typed syllables match too)
//!   $ districtdb-cli search 강남
//!   $ districtdb-cli search 강ㄴ
//!
//! - Compile a flat district list into the tree form
//!   $ districtdb-cli build korea_districts.json -o korea_districts_tree.json
//!   $ districtdb-cli build korea_districts.json -o districts.bin --format bin --gzip
//!
//! Data source
//! -----------
//!
//! By default, commands load the dataset bundled with the
//! `districtdb-core` crate and automatically cache a binary version next to
//! it for fast subsequent runs. Use `--input <path>` to point at a custom
//! dataset in any supported form.
mod args;

use crate::args::{BuildFormat, CliArgs, Commands};
use clap::Parser;
use districtdb_core::{build_database, CompressionMode, TargetFormat};
use districtdb_core::{DistrictDb, DistrictSearch};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // The build command writes a dataset instead of loading one.
    if let Commands::Build {
        source,
        output,
        format,
        gzip,
    } = &args.command
    {
        let format = match format {
            BuildFormat::Json => TargetFormat::Json,
            BuildFormat::Bin => TargetFormat::Binary,
        };
        let compression = if *gzip {
            CompressionMode::Gzip
        } else {
            CompressionMode::None
        };
        build_database(Path::new(source), Path::new(output), format, compression)?;
        println!("Built {output} from {source}");
        return Ok(());
    }

    // Determine input file (default dataset inside districtdb-core)
    let input_path = args.input.unwrap_or_else(|| {
        let dir = DistrictDb::default_data_dir();
        let filename = DistrictDb::default_dataset_filename();
        dir.join(filename).to_string_lossy().to_string()
    });

    let db = DistrictDb::load_from_path(&input_path)?;

    match args.command {
        Commands::Stats => {
            let stats = db.stats();
            println!("Database statistics:");
            println!("  Provinces: {}", stats.provinces);
            println!("  Cities/Districts: {}", stats.cities);
            println!("  Towns: {}", stats.towns);
        }

        Commands::Provinces => {
            for path in db.expand() {
                if !path.contains(districtdb_core::PATH_SEPARATOR) {
                    println!("{path}");
                }
            }
        }

        Commands::Search { query } => {
            let matches = db.search(&query);
            if matches.is_empty() {
                println!("No regions found matching: {query}");
            } else {
                for record in matches {
                    println!("{} — {}", record.display_name, record.full_address);
                }
            }
        }

        // Handled above.
        Commands::Build { .. } => {}
    }

    Ok(())
}
