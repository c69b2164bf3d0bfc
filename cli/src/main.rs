//! hashvex CLI
//!
//! Generates the reference-vector artifacts: per-length checksum tables
//! and example tables, one file per algorithm.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{generate_checksums, generate_examples, list_algorithms};
use std::path::PathBuf;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "hashvex")]
#[command(about = "Reference-vector generator for non-cryptographic hash functions", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write per-length SHA-256 checksum tables ("<name>.txt")
    Checksums {
        /// Output directory
        #[arg(long, value_name = "DIR", default_value = ".")]
        out_dir: PathBuf,

        /// Algorithms to generate (all when omitted)
        #[arg(value_name = "ALGORITHM")]
        algorithms: Vec<String>,
    },
    /// Write example tables ("<name> examples.txt") where available
    Examples {
        /// Output directory
        #[arg(long, value_name = "DIR", default_value = ".")]
        out_dir: PathBuf,

        /// Algorithms to generate (all when omitted)
        #[arg(value_name = "ALGORITHM")]
        algorithms: Vec<String>,
    },
    /// List the supported algorithms
    List,
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Checksums { out_dir, algorithms } => generate_checksums(&out_dir, &algorithms),
        Commands::Examples { out_dir, algorithms } => generate_examples(&out_dir, &algorithms),
        Commands::List => {
            list_algorithms();
            Ok(())
        }
    }
}
