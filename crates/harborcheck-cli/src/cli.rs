//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Harborcheck: safe-harbor de-identification compliance scanner
#[derive(Parser)]
#[command(name = "harborcheck")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a data file (CSV/TSV) for safe-harbor identifier categories
    ///
    /// Exits 0 when the dataset is clean, 2 when identifiers were found,
    /// so shell pipelines can gate on the result.
    Scan {
        /// Path to the data file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Maximum number of data rows to inspect (default: all)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Field delimiter (default: auto-detect)
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Output the full report as JSON
        #[arg(long)]
        json: bool,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the identifier categories and the header labels they recognize
    Categories {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
