//! Harborcheck CLI - safe-harbor de-identification compliance scanner.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Scan {
            file,
            limit,
            delimiter,
            json,
            output,
        } => commands::scan::run(file, limit, delimiter, json, output, cli.verbose),

        Commands::Categories { json } => commands::categories::run(json),
    };

    match result {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
