//! Example: scan a tabular data file for safe-harbor identifiers.
//!
//! Usage:
//!   cargo run --example scan -- <file_path>
//!
//! Example:
//!   cargo run --example scan -- cohort.csv

use std::env;
use std::path::Path;

use harborcheck::HarborCheck;

fn main() -> harborcheck::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example scan -- <file_path>");
        std::process::exit(1);
    }

    let file_path = &args[1];
    if !Path::new(file_path).exists() {
        eprintln!("Error: File not found: {}", file_path);
        std::process::exit(1);
    }

    let checker = HarborCheck::new();
    let report = checker.scan(file_path)?;

    println!(
        "{} ({} columns, {} rows)",
        report.source.file, report.source.column_count, report.source.row_count
    );
    println!();

    if report.warnings.is_empty() {
        println!("No safe-harbor identifiers detected.");
        return Ok(());
    }

    for warning in &report.warnings {
        let location = if warning.is_header() {
            "header".to_string()
        } else {
            format!("row {}", warning.row)
        };
        println!(
            "  column {:>3}  {:8}  {:24}  {}",
            warning.column,
            location,
            warning.category.label(),
            warning.evidence
        );
    }

    println!();
    println!("{}", report.summary.recommendation);

    Ok(())
}
