//! Scan command - scan a data file and print the compliance report.

use std::fs;
use std::path::PathBuf;

use colored::Colorize;
use harborcheck::{HarborCheck, ParserConfig, ScanConfig, ScanReport};

pub fn run(
    file: PathBuf,
    limit: Option<usize>,
    delimiter: Option<char>,
    json: bool,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<i32, Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let delimiter = match delimiter {
        Some(c) if c.is_ascii() => Some(c as u8),
        Some(c) => return Err(format!("Delimiter must be an ASCII character: '{}'", c).into()),
        None => None,
    };

    let checker = HarborCheck::with_config(ScanConfig {
        parser: ParserConfig {
            delimiter,
            ..ParserConfig::default()
        },
        max_rows: limit,
    });

    if !json {
        println!(
            "{} {}",
            "Scanning".cyan().bold(),
            file.display().to_string().white()
        );
    }

    let report = checker.scan(&file)?;

    if json {
        let rendered = serde_json::to_string_pretty(&report)?;
        match output {
            Some(path) => fs::write(path, rendered)?,
            None => println!("{}", rendered),
        }
    } else {
        print_report(&report, verbose);
        if let Some(path) = output {
            fs::write(&path, serde_json::to_string_pretty(&report)?)?;
            println!();
            println!(
                "{} {}",
                "Saved to".green().bold(),
                path.display().to_string().white()
            );
        }
    }

    // Exit 2 lets scripts gate on "identifiers found"
    if report.warnings.is_empty() {
        Ok(0)
    } else {
        Ok(2)
    }
}

fn print_report(report: &ScanReport, verbose: bool) {
    if verbose {
        println!();
        println!("{}", "Source:".yellow().bold());
        println!("  format   {}", report.source.format);
        println!("  columns  {}", report.source.column_count);
        println!("  rows     {}", report.source.row_count);
        println!("  hash     {}", report.source.hash);
    }

    println!();
    if report.warnings.is_empty() {
        println!("{}", "No safe-harbor identifiers detected.".green());
        return;
    }

    println!(
        "Found {} likely identifying columns ({} by header, {} by content)",
        report.summary.flagged_columns.to_string().white().bold(),
        report.summary.header_matches.to_string().yellow(),
        report.summary.value_matches.to_string().yellow()
    );
    println!();

    for warning in &report.warnings {
        let location = if warning.is_header() {
            "header".to_string()
        } else {
            format!("row {}", warning.row)
        };
        println!(
            "  {} {:>3}  {:8}  {:24}  {}",
            "column".dimmed(),
            warning.column,
            location,
            warning.category.label().red(),
            warning.evidence
        );
    }

    println!();
    println!("{}", report.summary.recommendation.yellow());
}
