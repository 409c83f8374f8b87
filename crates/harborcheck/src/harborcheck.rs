//! Main HarborCheck struct and public API.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::input::{Parser, ParserConfig, SourceMetadata};
use crate::validation::{SafeHarborValidator, Warning};

/// Configuration for a scan.
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Maximum data rows to inspect (None = all).
    pub max_rows: Option<usize>,
}

/// Result of scanning a data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// Detected identifiers, in discovery order.
    pub warnings: Vec<Warning>,
    /// Summary statistics.
    pub summary: ScanSummary,
}

/// Summary of a scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSummary {
    /// Total number of columns.
    pub total_columns: usize,
    /// Number of columns flagged as identifying.
    pub flagged_columns: usize,
    /// Columns claimed by a header label.
    pub header_matches: usize,
    /// Columns claimed by cell content.
    pub value_matches: usize,
    /// Warning counts per category, in discovery order.
    pub warnings_by_category: IndexMap<String, usize>,
    /// Human-readable recommendation.
    pub recommendation: String,
}

/// The main scan engine: parses a file and runs the safe-harbor validator.
pub struct HarborCheck {
    config: ScanConfig,
    parser: Parser,
    validator: SafeHarborValidator,
}

impl HarborCheck {
    /// Create a new instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(ScanConfig::default())
    }

    /// Create an instance with custom configuration.
    pub fn with_config(config: ScanConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());

        Self {
            config,
            parser,
            validator: SafeHarborValidator::new(),
        }
    }

    /// The validator in use, for callers that bring their own data handle.
    pub fn validator(&self) -> &SafeHarborValidator {
        &self.validator
    }

    /// Scan a data file and produce a report.
    pub fn scan(&self, path: impl AsRef<Path>) -> Result<ScanReport> {
        let (table, source) = self.parser.parse_file(path)?;
        let warnings = self.validator.validate_limited(&table, self.config.max_rows);
        let summary = compute_summary(table.headers.len(), &warnings);

        Ok(ScanReport {
            source,
            warnings,
            summary,
        })
    }
}

impl Default for HarborCheck {
    fn default() -> Self {
        Self::new()
    }
}

fn compute_summary(total_columns: usize, warnings: &[Warning]) -> ScanSummary {
    let header_matches = warnings.iter().filter(|w| w.is_header()).count();
    let value_matches = warnings.len() - header_matches;

    let mut warnings_by_category: IndexMap<String, usize> = IndexMap::new();
    for warning in warnings {
        *warnings_by_category
            .entry(warning.category.label().to_string())
            .or_insert(0) += 1;
    }

    // One warning per column, so the counts coincide
    let flagged_columns = warnings.len();

    let recommendation = if warnings.is_empty() {
        "No safe-harbor identifiers detected.".to_string()
    } else {
        format!(
            "{} of {} columns likely contain identifying data; remove or generalize them before release.",
            flagged_columns, total_columns
        )
    };

    ScanSummary {
        total_columns,
        flagged_columns,
        header_matches,
        value_matches,
        warnings_by_category,
        recommendation,
    }
}
