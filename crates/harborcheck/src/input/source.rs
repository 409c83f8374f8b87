//! Data source abstraction and metadata.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata about the source data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Detected format (csv, tsv, etc.).
    pub format: String,
    /// Detected encoding.
    pub encoding: String,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// When the scan was performed.
    pub scanned_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a file that has been scanned.
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        format: String,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            format,
            encoding: "utf-8".to_string(),
            row_count,
            column_count,
            scanned_at: Utc::now(),
        }
    }
}

/// Access contract for tabular data under scan.
///
/// The scanner needs headers plus a single forward pass over the records.
/// Implementations backed by other storage (a database cursor, an arrow
/// buffer) can plug in here; [`DataTable`] is the in-memory implementation
/// produced by the bundled CSV parser.
pub trait DataHandle {
    /// Number of columns in the dataset.
    fn column_count(&self) -> usize;

    /// Header text for the given column index.
    fn header_at(&self, index: usize) -> &str;

    /// Forward-only, single-pass iteration over the records.
    ///
    /// The first yielded record is the header row; data rows follow in
    /// original order. Consumers that only want data rows must skip the
    /// first element.
    fn records(&self) -> Box<dyn Iterator<Item = &[String]> + '_>;
}

/// Represents parsed tabular data.
#[derive(Debug, Clone)]
pub struct DataTable {
    /// Column headers.
    pub headers: Vec<String>,
    /// Row data as strings (row-major order).
    pub rows: Vec<Vec<String>>,
    /// The delimiter used.
    pub delimiter: u8,
}

impl DataTable {
    /// Create a new data table.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>, delimiter: u8) -> Self {
        Self {
            headers,
            rows,
            delimiter,
        }
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col).map(|s| s.as_str()))
    }

    /// Check if a value represents a missing/null value.
    pub fn is_null_value(value: &str) -> bool {
        let trimmed = value.trim();
        trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("na")
            || trimmed.eq_ignore_ascii_case("n/a")
            || trimmed.eq_ignore_ascii_case("null")
            || trimmed.eq_ignore_ascii_case("none")
            || trimmed.eq_ignore_ascii_case("nil")
            || trimmed == "."
            || trimmed == "-"
    }
}

impl DataHandle for DataTable {
    fn column_count(&self) -> usize {
        self.headers.len()
    }

    fn header_at(&self, index: usize) -> &str {
        self.headers.get(index).map(|s| s.as_str()).unwrap_or("")
    }

    fn records(&self) -> Box<dyn Iterator<Item = &[String]> + '_> {
        Box::new(
            std::iter::once(self.headers.as_slice())
                .chain(self.rows.iter().map(|r| r.as_slice())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> DataTable {
        DataTable::new(
            vec!["id".to_string(), "status".to_string()],
            vec![
                vec!["1".to_string(), "active".to_string()],
                vec!["2".to_string(), "inactive".to_string()],
            ],
            b',',
        )
    }

    #[test]
    fn test_records_yield_header_first() {
        let table = sample_table();
        let mut records = table.records();

        let header = records.next().unwrap();
        assert_eq!(header, &["id".to_string(), "status".to_string()]);
        assert_eq!(records.count(), 2);
    }

    #[test]
    fn test_header_at_out_of_range() {
        let table = sample_table();
        assert_eq!(table.header_at(0), "id");
        assert_eq!(table.header_at(99), "");
    }

    #[test]
    fn test_is_null_value() {
        assert!(DataTable::is_null_value(""));
        assert!(DataTable::is_null_value("NA"));
        assert!(DataTable::is_null_value("N/A"));
        assert!(DataTable::is_null_value("null"));
        assert!(DataTable::is_null_value("."));
        assert!(!DataTable::is_null_value("value"));
        assert!(!DataTable::is_null_value("0"));
    }
}
