//! The safe-harbor scan engine.

use crate::input::{DataHandle, DataTable};
use crate::taxonomy::Taxonomy;

use super::warning::Warning;

/// Scans a tabular dataset for safe-harbor identifier categories.
///
/// A scan is a single deterministic pass: headers first, then data rows. A
/// column claimed by a header label is never tested against cell content,
/// and a column that produces a row warning is retired immediately, so no
/// column ever yields more than one warning. The engine runs synchronously
/// on the caller's thread and holds no state across invocations; one
/// validator can serve concurrent scans of different datasets.
pub struct SafeHarborValidator {
    taxonomy: Taxonomy,
}

impl SafeHarborValidator {
    /// Create a validator with the safe-harbor taxonomy.
    pub fn new() -> Self {
        Self {
            taxonomy: Taxonomy::safe_harbor(),
        }
    }

    /// Create a validator with a custom taxonomy.
    pub fn with_taxonomy(taxonomy: Taxonomy) -> Self {
        Self { taxonomy }
    }

    /// The taxonomy in use.
    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Scan every data row.
    pub fn validate(&self, handle: &dyn DataHandle) -> Vec<Warning> {
        self.validate_limited(handle, None)
    }

    /// Scan at most `max_rows` data rows (`None` = all, `Some(0)` = headers
    /// only).
    ///
    /// Warnings are ordered: header warnings in ascending column order,
    /// then row warnings by ascending row and descending column within a
    /// row.
    pub fn validate_limited(&self, handle: &dyn DataHandle, max_rows: Option<usize>) -> Vec<Warning> {
        let mut warnings = Vec::new();
        let mut remaining: Vec<usize> = (0..handle.column_count()).collect();

        self.check_headers(handle, &mut remaining, &mut warnings);

        if !remaining.is_empty() {
            self.check_rows(handle, &mut remaining, max_rows, &mut warnings);
        }

        warnings
    }

    /// Match headers against the taxonomy labels. The first matching rule
    /// claims the column; claimed columns leave the working set.
    fn check_headers(
        &self,
        handle: &dyn DataHandle,
        remaining: &mut Vec<usize>,
        warnings: &mut Vec<Warning>,
    ) {
        remaining.retain(|&column| {
            let header = handle.header_at(column);
            match self.taxonomy.match_header(header) {
                Some(rule) => {
                    warnings.push(Warning::header(column, rule.category(), header));
                    false
                }
                None => true,
            }
        });
    }

    /// Match cell values of the still-unclaimed columns against the
    /// taxonomy patterns, row by row.
    fn check_rows(
        &self,
        handle: &dyn DataHandle,
        remaining: &mut Vec<usize>,
        max_rows: Option<usize>,
        warnings: &mut Vec<Warning>,
    ) {
        let mut records = handle.records();
        // The first record is the header row
        records.next();

        let mut row = 0usize;
        for record in records {
            if remaining.is_empty() {
                break;
            }
            if let Some(max) = max_rows {
                if row >= max {
                    break;
                }
            }
            row += 1;

            // Visit higher column indices first: removing the current
            // entry then never shifts an unvisited one.
            let mut i = remaining.len();
            while i > 0 {
                i -= 1;
                let column = remaining[i];
                let Some(value) = record.get(column) else {
                    // Short record: not a match for this column in this row
                    continue;
                };
                if DataTable::is_null_value(value) {
                    continue;
                }
                if let Some(category) = self.taxonomy.match_value(value) {
                    warnings.push(Warning::cell(column, row, category, value.as_str()));
                    remaining.remove(i);
                }
            }
        }
    }
}

impl Default for SafeHarborValidator {
    fn default() -> Self {
        Self::new()
    }
}
