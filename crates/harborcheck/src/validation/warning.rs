//! Warning type reporting a detected identifier.

use serde::{Deserialize, Serialize};

use crate::taxonomy::IdentifierCategory;

/// A detected identifier: where it was found and what category it is.
///
/// Warnings are produced in discovery order and never mutated. `row` 0 is
/// the header row; data rows are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    /// Zero-based column index.
    pub column: usize,
    /// 0 = header row, >= 1 = 1-based data row.
    pub row: usize,
    /// Detected identifier category.
    pub category: IdentifierCategory,
    /// The matched header or cell text.
    pub evidence: String,
}

impl Warning {
    /// Warning for a column whose header matched a label.
    pub fn header(column: usize, category: IdentifierCategory, evidence: impl Into<String>) -> Self {
        Self {
            column,
            row: 0,
            category,
            evidence: evidence.into(),
        }
    }

    /// Warning for a cell whose value matched a pattern.
    pub fn cell(
        column: usize,
        row: usize,
        category: IdentifierCategory,
        evidence: impl Into<String>,
    ) -> Self {
        Self {
            column,
            row,
            category,
            evidence: evidence.into(),
        }
    }

    /// True iff this warning came from the header scan.
    pub fn is_header(&self) -> bool {
        self.row == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_warning() {
        let w = Warning::header(2, IdentifierCategory::EmailAddress, "Email");
        assert_eq!(w.row, 0);
        assert!(w.is_header());
        assert_eq!(w.evidence, "Email");
    }

    #[test]
    fn test_cell_warning() {
        let w = Warning::cell(0, 3, IdentifierCategory::SocialSecurityNumber, "123-45-6789");
        assert!(!w.is_header());
        assert_eq!(w.row, 3);
    }

    #[test]
    fn test_serde_round_trip() {
        let w = Warning::cell(1, 2, IdentifierCategory::IpAddress, "10.0.0.1");
        let json = serde_json::to_string(&w).unwrap();
        let back: Warning = serde_json::from_str(&json).unwrap();
        assert_eq!(back, w);
    }
}
