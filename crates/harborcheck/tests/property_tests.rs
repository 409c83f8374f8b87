//! Property-based tests for the safe-harbor scanner.
//!
//! These tests use proptest to generate random tables and cell values and
//! verify that the scanner maintains its invariants under all conditions:
//!
//! 1. **No panics**: any cell content is either a match or a non-match
//! 2. **Determinism**: same table and limit, same ordered warnings
//! 3. **One warning per column**: no column is ever reported twice
//! 4. **Limit respected**: no warning ever names a row beyond the limit

use proptest::prelude::*;

use harborcheck::taxonomy::{is_email, is_ip, is_ssn, is_vin, is_zip};
use harborcheck::{DataTable, SafeHarborValidator};

// =============================================================================
// Test Strategies
// =============================================================================

/// Arbitrary cell content, including whitespace and punctuation.
fn any_cell() -> impl Strategy<Value = String> {
    "[ -~]{0,40}"
}

/// Cells that resemble the identifier shapes the scanner looks for.
fn identifier_like_cell() -> impl Strategy<Value = String> {
    prop_oneof![
        // SSN-like
        "[0-9]{3}-[0-9]{2}-[0-9]{4}",
        // ZIP-like
        "[0-9]{5}",
        // Email-like
        "[a-z]{1,8}@[a-z]{1,8}\\.[a-z]{2,3}",
        // IP-like
        "[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}",
        // Title-case name-like
        "[A-Z][a-z]{2,8} [A-Z][a-z]{2,8}",
        // Free text
        "[a-z0-9 ]{0,30}",
    ]
}

/// Headers that never collide with taxonomy labels.
fn neutral_header() -> impl Strategy<Value = String> {
    "measurement_[a-z0-9]{6,12}"
}

fn small_table() -> impl Strategy<Value = DataTable> {
    (1usize..=4, 0usize..=8).prop_flat_map(|(cols, rows)| {
        (
            proptest::collection::vec(neutral_header(), cols),
            proptest::collection::vec(
                proptest::collection::vec(identifier_like_cell(), cols),
                rows,
            ),
        )
            .prop_map(|(headers, rows)| DataTable::new(headers, rows, b','))
    })
}

// =============================================================================
// Invariants
// =============================================================================

proptest! {
    #[test]
    fn no_panic_on_arbitrary_cells(cells in proptest::collection::vec(any_cell(), 0..20)) {
        let rows: Vec<Vec<String>> = cells.into_iter().map(|c| vec![c]).collect();
        let table = DataTable::new(vec!["col1".to_string()], rows, b',');
        let _ = SafeHarborValidator::new().validate(&table);
    }

    #[test]
    fn validate_is_deterministic(table in small_table()) {
        let validator = SafeHarborValidator::new();
        prop_assert_eq!(validator.validate(&table), validator.validate(&table));
    }

    #[test]
    fn at_most_one_warning_per_column(table in small_table()) {
        let warnings = SafeHarborValidator::new().validate(&table);
        let mut columns: Vec<usize> = warnings.iter().map(|w| w.column).collect();
        let total = columns.len();
        columns.sort_unstable();
        columns.dedup();
        prop_assert_eq!(columns.len(), total);
    }

    #[test]
    fn warnings_never_name_rows_beyond_limit(table in small_table(), limit in 0usize..6) {
        let warnings = SafeHarborValidator::new().validate_limited(&table, Some(limit));
        for warning in &warnings {
            prop_assert!(warning.row <= limit);
        }
    }

    #[test]
    fn limited_scan_is_prefix_consistent(table in small_table()) {
        // A warning found under a limit must also be found without one
        let validator = SafeHarborValidator::new();
        let unlimited = validator.validate(&table);
        let limited = validator.validate_limited(&table, Some(2));
        for warning in &limited {
            prop_assert!(unlimited.contains(warning));
        }
    }

    #[test]
    fn column_indices_in_bounds(table in small_table()) {
        let cols = table.headers.len();
        let warnings = SafeHarborValidator::new().validate(&table);
        for warning in &warnings {
            prop_assert!(warning.column < cols);
        }
    }
}

// =============================================================================
// Predicate Properties
// =============================================================================

proptest! {
    #[test]
    fn predicates_never_panic(value in any_cell()) {
        let _ = is_zip(&value);
        let _ = is_ssn(&value);
        let _ = is_email(&value);
        let _ = is_ip(&value);
        let _ = is_vin(&value);
    }

    #[test]
    fn well_formed_ssn_always_matches(a in 0u32..1000, b in 0u32..100, c in 0u32..10000) {
        let ssn = format!("{:03}-{:02}-{:04}", a, b, c);
        prop_assert!(is_ssn(&ssn));
    }

    #[test]
    fn well_formed_zip_always_matches(z in 0u32..100000) {
        let zip = format!("{:05}", z);
        prop_assert!(is_zip(&zip));
    }

    #[test]
    fn valid_ipv4_always_matches(a in 0u8..=255, b in 0u8..=255, c in 0u8..=255, d in 0u8..=255) {
        let ip = format!("{}.{}.{}.{}", a, b, c, d);
        prop_assert!(is_ip(&ip));
    }
}
