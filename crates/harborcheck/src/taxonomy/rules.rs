//! The declarative rule table binding categories to header labels and
//! value patterns.

use serde::Serialize;

use super::category::IdentifierCategory;
use super::patterns::ValuePattern;

/// An expected column header, matched with fuzzy tolerance.
///
/// `tolerance` is the maximum case-insensitive Levenshtein distance allowed
/// between a header and `text`. Tolerance is per-label, not per-category:
/// short, ambiguous labels ("zip", "fax") require an exact match while
/// longer ones ("birth date") absorb minor spelling variation.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LabelRule {
    pub text: &'static str,
    pub tolerance: usize,
}

impl LabelRule {
    /// Label requiring an exact (case-insensitive) match.
    pub const fn exact(text: &'static str) -> Self {
        Self { text, tolerance: 0 }
    }

    /// Label allowing up to `tolerance` edits.
    pub const fn fuzzy(text: &'static str, tolerance: usize) -> Self {
        Self { text, tolerance }
    }

    /// Test a column header against this label.
    pub fn matches(&self, header: &str) -> bool {
        let header = header.trim().to_lowercase();
        let label = self.text.to_lowercase();
        if self.tolerance == 0 {
            header == label
        } else {
            levenshtein(&header, &label) <= self.tolerance
        }
    }
}

/// One taxonomy entry: a category, its header labels, and an optional
/// value-shape pattern.
#[derive(Debug, Clone)]
pub struct AttributeRule {
    category: IdentifierCategory,
    labels: Vec<LabelRule>,
    pattern: Option<ValuePattern>,
}

impl AttributeRule {
    fn new(
        category: IdentifierCategory,
        labels: Vec<LabelRule>,
        pattern: Option<ValuePattern>,
    ) -> Self {
        Self {
            category,
            labels,
            pattern,
        }
    }

    /// The identifier category this rule detects.
    pub fn category(&self) -> IdentifierCategory {
        self.category
    }

    /// The header labels this rule recognizes.
    pub fn labels(&self) -> &[LabelRule] {
        &self.labels
    }

    /// The value pattern, if this category is detectable from cell content.
    pub fn pattern(&self) -> Option<ValuePattern> {
        self.pattern
    }

    /// True iff the header matches any of this rule's labels.
    pub fn matches_label(&self, header: &str) -> bool {
        self.labels.iter().any(|label| label.matches(header))
    }

    /// True iff this rule has a pattern and the cell value matches it.
    pub fn matches_value(&self, value: &str) -> bool {
        self.pattern.is_some_and(|p| p.matches(value))
    }
}

/// The ordered, immutable catalogue of safe-harbor identifier rules.
///
/// Built once at construction and consulted read-only thereafter; it is
/// safe to share one taxonomy across concurrent scans of different
/// datasets. Rule order is the tie-break order: the first matching rule
/// wins for a given column or cell.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    rules: Vec<AttributeRule>,
}

impl Taxonomy {
    /// Build the safe-harbor rule catalogue.
    ///
    /// GeographicSubdivision appears twice: once for address-like labels
    /// with no pattern, once for ZIP labels with the ZIP pattern. The Name
    /// rule sits last so its low-confidence title-case heuristic is
    /// consulted only after every other shape has had first refusal.
    pub fn safe_harbor() -> Self {
        use IdentifierCategory::*;

        let rules = vec![
            AttributeRule::new(
                GeographicSubdivision,
                vec![
                    LabelRule::fuzzy("address", 1),
                    LabelRule::exact("city"),
                    LabelRule::fuzzy("country", 1),
                    LabelRule::fuzzy("precinct", 1),
                ],
                None,
            ),
            AttributeRule::new(
                GeographicSubdivision,
                vec![LabelRule::exact("zip"), LabelRule::fuzzy("zip code", 1)],
                Some(ValuePattern::Zip),
            ),
            AttributeRule::new(
                Date,
                vec![
                    LabelRule::fuzzy("age", 1),
                    LabelRule::fuzzy("year", 1),
                    LabelRule::fuzzy("birth date", 2),
                    LabelRule::fuzzy("admission date", 2),
                    LabelRule::fuzzy("discharge date", 2),
                    LabelRule::fuzzy("death date", 2),
                    LabelRule::fuzzy("date", 1),
                ],
                Some(ValuePattern::Date),
            ),
            AttributeRule::new(
                TelephoneNumber,
                vec![
                    LabelRule::fuzzy("number", 1),
                    LabelRule::fuzzy("telephone", 1),
                    LabelRule::exact("fax"),
                    LabelRule::fuzzy("phone", 1),
                ],
                None,
            ),
            AttributeRule::new(
                EmailAddress,
                vec![
                    LabelRule::exact("email"),
                    LabelRule::fuzzy("e-mail address", 1),
                ],
                Some(ValuePattern::Email),
            ),
            AttributeRule::new(
                SocialSecurityNumber,
                vec![
                    LabelRule::exact("ssn"),
                    LabelRule::fuzzy("social security number", 1),
                ],
                Some(ValuePattern::Ssn),
            ),
            AttributeRule::new(
                AccountNumber,
                vec![
                    LabelRule::exact("iban"),
                    LabelRule::fuzzy("account number", 1),
                ],
                Some(ValuePattern::Iban),
            ),
            AttributeRule::new(
                CertificateNumber,
                vec![
                    LabelRule::fuzzy("license", 1),
                    LabelRule::fuzzy("certificate", 1),
                ],
                None,
            ),
            AttributeRule::new(
                VehicleIdentifier,
                vec![
                    LabelRule::exact("vin"),
                    LabelRule::fuzzy("vehicle identification number", 2),
                ],
                Some(ValuePattern::Vin),
            ),
            AttributeRule::new(
                DeviceIdentifier,
                vec![LabelRule::fuzzy("serial number", 1)],
                None,
            ),
            AttributeRule::new(
                Url,
                vec![LabelRule::exact("url"), LabelRule::fuzzy("domain", 1)],
                Some(ValuePattern::Url),
            ),
            AttributeRule::new(
                IpAddress,
                vec![
                    LabelRule::exact("ip"),
                    LabelRule::exact("ipv4"),
                    LabelRule::exact("ipv6"),
                    LabelRule::fuzzy("ip address", 1),
                ],
                Some(ValuePattern::Ip),
            ),
            AttributeRule::new(
                Name,
                vec![LabelRule::fuzzy("name", 1)],
                Some(ValuePattern::Name),
            ),
        ];

        Self { rules }
    }

    /// All rules in tie-break order.
    pub fn rules(&self) -> &[AttributeRule] {
        &self.rules
    }

    /// First rule whose labels match the given column header.
    pub fn match_header(&self, header: &str) -> Option<&AttributeRule> {
        self.rules.iter().find(|rule| rule.matches_label(header))
    }

    /// Category of the first rule whose pattern matches the cell value.
    pub fn match_value(&self, value: &str) -> Option<IdentifierCategory> {
        self.rules
            .iter()
            .find(|rule| rule.matches_value(value))
            .map(|rule| rule.category())
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::safe_harbor()
    }
}

/// Classic Levenshtein distance (insert/delete/substitute, unit cost).
fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut prev: Vec<usize> = (0..=b_len).collect();
    let mut curr = vec![0; b_len + 1];

    for i in 1..=a_len {
        curr[0] = i;
        for j in 1..=b_len {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_len]
}
