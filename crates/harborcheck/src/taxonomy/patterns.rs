//! Value-shape predicates for detecting identifiers from cell content.
//!
//! Each predicate is an independent pure function over a single cell string,
//! so a category's shape check can be unit-tested without building a
//! taxonomy or a data handle. Malformed input is a non-match, never an
//! error.

use std::net::IpAddr;

use once_cell::sync::Lazy;
use regex::Regex;

static ZIP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{5}(-\d{4})?$").expect("valid zip regex"));

// Day/month/year (either order) in common separators, ISO dates, or a bare
// 4-digit year.
static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2}[-/.]\d{1,2}[-/.](\d{4}|\d{2})|\d{4}[-/.]\d{1,2}[-/.]\d{1,2}|\d{4})$")
        .expect("valid date regex")
});

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9-]+(\.[a-zA-Z0-9-]+)+$").expect("valid email regex")
});

static SSN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{3}-\d{2}-\d{4}|\d{9})$").expect("valid ssn regex"));

// ISO 13616 shape: country code, two check digits, up to 30 alphanumerics.
// Shape only; no mod-97 verification.
static IBAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]{2}\d{2}[A-Za-z0-9]{1,30}$").expect("valid iban regex"));

// 17 alphanumerics excluding I, O, Q.
static VIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[A-HJ-NPR-Z0-9]{17}$").expect("valid vin regex"));

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(https?|ftp)://\S+$").expect("valid url regex"));

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-z]+([ -][A-Z][a-z]+)*$").expect("valid name regex"));

/// 5-digit ZIP code, optionally with a 4-digit extension.
pub fn is_zip(value: &str) -> bool {
    ZIP_RE.is_match(value.trim())
}

/// Date-like value: day/month/year in common separators or a 4-digit year.
pub fn is_date(value: &str) -> bool {
    DATE_RE.is_match(value.trim())
}

/// Email address with at least one dot in the domain.
pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

/// US social security number, 3-2-4 dashed groups or 9 contiguous digits.
pub fn is_ssn(value: &str) -> bool {
    SSN_RE.is_match(value.trim())
}

/// IBAN-shaped account number.
pub fn is_iban(value: &str) -> bool {
    IBAN_RE.is_match(value.trim())
}

/// Vehicle identification number.
pub fn is_vin(value: &str) -> bool {
    VIN_RE.is_match(value.trim())
}

/// URL with an http, https, or ftp scheme.
pub fn is_url(value: &str) -> bool {
    URL_RE.is_match(value.trim())
}

/// Valid IPv4 dotted-quad or IPv6 literal.
///
/// Delegates to `std::net` parsing, which enforces octet ranges; a shape
/// like `999.1.1.1` is not an address.
pub fn is_ip(value: &str) -> bool {
    value.trim().parse::<IpAddr>().is_ok()
}

/// Title-case alphabetic token(s), the lowest-confidence heuristic.
pub fn is_name_like(value: &str) -> bool {
    NAME_RE.is_match(value.trim())
}

/// A value-shape matcher attached to an identifier category.
///
/// Closed set: one variant per regex-shaped identifier. Categories whose
/// value shapes are indistinguishable from free text (addresses, phone
/// numbers, certificate numbers, device serials) have no variant here and
/// are detectable by header label only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValuePattern {
    Zip,
    Date,
    Email,
    Ssn,
    Iban,
    Vin,
    Url,
    Ip,
    Name,
}

impl ValuePattern {
    /// Test a cell value against this pattern.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            ValuePattern::Zip => is_zip(value),
            ValuePattern::Date => is_date(value),
            ValuePattern::Email => is_email(value),
            ValuePattern::Ssn => is_ssn(value),
            ValuePattern::Iban => is_iban(value),
            ValuePattern::Vin => is_vin(value),
            ValuePattern::Url => is_url(value),
            ValuePattern::Ip => is_ip(value),
            ValuePattern::Name => is_name_like(value),
        }
    }

    /// Short name for reports.
    pub fn name(&self) -> &'static str {
        match self {
            ValuePattern::Zip => "zip",
            ValuePattern::Date => "date",
            ValuePattern::Email => "email",
            ValuePattern::Ssn => "ssn",
            ValuePattern::Iban => "iban",
            ValuePattern::Vin => "vin",
            ValuePattern::Url => "url",
            ValuePattern::Ip => "ip",
            ValuePattern::Name => "name",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip() {
        assert!(is_zip("12345"));
        assert!(is_zip("12345-6789"));
        assert!(!is_zip("1234"));
        assert!(!is_zip("123456"));
        assert!(!is_zip("12345-678"));
        assert!(!is_zip("abcde"));
    }

    #[test]
    fn test_date() {
        assert!(is_date("12/31/1999"));
        assert!(is_date("31.12.1999"));
        assert!(is_date("1-2-99"));
        assert!(is_date("1999-12-31"));
        assert!(is_date("1984"));
        assert!(!is_date("12/31"));
        assert!(!is_date("31 Dec 1999"));
        assert!(!is_date("123"));
        assert!(!is_date("12345"));
    }

    #[test]
    fn test_email() {
        assert!(is_email("a@b.com"));
        assert!(is_email("first.last+tag@mail.example.org"));
        assert!(!is_email("not-an-email"));
        assert!(!is_email("a@b"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("a b@example.com"));
    }

    #[test]
    fn test_ssn() {
        assert!(is_ssn("123-45-6789"));
        assert!(is_ssn("123456789"));
        assert!(!is_ssn("123-456-789"));
        assert!(!is_ssn("12345678"));
        assert!(!is_ssn("1234567890"));
    }

    #[test]
    fn test_iban() {
        assert!(is_iban("DE44500105175407324931"));
        assert!(is_iban("GB82WEST12345698765432"));
        assert!(!is_iban("D144500105175407324931"));
        assert!(!is_iban("DE44"));
        assert!(!is_iban("DEXX500105175407324931"));
    }

    #[test]
    fn test_vin() {
        assert!(is_vin("1HGBH41JXMN109186"));
        assert!(is_vin("1hgbh41jxmn109186"));
        assert!(!is_vin("1HGBH41JXMN10918"));
        assert!(!is_vin("IHGBH41JXMN109186"));
        assert!(!is_vin("OHGBH41JXMN109186"));
        assert!(!is_vin("QHGBH41JXMN109186"));
    }

    #[test]
    fn test_url() {
        assert!(is_url("http://example.com"));
        assert!(is_url("https://example.com/path?q=1"));
        assert!(is_url("ftp://files.example.com"));
        assert!(is_url("HTTPS://EXAMPLE.COM"));
        assert!(!is_url("example.com"));
        assert!(!is_url("mailto:a@b.com"));
        assert!(!is_url("http://"));
    }

    #[test]
    fn test_ip() {
        assert!(is_ip("192.168.0.1"));
        assert!(is_ip("8.8.8.8"));
        assert!(is_ip("2001:db8::1"));
        assert!(is_ip("::1"));
        assert!(!is_ip("999.1.1.1"));
        assert!(!is_ip("192.168.0"));
        assert!(!is_ip("hostname"));
    }

    #[test]
    fn test_name_like() {
        assert!(is_name_like("Alice"));
        assert!(is_name_like("Alice Smith"));
        assert!(is_name_like("Jean-Pierre Dupont"));
        assert!(!is_name_like("alice"));
        assert!(!is_name_like("ALICE"));
        assert!(!is_name_like("Alice123"));
        assert!(!is_name_like("123"));
        assert!(!is_name_like(""));
    }

    #[test]
    fn test_whitespace_trimmed() {
        assert!(is_zip("  12345  "));
        assert!(is_email(" a@b.com "));
    }

    #[test]
    fn test_pattern_dispatch() {
        assert!(ValuePattern::Zip.matches("12345"));
        assert!(!ValuePattern::Zip.matches("hello"));
        assert!(ValuePattern::Ip.matches("10.0.0.1"));
        assert_eq!(ValuePattern::Ssn.name(), "ssn");
    }
}
