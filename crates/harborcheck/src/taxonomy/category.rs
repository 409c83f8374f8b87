//! The closed set of identifier categories.

use serde::{Deserialize, Serialize};

/// A safe-harbor identifier category.
///
/// Each category names a class of data elements that must be removed or
/// flagged before a dataset can be considered de-identified. The set is
/// fixed; extending it means extending the taxonomy itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierCategory {
    /// Personal names.
    Name,
    /// Address fragments, city, country, precinct, ZIP code.
    GeographicSubdivision,
    /// Dates directly related to an individual, including bare years and ages.
    Date,
    /// Telephone and fax numbers.
    TelephoneNumber,
    /// Email addresses.
    EmailAddress,
    /// US social security numbers.
    SocialSecurityNumber,
    /// Bank account numbers (IBAN shape).
    AccountNumber,
    /// Certificate and license numbers.
    CertificateNumber,
    /// Vehicle identifiers and serial numbers (VIN).
    VehicleIdentifier,
    /// Device identifiers and serial numbers.
    DeviceIdentifier,
    /// Web URLs.
    Url,
    /// IPv4/IPv6 addresses.
    IpAddress,
}

impl IdentifierCategory {
    /// Get a human-readable label for the category.
    pub fn label(&self) -> &'static str {
        match self {
            IdentifierCategory::Name => "Name",
            IdentifierCategory::GeographicSubdivision => "Geographic Subdivision",
            IdentifierCategory::Date => "Date",
            IdentifierCategory::TelephoneNumber => "Telephone Number",
            IdentifierCategory::EmailAddress => "Email Address",
            IdentifierCategory::SocialSecurityNumber => "Social Security Number",
            IdentifierCategory::AccountNumber => "Account Number",
            IdentifierCategory::CertificateNumber => "Certificate Number",
            IdentifierCategory::VehicleIdentifier => "Vehicle Identifier",
            IdentifierCategory::DeviceIdentifier => "Device Identifier",
            IdentifierCategory::Url => "URL",
            IdentifierCategory::IpAddress => "IP Address",
        }
    }
}
