//! The safe-harbor identifier taxonomy: categories, header labels, and
//! value-shape patterns.

mod category;
mod patterns;
mod rules;

pub use category::IdentifierCategory;
pub use patterns::{
    ValuePattern, is_date, is_email, is_iban, is_ip, is_name_like, is_ssn, is_url, is_vin, is_zip,
};
pub use rules::{AttributeRule, LabelRule, Taxonomy};
