//! Which resume fields are personally identifying
//!
//! Only top-level fields are considered. PII that appears inside nested
//! sections (for example free text in `experiences[].description`) is not
//! selected and is stored as written.

use crate::models::ResumeContent;

/// Top-level content fields that are sealed at rest
///
/// Adding a field here is all it takes to have it sealed on write and opened
/// on read.
pub const PII_FIELDS: &[&str] = &["name", "email", "phone"];

/// Check whether a top-level field name is PII
pub fn is_pii_field(field: &str) -> bool {
    PII_FIELDS.contains(&field)
}

/// The PII fields present in `content`, in `PII_FIELDS` order
pub fn select_pii_fields(content: &ResumeContent) -> Vec<&'static str> {
    PII_FIELDS
        .iter()
        .copied()
        .filter(|field| content.contains_key(field))
        .collect()
}
