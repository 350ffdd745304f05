//! Transparent field-level PII encryption for resume content
//!
//! - `fields`: which top-level fields are PII
//! - `codec`: content <-> stored string, PII-agnostic
//! - `transform`: seal before write, open after read

pub mod codec;
pub mod fields;
pub mod transform;

pub use fields::{is_pii_field, select_pii_fields, PII_FIELDS};
pub use transform::{
    seal_for_write, unseal_for_read, FieldIssue, FieldIssueKind, SealedBlob, UnsealedContent,
};
