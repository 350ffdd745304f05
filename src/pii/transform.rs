//! Sealing PII on the way into the store and opening it on the way out
//!
//! The store only accepts `SealedBlob`s. Outside this crate `seal_for_write`
//! is the only way to build one; inside it, the repository also rebuilds blobs
//! from its own file on load. `unseal_for_read` is tolerant: a field that
//! cannot be opened is returned as stored and reported as a `FieldIssue`.
//!
//! Each token is bound to its owner and field name, so a token copied into
//! another resume's content, or into another field, does not open there.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::codec;
use super::fields::select_pii_fields;
use crate::crypto::{is_sealed_token, Cipher};
use crate::error::{VaultError, VaultResult};
use crate::models::content::json_type_name;
use crate::models::{OwnerId, ResumeContent};

/// Encoded resume content whose PII fields are all sealed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SealedBlob(String);

impl SealedBlob {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Wrap a blob exactly as it sits in storage, bypassing sealing
    pub(crate) fn from_stored(blob: impl Into<String>) -> Self {
        Self(blob.into())
    }
}

/// Associated data for one PII field: owner uuid bytes, then the field name
fn field_context(owner_id: OwnerId, field: &str) -> Vec<u8> {
    let mut context = Vec::with_capacity(16 + field.len());
    context.extend_from_slice(owner_id.as_uuid().as_bytes());
    context.extend_from_slice(field.as_bytes());
    context
}

/// Why a PII field came back in its stored form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldIssueKind {
    /// A sealed token that failed to open (corrupt, tampered or wrong key)
    Unreadable,
    /// A plain string where a sealed token was expected
    NotSealed,
    /// Neither a string nor null
    NotAString,
}

impl fmt::Display for FieldIssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable => write!(f, "unreadable"),
            Self::NotSealed => write!(f, "not sealed"),
            Self::NotAString => write!(f, "not a string"),
        }
    }
}

/// A PII field that could not be opened on read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub field: String,
    pub kind: FieldIssueKind,
    pub detail: String,
}

impl FieldIssue {
    fn new(field: &str, kind: FieldIssueKind, detail: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            kind,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.field, self.kind, self.detail)
    }
}

/// Content opened for a caller, plus any fields that stayed sealed
#[derive(Debug, Clone, PartialEq)]
pub struct UnsealedContent {
    pub content: ResumeContent,
    pub issues: Vec<FieldIssue>,
}

/// Seal every PII field of freshly supplied content and encode it
///
/// Empty strings, nulls and absent fields are left alone. A value that already
/// carries a token which opens for this owner and field is kept as is rather
/// than sealed a second time. Any other value, including a token bound to a
/// different owner or field, is sealed as plaintext. Any failure rejects the
/// whole write.
pub fn seal_for_write(
    cipher: &Cipher,
    owner_id: OwnerId,
    mut content: ResumeContent,
) -> VaultResult<SealedBlob> {
    for field in select_pii_fields(&content) {
        let context = field_context(owner_id, field);
        let Some(value) = content.get_mut(field) else {
            continue;
        };

        match value {
            Value::Null => {}
            Value::String(s) if s.is_empty() => {}
            Value::String(s) => {
                if is_sealed_token(s) && cipher.open(s, &context).is_ok() {
                    continue;
                }
                *s = cipher.seal(s, &context)?;
            }
            other => {
                return Err(VaultError::MalformedContent(format!(
                    "PII field '{}' must be a string, got {}",
                    field,
                    json_type_name(other)
                )));
            }
        }
    }

    Ok(SealedBlob(codec::encode(&content)))
}

/// Decode a stored blob and open every PII field that can be opened
///
/// Only a blob that cannot be decoded at all is an error; per-field failures
/// are collected in `UnsealedContent::issues`.
pub fn unseal_for_read(
    cipher: &Cipher,
    owner_id: OwnerId,
    blob: &SealedBlob,
) -> VaultResult<UnsealedContent> {
    let mut content = codec::decode(blob.as_str())?;
    let mut issues = Vec::new();

    for field in select_pii_fields(&content) {
        let context = field_context(owner_id, field);
        let Some(value) = content.get_mut(field) else {
            continue;
        };

        match value {
            Value::Null => {}
            Value::String(s) if s.is_empty() => {}
            Value::String(s) if is_sealed_token(s) => match cipher.open(s, &context) {
                Ok(plaintext) => *s = plaintext,
                Err(e) => issues.push(FieldIssue::new(
                    field,
                    FieldIssueKind::Unreadable,
                    e.to_string(),
                )),
            },
            Value::String(_) => issues.push(FieldIssue::new(
                field,
                FieldIssueKind::NotSealed,
                "stored without encryption",
            )),
            other => issues.push(FieldIssue::new(
                field,
                FieldIssueKind::NotAString,
                format!("stored as {}", json_type_name(other)),
            )),
        }
    }

    Ok(UnsealedContent { content, issues })
}
