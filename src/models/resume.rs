//! Resume models
//!
//! `ResumeRecord` is what the store persists: its content blob is always
//! sealed. `Resume` is what callers receive: the same record with its content
//! opened back to plaintext and any per-field read problems attached.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::content::ResumeContent;
use super::ids::{OwnerId, ResumeId};
use crate::pii::{FieldIssue, SealedBlob};

/// Minimum title length (after trimming)
pub const TITLE_MIN_LEN: usize = 3;

/// Maximum title length (after trimming)
pub const TITLE_MAX_LEN: usize = 100;

/// Lifecycle status of a resume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResumeStatus {
    #[default]
    Draft,
    Final,
    Archived,
}

impl fmt::Display for ResumeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Final => write!(f, "final"),
            Self::Archived => write!(f, "archived"),
        }
    }
}

impl FromStr for ResumeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "final" => Ok(Self::Final),
            "archived" => Ok(Self::Archived),
            other => Err(format!(
                "unknown status '{}' (expected draft, final or archived)",
                other
            )),
        }
    }
}

/// A resume as persisted by the store, PII sealed
///
/// Only serialized from here; the repository reads its file into its own
/// record type so a `SealedBlob` is never deserialized from outside input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeRecord {
    /// Assigned by the store, immutable
    pub id: ResumeId,

    /// Owning user, immutable after creation
    pub owner_id: OwnerId,

    pub title: String,

    pub status: ResumeStatus,

    /// Encoded resume content with every PII field sealed
    pub content_blob: SealedBlob,

    pub created_at: DateTime<Utc>,

    /// Bumped on every successful write
    pub updated_at: DateTime<Utc>,
}

/// A resume as handed to callers, PII in plaintext
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resume {
    pub id: ResumeId,
    pub owner_id: OwnerId,
    pub title: String,
    pub status: ResumeStatus,
    pub content: ResumeContent,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// PII fields that could not be opened and were returned as stored
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<FieldIssue>,
}

impl Resume {
    /// Whether every PII field was opened cleanly
    pub fn is_complete(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Validate and normalize a resume title
pub fn validate_title(title: &str) -> Result<String, ResumeValidationError> {
    let trimmed = title.trim();
    let len = trimmed.chars().count();

    if len < TITLE_MIN_LEN {
        return Err(ResumeValidationError::TitleTooShort(len));
    }
    if len > TITLE_MAX_LEN {
        return Err(ResumeValidationError::TitleTooLong(len));
    }

    Ok(trimmed.to_string())
}

/// Validation errors for resume input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumeValidationError {
    TitleTooShort(usize),
    TitleTooLong(usize),
    EmptyUpdate,
}

impl fmt::Display for ResumeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TitleTooShort(len) => write!(
                f,
                "Resume title too short ({} chars, min {})",
                len, TITLE_MIN_LEN
            ),
            Self::TitleTooLong(len) => write!(
                f,
                "Resume title too long ({} chars, max {})",
                len, TITLE_MAX_LEN
            ),
            Self::EmptyUpdate => write!(
                f,
                "Update must change at least one of title, status or content"
            ),
        }
    }
}

impl std::error::Error for ResumeValidationError {}
