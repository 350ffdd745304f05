//! Audit entry data structures
//!
//! Entries identify the resume and owner and name the record fields that
//! changed. They never carry resume content, sealed or otherwise.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{OwnerId, ResumeId};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub resume_id: ResumeId,

    pub owner_id: OwnerId,

    /// Resume title at the time of the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Record fields touched by an update (`title`, `status`, `content`)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub changed: Vec<String>,
}

impl AuditEntry {
    fn new(
        operation: Operation,
        resume_id: ResumeId,
        owner_id: OwnerId,
        title: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            resume_id,
            owner_id,
            title,
            changed: Vec::new(),
        }
    }

    /// Entry for a newly created resume
    pub fn create(resume_id: ResumeId, owner_id: OwnerId, title: impl Into<String>) -> Self {
        Self::new(Operation::Create, resume_id, owner_id, Some(title.into()))
    }

    /// Entry for an update touching the named record fields
    pub fn update(
        resume_id: ResumeId,
        owner_id: OwnerId,
        title: impl Into<String>,
        changed: Vec<String>,
    ) -> Self {
        Self {
            changed,
            ..Self::new(Operation::Update, resume_id, owner_id, Some(title.into()))
        }
    }

    /// Entry for a deleted resume
    pub fn delete(resume_id: ResumeId, owner_id: OwnerId) -> Self {
        Self::new(Operation::Delete, resume_id, owner_id, None)
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} by {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.resume_id,
            self.owner_id
        );

        if let Some(title) = &self.title {
            output.push_str(&format!(" ({})", title));
        }

        if !self.changed.is_empty() {
            output.push_str(&format!("\n  Changed: {}", self.changed.join(", ")));
        }

        output
    }
}
