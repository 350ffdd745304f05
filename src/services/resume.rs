//! Resume service
//!
//! The single entry point for reading and writing resumes. Content supplied by
//! a caller is sealed before it reaches the store, and every record leaving the
//! store goes through `present` to be opened, so no caller ever handles a
//! sealed blob and no path writes plaintext.

use crate::audit::{AuditEntry, AuditLogger};
use crate::crypto::Cipher;
use crate::error::{VaultError, VaultResult};
use crate::models::{
    validate_title, OwnerId, Resume, ResumeContent, ResumeId, ResumeRecord, ResumeStatus,
    ResumeValidationError,
};
use crate::pii::{seal_for_write, unseal_for_read};
use crate::storage::{RecordChanges, ResumeStore};

/// Input for creating a resume
#[derive(Debug, Clone)]
pub struct NewResume {
    pub title: String,
    pub status: ResumeStatus,
    pub content: ResumeContent,
}

impl NewResume {
    /// A draft with the given title and content
    pub fn draft(title: impl Into<String>, content: ResumeContent) -> Self {
        Self {
            title: title.into(),
            status: ResumeStatus::Draft,
            content,
        }
    }
}

/// Partial update; fields left as `None` keep their stored value
#[derive(Debug, Clone, Default)]
pub struct ResumeUpdate {
    pub title: Option<String>,
    pub status: Option<ResumeStatus>,
    /// Replaces the whole content document
    pub content: Option<ResumeContent>,
}

impl ResumeUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.status.is_none() && self.content.is_none()
    }
}

/// Service for resume management
pub struct ResumeService<'a> {
    store: &'a dyn ResumeStore,
    cipher: &'a Cipher,
    audit: Option<&'a AuditLogger>,
}

impl<'a> ResumeService<'a> {
    /// Create a new resume service
    pub fn new(store: &'a dyn ResumeStore, cipher: &'a Cipher) -> Self {
        Self {
            store,
            cipher,
            audit: None,
        }
    }

    /// Record every write in the given audit log
    pub fn with_audit(mut self, audit: &'a AuditLogger) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Privacy-first starting document: blank personal details, empty sections
    pub fn default_content() -> ResumeContent {
        ResumeContent::template()
    }

    /// Create a new resume
    pub fn create(&self, owner_id: OwnerId, input: NewResume) -> VaultResult<Resume> {
        let title = validate_title(&input.title).map_err(validation_error)?;
        let blob = seal_for_write(self.cipher, owner_id, input.content)?;

        let record = self.store.create(owner_id, title, input.status, blob)?;
        tracing::info!(resume_id = %record.id, owner_id = %owner_id, "created resume");

        self.record_audit(AuditEntry::create(record.id, owner_id, &record.title));
        self.present(record)
    }

    /// Update a resume's title, status or content
    pub fn update(
        &self,
        id: ResumeId,
        owner_id: OwnerId,
        update: ResumeUpdate,
    ) -> VaultResult<Resume> {
        if update.is_empty() {
            return Err(validation_error(ResumeValidationError::EmptyUpdate));
        }

        let title = update
            .title
            .as_deref()
            .map(validate_title)
            .transpose()
            .map_err(validation_error)?;

        // Content is only sealed when the caller supplies a new document; a
        // title or status change leaves the stored blob byte-for-byte as is.
        let content = update
            .content
            .map(|content| seal_for_write(self.cipher, owner_id, content))
            .transpose()?;

        let changes = RecordChanges {
            title,
            status: update.status,
            content,
        };
        let changed = changes.changed_fields();

        let record = self
            .store
            .update(id, owner_id, changes)?
            .ok_or_else(|| VaultError::resume_not_found(id.to_string()))?;
        tracing::info!(resume_id = %id, changed = ?changed, "updated resume");

        self.record_audit(AuditEntry::update(id, owner_id, &record.title, changed));
        self.present(record)
    }

    /// Get a resume by ID
    pub fn get(&self, id: ResumeId, owner_id: OwnerId) -> VaultResult<Resume> {
        let record = self
            .store
            .get_by_id(id, owner_id)?
            .ok_or_else(|| VaultError::resume_not_found(id.to_string()))?;

        self.present(record)
    }

    /// List an owner's resumes, most recently updated first
    ///
    /// A record whose content cannot be decoded at all takes an error slot of
    /// its own; the remaining resumes are still returned.
    pub fn list(&self, owner_id: OwnerId) -> VaultResult<Vec<VaultResult<Resume>>> {
        let records = self.store.list_by_owner(owner_id)?;
        Ok(records.into_iter().map(|record| self.present(record)).collect())
    }

    /// Delete a resume
    pub fn delete(&self, id: ResumeId, owner_id: OwnerId) -> VaultResult<()> {
        if !self.store.delete(id, owner_id)? {
            return Err(VaultError::resume_not_found(id.to_string()));
        }
        tracing::info!(resume_id = %id, "deleted resume");

        self.record_audit(AuditEntry::delete(id, owner_id));
        Ok(())
    }

    /// Turn a stored record into what callers see
    fn present(&self, record: ResumeRecord) -> VaultResult<Resume> {
        let unsealed = unseal_for_read(self.cipher, record.owner_id, &record.content_blob)
            .map_err(|e| match e {
                VaultError::MalformedContent(msg) => {
                    VaultError::MalformedContent(format!("resume {}: {}", record.id, msg))
                }
                other => other,
            })?;

        for issue in &unsealed.issues {
            tracing::warn!(
                resume_id = %record.id,
                field = %issue.field,
                kind = %issue.kind,
                "PII field returned as stored"
            );
        }

        Ok(Resume {
            id: record.id,
            owner_id: record.owner_id,
            title: record.title,
            status: record.status,
            content: unsealed.content,
            created_at: record.created_at,
            updated_at: record.updated_at,
            warnings: unsealed.issues,
        })
    }

    fn record_audit(&self, entry: AuditEntry) {
        let Some(audit) = self.audit else {
            return;
        };
        if let Err(e) = audit.log(&entry) {
            tracing::warn!(resume_id = %entry.resume_id, error = %e, "failed to write audit entry");
        }
    }
}

fn validation_error(err: ResumeValidationError) -> VaultError {
    VaultError::Validation(err.to_string())
}
