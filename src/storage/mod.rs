//! Storage layer for resume-vault
//!
//! `ResumeStore` is the persistence boundary the resume service writes
//! through. It deals exclusively in sealed records: its write methods only
//! accept `SealedBlob` content. `ResumeRepository` is the JSON file
//! implementation with atomic writes.

pub mod file_io;
pub mod resumes;

pub use file_io::{read_json, write_json_atomic};
pub use resumes::ResumeRepository;

use crate::audit::AuditLogger;
use crate::config::paths::VaultPaths;
use crate::error::VaultError;
use crate::models::{OwnerId, ResumeId, ResumeRecord, ResumeStatus};
use crate::pii::SealedBlob;

/// Record fields to change in an update; `None` leaves a field as stored
#[derive(Debug, Clone, Default)]
pub struct RecordChanges {
    pub title: Option<String>,
    pub status: Option<ResumeStatus>,
    pub content: Option<SealedBlob>,
}

impl RecordChanges {
    /// Change only the title
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Names of the record fields this update touches
    pub fn changed_fields(&self) -> Vec<String> {
        let mut fields = Vec::new();
        if self.title.is_some() {
            fields.push("title".to_string());
        }
        if self.status.is_some() {
            fields.push("status".to_string());
        }
        if self.content.is_some() {
            fields.push("content".to_string());
        }
        fields
    }
}

/// Persistence boundary for resume records
///
/// Every lookup is scoped by owner: a record owned by someone else behaves
/// exactly like a missing one.
pub trait ResumeStore: Send + Sync {
    /// Persist a new record; the store assigns the id and timestamps
    fn create(
        &self,
        owner_id: OwnerId,
        title: String,
        status: ResumeStatus,
        content: SealedBlob,
    ) -> Result<ResumeRecord, VaultError>;

    /// Apply `changes` and bump `updated_at`; `None` if missing or not owned
    fn update(
        &self,
        id: ResumeId,
        owner_id: OwnerId,
        changes: RecordChanges,
    ) -> Result<Option<ResumeRecord>, VaultError>;

    fn get_by_id(
        &self,
        id: ResumeId,
        owner_id: OwnerId,
    ) -> Result<Option<ResumeRecord>, VaultError>;

    /// All records of one owner, most recently updated first
    fn list_by_owner(&self, owner_id: OwnerId) -> Result<Vec<ResumeRecord>, VaultError>;

    /// Remove a record; `false` if missing or not owned
    fn delete(&self, id: ResumeId, owner_id: OwnerId) -> Result<bool, VaultError>;
}

/// Main storage coordinator
pub struct Storage {
    paths: VaultPaths,
    pub resumes: ResumeRepository,
    pub audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: VaultPaths) -> Result<Self, VaultError> {
        paths.ensure_directories()?;

        Ok(Self {
            resumes: ResumeRepository::new(paths.resumes_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &VaultPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), VaultError> {
        self.resumes.load()
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = VaultPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
        storage.load_all().unwrap();
        assert_eq!(storage.resumes.count().unwrap(), 0);
    }

    #[test]
    fn test_changed_fields() {
        assert!(RecordChanges::default().changed_fields().is_empty());

        let changes = RecordChanges {
            status: Some(ResumeStatus::Final),
            ..RecordChanges::title("New title")
        };
        assert_eq!(changes.changed_fields(), ["title", "status"]);
    }
}
