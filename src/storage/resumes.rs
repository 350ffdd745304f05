//! Resume repository for JSON storage
//!
//! Keeps resume records in memory and writes them through to resumes.json
//! after every mutation. Records are only ever handled in sealed form here.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::VaultError;
use crate::models::{OwnerId, ResumeId, ResumeRecord, ResumeStatus};
use crate::pii::SealedBlob;

use super::file_io::{read_json, write_json_atomic};
use super::{RecordChanges, ResumeStore};

/// Resume file layout as written
#[derive(Serialize)]
struct ResumeData<'a> {
    resumes: Vec<&'a ResumeRecord>,
}

/// Resume file layout as read back
#[derive(Debug, Default, Deserialize)]
struct StoredData {
    resumes: Vec<StoredRecord>,
}

/// One record as it sits in resumes.json
#[derive(Debug, Deserialize)]
struct StoredRecord {
    id: ResumeId,
    owner_id: OwnerId,
    title: String,
    #[serde(default)]
    status: ResumeStatus,
    content_blob: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<StoredRecord> for ResumeRecord {
    fn from(stored: StoredRecord) -> Self {
        Self {
            id: stored.id,
            owner_id: stored.owner_id,
            title: stored.title,
            status: stored.status,
            content_blob: SealedBlob::from_stored(stored.content_blob),
            created_at: stored.created_at,
            updated_at: stored.updated_at,
        }
    }
}

/// Repository for resume persistence
pub struct ResumeRepository {
    path: PathBuf,
    data: RwLock<HashMap<ResumeId, ResumeRecord>>,
}

impl ResumeRepository {
    /// Create a new resume repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load resumes from disk
    pub fn load(&self) -> Result<(), VaultError> {
        let file_data: StoredData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| VaultError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for stored in file_data.resumes {
            let record = ResumeRecord::from(stored);
            data.insert(record.id, record);
        }

        tracing::debug!(count = data.len(), path = %self.path.display(), "loaded resumes");
        Ok(())
    }

    /// Count all stored resumes, across owners
    pub fn count(&self) -> Result<usize, VaultError> {
        let data = self
            .data
            .read()
            .map_err(|e| VaultError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }

    fn persist(&self, data: &HashMap<ResumeId, ResumeRecord>) -> Result<(), VaultError> {
        let mut resumes: Vec<_> = data.values().collect();
        resumes.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then(a.id.as_uuid().cmp(b.id.as_uuid()))
        });

        write_json_atomic(&self.path, &ResumeData { resumes })
    }
}

impl ResumeStore for ResumeRepository {
    fn create(
        &self,
        owner_id: OwnerId,
        title: String,
        status: ResumeStatus,
        content: SealedBlob,
    ) -> Result<ResumeRecord, VaultError> {
        let now = Utc::now();
        let record = ResumeRecord {
            id: ResumeId::new(),
            owner_id,
            title,
            status,
            content_blob: content,
            created_at: now,
            updated_at: now,
        };

        let mut data = self
            .data
            .write()
            .map_err(|e| VaultError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(record.id, record.clone());
        if let Err(e) = self.persist(&data) {
            data.remove(&record.id);
            return Err(e);
        }

        Ok(record)
    }

    fn update(
        &self,
        id: ResumeId,
        owner_id: OwnerId,
        changes: RecordChanges,
    ) -> Result<Option<ResumeRecord>, VaultError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| VaultError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let Some(record) = data.get_mut(&id).filter(|r| r.owner_id == owner_id) else {
            return Ok(None);
        };

        let previous = record.clone();
        if let Some(title) = changes.title {
            record.title = title;
        }
        if let Some(status) = changes.status {
            record.status = status;
        }
        if let Some(content) = changes.content {
            record.content_blob = content;
        }
        record.updated_at = Utc::now();
        let updated = record.clone();

        if let Err(e) = self.persist(&data) {
            data.insert(id, previous);
            return Err(e);
        }

        Ok(Some(updated))
    }

    fn get_by_id(
        &self,
        id: ResumeId,
        owner_id: OwnerId,
    ) -> Result<Option<ResumeRecord>, VaultError> {
        let data = self
            .data
            .read()
            .map_err(|e| VaultError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).filter(|r| r.owner_id == owner_id).cloned())
    }

    fn list_by_owner(&self, owner_id: OwnerId) -> Result<Vec<ResumeRecord>, VaultError> {
        let data = self
            .data
            .read()
            .map_err(|e| VaultError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut records: Vec<_> = data
            .values()
            .filter(|r| r.owner_id == owner_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(records)
    }

    fn delete(&self, id: ResumeId, owner_id: OwnerId) -> Result<bool, VaultError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| VaultError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if !data.get(&id).is_some_and(|r| r.owner_id == owner_id) {
            return Ok(false);
        }

        let removed = data.remove(&id);
        if let Err(e) = self.persist(&data) {
            if let Some(record) = removed {
                data.insert(id, record);
            }
            return Err(e);
        }

        Ok(true)
    }
}
