//! Custom error types for resume-vault
//!
//! This module defines the error hierarchy for the library using thiserror.
//! Write-path cryptographic failures are always surfaced as errors; read-path
//! per-field failures never reach this type (see `pii::FieldIssue`).

use thiserror::Error;

/// The main error type for resume-vault operations
#[derive(Error, Debug)]
pub enum VaultError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for caller input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found (or not owned by the caller)
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// No usable key at startup. The process must not serve requests.
    #[error("Key error: {0}")]
    FatalKey(String),

    /// A stored or incoming content blob could not be decoded
    #[error("Malformed resume content: {0}")]
    MalformedContent(String),

    /// A sealed token could not be opened
    #[error("Decryption error: {0}")]
    Decryption(String),

    /// A value could not be sealed; the write must be rejected
    #[error("Encryption error: {0}")]
    Encryption(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl VaultError {
    /// Create a "not found" error for resumes
    pub fn resume_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Resume",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error should stop the process from starting
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::FatalKey(_))
    }
}

impl From<std::io::Error> for VaultError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for VaultError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for resume-vault operations
pub type VaultResult<T> = Result<T, VaultError>;
