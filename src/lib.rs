//! resume-vault - Resume storage with transparent field-level PII encryption
//!
//! Resumes are stored as JSON documents. The personally identifying fields
//! (`name`, `email`, `phone`) are sealed with AES-256-GCM before a document
//! is written and opened again when it is read, so callers only ever see
//! plaintext and the files on disk only ever hold tokens.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths, settings and vault key sourcing
//! - `error`: Custom error types
//! - `crypto`: Field cipher and key derivation
//! - `models`: Resume records, resume views and content documents
//! - `pii`: PII field selection and the seal/open transform
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `cli` / `display`: Command handlers and terminal formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use resume_vault::config::{load_secret_key, Settings, VaultPaths};
//! use resume_vault::crypto::Cipher;
//! use resume_vault::services::{NewResume, ResumeService};
//! use resume_vault::storage::Storage;
//!
//! let paths = VaultPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let cipher = Cipher::new(&load_secret_key(&settings)?);
//!
//! let storage = Storage::new(paths)?;
//! storage.load_all()?;
//!
//! let service = ResumeService::new(&storage.resumes, &cipher);
//! let resume = service.create(owner, NewResume::draft("Backend CV", content))?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod models;
pub mod pii;
pub mod services;
pub mod storage;

pub use error::{VaultError, VaultResult};
