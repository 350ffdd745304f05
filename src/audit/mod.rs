//! Audit logging for resume-vault
//!
//! Records every create, update and delete in an append-only JSONL file.
//! Entries name the resume, its owner and the record fields that changed;
//! resume content never enters the audit log.
//!
//! # Example
//!
//! ```rust,ignore
//! use resume_vault::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(record.id, record.owner_id, &record.title))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
