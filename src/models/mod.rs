//! Core data models for resume-vault
//!
//! Resume records as stored, resume views as returned to callers, and the
//! content document carried inside both.

pub mod content;
pub mod ids;
pub mod resume;

pub use content::ResumeContent;
pub use ids::{OwnerId, ResumeId};
pub use resume::{validate_title, Resume, ResumeRecord, ResumeStatus, ResumeValidationError};
