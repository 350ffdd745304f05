//! Business logic services for resume-vault
//!
//! Services sit between the CLI and storage. They validate input, seal
//! content on the way in and open it on the way out.

pub mod resume;

pub use resume::{NewResume, ResumeService, ResumeUpdate};
