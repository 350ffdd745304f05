//! Display formatting for terminal output
//!
//! Provides utilities for formatting resumes for terminal display.

pub mod resume;

pub use resume::{format_resume_details, format_resume_list, format_warnings};
