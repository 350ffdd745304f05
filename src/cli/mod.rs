//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod init;
pub mod key;
pub mod resume;

pub use audit::handle_audit_command;
pub use init::{handle_config_command, handle_init_command};
pub use key::{handle_key_command, KeyCommands};
pub use resume::{handle_resume_command, ResumeCommands};
