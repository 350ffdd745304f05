//! Configuration module for resume-vault
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - Settings persistence
//! - Vault key sourcing and verification

pub mod paths;
pub mod secret;
pub mod settings;

pub use paths::VaultPaths;
pub use secret::load_secret_key;
pub use settings::Settings;
