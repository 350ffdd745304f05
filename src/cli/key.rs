//! Key CLI commands

use clap::Subcommand;

use crate::crypto::SecretKey;
use crate::error::VaultResult;

/// Key management subcommands
#[derive(Subcommand)]
pub enum KeyCommands {
    /// Print a fresh random key, base64 encoded
    Generate,
}

/// Handle a key command
pub fn handle_key_command(cmd: KeyCommands) -> VaultResult<()> {
    match cmd {
        KeyCommands::Generate => {
            println!("{}", SecretKey::generate().to_base64());
        }
    }

    Ok(())
}
