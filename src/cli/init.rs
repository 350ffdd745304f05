//! Setup CLI commands
//!
//! `init` writes the settings file and binds the vault to one key by storing
//! a verification token sealed with it. `config` shows where everything lives.

use crate::config::secret::{verification_token, KEY_ENV, PASSPHRASE_ENV};
use crate::config::{Settings, VaultPaths};
use crate::crypto::{derive_key, KeyDerivationParams, SecretKey, SecureString};
use crate::error::{VaultError, VaultResult};

/// Minimum passphrase length accepted at init
const MIN_PASSPHRASE_LEN: usize = 8;

/// Initialize the vault directory and bind it to a key
pub fn handle_init_command(
    paths: &VaultPaths,
    settings: &mut Settings,
    use_passphrase: bool,
) -> VaultResult<()> {
    if settings.key.verification_token.is_some() {
        return Err(VaultError::Config(format!(
            "Vault already initialized at {}",
            paths.base_dir().display()
        )));
    }

    paths.ensure_directories()?;
    println!("Initializing resume-vault at: {}", paths.base_dir().display());

    let key = if use_passphrase {
        let passphrase = match std::env::var(PASSPHRASE_ENV) {
            Ok(value) if !value.is_empty() => SecureString::from(value),
            _ => prompt_new_passphrase()?,
        };

        let params = KeyDerivationParams::new();
        println!("Deriving key...");
        let key = derive_key(&passphrase, &params)?;
        settings.key.key_params = Some(params);
        key
    } else {
        match std::env::var(KEY_ENV) {
            Ok(raw) if !raw.trim().is_empty() => SecretKey::from_base64(&raw)?,
            _ => {
                let key = SecretKey::generate();
                println!();
                println!("Generated a new vault key. Store it somewhere safe and export it:");
                println!();
                println!("  export {}={}", KEY_ENV, key.to_base64());
                println!();
                println!("Without this key the PII in your resumes cannot be recovered.");
                key
            }
        }
    };

    settings.key.verification_token = Some(verification_token(&key)?);
    settings.save(paths)?;
    tracing::info!(passphrase = use_passphrase, "vault initialized");

    println!("Initialization complete!");
    Ok(())
}

/// Show current configuration and paths
pub fn handle_config_command(paths: &VaultPaths, settings: &Settings) -> VaultResult<()> {
    println!("resume-vault Configuration");
    println!("==========================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Resumes file:   {}", paths.resumes_file().display());
    println!("Audit log:      {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Log filter:   {}", settings.log_filter);
    println!(
        "  Key source:   {}",
        if settings.uses_passphrase() {
            PASSPHRASE_ENV
        } else {
            KEY_ENV
        }
    );
    println!(
        "  Initialized:  {}",
        if settings.key.verification_token.is_some() {
            "Yes"
        } else {
            "No (run 'resume-vault init')"
        }
    );

    Ok(())
}

fn prompt_new_passphrase() -> VaultResult<SecureString> {
    loop {
        let first = prompt_passphrase("Enter new passphrase: ")?;

        if first.len() < MIN_PASSPHRASE_LEN {
            println!(
                "Passphrase must be at least {} characters. Please try again.",
                MIN_PASSPHRASE_LEN
            );
            continue;
        }

        let second = prompt_passphrase("Confirm passphrase: ")?;

        if *first != *second {
            println!("Passphrases do not match. Please try again.");
            continue;
        }

        return Ok(first);
    }
}

/// Prompt for a passphrase (hidden input)
fn prompt_passphrase(prompt: &str) -> VaultResult<SecureString> {
    rpassword::prompt_password(prompt)
        .map(SecureString::from)
        .map_err(|e| VaultError::FatalKey(format!("Failed to read passphrase: {}", e)))
}
