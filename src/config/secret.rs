//! Secret configuration: where the vault key comes from
//!
//! The key is read once at startup. A missing, malformed or wrong key is a
//! `FatalKey` error and the process must not go on to serve requests.
//!
//! ## Key Resolution Order
//!
//! 1. `RESUME_VAULT_KEY`: base64 of exactly 32 bytes
//! 2. `RESUME_VAULT_PASSPHRASE`, combined with the Argon2id parameters in settings

use crate::crypto::{derive_key, Cipher, SecretKey, SecureString};
use crate::error::{VaultError, VaultResult};

use super::settings::Settings;

/// Environment variable holding the base64 key
pub const KEY_ENV: &str = "RESUME_VAULT_KEY";

/// Environment variable holding the passphrase
pub const PASSPHRASE_ENV: &str = "RESUME_VAULT_PASSPHRASE";

const VERIFICATION_PLAINTEXT: &str = "resume_vault_verify";

/// Context the verification token is bound to, distinct from any field context
const VERIFICATION_CONTEXT: &[u8] = b"resume-vault:verification";

/// Load the vault key from the process environment and verify it
pub fn load_secret_key(settings: &Settings) -> VaultResult<SecretKey> {
    let raw_key = std::env::var(KEY_ENV).ok().map(SecureString::from);
    let passphrase = std::env::var(PASSPHRASE_ENV).ok().map(SecureString::from);

    let key = resolve_key(settings, raw_key.as_deref(), passphrase.as_deref())?;
    verify_key(settings, &key)?;
    Ok(key)
}

/// Pick a key from the supplied sources, without touching the environment
pub fn resolve_key(
    settings: &Settings,
    raw_key: Option<&str>,
    passphrase: Option<&str>,
) -> VaultResult<SecretKey> {
    if let Some(raw) = raw_key.filter(|k| !k.trim().is_empty()) {
        tracing::debug!("using vault key from {}", KEY_ENV);
        return SecretKey::from_base64(raw);
    }

    match (passphrase, settings.key.key_params.as_ref()) {
        (Some(passphrase), Some(params)) if !passphrase.is_empty() => {
            tracing::debug!("deriving vault key from passphrase");
            derive_key(passphrase, params)
        }
        (Some(_), None) => Err(VaultError::FatalKey(format!(
            "{} is set but no key derivation parameters exist; \
             run `resume-vault init --passphrase`",
            PASSPHRASE_ENV
        ))),
        _ => Err(VaultError::FatalKey(format!(
            "No vault key configured; set {} or {}",
            KEY_ENV, PASSPHRASE_ENV
        ))),
    }
}

/// Seal the verification value with a freshly configured key
pub fn verification_token(key: &SecretKey) -> VaultResult<String> {
    Cipher::new(key).seal(VERIFICATION_PLAINTEXT, VERIFICATION_CONTEXT)
}

/// Reject a key that does not open the stored verification token
pub fn verify_key(settings: &Settings, key: &SecretKey) -> VaultResult<()> {
    let Some(token) = settings.key.verification_token.as_deref() else {
        return Ok(());
    };

    match Cipher::new(key).open(token, VERIFICATION_CONTEXT) {
        Ok(value) if value == VERIFICATION_PLAINTEXT => Ok(()),
        _ => Err(VaultError::FatalKey(
            "Configured key does not match the key this vault was initialized with".into(),
        )),
    }
}
