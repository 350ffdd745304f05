//! Secret key material and Argon2id key derivation
//!
//! The vault key is either supplied directly (32 raw bytes, base64 encoded)
//! or derived from a passphrase with Argon2id using parameters stored in the
//! settings file.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2, Params,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{VaultError, VaultResult};

/// Length of an AES-256 key in bytes
pub const KEY_LEN: usize = 32;

/// Parameters for key derivation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDerivationParams {
    /// Salt for key derivation (base64 encoded)
    pub salt: String,
    /// Memory cost in KiB (default: 65536 = 64 MiB)
    pub memory_cost: u32,
    /// Time cost (iterations, default: 3)
    pub time_cost: u32,
    /// Parallelism degree (default: 4)
    pub parallelism: u32,
}

impl Default for KeyDerivationParams {
    fn default() -> Self {
        Self {
            salt: String::new(),
            memory_cost: 65536,
            time_cost: 3,
            parallelism: 4,
        }
    }
}

impl KeyDerivationParams {
    /// Create new params with a random salt
    pub fn new() -> Self {
        let salt = SaltString::generate(&mut OsRng);
        Self {
            salt: salt.to_string(),
            ..Default::default()
        }
    }

    /// Create params with specific values
    pub fn with_values(salt: String, memory_cost: u32, time_cost: u32, parallelism: u32) -> Self {
        Self {
            salt,
            memory_cost,
            time_cost,
            parallelism,
        }
    }
}

/// The process-wide symmetric key, zeroed when dropped
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    key: [u8; KEY_LEN],
}

impl SecretKey {
    /// Wrap raw key bytes
    pub fn from_bytes(key: [u8; KEY_LEN]) -> Self {
        Self { key }
    }

    /// Generate a fresh random key
    pub fn generate() -> Self {
        use argon2::password_hash::rand_core::RngCore;

        let mut key = [0u8; KEY_LEN];
        OsRng.fill_bytes(&mut key);
        Self { key }
    }

    /// Parse a base64-encoded 32-byte key
    pub fn from_base64(encoded: &str) -> VaultResult<Self> {
        let mut bytes = STANDARD
            .decode(encoded.trim())
            .map_err(|e| VaultError::FatalKey(format!("Key is not valid base64: {}", e)))?;

        if bytes.len() != KEY_LEN {
            let len = bytes.len();
            bytes.zeroize();
            return Err(VaultError::FatalKey(format!(
                "Key must be {} bytes, got {}",
                KEY_LEN, len
            )));
        }

        let mut key = [0u8; KEY_LEN];
        key.copy_from_slice(&bytes);
        bytes.zeroize();
        Ok(Self { key })
    }

    /// Encode the key as base64 (for `key generate`)
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.key)
    }

    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.key
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretKey([REDACTED])")
    }
}

/// Derive a key from a passphrase
pub fn derive_key(passphrase: &str, params: &KeyDerivationParams) -> VaultResult<SecretKey> {
    let salt = SaltString::from_b64(&params.salt)
        .map_err(|e| VaultError::FatalKey(format!("Invalid salt: {}", e)))?;

    let argon2_params = Params::new(
        params.memory_cost,
        params.time_cost,
        params.parallelism,
        Some(KEY_LEN),
    )
    .map_err(|e| VaultError::FatalKey(format!("Invalid Argon2 parameters: {}", e)))?;

    let argon2 = Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        argon2_params,
    );

    let hash = argon2
        .hash_password(passphrase.as_bytes(), &salt)
        .map_err(|e| VaultError::FatalKey(format!("Key derivation failed: {}", e)))?;

    let hash_output = hash
        .hash
        .ok_or_else(|| VaultError::FatalKey("No hash output generated".to_string()))?;

    let hash_bytes = hash_output.as_bytes();
    if hash_bytes.len() < KEY_LEN {
        return Err(VaultError::FatalKey(
            "Hash output too short for AES-256 key".to_string(),
        ));
    }

    let mut key = [0u8; KEY_LEN];
    key.copy_from_slice(&hash_bytes[..KEY_LEN]);

    Ok(SecretKey { key })
}
