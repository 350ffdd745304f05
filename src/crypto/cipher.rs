//! AES-256-GCM sealing of individual field values
//!
//! A sealed value is a self-describing text token:
//!
//! ```text
//! pii:v1:<base64(nonce || ciphertext || tag)>
//! ```
//!
//! The prefix lets callers tell sealed and plaintext values apart without
//! guessing from the shape of the content. The version segment is reserved for
//! selecting a historical key once rotation exists.
//!
//! Every token is bound to a context (passed as AEAD associated data). A token
//! only opens under the exact context it was sealed with.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::{
    aead::{Aead, KeyInit, OsRng, Payload},
    Aes256Gcm, Nonce,
};
use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::{VaultError, VaultResult};

use super::SecretKey;

/// Prefix carried by every token produced by [`Cipher::seal`]
pub const TOKEN_PREFIX: &str = "pii:v1:";

/// Prefix shared by all token versions
const TOKEN_FAMILY: &str = "pii:v";

/// Size of the AES-GCM nonce in bytes (96 bits)
const NONCE_SIZE: usize = 12;

/// Check whether a value is structurally a sealed token
///
/// This only inspects the prefix; a token can still fail to open.
pub fn is_sealed_token(value: &str) -> bool {
    value.starts_with(TOKEN_FAMILY)
}

/// Authenticated encryption keyed by the process-wide secret
///
/// Built once at startup and shared by reference; it holds no mutable state.
pub struct Cipher {
    aead: Aes256Gcm,
}

impl Cipher {
    /// Create a cipher from the vault key
    pub fn new(key: &SecretKey) -> Self {
        Self {
            aead: Aes256Gcm::new(key.as_bytes().into()),
        }
    }

    /// Seal a plaintext value into a token bound to `context`
    ///
    /// Generates a random nonce for each call, so sealing the same value twice
    /// yields different tokens.
    pub fn seal(&self, plaintext: &str, context: &[u8]) -> VaultResult<String> {
        let mut nonce_bytes = [0u8; NONCE_SIZE];
        OsRng.fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let message = Payload {
            msg: plaintext.as_bytes(),
            aad: context,
        };
        let ciphertext = self
            .aead
            .encrypt(nonce, message)
            .map_err(|e| VaultError::Encryption(format!("Encryption failed: {}", e)))?;

        let mut payload = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
        payload.extend_from_slice(&nonce_bytes);
        payload.extend_from_slice(&ciphertext);

        Ok(format!("{}{}", TOKEN_PREFIX, STANDARD.encode(payload)))
    }

    /// Open a token produced by [`Cipher::seal`] under the same `context`
    ///
    /// Fails on a missing or unknown prefix, bad encoding, a wrong key, a
    /// different context or any tampering with the payload.
    pub fn open(&self, token: &str, context: &[u8]) -> VaultResult<String> {
        let encoded = token.strip_prefix(TOKEN_PREFIX).ok_or_else(|| {
            if is_sealed_token(token) {
                VaultError::Decryption("Unsupported token version".to_string())
            } else {
                VaultError::Decryption("Value is not a sealed token".to_string())
            }
        })?;

        let payload = STANDARD
            .decode(encoded)
            .map_err(|e| VaultError::Decryption(format!("Invalid token encoding: {}", e)))?;

        if payload.len() < NONCE_SIZE {
            return Err(VaultError::Decryption(format!(
                "Token payload too short: {} bytes",
                payload.len()
            )));
        }

        let (nonce_bytes, ciphertext) = payload.split_at(NONCE_SIZE);
        let message = Payload {
            msg: ciphertext,
            aad: context,
        };
        let plaintext = self
            .aead
            .decrypt(Nonce::from_slice(nonce_bytes), message)
            .map_err(|_| {
                VaultError::Decryption(
                    "Decryption failed: invalid key or corrupted data".to_string(),
                )
            })?;

        String::from_utf8(plaintext)
            .map_err(|e| VaultError::Decryption(format!("Invalid UTF-8 in decrypted data: {}", e)))
    }
}
