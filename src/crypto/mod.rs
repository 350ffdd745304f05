//! Cryptographic functions for resume-vault
//!
//! Provides AES-256-GCM sealing of individual field values, with the key
//! supplied directly or derived from a passphrase with Argon2id.

pub mod cipher;
pub mod key_derivation;
pub mod secure_memory;

pub use cipher::{is_sealed_token, Cipher, TOKEN_PREFIX};
pub use key_derivation::{derive_key, KeyDerivationParams, SecretKey, KEY_LEN};
pub use secure_memory::SecureString;
