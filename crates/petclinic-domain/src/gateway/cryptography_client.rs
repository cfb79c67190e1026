//! Cryptography Client - Decryption through a key-management service
//!
//! The client is bound to a single key. Key material is never handed to
//! the caller.

use crate::model::key::{EncryptionAlgorithm, KeyId};

/// Errors reported by the key-management service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// The ciphertext could not be decrypted with this key
    DecryptionFailed { key_id: String, message: String },
}

impl core::fmt::Display for CryptoError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CryptoError::DecryptionFailed { key_id, message } => {
                write!(f, "Decryption with key '{}' failed: {}", key_id, message)
            }
        }
    }
}

impl std::error::Error for CryptoError {}

/// Cryptography Client Trait
///
/// This is a PORT in hexagonal architecture.
pub trait CryptographyClient {
    /// Key this client is bound to
    fn key_id(&self) -> &KeyId;

    /// Decrypt `ciphertext` with the bound key
    fn decrypt(
        &self,
        algorithm: EncryptionAlgorithm,
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, CryptoError>;
}
