//! RSA-OAEP decryption with a locally held private key
//!
//! Stands in for a remote key vault: the key is loaded once at wiring time
//! and only ever used through [`CryptographyClient::decrypt`].
//!
//! OAEP encrypts a single RSA block, so a blob can hold at most
//! `key_bytes - 2 * digest_bytes - 2` bytes of plaintext (214 bytes for a
//! 2048-bit key with `RSA-OAEP`).

use std::path::{Path, PathBuf};

use petclinic_domain::{CryptoError, CryptographyClient, EncryptionAlgorithm, KeyId};
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey};
use thiserror::Error;
use tracing::debug;

/// Errors loading a key or encrypting with it
#[derive(Debug, Error)]
pub enum RsaKeyError {
    #[error("Failed to read key file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Key is neither a PKCS#8 nor a PKCS#1 PEM private key")]
    Pem,

    #[error("Encryption failed: {0}")]
    Encrypt(#[from] rsa::Error),
}

fn padding(algorithm: EncryptionAlgorithm) -> Oaep {
    match algorithm {
        EncryptionAlgorithm::RsaOaep => Oaep::new::<sha1::Sha1>(),
        EncryptionAlgorithm::RsaOaep256 => Oaep::new::<sha2::Sha256>(),
    }
}

/// Cryptography client bound to one RSA key
pub struct RsaCryptographyClient {
    key_id: KeyId,
    private_key: RsaPrivateKey,
}

impl RsaCryptographyClient {
    pub fn new(key_id: KeyId, private_key: RsaPrivateKey) -> Self {
        Self {
            key_id,
            private_key,
        }
    }

    /// Parse a PEM private key, PKCS#8 (`BEGIN PRIVATE KEY`) or PKCS#1
    /// (`BEGIN RSA PRIVATE KEY`)
    pub fn from_pem(key_id: KeyId, pem: &str) -> Result<Self, RsaKeyError> {
        let private_key = RsaPrivateKey::from_pkcs8_pem(pem)
            .or_else(|_| RsaPrivateKey::from_pkcs1_pem(pem))
            .map_err(|_| RsaKeyError::Pem)?;
        Ok(Self::new(key_id, private_key))
    }

    pub fn from_pem_file(key_id: KeyId, path: &Path) -> Result<Self, RsaKeyError> {
        let pem = std::fs::read_to_string(path).map_err(|source| RsaKeyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(key_id = %key_id, path = %path.display(), "Loaded RSA key");
        Self::from_pem(key_id, &pem)
    }

    pub fn public_key(&self) -> RsaPublicKey {
        self.private_key.to_public_key()
    }

    /// Encrypt with the public half of the key
    ///
    /// Used to produce encrypted init blobs; the loader itself only decrypts.
    pub fn encrypt(
        &self,
        algorithm: EncryptionAlgorithm,
        plaintext: &[u8],
    ) -> Result<Vec<u8>, RsaKeyError> {
        let mut rng = rand::thread_rng();
        let ciphertext = self
            .public_key()
            .encrypt(&mut rng, padding(algorithm), plaintext)?;
        Ok(ciphertext)
    }
}

impl core::fmt::Debug for RsaCryptographyClient {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RsaCryptographyClient")
            .field("key_id", &self.key_id)
            .finish_non_exhaustive()
    }
}

impl CryptographyClient for RsaCryptographyClient {
    fn key_id(&self) -> &KeyId {
        &self.key_id
    }

    fn decrypt(
        &self,
        algorithm: EncryptionAlgorithm,
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        self.private_key
            .decrypt(padding(algorithm), ciphertext)
            .map_err(|e| CryptoError::DecryptionFailed {
                key_id: self.key_id.to_string(),
                message: e.to_string(),
            })
    }
}
