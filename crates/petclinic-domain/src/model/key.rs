//! Key-management identifiers

/// Name of a key held by a key-management service
///
/// The key material itself never leaves the service; callers only ever
/// hold this identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyId(String);

impl KeyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for KeyId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Asymmetric encryption algorithms understood by the crypto port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncryptionAlgorithm {
    /// RSA with OAEP padding, SHA-1 digest and MGF1
    RsaOaep,
    /// RSA with OAEP padding, SHA-256 digest and MGF1
    RsaOaep256,
}

impl EncryptionAlgorithm {
    /// Wire name as used by key-management services
    pub fn as_str(&self) -> &'static str {
        match self {
            EncryptionAlgorithm::RsaOaep => "RSA-OAEP",
            EncryptionAlgorithm::RsaOaep256 => "RSA-OAEP-256",
        }
    }
}

impl core::fmt::Display for EncryptionAlgorithm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_names() {
        assert_eq!(EncryptionAlgorithm::RsaOaep.to_string(), "RSA-OAEP");
        assert_eq!(EncryptionAlgorithm::RsaOaep256.as_str(), "RSA-OAEP-256");
    }
}
