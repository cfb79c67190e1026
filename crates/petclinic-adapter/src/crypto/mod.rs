//! Key Vault Adapters - CryptographyClient implementations

pub mod rsa_oaep;
