//! # PetClinic Init Adapter Layer
//!
//! External system integrations (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `storage/` - Blob storage (local directory, in-memory)
//! - `crypto/` - Key vault decryption (RSA-OAEP with a local key)
//! - `repository/` - Persistence implementations

pub mod crypto;
pub mod repository;
pub mod storage;
