//! # PetClinic Init Domain Layer
//!
//! Pet type reference data and the ports the startup loader talks through.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/      - PetType, blob and key identifiers            ││
//! │  │  gateway/    - BlobClient, CryptographyClient (ports)       ││
//! │  │  repository/ - PetTypeRepository (port)                     ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Golden Rule
//!
//! **This crate has ZERO external dependencies.**
//!
//! Swapping a local blob directory for a cloud container, or a JSON file
//! for a relational table, happens in the adapter layer only.

pub mod gateway;
pub mod model;
pub mod repository;

// Re-export commonly used types
pub use model::{
    blob::{BlobName, ContainerName},
    key::{EncryptionAlgorithm, KeyId},
    pet_type::{PetType, PetTypeId},
};

pub use gateway::{
    blob_client::{BlobClient, StorageError},
    cryptography_client::{CryptoError, CryptographyClient},
};

pub use repository::pet_type_repository::{PetTypeRepository, RepositoryError};
