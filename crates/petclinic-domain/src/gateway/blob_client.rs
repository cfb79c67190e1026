//! Blob Client - Access to one named blob in an object-storage container
//!
//! A client is bound to its container and blob when it is created, so the
//! operations themselves take no addressing arguments.

use crate::model::blob::{BlobName, ContainerName};

/// Errors reported by object storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The blob does not exist
    NotFound { container: String, blob: String },
    /// The caller may not read or modify the blob
    AccessDenied { message: String },
    /// The name cannot address a blob in this store
    InvalidName { name: String, reason: String },
    /// Any other I/O or network failure
    Transport { message: String },
}

impl core::fmt::Display for StorageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StorageError::NotFound { container, blob } => {
                write!(f, "Blob not found: {}/{}", container, blob)
            }
            StorageError::AccessDenied { message } => {
                write!(f, "Access denied: {}", message)
            }
            StorageError::InvalidName { name, reason } => {
                write!(f, "Invalid blob name '{}': {}", name, reason)
            }
            StorageError::Transport { message } => {
                write!(f, "Storage transport error: {}", message)
            }
        }
    }
}

impl std::error::Error for StorageError {}

/// Blob Client Trait
///
/// This is a PORT in hexagonal architecture.
/// Every call blocks until the storage service answers; timeouts are the
/// adapter's business.
pub trait BlobClient {
    /// Container this client is bound to
    fn container(&self) -> &ContainerName;

    /// Blob this client is bound to
    fn blob_name(&self) -> &BlobName;

    /// Download the full content of the blob
    fn download_content(&self) -> Result<Vec<u8>, StorageError>;

    /// Delete the blob
    fn delete(&self) -> Result<(), StorageError>;

    /// Check whether the blob exists
    fn exists(&self) -> Result<bool, StorageError>;
}
