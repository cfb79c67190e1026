//! In-Memory Blob Storage
//!
//! Useful for testing and development.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use petclinic_domain::{BlobClient, BlobName, ContainerName, StorageError};

use super::{validate_blob_name, validate_container_name};

type Blobs = Arc<RwLock<HashMap<(String, String), Vec<u8>>>>;

fn lock_error() -> StorageError {
    StorageError::Transport {
        message: "Failed to acquire blob store lock".to_string(),
    }
}

/// In-memory blob service
///
/// Clones share the same blobs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBlobServiceClient {
    blobs: Blobs,
}

impl InMemoryBlobServiceClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Client bound to one blob. The blob does not need to exist yet.
    pub fn blob_client(
        &self,
        container: &ContainerName,
        blob: &BlobName,
    ) -> Result<InMemoryBlobClient, StorageError> {
        validate_container_name(container.as_str())?;
        validate_blob_name(blob.as_str())?;

        Ok(InMemoryBlobClient {
            container: container.clone(),
            name: blob.clone(),
            blobs: self.blobs.clone(),
        })
    }

    /// Number of blobs across all containers
    pub fn len(&self) -> Result<usize, StorageError> {
        Ok(self.blobs.read().map_err(|_| lock_error())?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.len()? == 0)
    }
}

/// Client for one in-memory blob
#[derive(Debug, Clone)]
pub struct InMemoryBlobClient {
    container: ContainerName,
    name: BlobName,
    blobs: Blobs,
}

impl InMemoryBlobClient {
    fn key(&self) -> (String, String) {
        (self.container.to_string(), self.name.to_string())
    }

    fn not_found(&self) -> StorageError {
        StorageError::NotFound {
            container: self.container.to_string(),
            blob: self.name.to_string(),
        }
    }

    /// Write the blob, replacing any previous content
    pub fn upload(&self, content: &[u8]) -> Result<(), StorageError> {
        let mut blobs = self.blobs.write().map_err(|_| lock_error())?;
        blobs.insert(self.key(), content.to_vec());
        Ok(())
    }
}

impl BlobClient for InMemoryBlobClient {
    fn container(&self) -> &ContainerName {
        &self.container
    }

    fn blob_name(&self) -> &BlobName {
        &self.name
    }

    fn download_content(&self) -> Result<Vec<u8>, StorageError> {
        let blobs = self.blobs.read().map_err(|_| lock_error())?;
        blobs.get(&self.key()).cloned().ok_or_else(|| self.not_found())
    }

    fn delete(&self) -> Result<(), StorageError> {
        let mut blobs = self.blobs.write().map_err(|_| lock_error())?;
        blobs
            .remove(&self.key())
            .map(|_| ())
            .ok_or_else(|| self.not_found())
    }

    fn exists(&self) -> Result<bool, StorageError> {
        let blobs = self.blobs.read().map_err(|_| lock_error())?;
        Ok(blobs.contains_key(&self.key()))
    }
}
