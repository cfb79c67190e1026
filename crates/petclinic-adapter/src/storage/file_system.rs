//! Local directory blob storage
//!
//! ```text
//! <root>/
//!   spring-petclinic-init/        ← container
//!     petclinic-pettypes.txt      ← blob
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use petclinic_domain::{BlobClient, BlobName, ContainerName, StorageError};
use tracing::debug;

use super::{validate_blob_name, validate_container_name};

fn storage_error(err: io::Error, container: &ContainerName, blob: &BlobName) -> StorageError {
    match err.kind() {
        io::ErrorKind::NotFound => StorageError::NotFound {
            container: container.to_string(),
            blob: blob.to_string(),
        },
        io::ErrorKind::PermissionDenied => StorageError::AccessDenied {
            message: err.to_string(),
        },
        _ => StorageError::Transport {
            message: err.to_string(),
        },
    }
}

/// Blob service rooted at a local directory
#[derive(Debug, Clone)]
pub struct FsBlobServiceClient {
    root: PathBuf,
}

impl FsBlobServiceClient {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Client bound to one blob. The blob does not need to exist yet.
    pub fn blob_client(
        &self,
        container: &ContainerName,
        blob: &BlobName,
    ) -> Result<FsBlobClient, StorageError> {
        validate_container_name(container.as_str())?;
        validate_blob_name(blob.as_str())?;

        let path = blob
            .as_str()
            .split('/')
            .fold(self.root.join(container.as_str()), |path, segment| {
                path.join(segment)
            });

        Ok(FsBlobClient {
            container: container.clone(),
            name: blob.clone(),
            path,
        })
    }
}

/// A blob stored as a single file
#[derive(Debug, Clone)]
pub struct FsBlobClient {
    container: ContainerName,
    name: BlobName,
    path: PathBuf,
}

impl FsBlobClient {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the blob, replacing any previous content
    pub fn upload(&self, content: &[u8]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| storage_error(e, &self.container, &self.name))?;
        }
        fs::write(&self.path, content).map_err(|e| storage_error(e, &self.container, &self.name))?;
        debug!(path = %self.path.display(), bytes = content.len(), "Uploaded blob");
        Ok(())
    }
}

impl BlobClient for FsBlobClient {
    fn container(&self) -> &ContainerName {
        &self.container
    }

    fn blob_name(&self) -> &BlobName {
        &self.name
    }

    fn download_content(&self) -> Result<Vec<u8>, StorageError> {
        let content =
            fs::read(&self.path).map_err(|e| storage_error(e, &self.container, &self.name))?;
        debug!(path = %self.path.display(), bytes = content.len(), "Downloaded blob");
        Ok(content)
    }

    fn delete(&self) -> Result<(), StorageError> {
        fs::remove_file(&self.path).map_err(|e| storage_error(e, &self.container, &self.name))?;
        debug!(path = %self.path.display(), "Deleted blob");
        Ok(())
    }

    fn exists(&self) -> Result<bool, StorageError> {
        self.path
            .try_exists()
            .map(|exists| exists && self.path.is_file())
            .map_err(|e| storage_error(e, &self.container, &self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn client(root: &TempDir, blob: &str) -> FsBlobClient {
        FsBlobServiceClient::new(root.path())
            .blob_client(&ContainerName::new("spring-petclinic-init"), &BlobName::new(blob))
            .unwrap()
    }

    #[test]
    fn test_upload_download_delete() {
        let root = TempDir::new().unwrap();
        let blob = client(&root, "petclinic-pettypes.txt");

        assert!(!blob.exists().unwrap());

        blob.upload(b"cat\ndog\n").unwrap();
        assert!(blob.exists().unwrap());
        assert_eq!(
            blob.path(),
            root.path()
                .join("spring-petclinic-init")
                .join("petclinic-pettypes.txt")
        );
        assert_eq!(blob.download_content().unwrap(), b"cat\ndog\n");

        blob.delete().unwrap();
        assert!(!blob.exists().unwrap());
    }

    #[test]
    fn test_missing_blob_is_not_found() {
        let root = TempDir::new().unwrap();
        let blob = client(&root, "nope.txt");

        assert_eq!(
            blob.download_content().unwrap_err(),
            StorageError::NotFound {
                container: "spring-petclinic-init".to_string(),
                blob: "nope.txt".to_string(),
            }
        );
        assert!(matches!(
            blob.delete().unwrap_err(),
            StorageError::NotFound { .. }
        ));
    }

    #[test]
    fn test_nested_blob_name() {
        let root = TempDir::new().unwrap();
        let blob = client(&root, "seed/pettypes.txt");

        blob.upload(b"ferret").unwrap();

        assert!(root
            .path()
            .join("spring-petclinic-init/seed/pettypes.txt")
            .is_file());
    }

    #[test]
    fn test_rejects_escaping_names() {
        let service = FsBlobServiceClient::new("/tmp/blobs");
        let result = service.blob_client(
            &ContainerName::new("spring-petclinic-init"),
            &BlobName::new("../../secrets"),
        );
        assert!(matches!(result, Err(StorageError::InvalidName { .. })));
    }

    #[test]
    fn test_directory_is_not_a_blob() {
        let root = TempDir::new().unwrap();
        let blob = client(&root, "dir");
        std::fs::create_dir_all(blob.path()).unwrap();

        assert!(!blob.exists().unwrap());
    }
}
