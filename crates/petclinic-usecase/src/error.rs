//! Error types for the pet type startup loader

use std::string::FromUtf8Error;

use petclinic_domain::{BlobName, ContainerName, CryptoError, RepositoryError, StorageError};
use thiserror::Error;

/// Anything that stops the loader short of a clean outcome
///
/// All variants are fatal to startup; none is retried.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("Failed to check whether blob '{blob}' exists")]
    Exists {
        blob: BlobName,
        #[source]
        source: StorageError,
    },

    #[error("Blob '{blob}' not found in container '{container}'")]
    MissingBlob {
        container: ContainerName,
        blob: BlobName,
    },

    #[error("Failed to download blob '{blob}'")]
    Download {
        blob: BlobName,
        #[source]
        source: StorageError,
    },

    #[error("Blob '{blob}' is marked as encrypted but no cryptography client is configured")]
    NoCryptographyClient { blob: BlobName },

    #[error("Failed to decrypt blob '{blob}'")]
    Decrypt {
        blob: BlobName,
        #[source]
        source: CryptoError,
    },

    #[error("Blob '{blob}' is not valid UTF-8")]
    Decode {
        blob: BlobName,
        #[source]
        source: FromUtf8Error,
    },

    #[error("Failed to persist {count} pet types from blob '{blob}'")]
    Persist {
        blob: BlobName,
        count: usize,
        #[source]
        source: RepositoryError,
    },

    #[error("Persisted {count} pet types but failed to delete blob '{blob}'")]
    Delete {
        blob: BlobName,
        count: usize,
        #[source]
        source: StorageError,
    },
}
