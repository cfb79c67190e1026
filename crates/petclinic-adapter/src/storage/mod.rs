//! Blob Storage Adapters - BlobClient implementations
//!
//! Both adapters hand out clients bound to one container and blob, the
//! way the loader expects them.

pub mod file_system;
pub mod in_memory;

use petclinic_domain::StorageError;

/// Check a blob name before it is turned into a storage key
///
/// Names may use `/` to form virtual directories. Empty segments, `.`,
/// `..` and backslashes are rejected.
pub(crate) fn validate_blob_name(name: &str) -> Result<(), StorageError> {
    let invalid = |reason: &str| StorageError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(invalid("name is empty"));
    }
    if name.contains('\\') || name.contains('\0') {
        return Err(invalid("name contains a forbidden character"));
    }
    for segment in name.split('/') {
        match segment {
            "" => return Err(invalid("name contains an empty segment")),
            "." | ".." => return Err(invalid("name contains a relative segment")),
            _ => {}
        }
    }
    Ok(())
}

/// Container names are a single segment
pub(crate) fn validate_container_name(name: &str) -> Result<(), StorageError> {
    validate_blob_name(name)?;
    if name.contains('/') {
        return Err(StorageError::InvalidName {
            name: name.to_string(),
            reason: "container name contains '/'".to_string(),
        });
    }
    Ok(())
}
