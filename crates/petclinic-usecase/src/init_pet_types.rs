//! InitPetTypes - Seed pet types from object storage on startup
//!
//! Runs once, before the application reports ready:
//!
//! ```text
//! blob client? ──no──► skip
//!      │
//!   exists? ──no──► MissingBlob (or skip, when opted in)
//!      │
//!   download ──► [decrypt] ──► UTF-8 ──► lines ──► PetType*
//!                                                    │
//!                                      empty? ──yes──► done, blob kept
//!                                                    │
//!                                    save_all_and_flush ──► delete blob
//! ```
//!
//! Persisting and deleting are not atomic. If the delete fails after the
//! save succeeded, the blob stays and the same rows are inserted again on
//! the next start. The repository does not deduplicate.

use petclinic_domain::{
    BlobClient, BlobName, ContainerName, CryptographyClient, EncryptionAlgorithm, KeyId,
    PetTypeId, PetTypeRepository,
};
use tracing::{info, warn};

use crate::error::InitError;
use crate::pet_type_lines::parse_pet_types;

/// Blob read when no name is configured
pub const DEFAULT_BLOB_NAME: &str = "petclinic-pettypes.txt";

/// Container holding the init blob
pub const DEFAULT_CONTAINER: &str = "spring-petclinic-init";

/// Key that encrypted init blobs are decrypted with
pub const DEFAULT_KEY_ID: &str = "spring-petclinic-init";

/// Algorithm used for encrypted init blobs
pub const INIT_ALGORITHM: EncryptionAlgorithm = EncryptionAlgorithm::RsaOaep;

/// Wiring and behavior of the loader
///
/// `container`, `blob_name` and `key_id` are what the bootstrap binds the
/// blob and cryptography clients to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitPetTypesConfig {
    pub container: ContainerName,
    pub blob_name: BlobName,
    pub key_id: KeyId,
    /// Decrypt the blob with the key vault key before parsing
    pub keyvault_encrypted: bool,
    /// Skip instead of failing when the blob is absent
    pub skip_if_missing: bool,
}

impl Default for InitPetTypesConfig {
    fn default() -> Self {
        Self {
            container: ContainerName::new(DEFAULT_CONTAINER),
            blob_name: BlobName::new(DEFAULT_BLOB_NAME),
            key_id: KeyId::new(DEFAULT_KEY_ID),
            keyvault_encrypted: false,
            skip_if_missing: false,
        }
    }
}

/// Why nothing was loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Storage integration is disabled
    NoBlobClient,
    /// The blob is not there and `skip_if_missing` is set
    BlobMissing,
}

/// What a successful run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No storage reads beyond the existence check happened
    Skipped { reason: SkipReason },
    /// The blob held no records; nothing was saved and the blob was kept
    Empty,
    /// Records were saved and the blob was deleted
    Loaded { ids: Vec<PetTypeId> },
}

impl LoadOutcome {
    /// Number of pet types persisted by this run
    pub fn loaded_count(&self) -> usize {
        match self {
            LoadOutcome::Loaded { ids } => ids.len(),
            _ => 0,
        }
    }
}

/// Startup hook loading pet types from a blob
///
/// Generic over its three collaborators; any combination of adapters (or
/// test fakes) can be plugged in.
pub struct InitPetTypes<B, C, R> {
    config: InitPetTypesConfig,
    blob_client: Option<B>,
    crypto_client: Option<C>,
    repository: R,
}

impl<B, C, R> InitPetTypes<B, C, R>
where
    B: BlobClient,
    C: CryptographyClient,
    R: PetTypeRepository,
{
    /// Create a new loader
    ///
    /// `blob_client` is `None` when storage integration is disabled.
    /// `crypto_client` is only consulted when the blob is encrypted.
    pub fn new(
        config: InitPetTypesConfig,
        blob_client: Option<B>,
        crypto_client: Option<C>,
        repository: R,
    ) -> Self {
        Self {
            config,
            blob_client,
            crypto_client,
            repository,
        }
    }

    /// Run the hook
    ///
    /// Consumes the loader; it is meant to run exactly once per process.
    pub fn run(self) -> Result<LoadOutcome, InitError> {
        let Self {
            config,
            blob_client,
            crypto_client,
            mut repository,
        } = self;

        let Some(blob_client) = blob_client else {
            info!("No BlobClient configured, skipping loading pet types");
            return Ok(LoadOutcome::Skipped {
                reason: SkipReason::NoBlobClient,
            });
        };

        let container = blob_client.container().clone();
        let blob = blob_client.blob_name().clone();

        let exists = blob_client.exists().map_err(|source| InitError::Exists {
            blob: blob.clone(),
            source,
        })?;
        if !exists {
            if !config.skip_if_missing {
                return Err(InitError::MissingBlob { container, blob });
            }
            info!(
                container = %container,
                blob = %blob,
                "Pet types blob not present, skipping loading pet types"
            );
            return Ok(LoadOutcome::Skipped {
                reason: SkipReason::BlobMissing,
            });
        }

        info!("Loading pet types from \"{}\" container at {}", container, blob);
        let mut contents = blob_client
            .download_content()
            .map_err(|source| InitError::Download {
                blob: blob.clone(),
                source,
            })?;

        if config.keyvault_encrypted {
            let crypto_client = crypto_client
                .as_ref()
                .ok_or_else(|| InitError::NoCryptographyClient { blob: blob.clone() })?;

            info!(
                key_id = %crypto_client.key_id(),
                algorithm = %INIT_ALGORITHM,
                "Decrypting pet types using key vault key"
            );
            contents = crypto_client
                .decrypt(INIT_ALGORITHM, &contents)
                .map_err(|source| InitError::Decrypt {
                    blob: blob.clone(),
                    source,
                })?;
        }

        let text = String::from_utf8(contents).map_err(|source| InitError::Decode {
            blob: blob.clone(),
            source,
        })?;

        let pet_types = parse_pet_types(&text);
        let count = pet_types.len();
        info!("Found {} pet types", count);

        if pet_types.is_empty() {
            return Ok(LoadOutcome::Empty);
        }

        let ids = repository
            .save_all_and_flush(pet_types)
            .map_err(|source| InitError::Persist {
                blob: blob.clone(),
                count,
                source,
            })?;

        info!("Deleting pet types blob from container");
        if let Err(source) = blob_client.delete() {
            warn!(
                blob = %blob,
                count,
                "Pet types were persisted but the blob was not deleted; the next start will load them again"
            );
            return Err(InitError::Delete { blob, count, source });
        }

        Ok(LoadOutcome::Loaded { ids })
    }
}
