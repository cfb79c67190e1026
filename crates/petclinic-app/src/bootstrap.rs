//! Startup sequence - wires adapters into the loader and runs it once

use std::path::Path;

use anyhow::{Context, Result};
use petclinic_adapter::crypto::rsa_oaep::RsaCryptographyClient;
use petclinic_adapter::repository::in_memory::InMemoryPetTypeRepository;
use petclinic_adapter::repository::json_file::JsonFilePetTypeRepository;
use petclinic_adapter::storage::file_system::{FsBlobClient, FsBlobServiceClient};
use petclinic_domain::{BlobClient, PetTypeRepository};
use petclinic_usecase::{InitPetTypes, InitPetTypesConfig, LoadOutcome, INIT_ALGORITHM};
use tracing::info;

use crate::config::AppConfig;

/// Blob client for the configured blob, or `None` when storage is disabled
fn blob_client(config: &AppConfig, init: &InitPetTypesConfig) -> Result<Option<FsBlobClient>> {
    let Some(root) = &config.storage.root else {
        return Ok(None);
    };
    let client = FsBlobServiceClient::new(root)
        .blob_client(&init.container, &init.blob_name)
        .context("Invalid pet types blob location")?;
    Ok(Some(client))
}

fn crypto_client(config: &AppConfig, init: &InitPetTypesConfig) -> Result<RsaCryptographyClient> {
    let path = config
        .keyvault
        .private_key
        .as_deref()
        .context("keyvault.private-key must be set to use an encrypted pet types blob")?;
    RsaCryptographyClient::from_pem_file(init.key_id.clone(), path)
        .with_context(|| format!("Failed to load key '{}'", init.key_id))
}

fn load_into<R: PetTypeRepository>(
    init: InitPetTypesConfig,
    blob_client: Option<FsBlobClient>,
    crypto_client: Option<RsaCryptographyClient>,
    repository: R,
) -> Result<LoadOutcome> {
    InitPetTypes::new(init, blob_client, crypto_client, repository)
        .run()
        .context("Pet types initialization failed")
}

/// Run every startup hook. Any error aborts startup.
pub fn run_startup(config: &AppConfig) -> Result<LoadOutcome> {
    let init = config.init_config();

    let blob_client = blob_client(config, &init)?;
    let crypto_client = if init.keyvault_encrypted && blob_client.is_some() {
        Some(crypto_client(config, &init)?)
    } else {
        None
    };

    let outcome = match &config.database.path {
        Some(path) => load_into(
            init,
            blob_client,
            crypto_client,
            JsonFilePetTypeRepository::new(path),
        )?,
        None => load_into(
            init,
            blob_client,
            crypto_client,
            InMemoryPetTypeRepository::new(),
        )?,
    };

    info!(outcome = ?outcome, "Startup complete");
    Ok(outcome)
}

/// Upload `input` as the configured pet types blob, encrypting it first if
/// the configuration says the blob is encrypted
pub fn seed(config: &AppConfig, input: &Path) -> Result<()> {
    let init = config.init_config();
    let blob_client = blob_client(config, &init)?
        .context("storage.root must be set to seed the pet types blob")?;

    let plaintext = std::fs::read(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let content = if init.keyvault_encrypted {
        crypto_client(config, &init)?
            .encrypt(INIT_ALGORITHM, &plaintext)
            .context("Failed to encrypt pet types")?
    } else {
        plaintext
    };

    blob_client
        .upload(&content)
        .context("Failed to upload pet types blob")?;
    info!(
        container = %blob_client.container(),
        blob = %blob_client.blob_name(),
        bytes = content.len(),
        encrypted = init.keyvault_encrypted,
        "Seeded pet types blob"
    );
    Ok(())
}
