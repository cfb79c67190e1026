//! Startup loading wired with the real adapters

use petclinic_adapter::crypto::rsa_oaep::RsaCryptographyClient;
use petclinic_adapter::repository::in_memory::InMemoryPetTypeRepository;
use petclinic_adapter::repository::json_file::JsonFilePetTypeRepository;
use petclinic_adapter::storage::file_system::{FsBlobClient, FsBlobServiceClient};
use petclinic_adapter::storage::in_memory::InMemoryBlobServiceClient;
use petclinic_domain::{BlobClient, PetTypeRepository};
use petclinic_usecase::{
    InitError, InitPetTypes, InitPetTypesConfig, LoadOutcome, SkipReason, INIT_ALGORITHM,
};
use rsa::RsaPrivateKey;
use tempfile::TempDir;

fn fs_blob(root: &TempDir, config: &InitPetTypesConfig) -> FsBlobClient {
    FsBlobServiceClient::new(root.path())
        .blob_client(&config.container, &config.blob_name)
        .unwrap()
}

#[test]
fn test_loads_plain_blob_from_directory() {
    let root = TempDir::new().unwrap();
    let config = InitPetTypesConfig::default();
    let blob = fs_blob(&root, &config);
    blob.upload(b"cat\r\ndog\r\nlizard\r\n").unwrap();

    let db = TempDir::new().unwrap();
    let repo = JsonFilePetTypeRepository::new(db.path().join("pet-types.json"));

    let loader = InitPetTypes::new(
        config,
        Some(blob.clone()),
        None::<RsaCryptographyClient>,
        repo.clone(),
    );
    let outcome = loader.run().unwrap();

    assert_eq!(outcome.loaded_count(), 3);
    let names: Vec<_> = repo
        .find_all()
        .unwrap()
        .into_iter()
        .map(|(_, p)| p.into_name())
        .collect();
    assert_eq!(names, vec!["cat", "dog", "lizard"]);
    assert!(!blob.exists().unwrap());
}

#[test]
fn test_loads_encrypted_blob() {
    let config = InitPetTypesConfig {
        keyvault_encrypted: true,
        ..InitPetTypesConfig::default()
    };
    let key = RsaPrivateKey::new(&mut rand::thread_rng(), 1024).unwrap();
    let crypto = RsaCryptographyClient::new(config.key_id.clone(), key);

    let storage = InMemoryBlobServiceClient::new();
    let blob = storage
        .blob_client(&config.container, &config.blob_name)
        .unwrap();
    blob.upload(&crypto.encrypt(INIT_ALGORITHM, b"Cat\nDog\nBird\n").unwrap())
        .unwrap();

    let repo = InMemoryPetTypeRepository::new();
    let outcome = InitPetTypes::new(config, Some(blob), Some(crypto), repo.clone())
        .run()
        .unwrap();

    assert_eq!(outcome.loaded_count(), 3);
    assert_eq!(repo.find_all().unwrap()[2].1.name(), "Bird");
    assert!(storage.is_empty().unwrap());
}

#[test]
fn test_encrypted_flag_with_plain_blob_fails_without_writes() {
    let config = InitPetTypesConfig {
        keyvault_encrypted: true,
        ..InitPetTypesConfig::default()
    };
    let key = RsaPrivateKey::new(&mut rand::thread_rng(), 1024).unwrap();
    let crypto = RsaCryptographyClient::new(config.key_id.clone(), key);

    let storage = InMemoryBlobServiceClient::new();
    let blob = storage
        .blob_client(&config.container, &config.blob_name)
        .unwrap();
    blob.upload(b"Cat\nDog\n").unwrap();

    let repo = InMemoryPetTypeRepository::new();
    let err = InitPetTypes::new(config, Some(blob.clone()), Some(crypto), repo.clone())
        .run()
        .unwrap_err();

    assert!(matches!(err, InitError::Decrypt { .. }));
    assert_eq!(repo.count().unwrap(), 0);
    assert!(blob.exists().unwrap());
}

#[test]
fn test_second_start_writes_nothing() {
    let root = TempDir::new().unwrap();
    let config = InitPetTypesConfig::default();
    fs_blob(&root, &config).upload(b"cat\ndog\n").unwrap();
    let repo = InMemoryPetTypeRepository::new();

    let start = || {
        InitPetTypes::new(
            config.clone(),
            Some(fs_blob(&root, &config)),
            None::<RsaCryptographyClient>,
            repo.clone(),
        )
        .run()
    };

    assert_eq!(start().unwrap().loaded_count(), 2);
    assert!(matches!(start(), Err(InitError::MissingBlob { .. })));
    assert_eq!(repo.count().unwrap(), 2);
}

#[test]
fn test_storage_disabled() {
    let repo = InMemoryPetTypeRepository::new();
    let outcome = InitPetTypes::new(
        InitPetTypesConfig::default(),
        None::<FsBlobClient>,
        None::<RsaCryptographyClient>,
        repo.clone(),
    )
    .run()
    .unwrap();

    assert_eq!(
        outcome,
        LoadOutcome::Skipped {
            reason: SkipReason::NoBlobClient
        }
    );
    assert_eq!(repo.count().unwrap(), 0);
}
