//! Configuration for the bootstrap
//!
//! Every field is optional. A missing `storage.root` disables the storage
//! integration, a missing `database.path` keeps pet types in memory.

use std::path::{Path, PathBuf};

use petclinic_domain::{BlobName, ContainerName, KeyId};
use petclinic_usecase::{
    InitPetTypesConfig, DEFAULT_BLOB_NAME, DEFAULT_CONTAINER, DEFAULT_KEY_ID,
};
use serde::Deserialize;
use thiserror::Error;

/// Errors loading the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Top-level configuration document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AppConfig {
    pub app: AppSection,
    pub storage: StorageConfig,
    pub keyvault: KeyVaultConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AppSection {
    pub init: InitSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct InitSection {
    pub pet_types: PetTypesInitConfig,
}

/// `app.init.pet-types`
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PetTypesInitConfig {
    pub blob: String,
    pub keyvault_encrypted: bool,
    pub container: String,
    pub key_id: String,
    pub skip_if_missing: bool,
}

impl Default for PetTypesInitConfig {
    fn default() -> Self {
        Self {
            blob: DEFAULT_BLOB_NAME.to_string(),
            keyvault_encrypted: false,
            container: DEFAULT_CONTAINER.to_string(),
            key_id: DEFAULT_KEY_ID.to_string(),
            skip_if_missing: false,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct StorageConfig {
    /// Directory holding one sub-directory per container
    pub root: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct KeyVaultConfig {
    /// PEM private key for `key-id`
    pub private_key: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DatabaseConfig {
    /// JSON file the pet types are persisted to
    pub path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes to unit, not to a mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    /// Defaults when no file is given
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn pet_types(&self) -> &PetTypesInitConfig {
        &self.app.init.pet_types
    }

    /// Loader configuration derived from `app.init.pet-types`
    pub fn init_config(&self) -> InitPetTypesConfig {
        let pet_types = self.pet_types();
        InitPetTypesConfig {
            container: ContainerName::new(&pet_types.container),
            blob_name: BlobName::new(&pet_types.blob),
            key_id: KeyId::new(&pet_types.key_id),
            keyvault_encrypted: pet_types.keyvault_encrypted,
            skip_if_missing: pet_types.skip_if_missing,
        }
    }
}
