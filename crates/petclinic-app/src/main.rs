//! # PetClinic Init - Startup seeding of pet type reference data
//!
//! This is the main entry point that wires everything together.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  main.rs (this file) - CLI, logging, configuration             │
//! │    │                                                            │
//! │    └── bootstrap.rs - Dependency Injection & Wiring            │
//! │          ├── Creates: FsBlobClient (adapter, optional)         │
//! │          ├── Creates: RsaCryptographyClient (adapter, optional)│
//! │          ├── Creates: JsonFile / InMemory repository (adapter) │
//! │          └── Runs: InitPetTypes (use case), exactly once       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Usage:
//!   petclinic-init [--config app.yaml]             - Run startup loading
//!   petclinic-init seed <file> [--config app.yaml] - Upload a pet types blob

mod bootstrap;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "petclinic-init")]
#[command(about = "PetClinic startup loader for pet type reference data")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Blob name (app.init.pet-types.blob)
    #[arg(long, global = true)]
    blob: Option<String>,

    /// Treat the blob as key vault encrypted
    #[arg(long, global = true)]
    encrypted: bool,

    /// Blob storage root directory (storage.root)
    #[arg(long, global = true)]
    storage_root: Option<PathBuf>,

    /// PEM private key (keyvault.private-key)
    #[arg(long, global = true)]
    private_key: Option<PathBuf>,

    /// Pet types JSON file (database.path)
    #[arg(long, global = true)]
    database: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a plaintext pet types file as the init blob
    Seed {
        /// One pet type per line
        input: PathBuf,
    },
}

impl Cli {
    /// Configuration file with command line overrides applied
    fn app_config(&self) -> anyhow::Result<AppConfig> {
        let mut config = AppConfig::load(self.config.as_deref())?;

        let pet_types = &mut config.app.init.pet_types;
        if let Some(blob) = &self.blob {
            pet_types.blob = blob.clone();
        }
        if self.encrypted {
            pet_types.keyvault_encrypted = true;
        }
        if let Some(root) = &self.storage_root {
            config.storage.root = Some(root.clone());
        }
        if let Some(key) = &self.private_key {
            config.keyvault.private_key = Some(key.clone());
        }
        if let Some(database) = &self.database {
            config.database.path = Some(database.clone());
        }

        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.app_config()?;

    match &cli.command {
        Some(Commands::Seed { input }) => bootstrap::seed(&config, input),
        None => bootstrap::run_startup(&config).map(|_| ()),
    }
}
