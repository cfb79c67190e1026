//! # PetClinic Init Use Case Layer
//!
//! Application-specific business rules.
//! This layer orchestrates the flow of data between the domain and adapters.
//!
//! ## Use cases
//!
//! - [`InitPetTypes`] - startup hook that seeds pet types from a blob

pub mod error;
pub mod init_pet_types;
pub mod pet_type_lines;

pub use petclinic_domain;

pub use error::InitError;
pub use init_pet_types::{
    InitPetTypes, InitPetTypesConfig, LoadOutcome, SkipReason, DEFAULT_BLOB_NAME,
    DEFAULT_CONTAINER, DEFAULT_KEY_ID, INIT_ALGORITHM,
};
pub use pet_type_lines::parse_pet_types;
