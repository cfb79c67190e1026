//! Repository Traits - The persistence port
//!
//! ```text
//! Domain Layer              │  Adapter Layer
//! ──────────────────────────┼────────────────────────────
//! trait PetTypeRepository   │  InMemoryPetTypeRepository
//!   fn save_all_and_flush() │  JsonFilePetTypeRepository
//! ```

pub mod pet_type_repository;
