//! In-Memory Repository Implementation
//!
//! Useful for testing and development.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use petclinic_domain::{PetType, PetTypeId, PetTypeRepository, RepositoryError};

/// In-memory PetType Repository
///
/// Thread-safe implementation using RwLock. Clones share the same rows.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPetTypeRepository {
    pet_types: Arc<RwLock<BTreeMap<PetTypeId, PetType>>>,
}

impl InMemoryPetTypeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PetTypeRepository for InMemoryPetTypeRepository {
    fn save_all_and_flush(
        &mut self,
        pet_types: Vec<PetType>,
    ) -> Result<Vec<PetTypeId>, RepositoryError> {
        let mut rows = self.pet_types.write().map_err(|_| {
            RepositoryError::PersistenceError {
                message: "Failed to acquire write lock".to_string(),
            }
        })?;

        let mut next_id = rows
            .keys()
            .next_back()
            .map(PetTypeId::next)
            .unwrap_or(PetTypeId::new(1));

        let mut ids = Vec::with_capacity(pet_types.len());
        for pet_type in pet_types {
            rows.insert(next_id, pet_type);
            ids.push(next_id);
            next_id = next_id.next();
        }
        Ok(ids)
    }

    fn find_all(&self) -> Result<Vec<(PetTypeId, PetType)>, RepositoryError> {
        let rows = self.pet_types.read().map_err(|_| {
            RepositoryError::PersistenceError {
                message: "Failed to acquire read lock".to_string(),
            }
        })?;
        Ok(rows
            .iter()
            .map(|(id, pet_type)| (*id, pet_type.clone()))
            .collect())
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        let rows = self.pet_types.read().map_err(|_| {
            RepositoryError::PersistenceError {
                message: "Failed to acquire read lock".to_string(),
            }
        })?;
        Ok(rows.len())
    }
}
