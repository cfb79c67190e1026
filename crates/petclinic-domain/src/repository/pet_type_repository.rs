//! PetType Repository - Abstract persistence for pet types
//!
//! The repository owns identity: records go in without ids and come back
//! out with the ids it assigned.

use crate::model::pet_type::{PetType, PetTypeId};

/// Errors that can occur during repository operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Failed to persist
    PersistenceError { message: String },
    /// Stored data could not be read back
    CorruptedStore { message: String },
}

impl core::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RepositoryError::PersistenceError { message } => {
                write!(f, "Persistence error: {}", message)
            }
            RepositoryError::CorruptedStore { message } => {
                write!(f, "Corrupted store: {}", message)
            }
        }
    }
}

impl std::error::Error for RepositoryError {}

/// PetType Repository Trait
///
/// This is a PORT in hexagonal architecture.
pub trait PetTypeRepository {
    /// Save all pet types in one call and flush before returning
    ///
    /// Returns the assigned ids in input order. When this returns `Ok`,
    /// the records are durable.
    fn save_all_and_flush(
        &mut self,
        pet_types: Vec<PetType>,
    ) -> Result<Vec<PetTypeId>, RepositoryError>;

    /// All stored pet types, ordered by id
    fn find_all(&self) -> Result<Vec<(PetTypeId, PetType)>, RepositoryError>;

    /// Count stored pet types
    fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.find_all()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal implementation relying on the default `count`
    struct VecRepo {
        rows: Vec<(PetTypeId, PetType)>,
    }

    impl PetTypeRepository for VecRepo {
        fn save_all_and_flush(
            &mut self,
            pet_types: Vec<PetType>,
        ) -> Result<Vec<PetTypeId>, RepositoryError> {
            let mut ids = Vec::with_capacity(pet_types.len());
            for pet_type in pet_types {
                let id = PetTypeId::new(self.rows.len() as u64 + 1);
                self.rows.push((id, pet_type));
                ids.push(id);
            }
            Ok(ids)
        }

        fn find_all(&self) -> Result<Vec<(PetTypeId, PetType)>, RepositoryError> {
            Ok(self.rows.clone())
        }
    }

    #[test]
    fn test_default_count() {
        let mut repo = VecRepo { rows: Vec::new() };
        let ids = repo
            .save_all_and_flush(vec![PetType::new("cat"), PetType::new("dog")])
            .unwrap();

        assert_eq!(ids, vec![PetTypeId::new(1), PetTypeId::new(2)]);
        assert_eq!(repo.count().unwrap(), 2);
    }

    #[test]
    fn test_error_display() {
        let err = RepositoryError::PersistenceError {
            message: "disk full".to_string(),
        };
        assert_eq!(err.to_string(), "Persistence error: disk full");
    }
}
