//! JSON file repository
//!
//! The whole table lives in one JSON document:
//!
//! ```json
//! { "pet_types": [ { "id": 1, "name": "cat" }, { "id": 2, "name": "dog" } ] }
//! ```
//!
//! Saves rewrite the document to a sibling temp file, fsync it and rename
//! it over the original, so a save either lands completely or not at all.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use petclinic_domain::{PetType, PetTypeId, PetTypeRepository, RepositoryError};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Default, Serialize, Deserialize)]
struct PetTypeTable {
    #[serde(default)]
    pet_types: Vec<PetTypeRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PetTypeRow {
    id: u64,
    name: String,
}

/// Write `bytes` next to `path`, fsync, then rename over `path`
///
/// The temp file is removed again if any step fails.
fn write_atomically(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = PathBuf::from(tmp_name);

    let result = File::create(&tmp_path)
        .and_then(|mut file| {
            file.write_all(bytes)?;
            file.sync_all()
        })
        .and_then(|_| fs::rename(&tmp_path, path));

    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

fn persistence_error(path: &Path, err: io::Error) -> RepositoryError {
    RepositoryError::PersistenceError {
        message: format!("{}: {}", path.display(), err),
    }
}

/// PetType repository backed by a JSON file
#[derive(Debug, Clone)]
pub struct JsonFilePetTypeRepository {
    path: PathBuf,
}

impl JsonFilePetTypeRepository {
    /// The file is created on first save
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<PetTypeTable, RepositoryError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(PetTypeTable::default()),
            Err(e) => return Err(persistence_error(&self.path, e)),
        };
        serde_json::from_str(&content).map_err(|e| RepositoryError::CorruptedStore {
            message: format!("{}: {}", self.path.display(), e),
        })
    }

    fn store(&self, table: &PetTypeTable) -> Result<(), RepositoryError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| persistence_error(parent, e))?;
        }

        let json = serde_json::to_vec_pretty(table).map_err(|e| {
            RepositoryError::PersistenceError {
                message: e.to_string(),
            }
        })?;

        write_atomically(&self.path, &json).map_err(|e| persistence_error(&self.path, e))
    }
}

impl PetTypeRepository for JsonFilePetTypeRepository {
    fn save_all_and_flush(
        &mut self,
        pet_types: Vec<PetType>,
    ) -> Result<Vec<PetTypeId>, RepositoryError> {
        let mut table = self.load()?;

        let mut next_id = table
            .pet_types
            .iter()
            .map(|row| row.id)
            .max()
            .map_or(PetTypeId::new(1), |max| PetTypeId::new(max).next());

        let mut ids = Vec::with_capacity(pet_types.len());
        for pet_type in pet_types {
            table.pet_types.push(PetTypeRow {
                id: next_id.value(),
                name: pet_type.into_name(),
            });
            ids.push(next_id);
            next_id = next_id.next();
        }

        self.store(&table)?;
        debug!(path = %self.path.display(), saved = ids.len(), "Flushed pet types");
        Ok(ids)
    }

    fn find_all(&self) -> Result<Vec<(PetTypeId, PetType)>, RepositoryError> {
        let mut rows: Vec<_> = self
            .load()?
            .pet_types
            .into_iter()
            .map(|row| (PetTypeId::new(row.id), PetType::new(row.name)))
            .collect();
        rows.sort_by_key(|(id, _)| *id);
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFilePetTypeRepository::new(dir.path().join("pet-types.json"));

        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_save_persists_across_instances() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("pet-types.json");

        let mut repo = JsonFilePetTypeRepository::new(&path);
        let ids = repo
            .save_all_and_flush(vec![PetType::new("cat"), PetType::new("dog")])
            .unwrap();
        assert_eq!(ids, vec![PetTypeId::new(1), PetTypeId::new(2)]);

        let mut reopened = JsonFilePetTypeRepository::new(&path);
        let more = reopened
            .save_all_and_flush(vec![PetType::new("lizard")])
            .unwrap();
        assert_eq!(more, vec![PetTypeId::new(3)]);

        let all = reopened.find_all().unwrap();
        assert_eq!(
            all,
            vec![
                (PetTypeId::new(1), PetType::new("cat")),
                (PetTypeId::new(2), PetType::new("dog")),
                (PetTypeId::new(3), PetType::new("lizard")),
            ]
        );
        assert!(!dir.path().join("data").join("pet-types.json.tmp").exists());
    }

    #[test]
    fn test_corrupted_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pet-types.json");
        fs::write(&path, "{ not json").unwrap();

        let mut repo = JsonFilePetTypeRepository::new(&path);

        assert!(matches!(
            repo.find_all(),
            Err(RepositoryError::CorruptedStore { .. })
        ));
        assert!(matches!(
            repo.save_all_and_flush(vec![PetType::new("cat")]),
            Err(RepositoryError::CorruptedStore { .. })
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn test_failed_write_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        // rename() cannot replace a non-empty directory
        let target = dir.path().join("pet-types.json");
        fs::create_dir_all(target.join("occupied")).unwrap();

        assert!(write_atomically(&target, b"{}").is_err());
        assert!(!dir.path().join("pet-types.json.tmp").exists());
        assert!(target.is_dir());
    }

    #[test]
    fn test_names_are_stored_verbatim() {
        let dir = TempDir::new().unwrap();
        let mut repo = JsonFilePetTypeRepository::new(dir.path().join("pet-types.json"));

        repo.save_all_and_flush(vec![PetType::new(" \"quoted\" snake ")])
            .unwrap();

        assert_eq!(
            repo.find_all().unwrap()[0].1.name(),
            " \"quoted\" snake "
        );
    }
}
