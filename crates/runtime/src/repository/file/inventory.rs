//! File-based InventoryRepository implementation.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use inventory_core::InventoryContainer;

use crate::repository::{InventoryRepository, RepositoryError, Result, codec};

/// File-based implementation of InventoryRepository.
///
/// The save lives at `base_dir` joined with a relative save path. Writes go
/// to a `.tmp` sibling first and are renamed into place.
pub struct FileInventoryRepository {
    path: PathBuf,
}

impl FileInventoryRepository {
    /// Create a repository for `base_dir` + `save_path`.
    ///
    /// Leading separators on `save_path` are collapsed so that `"/inv.save"`,
    /// `"inv.save"` and `"//inv.save"` all resolve under `base_dir`.
    pub fn new(base_dir: impl AsRef<Path>, save_path: &str) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        fs::create_dir_all(base_dir).map_err(RepositoryError::Io)?;
        Ok(Self {
            path: base_dir.join(normalize_save_path(save_path)),
        })
    }

    /// Create a repository for an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

/// Strips leading `/` and `\` so the path stays relative to the base dir.
pub(crate) fn normalize_save_path(save_path: &str) -> &str {
    save_path.trim_start_matches(['/', '\\'])
}

impl InventoryRepository for FileInventoryRepository {
    fn save(&self, container: &InventoryContainer) -> Result<()> {
        let bytes = codec::encode(container)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(RepositoryError::Io)?;
        }

        // Write to temp file
        let temp_path = self.temp_path();
        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &self.path).map_err(RepositoryError::Io)?;

        tracing::debug!(
            "Saved inventory ({} slots) to {}",
            container.capacity(),
            self.path.display()
        );

        Ok(())
    }

    fn load(&self) -> Result<Option<InventoryContainer>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(RepositoryError::Io(e)),
        };
        let container = codec::decode(&bytes)?;

        tracing::debug!(
            "Loaded inventory ({} slots) from {}",
            container.capacity(),
            self.path.display()
        );

        Ok(Some(container))
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn delete(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted inventory save {}", self.path.display());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_core::{ItemId, ItemInstance};

    fn container() -> InventoryContainer {
        let mut container = InventoryContainer::new(4);
        let apple = ItemInstance::new("Apple", Some(ItemId(0)), Vec::new(), true, true, false);
        container.slots_mut()[1].update(apple, 3);
        container
    }

    #[test]
    fn leading_separators_are_normalized() {
        assert_eq!(normalize_save_path("/inventory.save"), "inventory.save");
        assert_eq!(normalize_save_path("//saves/inventory.save"), "saves/inventory.save");
        assert_eq!(normalize_save_path("inventory.save"), "inventory.save");

        let dir = tempfile::tempdir().unwrap();
        let repo = FileInventoryRepository::new(dir.path(), "/inventory.save").unwrap();
        assert_eq!(repo.path(), dir.path().join("inventory.save"));
    }

    #[test]
    fn save_load_delete_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileInventoryRepository::new(dir.path(), "/saves/inventory.save").unwrap();

        assert!(!repo.exists());
        assert!(repo.load().unwrap().is_none());

        repo.save(&container()).unwrap();
        assert!(repo.exists());
        assert!(!repo.temp_path().exists());
        assert_eq!(repo.load().unwrap(), Some(container()));

        repo.delete().unwrap();
        assert!(!repo.exists());
        repo.delete().unwrap();
    }

    #[test]
    fn unreadable_path_is_an_error_not_a_missing_save() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("blocker"), b"plain file").unwrap();
        let repo = FileInventoryRepository::at(dir.path().join("blocker").join("inventory.save"));

        assert!(matches!(repo.load(), Err(RepositoryError::Io(_))));
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileInventoryRepository::new(dir.path(), "inventory.save").unwrap();
        fs::write(repo.path(), b"not a save").unwrap();
        assert!(matches!(repo.load(), Err(RepositoryError::CorruptedData(_))));
    }
}
