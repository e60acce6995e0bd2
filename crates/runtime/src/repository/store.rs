//! Load/save policy on top of an [`InventoryRepository`].

use inventory_core::InventoryContainer;

use crate::repository::{InventoryRepository, Result};

/// Result of restoring a save into a live container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No save exists; the live container was cleared.
    NotFound,
    /// Save merged. `lost` counts saved slots that did not fit.
    Restored { restored: usize, lost: usize },
}

impl LoadOutcome {
    pub fn lost(&self) -> usize {
        match self {
            Self::NotFound => 0,
            Self::Restored { lost, .. } => *lost,
        }
    }

    pub fn is_truncated(&self) -> bool {
        self.lost() > 0
    }
}

/// Saves and restores one container through a repository.
pub struct InventoryStore {
    repository: Box<dyn InventoryRepository>,
}

impl InventoryStore {
    pub fn new(repository: impl InventoryRepository + 'static) -> Self {
        Self {
            repository: Box::new(repository),
        }
    }

    pub fn repository(&self) -> &dyn InventoryRepository {
        self.repository.as_ref()
    }

    pub fn save(&self, container: &InventoryContainer) -> Result<()> {
        self.repository.save(container)
    }

    /// Restores the save into `live` without changing its capacity.
    ///
    /// The save is decoded completely before `live` is touched, so an error
    /// leaves it as it was. A missing save clears `live`.
    pub fn load_into(&self, live: &mut InventoryContainer) -> Result<LoadOutcome> {
        let Some(loaded) = self.repository.load()? else {
            tracing::debug!("No inventory save found, clearing inventory");
            live.clear();
            return Ok(LoadOutcome::NotFound);
        };

        let saved_slots = loaded.capacity();
        let report = live.merge_from(loaded);
        if report.is_truncated() {
            tracing::warn!(
                "Save holds {} slots but the inventory has {}: {} slots were not loaded. \
                 DATA WILL BE LOST IF YOU SAVE",
                saved_slots,
                live.capacity(),
                report.lost
            );
        } else {
            tracing::debug!("Restored {} inventory slots", report.restored);
        }

        Ok(LoadOutcome::Restored {
            restored: report.restored,
            lost: report.lost,
        })
    }

    pub fn exists(&self) -> bool {
        self.repository.exists()
    }

    pub fn delete(&self) -> Result<()> {
        self.repository.delete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{FileInventoryRepository, InMemoryInventoryRepository, RepositoryError};
    use inventory_core::{ItemId, ItemInstance, ItemType};

    fn filled(capacity: usize) -> InventoryContainer {
        let mut container = InventoryContainer::new(capacity);
        for (index, slot) in container.slots_mut().iter_mut().enumerate() {
            let item = ItemInstance::new(
                format!("item{index}"),
                Some(ItemId(index as u32)),
                Vec::new(),
                true,
                true,
                false,
            );
            slot.update(item, 1);
        }
        container
    }

    #[test]
    fn missing_save_clears_live_container() {
        let store = InventoryStore::new(InMemoryInventoryRepository::new());
        let mut live = filled(3);
        assert_eq!(store.load_into(&mut live).unwrap(), LoadOutcome::NotFound);
        assert_eq!(live.used_slots(), 0);
        assert_eq!(live.capacity(), 3);
    }

    #[test]
    fn larger_save_is_truncated_and_reported() {
        let store = InventoryStore::new(InMemoryInventoryRepository::new());
        store.save(&filled(30)).unwrap();

        let mut live = InventoryContainer::new(24);
        let outcome = store.load_into(&mut live).unwrap();
        assert_eq!(
            outcome,
            LoadOutcome::Restored {
                restored: 24,
                lost: 6
            }
        );
        assert!(outcome.is_truncated());
        assert_eq!(live.capacity(), 24);
        assert_eq!(live.used_slots(), 24);
        assert_eq!(live.slot(23).unwrap().item.name, "item23");
    }

    #[test]
    fn unreadable_save_propagates_and_keeps_live_contents() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("blocker"), b"plain file").unwrap();
        let store = InventoryStore::new(FileInventoryRepository::at(
            dir.path().join("blocker").join("inventory.save"),
        ));

        let mut live = filled(3);
        assert!(matches!(
            store.load_into(&mut live),
            Err(RepositoryError::Io(_))
        ));
        assert_eq!(live.used_slots(), 3);
    }

    #[test]
    fn shorter_save_keeps_live_tail() {
        let store = InventoryStore::new(InMemoryInventoryRepository::new());
        store.save(&InventoryContainer::new(2)).unwrap();

        let mut live = filled(4);
        let outcome = store.load_into(&mut live).unwrap();
        assert_eq!(outcome, LoadOutcome::Restored { restored: 2, lost: 0 });
        assert!(live.slot(0).unwrap().is_empty());
        assert_eq!(live.slot(2).unwrap().item.name, "item2");
        assert_eq!(live.slot(3).unwrap().item.name, "item3");
        assert_eq!(live.used_slots(), 2);
    }

    #[test]
    fn allow_lists_survive_a_load() {
        let store = InventoryStore::new(InMemoryInventoryRepository::new());
        store.save(&filled(2)).unwrap();

        let mut live = InventoryContainer::new(2).with_allowed(0, ItemType::Weapon);
        store.load_into(&mut live).unwrap();
        assert!(live.slot(0).unwrap().allowed.lists(ItemType::Weapon));
        assert_eq!(live.slot(0).unwrap().item.name, "item0");
    }

    #[test]
    fn failed_decode_leaves_live_untouched() {
        let store = InventoryStore::new(InMemoryInventoryRepository::with_bytes(b"INVS".to_vec()));
        let mut live = filled(2);
        let before = live.clone();
        assert!(matches!(
            store.load_into(&mut live),
            Err(RepositoryError::CorruptedData(_))
        ));
        assert_eq!(live, before);
    }
}
