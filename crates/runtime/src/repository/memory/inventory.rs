//! In-memory InventoryRepository implementation for tests and local runs.

use std::sync::RwLock;

use inventory_core::InventoryContainer;

use crate::repository::{InventoryRepository, RepositoryError, Result, codec};

/// In-memory implementation of InventoryRepository.
///
/// Keeps the encoded bytes rather than the container, so loads go through
/// the same decoder as file saves.
pub struct InMemoryInventoryRepository {
    bytes: RwLock<Option<Vec<u8>>>,
}

impl InMemoryInventoryRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            bytes: RwLock::new(None),
        }
    }

    /// Create with raw save bytes, e.g. a save produced by another build.
    pub fn with_bytes(bytes: Vec<u8>) -> Self {
        Self {
            bytes: RwLock::new(Some(bytes)),
        }
    }

    /// Copy of the stored bytes.
    pub fn bytes(&self) -> Result<Option<Vec<u8>>> {
        let bytes = self
            .bytes
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(bytes.clone())
    }
}

impl Default for InMemoryInventoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryRepository for InMemoryInventoryRepository {
    fn save(&self, container: &InventoryContainer) -> Result<()> {
        let encoded = codec::encode(container)?;
        let mut bytes = self
            .bytes
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *bytes = Some(encoded);
        Ok(())
    }

    fn load(&self) -> Result<Option<InventoryContainer>> {
        let bytes = self
            .bytes
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        bytes.as_deref().map(codec::decode).transpose()
    }

    fn exists(&self) -> bool {
        self.bytes
            .read()
            .map(|bytes| bytes.is_some())
            .unwrap_or(false)
    }

    fn delete(&self) -> Result<()> {
        let mut bytes = self
            .bytes
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *bytes = None;
        Ok(())
    }
}
