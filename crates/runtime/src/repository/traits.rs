//! Repository contract for saving and loading inventory state.

use inventory_core::InventoryContainer;

use crate::repository::Result;

/// Repository holding exactly one saved container.
///
/// Implementations store the encoded form produced by
/// [`codec::encode`](crate::repository::codec::encode).
pub trait InventoryRepository: Send + Sync {
    /// Save the container, replacing any previous save.
    fn save(&self, container: &InventoryContainer) -> Result<()>;

    /// Load the saved container, or `None` when nothing was saved.
    fn load(&self) -> Result<Option<InventoryContainer>>;

    /// Check if a save exists
    fn exists(&self) -> bool;

    /// Delete the save
    fn delete(&self) -> Result<()>;
}
