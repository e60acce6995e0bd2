//! Repository layer for saved inventory state.
//!
//! Repositories handle data that CHANGES during gameplay: the contents of the
//! player's container. Item definitions are authored content and are loaded by
//! `inventory-content`, not stored here.

pub mod codec;
mod error;
mod file;
mod memory;
mod store;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileInventoryRepository;
pub(crate) use file::normalize_save_path;
pub use memory::InMemoryInventoryRepository;
pub use store::{InventoryStore, LoadOutcome};
pub use traits::InventoryRepository;
