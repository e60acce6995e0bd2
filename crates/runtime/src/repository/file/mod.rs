//! File-based repository implementations.

mod inventory;

pub use inventory::FileInventoryRepository;
pub(crate) use inventory::normalize_save_path;
