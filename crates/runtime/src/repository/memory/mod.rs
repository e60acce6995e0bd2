//! In-memory repository implementations for testing and development.

mod inventory;

pub use inventory::InMemoryInventoryRepository;
