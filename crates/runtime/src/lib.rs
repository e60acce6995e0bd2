//! Runtime wiring for the inventory engine.
//!
//! This crate connects the pure rules of `inventory-core` to the outside world:
//! saved state, authored content, randomness, and ground items. Consumers embed
//! [`InventorySession`] to drive an inventory and persist it.
//!
//! Modules are organized by responsibility:
//! - [`repository`] encodes containers and stores them (file or memory)
//! - [`session`] hosts the composition root
//! - [`world`] provides the in-memory ground item world
//! - [`config`] and [`logging`] cover process setup
pub mod config;
pub mod error;
pub mod logging;
pub mod repository;
pub mod rng;
pub mod session;
pub mod world;

pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use logging::setup_logging;
pub use repository::{
    FileInventoryRepository, InMemoryInventoryRepository, InventoryRepository, InventoryStore,
    LoadOutcome, RepositoryError,
};
pub use rng::SystemRng;
pub use session::InventorySession;
pub use world::{GroundItems, GroundWorld, SpawnedItem, TemplateCatalog};
