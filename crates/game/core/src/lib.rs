//! Inventory state engine shared by the runtime and offline tools.
//!
//! `inventory-core` defines the canonical inventory rules (item registry,
//! slots, containers, and the add/swap/drop/pickup protocol) as plain,
//! synchronous APIs. All container mutation flows through
//! [`engine::InventoryEngine`], and supporting crates depend on the types
//! re-exported here.
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use config::InventoryConfig;
pub use engine::{DropOutcome, InventoryEngine, InventoryError, ItemQuery, PickupError};
pub use env::{
    BuffRng, DropContext, GroundItemHandle, GroundItemSpawner, ItemDefinition, ItemRegistry,
    PcgRng, Position, TemplateHandle, TemplateLookup,
};
pub use error::{ErrorSeverity, InventoryFault};
pub use state::{
    Attribute, AttributeBuff, GroundItem, InventoryContainer, InventorySlot, ItemId,
    ItemInstance, ItemType, ItemTypes, MergeReport, SlotContents,
};
