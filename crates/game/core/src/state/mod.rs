//! Authoritative inventory state representation.
//!
//! This module owns the data structures that describe buffs, item instances,
//! slots, and containers. Runtime layers clone or query this state but mutate
//! it exclusively through the [`InventoryEngine`](crate::engine::InventoryEngine)
//! or the persistence merge.
mod buff;
mod container;
mod ground;
mod item;
mod slot;

pub use buff::{Attribute, AttributeBuff};
pub use container::{InventoryContainer, MergeReport};
pub use ground::GroundItem;
pub use item::{ItemId, ItemInstance, ItemType, ItemTypes};
pub use slot::{InventorySlot, SlotContents};
