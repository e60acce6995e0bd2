//! Read-only catalogue data and the world collaborators.
//!
//! The [`ItemRegistry`] exposes item definitions; the [`TemplateLookup`] and
//! [`GroundItemSpawner`] traits describe what the engine needs from the game
//! world when items leave the inventory. [`BuffRng`] supplies buff rolls.
mod items;
mod registry;
mod rng;
mod world;

pub use items::ItemDefinition;
pub use registry::ItemRegistry;
pub use rng::{BuffRng, PcgRng};
pub use world::{
    DropContext, GroundItemHandle, GroundItemSpawner, Position, TemplateHandle, TemplateLookup,
};
