//! Interfaces the engine needs from the game world.
//!
//! The core never owns renderable objects. Dropping an item asks a
//! [`TemplateLookup`] for a spawn template and a [`GroundItemSpawner`] to
//! materialize plain-data ground items, identified by [`GroundItemHandle`].

use crate::env::ItemDefinition;
use crate::state::GroundItem;

/// World-space position where dropped items appear.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Name of a spawn template (prefab) known to the world.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemplateHandle(pub String);

/// Opaque id of a spawned ground item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroundItemHandle(pub u64);

/// Resolves spawn templates by item name.
pub trait TemplateLookup {
    fn lookup(&self, name: &str) -> Option<TemplateHandle>;

    /// Fallback template used when no template matches the item name.
    fn default_template(&self) -> Option<TemplateHandle>;
}

/// Materializes ground items in the world.
pub trait GroundItemSpawner {
    /// Spawns one ground copy of `definition`.
    ///
    /// `item` arrives already tagged as dropped and not picked up; the
    /// spawner keeps it unpickable until its own cooldown elapses.
    fn spawn(
        &mut self,
        template: &TemplateHandle,
        definition: &ItemDefinition,
        item: GroundItem,
        position: Position,
    ) -> GroundItemHandle;
}

/// Bundles the collaborators a drop needs.
pub struct DropContext<'a> {
    pub templates: &'a dyn TemplateLookup,
    pub spawner: &'a mut dyn GroundItemSpawner,
    pub position: Position,
}

impl<'a> DropContext<'a> {
    pub fn new(
        templates: &'a dyn TemplateLookup,
        spawner: &'a mut dyn GroundItemSpawner,
        position: Position,
    ) -> Self {
        Self {
            templates,
            spawner,
            position,
        }
    }

    /// Template for `name`, falling back to the default template.
    pub fn template_for(&self, name: &str) -> Option<TemplateHandle> {
        self.templates
            .lookup(name)
            .or_else(|| self.templates.default_template())
    }
}
