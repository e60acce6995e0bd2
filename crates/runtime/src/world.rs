//! In-memory game world: spawn templates and ground items.
//!
//! [`GroundWorld`] is the runtime's implementation of the core's world
//! collaborators. Ground items are plain data keyed by [`GroundItemHandle`];
//! rendering them is left to the embedding game.

use std::collections::{BTreeMap, HashSet};

use inventory_core::{
    DropContext, GroundItem, GroundItemHandle, GroundItemSpawner, InventoryConfig, ItemDefinition,
    ItemId, Position, TemplateHandle, TemplateLookup,
};

/// Named spawn templates plus an optional fallback.
#[derive(Clone, Debug)]
pub struct TemplateCatalog {
    names: HashSet<String>,
    default: Option<TemplateHandle>,
}

impl TemplateCatalog {
    /// Catalog with only the `"DefaultGroundItem"` fallback.
    pub fn new() -> Self {
        Self {
            names: HashSet::new(),
            default: Some(TemplateHandle(
                InventoryConfig::DEFAULT_TEMPLATE_NAME.to_string(),
            )),
        }
    }

    /// Registers a template named after an item.
    pub fn register(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    pub fn set_default(&mut self, default: Option<TemplateHandle>) {
        self.default = default;
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateLookup for TemplateCatalog {
    fn lookup(&self, name: &str) -> Option<TemplateHandle> {
        self.names
            .contains(name)
            .then(|| TemplateHandle(name.to_string()))
    }

    fn default_template(&self) -> Option<TemplateHandle> {
        self.default.clone()
    }
}

/// A ground item as it exists in the world.
#[derive(Clone, Debug, PartialEq)]
pub struct SpawnedItem {
    pub template: TemplateHandle,
    pub name: String,
    pub item: GroundItem,
    pub position: Position,
}

/// Ground items currently in the world.
#[derive(Clone, Debug)]
pub struct GroundItems {
    items: BTreeMap<GroundItemHandle, SpawnedItem>,
    next_handle: u64,
    pickup_delay: f32,
}

impl GroundItems {
    pub fn new(pickup_delay: f32) -> Self {
        Self {
            items: BTreeMap::new(),
            next_handle: 0,
            pickup_delay,
        }
    }

    /// Places a fresh, immediately pickable item (e.g. level loot).
    pub fn place(
        &mut self,
        template: TemplateHandle,
        definition: &ItemDefinition,
        position: Position,
    ) -> Option<GroundItemHandle> {
        let id = definition.id?;
        Some(self.insert(SpawnedItem {
            template,
            name: definition.name.clone(),
            item: GroundItem::new(id).with_pickup_delay(self.pickup_delay),
            position,
        }))
    }

    pub fn get(&self, handle: GroundItemHandle) -> Option<&SpawnedItem> {
        self.items.get(&handle)
    }

    pub fn get_mut(&mut self, handle: GroundItemHandle) -> Option<&mut SpawnedItem> {
        self.items.get_mut(&handle)
    }

    pub fn remove(&mut self, handle: GroundItemHandle) -> Option<SpawnedItem> {
        self.items.remove(&handle)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (GroundItemHandle, &SpawnedItem)> {
        self.items.iter().map(|(handle, item)| (*handle, item))
    }

    /// Handles of items showing `id` that can be picked up right now.
    pub fn pickable(&self, id: ItemId) -> impl Iterator<Item = GroundItemHandle> + '_ {
        self.items
            .iter()
            .filter(move |(_, spawned)| spawned.item.definition == id && spawned.item.is_pickable())
            .map(|(handle, _)| *handle)
    }

    /// Advances every drop cooldown by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        for spawned in self.items.values_mut() {
            spawned.item.advance(dt);
        }
    }

    /// Despawns items that were picked up.
    pub fn sweep_picked_up(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|_, spawned| !spawned.item.picked_up);
        before - self.items.len()
    }

    fn insert(&mut self, spawned: SpawnedItem) -> GroundItemHandle {
        let handle = GroundItemHandle(self.next_handle);
        self.next_handle += 1;
        self.items.insert(handle, spawned);
        handle
    }
}

impl GroundItemSpawner for GroundItems {
    fn spawn(
        &mut self,
        template: &TemplateHandle,
        definition: &ItemDefinition,
        item: GroundItem,
        position: Position,
    ) -> GroundItemHandle {
        let handle = self.insert(SpawnedItem {
            template: template.clone(),
            name: definition.name.clone(),
            item: item.with_pickup_delay(self.pickup_delay),
            position,
        });
        tracing::debug!(
            "Spawned ground item {:?} '{}' from template '{}'",
            handle,
            definition.name,
            template.0
        );
        handle
    }
}

/// Templates and ground items of one world.
#[derive(Clone, Debug)]
pub struct GroundWorld {
    pub templates: TemplateCatalog,
    pub items: GroundItems,
}

impl GroundWorld {
    pub fn new(pickup_delay: f32) -> Self {
        Self {
            templates: TemplateCatalog::new(),
            items: GroundItems::new(pickup_delay),
        }
    }

    /// Borrows the world as the collaborators an inventory drop needs.
    pub fn drop_context(&mut self, position: Position) -> DropContext<'_> {
        DropContext::new(&self.templates, &mut self.items, position)
    }

    /// Advances ground item cooldowns; call once per game tick.
    pub fn tick(&mut self, dt: f32) {
        self.items.tick(dt);
    }
}

impl Default for GroundWorld {
    fn default() -> Self {
        Self::new(InventoryConfig::DEFAULT_PICKUP_DELAY_SECS)
    }
}
