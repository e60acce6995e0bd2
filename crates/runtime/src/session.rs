//! Composition root tying the engine, the store, and the world together.

use std::sync::Arc;

use inventory_content::ContentFactory;
use inventory_core::{
    DropOutcome, GroundItemHandle, InventoryConfig, InventoryContainer, InventoryEngine, ItemId,
    ItemRegistry, Position,
};

use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};
use crate::repository::{FileInventoryRepository, InventoryStore, LoadOutcome};
use crate::rng::SystemRng;
use crate::world::GroundWorld;

/// One player's bag and equipment, their save, and the ground around them.
///
/// Only the bag is persisted. After a load that dropped saved slots, [`save`]
/// refuses until [`acknowledge_truncation`] is called.
///
/// [`save`]: Self::save
/// [`acknowledge_truncation`]: Self::acknowledge_truncation
pub struct InventorySession {
    bag: InventoryEngine,
    equipment: InventoryEngine,
    store: InventoryStore,
    world: GroundWorld,
    pending_truncation: Option<usize>,
}

impl InventorySession {
    pub fn new(
        registry: Arc<ItemRegistry>,
        config: &RuntimeConfig,
        store: InventoryStore,
    ) -> Self {
        let bag = InventoryEngine::new(Arc::clone(&registry), config.inventory.clone())
            .with_rng(SystemRng::from_seed(config.seed));
        let equipment = InventoryEngine::with_container(
            InventoryContainer::equipment(),
            registry,
            InventoryConfig::with_capacity(InventoryConfig::EQUIPMENT_SLOTS),
        )
        .with_rng(SystemRng::from_seed(config.seed));

        Self {
            bag,
            equipment,
            store,
            world: GroundWorld::new(config.pickup_delay),
            pending_truncation: None,
        }
    }

    /// Loads the item catalog and opens the file save described by `config`.
    pub fn from_config(config: &RuntimeConfig) -> Result<Self> {
        let registry = match &config.item_catalog {
            Some(path) => ContentFactory::registry_from(path)
                .map_err(|e| RuntimeError::Content(format!("{:#}", e)))?,
            None => {
                tracing::warn!("No item catalog configured, starting with an empty registry");
                ItemRegistry::default()
            }
        };
        let repository = FileInventoryRepository::new(&config.save_dir, &config.save_path)?;
        Ok(Self::new(
            Arc::new(registry),
            config,
            InventoryStore::new(repository),
        ))
    }

    pub fn bag(&self) -> &InventoryEngine {
        &self.bag
    }

    pub fn bag_mut(&mut self) -> &mut InventoryEngine {
        &mut self.bag
    }

    pub fn equipment(&self) -> &InventoryEngine {
        &self.equipment
    }

    pub fn world(&self) -> &GroundWorld {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut GroundWorld {
        &mut self.world
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    /// Adds freshly rolled units of an item to the bag.
    pub fn add(&mut self, id: ItemId, quantity: u32) -> Result<usize> {
        Ok(self.bag.add_definition(id, quantity)?)
    }

    /// Picks a ground item up into the bag and despawns it.
    pub fn pick_up(&mut self, handle: GroundItemHandle) -> Result<usize> {
        let spawned = self
            .world
            .items
            .get_mut(handle)
            .ok_or(RuntimeError::UnknownGroundItem(handle.0))?;
        let index = self.bag.pick_up(&mut spawned.item)?;
        self.world.items.remove(handle);
        Ok(index)
    }

    /// Drops a bag slot onto the ground at `position`.
    pub fn drop_item(&mut self, index: usize, position: Position) -> Result<DropOutcome> {
        let mut ctx = self.world.drop_context(position);
        Ok(self.bag.drop_item(index, &mut ctx)?)
    }

    pub fn swap(&mut self, first: usize, second: usize) -> Result<()> {
        Ok(self.bag.swap_slots(first, second, false)?)
    }

    /// Moves a bag slot into an equipment slot, swapping whatever was equipped.
    pub fn equip(&mut self, bag_index: usize, equipment_index: usize) -> Result<()> {
        Ok(self
            .bag
            .swap_with(bag_index, &mut self.equipment, equipment_index, false)?)
    }

    /// Moves an equipment slot back into a bag slot.
    pub fn unequip(&mut self, equipment_index: usize, bag_index: usize) -> Result<()> {
        Ok(self
            .equipment
            .swap_with(equipment_index, &mut self.bag, bag_index, false)?)
    }

    /// Advances world time; call once per game tick.
    pub fn tick(&mut self, dt: f32) {
        self.world.tick(dt);
    }

    /// Restores the bag from the save.
    pub fn load(&mut self) -> Result<LoadOutcome> {
        let outcome = self.store.load_into(self.bag.container_mut())?;
        self.pending_truncation = outcome.is_truncated().then(|| outcome.lost());
        Ok(outcome)
    }

    /// Writes the bag to the save.
    pub fn save(&self) -> Result<()> {
        if let Some(lost) = self.pending_truncation {
            return Err(RuntimeError::UnacknowledgedTruncation { lost });
        }
        Ok(self.store.save(self.bag.container())?)
    }

    /// Accepts that the slots lost by the last load are gone for good.
    pub fn acknowledge_truncation(&mut self) {
        if let Some(lost) = self.pending_truncation.take() {
            tracing::warn!("Truncation of {} saved slots acknowledged", lost);
        }
    }

    pub fn pending_truncation(&self) -> Option<usize> {
        self.pending_truncation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryInventoryRepository, InventoryRepository};
    use inventory_core::{ItemDefinition, ItemType};

    fn registry() -> Arc<ItemRegistry> {
        Arc::new(ItemRegistry::from_definitions([
            ItemDefinition::new("Apple", ItemType::Food),
            ItemDefinition::new("Helm", ItemType::Helmet).stackable(false),
        ]))
    }

    fn session() -> InventorySession {
        let mut config = RuntimeConfig::new("/unused");
        config.inventory.capacity = 4;
        config.seed = Some(1);
        InventorySession::new(
            registry(),
            &config,
            InventoryStore::new(InMemoryInventoryRepository::new()),
        )
    }

    #[test]
    fn drop_then_pick_up_after_cooldown() {
        let mut session = session();
        session.add(ItemId(0), 2).unwrap();

        let outcome = session.drop_item(0, Position::ORIGIN).unwrap();
        let handles = outcome.spawned().to_vec();
        assert_eq!(handles.len(), 2);
        assert!(session.bag().is_slot_empty(0));

        assert!(matches!(
            session.pick_up(handles[0]),
            Err(RuntimeError::Pickup(_))
        ));
        session.tick(InventoryConfig::DEFAULT_PICKUP_DELAY_SECS);
        assert_eq!(session.pick_up(handles[0]).unwrap(), 0);
        assert_eq!(session.pick_up(handles[1]).unwrap(), 0);
        assert_eq!(session.bag().slot(0).map(|s| s.quantity), Some(2));
        assert!(session.world().items.is_empty());
        assert!(matches!(
            session.pick_up(handles[0]),
            Err(RuntimeError::UnknownGroundItem(_))
        ));
    }

    #[test]
    fn equip_and_unequip() {
        let mut session = session();
        session.add(ItemId(1), 1).unwrap();
        session.add(ItemId(0), 1).unwrap();

        assert!(session.equip(1, 0).is_err());
        session.equip(0, 0).unwrap();
        assert_eq!(
            session.equipment().signature(0, false).as_deref(),
            Some("Helm#1 (1)")
        );
        session.unequip(0, 2).unwrap();
        assert_eq!(session.bag().signature(2, false).as_deref(), Some("Helm#1 (1)"));
    }

    #[test]
    fn save_is_blocked_until_truncation_is_acknowledged() {
        let mut config = RuntimeConfig::new("/unused");
        config.inventory.capacity = 6;
        let repository = InMemoryInventoryRepository::new();
        let mut big = InventoryEngine::new(registry(), config.inventory.clone());
        for _ in 0..6 {
            big.add_definition(ItemId(1), 1).unwrap();
        }
        repository.save(big.container()).unwrap();

        let mut session = session();
        session.store = InventoryStore::new(repository);
        let outcome = session.load().unwrap();
        assert_eq!(outcome, LoadOutcome::Restored { restored: 4, lost: 2 });
        assert_eq!(session.pending_truncation(), Some(2));
        assert!(matches!(
            session.save(),
            Err(RuntimeError::UnacknowledgedTruncation { lost: 2 })
        ));

        session.acknowledge_truncation();
        session.save().unwrap();
        assert_eq!(session.load().unwrap(), LoadOutcome::Restored { restored: 4, lost: 0 });
    }
}
