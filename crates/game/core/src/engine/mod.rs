//! Inventory mutation protocol.
//!
//! The [`InventoryEngine`] is the only writer of an [`InventoryContainer`]
//! besides the persistence merge. Commands either succeed completely or
//! return an error with the container untouched.

mod drop;
mod errors;
mod swap;

pub use drop::DropOutcome;
pub use errors::{InventoryError, PickupError};

use std::sync::Arc;

use crate::config::InventoryConfig;
use crate::env::{BuffRng, ItemRegistry, PcgRng};
use crate::state::{InventoryContainer, InventorySlot, ItemId, ItemInstance};

/// Identifies an item either by registry id or by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemQuery<'a> {
    Id(ItemId),
    Name(&'a str),
}

impl From<ItemId> for ItemQuery<'_> {
    fn from(id: ItemId) -> Self {
        Self::Id(id)
    }
}

impl<'a> From<&'a str> for ItemQuery<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl ItemQuery<'_> {
    fn matches(&self, item: &ItemInstance) -> bool {
        match self {
            Self::Id(id) => item.id == Some(*id),
            Self::Name(name) => item.name == *name,
        }
    }
}

/// Owns one container and applies the add/swap/drop/pickup rules to it.
pub struct InventoryEngine {
    container: InventoryContainer,
    registry: Arc<ItemRegistry>,
    rng: Box<dyn BuffRng + Send>,
    config: InventoryConfig,
}

impl InventoryEngine {
    /// Creates an engine with an empty container of `config.capacity` slots.
    pub fn new(registry: Arc<ItemRegistry>, config: InventoryConfig) -> Self {
        Self::with_container(InventoryContainer::new(config.capacity), registry, config)
    }

    /// Wraps an existing container, e.g. the equipment layout.
    pub fn with_container(
        container: InventoryContainer,
        registry: Arc<ItemRegistry>,
        config: InventoryConfig,
    ) -> Self {
        Self {
            container,
            registry,
            rng: Box::new(PcgRng::default()),
            config,
        }
    }

    /// Replaces the buff randomness source.
    pub fn with_rng(mut self, rng: impl BuffRng + Send + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    pub fn container(&self) -> &InventoryContainer {
        &self.container
    }

    /// Direct access for the persistence merge.
    pub fn container_mut(&mut self) -> &mut InventoryContainer {
        &mut self.container
    }

    pub fn registry(&self) -> &Arc<ItemRegistry> {
        &self.registry
    }

    pub fn config(&self) -> &InventoryConfig {
        &self.config
    }

    /// Places `quantity` units of `item` and returns the slot index used.
    ///
    /// Stackable items join the first slot already holding the same id;
    /// everything else takes the lowest-index empty slot.
    pub fn add_item(&mut self, item: ItemInstance, quantity: u32) -> Result<usize, InventoryError> {
        if quantity == 0 {
            return Err(InventoryError::ZeroQuantity);
        }
        if item.is_empty() {
            return Err(InventoryError::EmptyItem);
        }

        if item.is_stackable()
            && let Some(index) = self.stack_target(item.id)
        {
            let slot = &mut self.container.slots_mut()[index];
            slot.quantity =
                slot.quantity
                    .checked_add(quantity)
                    .ok_or(InventoryError::QuantityOverflow {
                        slot: index,
                        current: slot.quantity,
                        added: quantity,
                    })?;
            self.after_add(index);
            return Ok(index);
        }

        let index = self
            .container
            .first_empty()
            .ok_or(InventoryError::InventoryFull {
                capacity: self.container.capacity(),
            })?;
        self.container.slots_mut()[index].update(item, quantity);
        self.after_add(index);
        Ok(index)
    }

    /// Creates a freshly rolled instance of the definition `id` and adds it.
    pub fn add_definition(&mut self, id: ItemId, quantity: u32) -> Result<usize, InventoryError> {
        let item = self.instantiate(id)?;
        self.add_item(item, quantity)
    }

    /// Empties every slot.
    pub fn clear(&mut self) {
        self.container.clear();
    }

    pub fn slot(&self, index: usize) -> Option<&InventorySlot> {
        self.container.slot(index)
    }

    /// Out-of-range indices count as empty.
    pub fn is_slot_empty(&self, index: usize) -> bool {
        self.container.slot(index).is_none_or(InventorySlot::is_empty)
    }

    /// Lowest-index non-empty slot holding the queried item.
    pub fn slot_with_item<'q>(&self, query: impl Into<ItemQuery<'q>>) -> Option<usize> {
        let query = query.into();
        self.container
            .slots()
            .iter()
            .position(|slot| !slot.is_empty() && query.matches(&slot.item))
    }

    pub fn contains_item<'q>(&self, query: impl Into<ItemQuery<'q>>) -> bool {
        self.slot_with_item(query).is_some()
    }

    /// `"<name>#<id> (<qty>)"` for the slot, with buffs appended when `verbose`.
    pub fn signature(&self, index: usize, verbose: bool) -> Option<String> {
        self.container.slot(index).map(|slot| slot.signature(verbose))
    }

    /// Multi-line dump of every slot signature.
    pub fn debug_dump(&self) -> String {
        self.container.dump(true)
    }

    fn stack_target(&self, id: Option<ItemId>) -> Option<usize> {
        let id = id?;
        self.slot_with_item(id)
    }

    fn instantiate(&mut self, id: ItemId) -> Result<ItemInstance, InventoryError> {
        let registry = Arc::clone(&self.registry);
        let definition = registry
            .resolve(id)
            .ok_or(InventoryError::UnknownItem { id })?;
        let rng: &mut dyn BuffRng = &mut *self.rng;
        Ok(ItemInstance::from_definition(definition, Some(rng)))
    }

    fn slot_index(&self, index: usize) -> Result<usize, InventoryError> {
        if index < self.container.capacity() {
            Ok(index)
        } else {
            Err(InventoryError::SlotOutOfRange {
                index,
                capacity: self.container.capacity(),
            })
        }
    }

    fn after_add(&self, index: usize) {
        tracing::debug!(
            "InventoryEngine: added to slot {}: {}",
            index,
            self.container.slots()[index].signature(false)
        );
        if self.config.debug_on_add {
            tracing::debug!("{}", self.debug_dump());
        }
    }
}

impl std::fmt::Debug for InventoryEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InventoryEngine")
            .field("container", &self.container)
            .field("registry_len", &self.registry.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::env::ItemDefinition;
    use crate::state::{Attribute, AttributeBuff, ItemType};

    /// Apple(0, food), Sword(1, weapon, buffed), Helm(2, helmet),
    /// Cursed Ring(3, not droppable), Gem(4, buffed but force-stackable).
    pub(crate) fn registry() -> Arc<ItemRegistry> {
        Arc::new(ItemRegistry::from_definitions([
            ItemDefinition::new("Apple", ItemType::Food),
            ItemDefinition::new("Sword", ItemType::Weapon)
                .with_buff(AttributeBuff::fixed(Attribute::Strength, 1, 9, 4)),
            ItemDefinition::new("Helm", ItemType::Helmet).stackable(false),
            ItemDefinition::new("Cursed Ring", ItemType::Default).droppable(false),
            ItemDefinition::new("Gem", ItemType::Default)
                .with_buff(AttributeBuff::fixed(Attribute::Intellect, 1, 3, 2))
                .force_stackable_with_buffs(true),
        ]))
    }

    pub(crate) fn engine(capacity: usize) -> InventoryEngine {
        InventoryEngine::new(registry(), InventoryConfig::with_capacity(capacity))
            .with_rng(PcgRng::new(7))
    }

    #[test]
    fn stackable_items_merge_into_existing_slot() {
        let mut engine = engine(4);
        assert_eq!(engine.add_definition(ItemId(0), 2), Ok(0));
        assert_eq!(engine.add_definition(ItemId(2), 1), Ok(1));
        assert_eq!(engine.add_definition(ItemId(0), 3), Ok(0));
        assert_eq!(engine.slot(0).map(|s| s.quantity), Some(5));
        assert_eq!(engine.container().used_slots(), 2);
    }

    #[test]
    fn non_stackable_items_take_lowest_empty_slot() {
        let mut engine = engine(3);
        assert_eq!(engine.add_definition(ItemId(1), 1), Ok(0));
        assert_eq!(engine.add_definition(ItemId(1), 1), Ok(1));
        assert_eq!(engine.add_definition(ItemId(2), 1), Ok(2));
        assert_eq!(
            engine.add_definition(ItemId(2), 1),
            Err(InventoryError::InventoryFull { capacity: 3 })
        );
    }

    #[test]
    fn buffed_items_never_stack_unless_forced() {
        let mut engine = engine(4);
        engine.add_definition(ItemId(1), 1).unwrap();
        engine.add_definition(ItemId(1), 1).unwrap();
        assert_eq!(engine.container().used_slots(), 2);

        assert_eq!(engine.add_definition(ItemId(4), 1), Ok(2));
        assert_eq!(engine.add_definition(ItemId(4), 2), Ok(2));
        assert_eq!(engine.slot(2).map(|s| s.quantity), Some(3));
    }

    #[test]
    fn full_inventory_still_stacks_onto_existing_slot() {
        let mut engine = engine(1);
        engine.add_definition(ItemId(0), 1).unwrap();
        assert_eq!(engine.add_definition(ItemId(0), 1), Ok(0));
        assert_eq!(
            engine.add_definition(ItemId(2), 1),
            Err(InventoryError::InventoryFull { capacity: 1 })
        );
    }

    #[test]
    fn rejected_adds_leave_container_untouched() {
        let mut engine = engine(2);
        engine.add_definition(ItemId(0), u32::MAX).unwrap();
        let before = engine.container().clone();

        assert_eq!(
            engine.add_definition(ItemId(0), 1),
            Err(InventoryError::QuantityOverflow {
                slot: 0,
                current: u32::MAX,
                added: 1
            })
        );
        assert_eq!(engine.add_item(ItemInstance::empty(), 1), Err(InventoryError::EmptyItem));
        assert_eq!(engine.add_definition(ItemId(0), 0), Err(InventoryError::ZeroQuantity));
        assert_eq!(
            engine.add_definition(ItemId(42), 1),
            Err(InventoryError::UnknownItem { id: ItemId(42) })
        );
        assert_eq!(engine.container(), &before);
    }

    #[test]
    fn queries_find_first_matching_slot() {
        let mut engine = engine(4);
        engine.add_definition(ItemId(1), 1).unwrap();
        engine.add_definition(ItemId(0), 2).unwrap();

        assert_eq!(engine.slot_with_item(ItemId(0)), Some(1));
        assert_eq!(engine.slot_with_item("Sword"), Some(0));
        assert!(engine.contains_item("Apple"));
        assert!(!engine.contains_item(ItemId(2)));
        assert!(engine.is_slot_empty(2));
        assert!(engine.is_slot_empty(99));
        assert_eq!(engine.signature(1, false).as_deref(), Some("Apple#0 (2)"));
        assert_eq!(engine.signature(3, false).as_deref(), Some("EMPTY#-1 (0)"));
        assert_eq!(engine.signature(4, false), None);
    }

    #[test]
    fn clear_empties_everything() {
        let mut engine = engine(3);
        engine.add_definition(ItemId(0), 2).unwrap();
        engine.add_definition(ItemId(2), 1).unwrap();
        engine.clear();
        assert_eq!(engine.container().used_slots(), 0);
        assert!(engine.debug_dump().starts_with("INV (3 slots):"));
    }

    #[test]
    fn error_classification() {
        use crate::error::{ErrorSeverity, InventoryFault};
        assert_eq!(
            InventoryError::InventoryFull { capacity: 1 }.severity(),
            ErrorSeverity::Recoverable
        );
        assert_eq!(
            PickupError::from(InventoryError::ZeroQuantity).error_code(),
            "INVENTORY_ZERO_QUANTITY"
        );
        assert_eq!(
            PickupError::NotInRegistry { id: ItemId(9) }.severity(),
            ErrorSeverity::Internal
        );
    }
}
