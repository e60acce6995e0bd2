//! Slot exchange within one container and across two containers.

use super::{InventoryEngine, InventoryError};
use crate::env::ItemRegistry;
use crate::state::{InventorySlot, ItemType};

impl InventoryEngine {
    /// Exchanges the contents of two slots.
    ///
    /// Each slot must accept the other's item type unless `bypass` is set.
    /// Allow-lists stay with their slots. Swapping a slot with itself succeeds
    /// without changes.
    pub fn swap_slots(
        &mut self,
        first: usize,
        second: usize,
        bypass: bool,
    ) -> Result<(), InventoryError> {
        let first = self.slot_index(first)?;
        let second = self.slot_index(second)?;
        if first == second {
            return Ok(());
        }

        if !bypass {
            let slots = self.container.slots();
            let first_type = effective_type(&self.registry, &slots[first])?;
            let second_type = effective_type(&self.registry, &slots[second])?;
            if !slots[second].accepts(first_type) || !slots[first].accepts(second_type) {
                return Err(InventoryError::SwapRejected { first, second });
            }
        }

        let (low, high) = (first.min(second), first.max(second));
        let (head, tail) = self.container.slots_mut().split_at_mut(high);
        head[low].swap_contents(&mut tail[0]);

        tracing::debug!("InventoryEngine: swapped slots {} and {}", first, second);
        Ok(())
    }

    /// Exchanges `index` of this container with `other_index` of `other`.
    ///
    /// Used for drags between the bag and the equipment layout. Item types are
    /// resolved through each engine's own registry.
    pub fn swap_with(
        &mut self,
        index: usize,
        other: &mut InventoryEngine,
        other_index: usize,
        bypass: bool,
    ) -> Result<(), InventoryError> {
        let index = self.slot_index(index)?;
        let other_index = other.slot_index(other_index)?;

        if !bypass {
            let mine = &self.container.slots()[index];
            let theirs = &other.container.slots()[other_index];
            let my_type = effective_type(&self.registry, mine)?;
            let their_type = effective_type(&other.registry, theirs)?;
            if !theirs.accepts(my_type) || !mine.accepts(their_type) {
                return Err(InventoryError::SwapRejected {
                    first: index,
                    second: other_index,
                });
            }
        }

        self.container.slots_mut()[index]
            .swap_contents(&mut other.container.slots_mut()[other_index]);

        tracing::debug!(
            "InventoryEngine: swapped slot {} with slot {} of another container",
            index,
            other_index
        );
        Ok(())
    }
}

/// Type used for the acceptance check: `Null` for an empty slot, otherwise the
/// registry definition's type.
fn effective_type(registry: &ItemRegistry, slot: &InventorySlot) -> Result<ItemType, InventoryError> {
    let Some(id) = slot.item.id.filter(|_| !slot.is_empty()) else {
        return Ok(ItemType::Null);
    };
    registry
        .resolve(id)
        .map(|definition| definition.item_type)
        .ok_or(InventoryError::UnknownItem { id })
}
