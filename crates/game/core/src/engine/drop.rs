//! Moving items between the inventory and the ground.

use super::{InventoryEngine, InventoryError, PickupError};
use crate::env::{DropContext, GroundItemHandle};
use crate::state::GroundItem;

/// What happened to the contents of a dropped slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// The slot was already empty.
    Empty,
    /// The item is not droppable and was destroyed.
    Discarded,
    /// Neither a named nor a default template exists; the item is gone.
    NoTemplate,
    /// The item id did not resolve; the item is gone.
    UnknownDefinition,
    /// One ground item per unit was spawned.
    Spawned(Vec<GroundItemHandle>),
}

impl DropOutcome {
    pub fn spawned(&self) -> &[GroundItemHandle] {
        match self {
            Self::Spawned(handles) => handles,
            _ => &[],
        }
    }
}

impl InventoryEngine {
    /// Empties slot `index` and places its contents on the ground.
    ///
    /// The slot is cleared before anything else, so contents that cannot be
    /// spawned are lost.
    pub fn drop_item(
        &mut self,
        index: usize,
        ctx: &mut DropContext<'_>,
    ) -> Result<DropOutcome, InventoryError> {
        let index = self.slot_index(index)?;
        let slot = &mut self.container.slots_mut()[index];
        if slot.is_empty() {
            slot.clear();
            return Ok(DropOutcome::Empty);
        }
        let contents = slot.take();

        if !contents.item.droppable {
            tracing::debug!(
                "InventoryEngine: '{}' is not droppable, destroying {} unit(s)",
                contents.item.name,
                contents.quantity
            );
            return Ok(DropOutcome::Discarded);
        }

        let Some(template) = ctx.template_for(&contents.item.name) else {
            tracing::error!(
                "InventoryEngine: no ground template for '{}' and no default template",
                contents.item.name
            );
            return Ok(DropOutcome::NoTemplate);
        };

        let Some((id, definition)) = contents
            .item
            .id
            .and_then(|id| self.registry.resolve(id).map(|definition| (id, definition)))
        else {
            tracing::error!(
                "InventoryEngine: dropped item '{}' has no definition in the registry",
                contents.item.name
            );
            return Ok(DropOutcome::UnknownDefinition);
        };

        let position = ctx.position;
        let handles = (0..contents.quantity)
            .map(|_| {
                ctx.spawner
                    .spawn(&template, definition, GroundItem::dropped(id), position)
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            "InventoryEngine: dropped {} x '{}' from slot {}",
            handles.len(),
            contents.item.name,
            index
        );
        Ok(DropOutcome::Spawned(handles))
    }

    /// Moves one freshly rolled instance of a ground item into the inventory.
    ///
    /// On success the ground item is marked as picked up; on failure it is left
    /// exactly as it was.
    pub fn pick_up(&mut self, ground: &mut GroundItem) -> Result<usize, PickupError> {
        if ground.picked_up {
            return Err(PickupError::AlreadyPickedUp);
        }
        if ground.dropped {
            return Err(PickupError::OnCooldown);
        }
        if !self.registry.contains_id(ground.definition) {
            return Err(PickupError::NotInRegistry {
                id: ground.definition,
            });
        }

        ground.picked_up = true;
        match self.add_definition(ground.definition, 1) {
            Ok(index) => Ok(index),
            Err(err) => {
                ground.picked_up = false;
                tracing::debug!("InventoryEngine: pickup failed: {}", err);
                Err(err.into())
            }
        }
    }
}
