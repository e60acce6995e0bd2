//! Items lying in the world, waiting to be picked up.

use crate::config::InventoryConfig;
use crate::state::ItemId;

/// Pickable world representation of an item definition.
///
/// The engine only reads and sets the flags; the world collaborator owning
/// the entity advances the drop cooldown once per tick via [`advance`](Self::advance).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroundItem {
    pub definition: ItemId,
    pub picked_up: bool,
    /// Set while the drop cooldown is running.
    pub dropped: bool,
    pub time_since_dropped: f32,
    pub pickup_delay: f32,
}

impl GroundItem {
    /// A freshly placed item, immediately pickable.
    pub fn new(definition: ItemId) -> Self {
        Self {
            definition,
            picked_up: false,
            dropped: false,
            time_since_dropped: 0.0,
            pickup_delay: InventoryConfig::DEFAULT_PICKUP_DELAY_SECS,
        }
    }

    /// An item just dropped from an inventory: not pickable until the delay elapses.
    pub fn dropped(definition: ItemId) -> Self {
        Self {
            dropped: true,
            ..Self::new(definition)
        }
    }

    pub fn with_pickup_delay(mut self, seconds: f32) -> Self {
        self.pickup_delay = seconds;
        self
    }

    /// Advances the drop cooldown by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        if !self.dropped {
            return;
        }
        self.time_since_dropped += dt;
        if self.time_since_dropped >= self.pickup_delay {
            self.dropped = false;
            self.time_since_dropped = 0.0;
        }
    }

    pub fn is_pickable(&self) -> bool {
        !self.picked_up && !self.dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cooldown_elapses_after_delay() {
        let mut item = GroundItem::dropped(ItemId(0)).with_pickup_delay(1.0);
        assert!(!item.is_pickable());
        item.advance(0.6);
        assert!(!item.is_pickable());
        item.advance(0.6);
        assert!(item.is_pickable());
        assert_eq!(item.time_since_dropped, 0.0);
    }

    #[test]
    fn fresh_item_is_pickable() {
        let mut item = GroundItem::new(ItemId(2));
        item.advance(10.0);
        assert!(item.is_pickable());
        item.picked_up = true;
        assert!(!item.is_pickable());
    }
}
