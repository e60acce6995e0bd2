//! Fixed-capacity slot array; the aggregate root for persistence.

use crate::config::InventoryConfig;
use crate::state::{InventorySlot, ItemType, ItemTypes};

/// Ordered, fixed-length sequence of slots.
///
/// The length never changes after construction; loads merge into the
/// existing slots instead of replacing the array.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryContainer {
    slots: Vec<InventorySlot>,
}

/// Result of merging a loaded container into a live one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MergeReport {
    /// Slots copied from the loaded container.
    pub restored: usize,
    /// Loaded slots that did not fit into the live capacity.
    pub lost: usize,
}

impl MergeReport {
    pub fn is_truncated(&self) -> bool {
        self.lost > 0
    }
}

impl InventoryContainer {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![InventorySlot::default(); capacity],
        }
    }

    pub fn from_slots(slots: Vec<InventorySlot>) -> Self {
        Self { slots }
    }

    /// Equipment layout: one slot each for helmet, chest, weapon, shield, boots.
    pub fn equipment() -> Self {
        const ORDER: [ItemType; InventoryConfig::EQUIPMENT_SLOTS] = [
            ItemType::Helmet,
            ItemType::Chest,
            ItemType::Weapon,
            ItemType::Shield,
            ItemType::Boots,
        ];
        Self {
            slots: ORDER.into_iter().map(|t| InventorySlot::restricted(t)).collect(),
        }
    }

    /// Sets the allow-list of one slot (builder style).
    pub fn with_allowed(mut self, index: usize, allowed: impl Into<ItemTypes>) -> Self {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.set_allowed(allowed);
        }
        self
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[InventorySlot] {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut [InventorySlot] {
        &mut self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&InventorySlot> {
        self.slots.get(index)
    }

    pub fn slot_mut(&mut self, index: usize) -> Option<&mut InventorySlot> {
        self.slots.get_mut(index)
    }

    /// Lowest-index empty slot.
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(InventorySlot::is_empty)
    }

    pub fn used_slots(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.first_empty().is_none()
    }

    /// Empties every slot; allow-lists are part of the layout and survive.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(InventorySlot::clear);
    }

    /// Copies contents from `loaded` slot-by-slot.
    ///
    /// Only the first `min(loaded, live)` slots are overwritten; live slots
    /// past a shorter save keep their contents. Allow-lists of the live
    /// container are kept.
    pub fn merge_from(&mut self, loaded: InventoryContainer) -> MergeReport {
        let loaded_len = loaded.slots.len();
        let restored = loaded_len.min(self.slots.len());

        for (live, saved) in self.slots.iter_mut().zip(loaded.slots) {
            live.update(saved.item, saved.quantity);
        }

        MergeReport {
            restored,
            lost: loaded_len - restored,
        }
    }

    /// One signature line per slot.
    pub fn dump(&self, verbose: bool) -> String {
        let mut out = format!(
            "INV ({} slot{}):\n",
            self.slots.len(),
            if self.slots.len() == 1 { "" } else { "s" }
        );
        for slot in &self.slots {
            out.push('\t');
            out.push_str(&slot.signature(verbose));
            out.push('\n');
        }
        out
    }
}

impl Default for InventoryContainer {
    fn default() -> Self {
        Self::new(InventoryConfig::DEFAULT_CAPACITY)
    }
}
