//! Single storage cell of a container.

use crate::state::{ItemInstance, ItemType, ItemTypes};

/// Slot holding at most one (item, quantity) pair plus its type allow-list.
///
/// A slot is empty iff the item has no id OR the quantity is zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventorySlot {
    pub item: ItemInstance,
    pub quantity: u32,
    pub allowed: ItemTypes,
}

/// Movable part of a slot; the allow-list stays with the slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SlotContents {
    pub item: ItemInstance,
    pub quantity: u32,
}

impl InventorySlot {
    pub fn new(item: ItemInstance, quantity: u32) -> Self {
        Self {
            item,
            quantity,
            allowed: ItemTypes::empty(),
        }
    }

    /// An empty slot accepting only `allowed`.
    pub fn restricted(allowed: impl Into<ItemTypes>) -> Self {
        Self {
            allowed: allowed.into(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.item.id.is_none() || self.quantity == 0
    }

    /// Replaces item and quantity together.
    pub fn update(&mut self, item: ItemInstance, quantity: u32) {
        self.item = item;
        self.quantity = quantity;
    }

    /// Empties the slot (no item, quantity 0). The allow-list is kept.
    pub fn clear(&mut self) {
        self.item = ItemInstance::empty();
        self.quantity = 0;
    }

    /// Removes and returns the contents, leaving the slot empty.
    pub fn take(&mut self) -> SlotContents {
        let contents = SlotContents {
            item: std::mem::take(&mut self.item),
            quantity: self.quantity,
        };
        self.quantity = 0;
        contents
    }

    pub fn set_allowed(&mut self, allowed: impl Into<ItemTypes>) {
        self.allowed = allowed.into();
    }

    /// Whether an item of `incoming` type may be placed here.
    ///
    /// The sentinel blocks everything. Otherwise an incoming empty item
    /// (`Null`) is always fine, an empty list accepts any type, and a
    /// non-empty list must name the type.
    pub fn accepts(&self, incoming: ItemType) -> bool {
        if self.allowed.blocks_everything() {
            return false;
        }
        incoming == ItemType::Null || self.allowed.is_empty() || self.allowed.lists(incoming)
    }

    /// Exchanges contents with `other` in one step; allow-lists stay put.
    pub fn swap_contents(&mut self, other: &mut InventorySlot) {
        std::mem::swap(&mut self.item, &mut other.item);
        std::mem::swap(&mut self.quantity, &mut other.quantity);
    }

    /// `"<name>#<id> (<qty>)"`, with `" [<buffs>]"` when `verbose`.
    pub fn signature(&self, verbose: bool) -> String {
        let base = match self.item.id {
            Some(id) if !self.is_empty() => {
                format!("{}#{} ({})", self.item.name, id, self.quantity)
            }
            _ => "EMPTY#-1 (0)".to_string(),
        };
        if verbose {
            format!("{} {}", base, self.item.buff_signatures(false))
        } else {
            base
        }
    }
}
