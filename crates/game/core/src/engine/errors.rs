//! Error types for inventory operations.

use crate::error::{ErrorSeverity, InventoryFault};
use crate::state::ItemId;

/// Errors surfaced by [`InventoryEngine`](super::InventoryEngine) commands.
///
/// Every variant guarantees that the container was left unchanged.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InventoryError {
    #[error("inventory is full ({capacity} slots)")]
    InventoryFull { capacity: usize },

    #[error("cannot add zero items")]
    ZeroQuantity,

    #[error("cannot add the empty item")]
    EmptyItem,

    #[error("slot {slot} holds {current}, adding {added} overflows")]
    QuantityOverflow { slot: usize, current: u32, added: u32 },

    #[error("slot index {index} out of range (capacity {capacity})")]
    SlotOutOfRange { index: usize, capacity: usize },

    #[error("slots {first} and {second} do not accept each other's item types")]
    SwapRejected { first: usize, second: usize },

    #[error("item id {id} is not in the registry")]
    UnknownItem { id: ItemId },
}

impl InventoryFault for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InventoryFull { .. } | Self::SwapRejected { .. } => ErrorSeverity::Recoverable,
            Self::ZeroQuantity
            | Self::EmptyItem
            | Self::QuantityOverflow { .. }
            | Self::SlotOutOfRange { .. } => ErrorSeverity::Validation,
            Self::UnknownItem { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InventoryFull { .. } => "INVENTORY_FULL",
            Self::ZeroQuantity => "INVENTORY_ZERO_QUANTITY",
            Self::EmptyItem => "INVENTORY_EMPTY_ITEM",
            Self::QuantityOverflow { .. } => "INVENTORY_QUANTITY_OVERFLOW",
            Self::SlotOutOfRange { .. } => "INVENTORY_SLOT_OUT_OF_RANGE",
            Self::SwapRejected { .. } => "INVENTORY_SWAP_REJECTED",
            Self::UnknownItem { .. } => "INVENTORY_UNKNOWN_ITEM",
        }
    }
}

/// Errors surfaced when picking up a ground item.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PickupError {
    #[error("ground item was already picked up")]
    AlreadyPickedUp,

    #[error("ground item is still on drop cooldown")]
    OnCooldown,

    #[error("ground item references id {id}, which is not in the registry")]
    NotInRegistry { id: ItemId },

    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

impl InventoryFault for PickupError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::AlreadyPickedUp | Self::OnCooldown => ErrorSeverity::Recoverable,
            Self::NotInRegistry { .. } => ErrorSeverity::Internal,
            Self::Inventory(inner) => inner.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyPickedUp => "PICKUP_ALREADY_PICKED_UP",
            Self::OnCooldown => "PICKUP_ON_COOLDOWN",
            Self::NotInRegistry { .. } => "PICKUP_NOT_IN_REGISTRY",
            Self::Inventory(inner) => inner.error_code(),
        }
    }
}
