//! Runtime errors
use inventory_core::{ErrorSeverity, InventoryError, InventoryFault, PickupError};

use crate::repository::RepositoryError;

/// Errors surfaced by [`InventorySession`](crate::InventorySession).
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Pickup(#[from] PickupError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// A load dropped slots that did not fit; saving now would make it permanent.
    #[error("last load lost {lost} saved slots; acknowledge the truncation before saving")]
    UnacknowledgedTruncation { lost: usize },

    #[error("no ground item with handle {0}")]
    UnknownGroundItem(u64),

    #[error("content error: {0}")]
    Content(String),
}

impl InventoryFault for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Inventory(err) => err.severity(),
            Self::Pickup(err) => err.severity(),
            Self::Repository(err) => err.severity(),
            Self::UnacknowledgedTruncation { .. } => ErrorSeverity::Validation,
            Self::UnknownGroundItem(_) => ErrorSeverity::Validation,
            Self::Content(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Inventory(err) => err.error_code(),
            Self::Pickup(err) => err.error_code(),
            Self::Repository(err) => err.error_code(),
            Self::UnacknowledgedTruncation { .. } => "RUNTIME_UNACKNOWLEDGED_TRUNCATION",
            Self::UnknownGroundItem(_) => "RUNTIME_UNKNOWN_GROUND_ITEM",
            Self::Content(_) => "RUNTIME_CONTENT",
        }
    }
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
