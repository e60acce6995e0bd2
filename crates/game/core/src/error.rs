//! Common error infrastructure for inventory-core.
//!
//! Domain errors ([`InventoryError`](crate::engine::InventoryError),
//! [`PickupError`](crate::engine::PickupError)) live next to the operations that
//! raise them. This module provides the classification shared by all of them.
//!
//! # Design Principles
//!
//! - **Type Safety**: each operation family has its own error enum
//! - **No Partial Mutation**: an `Err` always means the container is unchanged
//! - **Severity Classification**: callers pick a recovery strategy from [`ErrorSeverity`]

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: expected gameplay conditions (full bag, disallowed swap)
/// - **Validation**: malformed input that should not be retried unchanged
/// - **Internal**: unexpected state, such as an id missing from the registry
/// - **Fatal**: persisted state cannot be trusted
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry later or with a different slot.
    ///
    /// Examples: inventory full, slot rejects the item type
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: zero quantity, slot index out of range
    Validation,

    /// Internal error - references that should resolve but do not.
    ///
    /// Examples: item id unknown to the registry
    Internal,

    /// Fatal error - persisted state is corrupted, cannot continue.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug or corrupted data.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all inventory errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait InventoryFault: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log fields and test assertions.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_classification() {
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(!ErrorSeverity::Validation.is_recoverable());
        assert!(ErrorSeverity::Internal.is_internal());
        assert!(ErrorSeverity::Fatal.is_internal());
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
    }
}
