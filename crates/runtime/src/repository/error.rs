//! Error types raised by repository implementations.

use inventory_core::{ErrorSeverity, InventoryFault};
use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("inventory repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("corrupted data: {0}")]
    CorruptedData(String),

    #[error("unsupported save format version {found} (supported: {supported})")]
    UnsupportedVersion { found: u16, supported: u16 },
}

impl InventoryFault for RepositoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Io(_) => ErrorSeverity::Recoverable,
            Self::LockPoisoned | Self::Serialization(_) => ErrorSeverity::Internal,
            Self::CorruptedData(_) | Self::UnsupportedVersion { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::LockPoisoned => "REPOSITORY_LOCK_POISONED",
            Self::Io(_) => "REPOSITORY_IO",
            Self::Serialization(_) => "REPOSITORY_SERIALIZATION",
            Self::CorruptedData(_) => "REPOSITORY_CORRUPTED_DATA",
            Self::UnsupportedVersion { .. } => "REPOSITORY_UNSUPPORTED_VERSION",
        }
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
