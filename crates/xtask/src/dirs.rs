//! Platform-specific directory utilities
//!
//! Resolves the same locations the runtime uses, honoring the
//! `INVENTORY_*` environment overrides.

use std::path::PathBuf;

use inventory_runtime::RuntimeConfig;

/// Directory holding log files.
pub fn log_dir() -> PathBuf {
    inventory_runtime::config::default_log_dir()
}

/// Directory holding inventory saves (`INVENTORY_SAVE_DIR` or the platform data dir).
pub fn data_dir() -> PathBuf {
    RuntimeConfig::from_env().save_dir
}

/// Full path of the configured save file.
pub fn save_file() -> PathBuf {
    RuntimeConfig::from_env().save_file()
}
