//! Runtime configuration structures and loaders.
use std::env;
use std::path::{Path, PathBuf};

use inventory_core::InventoryConfig;

/// Configuration required to assemble an [`InventorySession`](crate::InventorySession).
#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeConfig {
    /// Directory holding the save file.
    pub save_dir: PathBuf,
    /// Save file path relative to `save_dir`; a leading separator is allowed.
    pub save_path: String,
    pub inventory: InventoryConfig,
    /// RON item catalog; an empty registry is used when unset.
    pub item_catalog: Option<PathBuf>,
    /// Seconds before a dropped item can be picked up again.
    pub pickup_delay: f32,
    /// Fixed buff RNG seed; entropy when unset.
    pub seed: Option<u64>,
}

impl RuntimeConfig {
    pub const DEFAULT_SAVE_PATH: &'static str = "/inventory.save";

    pub fn new(save_dir: impl Into<PathBuf>) -> Self {
        Self {
            save_dir: save_dir.into(),
            save_path: Self::DEFAULT_SAVE_PATH.to_string(),
            inventory: InventoryConfig::default(),
            item_catalog: None,
            pickup_delay: InventoryConfig::DEFAULT_PICKUP_DELAY_SECS,
            seed: None,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `INVENTORY_SAVE_DIR` - Directory for the save file (default: platform data dir)
    /// - `INVENTORY_SAVE_PATH` - Save file name under the save dir (default: `/inventory.save`)
    /// - `INVENTORY_CAPACITY` - Slots in the bag (default: 24)
    /// - `INVENTORY_ITEM_CATALOG` - RON item catalog path (default: none)
    /// - `INVENTORY_PICKUP_DELAY` - Drop cooldown in seconds (default: 3.0)
    /// - `INVENTORY_SEED` - Buff RNG seed (default: entropy)
    /// - `INVENTORY_DEBUG_ON_ADD` - Dump the inventory after each add (default: false)
    pub fn from_env() -> Self {
        let save_dir = env::var("INVENTORY_SAVE_DIR")
            .ok()
            .map(PathBuf::from)
            .unwrap_or_else(default_save_dir);
        let mut config = Self::new(save_dir);

        if let Ok(save_path) = env::var("INVENTORY_SAVE_PATH") {
            config.save_path = save_path;
        }

        if let Some(capacity) = read_env::<usize>("INVENTORY_CAPACITY") {
            config.inventory.capacity = capacity.max(1);
        }

        config.item_catalog = env::var("INVENTORY_ITEM_CATALOG").ok().map(PathBuf::from);

        if let Some(delay) = read_env::<f32>("INVENTORY_PICKUP_DELAY")
            && delay.is_finite()
        {
            config.pickup_delay = delay.max(0.0);
        }

        config.seed = read_env::<u64>("INVENTORY_SEED");

        if let Some(enable) = read_env::<bool>("INVENTORY_DEBUG_ON_ADD") {
            config.inventory.debug_on_add = enable;
        } else if env::var("INVENTORY_DEBUG_ON_ADD").is_ok() {
            // Also accept just setting the variable without value as "true"
            config.inventory.debug_on_add = true;
        }

        config
    }

    /// Full path of the save file.
    pub fn save_file(&self) -> PathBuf {
        self.save_dir
            .join(crate::repository::normalize_save_path(&self.save_path))
    }

    pub fn save_dir(&self) -> &Path {
        &self.save_dir
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new(default_save_dir())
    }
}

/// Get the platform-specific data directory for inventory saves.
///
/// Follows platform conventions:
/// - macOS: `~/Library/Application Support/inventory`
/// - Linux: `~/.local/share/inventory` (or `$XDG_DATA_HOME/inventory`)
/// - Windows: `%APPDATA%\inventory`
/// - Fallback: `./save_data`
pub fn default_save_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "inventory")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

/// Get the platform-specific log directory.
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "inventory")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/inventory"))
        .join("logs")
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_file_joins_relative_path() {
        let mut config = RuntimeConfig::new("/data");
        assert_eq!(config.save_file(), PathBuf::from("/data/inventory.save"));

        config.save_path = "slots/bag.save".into();
        assert_eq!(config.save_file(), PathBuf::from("/data/slots/bag.save"));
    }

    #[test]
    fn defaults_match_inventory_constants() {
        let config = RuntimeConfig::new("/data");
        assert_eq!(config.inventory.capacity, 24);
        assert_eq!(config.pickup_delay, 3.0);
        assert!(config.seed.is_none());
        assert!(!config.inventory.debug_on_add);
    }
}
