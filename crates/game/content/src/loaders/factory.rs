//! Content factory for building the item registry from data files.

use std::path::{Path, PathBuf};

use inventory_core::{InventoryConfig, ItemRegistry};

use crate::loaders::{ConfigLoader, ItemLoader, LoadResult};

/// Content factory that loads all inventory content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── items.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load inventory configuration from `config.toml`.
    ///
    /// A missing file yields the default configuration.
    pub fn load_config(&self) -> LoadResult<InventoryConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(InventoryConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the item catalog from `items.ron` and assign ids.
    pub fn load_registry(&self) -> LoadResult<ItemRegistry> {
        Self::registry_from(&self.data_dir.join("items.ron"))
    }

    /// Load an item registry from an arbitrary catalog file.
    pub fn registry_from(path: &Path) -> LoadResult<ItemRegistry> {
        let entries = ItemLoader::load(path)?;
        let registry = ItemRegistry::new(entries);
        tracing::debug!(
            "Loaded {} item definitions from {}",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
