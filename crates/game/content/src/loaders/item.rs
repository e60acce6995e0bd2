//! Item catalog loader.

use std::path::Path;

use inventory_core::ItemDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
///
/// Entries may be `None`: holes in the authored list are kept so that ids are
/// assigned exactly in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<Option<ItemDefinition>>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    ///
    /// Authored buff values are clamped into their `[min, max]` range.
    pub fn load(path: &Path) -> LoadResult<Vec<Option<ItemDefinition>>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse an item catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<Option<ItemDefinition>>> {
        let mut catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        for definition in catalog.items.iter_mut().flatten() {
            for buff in &mut definition.buffs {
                buff.set_value(buff.value());
            }
        }

        let holes = catalog.items.iter().filter(|entry| entry.is_none()).count();
        if holes > 0 {
            tracing::warn!("Item catalog contains {} empty entries", holes);
        }

        Ok(catalog.items)
    }
}
