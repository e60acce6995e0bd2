//! Data-driven item content and loaders.
//!
//! This crate houses authored inventory content and the loaders for its data files:
//! - Item catalogs (data-driven via RON)
//! - Inventory configuration (data-driven via TOML)
//!
//! Content is turned into an [`ItemRegistry`](inventory_core::ItemRegistry) by
//! [`ContentFactory`] and never appears in saved inventory state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, ItemCatalog, ItemLoader};
