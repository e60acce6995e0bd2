//! Authoritative item catalogue.
//!
//! The registry owns every [`ItemDefinition`] in declaration order (null
//! entries included, exactly as authored) and hands out stable [`ItemId`]s.
//! It is constructed explicitly by the composition root and shared by
//! reference; there is no global instance.

use std::collections::HashMap;

use crate::env::ItemDefinition;
use crate::state::ItemId;

/// Catalogue resolving [`ItemId`]s back to definitions.
#[derive(Clone, Debug, Default)]
pub struct ItemRegistry {
    /// Declared entries; `None` marks a hole left in the authored list.
    entries: Vec<Option<ItemDefinition>>,
    /// `ids[id]` is the index into `entries` for that id.
    ids: Vec<usize>,
    by_name: HashMap<String, ItemId>,
}

impl ItemRegistry {
    /// Creates a registry and assigns ids immediately.
    pub fn new(entries: Vec<Option<ItemDefinition>>) -> Self {
        let mut registry = Self {
            entries,
            ids: Vec::new(),
            by_name: HashMap::new(),
        };
        registry.assign_ids();
        registry
    }

    /// Convenience constructor for catalogues without holes.
    pub fn from_definitions(definitions: impl IntoIterator<Item = ItemDefinition>) -> Self {
        Self::new(definitions.into_iter().map(Some).collect())
    }

    /// Assigns sequential ids starting at 0, skipping null entries.
    ///
    /// The mapping is rebuilt from scratch, so re-running is idempotent and no
    /// stale id from a previous run survives.
    pub fn assign_ids(&mut self) {
        self.ids.clear();
        self.by_name.clear();

        let mut next = 0u32;
        for (index, entry) in self.entries.iter_mut().enumerate() {
            let Some(definition) = entry else {
                continue;
            };
            let id = ItemId(next);
            definition.id = Some(id);
            self.ids.push(index);
            if self.by_name.insert(definition.name.clone(), id).is_some() {
                tracing::warn!(
                    "ItemRegistry: duplicate item name '{}', lookups by name resolve to id {}",
                    definition.name,
                    id
                );
            }
            next += 1;
        }

        tracing::debug!("ItemRegistry: assigned {} item ids", self.ids.len());
    }

    /// Number of assigned ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Resolves an id to its definition.
    ///
    /// Ids past the end are logged and yield `None`.
    pub fn resolve(&self, id: ItemId) -> Option<&ItemDefinition> {
        let Some(&index) = self.ids.get(id.0 as usize) else {
            tracing::warn!(
                "ItemRegistry: id {} exceeds registry length {}",
                id,
                self.ids.len()
            );
            return None;
        };
        self.entries[index].as_ref()
    }

    /// Resolves a raw persisted id. Negative ids mean "no item" and return
    /// `None` silently.
    pub fn resolve_raw(&self, raw: i64) -> Option<&ItemDefinition> {
        ItemId::from_raw(raw).and_then(|id| self.resolve(id))
    }

    pub fn contains_id(&self, id: ItemId) -> bool {
        (id.0 as usize) < self.ids.len()
    }

    /// Whether this exact definition is part of the catalogue.
    pub fn contains(&self, definition: &ItemDefinition) -> bool {
        self.id_of(definition).is_some()
    }

    /// Id assigned to `definition`, if it belongs to this registry.
    pub fn id_of(&self, definition: &ItemDefinition) -> Option<ItemId> {
        let id = *self.by_name.get(&definition.name)?;
        let stored = self.resolve(id)?;
        (stored.name == definition.name && stored.item_type == definition.item_type).then_some(id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&ItemDefinition> {
        self.by_name.get(name).and_then(|&id| self.resolve(id))
    }

    /// All registered definitions in id order.
    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.ids
            .iter()
            .filter_map(|&index| self.entries[index].as_ref())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    use super::*;
    use crate::state::ItemType;

    /// Counts `WARN` events seen by the subscriber.
    struct WarnCounter(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> Layer<S> for WarnCounter {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == tracing::Level::WARN {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn warnings_during(f: impl FnOnce()) -> usize {
        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(WarnCounter(Arc::clone(&count)));
        tracing::subscriber::with_default(subscriber, f);
        count.load(Ordering::SeqCst)
    }

    fn catalogue() -> ItemRegistry {
        ItemRegistry::new(vec![
            Some(ItemDefinition::new("Apple", ItemType::Food)),
            None,
            Some(ItemDefinition::new("Sword", ItemType::Weapon)),
            Some(ItemDefinition::new("Helm", ItemType::Helmet)),
        ])
    }

    #[test]
    fn ids_skip_null_entries() {
        let registry = catalogue();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.resolve(ItemId(0)).map(|d| d.name.as_str()), Some("Apple"));
        assert_eq!(registry.resolve(ItemId(1)).map(|d| d.name.as_str()), Some("Sword"));
        assert_eq!(registry.resolve(ItemId(2)).map(|d| d.name.as_str()), Some("Helm"));
        assert_eq!(registry.resolve(ItemId(1)).and_then(|d| d.id), Some(ItemId(1)));
    }

    #[test]
    fn assign_ids_is_idempotent() {
        let mut registry = catalogue();
        registry.assign_ids();
        registry.assign_ids();
        assert_eq!(registry.len(), 3);
        let ids: Vec<_> = registry.iter().filter_map(|d| d.id).collect();
        assert_eq!(ids, vec![ItemId(0), ItemId(1), ItemId(2)]);
    }

    #[test]
    fn out_of_range_and_negative_ids_resolve_to_none() {
        let registry = catalogue();
        assert!(registry.resolve(ItemId(3)).is_none());
        assert!(registry.resolve_raw(99).is_none());
        assert!(registry.resolve_raw(-1).is_none());
        assert!(registry.resolve_raw(2).is_some());
    }

    #[test]
    fn only_ids_past_the_end_are_logged() {
        let registry = catalogue();

        let warned = warnings_during(|| {
            assert!(registry.resolve(ItemId(3)).is_none());
        });
        assert_eq!(warned, 1);

        let warned = warnings_during(|| {
            assert!(registry.resolve_raw(-1).is_none());
            assert!(registry.resolve_raw(i64::MIN).is_none());
        });
        assert_eq!(warned, 0);

        let warned = warnings_during(|| {
            assert!(registry.resolve(ItemId(0)).is_some());
        });
        assert_eq!(warned, 0);
    }

    #[test]
    fn membership_queries() {
        let registry = catalogue();
        assert!(registry.contains_id(ItemId(2)));
        assert!(!registry.contains_id(ItemId(3)));

        let sword = ItemDefinition::new("Sword", ItemType::Weapon);
        assert!(registry.contains(&sword));
        assert_eq!(registry.id_of(&sword), Some(ItemId(1)));

        let stranger = ItemDefinition::new("Bow", ItemType::Weapon);
        assert!(!registry.contains(&stranger));
        assert_eq!(registry.find_by_name("Helm").and_then(|d| d.id), Some(ItemId(2)));
    }
}
