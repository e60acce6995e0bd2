use crate::state::{AttributeBuff, ItemId, ItemType};

/// Immutable template for an item kind.
///
/// Definitions are authored as data (see the content crate) and handed to the
/// [`ItemRegistry`](super::ItemRegistry), which assigns `id` at initialization.
///
/// # Stacking
///
/// `stackable` is the authored intent. Instances created from a definition
/// with buffs are never stackable unless `force_stackable_with_buffs` is set,
/// because rolled buffs make each unit unique.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    /// Assigned by the registry; never authored.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub id: Option<ItemId>,
    pub name: String,
    pub item_type: ItemType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sprite: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub buffs: Vec<AttributeBuff>,
    #[cfg_attr(feature = "serde", serde(default = "default_true"))]
    pub stackable: bool,
    #[cfg_attr(feature = "serde", serde(default = "default_true"))]
    pub droppable: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub force_stackable_with_buffs: bool,
}

#[cfg(feature = "serde")]
fn default_true() -> bool {
    true
}

impl ItemDefinition {
    pub fn new(name: impl Into<String>, item_type: ItemType) -> Self {
        Self {
            id: None,
            name: name.into(),
            item_type,
            sprite: None,
            description: String::new(),
            buffs: Vec::new(),
            stackable: true,
            droppable: true,
            force_stackable_with_buffs: false,
        }
    }

    pub fn with_buff(mut self, buff: AttributeBuff) -> Self {
        self.buffs.push(buff);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_sprite(mut self, sprite: impl Into<String>) -> Self {
        self.sprite = Some(sprite.into());
        self
    }

    pub fn stackable(mut self, stackable: bool) -> Self {
        self.stackable = stackable;
        self
    }

    pub fn droppable(mut self, droppable: bool) -> Self {
        self.droppable = droppable;
        self
    }

    pub fn force_stackable_with_buffs(mut self, force: bool) -> Self {
        self.force_stackable_with_buffs = force;
        self
    }
}
