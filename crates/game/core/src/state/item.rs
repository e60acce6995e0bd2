//! Item identity, item types, and concrete item instances.
//!
//! - [`ItemId`]: stable id assigned by the [`ItemRegistry`](crate::env::ItemRegistry)
//! - [`ItemType`] / [`ItemTypes`]: what kind of slot an item may occupy
//! - [`ItemInstance`]: a (possibly rolled) copy of a definition living in a slot

use bitflags::bitflags;

use crate::env::{BuffRng, ItemDefinition};
use crate::state::AttributeBuff;

/// Reference to an item definition held by the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub u32);

impl ItemId {
    /// Raw value used by persisted records, where `-1` means "no item".
    pub const NONE_RAW: i32 = -1;

    /// Converts a raw persisted id; every negative value means "no item".
    pub fn from_raw(raw: i64) -> Option<Self> {
        u32::try_from(raw).ok().map(Self)
    }

    /// Raw persisted form; fails for ids that do not fit a non-negative `i32`.
    pub fn to_raw(id: Option<Self>) -> Result<i32, core::num::TryFromIntError> {
        id.map_or(Ok(Self::NONE_RAW), |id| i32::try_from(id.0))
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Defines an item's type, and therefore which slots it can be swapped into.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum ItemType {
    /// No item, or an item without a type.
    #[default]
    Null,
    /// General item, usually stackable.
    Default,
    Shield,
    Weapon,
    Helmet,
    Chest,
    Boots,
    /// Consumable food.
    Food,
    /// Sentinel for allow-lists: the slot accepts nothing at all.
    NoItemTypesAllowed,
}

bitflags! {
    /// Allow-list of item types for a slot.
    ///
    /// Empty means "accepts any type"; [`ItemTypes::NO_ITEM_TYPES_ALLOWED`]
    /// means "accepts nothing" and overrides every other bit.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct ItemTypes: u16 {
        const NULL                  = 1 << 0;
        const DEFAULT               = 1 << 1;
        const SHIELD                = 1 << 2;
        const WEAPON                = 1 << 3;
        const HELMET                = 1 << 4;
        const CHEST                 = 1 << 5;
        const BOOTS                 = 1 << 6;
        const FOOD                  = 1 << 7;
        const NO_ITEM_TYPES_ALLOWED = 1 << 8;
    }
}

impl From<ItemType> for ItemTypes {
    fn from(item_type: ItemType) -> Self {
        match item_type {
            ItemType::Null => Self::NULL,
            ItemType::Default => Self::DEFAULT,
            ItemType::Shield => Self::SHIELD,
            ItemType::Weapon => Self::WEAPON,
            ItemType::Helmet => Self::HELMET,
            ItemType::Chest => Self::CHEST,
            ItemType::Boots => Self::BOOTS,
            ItemType::Food => Self::FOOD,
            ItemType::NoItemTypesAllowed => Self::NO_ITEM_TYPES_ALLOWED,
        }
    }
}

impl FromIterator<ItemType> for ItemTypes {
    fn from_iter<I: IntoIterator<Item = ItemType>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |acc, item_type| acc | Self::from(item_type))
    }
}

impl ItemTypes {
    /// Whether this list blocks every item type.
    pub fn blocks_everything(&self) -> bool {
        self.contains(Self::NO_ITEM_TYPES_ALLOWED)
    }

    /// Whether this list explicitly names `item_type`.
    pub fn lists(&self, item_type: ItemType) -> bool {
        self.contains(Self::from(item_type))
    }
}

/// Concrete item stored in a slot.
///
/// An instance with `id == None` is the empty item; it is never stackable.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemInstance {
    pub name: String,
    pub id: Option<ItemId>,
    pub buffs: Vec<AttributeBuff>,
    stackable: bool,
    pub droppable: bool,
    force_stackable_with_buffs: bool,
}

impl ItemInstance {
    /// The "no item" instance.
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            id: None,
            buffs: Vec::new(),
            stackable: false,
            droppable: true,
            force_stackable_with_buffs: false,
        }
    }

    /// Instantiates a definition.
    ///
    /// Buffs are copied from the definition; when `rng` is provided every buff
    /// value is re-rolled independently.
    pub fn from_definition(definition: &ItemDefinition, rng: Option<&mut dyn BuffRng>) -> Self {
        let buffs = match rng {
            Some(rng) => definition
                .buffs
                .iter()
                .map(|buff| {
                    let mut rolled = *buff;
                    rolled.reroll(&mut *rng);
                    rolled
                })
                .collect(),
            None => definition.buffs.clone(),
        };

        Self::new(
            definition.name.clone(),
            definition.id,
            buffs,
            definition.stackable,
            definition.droppable,
            definition.force_stackable_with_buffs,
        )
    }

    /// Builds an instance from raw parts, applying the stacking rules.
    pub fn new(
        name: impl Into<String>,
        id: Option<ItemId>,
        buffs: Vec<AttributeBuff>,
        stackable: bool,
        droppable: bool,
        force_stackable_with_buffs: bool,
    ) -> Self {
        let mut instance = Self {
            name: name.into(),
            id,
            buffs,
            stackable,
            droppable,
            force_stackable_with_buffs,
        };
        instance.stackable = instance.effective_stackable(stackable);
        instance
    }

    fn effective_stackable(&self, requested: bool) -> bool {
        if self.id.is_none() {
            return false;
        }
        if !self.buffs.is_empty() && !self.force_stackable_with_buffs {
            return false;
        }
        requested
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none()
    }

    pub fn is_stackable(&self) -> bool {
        self.stackable
    }

    pub fn force_stackable_with_buffs(&self) -> bool {
        self.force_stackable_with_buffs
    }

    /// `"[Agility: 3, Strength: 5]"`, or `"[no buffs]"`.
    pub fn buff_signatures(&self, verbose: bool) -> String {
        if self.buffs.is_empty() {
            return "[no buffs]".to_string();
        }
        let parts: Vec<String> = self.buffs.iter().map(|b| b.signature(verbose)).collect();
        format!("[{}]", parts.join(", "))
    }
}

impl Default for ItemInstance {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;
    use crate::state::Attribute;

    fn sword() -> ItemDefinition {
        let mut def = ItemDefinition::new("Sword", ItemType::Weapon)
            .with_buff(AttributeBuff::fixed(Attribute::Strength, 1, 10, 4));
        def.id = Some(ItemId(3));
        def
    }

    #[test]
    fn buffs_force_non_stackable() {
        let instance = ItemInstance::from_definition(&sword(), None);
        assert!(!instance.is_stackable());
        assert_eq!(instance.id, Some(ItemId(3)));
        assert_eq!(instance.buffs[0].value(), 4);
    }

    #[test]
    fn force_override_keeps_stackable() {
        let mut def = sword();
        def.force_stackable_with_buffs = true;
        let instance = ItemInstance::from_definition(&def, None);
        assert!(instance.is_stackable());
    }

    #[test]
    fn plain_item_is_stackable() {
        let mut def = ItemDefinition::new("Apple", ItemType::Food);
        def.id = Some(ItemId(0));
        assert!(ItemInstance::from_definition(&def, None).is_stackable());
    }

    #[test]
    fn empty_item_never_stackable() {
        let instance = ItemInstance::new("ghost", None, Vec::new(), true, true, true);
        assert!(!instance.is_stackable());
        assert!(instance.is_empty());
    }

    #[test]
    fn rolled_instances_draw_independently() {
        let def = sword();
        let mut rng = PcgRng::new(99);
        let a = ItemInstance::from_definition(&def, Some(&mut rng));
        let b = ItemInstance::from_definition(&def, Some(&mut rng));
        assert!((1..10).contains(&a.buffs[0].value()));
        assert!((1..10).contains(&b.buffs[0].value()));
        // definition untouched
        assert_eq!(def.buffs[0].value(), 4);
    }

    #[test]
    fn raw_id_conversion() {
        assert_eq!(ItemId::from_raw(-1), None);
        assert_eq!(ItemId::from_raw(-7), None);
        assert_eq!(ItemId::from_raw(5), Some(ItemId(5)));
        assert_eq!(ItemId::to_raw(None), Ok(-1));
        assert_eq!(ItemId::to_raw(Some(ItemId(12))), Ok(12));
        assert_eq!(ItemId::to_raw(Some(ItemId(i32::MAX as u32))), Ok(i32::MAX));
        assert!(ItemId::to_raw(Some(ItemId(i32::MAX as u32 + 1))).is_err());
    }

    #[test]
    fn allow_list_helpers() {
        let list: ItemTypes = [ItemType::Helmet, ItemType::Chest].into_iter().collect();
        assert!(list.lists(ItemType::Helmet));
        assert!(!list.lists(ItemType::Weapon));
        assert!(!list.blocks_everything());
        assert!(ItemTypes::from(ItemType::NoItemTypesAllowed).blocks_everything());
    }

    #[test]
    fn buff_signatures() {
        let instance = ItemInstance::from_definition(&sword(), None);
        assert_eq!(instance.buff_signatures(false), "[Strength: 4]");
        assert_eq!(ItemInstance::empty().buff_signatures(false), "[no buffs]");
    }
}
