/// Inventory configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InventoryConfig {
    /// Number of slots in a freshly created container.
    pub capacity: usize,
    /// Dump every slot signature at debug level after each successful add.
    pub debug_on_add: bool,
}

impl InventoryConfig {
    // ===== compile-time constants =====
    /// Slot count of the player bag; fixed for the life of a save format version.
    pub const DEFAULT_CAPACITY: usize = 24;
    /// Slot count of the equipment layout (helmet, chest, weapon, shield, boots).
    pub const EQUIPMENT_SLOTS: usize = 5;
    /// Template used when no template is registered under an item's name.
    pub const DEFAULT_TEMPLATE_NAME: &'static str = "DefaultGroundItem";

    // ===== runtime-tunable defaults =====
    /// Seconds a dropped ground item refuses to be picked up again.
    pub const DEFAULT_PICKUP_DELAY_SECS: f32 = 3.0;

    pub fn new() -> Self {
        Self {
            capacity: Self::DEFAULT_CAPACITY,
            debug_on_add: false,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::new()
        }
    }

    pub fn debug_on_add(mut self, enabled: bool) -> Self {
        self.debug_on_add = enabled;
        self
    }
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self::new()
    }
}
