/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Number of slots in a freshly built character's inventory.
    /// Clamped to [`GameConfig::MAX_INVENTORY_SLOTS`].
    pub inventory_capacity: usize,

    /// Upper bound on duel turns. `None` lets a duel run until someone falls.
    pub max_duel_turns: Option<u32>,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_INVENTORY_SLOTS: usize = 10;

    // ===== derived-stat rules =====
    /// Health every character has before vitality is considered.
    pub const BASE_HEALTH: i32 = 20;
    /// Health granted per point of vitality.
    pub const HEALTH_PER_VITALITY: i32 = 5;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_INVENTORY_CAPACITY: usize = Self::MAX_INVENTORY_SLOTS;

    pub fn new() -> Self {
        Self {
            inventory_capacity: Self::DEFAULT_INVENTORY_CAPACITY,
            max_duel_turns: None,
        }
    }

    pub fn with_max_duel_turns(mut self, max_duel_turns: u32) -> Self {
        self.max_duel_turns = Some(max_duel_turns);
        self
    }

    pub fn with_inventory_capacity(mut self, inventory_capacity: usize) -> Self {
        self.inventory_capacity = inventory_capacity;
        self
    }

    /// Effective inventory capacity after clamping to the slot ceiling.
    pub fn effective_inventory_capacity(&self) -> usize {
        self.inventory_capacity.min(Self::MAX_INVENTORY_SLOTS)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
