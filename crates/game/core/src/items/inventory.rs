//! Bounded inventory.
//!
//! Storage is an [`ArrayVec`] sized to [`GameConfig::MAX_INVENTORY_SLOTS`];
//! each inventory may further restrict itself to a smaller capacity.

use core::fmt;

use arrayvec::ArrayVec;

use super::Item;
use crate::config::GameConfig;

/// Ordered item storage with a fixed capacity.
///
/// Insertion order is preserved and there is no removal operation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    items: ArrayVec<Item, { GameConfig::MAX_INVENTORY_SLOTS }>,
    capacity: usize,
}

impl Inventory {
    /// Create an empty inventory. `capacity` is clamped to the slot ceiling.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: ArrayVec::new(),
            capacity: capacity.min(GameConfig::MAX_INVENTORY_SLOTS),
        }
    }

    /// Append an item. Returns `false`, leaving contents untouched, when full.
    pub fn add(&mut self, item: Item) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Items in insertion order. Each call starts a fresh pass.
    pub fn items(&self) -> impl Iterator<Item = &Item> + '_ {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::with_capacity(GameConfig::DEFAULT_INVENTORY_CAPACITY)
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("Inventory: Empty");
        }
        write!(f, "Inventory ({}/{}):", self.len(), self.capacity)?;
        for item in self.items() {
            write!(f, "\n  {item}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{ItemKind, Rarity};

    fn trinket(name: &str) -> Item {
        Item::new(name, "", 0.1, Rarity::Common, ItemKind::Generic)
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut inventory = Inventory::with_capacity(3);
        assert!(inventory.add(trinket("a")));
        assert!(inventory.add(trinket("b")));

        let names: Vec<_> = inventory.items().map(|item| item.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn add_beyond_capacity_is_rejected_without_change() {
        let mut inventory = Inventory::with_capacity(2);
        assert!(inventory.add(trinket("a")));
        assert!(inventory.add(trinket("b")));
        let before = inventory.clone();

        assert!(!inventory.add(trinket("c")));
        assert_eq!(inventory, before);
        assert_eq!(inventory.len(), 2);
        assert!(inventory.is_full());
    }

    #[test]
    fn items_iterator_is_restartable() {
        let mut inventory = Inventory::default();
        inventory.add(trinket("a"));

        assert_eq!(inventory.items().count(), 1);
        assert_eq!(inventory.items().count(), 1);
    }

    #[test]
    fn capacity_is_clamped_to_slot_ceiling() {
        let inventory = Inventory::with_capacity(GameConfig::MAX_INVENTORY_SLOTS + 5);
        assert_eq!(inventory.capacity(), GameConfig::MAX_INVENTORY_SLOTS);
    }

    #[test]
    fn zero_capacity_rejects_everything() {
        let mut inventory = Inventory::with_capacity(0);
        assert!(!inventory.add(trinket("a")));
        assert!(inventory.is_empty());
    }

    #[test]
    fn display_lists_items() {
        let mut inventory = Inventory::with_capacity(4);
        assert_eq!(inventory.to_string(), "Inventory: Empty");

        inventory.add(trinket("rope"));
        assert_eq!(inventory.to_string(), "Inventory (1/4):\n  - rope (Common)");
    }
}
