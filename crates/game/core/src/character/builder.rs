//! Staged character assembly.
//!
//! The builder owns one in-progress [`Character`] at a time. Setters may be
//! called in any order, any number of times; later calls overwrite earlier
//! ones. [`CharacterBuilder::get_character`] finalizes the character and
//! swaps in a fresh blank one, so the builder is immediately reusable and
//! never hands out the same partial state twice.
//!
//! # Finalization
//!
//! ```text
//! final[attr] = base[attr] + lineage.bonus[attr]     (no floor)
//! max_health  = 20 + 5 × final.vitality
//! current_health = max_health
//! ```
//!
//! Without a lineage, finalization leaves attributes untouched.

use crate::config::GameConfig;
use crate::items::Item;
use crate::stats::AttributeSet;

use super::{Archetype, Character, Lineage};

/// Fluent builder for [`Character`].
#[derive(Debug)]
pub struct CharacterBuilder {
    character: Character,
    inventory_capacity: usize,
}

impl CharacterBuilder {
    /// Builder using default configuration.
    pub fn new() -> Self {
        Self::with_config(&GameConfig::default())
    }

    /// Builder whose characters get the configured inventory capacity.
    pub fn with_config(config: &GameConfig) -> Self {
        let inventory_capacity = config.effective_inventory_capacity();
        Self {
            character: Character::blank(inventory_capacity),
            inventory_capacity,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.character.name = name.into();
        self
    }

    pub fn set_lineage(&mut self, lineage: Lineage) -> &mut Self {
        self.character.lineage = Some(lineage);
        self
    }

    pub fn set_archetype(&mut self, archetype: Archetype) -> &mut Self {
        self.character.archetype = Some(archetype);
        self
    }

    /// Replace the attribute set wholesale; health is derived from `vitality`.
    pub fn set_base_attributes(
        &mut self,
        power: i32,
        intellect: i32,
        agility: i32,
        vitality: i32,
        luck: i32,
    ) -> &mut Self {
        self.character.attributes = AttributeSet::new(power, intellect, agility, vitality, luck);
        self
    }

    /// Add an item to the starting inventory. Items past capacity are dropped.
    pub fn add_starting_item(&mut self, item: Item) -> &mut Self {
        let name = item.name.clone();
        if !self.character.inventory.add(item) {
            tracing::debug!(
                character = %self.character.name,
                item = %name,
                capacity = self.character.inventory.capacity(),
                "starting item dropped: inventory full"
            );
        }
        self
    }

    /// Finalize the in-progress character and reset the builder.
    pub fn get_character(&mut self) -> Character {
        let fresh = Character::blank(self.inventory_capacity);
        let mut character = std::mem::replace(&mut self.character, fresh);
        Self::apply_lineage_bonus(&mut character);

        tracing::debug!(
            character = %character.name,
            lineage = character.lineage.as_ref().map(|l| l.name.as_str()),
            archetype = character.archetype.as_ref().map(|a| a.name.as_str()),
            max_health = character.attributes.max_health,
            "character finalized"
        );
        character
    }

    fn apply_lineage_bonus(character: &mut Character) {
        if let Some(lineage) = &character.lineage {
            character.attributes.apply_bonus(&lineage.bonus);
        }
    }
}

impl Default for CharacterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
