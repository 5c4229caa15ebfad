//! Character entity.
//!
//! A [`Character`] aggregates identity, lineage, archetype, attributes,
//! inventory, and an optional attack strategy. Characters are assembled by
//! [`CharacterBuilder`]; after that the only state that changes is health,
//! through [`Character::receive_damage`].

pub mod builder;
pub mod sheet;

pub use builder::CharacterBuilder;
pub use sheet::CharacterSheet;

use core::fmt;

use crate::combat::{AttackReport, AttackStrategy};
use crate::config::GameConfig;
use crate::items::{Inventory, Item, WeaponData};
use crate::stats::AttributeSet;

/// Heritage of a character. The bonus is added to base attributes once, at build time.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lineage {
    pub name: String,
    pub bonus: AttributeSet,
}

impl Lineage {
    pub fn new(name: impl Into<String>, bonus: AttributeSet) -> Self {
        Self {
            name: name.into(),
            bonus,
        }
    }
}

/// Class label. Carries no behavior of its own.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Archetype {
    pub name: String,
}

impl Archetype {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A finished (or in-progress, while owned by the builder) character.
#[derive(Debug)]
pub struct Character {
    pub name: String,
    pub lineage: Option<Lineage>,
    pub archetype: Option<Archetype>,
    pub attributes: AttributeSet,
    pub inventory: Inventory,
    strategy: Option<Box<dyn AttackStrategy>>,
}

impl Character {
    /// Nameless character with zeroed attributes and an empty inventory.
    pub fn blank(inventory_capacity: usize) -> Self {
        Self {
            name: String::new(),
            lineage: None,
            archetype: None,
            attributes: AttributeSet::zero(),
            inventory: Inventory::with_capacity(inventory_capacity),
            strategy: None,
        }
    }

    /// Attach an attack strategy, replacing any previous one.
    pub fn attach_strategy(&mut self, strategy: Box<dyn AttackStrategy>) {
        tracing::debug!(character = %self.name, strategy = strategy.name(), "strategy attached");
        self.strategy = Some(strategy);
    }

    /// Name of the attached strategy, if any.
    pub fn strategy_name(&self) -> Option<&'static str> {
        self.strategy.as_ref().map(|strategy| strategy.name())
    }

    /// Attack `target` with the attached strategy.
    ///
    /// Without a strategy nothing happens and `None` is returned.
    pub fn execute_attack(&self, target: &mut Character) -> Option<AttackReport> {
        let Some(strategy) = self.strategy.as_ref() else {
            tracing::warn!(character = %self.name, "cannot attack: no strategy attached");
            return None;
        };
        Some(strategy.compute_and_apply(self, target))
    }

    /// Reduce current health. Negative amounts count as zero.
    ///
    /// Returns the damage actually applied.
    pub fn receive_damage(&mut self, amount: i32) -> i32 {
        let was_alive = self.is_alive();
        let applied = amount.max(0);
        self.attributes.current_health = self.attributes.current_health.saturating_sub(applied);

        tracing::debug!(
            character = %self.name,
            damage = applied,
            health = self.attributes.current_health,
            max_health = self.attributes.max_health,
            "damage received"
        );
        if was_alive && !self.is_alive() {
            tracing::info!(character = %self.name, "defeated");
        }
        applied
    }

    pub fn is_alive(&self) -> bool {
        self.attributes.current_health > 0
    }

    /// The first weapon in the inventory, in insertion order.
    pub fn equipped_weapon(&self) -> Option<(&Item, &WeaponData)> {
        self.inventory
            .items()
            .find_map(|item| item.as_weapon().map(|weapon| (item, weapon)))
    }

    /// Render-ready view of this character.
    pub fn sheet(&self) -> CharacterSheet<'_> {
        CharacterSheet::new(self)
    }
}

impl Default for Character {
    fn default() -> Self {
        Self::blank(GameConfig::DEFAULT_INVENTORY_CAPACITY)
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.sheet().fmt(f)
    }
}
