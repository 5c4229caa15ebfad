//! Item model.
//!
//! # Design: Base + Kind Pattern
//!
//! - [`Item`] holds the fields every item shares (name, description, weight, rarity)
//! - [`ItemKind`] holds the specialization payload (weapon damage, potion healing)
//! - [`ItemCategory`] is derived from the kind, so it can never disagree with the payload

pub mod catalog;
pub mod inventory;

pub use catalog::{CatalogError, ItemCatalog, ItemSpec};
pub use inventory::Inventory;

use core::fmt;

/// How hard an item is to come by.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
}

/// Broad item grouping, used when requesting items from the catalog.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemCategory {
    Weapon,
    Potion,
    Generic,
}

/// Weapon-specific data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponData {
    pub damage: i32,
}

/// Potion-specific data.
///
/// Healing is carried but not consumed anywhere yet; there is no drink action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PotionData {
    pub heal: i32,
}

/// Item type with type-specific data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    Weapon(WeaponData),
    Potion(PotionData),
    Generic,
}

impl ItemKind {
    pub fn category(&self) -> ItemCategory {
        match self {
            Self::Weapon(_) => ItemCategory::Weapon,
            Self::Potion(_) => ItemCategory::Potion,
            Self::Generic => ItemCategory::Generic,
        }
    }
}

/// A carried item.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    pub description: String,
    pub weight: f32,
    pub rarity: Rarity,
    pub kind: ItemKind,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        weight: f32,
        rarity: Rarity,
        kind: ItemKind,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            weight,
            rarity,
            kind,
        }
    }

    pub fn category(&self) -> ItemCategory {
        self.kind.category()
    }

    /// Weapon payload, if this item is a weapon.
    pub fn as_weapon(&self) -> Option<&WeaponData> {
        match &self.kind {
            ItemKind::Weapon(weapon) => Some(weapon),
            _ => None,
        }
    }

    /// Potion payload, if this item is a potion.
    pub fn as_potion(&self) -> Option<&PotionData> {
        match &self.kind {
            ItemKind::Potion(potion) => Some(potion),
            _ => None,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ItemKind::Weapon(WeaponData { damage }) => {
                write!(f, "- {} (Damage: {}, {})", self.name, damage, self.rarity)
            }
            ItemKind::Potion(PotionData { heal }) => {
                write!(f, "- {} (Heal: {}, {})", self.name, heal, self.rarity)
            }
            ItemKind::Generic => write!(f, "- {} ({})", self.name, self.rarity),
        }
    }
}
