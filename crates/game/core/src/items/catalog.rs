//! Item catalog helper.
//!
//! Builds items from a flat [`ItemSpec`] plus a category. Typed constructors
//! cannot fail; [`ItemCatalog::create`] accepts the category by name and
//! rejects names it does not know.

use core::str::FromStr;

use super::{Item, ItemCategory, ItemKind, PotionData, Rarity, WeaponData};
use crate::error::{ErrorSeverity, GameError};

/// Errors raised by the item catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The requested category is not one the catalog can build.
    #[error("Unknown item category: {0}")]
    UnknownCategory(String),
}

impl GameError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownCategory(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCategory(_) => "CATALOG_UNKNOWN_CATEGORY",
        }
    }
}

/// Fields shared by every catalog request.
///
/// `magnitude` is the weapon damage or potion healing, and is ignored for
/// generic items.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSpec {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub weight: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rarity: Rarity,
    #[cfg_attr(feature = "serde", serde(default))]
    pub magnitude: i32,
}

impl ItemSpec {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            weight: 0.0,
            rarity: Rarity::Common,
            magnitude: 0,
        }
    }

    pub fn weight(mut self, weight: f32) -> Self {
        self.weight = weight;
        self
    }

    pub fn rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    pub fn magnitude(mut self, magnitude: i32) -> Self {
        self.magnitude = magnitude;
        self
    }
}

/// Stateless item factory.
pub struct ItemCatalog;

impl ItemCatalog {
    /// Build an item of a category given by name (`"weapon"`, `"potion"`, `"generic"`).
    pub fn create(category: &str, spec: ItemSpec) -> Result<Item, CatalogError> {
        let category = ItemCategory::from_str(category)
            .map_err(|_| CatalogError::UnknownCategory(category.to_owned()))?;
        Ok(Self::create_of(category, spec))
    }

    /// Build an item of a known category.
    pub fn create_of(category: ItemCategory, spec: ItemSpec) -> Item {
        match category {
            ItemCategory::Weapon => Self::weapon(spec),
            ItemCategory::Potion => Self::potion(spec),
            ItemCategory::Generic => Self::build(spec, ItemKind::Generic),
        }
    }

    pub fn weapon(spec: ItemSpec) -> Item {
        let damage = spec.magnitude;
        Self::build(spec, ItemKind::Weapon(WeaponData { damage }))
    }

    pub fn potion(spec: ItemSpec) -> Item {
        let heal = spec.magnitude;
        Self::build(spec, ItemKind::Potion(PotionData { heal }))
    }

    fn build(spec: ItemSpec, kind: ItemKind) -> Item {
        Item::new(spec.name, spec.description, spec.weight, spec.rarity, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axe_spec() -> ItemSpec {
        ItemSpec::new("Dwarven Axe", "A sturdy axe.")
            .weight(5.0)
            .rarity(Rarity::Uncommon)
            .magnitude(12)
    }

    #[test]
    fn create_weapon_by_name() {
        let item = ItemCatalog::create("weapon", axe_spec()).expect("weapon is a known category");

        assert_eq!(item.name, "Dwarven Axe");
        assert_eq!(item.rarity, Rarity::Uncommon);
        assert_eq!(item.as_weapon(), Some(&WeaponData { damage: 12 }));
    }

    #[test]
    fn category_names_are_case_insensitive() {
        let item = ItemCatalog::create("Potion", ItemSpec::new("Tonic", "").magnitude(20))
            .expect("potion is a known category");
        assert_eq!(item.as_potion(), Some(&PotionData { heal: 20 }));
    }

    #[test]
    fn generic_ignores_magnitude() {
        let item = ItemCatalog::create_of(ItemCategory::Generic, ItemSpec::new("Rope", "").magnitude(9));
        assert_eq!(item.kind, ItemKind::Generic);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = ItemCatalog::create("shield", axe_spec()).unwrap_err();

        assert_eq!(err, CatalogError::UnknownCategory("shield".into()));
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(err.error_code(), "CATALOG_UNKNOWN_CATEGORY");
        assert_eq!(err.to_string(), "Unknown item category: shield");
    }
}
