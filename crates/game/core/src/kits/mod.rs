//! Archetype kit providers.
//!
//! A kit supplies a coherent bundle for one archetype: lineage, archetype
//! label, base attributes, and starting equipment. Kits know nothing about
//! how the bundle is assembled; [`assemble`] feeds a kit through a
//! [`CharacterBuilder`].
//!
//! Adding an archetype means adding a new [`ArchetypeKit`] implementation.
//! Data-driven kits live in `game-content`.

pub mod mage;
pub mod warrior;

pub use mage::MageKit;
pub use warrior::WarriorKit;

use core::str::FromStr;

use crate::character::{Archetype, Character, CharacterBuilder, Lineage};
use crate::combat::StrategyKind;
use crate::error::SelectionError;
use crate::items::Item;
use crate::stats::AttributeSet;

/// Supplier of a character bundle.
pub trait ArchetypeKit {
    fn produce_lineage(&self) -> Lineage;

    fn produce_archetype(&self) -> Archetype;

    /// Base attributes before the lineage bonus. Health fields are ignored.
    fn produce_base_attributes(&self) -> AttributeSet;

    fn produce_starting_equipment(&self) -> Vec<Item>;
}

/// Build a named character from a kit.
///
/// The builder is left reset and ready for the next character.
pub fn assemble(
    kit: &(impl ArchetypeKit + ?Sized),
    name: impl Into<String>,
    builder: &mut CharacterBuilder,
) -> Character {
    let base = kit.produce_base_attributes();
    builder
        .set_name(name)
        .set_lineage(kit.produce_lineage())
        .set_archetype(kit.produce_archetype())
        .set_base_attributes(base.power, base.intellect, base.agility, base.vitality, base.luck);

    for item in kit.produce_starting_equipment() {
        builder.add_starting_item(item);
    }

    builder.get_character()
}

/// Built-in kits, selectable by name.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum KitKind {
    Warrior,
    Mage,
}

impl KitKind {
    pub const ALL: [Self; 2] = [Self::Warrior, Self::Mage];

    /// Parse a kit name, reporting unknown names as a [`SelectionError`].
    pub fn parse(name: &str) -> Result<Self, SelectionError> {
        Self::from_str(name).map_err(|_| SelectionError::UnknownKit(name.to_owned()))
    }

    pub fn provider(self) -> Box<dyn ArchetypeKit> {
        match self {
            Self::Warrior => Box::new(WarriorKit),
            Self::Mage => Box::new(MageKit),
        }
    }

    /// Strategy a character of this kit fights with unless told otherwise.
    pub const fn default_strategy(self) -> StrategyKind {
        match self {
            Self::Warrior => StrategyKind::Physical,
            Self::Mage => StrategyKind::Arcane,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assemble_leaves_builder_reset() {
        let mut builder = CharacterBuilder::new();
        let warrior = assemble(&WarriorKit, "Ivar", &mut builder);
        let blank = builder.get_character();

        assert_eq!(warrior.name, "Ivar");
        assert!(blank.name.is_empty());
        assert!(blank.inventory.is_empty());
    }

    #[test]
    fn one_builder_serves_both_kits() {
        let mut builder = CharacterBuilder::new();
        let warrior = assemble(&WarriorKit, "Ivar", &mut builder);
        let mage = assemble(&MageKit, "Gandalf", &mut builder);

        assert_eq!(warrior.attributes.power, 12);
        assert_eq!(mage.attributes.power, 4);
        assert_eq!(mage.inventory.len(), 1);
    }

    #[test]
    fn kit_kind_selects_provider() {
        let kit = KitKind::parse("Mage").expect("mage is built in");
        assert_eq!(kit.provider().produce_archetype().name, "Mage");
        assert_eq!(
            KitKind::parse("bard").unwrap_err(),
            SelectionError::UnknownKit("bard".into())
        );
        assert_eq!(KitKind::Warrior.default_strategy(), StrategyKind::Physical);
        assert_eq!(kit.default_strategy(), StrategyKind::Arcane);
    }

    #[test]
    fn assemble_accepts_trait_objects() {
        let mut builder = CharacterBuilder::new();
        let provider = KitKind::Warrior.provider();
        let character = assemble(provider.as_ref(), "Boxed", &mut builder);
        assert_eq!(character.archetype.map(|a| a.name), Some("Warrior".to_owned()));
    }
}
