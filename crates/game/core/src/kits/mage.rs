//! Elf mage kit.

use super::ArchetypeKit;
use crate::character::{Archetype, Lineage};
use crate::items::{Item, ItemCatalog, ItemSpec, Rarity};
use crate::stats::AttributeSet;

#[derive(Clone, Copy, Debug, Default)]
pub struct MageKit;

impl ArchetypeKit for MageKit {
    fn produce_lineage(&self) -> Lineage {
        Lineage::new("Elf", AttributeSet::new(0, 2, 2, -1, 0))
    }

    fn produce_archetype(&self) -> Archetype {
        Archetype::new("Mage")
    }

    fn produce_base_attributes(&self) -> AttributeSet {
        AttributeSet::new(4, 32, 8, 5, 7)
    }

    fn produce_starting_equipment(&self) -> Vec<Item> {
        vec![ItemCatalog::weapon(
            ItemSpec::new("Mystic Staff", "Channels arcane power.")
                .weight(2.0)
                .rarity(Rarity::Uncommon)
                .magnitude(4),
        )]
    }
}
