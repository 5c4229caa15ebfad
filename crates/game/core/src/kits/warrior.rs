//! Dwarf warrior kit.

use super::ArchetypeKit;
use crate::character::{Archetype, Lineage};
use crate::items::{Item, ItemCatalog, ItemSpec, Rarity};
use crate::stats::AttributeSet;

/// Sturdy melee fighter with an axe and a healing potion.
#[derive(Clone, Copy, Debug, Default)]
pub struct WarriorKit;

impl ArchetypeKit for WarriorKit {
    fn produce_lineage(&self) -> Lineage {
        Lineage::new("Dwarf", AttributeSet::new(2, 0, 0, 2, -1))
    }

    fn produce_archetype(&self) -> Archetype {
        Archetype::new("Warrior")
    }

    fn produce_base_attributes(&self) -> AttributeSet {
        AttributeSet::new(10, 4, 6, 8, 5)
    }

    fn produce_starting_equipment(&self) -> Vec<Item> {
        vec![
            ItemCatalog::weapon(
                ItemSpec::new("Dwarven Axe", "A sturdy axe.")
                    .weight(5.0)
                    .rarity(Rarity::Uncommon)
                    .magnitude(12),
            ),
            ItemCatalog::potion(
                ItemSpec::new("Minor Healing Potion", "Restores a little health.")
                    .weight(0.5)
                    .rarity(Rarity::Common)
                    .magnitude(20),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::CharacterBuilder;
    use crate::kits::assemble;

    #[test]
    fn dwarf_warrior_final_stats() {
        let warrior = assemble(&WarriorKit, "Ivar", &mut CharacterBuilder::new());

        assert_eq!(warrior.attributes.power, 12);
        assert_eq!(warrior.attributes.vitality, 10);
        assert_eq!(warrior.attributes.luck, 4);
        assert_eq!(warrior.attributes.max_health, 70);
        assert_eq!(warrior.attributes.current_health, 70);
        assert_eq!(warrior.lineage.as_ref().map(|l| l.name.as_str()), Some("Dwarf"));
    }

    #[test]
    fn warrior_wields_the_axe() {
        let warrior = assemble(&WarriorKit, "Ivar", &mut CharacterBuilder::new());

        let (item, weapon) = warrior.equipped_weapon().expect("axe in inventory");
        assert_eq!(item.name, "Dwarven Axe");
        assert_eq!(weapon.damage, 12);
        assert_eq!(warrior.inventory.len(), 2);
    }
}
