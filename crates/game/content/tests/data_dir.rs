use std::fs;
use std::path::PathBuf;

use game_content::ContentFactory;
use game_core::{CharacterBuilder, MageKit, StrategyKind, WarriorKit, assemble};

fn shipped_data() -> ContentFactory {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../data");
    ContentFactory::new(dir)
}

#[test]
fn shipped_kits_match_built_in_kits() {
    let factory = shipped_data();
    let mut builder = CharacterBuilder::new();

    let loaded_warrior = assemble(&factory.load_kit("warrior").unwrap(), "Ivar", &mut builder);
    let built_in_warrior = assemble(&WarriorKit, "Ivar", &mut builder);
    assert_eq!(loaded_warrior.attributes, built_in_warrior.attributes);
    assert_eq!(loaded_warrior.inventory, built_in_warrior.inventory);

    let loaded_mage = assemble(&factory.load_kit("mage").unwrap(), "Gandalf", &mut builder);
    let built_in_mage = assemble(&MageKit, "Gandalf", &mut builder);
    assert_eq!(loaded_mage.attributes, built_in_mage.attributes);
    assert_eq!(loaded_mage.inventory, built_in_mage.inventory);
}

#[test]
fn shipped_kit_listing_and_config() {
    let factory = shipped_data();

    assert_eq!(factory.kit_names().unwrap(), ["barbarian", "mage", "warrior"]);

    let config = factory.load_config().unwrap();
    assert_eq!(config.inventory_capacity, 10);
    assert_eq!(config.max_duel_turns, None);
}

#[test]
fn barbarian_kit_fights_unarmed() {
    let kit = shipped_data().load_kit("barbarian").unwrap();
    assert_eq!(kit.strategy(), Some(StrategyKind::Physical));

    let orc = assemble(&kit, "Grommash", &mut CharacterBuilder::new());
    assert_eq!(orc.attributes.power, 15);
    assert!(orc.equipped_weapon().is_none());
}

#[test]
fn loads_from_a_temporary_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("kits")).unwrap();
    fs::write(dir.path().join("config.toml"), "max_duel_turns = 12\n").unwrap();
    fs::write(
        dir.path().join("kits/squire.ron"),
        r#"(lineage: (name: "Human"), archetype: "Squire", base: (power: 4, vitality: 2))"#,
    )
    .unwrap();
    fs::write(dir.path().join("kits/notes.txt"), "ignored").unwrap();

    let factory = ContentFactory::new(dir.path());

    assert_eq!(factory.kit_names().unwrap(), ["squire"]);
    assert_eq!(factory.load_config().unwrap().max_duel_turns, Some(12));

    let squire = assemble(&factory.load_kit("squire").unwrap(), "Tom", &mut CharacterBuilder::new());
    assert_eq!(squire.attributes.max_health, 30);
}

#[test]
fn invalid_kit_file_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("kits")).unwrap();
    fs::write(
        dir.path().join("kits/broken.ron"),
        r#"(lineage: (name: "Elf"), archetype: "Mage", items: [(category: "wand", name: "Twig")])"#,
    )
    .unwrap();

    let err = ContentFactory::new(dir.path()).load_kit("broken").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("broken.ron"));
    assert!(message.contains("Unknown item category: wand"));
}
