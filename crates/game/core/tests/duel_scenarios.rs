use game_core::{
    ArcaneAttack, AttributeSet, Character, CharacterBuilder, Duel, DuelOutcome, ItemCatalog,
    ItemSpec, Lineage, MageKit, PhysicalAttack, Side, StrategyKind, WarriorKit, assemble,
};

fn kit_duel(warrior_first: bool) -> (Duel, DuelOutcome) {
    let mut builder = CharacterBuilder::new();
    let mut warrior = assemble(&WarriorKit, "Ivar the Boneless", &mut builder);
    let mut mage = assemble(&MageKit, "Gandalf the Grey", &mut builder);
    warrior.attach_strategy(StrategyKind::Physical.into_strategy());
    mage.attach_strategy(StrategyKind::Arcane.into_strategy());

    let mut duel = if warrior_first {
        Duel::new(warrior, mage)
    } else {
        Duel::new(mage, warrior)
    };
    let outcome = duel.run();
    (duel, outcome)
}

#[test]
fn warrior_striking_first_wins_in_three_turns() {
    let (duel, outcome) = kit_duel(true);

    // Axe hits for 24, fireball for 68: mage 40 -> 16 -> -8, warrior 70 -> 2.
    assert_eq!(outcome, DuelOutcome::Victory { winner: Side::First, turns: 3 });
    assert_eq!(duel.combatant(Side::First).attributes.current_health, 2);
    assert_eq!(duel.combatant(Side::Second).attributes.current_health, -8);
}

#[test]
fn mage_striking_first_wins_in_three_turns() {
    let (duel, outcome) = kit_duel(false);

    assert_eq!(outcome.winner(), Some(Side::First));
    assert_eq!(outcome.turns(), 3);
    assert_eq!(duel.combatant(Side::First).attributes.current_health, 40 - 24);
    assert!(!duel.combatant(Side::Second).is_alive());
}

#[test]
fn physical_attack_with_weapon_deals_power_plus_weapon() {
    let mut builder = CharacterBuilder::new();
    let mut attacker = builder
        .set_name("Axeman")
        .set_base_attributes(12, 0, 0, 0, 0)
        .add_starting_item(ItemCatalog::weapon(ItemSpec::new("Axe", "").magnitude(12)))
        .get_character();
    attacker.attach_strategy(Box::new(PhysicalAttack));
    let mut target = builder.set_name("Dummy").set_base_attributes(0, 0, 0, 10, 0).get_character();

    let report = attacker.execute_attack(&mut target).expect("strategy attached");

    assert_eq!(report.applied, 24);
    assert_eq!(target.attributes.current_health, 70 - 24);
}

#[test]
fn arcane_attack_deals_double_intellect() {
    let mut builder = CharacterBuilder::new();
    let mut caster = builder.set_name("Caster").set_base_attributes(0, 32, 0, 0, 0).get_character();
    caster.attach_strategy(Box::new(ArcaneAttack));
    let mut target = builder.set_name("Dummy").set_base_attributes(0, 0, 0, 10, 0).get_character();

    caster.execute_attack(&mut target);

    assert_eq!(target.attributes.current_health, 70 - 64);
}

#[test]
fn orc_barbarian_custom_build() {
    let orc = Lineage::new("Orc", AttributeSet::new(3, 0, 0, -1, 0));
    let barbarian: Character = CharacterBuilder::new()
        .set_name("Grommash")
        .set_lineage(orc)
        .set_archetype(game_core::Archetype::new("Barbarian"))
        .set_base_attributes(12, 3, 6, 9, 4)
        .get_character();

    assert_eq!(barbarian.attributes.power, 15);
    assert_eq!(barbarian.attributes.vitality, 8);
    assert_eq!(barbarian.attributes.max_health, 60);
    assert!(barbarian.to_string().contains("Grommash | Orc Barbarian | HP: 60/60"));
}

#[test]
fn health_formula_holds_after_finalization() {
    let mut builder = CharacterBuilder::new();
    for vitality in 0..=40 {
        let character = builder
            .set_lineage(Lineage::new("Neutral", AttributeSet::zero()))
            .set_base_attributes(1, 1, 1, vitality, 1)
            .get_character();
        assert_eq!(character.attributes.max_health, 20 + 5 * vitality);
        assert_eq!(character.attributes.current_health, character.attributes.max_health);
    }
}
