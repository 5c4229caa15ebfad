//! Character sheet rendering.
//!
//! The sheet is a pure function of character state. Health is shown clamped
//! at zero even though it may be negative internally.

use core::fmt;

use super::Character;

const RULE_HEAVY: &str = "========================================";
const RULE_LIGHT: &str = "----------------------------------------";

/// Borrowed view that renders a [`Character`] as a text block.
#[derive(Clone, Copy, Debug)]
pub struct CharacterSheet<'a> {
    character: &'a Character,
}

impl<'a> CharacterSheet<'a> {
    pub fn new(character: &'a Character) -> Self {
        Self { character }
    }
}

impl fmt::Display for CharacterSheet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.character;
        let lineage = c.lineage.as_ref().map_or("", |lineage| lineage.name.as_str());
        let archetype = c.archetype.as_ref().map_or("", |archetype| archetype.name.as_str());

        writeln!(f, "{RULE_HEAVY}")?;
        writeln!(
            f,
            " {} | {} {} | HP: {}/{}",
            c.name,
            lineage,
            archetype,
            c.attributes.displayed_health(),
            c.attributes.max_health
        )?;
        writeln!(f, "{RULE_LIGHT}")?;
        writeln!(f, " Attributes: [{}]", c.attributes)?;
        writeln!(f, "{RULE_LIGHT}")?;
        writeln!(f, "{}", c.inventory)?;
        writeln!(f, "{RULE_HEAVY}")
    }
}
