//! Attribute set - the five core attributes plus the derived health meter.
//!
//! Health maximum is never adjusted incrementally. Whenever vitality changes
//! it is recomputed from scratch:
//!
//! `max_health = 20 + 5 × vitality`

use core::fmt;

use crate::config::GameConfig;

/// Enum representing individual attributes.
///
/// Used to address a single dimension of an [`AttributeSet`] and to iterate
/// over all five in a fixed order.
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
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AttributeKind {
    /// Physical strength, drives weapon and unarmed damage.
    Power,
    /// Arcane aptitude, drives spell damage.
    Intellect,
    Agility,
    /// Constitution, drives maximum health.
    Vitality,
    Luck,
}

impl AttributeKind {
    /// Short label used on character sheets.
    pub const fn abbreviation(&self) -> &'static str {
        match self {
            Self::Power => "PWR",
            Self::Intellect => "INT",
            Self::Agility => "AGI",
            Self::Vitality => "VIT",
            Self::Luck => "LCK",
        }
    }
}

/// The five attributes of a character and its health meter.
///
/// Values are signed: a lineage bonus may push an attribute below zero and
/// health keeps going negative once a character falls.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeSet {
    pub power: i32,
    pub intellect: i32,
    pub agility: i32,
    pub vitality: i32,
    pub luck: i32,
    pub max_health: i32,
    pub current_health: i32,
}

impl AttributeSet {
    /// Create an attribute set with health derived from `vitality`.
    pub fn new(power: i32, intellect: i32, agility: i32, vitality: i32, luck: i32) -> Self {
        let max_health = Self::health_for_vitality(vitality);
        Self {
            power,
            intellect,
            agility,
            vitality,
            luck,
            max_health,
            current_health: max_health,
        }
    }

    /// All attributes zero, health at the base value.
    pub fn zero() -> Self {
        Self::new(0, 0, 0, 0, 0)
    }

    /// Maximum health for a given vitality.
    pub const fn health_for_vitality(vitality: i32) -> i32 {
        GameConfig::BASE_HEALTH.saturating_add(GameConfig::HEALTH_PER_VITALITY.saturating_mul(vitality))
    }

    /// Get the value of a single attribute.
    pub fn get(&self, kind: AttributeKind) -> i32 {
        match kind {
            AttributeKind::Power => self.power,
            AttributeKind::Intellect => self.intellect,
            AttributeKind::Agility => self.agility,
            AttributeKind::Vitality => self.vitality,
            AttributeKind::Luck => self.luck,
        }
    }

    fn get_mut(&mut self, kind: AttributeKind) -> &mut i32 {
        match kind {
            AttributeKind::Power => &mut self.power,
            AttributeKind::Intellect => &mut self.intellect,
            AttributeKind::Agility => &mut self.agility,
            AttributeKind::Vitality => &mut self.vitality,
            AttributeKind::Luck => &mut self.luck,
        }
    }

    /// Add `bonus` to every attribute, then recompute health.
    ///
    /// Only the five attribute fields of `bonus` are read. Results are not
    /// floored and health is reset to full, discarding any damage taken.
    pub fn apply_bonus(&mut self, bonus: &AttributeSet) {
        use strum::IntoEnumIterator;

        for kind in AttributeKind::iter() {
            let value = self.get_mut(kind);
            *value = value.saturating_add(bonus.get(kind));
        }
        self.recompute_health();
    }

    /// Recompute maximum health from vitality and refill current health.
    pub fn recompute_health(&mut self) {
        self.max_health = Self::health_for_vitality(self.vitality);
        self.current_health = self.max_health;
    }

    /// Current health clamped at zero, for display.
    pub fn displayed_health(&self) -> i32 {
        self.current_health.max(0)
    }
}

impl Default for AttributeSet {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use strum::IntoEnumIterator;

        for (index, kind) in AttributeKind::iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}:{}", kind.abbreviation(), self.get(kind))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_derives_from_vitality() {
        for vitality in [0, 1, 8, 10, 50] {
            let attrs = AttributeSet::new(0, 0, 0, vitality, 0);
            assert_eq!(attrs.max_health, 20 + 5 * vitality);
            assert_eq!(attrs.current_health, attrs.max_health);
        }
    }

    #[test]
    fn zero_set_has_base_health() {
        let attrs = AttributeSet::default();
        assert_eq!(attrs.power, 0);
        assert_eq!(attrs.max_health, 20);
    }

    #[test]
    fn bonus_adds_per_dimension_and_recomputes_health() {
        let mut attrs = AttributeSet::new(10, 4, 6, 8, 5);
        attrs.current_health = 3;

        attrs.apply_bonus(&AttributeSet::new(2, 0, 0, 2, -1));

        assert_eq!(attrs.power, 12);
        assert_eq!(attrs.intellect, 4);
        assert_eq!(attrs.vitality, 10);
        assert_eq!(attrs.luck, 4);
        assert_eq!(attrs.max_health, 70);
        assert_eq!(attrs.current_health, 70);
    }

    #[test]
    fn negative_bonus_is_not_floored() {
        let mut attrs = AttributeSet::new(1, 0, 0, 0, 0);
        attrs.apply_bonus(&AttributeSet::new(-3, 0, 0, -6, 0));

        assert_eq!(attrs.power, -2);
        assert_eq!(attrs.vitality, -6);
        assert_eq!(attrs.max_health, -10);
    }

    #[test]
    fn displayed_health_clamps_at_zero() {
        let mut attrs = AttributeSet::zero();
        attrs.current_health = -5;
        assert_eq!(attrs.displayed_health(), 0);
    }

    #[test]
    fn display_lists_all_attributes() {
        let attrs = AttributeSet::new(10, 4, 6, 8, 5);
        assert_eq!(attrs.to_string(), "PWR:10, INT:4, AGI:6, VIT:8, LCK:5");
    }

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("Vitality".parse::<AttributeKind>(), Ok(AttributeKind::Vitality));
        assert_eq!(AttributeKind::Power.as_ref(), "power");
    }
}
