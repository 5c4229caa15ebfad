//! Attack strategies.
//!
//! # Formulas
//!
//! ```text
//! Physical, armed:   damage = power + weapon.damage
//! Physical, unarmed: damage = floor(power / 2)
//! Arcane:            damage = intellect × 2
//! ```
//!
//! Strategies are stateless. They read the attacker and mutate only the
//! target's health.

use core::fmt;
use core::str::FromStr;

use crate::character::Character;
use crate::error::SelectionError;

use super::report::{AttackReport, AttackStyle};

/// Damage policy invoked once per attack action.
pub trait AttackStrategy: fmt::Debug + Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Compute damage from `attacker` and apply it to `target`.
    fn compute_and_apply(&self, attacker: &Character, target: &mut Character) -> AttackReport;
}

/// Strength-based attack, using the first weapon in the inventory if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PhysicalAttack;

impl PhysicalAttack {
    /// Damage without applying it.
    pub fn damage(attacker: &Character) -> i32 {
        let power = attacker.attributes.power;
        match attacker.equipped_weapon() {
            Some((_, weapon)) => power.saturating_add(weapon.damage),
            None => power.div_euclid(2),
        }
    }
}

impl AttackStrategy for PhysicalAttack {
    fn name(&self) -> &'static str {
        "physical"
    }

    fn compute_and_apply(&self, attacker: &Character, target: &mut Character) -> AttackReport {
        let damage = Self::damage(attacker);
        match attacker.equipped_weapon() {
            Some((item, _)) => {
                AttackReport::apply(attacker, target, AttackStyle::Armed, Some(item), damage)
            }
            None => AttackReport::apply(attacker, target, AttackStyle::Unarmed, None, damage),
        }
    }
}

/// Intellect-based spell attack. Ignores equipment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArcaneAttack;

impl ArcaneAttack {
    pub fn damage(attacker: &Character) -> i32 {
        attacker.attributes.intellect.saturating_mul(2)
    }
}

impl AttackStrategy for ArcaneAttack {
    fn name(&self) -> &'static str {
        "arcane"
    }

    fn compute_and_apply(&self, attacker: &Character, target: &mut Character) -> AttackReport {
        let damage = Self::damage(attacker);
        AttackReport::apply(attacker, target, AttackStyle::Arcane, None, damage)
    }
}

/// Built-in strategies, selectable by name.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StrategyKind {
    Physical,
    Arcane,
}

impl StrategyKind {
    /// Parse a strategy name, reporting unknown names as a [`SelectionError`].
    pub fn parse(name: &str) -> Result<Self, SelectionError> {
        Self::from_str(name).map_err(|_| SelectionError::UnknownStrategy(name.to_owned()))
    }

    pub fn into_strategy(self) -> Box<dyn AttackStrategy> {
        match self {
            Self::Physical => Box::new(PhysicalAttack),
            Self::Arcane => Box::new(ArcaneAttack),
        }
    }
}
