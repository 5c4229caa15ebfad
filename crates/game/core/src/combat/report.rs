//! Attack report types.

use crate::character::Character;
use crate::items::Item;

/// How an attack was delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum AttackStyle {
    /// Physical attack with an equipped weapon.
    Armed,
    /// Physical attack with bare hands.
    Unarmed,
    /// Spell attack driven by intellect.
    Arcane,
    /// Any other policy (custom strategies).
    Other,
}

/// Result of a single attack.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackReport {
    pub attacker: String,
    pub target: String,
    pub style: AttackStyle,

    /// Name of the weapon used, for armed attacks.
    pub weapon: Option<String>,

    /// Damage computed by the strategy (may be negative).
    pub damage: i32,

    /// Damage actually subtracted from the target's health.
    pub applied: i32,

    /// Target health after the attack. May be negative.
    pub target_health: i32,
    pub target_max_health: i32,

    /// True when this attack took the target from alive to dead.
    pub target_defeated: bool,
}

impl AttackReport {
    /// Apply `damage` to `target` and record the outcome.
    pub fn apply(
        attacker: &Character,
        target: &mut Character,
        style: AttackStyle,
        weapon: Option<&Item>,
        damage: i32,
    ) -> Self {
        let was_alive = target.is_alive();
        let applied = target.receive_damage(damage);

        Self {
            attacker: attacker.name.clone(),
            target: target.name.clone(),
            style,
            weapon: weapon.map(|item| item.name.clone()),
            damage,
            applied,
            target_health: target.attributes.current_health,
            target_max_health: target.attributes.max_health,
            target_defeated: was_alive && !target.is_alive(),
        }
    }
}
