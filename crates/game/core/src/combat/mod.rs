//! Combat resolution system.
//!
//! All combat logic is deterministic: damage is a pure function of the
//! attacker's attributes and equipment, and the only side effect of an
//! attack is a reduction of the target's health.
//!
//! # Core Pieces
//!
//! - [`AttackStrategy`]: pluggable damage policy attached to a character
//! - [`AttackReport`]: what a single attack did
//! - [`Duel`]: strictly alternating two-combatant loop

pub mod duel;
pub mod report;
pub mod strategy;

pub use duel::{Duel, DuelConfig, DuelOutcome, Side, TurnRecord};
pub use report::{AttackReport, AttackStyle};
pub use strategy::{ArcaneAttack, AttackStrategy, PhysicalAttack, StrategyKind};
