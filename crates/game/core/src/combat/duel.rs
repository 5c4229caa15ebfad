//! Two-combatant turn loop.
//!
//! Turns alternate strictly (first, second, first, ...) starting with the
//! first combatant. Liveness is checked after every single attack, so a
//! combatant that falls never gets to retaliate.
//!
//! A strategy that keeps dealing zero damage would spin forever.
//! [`DuelConfig::max_turns`] is an explicit opt-in cap for callers that need
//! a bound; by default duels are unbounded.

use crate::character::Character;
use crate::config::GameConfig;

use super::report::AttackReport;

/// Which combatant, by position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }

    pub const fn opponent(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    /// Side acting on the given zero-based turn number.
    const fn for_turn(turn: u32) -> Self {
        if turn % 2 == 0 { Self::First } else { Self::Second }
    }
}

/// Duel tuning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DuelConfig {
    /// Stop after this many attacks even if both combatants stand.
    pub max_turns: Option<u32>,
}

impl DuelConfig {
    pub fn from_game_config(config: &GameConfig) -> Self {
        Self {
            max_turns: config.max_duel_turns,
        }
    }
}

/// One completed turn, handed to the duel observer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnRecord {
    /// One-based turn number.
    pub turn: u32,
    pub attacker: Side,
    /// `None` when the attacker had no strategy and could not act.
    pub report: Option<AttackReport>,
}

/// How a duel ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DuelOutcome {
    /// Exactly one combatant is still standing.
    Victory { winner: Side, turns: u32 },
    /// The turn cap was reached, or nobody was standing to begin with.
    Unresolved { turns: u32 },
}

impl DuelOutcome {
    pub fn winner(&self) -> Option<Side> {
        match self {
            Self::Victory { winner, .. } => Some(*winner),
            Self::Unresolved { .. } => None,
        }
    }

    pub fn turns(&self) -> u32 {
        match self {
            Self::Victory { turns, .. } | Self::Unresolved { turns } => *turns,
        }
    }
}

/// A fight between exactly two characters.
#[derive(Debug)]
pub struct Duel {
    combatants: [Character; 2],
    config: DuelConfig,
}

impl Duel {
    /// `first` acts first.
    pub fn new(first: Character, second: Character) -> Self {
        Self {
            combatants: [first, second],
            config: DuelConfig::default(),
        }
    }

    pub fn with_config(mut self, config: DuelConfig) -> Self {
        self.config = config;
        self
    }

    pub fn combatant(&self, side: Side) -> &Character {
        &self.combatants[side.index()]
    }

    pub fn combatants(&self) -> &[Character; 2] {
        &self.combatants
    }

    pub fn into_combatants(self) -> [Character; 2] {
        self.combatants
    }

    /// Run to completion.
    pub fn run(&mut self) -> DuelOutcome {
        self.run_with(|_| {})
    }

    /// Run to completion, calling `observer` after every attack.
    pub fn run_with<F>(&mut self, mut observer: F) -> DuelOutcome
    where
        F: FnMut(&TurnRecord),
    {
        let mut turns = 0u32;

        while self.both_alive() {
            if self.config.max_turns.is_some_and(|max| turns >= max) {
                tracing::warn!(turns, "duel stopped at turn cap");
                return DuelOutcome::Unresolved { turns };
            }

            let attacker = Side::for_turn(turns);
            let report = {
                let (actor, target) = self.split(attacker);
                actor.execute_attack(target)
            };
            turns += 1;

            tracing::debug!(
                turn = turns,
                attacker = %self.combatant(attacker).name,
                damage = report.as_ref().map(|r| r.applied),
                "turn resolved"
            );
            observer(&TurnRecord {
                turn: turns,
                attacker,
                report,
            });
        }

        let outcome = self.resolve(turns);
        match outcome.winner() {
            Some(winner) => {
                tracing::info!(winner = %self.combatant(winner).name, turns, "duel finished")
            }
            None => tracing::warn!(turns, "duel finished without a survivor"),
        }
        outcome
    }

    fn both_alive(&self) -> bool {
        self.combatants.iter().all(Character::is_alive)
    }

    fn resolve(&self, turns: u32) -> DuelOutcome {
        let [first, second] = &self.combatants;
        match (first.is_alive(), second.is_alive()) {
            (true, false) => DuelOutcome::Victory {
                winner: Side::First,
                turns,
            },
            (false, true) => DuelOutcome::Victory {
                winner: Side::Second,
                turns,
            },
            _ => DuelOutcome::Unresolved { turns },
        }
    }

    fn split(&mut self, attacker: Side) -> (&Character, &mut Character) {
        let [first, second] = &mut self.combatants;
        match attacker {
            Side::First => (&*first, second),
            Side::Second => (&*second, first),
        }
    }
}
