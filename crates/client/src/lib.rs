//! Arena client: assembles two contenders from kits and narrates their duel.
//!
//! # Architecture
//!
//! ```text
//! Arena (composition root)
//!   ├─→ kits: built-in (game-core) or RON files (game-content)
//!   ├─→ CharacterBuilder + strategy selection
//!   ├─→ Duel (game-core)
//!   └─→ Narrator (any io::Write)
//! ```
//!
//! The arena owns pacing: the duel itself never sleeps, the narration
//! observer does.

mod builder;
pub mod config;
pub mod logging;
pub mod narration;

pub use builder::ArenaBuilder;
pub use config::ClientConfig;
pub use narration::Narrator;

use std::io::Write;
use std::path::PathBuf;
use std::thread;

use anyhow::{Context, Result};
use game_content::{ConfigLoader, ContentFactory};
use game_core::{
    ArchetypeKit, Character, CharacterBuilder, Duel, DuelConfig, DuelOutcome, GameConfig, KitKind,
    StrategyKind, assemble,
};

/// One side of the duel, by kit and name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contender {
    pub kit: String,
    pub name: String,
    /// Overrides the kit's default strategy.
    pub strategy: Option<String>,
}

impl Contender {
    pub fn new(kit: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kit: kit.into(),
            name: name.into(),
            strategy: None,
        }
    }

    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = Some(strategy.into());
        self
    }
}

/// Result of a finished arena run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaSummary {
    pub outcome: DuelOutcome,
    /// Name of the surviving contender.
    pub winner: Option<String>,
}

/// Two contenders and the settings they fight under.
pub struct Arena {
    first: Contender,
    second: Contender,
    config: ClientConfig,
}

impl Arena {
    pub fn builder() -> ArenaBuilder {
        ArenaBuilder::new()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Names of the kits contenders can pick from.
    pub fn kit_names(&self) -> Result<Vec<String>> {
        match &self.config.data_dir {
            Some(dir) => ContentFactory::new(dir).kit_names(),
            None => Ok(KitKind::ALL.iter().map(ToString::to_string).collect()),
        }
    }

    /// Assemble both contenders, print their sheets, and narrate the duel.
    ///
    /// # Errors
    ///
    /// Returns an error if a kit, strategy or configuration file cannot be
    /// resolved, or if writing to `out` fails.
    pub fn run<W: Write>(&self, out: W) -> Result<ArenaSummary> {
        let game_config = self.game_config()?;
        let mut builder = CharacterBuilder::with_config(&game_config);
        let first = self.prepare(&self.first, &mut builder)?;
        let second = self.prepare(&self.second, &mut builder)?;

        let mut narrator = Narrator::new(out);
        narrator.banner("Characters created")?;
        narrator.sheet(&first)?;
        narrator.sheet(&second)?;
        narrator.banner("The duel begins")?;

        let names = [first.name.clone(), second.name.clone()];
        let delay = self.config.turn_delay;
        let mut duel =
            Duel::new(first, second).with_config(DuelConfig::from_game_config(&game_config));
        tracing::info!(first = %names[0], second = %names[1], "duel started");

        let mut write_error = None;
        let outcome = duel.run_with(|record| {
            if write_error.is_some() {
                return;
            }
            if let Err(e) = narrator.turn(record, &names[record.attacker.index()]) {
                write_error = Some(e);
                return;
            }
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        });
        if let Some(e) = write_error {
            return Err(e).context("Failed to write duel narration");
        }

        narrator.banner("The duel is over")?;
        let winner = match outcome.winner() {
            Some(side) => {
                let champion = duel.combatant(side);
                narrator.winner(champion)?;
                Some(champion.name.clone())
            }
            None => {
                narrator.stalemate(outcome.turns())?;
                None
            }
        };

        Ok(ArenaSummary { outcome, winner })
    }

    /// Game configuration: explicit file, else `data_dir/config.toml`, else
    /// defaults. `max_turns` from the client configuration wins.
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = if let Some(path) = &self.config.config_file {
            ConfigLoader::load(path)?
        } else if let Some(path) = self.data_config_path().filter(|p| p.is_file()) {
            ConfigLoader::load(&path)?
        } else {
            GameConfig::default()
        };

        if let Some(max_turns) = self.config.max_turns {
            config.max_duel_turns = Some(max_turns);
        }
        tracing::debug!(?config, "game configuration resolved");
        Ok(config)
    }

    fn data_config_path(&self) -> Option<PathBuf> {
        self.config.data_dir.as_ref().map(|dir| dir.join("config.toml"))
    }

    fn prepare(&self, contender: &Contender, builder: &mut CharacterBuilder) -> Result<Character> {
        let (kit, default_strategy): (Box<dyn ArchetypeKit>, Option<StrategyKind>) =
            match &self.config.data_dir {
                Some(dir) => {
                    let kit = ContentFactory::new(dir).load_kit(&contender.kit)?;
                    let strategy = kit.strategy();
                    (Box::new(kit), strategy)
                }
                None => {
                    let kind = KitKind::parse(&contender.kit)?;
                    (kind.provider(), Some(kind.default_strategy()))
                }
            };

        let strategy = match contender.strategy.as_deref() {
            Some(name) => Some(StrategyKind::parse(name)?),
            None => default_strategy,
        };

        let mut character = assemble(kit.as_ref(), contender.name.as_str(), builder);
        match strategy {
            Some(strategy) => character.attach_strategy(strategy.into_strategy()),
            None => tracing::warn!(
                name = %contender.name,
                kit = %contender.kit,
                "contender has no attack strategy"
            ),
        }
        Ok(character)
    }
}
