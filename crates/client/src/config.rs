//! Client configuration.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Arena client configuration.
///
/// Pacing and content locations for the binary. Game rules live in
/// [`game_core::GameConfig`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Pause after each narrated turn. Zero disables pacing.
    pub turn_delay: Duration,
    /// Overrides `max_duel_turns` from the game configuration.
    pub max_turns: Option<u32>,
    /// Data directory with `config.toml` and `kits/`. Built-in kits are used when unset.
    pub data_dir: Option<PathBuf>,
    /// Explicit game configuration file, taking precedence over `data_dir/config.toml`.
    pub config_file: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            turn_delay: Duration::from_millis(Self::DEFAULT_TURN_DELAY_MS),
            max_turns: None,
            data_dir: None,
            config_file: None,
        }
    }
}

impl ClientConfig {
    pub const DEFAULT_TURN_DELAY_MS: u64 = 3000;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_TURN_DELAY_MS` - Pause between turns in milliseconds (default: 3000)
    /// - `ARENA_MAX_TURNS` - Duel turn cap (default: unbounded)
    /// - `ARENA_DATA_DIR` - Content data directory (default: built-in kits)
    /// - `ARENA_CONFIG` - Game configuration TOML file
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Construct configuration from an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(ms) = parse_var::<u64>(&lookup, "ARENA_TURN_DELAY_MS") {
            config.turn_delay = Duration::from_millis(ms);
        }
        if let Some(max_turns) = parse_var::<u32>(&lookup, "ARENA_MAX_TURNS") {
            config.max_turns = Some(max_turns.max(1));
        }
        config.data_dir = lookup("ARENA_DATA_DIR").map(PathBuf::from);
        config.config_file = lookup("ARENA_CONFIG").map(PathBuf::from);

        config
    }

    /// Configuration for headless runs: no pacing, built-in content.
    pub fn headless() -> Self {
        Self {
            turn_delay: Duration::ZERO,
            ..Self::default()
        }
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.parse().ok()
}
