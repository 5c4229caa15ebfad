//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`GameConfig::default`].
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from a TOML string.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_apply_and_missing_keys_default() {
        let config = ConfigLoader::parse("max_duel_turns = 50\n").unwrap();

        assert_eq!(config.max_duel_turns, Some(50));
        assert_eq!(config.inventory_capacity, GameConfig::DEFAULT_INVENTORY_CAPACITY);
    }

    #[test]
    fn empty_file_is_default_config() {
        assert_eq!(ConfigLoader::parse("").unwrap(), GameConfig::default());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let err = ConfigLoader::parse("inventory_capacity = \"lots\"").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config TOML"));
    }
}
