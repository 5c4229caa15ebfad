//! Content factory for loading kits and configuration from a data directory.

use std::path::{Path, PathBuf};

use crate::loaders::{ConfigLoader, ContentKit, KitLoader, LoadResult};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── kits/
///     ├── warrior.ron
///     ├── mage.ron
///     └── barbarian.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<game_core::GameConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load a kit from `kits/{kit_name}.ron`.
    ///
    /// # Arguments
    ///
    /// * `kit_name` - Name of the kit file (without `.ron` extension)
    pub fn load_kit(&self, kit_name: &str) -> LoadResult<ContentKit> {
        let path = self.kits_dir().join(format!("{}.ron", kit_name));
        KitLoader::load(&path)
    }

    /// Names of all kits in `kits/`, sorted.
    pub fn kit_names(&self) -> LoadResult<Vec<String>> {
        let dir = self.kits_dir();
        let entries = std::fs::read_dir(&dir)
            .map_err(|e| anyhow::anyhow!("Failed to read kits directory {}: {}", dir.display(), e))?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "ron") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_owned());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn kits_dir(&self) -> PathBuf {
        self.data_dir.join("kits")
    }
}
