//! Archetype kit loader.
//!
//! # Format
//!
//! ```ron
//! (
//!     lineage: (name: "Dwarf", bonus: (power: 2, vitality: 2, luck: -1)),
//!     archetype: "Warrior",
//!     base: (power: 10, intellect: 4, agility: 6, vitality: 8, luck: 5),
//!     strategy: Some("physical"),
//!     items: [
//!         (category: "weapon", name: "Dwarven Axe", weight: 5.0, rarity: Uncommon, magnitude: 12),
//!     ],
//! )
//! ```
//!
//! Attribute fields default to 0. Item categories and strategy names are
//! validated at load time, so a [`ContentKit`] never fails at assembly.

use std::path::Path;

use game_core::{
    Archetype, ArchetypeKit, AttributeSet, Item, ItemCatalog, ItemSpec, Lineage, Rarity,
    StrategyKind,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Five attribute values as written in content files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeValues {
    pub power: i32,
    pub intellect: i32,
    pub agility: i32,
    pub vitality: i32,
    pub luck: i32,
}

impl From<AttributeValues> for AttributeSet {
    fn from(v: AttributeValues) -> Self {
        AttributeSet::new(v.power, v.intellect, v.agility, v.vitality, v.luck)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineageDefinition {
    pub name: String,
    #[serde(default)]
    pub bonus: AttributeValues,
}

/// One starting item; `category` is resolved through [`ItemCatalog`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub category: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub weight: f32,
    #[serde(default)]
    pub rarity: Rarity,
    #[serde(default)]
    pub magnitude: i32,
}

impl ItemDefinition {
    fn spec(&self) -> ItemSpec {
        ItemSpec::new(self.name.clone(), self.description.clone())
            .weight(self.weight)
            .rarity(self.rarity)
            .magnitude(self.magnitude)
    }
}

/// Kit structure for RON files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KitDefinition {
    pub lineage: LineageDefinition,
    pub archetype: String,
    #[serde(default)]
    pub base: AttributeValues,
    /// Strategy the kit's characters fight with by default.
    #[serde(default)]
    pub strategy: Option<String>,
    #[serde(default)]
    pub items: Vec<ItemDefinition>,
}

impl KitDefinition {
    /// Validate names and build the runtime kit.
    pub fn into_kit(self) -> LoadResult<ContentKit> {
        let items = self
            .items
            .iter()
            .map(|item| {
                ItemCatalog::create(&item.category, item.spec())
                    .map_err(|e| anyhow::anyhow!("Invalid item '{}' in kit: {}", item.name, e))
            })
            .collect::<LoadResult<Vec<_>>>()?;

        let strategy = self
            .strategy
            .as_deref()
            .map(StrategyKind::parse)
            .transpose()
            .map_err(|e| anyhow::anyhow!("Invalid kit strategy: {}", e))?;

        Ok(ContentKit {
            lineage: Lineage::new(self.lineage.name, self.lineage.bonus.into()),
            archetype: Archetype::new(self.archetype),
            base: self.base.into(),
            strategy,
            items,
        })
    }
}

/// A validated, data-driven archetype kit.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentKit {
    lineage: Lineage,
    archetype: Archetype,
    base: AttributeSet,
    strategy: Option<StrategyKind>,
    items: Vec<Item>,
}

impl ContentKit {
    /// Default strategy declared by the kit, if any.
    pub fn strategy(&self) -> Option<StrategyKind> {
        self.strategy
    }
}

impl ArchetypeKit for ContentKit {
    fn produce_lineage(&self) -> Lineage {
        self.lineage.clone()
    }

    fn produce_archetype(&self) -> Archetype {
        self.archetype.clone()
    }

    fn produce_base_attributes(&self) -> AttributeSet {
        self.base.clone()
    }

    fn produce_starting_equipment(&self) -> Vec<Item> {
        self.items.clone()
    }
}

/// Loader for archetype kits from RON files.
pub struct KitLoader;

impl KitLoader {
    /// Load and validate a kit from a RON file.
    pub fn load(path: &Path) -> LoadResult<ContentKit> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load kit {}: {}", path.display(), e))
    }

    /// Parse and validate a kit from a RON string.
    pub fn parse(content: &str) -> LoadResult<ContentKit> {
        let definition: KitDefinition = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse kit RON: {}", e))?;

        let kit = definition.into_kit()?;
        tracing::debug!(
            archetype = %kit.archetype.name,
            lineage = %kit.lineage.name,
            items = kit.items.len(),
            "kit loaded"
        );
        Ok(kit)
    }
}
