//! Deterministic character assembly and duel rules.
//!
//! `game-core` defines the canonical rules (attributes, items, character
//! assembly, attack strategies, the duel loop) and exposes pure APIs shared by
//! the content loaders and the client binary. Characters are produced by
//! [`character::CharacterBuilder`], usually fed from an [`kits::ArchetypeKit`],
//! and fight through [`combat::Duel`].
pub mod character;
pub mod combat;
pub mod config;
pub mod error;
pub mod items;
pub mod kits;
pub mod stats;

pub use character::{Archetype, Character, CharacterBuilder, CharacterSheet, Lineage};
pub use combat::{
    ArcaneAttack, AttackReport, AttackStrategy, AttackStyle, Duel, DuelConfig, DuelOutcome,
    PhysicalAttack, Side, StrategyKind, TurnRecord,
};
pub use config::GameConfig;
pub use error::{ErrorSeverity, GameError, SelectionError};
pub use items::{
    CatalogError, Inventory, Item, ItemCatalog, ItemCategory, ItemKind, ItemSpec, PotionData,
    Rarity, WeaponData,
};
pub use kits::{ArchetypeKit, KitKind, MageKit, WarriorKit, assemble};
pub use stats::{AttributeKind, AttributeSet};
