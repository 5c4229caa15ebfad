//! Data-driven content definitions and loaders.
//!
//! This crate provides loaders for RON/TOML data files:
//! - Archetype kits (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Loaded kits implement [`game_core::ArchetypeKit`], so they plug into the
//! same assembly path as the built-in kits.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, ContentKit, KitDefinition, KitLoader};
