//! Stat system.
//!
//! A character is described by five attributes and a health meter derived
//! from vitality:
//!
//! ```text
//! [ power | intellect | agility | vitality | luck ]
//!                              ↓
//!          max_health = BASE_HEALTH + HEALTH_PER_VITALITY × vitality
//! ```
//!
//! Lineage bonuses reuse [`AttributeSet`] as an additive vector; only the
//! five attribute fields are meaningful in that role.

pub mod attributes;

pub use attributes::{AttributeKind, AttributeSet};
