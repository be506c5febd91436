//! Prelude module for convenient imports
//!
//! ```rust
//! use duel_core::prelude::*;
//! ```

// Data model
pub use crate::champion::ChampionTemplate;
pub use crate::item::{ItemModifier, ItemStats};
pub use crate::types::{AbilitySlot, DamageType, Side};

// The five engine operations
pub use crate::stat_block::{compute_effective_stats, EffectiveStats};
pub use crate::damage::{compute_burst_damage, compute_sustained_dps};
pub use crate::defense::compute_effective_hp;
pub use crate::combat::{simulate_fight, CombatSettings, FightResult, OperationTier, Winner};

// Analysis
pub use crate::analysis::{analyze_build, compare_builds};

// Config
pub use crate::config::{default_catalog, Catalog};
