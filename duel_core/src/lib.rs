//! duel_core - Combat math for 1v1 champion duels
//!
//! This library provides:
//! - Stat aggregation: effective stats from level growth and items
//! - Damage estimates: sustained DPS and burst combos under mitigation
//! - Defense: armor/magic resist reduction and effective HP
//! - Fight simulation: a scripted burst opening plus sustained trade
//! - Build analysis: loadouts measured against a reference target
//! - Matchups: counter relations between catalog champions
//!
//! Every computation is a pure function of its arguments.

pub mod analysis;
pub mod champion;
pub mod combat;
pub mod config;
pub mod damage;
pub mod defense;
pub mod item;
pub mod matchups;
pub mod prelude;
pub mod source;
pub mod stat_block;
pub mod types;

// Re-export core types for convenience
pub use analysis::{analyze_build, compare_builds, BuildAnalysis, BuildComparison, BuildDelta};
pub use champion::{
    Ability, AbilityKit, AbilityScaling, BaseStats, ChampionTemplate, CounterLevel, CounterRelation,
};
pub use combat::{
    simulate_fight, simulate_fight_with, CombatSettings, FightResult, OperationTier, Winner,
};
pub use config::{default_catalog, Catalog, CombatConstants, ConfigError};
pub use damage::{burst_breakdown, compute_burst_damage, compute_sustained_dps, BurstBreakdown};
pub use defense::compute_effective_hp;
pub use item::{ItemModifier, ItemStats};
pub use matchups::{countered_by, counters, Matchup};
pub use source::{GrowthSource, ItemSource, StatSource};
pub use stat_block::{
    compute_effective_stats, EffectiveStats, StatAccumulator, StatBlock, StatValue,
};
pub use types::{AbilitySlot, DamageType, Side, StrongPhase};
