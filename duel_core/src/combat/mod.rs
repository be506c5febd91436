//! Combat - duel simulation between two champions

mod factors;
mod odds;
mod result;
mod settings;
mod simulation;

pub use factors::{
    key_factors, FactorInputs, BURST_GAP_FACTOR, FIORA_PARRY_FACTOR, FIRST_STRIKE_FACTOR,
    JAX_DODGE_FACTOR, LIFESTEAL_FACTOR, LOW_HIT_RATE_FACTOR,
};
pub use odds::{estimate_win_rate, DuelRatios};
pub use result::{DamageBreakdown, FightResult, Winner};
pub use settings::{CombatSettings, OperationTier};
pub use simulation::{simulate_fight, simulate_fight_with, Duel, FightPhase};
