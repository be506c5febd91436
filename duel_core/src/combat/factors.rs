//! Key factors - human-readable notes on why a duel went the way it did

use super::settings::CombatSettings;
use crate::config::FactorConstants;
use crate::types::Side;

pub const FIRST_STRIKE_FACTOR: &str = "First-strike advantage decided the trade";
pub const BURST_GAP_FACTOR: &str = "Large gap in burst damage";
pub const LIFESTEAL_FACTOR: &str = "Lifesteal sustain was significant";
pub const LOW_HIT_RATE_FACTOR: &str = "Low skill hit rate limited damage output";
pub const FIORA_PARRY_FACTOR: &str = "Fiora's Riposte parried a key ability";
pub const JAX_DODGE_FACTOR: &str = "Jax's Counter Strike dodged basic attacks";

/// What the notes are derived from
#[derive(Debug, Clone, Copy)]
pub struct FactorInputs<'a> {
    pub champion_a: &'a str,
    pub champion_b: &'a str,
    pub winner: Side,
    /// Side A / side B opening damage
    pub damage_ratio: f64,
    pub lifesteal_a: f64,
    pub lifesteal_b: f64,
}

/// Collect the notes that apply, in a fixed order
///
/// Champion flavour notes are only added while fewer than
/// `flavour_limit` notes have been recorded.
pub fn key_factors(
    inputs: &FactorInputs<'_>,
    settings: &CombatSettings,
    limits: &FactorConstants,
) -> Vec<String> {
    let mut factors = Vec::new();

    if settings.first_strike == inputs.winner {
        factors.push(FIRST_STRIKE_FACTOR.to_string());
    }

    if inputs.damage_ratio > limits.burst_gap_high || inputs.damage_ratio < limits.burst_gap_low {
        factors.push(BURST_GAP_FACTOR.to_string());
    }

    if inputs.lifesteal_a > limits.lifesteal_threshold
        || inputs.lifesteal_b > limits.lifesteal_threshold
    {
        factors.push(LIFESTEAL_FACTOR.to_string());
    }

    if settings.skill_hit_rate < limits.low_hit_rate {
        factors.push(LOW_HIT_RATE_FACTOR.to_string());
    }

    if inputs.champion_a == "fiora" && factors.len() < limits.flavour_limit {
        factors.push(FIORA_PARRY_FACTOR.to_string());
    }

    if inputs.champion_b == "jax" && factors.len() < limits.flavour_limit {
        factors.push(JAX_DODGE_FACTOR.to_string());
    }

    factors
}
