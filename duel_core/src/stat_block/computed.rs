//! EffectiveStats - the flattened stat record the damage formulas consume

use crate::defense::compute_effective_hp;
use serde::{Deserialize, Serialize};

/// Effective stats of a champion at a level with a loadout
///
/// Recomputed on every query, never persisted. Percent-valued fields are on
/// a 0-100 scale; `crit_damage` is the percent of normal damage a critical
/// strike deals (175 = 175%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectiveStats {
    pub hp: f64,
    pub attack: f64,
    pub armor: f64,
    pub magic_resist: f64,
    pub attack_speed: f64,
    pub crit_chance: f64,
    pub crit_damage: f64,
    pub lifesteal: f64,
    /// Flat armor penetration
    pub armor_penetration: f64,
    pub move_speed: f64,
}

impl EffectiveStats {
    /// Statistical expectation of one basic attack before mitigation
    ///
    /// `attack × (1 + crit_chance/100 × crit_damage/100)`; crit chance is not
    /// capped at 100.
    pub fn expected_hit_damage(&self) -> f64 {
        self.attack * (1.0 + (self.crit_chance / 100.0) * (self.crit_damage / 100.0))
    }

    /// Blended survivability of this stat line
    pub fn effective_hp(&self) -> f64 {
        compute_effective_hp(self.hp, self.armor, self.magic_resist)
    }
}
