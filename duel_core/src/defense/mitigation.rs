//! Mitigation - Armor and magic resist with diminishing returns
//!
//! Formula:
//! - effective_armor = max(0, armor - armor_penetration)
//! - reduction = resist / (100 + resist)
//! - damage_taken = damage * (1 - reduction)
//!
//! 100 resist halves damage; reduction approaches but never reaches 100%.

use super::constants::MITIGATION_CONSTANT;
use crate::types::DamageType;

/// Fraction of damage removed by a resist value
pub fn damage_reduction(resist: f64) -> f64 {
    resist / (MITIGATION_CONSTANT + resist)
}

/// Armor left after flat penetration, floored at zero
pub fn effective_armor(armor: f64, armor_penetration: f64) -> f64 {
    (armor - armor_penetration).max(0.0)
}

/// Resist needed to reach a target reduction percentage
pub fn resist_needed_for_reduction(target_reduction_percent: f64) -> f64 {
    if target_reduction_percent <= 0.0 {
        return 0.0;
    }
    if target_reduction_percent >= 100.0 {
        return f64::INFINITY;
    }

    // reduction = r / (C + r)  =>  r = reduction * C / (1 - reduction)
    let reduction = target_reduction_percent / 100.0;
    reduction * MITIGATION_CONSTANT / (1.0 - reduction)
}

/// Pre-computed reductions of one attacker against one defender
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mitigation {
    /// Applies to physical damage
    pub armor_reduction: f64,
    /// Applies to magic damage
    pub magic_reduction: f64,
}

impl Mitigation {
    /// Reductions against a defender's armor and magic resist
    ///
    /// Armor penetration only lowers armor; magic resist is used as-is.
    pub fn against(target_armor: f64, target_magic_resist: f64, armor_penetration: f64) -> Self {
        Mitigation {
            armor_reduction: damage_reduction(effective_armor(target_armor, armor_penetration)),
            magic_reduction: damage_reduction(target_magic_resist),
        }
    }

    /// Damage that gets through for a hit of the given type
    pub fn apply(&self, damage: f64, damage_type: DamageType) -> f64 {
        match damage_type {
            DamageType::Physical => damage * (1.0 - self.armor_reduction),
            DamageType::Magic => damage * (1.0 - self.magic_reduction),
            DamageType::True => damage,
        }
    }
}
