//! Champion templates - immutable reference data loaded from the catalog

use crate::types::{AbilitySlot, DamageType, StrongPhase};
use serde::{Deserialize, Serialize};

/// A playable champion as described by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionTemplate {
    pub id: String,
    pub name: String,
    pub role: String,
    pub icon: String,
    pub base_stats: BaseStats,
    pub skills: AbilityKit,
    /// Milestone descriptions (display only)
    #[serde(default)]
    pub power_spikes: Vec<String>,
    pub strong_phase: StrongPhase,
    /// Champions that counter this one
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub counters: Vec<CounterRelation>,
    /// Champions this one counters
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub beats: Vec<CounterRelation>,
}

/// How strongly one champion counters another
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterLevel {
    Hard,
    Moderate,
    Soft,
}

impl CounterLevel {
    pub fn label(&self) -> &'static str {
        match self {
            CounterLevel::Hard => "hard",
            CounterLevel::Moderate => "moderate",
            CounterLevel::Soft => "soft",
        }
    }
}

/// A counter relation towards another champion in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterRelation {
    /// Id of the other champion
    pub target: String,
    pub level: CounterLevel,
    pub reasons: Vec<String>,
}

/// Level 1 stats plus per-level growth
///
/// hp, attack, armor and magic resist grow linearly. Attack speed grows
/// multiplicatively: `attack_speed * (1 + attack_speed_growth * (level - 1))`.
/// Move speed never grows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: f64,
    pub hp_growth: f64,
    pub attack: f64,
    pub attack_growth: f64,
    pub armor: f64,
    pub armor_growth: f64,
    pub magic_resist: f64,
    pub magic_resist_growth: f64,
    /// Attacks per second at level 1
    pub attack_speed: f64,
    /// Fractional growth per level (0.03 = 3%)
    pub attack_speed_growth: f64,
    pub move_speed: f64,
}

/// The fixed four-ability kit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityKit {
    pub q: Ability,
    pub w: Ability,
    pub e: Ability,
    pub r: Ability,
}

impl AbilityKit {
    /// Get the ability in a slot
    pub fn get(&self, slot: AbilitySlot) -> &Ability {
        match slot {
            AbilitySlot::Q => &self.q,
            AbilitySlot::W => &self.w,
            AbilitySlot::E => &self.e,
            AbilitySlot::R => &self.r,
        }
    }

    /// Iterate abilities in Q, W, E, R order
    pub fn iter(&self) -> impl Iterator<Item = (AbilitySlot, &Ability)> {
        AbilitySlot::all().iter().map(move |slot| (*slot, self.get(*slot)))
    }
}

/// A single ability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    /// Flat damage before scaling
    pub damage: f64,
    pub damage_type: DamageType,
    /// Seconds (display only)
    #[serde(default)]
    pub cooldown: f64,
    #[serde(default)]
    pub scaling: AbilityScaling,
    #[serde(default)]
    pub description: String,
}

impl Ability {
    /// Damage before mitigation for an attacker with the given attack
    pub fn raw_damage(&self, attack: f64) -> f64 {
        self.damage + self.scaling.attack.unwrap_or(0.0) * attack
    }
}

/// Ratio scalings on an ability
///
/// Only `attack` feeds the damage formulas; the others are kept for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AbilityScaling {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability_power: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hp: Option<f64>,
}


#[cfg(test)]
mod tests {
    use super::testing::bruiser;
    use super::CounterLevel;

    #[test]
    fn test_raw_damage_uses_attack_ratio() {
        let champ = bruiser("test");
        // 60 + 1.0 * 100
        assert!((champ.skills.q.raw_damage(100.0) - 160.0).abs() < f64::EPSILON);
        // No attack ratio means flat damage only
        let mut hex = champ.skills.w.clone();
        hex.scaling.attack = None;
        assert!((hex.raw_damage(500.0) - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_counter_levels_order_hardest_first() {
        let mut levels = vec![CounterLevel::Soft, CounterLevel::Hard, CounterLevel::Moderate];
        levels.sort();
        assert_eq!(levels, vec![CounterLevel::Hard, CounterLevel::Moderate, CounterLevel::Soft]);
        assert_eq!(CounterLevel::Moderate.label(), "moderate");
    }

    #[test]
    fn test_kit_iter_order() {
        let champ = bruiser("test");
        let names: Vec<_> = champ.skills.iter().map(|(_, a)| a.name.as_str()).collect();
        assert_eq!(names, vec!["Cleave", "Hex", "Lunge", "Execute"]);
    }
}
