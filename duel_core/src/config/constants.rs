//! Tunable constants for the fight simulator

use serde::{Deserialize, Serialize};

/// Every tunable number the fight simulator uses
///
/// Missing tables or fields fall back to the defaults below.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConstants {
    pub timeline: TimelineConstants,
    pub opening: OpeningConstants,
    pub odds: OddsConstants,
    pub factors: FactorConstants,
}

/// Shape of the scripted fight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConstants {
    /// Length of the whole simulation window in seconds
    pub duration: f64,
    /// Seconds the opening burst is assumed to take
    pub burst_duration: f64,
    /// Sustained phase step in seconds
    pub tick: f64,
    /// Share of lifesteal healing that actually lands
    pub lifesteal_damping: f64,
}

impl Default for TimelineConstants {
    fn default() -> Self {
        TimelineConstants {
            duration: 20.0,
            burst_duration: 3.0,
            tick: 0.5,
            lifesteal_damping: 0.5,
        }
    }
}

/// Modifiers applied to the opening burst
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpeningConstants {
    /// Burst multiplier for whoever strikes first
    pub first_strike_multiplier: f64,
    /// Ignite damage at level 0
    pub ignite_base: f64,
    /// Ignite damage added per level
    pub ignite_per_level: f64,
}

impl Default for OpeningConstants {
    fn default() -> Self {
        OpeningConstants {
            first_strike_multiplier: 1.15,
            ignite_base: 70.0,
            ignite_per_level: 20.0,
        }
    }
}

impl OpeningConstants {
    /// Ignite damage at a level
    pub fn ignite_damage(&self, level: u32) -> f64 {
        self.ignite_base + self.ignite_per_level * level as f64
    }
}

/// Win-rate heuristic weights and bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OddsConstants {
    pub baseline: f64,
    pub max_bonus: f64,
    pub burst_weight: f64,
    pub dps_weight: f64,
    pub hp_weight: f64,
    pub min_win_rate: f64,
    pub max_win_rate: f64,
}

impl Default for OddsConstants {
    fn default() -> Self {
        OddsConstants {
            baseline: 50.0,
            max_bonus: 45.0,
            burst_weight: 30.0,
            dps_weight: 15.0,
            hp_weight: 10.0,
            min_win_rate: 15.0,
            max_win_rate: 85.0,
        }
    }
}

/// Thresholds for the key-factor notes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorConstants {
    /// Opening damage ratio above this is a large gap
    pub burst_gap_high: f64,
    /// Opening damage ratio below this is a large gap
    pub burst_gap_low: f64,
    /// Lifesteal percent above this is worth mentioning
    pub lifesteal_threshold: f64,
    /// Skill hit rate below this is worth mentioning
    pub low_hit_rate: f64,
    /// Champion flavour notes only fill up to this many factors
    pub flavour_limit: usize,
}

impl Default for FactorConstants {
    fn default() -> Self {
        FactorConstants {
            burst_gap_high: 1.3,
            burst_gap_low: 0.77,
            lifesteal_threshold: 10.0,
            low_hit_rate: 70.0,
            flavour_limit: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let constants = CombatConstants::default();
        assert!((constants.timeline.duration - 20.0).abs() < f64::EPSILON);
        assert!((constants.timeline.tick - 0.5).abs() < f64::EPSILON);
        assert!((constants.opening.first_strike_multiplier - 1.15).abs() < f64::EPSILON);
        assert!((constants.odds.max_win_rate - 85.0).abs() < f64::EPSILON);
        assert_eq!(constants.factors.flavour_limit, 3);
    }

    #[test]
    fn test_ignite_damage() {
        let opening = OpeningConstants::default();
        // 70 + 20 * 6
        assert!((opening.ignite_damage(6) - 190.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_partial_constants() {
        let toml = r#"
[timeline]
duration = 30

[odds]
max_win_rate = 90.0
"#;

        let constants: CombatConstants = toml::from_str(toml).unwrap();
        assert!((constants.timeline.duration - 30.0).abs() < f64::EPSILON);
        // Unset fields keep their defaults
        assert!((constants.timeline.burst_duration - 3.0).abs() < f64::EPSILON);
        assert!((constants.odds.max_win_rate - 90.0).abs() < f64::EPSILON);
        assert_eq!(constants.opening, OpeningConstants::default());
    }
}
