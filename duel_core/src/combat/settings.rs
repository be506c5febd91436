//! CombatSettings - per-simulation battle conditions

use crate::types::Side;
use serde::{Deserialize, Serialize};

/// Player execution tier, a coarse multiplier on opening damage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
    Master,
}

impl OperationTier {
    /// Damage multiplier for this tier
    pub fn multiplier(self) -> f64 {
        match self {
            OperationTier::Bronze => 0.7,
            OperationTier::Silver => 0.8,
            OperationTier::Gold => 0.9,
            OperationTier::Platinum => 1.0,
            OperationTier::Diamond => 1.1,
            OperationTier::Master => 1.2,
        }
    }

    /// All tiers from lowest to highest
    pub fn all() -> &'static [OperationTier] {
        &[
            OperationTier::Bronze,
            OperationTier::Silver,
            OperationTier::Gold,
            OperationTier::Platinum,
            OperationTier::Diamond,
            OperationTier::Master,
        ]
    }
}

/// Battle conditions supplied with every simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatSettings {
    /// Champion level for both sides (1-18)
    pub level: u32,
    pub first_strike: Side,
    /// Percent of ability damage that lands (0-100)
    pub skill_hit_rate: f64,
    pub ignite: bool,
    /// Display only
    pub flash: bool,
    /// Display only (0-100)
    pub dodge_rate: f64,
    pub operation_tier: OperationTier,
}

impl Default for CombatSettings {
    fn default() -> Self {
        CombatSettings {
            level: 6,
            first_strike: Side::SideA,
            skill_hit_rate: 80.0,
            ignite: false,
            flash: false,
            dodge_rate: 0.0,
            operation_tier: OperationTier::Gold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_multipliers_increase() {
        let multipliers: Vec<f64> = OperationTier::all().iter().map(|t| t.multiplier()).collect();
        assert!(multipliers.windows(2).all(|w| w[0] < w[1]));
        assert!((OperationTier::Platinum.multiplier() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_settings() {
        let toml = r#"
level = 11
first_strike = "side_b"
ignite = true
operation_tier = "diamond"
"#;
        let settings: CombatSettings = toml::from_str(toml).unwrap();
        assert_eq!(settings.level, 11);
        assert_eq!(settings.first_strike, Side::SideB);
        assert!(settings.ignite);
        assert_eq!(settings.operation_tier, OperationTier::Diamond);
        // Defaults for the rest
        assert!((settings.skill_hit_rate - 80.0).abs() < f64::EPSILON);
    }
}
