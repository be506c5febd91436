//! Win-rate heuristic
//!
//! A probability estimate built from side A / side B ratios of opening
//! damage, sustained DPS and max HP. It is independent of the HP simulation
//! except for which side it is computed for.

use crate::config::OddsConstants;
use crate::types::Side;
use serde::{Deserialize, Serialize};

/// Side A / side B ratios the heuristic reads
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DuelRatios {
    /// Opening damage ratio
    pub damage: f64,
    /// Sustained DPS ratio
    pub dps: f64,
    /// Max HP ratio
    pub hp: f64,
}

impl DuelRatios {
    /// The same ratios from side B's point of view
    pub fn inverted(&self) -> DuelRatios {
        DuelRatios {
            damage: 1.0 / self.damage,
            dps: 1.0 / self.dps,
            hp: 1.0 / self.hp,
        }
    }
}

/// Estimated side A win probability (percent), mirrored when `winner` is side B
///
/// Side A wins: `baseline + min(max_bonus, (damage-1)·w₁ + (dps-1)·w₂ + (hp-1)·w₃)`.
/// Side B wins: the same bonus computed from the reciprocal ratios, subtracted
/// from the baseline instead. The result is clamped to `[min_win_rate,
/// max_win_rate]`. An undefined bonus (0/0 ratios) counts as no bonus.
pub fn estimate_win_rate(winner: Side, ratios: &DuelRatios, odds: &OddsConstants) -> f64 {
    let (ratios, sign) = match winner {
        Side::SideA => (*ratios, 1.0),
        Side::SideB => (ratios.inverted(), -1.0),
    };

    let bonus = (ratios.damage - 1.0) * odds.burst_weight
        + (ratios.dps - 1.0) * odds.dps_weight
        + (ratios.hp - 1.0) * odds.hp_weight;

    let rate = if bonus.is_nan() {
        odds.baseline
    } else {
        odds.baseline + sign * bonus.min(odds.max_bonus)
    };

    rate.clamp(odds.min_win_rate, odds.max_win_rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn even() -> DuelRatios {
        DuelRatios {
            damage: 1.0,
            dps: 1.0,
            hp: 1.0,
        }
    }

    #[test]
    fn test_even_matchup_is_coin_flip() {
        let odds = OddsConstants::default();
        assert_eq!(estimate_win_rate(Side::SideA, &even(), &odds), 50.0);
        assert_eq!(estimate_win_rate(Side::SideB, &even(), &odds), 50.0);
    }

    #[test]
    fn test_side_b_mirrors_side_a() {
        let odds = OddsConstants::default();
        let ratios = DuelRatios {
            damage: 1.0 / 1.15,
            dps: 1.0,
            hp: 1.0,
        };
        // 50 - (1.15 - 1) * 30
        assert!((estimate_win_rate(Side::SideB, &ratios, &odds) - 45.5).abs() < 1e-9);
    }

    #[test]
    fn test_weights() {
        let odds = OddsConstants::default();
        let ratios = DuelRatios {
            damage: 1.15,
            dps: 1.0,
            hp: 1.0,
        };
        // 50 + 0.15 * 30
        assert!((estimate_win_rate(Side::SideA, &ratios, &odds) - 54.5).abs() < 1e-9);
    }

    #[test]
    fn test_side_b_uses_reciprocals() {
        let odds = OddsConstants::default();
        let ratios = DuelRatios {
            damage: 0.5,
            dps: 1.0,
            hp: 1.0,
        };
        // B dealt twice the damage: 50 - (2 - 1) * 30 = 20
        assert!((estimate_win_rate(Side::SideB, &ratios, &odds) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_clamped() {
        let odds = OddsConstants::default();
        let lopsided = DuelRatios {
            damage: 10.0,
            dps: 10.0,
            hp: 10.0,
        };
        assert_eq!(estimate_win_rate(Side::SideA, &lopsided, &odds), 85.0);
        // B winning while behind on every ratio: 50 - min(45, negative bonus) caps at 85
        assert_eq!(estimate_win_rate(Side::SideB, &lopsided, &odds), 85.0);

        let crushing_b = lopsided.inverted();
        assert_eq!(estimate_win_rate(Side::SideB, &crushing_b, &odds), 15.0);
    }

    #[test]
    fn test_degenerate_ratios() {
        let odds = OddsConstants::default();
        let zero_over_zero = DuelRatios {
            damage: f64::NAN,
            dps: 1.0,
            hp: 1.0,
        };
        assert_eq!(estimate_win_rate(Side::SideA, &zero_over_zero, &odds), 50.0);

        let no_opponent_damage = DuelRatios {
            damage: f64::INFINITY,
            dps: 1.0,
            hp: 1.0,
        };
        assert_eq!(estimate_win_rate(Side::SideA, &no_opponent_damage, &odds), 85.0);
    }
}
