//! Sustained damage - steady-state basic attack DPS

use crate::defense::{damage_reduction, effective_armor};
use crate::stat_block::EffectiveStats;

/// Expected basic-attack damage per second against `target_armor`
///
/// `expected_hit × attack_speed × (1 - reduction)` where the reduction uses
/// the target's armor after the attacker's flat penetration.
pub fn compute_sustained_dps(stats: &EffectiveStats, target_armor: f64) -> f64 {
    let armor = effective_armor(target_armor, stats.armor_penetration);
    let reduction = damage_reduction(armor);

    stats.expected_hit_damage() * stats.attack_speed * (1.0 - reduction)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attacker(attack: f64, attack_speed: f64, armor_penetration: f64) -> EffectiveStats {
        EffectiveStats {
            hp: 1000.0,
            attack,
            armor: 30.0,
            magic_resist: 30.0,
            attack_speed,
            crit_chance: 0.0,
            crit_damage: 175.0,
            lifesteal: 0.0,
            armor_penetration,
            move_speed: 345.0,
        }
    }

    #[test]
    fn test_no_armor() {
        assert_eq!(compute_sustained_dps(&attacker(100.0, 1.0, 0.0), 0.0), 100.0);
    }

    #[test]
    fn test_armor_halves_at_100() {
        assert_eq!(compute_sustained_dps(&attacker(100.0, 1.0, 0.0), 100.0), 50.0);
    }

    #[test]
    fn test_penetration_reduces_armor() {
        let dps = compute_sustained_dps(&attacker(100.0, 1.0, 50.0), 100.0);
        // Effective armor 50, reduction 1/3
        assert!((dps - 100.0 * (1.0 - 50.0 / 150.0)).abs() < 1e-9);
    }

    #[test]
    fn test_penetration_floor() {
        let stats = attacker(100.0, 1.0, 200.0);
        assert_eq!(compute_sustained_dps(&stats, 50.0), 100.0);
        assert_eq!(compute_sustained_dps(&stats, 50.0), compute_sustained_dps(&stats, 0.0));
    }

    #[test]
    fn test_crit_increases_dps() {
        let plain = attacker(100.0, 1.0, 0.0);
        let mut crit = plain;
        crit.crit_chance = 50.0;
        crit.crit_damage = 200.0;
        assert!(compute_sustained_dps(&crit, 0.0) > compute_sustained_dps(&plain, 0.0));
    }

    #[test]
    fn test_attack_speed_is_linear() {
        let slow = attacker(100.0, 1.0, 0.0);
        let fast = attacker(100.0, 2.0, 0.0);
        assert_eq!(compute_sustained_dps(&fast, 0.0), 2.0 * compute_sustained_dps(&slow, 0.0));
        assert_eq!(
            compute_sustained_dps(&fast, 75.0),
            2.0 * compute_sustained_dps(&slow, 75.0)
        );
    }

    #[test]
    fn test_more_armor_never_helps_attacker() {
        let stats = attacker(120.0, 0.8, 10.0);
        let mut previous = compute_sustained_dps(&stats, 0.0);
        for armor in (0..400).step_by(20) {
            let dps = compute_sustained_dps(&stats, armor as f64);
            assert!(dps <= previous);
            previous = dps;
        }
    }
}
