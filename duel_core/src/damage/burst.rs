//! Burst damage - one full ability rotation plus a short auto-attack weave

use crate::champion::ChampionTemplate;
use crate::defense::Mitigation;
use crate::stat_block::EffectiveStats;
use crate::types::{AbilitySlot, DamageType};
use serde::{Deserialize, Serialize};

/// R joins the combo from this level on
pub const ULTIMATE_UNLOCK_LEVEL: u32 = 6;

/// Basic attacks woven into every combo
pub const COMBO_BASIC_ATTACKS: u32 = 3;

/// Per-slot contributions of one combo after mitigation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BurstBreakdown {
    /// Mitigated damage per cast ability, in Q, W, E, R order
    pub abilities: Vec<(AbilitySlot, f64)>,
    /// Mitigated damage of all combo basic attacks together
    pub basic_attacks: f64,
}

impl BurstBreakdown {
    /// Damage from a single slot, if it was cast
    pub fn ability(&self, slot: AbilitySlot) -> Option<f64> {
        self.abilities
            .iter()
            .find(|(s, _)| *s == slot)
            .map(|(_, damage)| *damage)
    }

    /// Total combo damage
    pub fn total(&self) -> f64 {
        let abilities = self.abilities.iter().fold(0.0, |total, (_, damage)| total + damage);
        abilities + self.basic_attacks
    }
}

/// Break a combo down by slot
///
/// Basic attacks are physical, never crit and do not scale with attack
/// speed; they stand for a fixed combo length.
pub fn burst_breakdown(
    champion: &ChampionTemplate,
    stats: &EffectiveStats,
    level: u32,
    target_armor: f64,
    target_magic_resist: f64,
) -> BurstBreakdown {
    let mitigation =
        Mitigation::against(target_armor, target_magic_resist, stats.armor_penetration);

    let abilities = champion
        .skills
        .iter()
        .filter(|(slot, _)| !slot.is_ultimate() || level >= ULTIMATE_UNLOCK_LEVEL)
        .map(|(slot, ability)| {
            let raw = ability.raw_damage(stats.attack);
            (slot, mitigation.apply(raw, ability.damage_type))
        })
        .collect();

    let basic_attacks =
        mitigation.apply(stats.attack, DamageType::Physical) * COMBO_BASIC_ATTACKS as f64;

    BurstBreakdown {
        abilities,
        basic_attacks,
    }
}

/// Total alpha-strike damage against a defender
pub fn compute_burst_damage(
    champion: &ChampionTemplate,
    stats: &EffectiveStats,
    level: u32,
    target_armor: f64,
    target_magic_resist: f64,
) -> f64 {
    burst_breakdown(champion, stats, level, target_armor, target_magic_resist).total()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::champion::testing::bruiser;
    use crate::item::{ItemModifier, ItemStats};
    use crate::stat_block::compute_effective_stats;

    #[test]
    fn test_ultimate_gated_by_level() {
        let champ = bruiser("test");
        let stats = compute_effective_stats(&champ, &[], 6);

        let before = burst_breakdown(&champ, &stats, 5, 30.0, 32.0);
        let after = burst_breakdown(&champ, &stats, 6, 30.0, 32.0);

        assert_eq!(before.abilities.len(), 3);
        assert_eq!(before.ability(AbilitySlot::R), None);
        assert_eq!(after.abilities.len(), 4);
        assert!(after.total() > before.total());
    }

    #[test]
    fn test_true_damage_ignores_resists() {
        let champ = bruiser("test");
        let stats = compute_effective_stats(&champ, &[], 6);

        let soft = burst_breakdown(&champ, &stats, 6, 30.0, 32.0);
        let tanky = burst_breakdown(&champ, &stats, 6, 200.0, 200.0);

        assert_eq!(soft.ability(AbilitySlot::R), tanky.ability(AbilitySlot::R));
        assert!(tanky.total() < soft.total());
    }

    #[test]
    fn test_magic_damage_uses_magic_resist() {
        let champ = bruiser("test");
        let stats = compute_effective_stats(&champ, &[], 1);

        let low = burst_breakdown(&champ, &stats, 1, 30.0, 0.0);
        let high = burst_breakdown(&champ, &stats, 1, 30.0, 100.0);

        // W is magic: 80 flat, halved at 100 magic resist
        assert_eq!(low.ability(AbilitySlot::W), Some(80.0));
        assert_eq!(high.ability(AbilitySlot::W), Some(40.0));
        // Physical parts unchanged
        assert_eq!(low.ability(AbilitySlot::Q), high.ability(AbilitySlot::Q));
    }

    #[test]
    fn test_includes_three_basic_attacks() {
        let champ = bruiser("test");
        let stats = compute_effective_stats(&champ, &[], 1);
        let combo = burst_breakdown(&champ, &stats, 1, 0.0, 0.0);

        assert_eq!(combo.basic_attacks, stats.attack * 3.0);
        assert!(combo.total() > stats.attack * 3.0);
    }

    #[test]
    fn test_penetration_does_not_touch_magic() {
        let champ = bruiser("test");
        let mut stats = compute_effective_stats(&champ, &[], 1);
        let plain = burst_breakdown(&champ, &stats, 1, 100.0, 100.0);
        stats.armor_penetration = 50.0;
        let pen = burst_breakdown(&champ, &stats, 1, 100.0, 100.0);

        assert_eq!(plain.ability(AbilitySlot::W), pen.ability(AbilitySlot::W));
        assert!(pen.ability(AbilitySlot::Q) > plain.ability(AbilitySlot::Q));
    }

    #[test]
    fn test_attack_items_raise_burst() {
        let champ = bruiser("test");
        let edge = ItemModifier::new("edge", "Edge", 3400).with_stats(ItemStats {
            attack: Some(70.0),
            ..ItemStats::default()
        });
        let bare = compute_effective_stats(&champ, &[], 6);
        let built = compute_effective_stats(&champ, &[edge], 6);

        assert!(
            compute_burst_damage(&champ, &built, 6, 30.0, 32.0)
                > compute_burst_damage(&champ, &bare, 6, 30.0, 32.0)
        );
    }

    #[test]
    fn test_total_matches_breakdown() {
        let champ = bruiser("test");
        let stats = compute_effective_stats(&champ, &[], 9);
        let combo = burst_breakdown(&champ, &stats, 9, 45.0, 38.0);
        assert_eq!(compute_burst_damage(&champ, &stats, 9, 45.0, 38.0), combo.total());
    }
}
