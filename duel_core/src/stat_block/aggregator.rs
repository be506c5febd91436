//! StatAccumulator - Collects stat modifications before applying to StatBlock

use crate::stat_block::StatBlock;

/// Accumulates stat modifications from various sources
///
/// This is used during stat rebuilding to collect all modifications
/// before applying them to a StatBlock.
#[derive(Debug, Clone, Default)]
pub struct StatAccumulator {
    // === Resources ===
    pub hp_flat: f64,

    // === Defenses ===
    pub armor_flat: f64,
    pub magic_resist_flat: f64,

    // === Offense ===
    pub attack_flat: f64,
    /// Multipliers in the order they were applied
    pub attack_speed_more: Vec<f64>,
    pub crit_chance_flat: f64,
    pub crit_damage_flat: f64,
    pub armor_penetration_flat: f64,

    // === Recovery ===
    pub lifesteal_flat: f64,
}

impl StatAccumulator {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply accumulated stats to a StatBlock
    pub fn apply_to(&self, block: &mut StatBlock) {
        block.hp.add_flat(self.hp_flat);

        block.armor.add_flat(self.armor_flat);
        block.magic_resist.add_flat(self.magic_resist_flat);

        block.attack.add_flat(self.attack_flat);
        for more in &self.attack_speed_more {
            block.attack_speed.add_more(*more);
        }
        block.crit_chance.add_flat(self.crit_chance_flat);
        block.crit_damage.add_flat(self.crit_damage_flat);
        block.armor_penetration.add_flat(self.armor_penetration_flat);

        block.lifesteal.add_flat(self.lifesteal_flat);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::champion::testing::bruiser;

    #[test]
    fn test_empty_accumulator_changes_nothing() {
        let champ = bruiser("test");
        let mut block = StatBlock::from_base(&champ.base_stats);
        let before = block.clone();
        StatAccumulator::new().apply_to(&mut block);
        assert_eq!(block, before);
    }

    #[test]
    fn test_apply_flat_and_more() {
        let champ = bruiser("test");
        let mut block = StatBlock::from_base(&champ.base_stats);

        let mut acc = StatAccumulator::new();
        acc.attack_flat += 40.0;
        acc.attack_speed_more.push(0.25);
        acc.lifesteal_flat += 10.0;
        acc.apply_to(&mut block);

        assert!((block.attack.compute() - 100.0).abs() < f64::EPSILON);
        assert!((block.attack_speed.compute() - 0.65 * 1.25).abs() < 1e-12);
        assert!((block.lifesteal.compute() - 10.0).abs() < f64::EPSILON);
    }
}
