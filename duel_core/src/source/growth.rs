//! GrowthSource - Stats gained from champion level

use crate::champion::BaseStats;
use crate::source::StatSource;
use crate::stat_block::StatAccumulator;

/// Per-level growth on top of a champion's level 1 stats
pub struct GrowthSource<'a> {
    pub base: &'a BaseStats,
    /// Champion level (1-18)
    pub level: u32,
}

impl<'a> GrowthSource<'a> {
    /// Create a new growth source
    pub fn new(base: &'a BaseStats, level: u32) -> Self {
        GrowthSource { base, level }
    }

    fn levels_gained(&self) -> f64 {
        self.level as f64 - 1.0
    }
}

impl StatSource for GrowthSource<'_> {
    fn id(&self) -> &str {
        "level_growth"
    }

    fn priority(&self) -> i32 {
        -100 // Growth applies before any item multiplier
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        let levels = self.levels_gained();

        stats.hp_flat += self.base.hp_growth * levels;
        stats.attack_flat += self.base.attack_growth * levels;
        stats.armor_flat += self.base.armor_growth * levels;
        stats.magic_resist_flat += self.base.magic_resist_growth * levels;

        // Attack speed grows multiplicatively
        stats.attack_speed_more.push(self.base.attack_speed_growth * levels);
    }
}
