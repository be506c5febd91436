//! StatBlock - Aggregated champion stats from level growth and items

mod aggregator;
mod computed;
mod stat_value;

pub use aggregator::StatAccumulator;
pub use computed::EffectiveStats;
pub use stat_value::StatValue;

use crate::champion::{BaseStats, ChampionTemplate};
use crate::item::ItemModifier;
use crate::source::{GrowthSource, ItemSource, StatSource};
use serde::{Deserialize, Serialize};

/// Critical strikes deal this percent of normal damage before items
pub const BASE_CRIT_DAMAGE: f64 = 175.0;

/// Stat state for one champion while sources are being applied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatBlock {
    // === Resources ===
    pub hp: StatValue,

    // === Defenses ===
    pub armor: StatValue,
    pub magic_resist: StatValue,

    // === Offense ===
    pub attack: StatValue,
    pub attack_speed: StatValue,
    pub crit_chance: StatValue,
    pub crit_damage: StatValue,
    pub armor_penetration: StatValue,

    // === Recovery ===
    pub lifesteal: StatValue,

    // === Utility ===
    pub move_speed: f64,
}

impl StatBlock {
    /// Create a block holding the champion's level 1 stats
    pub fn from_base(base: &BaseStats) -> Self {
        StatBlock {
            hp: StatValue::with_base(base.hp),
            armor: StatValue::with_base(base.armor),
            magic_resist: StatValue::with_base(base.magic_resist),
            attack: StatValue::with_base(base.attack),
            attack_speed: StatValue::with_base(base.attack_speed),
            crit_chance: StatValue::default(),
            crit_damage: StatValue::with_base(BASE_CRIT_DAMAGE),
            armor_penetration: StatValue::default(),
            lifesteal: StatValue::default(),
            move_speed: base.move_speed,
        }
    }

    /// Rebuild stats from all sources
    ///
    /// Sources are applied in ascending priority; sources with equal
    /// priority keep their given order.
    pub fn rebuild_from_sources(&mut self, sources: &[Box<dyn StatSource + '_>]) {
        self.hp.reset_to_base();
        self.armor.reset_to_base();
        self.magic_resist.reset_to_base();
        self.attack.reset_to_base();
        self.attack_speed.reset_to_base();
        self.crit_chance.reset_to_base();
        self.crit_damage.reset_to_base();
        self.armor_penetration.reset_to_base();
        self.lifesteal.reset_to_base();

        let mut accumulator = StatAccumulator::new();

        let mut sorted_sources: Vec<_> = sources.iter().collect();
        sorted_sources.sort_by_key(|s| s.priority());

        for source in sorted_sources {
            source.apply(&mut accumulator);
        }

        accumulator.apply_to(self);
    }

    /// Flatten into the record the damage formulas consume
    pub fn effective(&self) -> EffectiveStats {
        EffectiveStats {
            hp: self.hp.compute(),
            attack: self.attack.compute(),
            armor: self.armor.compute(),
            magic_resist: self.magic_resist.compute(),
            attack_speed: self.attack_speed.compute(),
            crit_chance: self.crit_chance.compute(),
            crit_damage: self.crit_damage.compute(),
            lifesteal: self.lifesteal.compute(),
            armor_penetration: self.armor_penetration.compute(),
            move_speed: self.move_speed,
        }
    }
}

/// Effective stats for a champion at `level` wearing `items`
///
/// Items may repeat; each copy applies independently. No clamping or
/// rounding is applied. Levels below 1 are not guarded and simply
/// extrapolate the growth curves.
pub fn compute_effective_stats(
    champion: &ChampionTemplate,
    items: &[ItemModifier],
    level: u32,
) -> EffectiveStats {
    let mut sources: Vec<Box<dyn StatSource + '_>> = Vec::with_capacity(items.len() + 1);
    sources.push(Box::new(GrowthSource::new(&champion.base_stats, level)));
    for item in items {
        sources.push(Box::new(ItemSource::new(item)));
    }

    let mut block = StatBlock::from_base(&champion.base_stats);
    block.rebuild_from_sources(&sources);
    block.effective()
}
