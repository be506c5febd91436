//! ItemSource - Stats from equipped items

use crate::item::ItemModifier;
use crate::source::StatSource;
use crate::stat_block::StatAccumulator;

/// Stats from one equipped item
pub struct ItemSource<'a> {
    pub item: &'a ItemModifier,
}

impl<'a> ItemSource<'a> {
    /// Create a new item source
    pub fn new(item: &'a ItemModifier) -> Self {
        ItemSource { item }
    }
}

impl StatSource for ItemSource<'_> {
    fn id(&self) -> &str {
        &self.item.id
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        let bag = &self.item.stats;

        stats.attack_flat += bag.attack.unwrap_or(0.0);
        stats.hp_flat += bag.hp.unwrap_or(0.0);
        stats.armor_flat += bag.armor.unwrap_or(0.0);
        stats.magic_resist_flat += bag.magic_resist.unwrap_or(0.0);
        stats.crit_chance_flat += bag.crit_chance.unwrap_or(0.0);
        stats.crit_damage_flat += bag.crit_damage.unwrap_or(0.0);
        stats.lifesteal_flat += bag.lifesteal.unwrap_or(0.0);
        stats.armor_penetration_flat += bag.armor_penetration.unwrap_or(0.0);

        if let Some(percent) = bag.attack_speed {
            stats.attack_speed_more.push(percent / 100.0);
        }
        // ability_power and magic_penetration are carried for display only
    }
}
