//! Item modifiers - immutable reference data loaded from the catalog

use serde::{Deserialize, Serialize};

/// An equippable item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemModifier {
    pub id: String,
    pub name: String,
    /// Gold cost (display and build totals only)
    pub cost: u32,
    #[serde(default)]
    pub stats: ItemStats,
    /// Passive effect text, never computed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passive: Option<String>,
}

/// Optional stat bag; absent entries contribute nothing
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attack: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ability_power: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub armor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magic_resist: Option<f64>,
    /// Percent bonus, stacks multiplicatively per item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attack_speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crit_chance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crit_damage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifesteal: Option<f64>,
    /// Flat armor penetration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub armor_penetration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magic_penetration: Option<f64>,
}

impl ItemModifier {
    /// Create an item with no stats
    pub fn new(id: impl Into<String>, name: impl Into<String>, cost: u32) -> Self {
        ItemModifier {
            id: id.into(),
            name: name.into(),
            cost,
            stats: ItemStats::default(),
            passive: None,
        }
    }

    /// Builder-style stat assignment
    pub fn with_stats(mut self, stats: ItemStats) -> Self {
        self.stats = stats;
        self
    }
}

impl ItemStats {
    /// Stats the item actually carries, as (name, value)
    pub fn entries(&self) -> Vec<(&'static str, f64)> {
        [
            ("attack", self.attack),
            ("ability_power", self.ability_power),
            ("hp", self.hp),
            ("armor", self.armor),
            ("magic_resist", self.magic_resist),
            ("attack_speed", self.attack_speed),
            ("crit_chance", self.crit_chance),
            ("crit_damage", self.crit_damage),
            ("lifesteal", self.lifesteal),
            ("armor_penetration", self.armor_penetration),
            ("magic_penetration", self.magic_penetration),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
        .collect()
    }
}

/// Total gold cost of a loadout
pub fn loadout_cost(items: &[ItemModifier]) -> u32 {
    items.iter().map(|item| item.cost).sum()
}
