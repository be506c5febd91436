//! Build analysis - what a loadout does for one champion

use crate::champion::ChampionTemplate;
use crate::damage::{burst_breakdown, compute_sustained_dps, BurstBreakdown};
use crate::item::{loadout_cost, ItemModifier};
use crate::stat_block::{compute_effective_stats, EffectiveStats};
use serde::{Deserialize, Serialize};

/// Armor of the dummy a build is measured against
pub const REFERENCE_TARGET_ARMOR: f64 = 80.0;

/// Magic resist of the dummy a build is measured against
pub const REFERENCE_TARGET_MAGIC_RESIST: f64 = 50.0;

/// Offence and defence numbers for one champion wearing one loadout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildAnalysis {
    pub champion: String,
    pub level: u32,
    pub items: Vec<String>,
    pub stats: EffectiveStats,
    /// Sustained DPS against the reference target
    pub dps: f64,
    /// Combo damage against the reference target
    pub burst: BurstBreakdown,
    pub effective_hp: f64,
    pub cost: u32,
}

impl BuildAnalysis {
    pub fn burst_damage(&self) -> f64 {
        self.burst.total()
    }
}

/// Analyze a loadout against the reference target
pub fn analyze_build(
    champion: &ChampionTemplate,
    items: &[ItemModifier],
    level: u32,
) -> BuildAnalysis {
    let stats = compute_effective_stats(champion, items, level);

    BuildAnalysis {
        champion: champion.id.clone(),
        level,
        items: items.iter().map(|i| i.id.clone()).collect(),
        stats,
        dps: compute_sustained_dps(&stats, REFERENCE_TARGET_ARMOR),
        burst: burst_breakdown(
            champion,
            &stats,
            level,
            REFERENCE_TARGET_ARMOR,
            REFERENCE_TARGET_MAGIC_RESIST,
        ),
        effective_hp: stats.effective_hp(),
        cost: loadout_cost(items),
    }
}

/// Change in each headline metric going from build A to build B
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildDelta {
    pub attack: f64,
    pub hp: f64,
    pub dps: f64,
    pub burst: f64,
    pub effective_hp: f64,
    pub cost: i64,
}

/// Two loadouts on the same champion side by side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildComparison {
    pub a: BuildAnalysis,
    pub b: BuildAnalysis,
    pub delta: BuildDelta,
}

impl BuildComparison {
    /// Stats that moved noticeably, as (name, build A, build B)
    pub fn changed_stats(&self) -> Vec<(String, f64, f64)> {
        let (a, b) = (&self.a.stats, &self.b.stats);
        let check = |name: &str, old: f64, new: f64| -> Option<(String, f64, f64)> {
            if (new - old).abs() > 0.01 {
                Some((name.to_string(), old, new))
            } else {
                None
            }
        };

        [
            check("HP", a.hp, b.hp),
            check("Attack", a.attack, b.attack),
            check("Armor", a.armor, b.armor),
            check("Magic Resist", a.magic_resist, b.magic_resist),
            check("Atk Speed", a.attack_speed, b.attack_speed),
            check("Crit Chance", a.crit_chance, b.crit_chance),
            check("Crit Damage", a.crit_damage, b.crit_damage),
            check("Lifesteal", a.lifesteal, b.lifesteal),
            check("Armor Pen", a.armor_penetration, b.armor_penetration),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Compare two loadouts for one champion at one level
pub fn compare_builds(
    champion: &ChampionTemplate,
    items_a: &[ItemModifier],
    items_b: &[ItemModifier],
    level: u32,
) -> BuildComparison {
    let a = analyze_build(champion, items_a, level);
    let b = analyze_build(champion, items_b, level);

    let delta = BuildDelta {
        attack: b.stats.attack - a.stats.attack,
        hp: b.stats.hp - a.stats.hp,
        dps: b.dps - a.dps,
        burst: b.burst_damage() - a.burst_damage(),
        effective_hp: b.effective_hp - a.effective_hp,
        cost: i64::from(b.cost) - i64::from(a.cost),
    };

    BuildComparison { a, b, delta }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::champion::testing::bruiser;
    use crate::damage::compute_burst_damage;
    use crate::item::ItemStats;

    fn blade() -> ItemModifier {
        ItemModifier::new("blade", "Blade", 1300).with_stats(ItemStats {
            attack: Some(40.0),
            ..ItemStats::default()
        })
    }

    fn plate() -> ItemModifier {
        ItemModifier::new("plate", "Plate", 900).with_stats(ItemStats {
            hp: Some(200.0),
            armor: Some(40.0),
            ..ItemStats::default()
        })
    }

    #[test]
    fn test_analysis_matches_engine() {
        let champ = bruiser("test");
        let items = [blade(), plate()];
        let analysis = analyze_build(&champ, &items, 9);

        let stats = compute_effective_stats(&champ, &items, 9);
        assert_eq!(analysis.stats, stats);
        assert_eq!(analysis.dps, compute_sustained_dps(&stats, 80.0));
        let burst = compute_burst_damage(&champ, &stats, 9, 80.0, 50.0);
        assert!((analysis.burst_damage() - burst).abs() < 1e-9);
        assert_eq!(analysis.effective_hp, stats.effective_hp());
        assert_eq!(analysis.cost, 2200);
        assert_eq!(analysis.items, vec!["blade".to_string(), "plate".to_string()]);
    }

    #[test]
    fn test_empty_build() {
        let analysis = analyze_build(&bruiser("test"), &[], 1);
        assert_eq!(analysis.cost, 0);
        assert!(analysis.items.is_empty());
        // No R before level 6
        assert_eq!(analysis.burst.abilities.len(), 3);
    }

    #[test]
    fn test_compare_deltas() {
        let champ = bruiser("test");
        let comparison = compare_builds(&champ, &[blade()], &[plate()], 6);

        assert!((comparison.delta.attack + 40.0).abs() < 1e-9);
        assert!((comparison.delta.hp - 200.0).abs() < 1e-9);
        assert!(comparison.delta.dps < 0.0);
        assert!(comparison.delta.burst < 0.0);
        assert!(comparison.delta.effective_hp > 0.0);
        assert_eq!(comparison.delta.cost, -400);
    }

    #[test]
    fn test_changed_stats() {
        let champ = bruiser("test");
        let comparison = compare_builds(&champ, &[blade()], &[plate()], 6);
        let names: Vec<_> = comparison
            .changed_stats()
            .into_iter()
            .map(|(name, _, _)| name)
            .collect();
        assert_eq!(names, vec!["HP", "Attack", "Armor"]);

        let same = compare_builds(&champ, &[blade()], &[blade()], 6);
        assert!(same.changed_stats().is_empty());
    }
}
