//! Analyze a loadout against the reference target

use super::CatalogArgs;
use anyhow::Result;
use clap::Parser;
use duel_core::analysis::{analyze_build, compare_builds, BuildAnalysis, BuildComparison};
use duel_core::analysis::{REFERENCE_TARGET_ARMOR, REFERENCE_TARGET_MAGIC_RESIST};

/// Analyze a loadout, optionally against a second one
#[derive(Parser, Debug)]
pub struct Build {
    /// Champion id
    pub champion: String,

    /// Item ids, comma separated
    #[arg(long, value_delimiter = ',')]
    pub items: Vec<String>,

    /// Second loadout to compare against, comma separated
    #[arg(long, value_delimiter = ',')]
    pub compare: Option<Vec<String>>,

    /// Champion level
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u32).range(1..=18))]
    pub level: u32,

    /// Print the analysis as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

impl Build {
    pub fn execute(self) -> Result<()> {
        let catalog = self.catalog.load()?;
        let champion = catalog.champion(&self.champion)?;
        let items = catalog.loadout(&self.items)?;

        match &self.compare {
            Some(other) => {
                let other = catalog.loadout(other)?;
                let comparison = compare_builds(champion, &items, &other, self.level);
                if self.json {
                    println!("{}", serde_json::to_string_pretty(&comparison)?);
                } else {
                    print_comparison(&comparison);
                }
            }
            None => {
                let analysis = analyze_build(champion, &items, self.level);
                if self.json {
                    println!("{}", serde_json::to_string_pretty(&analysis)?);
                } else {
                    print_analysis(&champion.name, &analysis);
                }
            }
        }
        Ok(())
    }
}

fn loadout_label(items: &[String]) -> String {
    if items.is_empty() {
        "no items".to_string()
    } else {
        items.join(", ")
    }
}

fn print_analysis(name: &str, analysis: &BuildAnalysis) {
    let stats = &analysis.stats;

    println!("{} (level {}) with {}", name, analysis.level, loadout_label(&analysis.items));
    println!(
        "  HP: {:.0}  Attack: {:.0}  Armor: {:.0}  MR: {:.0}",
        stats.hp, stats.attack, stats.armor, stats.magic_resist
    );
    println!(
        "  Atk Speed: {:.2}  Crit: {:.0}% x{:.0}%  Lifesteal: {:.0}%  Armor Pen: {:.0}",
        stats.attack_speed,
        stats.crit_chance,
        stats.crit_damage,
        stats.lifesteal,
        stats.armor_penetration
    );
    println!(
        "  Against {:.0} armor / {:.0} MR:",
        REFERENCE_TARGET_ARMOR, REFERENCE_TARGET_MAGIC_RESIST
    );
    println!("    - DPS: {:.1}", analysis.dps);
    println!("    - Burst: {:.0}", analysis.burst_damage());
    for (slot, damage) in &analysis.burst.abilities {
        println!("        {:?}: {:.0}", slot, damage);
    }
    println!("        Basic attacks: {:.0}", analysis.burst.basic_attacks);
    println!("  Effective HP: {:.0}", analysis.effective_hp);
    println!("  Cost: {}g", analysis.cost);
}

fn signed(value: f64) -> String {
    if value > 0.0 {
        format!("+{:.1}", value)
    } else {
        format!("{:.1}", value)
    }
}

fn print_comparison(comparison: &BuildComparison) {
    let delta = &comparison.delta;

    println!("A: {}", loadout_label(&comparison.a.items));
    println!("B: {}", loadout_label(&comparison.b.items));
    for (name, old, new) in comparison.changed_stats() {
        println!("  {}: {:.1} -> {:.1} ({})", name, old, new, signed(new - old));
    }
    println!("  DPS: {}", signed(delta.dps));
    println!("  Burst: {}", signed(delta.burst));
    println!("  Effective HP: {}", signed(delta.effective_hp));
    println!("  Cost: {:+}g", delta.cost);
}
