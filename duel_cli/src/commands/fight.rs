//! Simulate a duel between two champions

use super::CatalogArgs;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use duel_core::combat::{simulate_fight, CombatSettings, FightResult, OperationTier};
use duel_core::types::Side;
use tracing::info;

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum SideArg {
    A,
    B,
}

impl From<SideArg> for Side {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::A => Side::SideA,
            SideArg::B => Side::SideB,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum TierArg {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
    Master,
}

impl From<TierArg> for OperationTier {
    fn from(tier: TierArg) -> Self {
        match tier {
            TierArg::Bronze => OperationTier::Bronze,
            TierArg::Silver => OperationTier::Silver,
            TierArg::Gold => OperationTier::Gold,
            TierArg::Platinum => OperationTier::Platinum,
            TierArg::Diamond => OperationTier::Diamond,
            TierArg::Master => OperationTier::Master,
        }
    }
}

/// Simulate a duel between two champions
#[derive(Parser, Debug)]
pub struct Fight {
    /// Side A champion id
    pub champion_a: String,

    /// Side B champion id
    pub champion_b: String,

    /// Side A item ids, comma separated
    #[arg(long, value_delimiter = ',')]
    pub items_a: Vec<String>,

    /// Side B item ids, comma separated
    #[arg(long, value_delimiter = ',')]
    pub items_b: Vec<String>,

    /// Champion level for both sides
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u32).range(1..=18))]
    pub level: u32,

    /// Side that opens the fight
    #[arg(long, value_enum, default_value = "a")]
    pub first_strike: SideArg,

    /// Percent of ability damage that lands
    #[arg(long, default_value_t = 80.0)]
    pub hit_rate: f64,

    /// First striker opens with ignite
    #[arg(long)]
    pub ignite: bool,

    /// Flash is up (display only)
    #[arg(long)]
    pub flash: bool,

    /// Dodge rate percent (display only)
    #[arg(long, default_value_t = 0.0)]
    pub dodge: f64,

    /// Player execution tier
    #[arg(long, value_enum, default_value = "gold")]
    pub tier: TierArg,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

impl Fight {
    pub fn execute(self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.hit_rate) {
            anyhow::bail!("--hit-rate must be between 0 and 100");
        }

        let catalog = self.catalog.load()?;
        let champion_a = catalog.champion(&self.champion_a)?;
        let champion_b = catalog.champion(&self.champion_b)?;
        let items_a = catalog.loadout(&self.items_a)?;
        let items_b = catalog.loadout(&self.items_b)?;

        let settings = CombatSettings {
            level: self.level,
            first_strike: self.first_strike.into(),
            skill_hit_rate: self.hit_rate,
            ignite: self.ignite,
            flash: self.flash,
            dodge_rate: self.dodge,
            operation_tier: self.tier.into(),
        };

        info!(a = %champion_a.id, b = %champion_b.id, level = settings.level, "simulating duel");
        let result = simulate_fight(champion_a, &items_a, champion_b, &items_b, &settings);
        info!(summary = %result.summary(), "duel finished");

        if self.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            print_result(&champion_a.name, &champion_b.name, &result);
        }
        Ok(())
    }
}

fn print_result(name_a: &str, name_b: &str, result: &FightResult) {
    let name = |side: Side| match side {
        Side::SideA => name_a,
        Side::SideB => name_b,
    };
    let winner = result.winner.side().map_or("Nobody", name);

    println!("{} vs {}", name_a, name_b);
    println!("  Winner: {} ({:.1}% win rate for {})", winner, result.win_rate, name_a);
    println!("  Kill time: {:.1}s", result.kill_time);
    println!("  Remaining HP: {:.1}%", result.remaining_hp_percent);
    println!("  Damage dealt:");
    for side in [Side::SideA, Side::SideB] {
        println!("    - {}: {:.0}", name(side), result.damage_breakdown.of(side));
    }

    if !result.key_factors.is_empty() {
        println!("  Key factors:");
        for factor in &result.key_factors {
            println!("    - {}", factor);
        }
    }
}
