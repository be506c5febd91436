//! List counter matchups for a champion

use super::CatalogArgs;
use anyhow::Result;
use clap::Parser;
use duel_core::matchups::{countered_by, counters, Matchup};

/// List who counters a champion and who it counters
#[derive(Parser, Debug)]
pub struct Counters {
    /// Champion id
    pub champion: String,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

impl Counters {
    pub fn execute(self) -> Result<()> {
        let catalog = self.catalog.load()?;
        let champion = catalog.champion(&self.champion)?;

        println!("{} ({})", champion.name, champion.role);
        print_matchups("Countered by", &counters(&catalog, &champion.id)?);
        print_matchups("Counters", &countered_by(&catalog, &champion.id)?);
        Ok(())
    }
}

fn print_matchups(title: &str, matchups: &[Matchup<'_>]) {
    println!("  {}:", title);
    if matchups.is_empty() {
        println!("    (none)");
        return;
    }
    for matchup in matchups {
        println!("    - {} [{}]", matchup.champion.name, matchup.level.label());
        for reason in matchup.reasons {
            println!("        {}", reason);
        }
    }
}
