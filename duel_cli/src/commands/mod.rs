//! Subcommands

mod build;
mod counters;
mod fight;

pub use build::Build;
pub use counters::Counters;
pub use fight::Fight;

use anyhow::{Context, Result};
use clap::Args;
use duel_core::config::{default_catalog, Catalog};
use std::path::PathBuf;

/// Where champion and item data come from
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Champion catalog TOML (defaults to the built-in one)
    #[arg(long, requires = "item_catalog")]
    pub champion_catalog: Option<PathBuf>,

    /// Item catalog TOML (defaults to the built-in one)
    #[arg(long, requires = "champion_catalog")]
    pub item_catalog: Option<PathBuf>,
}

impl CatalogArgs {
    pub fn load(&self) -> Result<Catalog> {
        match (&self.champion_catalog, &self.item_catalog) {
            (Some(champions), Some(items)) => {
                Catalog::load(champions, items).with_context(|| {
                    format!("loading {} and {}", champions.display(), items.display())
                })
            }
            _ => default_catalog().context("loading built-in catalog"),
        }
    }
}
