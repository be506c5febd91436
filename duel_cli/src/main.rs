//! duel_cli - run duel estimates from the command line
//!
//! Run with: `duel_cli fight <champion_a> <champion_b>` or
//! `duel_cli build <champion>` or `duel_cli counters <champion>`

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Build, Counters, Fight};

/// Estimate 1v1 champion duels
#[derive(Parser)]
#[command(name = "duel_cli")]
#[command(about = "Estimate 1v1 champion duels", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Simulate a duel between two champions
    Fight(Fight),

    /// Analyze a loadout, optionally against a second one
    Build(Build),

    /// List counter matchups for a champion
    Counters(Counters),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Fight(cmd) => cmd.execute(),
        Command::Build(cmd) => cmd.execute(),
        Command::Counters(cmd) => cmd.execute(),
    }
}
