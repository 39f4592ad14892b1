//! schelling CLI - Chip-redistribution simulations over colored grid graphs
//!
//! This CLI provides a unified interface for:
//! - Checking a graph layout's structural invariants
//! - Driving multi-round simulations with seeded, reproducible traces

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "schelling")]
#[command(version, about = "Chip-redistribution simulator over colored grid graphs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation from a layout file
    Run(schelling_graph::cli::commands::run::RunArgs),

    /// Check a layout's structural invariants
    Check(schelling_graph::cli::commands::check::CheckArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => schelling_graph::cli::commands::run::execute(args),
        Commands::Check(args) => schelling_graph::cli::commands::check::execute(args),
    }
}
