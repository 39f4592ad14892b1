//! Check command - Validate a layout's structural invariants

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use crate::layout::GraphLayout;

#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Path to the graph layout JSON file
    pub layout: PathBuf,
}

pub fn execute(args: CheckArgs) -> Result<()> {
    let layout = GraphLayout::load(&args.layout)
        .with_context(|| format!("loading layout from {}", args.layout.display()))?;
    let graph = layout.build().context("building graph from layout")?;

    println!(
        "{} nodes on a {}x{} grid, {} arrows wired",
        graph.len(),
        graph.max_x() + 1,
        graph.max_y() + 1,
        layout.arrows.len()
    );

    match graph.coherence_violation() {
        None => {
            println!("Graph is coherent.");
            Ok(())
        }
        Some(violation) => bail!("{violation}"),
    }
}
