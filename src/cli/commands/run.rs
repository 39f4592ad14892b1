//! Run command - Drive a simulation from a layout file

use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    engine::SimulationEngine, graph::Graph, layout::GraphLayout, observer::ProgressObserver,
    types::DEFAULT_ROUND_CAP,
};

#[derive(Debug, Parser)]
pub struct RunArgs {
    /// Path to the graph layout JSON file
    pub layout: PathBuf,

    /// Random seed for a reproducible round-by-round trace
    #[arg(long)]
    pub seed: Option<u64>,

    /// Maximum number of rounds to execute
    #[arg(long, default_value_t = DEFAULT_ROUND_CAP)]
    pub max_rounds: usize,

    /// Stop as soon as every chip-holding node sits on the zero boundary
    #[arg(long)]
    pub until_segregated: bool,

    /// Record one chip-matrix snapshot per productive round and write the
    /// sequence to this JSON file
    #[arg(long)]
    pub frames: Option<PathBuf>,

    /// Show a progress bar while the run executes
    #[arg(long)]
    pub progress: bool,
}

pub fn execute(args: RunArgs) -> Result<()> {
    let layout = GraphLayout::load(&args.layout)
        .with_context(|| format!("loading layout from {}", args.layout.display()))?;
    let mut graph = layout.build().context("building graph from layout")?;

    if let Some(violation) = graph.coherence_violation() {
        eprintln!("Warning: {violation}");
    }

    if let Some(init) = &layout.init {
        // Init draws come from an offset seed so the run's trace is
        // independent of the starting distribution's randomness.
        let mut init_rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
            None => StdRng::from_os_rng(),
        };
        init.apply(&mut graph, &mut init_rng)
            .context("applying chip initialization")?;
    }

    let mut engine = match args.seed {
        Some(seed) => SimulationEngine::seeded(seed),
        None => SimulationEngine::new(),
    };
    if args.frames.is_some() {
        engine = engine.with_frame_recording();
    }
    if args.progress {
        engine = engine.with_observer(Box::new(ProgressObserver::new()));
    }

    let until_segregated = args.until_segregated;
    let stop = move |g: &Graph| until_segregated && g.is_segregated();
    let log = engine
        .run_rounds(&mut graph, stop, args.max_rounds)
        .context("running simulation")?;

    for line in &log {
        println!("{line}");
    }
    println!("Total chips: {}", graph.total_chips());
    println!(
        "Segregated: {}",
        if graph.is_segregated() { "yes" } else { "no" }
    );

    if let Some(path) = &args.frames {
        let file = File::create(path)
            .with_context(|| format!("creating frames file {}", path.display()))?;
        serde_json::to_writer_pretty(file, engine.frames())
            .context("writing frame snapshots")?;
        println!("Wrote {} frames to {}", engine.frames().len(), path.display());
    }

    Ok(())
}
