//! Chip initialization strategies.
//!
//! Strategies assign chip counts to nodes in the graph's canonical node
//! order, threading an explicit random source so seeded runs are
//! reproducible. Precondition failures (mismatched lengths, probability
//! vectors off tolerance) are fatal errors; nothing is partially assigned.

use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    graph::Graph,
    types::{MULTINOMIAL_BUDGET, PROBABILITY_TOLERANCE},
    utils::sample_categorical,
};

/// A chip distribution policy applied once before a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "lowercase")]
pub enum ChipInit {
    /// Each node's count drawn independently and uniformly from `[min, max]`.
    Uniform { min: u32, max: u32 },
    /// A single multinomial draw with total budget
    /// [`MULTINOMIAL_BUDGET`]: `pvals` holds one probability weight per node
    /// in canonical order and must sum to 1 within
    /// [`PROBABILITY_TOLERANCE`].
    Multinomial { pvals: Vec<f64> },
    /// Positional assignment of an explicit list, optionally permuted first.
    Explicit { chips: Vec<u32>, randomize: bool },
}

impl ChipInit {
    /// Apply the strategy to every node of the graph.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidChipRange`] when a uniform range is inverted.
    /// - [`Error::InitLengthMismatch`] when `pvals` or `chips` does not have
    ///   one entry per node.
    /// - [`Error::ProbabilitySum`] when `pvals` is off tolerance.
    pub fn apply<R: Rng>(&self, graph: &mut Graph, rng: &mut R) -> Result<()> {
        match self {
            ChipInit::Uniform { min, max } => init_uniform(graph, rng, *min, *max),
            ChipInit::Multinomial { pvals } => init_multinomial(graph, rng, pvals),
            ChipInit::Explicit { chips, randomize } => {
                init_explicit(graph, rng, chips, *randomize)
            }
        }
    }
}

/// Draw each node's chip count independently and uniformly from `[min, max]`.
pub fn init_uniform<R: Rng>(graph: &mut Graph, rng: &mut R, min: u32, max: u32) -> Result<()> {
    if min > max {
        return Err(Error::InvalidChipRange { min, max });
    }
    let ids = graph.node_ids().to_vec();
    for &id in &ids {
        let chips = rng.random_range(min..=max);
        graph.node_mut(id).set_chips(chips);
    }
    Ok(())
}

/// Distribute a fixed budget of [`MULTINOMIAL_BUDGET`] chips over the nodes
/// with one multinomial draw, assigning counts positionally.
pub fn init_multinomial<R: Rng>(graph: &mut Graph, rng: &mut R, pvals: &[f64]) -> Result<()> {
    if pvals.len() != graph.len() {
        return Err(Error::InitLengthMismatch {
            expected: graph.len(),
            got: pvals.len(),
        });
    }
    let sum: f64 = pvals.iter().sum();
    if (sum - 1.0).abs() > PROBABILITY_TOLERANCE {
        return Err(Error::ProbabilitySum {
            sum,
            tolerance: PROBABILITY_TOLERANCE,
        });
    }

    let mut counts = vec![0u32; pvals.len()];
    for _ in 0..MULTINOMIAL_BUDGET {
        counts[sample_categorical(pvals, rng)] += 1;
    }

    let ids = graph.node_ids().to_vec();
    for (&id, &chips) in ids.iter().zip(&counts) {
        graph.node_mut(id).set_chips(chips);
    }
    Ok(())
}

/// Assign an explicit chip list positionally, permuting it first when
/// `randomize` is set.
pub fn init_explicit<R: Rng>(
    graph: &mut Graph,
    rng: &mut R,
    chips: &[u32],
    randomize: bool,
) -> Result<()> {
    if chips.len() != graph.len() {
        return Err(Error::InitLengthMismatch {
            expected: graph.len(),
            got: chips.len(),
        });
    }

    let mut values = chips.to_vec();
    if randomize {
        values.shuffle(rng);
    }

    let ids = graph.node_ids().to_vec();
    for (&id, &count) in ids.iter().zip(&values) {
        graph.node_mut(id).set_chips(count);
    }
    Ok(())
}
