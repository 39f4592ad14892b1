//! Sampling utilities shared by the initialization strategies.

use rand::{Rng, distr::StandardUniform};

/// Sample an index from a categorical distribution given a probability vector.
///
/// Uses the standard cumulative-scan method: draw a ticket in [0, 1), then
/// walk the weights until the cumulative mass crosses the ticket. Weights are
/// assumed to sum to 1 (callers validate beforehand); the last index is
/// returned as a numerical-stability fallback.
///
/// # Examples
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use schelling_graph::utils::sample_categorical;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let idx = sample_categorical(&[0.25, 0.5, 0.25], &mut rng);
/// assert!(idx < 3);
/// ```
pub fn sample_categorical<R: Rng>(weights: &[f64], rng: &mut R) -> usize {
    debug_assert!(!weights.is_empty());
    let ticket: f64 = rng.sample(StandardUniform);
    let mut cumulative = 0.0;
    for (idx, weight) in weights.iter().enumerate() {
        cumulative += weight;
        if ticket < cumulative {
            return idx;
        }
    }
    weights.len() - 1
}
