//! Tournament parent selection.
//!
//! Parents are chosen by sampling a small subset of the population without
//! replacement and keeping the two lowest-cost members. Tournament
//! selection biases reproduction toward fitter individuals while bounding
//! selection pressure, and it stays numerically robust once exact matches
//! (cost 0) appear in the population, where inverse-cost weighting would
//! need degenerate-weight handling.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::seq::index;
use rand::Rng;

use super::types::Individual;

/// Selects two parent indices by tournament.
///
/// Draws `tournament_size` distinct indices (capped at the population
/// size), ranks the sample by cost ascending, and returns the two best.
/// When the capped sample holds a single individual, both returned indices
/// are that individual.
///
/// # Panics
///
/// Panics if `population` is empty.
pub(crate) fn tournament_pair<R: Rng>(
    population: &[Individual],
    tournament_size: usize,
    rng: &mut R,
) -> (usize, usize) {
    assert!(!population.is_empty(), "cannot select from empty population");

    let k = tournament_size.min(population.len());
    let mut sample = index::sample(rng, population.len(), k).into_vec();
    sample.sort_by_key(|&i| population[i].cost());

    let first = sample[0];
    let second = sample.get(1).copied().unwrap_or(first);
    (first, second)
}
