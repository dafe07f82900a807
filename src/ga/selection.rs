//! Roulette-wheel mating pool.
//!
//! The wheel is weighted by raw fitness (tour length). Since lower fitness
//! is better, longer tours own larger segments of the wheel and are picked
//! as parents more often. Elitism is the only force favouring short tours.

use super::error::GaError;
use super::types::{RankList, Tour};
use rand::Rng;

/// Draws `population.len()` parents with replacement, each with probability
/// proportional to its fitness.
///
/// Each spin draws `r` from `[0, total)` and walks `ranks` in ascending
/// fitness order, selecting the first entry whose cumulative fitness
/// exceeds `r`. When every tour has zero length the wheel has no area and
/// selection falls back to uniform.
///
/// # Complexity
/// O(n²) per call: O(n) per spin, n spins
///
/// # Errors
/// - [`GaError::EmptyPopulation`] for an empty population
/// - [`GaError::StaleRanks`] if `ranks` was not computed from `population`
/// - [`GaError::FitnessOverflow`] if the fitness sum is not finite
pub fn build_mating_pool<'a, R: Rng>(
    population: &'a [Tour],
    ranks: &RankList,
    rng: &mut R,
) -> Result<Vec<&'a Tour>, GaError> {
    let n = population.len();
    if n == 0 {
        return Err(GaError::EmptyPopulation);
    }
    check_ranks(population, ranks)?;

    let total = ranks.total_fitness();
    if !total.is_finite() {
        return Err(GaError::FitnessOverflow);
    }
    let entries = ranks.entries();
    let mut pool = Vec::with_capacity(n);

    for _ in 0..n {
        let index = if total > 0.0 {
            spin(entries.iter().map(|e| (e.index, e.fitness)), total, rng)
        } else {
            entries[rng.random_range(0..entries.len())].index
        };
        pool.push(&population[index]);
    }

    Ok(pool)
}

/// One roulette spin over `(index, weight)` pairs summing to `total`.
fn spin<I, R>(weights: I, total: f64, rng: &mut R) -> usize
where
    I: Iterator<Item = (usize, f64)>,
    R: Rng,
{
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    let mut last = 0;
    for (index, weight) in weights {
        cumulative += weight;
        if cumulative > threshold {
            return index;
        }
        last = index;
    }
    last // floating-point fallback
}

/// Ensures `ranks` indexes exactly the individuals of `population`.
pub(crate) fn check_ranks(population: &[Tour], ranks: &RankList) -> Result<(), GaError> {
    let stale = GaError::StaleRanks {
        ranks: ranks.len(),
        population: population.len(),
    };
    if ranks.len() != population.len() || ranks.iter().any(|e| e.index >= population.len()) {
        return Err(stale);
    }
    Ok(())
}
