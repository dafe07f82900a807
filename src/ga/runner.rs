//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → (ranking → mating pool → crossover → mutation) × generations.

use super::config::GaConfig;
use super::error::GaError;
use super::operators::{crossover, fixed_window, reverse_mutation};
use super::selection::{build_mating_pool, check_ranks};
use super::types::{Population, RankEntry, RankList, Tour};
use crate::geometry::City;
use crate::random::create_rng;
use log::{debug, info, trace};
use rand::Rng;

/// Snapshot of one ranked generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Zero-based generation number.
    pub generation: usize,

    /// Lowest fitness in the ranked population.
    pub best_fitness: f64,

    /// Mean fitness of the ranked population.
    pub mean_fitness: f64,

    /// Number of individuals that were ranked.
    pub population_size: usize,
}

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The reported tour: the first individual of the final population,
    /// or the best of it when [`GaConfig::final_rerank`] is set.
    pub best: Tour,

    /// `best` resolved to cities, in visiting order.
    pub best_path: Vec<City>,

    /// The reported fitness.
    ///
    /// Without a final re-rank this is the best entry of the last rank
    /// list, computed before the final transition, and need not equal the
    /// length of `best`.
    pub best_fitness: f64,

    /// The actual length of `best`.
    pub best_tour_fitness: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Size of the population left after the last transition.
    pub final_population_size: usize,

    /// Statistics for every ranked generation.
    pub history: Vec<GenerationStats>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let config = GaConfig::auto_select(cities.len()).with_seed(42);
/// let result = GaRunner::run(&cities, &config)?;
/// println!("{:.3}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA over `cities` for exactly `generation_count` generations.
    ///
    /// # Errors
    /// Any [`GaError`] from config validation or an empty city list.
    pub fn run(cities: &[City], config: &GaConfig) -> Result<GaResult, GaError> {
        config.validate()?;
        if cities.is_empty() {
            return Err(GaError::EmptyCityList);
        }
        let params = config.params;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        info!(
            "starting GA: cities={}, population={}, generations={}, mutation_rate={}, elites={}",
            cities.len(),
            params.population_size,
            params.generation_count,
            params.mutation_rate,
            params.elite_count
        );

        // 1. Initialize population
        let mut population = initial_population(params.population_size, cities.len(), &mut rng)?;

        let mut ranks = RankList::default();
        let mut history = Vec::with_capacity(params.generation_count);

        // 2. Evolutionary loop
        for generation in 0..params.generation_count {
            ranks = rank(&population, cities)?;

            let stats = GenerationStats {
                generation,
                best_fitness: ranks.best().map_or(f64::INFINITY, |e| e.fitness),
                mean_fitness: ranks.mean_fitness().unwrap_or(f64::INFINITY),
                population_size: population.len(),
            };
            debug!(
                "generation {}: best={:.3}, mean={:.3}, size={}",
                stats.generation, stats.best_fitness, stats.mean_fitness, stats.population_size
            );
            history.push(stats);

            population = next_generation(
                &population,
                &ranks,
                params.elite_count,
                params.mutation_rate,
                &mut rng,
            )?;
        }

        // 3. Report
        let (best, best_fitness) = if config.final_rerank {
            let final_ranks = rank(&population, cities)?;
            let entry = final_ranks.best().ok_or(GaError::EmptyPopulation)?;
            (population[entry.index].clone(), entry.fitness)
        } else {
            let entry = ranks.best().ok_or(GaError::EmptyPopulation)?;
            let first = population.first().ok_or(GaError::EmptyPopulation)?;
            (first.clone(), entry.fitness)
        };
        let best_tour_fitness = best.fitness(cities);

        info!(
            "GA finished: best_fitness={:.3}, reported_tour_fitness={:.3}, final_population={}",
            best_fitness,
            best_tour_fitness,
            population.len()
        );

        Ok(GaResult {
            best_path: best.to_path(cities),
            best,
            best_fitness,
            best_tour_fitness,
            generations: params.generation_count,
            final_population_size: population.len(),
            history,
        })
    }
}

/// Builds `size` independently shuffled tours over `city_count` cities.
///
/// # Errors
/// [`GaError::ZeroPopulation`] for `size == 0`,
/// [`GaError::EmptyCityList`] for `city_count == 0`.
pub fn initial_population<R: Rng>(
    size: usize,
    city_count: usize,
    rng: &mut R,
) -> Result<Population, GaError> {
    if size == 0 {
        return Err(GaError::ZeroPopulation);
    }
    (0..size).map(|_| Tour::random(city_count, rng)).collect()
}

/// Evaluates every tour and sorts the entries ascending by fitness.
///
/// # Complexity
/// O(n·L) for evaluation plus O(n log n) for the sort
///
/// # Errors
/// [`GaError::LengthMismatch`] if a tour does not cover exactly `cities`,
/// [`GaError::NonFiniteFitness`] if a tour length overflows `f64`.
pub fn rank(population: &[Tour], cities: &[City]) -> Result<RankList, GaError> {
    let entries = population
        .iter()
        .enumerate()
        .map(|(index, tour)| {
            if tour.len() != cities.len() {
                return Err(GaError::LengthMismatch {
                    expected: cities.len(),
                    found: tour.len(),
                });
            }
            let fitness = tour.fitness(cities);
            if !fitness.is_finite() {
                return Err(GaError::NonFiniteFitness { index });
            }
            Ok(RankEntry { index, fitness })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(RankList::from_entries(entries))
}

/// Produces the next population from `population` and its rank list.
///
/// The `elite_count` best tours are copied unchanged. Then, for every
/// second mating-pool slot `i` from `elite_count` up to the pool size `m`,
/// parents `pool[i % m]` and `pool[(i + 1) % m]` yield **one** child via
/// [`crossover`] over the fixed window `[1, n / 2]`, followed by
/// [`reverse_mutation`].
///
/// Only one child is produced per pair, so the result holds
/// `elite_count + ceil((m - elite_count) / 2)` tours: the population
/// shrinks every generation until it settles at `elite_count + 1`.
///
/// # Errors
/// - [`GaError::EmptyPopulation`] / [`GaError::StaleRanks`] from the mating pool
/// - [`GaError::TooManyElites`] if `elite_count` exceeds the population
/// - [`GaError::InvalidMutationRate`] if `mutation_rate` is outside `[0, 1]`
pub fn next_generation<R: Rng>(
    population: &[Tour],
    ranks: &RankList,
    elite_count: usize,
    mutation_rate: f64,
    rng: &mut R,
) -> Result<Population, GaError> {
    if population.is_empty() {
        return Err(GaError::EmptyPopulation);
    }
    check_ranks(population, ranks)?;
    if elite_count > population.len() {
        return Err(GaError::TooManyElites {
            elites: elite_count,
            population: population.len(),
        });
    }
    if !(0.0..=1.0).contains(&mutation_rate) {
        return Err(GaError::InvalidMutationRate(mutation_rate));
    }

    let pool = build_mating_pool(population, ranks, rng)?;
    let m = pool.len();

    let mut next: Population = Vec::with_capacity(elite_count + (m - elite_count).div_ceil(2));

    // Elite preservation
    next.extend(
        ranks.entries()[..elite_count]
            .iter()
            .map(|e| population[e.index].clone()),
    );

    // Offspring: one child per pair of pool slots
    for i in (elite_count..m).step_by(2) {
        let parent1 = pool[i % m];
        let parent2 = pool[(i + 1) % m];
        let (start, end) = fixed_window(parent1.len());

        let mut child = Tour::from_operator(crossover(
            parent1.as_slice(),
            parent2.as_slice(),
            start,
            end,
        )?);
        if let Some((a, b)) = reverse_mutation(child.as_mut_slice(), mutation_rate, rng)? {
            trace!("slot {i}: reversed segment [{a}, {b}]");
        }
        next.push(child);
    }

    Ok(next)
}

// ============================================================================
// Tests
// ============================================================================
