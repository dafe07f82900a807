//! Failure modes of the GA core.

/// Errors raised by the GA core.
///
/// The solver validates its inputs up front and fails fast instead of
/// producing silently wrong tours.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GaError {
    #[error("city list is empty")]
    EmptyCityList,

    #[error("population size must be at least 1")]
    ZeroPopulation,

    #[error("generation count must be at least 1")]
    ZeroGenerations,

    #[error("mutation rate {0} is outside [0, 1]")]
    InvalidMutationRate(f64),

    #[error("elite count {elites} exceeds population size {population}")]
    TooManyElites { elites: usize, population: usize },

    #[error("tour is not a permutation of 0..{len}: {reason}")]
    NotAPermutation { len: usize, reason: String },

    #[error("length mismatch: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("crossover window [{start}, {end}] is out of bounds for length {len}")]
    CrossoverWindow { start: usize, end: usize, len: usize },

    #[error("crossover exhausted the second parent while filling position {position}")]
    CrossoverOverrun { position: usize },

    #[error("population is empty")]
    EmptyPopulation,

    #[error("rank list has {ranks} entries but the population has {population}")]
    StaleRanks { ranks: usize, population: usize },

    #[error("tour {index} has a non-finite length; coordinates are too large")]
    NonFiniteFitness { index: usize },

    #[error("total population fitness overflows; coordinates are too large")]
    FitnessOverflow,
}
