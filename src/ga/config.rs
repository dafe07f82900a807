//! GA configuration.
//!
//! [`RunParameters`] holds the four numbers that size a run;
//! [`GaConfig`] adds the seed and reporting switch around them.

use super::error::GaError;

/// Parameters derived once from the city count and held for the whole run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunParameters {
    /// Size of the initial population.
    ///
    /// The population shrinks from here every generation; see
    /// [`next_generation`](super::next_generation).
    pub population_size: usize,

    /// Number of generations to run. There is no early termination.
    pub generation_count: usize,

    /// Probability of reversing one segment of each child (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of best individuals copied unchanged into the next generation.
    pub elite_count: usize,
}

impl RunParameters {
    /// Step-function schedule by problem size. First matching tier wins.
    ///
    /// | cities | population | generations | mutation | elites |
    /// |--------|-----------:|------------:|---------:|-------:|
    /// | ≤ 10   | 50         | 100         | 0.05     | 1      |
    /// | ≤ 50   | 150        | 200         | 0.10     | 2      |
    /// | ≤ 100  | 300        | 500         | 0.15     | 3      |
    /// | > 100  | 500        | 1000        | 0.20     | 5      |
    pub fn schedule_for(city_count: usize) -> Self {
        let (population_size, generation_count, mutation_rate, elite_count) = if city_count <= 10 {
            (50, 100, 0.05, 1)
        } else if city_count <= 50 {
            (150, 200, 0.10, 2)
        } else if city_count <= 100 {
            (300, 500, 0.15, 3)
        } else {
            (500, 1000, 0.20, 5)
        };
        Self {
            population_size,
            generation_count,
            mutation_rate,
            elite_count,
        }
    }

    /// Checks every parameter against the solver's preconditions.
    pub fn validate(&self) -> Result<(), GaError> {
        if self.population_size == 0 {
            return Err(GaError::ZeroPopulation);
        }
        if self.generation_count == 0 {
            return Err(GaError::ZeroGenerations);
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GaError::InvalidMutationRate(self.mutation_rate));
        }
        if self.elite_count > self.population_size {
            return Err(GaError::TooManyElites {
                elites: self.elite_count,
                population: self.population_size,
            });
        }
        Ok(())
    }
}

/// Configuration for a GA run.
///
/// # Builder Pattern
///
/// ```
/// use u_tour3d::ga::GaConfig;
///
/// let config = GaConfig::auto_select(30)
///     .with_generations(50)
///     .with_seed(42);
/// assert_eq!(config.params.population_size, 150);
/// assert_eq!(config.params.generation_count, 50);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GaConfig {
    pub params: RunParameters,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,

    /// Re-rank the final population before reporting.
    ///
    /// When `false` (the default) the reported fitness comes from the
    /// rank list computed *before* the last generation transition while the
    /// reported tour is the first individual *after* it, so the two may
    /// describe different tours.
    pub final_rerank: bool,
}

impl GaConfig {
    /// Config using the size-based schedule for `city_count` cities.
    pub fn auto_select(city_count: usize) -> Self {
        Self::from_params(RunParameters::schedule_for(city_count))
    }

    pub fn from_params(params: RunParameters) -> Self {
        Self {
            params,
            seed: None,
            final_rerank: false,
        }
    }

    pub fn with_population_size(mut self, n: usize) -> Self {
        self.params.population_size = n;
        self
    }

    pub fn with_generations(mut self, n: usize) -> Self {
        self.params.generation_count = n;
        self
    }

    /// Sets the mutation rate. Not clamped; `validate` rejects values outside [0, 1].
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.params.mutation_rate = rate;
        self
    }

    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.params.elite_count = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_final_rerank(mut self, enabled: bool) -> Self {
        self.final_rerank = enabled;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), GaError> {
        self.params.validate()
    }
}
