//! Genetic Algorithm for closed tours.
//!
//! Individuals are [`Tour`]s: validated permutations of indices into a
//! shared city list. One generation ranks the population by tour length,
//! builds a roulette mating pool, keeps the elites and breeds one child per
//! pair of pool slots.
//!
//! # Key Types
//!
//! - [`GaConfig`] / [`RunParameters`]: run sizing, seed and reporting options
//! - [`GaRunner`]: executes the evolutionary loop
//! - [`GaResult`]: reported tour, fitness and per-generation statistics
//!
//! # Building Blocks
//!
//! - [`initial_population`], [`rank`], [`next_generation`]
//! - [`build_mating_pool`]: fitness-proportionate parent sampling
//! - [`operators`]: fixed-window crossover and reversal mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod error;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::{GaConfig, RunParameters};
pub use error::GaError;
pub use runner::{initial_population, next_generation, rank, GaResult, GaRunner, GenerationStats};
pub use selection::build_mating_pool;
pub use types::{fitness, Population, RankEntry, RankList, Tour};
