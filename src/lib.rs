//! Genetic-algorithm optimizer for closed tours through 3-D points.
//!
//! Given a fixed list of cities, the solver evolves a population of
//! candidate tours for a number of generations sized from the problem and
//! reports the best tour found:
//!
//! - **Geometry**: [`City`](geometry::City) and Euclidean distance.
//! - **GA**: population initialization, ranking, roulette mating pool,
//!   fixed-window crossover, reversal mutation, elitism and the
//!   complexity-based parameter schedule.
//! - **I/O**: the plain-text input format and report rendering used by the
//!   `u-tour3d` binary.
//!
//! # Example
//!
//! ```
//! use u_tour3d::ga::{GaConfig, GaRunner};
//! use u_tour3d::geometry::City;
//!
//! let cities = vec![
//!     City::new(0.0, 0.0, 0.0),
//!     City::new(1.0, 0.0, 0.0),
//!     City::new(1.0, 1.0, 0.0),
//!     City::new(0.0, 1.0, 0.0),
//! ];
//! let config = GaConfig::auto_select(cities.len()).with_seed(7);
//! let result = GaRunner::run(&cities, &config).unwrap();
//! assert_eq!(result.best.len(), 4);
//! ```

pub mod ga;
pub mod geometry;
pub mod io;
pub mod random;
