//! Core value types: tours, rank entries and rank lists.
//!
//! A [`Tour`] stores the visiting order as indices into a shared, read-only
//! city slice. Cities are never copied or mutated by the GA; every tour is
//! an independent index vector, so changing one tour cannot affect another.

use super::error::GaError;
use crate::geometry::{cycle_length, City};
use rand::Rng;

/// A population of tours. Its size is not fixed across generations.
pub type Population = Vec<Tour>;

/// A validated permutation of `0..n` describing a closed tour.
///
/// The permutation invariant is checked at construction
/// ([`Tour::new`], [`Tour::random`]) and carried by the type afterwards;
/// the crossover and mutation operators preserve it.
///
/// With the `serde` feature a tour (de)serializes as its plain index list;
/// deserialization goes through [`Tour::new`] and rejects non-permutations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<usize>", into = "Vec<usize>")
)]
pub struct Tour {
    order: Vec<usize>,
}

impl TryFrom<Vec<usize>> for Tour {
    type Error = GaError;

    fn try_from(order: Vec<usize>) -> Result<Self, Self::Error> {
        Self::new(order)
    }
}

impl From<Tour> for Vec<usize> {
    fn from(tour: Tour) -> Self {
        tour.order
    }
}

impl Tour {
    /// Wraps `order` after checking that it is a permutation of `0..order.len()`.
    ///
    /// # Errors
    /// [`GaError::EmptyCityList`] for an empty order,
    /// [`GaError::NotAPermutation`] on a duplicate or out-of-range index.
    pub fn new(order: Vec<usize>) -> Result<Self, GaError> {
        check_permutation(&order)?;
        Ok(Self { order })
    }

    /// The tour visiting cities `0, 1, ..., n-1` in input order.
    pub fn identity(n: usize) -> Result<Self, GaError> {
        if n == 0 {
            return Err(GaError::EmptyCityList);
        }
        Ok(Self {
            order: (0..n).collect(),
        })
    }

    /// A uniformly shuffled tour over `n` cities.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Result<Self, GaError> {
        let mut tour = Self::identity(n)?;
        crate::random::shuffle(&mut tour.order, rng);
        Ok(tour)
    }

    /// Wraps an order produced by an operator that preserves permutations.
    pub(crate) fn from_operator(order: Vec<usize>) -> Self {
        debug_assert!(check_permutation(&order).is_ok());
        Self { order }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Tours are never empty, so this is always `false`.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [usize] {
        &mut self.order
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.order
    }

    /// Iterates the cities of this tour in visiting order.
    pub fn cities<'a>(&'a self, cities: &'a [City]) -> impl Iterator<Item = &'a City> + 'a {
        self.order.iter().map(move |&i| &cities[i])
    }

    /// Materializes the tour as an ordered list of cities.
    pub fn to_path(&self, cities: &[City]) -> Vec<City> {
        self.cities(cities).copied().collect()
    }

    /// Total cyclic length of the tour over `cities`. Lower is better.
    ///
    /// # Panics
    /// Panics if `cities` is shorter than the tour.
    pub fn fitness(&self, cities: &[City]) -> f64 {
        // A tour is never empty, so the cycle always has a length.
        cycle_length(self.cities(cities)).unwrap_or(0.0)
    }
}

/// Total cyclic length of a raw city path.
///
/// # Errors
/// [`GaError::EmptyCityList`] for an empty path.
pub fn fitness(path: &[City]) -> Result<f64, GaError> {
    cycle_length(path).ok_or(GaError::EmptyCityList)
}

fn check_permutation(order: &[usize]) -> Result<(), GaError> {
    let n = order.len();
    if n == 0 {
        return Err(GaError::EmptyCityList);
    }
    let mut seen = vec![false; n];
    for &v in order {
        if v >= n {
            return Err(GaError::NotAPermutation {
                len: n,
                reason: format!("index {v} out of range"),
            });
        }
        if seen[v] {
            return Err(GaError::NotAPermutation {
                len: n,
                reason: format!("index {v} appears twice"),
            });
        }
        seen[v] = true;
    }
    Ok(())
}

/// Fitness of the individual at `index` in one specific population snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankEntry {
    pub index: usize,
    pub fitness: f64,
}

/// Rank entries sorted ascending by fitness; entry 0 is the best.
///
/// A rank list describes the population it was computed from and becomes
/// stale once that population is replaced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankList {
    entries: Vec<RankEntry>,
}

impl RankList {
    /// Sorts `entries` ascending by fitness.
    pub fn from_entries(mut entries: Vec<RankEntry>) -> Self {
        entries.sort_by(|a, b| {
            a.fitness
                .partial_cmp(&b.fitness)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Self { entries }
    }

    /// The best (lowest-fitness) entry, if any.
    pub fn best(&self) -> Option<&RankEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[RankEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankEntry> {
        self.entries.iter()
    }

    /// Sum of all fitness values.
    pub fn total_fitness(&self) -> f64 {
        self.entries.iter().map(|e| e.fitness).sum()
    }

    /// Mean fitness, or `None` when empty.
    pub fn mean_fitness(&self) -> Option<f64> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.total_fitness() / self.entries.len() as f64)
        }
    }
}

impl<'a> IntoIterator for &'a RankList {
    type Item = &'a RankEntry;
    type IntoIter = std::slice::Iter<'a, RankEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
