//! Permutation recombination and mutation operators.
//!
//! Both operators work on `&[usize]` index vectors, the representation
//! behind [`Tour`](super::Tour).
//!
//! - [`crossover`]: copy a window from parent1, fill the rest in parent2's order
//! - [`reverse_mutation`]: reverse one contiguous segment with a given probability

use super::error::GaError;
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Builds one child from two parent permutations.
///
/// # Algorithm
///
/// 1. Copy `parent1[start..=end]` into the same child positions
/// 2. Walk the unset child positions left to right; for each, advance a
///    cursor through `parent2` (it persists across positions), skip
///    values already in the child and take the first remaining one
///
/// An empty window (`start > end`) copies nothing, so the child is filled
/// entirely from `parent2`.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Errors
/// - [`GaError::LengthMismatch`] if the parents differ in length
/// - [`GaError::CrossoverWindow`] if a non-empty window ends past the parents
/// - [`GaError::NotAPermutation`] if a value is outside `0..n`
/// - [`GaError::CrossoverOverrun`] if `parent2` runs out while positions are
///   still unset, which happens only when the parents are not permutations
///   of the same set
pub fn crossover(
    parent1: &[usize],
    parent2: &[usize],
    start: usize,
    end: usize,
) -> Result<Vec<usize>, GaError> {
    let n = parent1.len();
    if parent2.len() != n {
        return Err(GaError::LengthMismatch {
            expected: n,
            found: parent2.len(),
        });
    }
    if start <= end && end >= n {
        return Err(GaError::CrossoverWindow { start, end, len: n });
    }

    let mut child: Vec<Option<usize>> = vec![None; n];
    let mut placed = vec![false; n];

    if start <= end {
        for i in start..=end {
            let v = parent1[i];
            mark_placed(&mut placed, v)?;
            child[i] = Some(v);
        }
    }

    let mut cursor = 0;
    for (position, slot) in child.iter_mut().enumerate() {
        if slot.is_some() {
            continue;
        }
        loop {
            let &v = parent2
                .get(cursor)
                .ok_or(GaError::CrossoverOverrun { position })?;
            cursor += 1;
            if v >= n {
                return Err(out_of_range(n, v));
            }
            if !placed[v] {
                placed[v] = true;
                *slot = Some(v);
                break;
            }
        }
    }

    // Every slot was filled above.
    Ok(child.into_iter().flatten().collect())
}

fn mark_placed(placed: &mut [bool], v: usize) -> Result<(), GaError> {
    let n = placed.len();
    match placed.get_mut(v) {
        Some(seen) if *seen => Err(GaError::NotAPermutation {
            len: n,
            reason: format!("index {v} appears twice in the copied window"),
        }),
        Some(seen) => {
            *seen = true;
            Ok(())
        }
        None => Err(out_of_range(n, v)),
    }
}

fn out_of_range(n: usize, v: usize) -> GaError {
    GaError::NotAPermutation {
        len: n,
        reason: format!("index {v} out of range"),
    }
}

/// The fixed crossover window `[1, n / 2]` used for every pair in every
/// generation.
pub fn fixed_window(n: usize) -> (usize, usize) {
    (1, n / 2)
}

// ============================================================================
// Mutation
// ============================================================================

/// Reverses one random segment of `perm` with probability `rate`.
///
/// On a hit, `start` is drawn from `[0, n-2]` and `end` from
/// `[start+1, n-1]`, then `perm[start..=end]` is reversed. Returns the
/// reversed bounds, or `None` when nothing changed. At most one reversal
/// happens per call.
///
/// Tours shorter than two cities have no segment to reverse and are left
/// unchanged after the coin-flip.
///
/// # Errors
/// [`GaError::InvalidMutationRate`] if `rate` is outside `[0, 1]`.
pub fn reverse_mutation<R: Rng>(
    perm: &mut [usize],
    rate: f64,
    rng: &mut R,
) -> Result<Option<(usize, usize)>, GaError> {
    if !(0.0..=1.0).contains(&rate) {
        return Err(GaError::InvalidMutationRate(rate));
    }
    if rng.random::<f64>() >= rate {
        return Ok(None);
    }
    let n = perm.len();
    if n < 2 {
        return Ok(None);
    }
    let start = rng.random_range(0..=n - 2);
    let end = rng.random_range(start + 1..=n - 1);
    perm[start..=end].reverse();
    Ok(Some((start, end)))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use std::collections::HashSet;

    fn is_valid_permutation(perm: &[usize], n: usize) -> bool {
        if perm.len() != n {
            return false;
        }
        let set: HashSet<usize> = perm.iter().copied().collect();
        set.len() == n && perm.iter().all(|&v| v < n)
    }

    // ---- Crossover ----

    #[test]
    fn test_crossover_hand_traced() {
        let child = crossover(&[0, 1, 2, 3], &[3, 2, 1, 0], 1, 2).unwrap();
        assert_eq!(child, vec![3, 1, 2, 0]);
    }

    #[test]
    fn test_crossover_keeps_window() {
        let p1 = vec![4, 0, 6, 2, 7, 1, 5, 3];
        let p2 = vec![0, 1, 2, 3, 4, 5, 6, 7];
        let (start, end) = fixed_window(p1.len());
        let child = crossover(&p1, &p2, start, end).unwrap();
        assert_eq!(&child[start..=end], &p1[start..=end]);
        assert!(is_valid_permutation(&child, 8));
        // Unset positions take 1, 3, 4, 5 in parent2's order
        assert_eq!(child, vec![1, 0, 6, 2, 7, 3, 4, 5]);
    }

    #[test]
    fn test_crossover_identical_parents() {
        let p = vec![2, 0, 1, 4, 3];
        assert_eq!(crossover(&p, &p, 1, 2).unwrap(), p);
    }

    #[test]
    fn test_crossover_empty_window_copies_parent2() {
        let child = crossover(&[0], &[0], 1, 0).unwrap();
        assert_eq!(child, vec![0]);
        let child = crossover(&[0, 1, 2], &[2, 1, 0], 2, 1).unwrap();
        assert_eq!(child, vec![2, 1, 0]);
    }

    #[test]
    fn test_crossover_length_mismatch() {
        assert_eq!(
            crossover(&[0, 1, 2], &[0, 1], 1, 1),
            Err(GaError::LengthMismatch {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_crossover_window_out_of_bounds() {
        assert_eq!(
            crossover(&[0, 1, 2], &[2, 1, 0], 1, 3),
            Err(GaError::CrossoverWindow {
                start: 1,
                end: 3,
                len: 3
            })
        );
    }

    #[test]
    fn test_crossover_overrun_on_mismatched_sets() {
        // parent2 repeats 1 and lacks 3, so the fill runs off its end.
        let err = crossover(&[0, 1, 2, 3], &[1, 1, 0, 2], 1, 2).unwrap_err();
        assert_eq!(err, GaError::CrossoverOverrun { position: 3 });
    }

    #[test]
    fn test_crossover_rejects_out_of_range_values() {
        let err = crossover(&[0, 9, 2], &[0, 1, 2], 1, 1).unwrap_err();
        assert!(matches!(err, GaError::NotAPermutation { .. }));
    }

    #[test]
    fn test_fixed_window() {
        assert_eq!(fixed_window(1), (1, 0));
        assert_eq!(fixed_window(4), (1, 2));
        assert_eq!(fixed_window(9), (1, 4));
    }

    // ---- Mutation ----

    #[test]
    fn test_mutation_rate_zero_never_changes() {
        let mut rng = create_rng(42);
        let original: Vec<usize> = (0..10).collect();
        for _ in 0..200 {
            let mut perm = original.clone();
            assert_eq!(reverse_mutation(&mut perm, 0.0, &mut rng).unwrap(), None);
            assert_eq!(perm, original);
        }
    }

    #[test]
    fn test_mutation_rate_one_reverses_exactly_one_segment() {
        let mut rng = create_rng(42);
        let original: Vec<usize> = (0..10).collect();
        for _ in 0..200 {
            let mut perm = original.clone();
            let (start, end) = reverse_mutation(&mut perm, 1.0, &mut rng)
                .unwrap()
                .expect("rate 1.0 always mutates");
            assert!(start < end && end <= 9);

            let mut expected = original.clone();
            expected[start..=end].reverse();
            assert_eq!(perm, expected);
        }
    }

    #[test]
    fn test_mutation_two_cities_swaps() {
        let mut rng = create_rng(1);
        let mut perm = vec![0, 1];
        assert_eq!(
            reverse_mutation(&mut perm, 1.0, &mut rng).unwrap(),
            Some((0, 1))
        );
        assert_eq!(perm, vec![1, 0]);
    }

    #[test]
    fn test_mutation_single_city_unchanged() {
        let mut rng = create_rng(1);
        let mut perm = vec![0];
        assert_eq!(reverse_mutation(&mut perm, 1.0, &mut rng).unwrap(), None);
        assert_eq!(perm, vec![0]);
    }

    #[test]
    fn test_mutation_rejects_bad_rate() {
        let mut rng = create_rng(1);
        let mut perm = vec![0, 1, 2];
        assert_eq!(
            reverse_mutation(&mut perm, -0.1, &mut rng),
            Err(GaError::InvalidMutationRate(-0.1))
        );
    }

    #[test]
    fn test_mutation_rate_is_respected() {
        let mut rng = create_rng(7);
        let mut hits = 0;
        for _ in 0..10_000 {
            let mut perm: Vec<usize> = (0..6).collect();
            if reverse_mutation(&mut perm, 0.2, &mut rng).unwrap().is_some() {
                hits += 1;
            }
        }
        assert!((1_700..2_300).contains(&hits), "got {hits} hits");
    }
}
