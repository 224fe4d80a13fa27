//! Permutation-preserving crossover and mutation operators.
//!
//! Both operators take their inputs by slice and return a new tour, so a
//! parent is never modified by producing a child from it.
//!
//! # Operators
//!
//! - [`order_crossover`] (OX): Davis (1985), keeps a segment of one parent
//!   and the relative order of the other
//! - [`inversion_mutation`]: Reverse a random segment (2-opt move)
//!
//! Each has an `_at` variant that takes explicit cut points instead of an
//! `Rng`.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Order Crossover (OX) producing a single child.
///
/// Draws two distinct cut points `a < b` and delegates to
/// [`order_crossover_at`].
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the parents have different lengths or fewer than 2 elements.
pub fn order_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n >= 2, "crossover needs at least 2 genes");

    let (a, b) = distinct_cut_points(n, rng);
    order_crossover_at(parent1, parent2, a, b)
}

/// Order Crossover with explicit cut points.
///
/// 1. Copy `parent1[a..b]` into the child at positions `a..b`
/// 2. Walk `parent2` cyclically starting at position `b`
/// 3. Place every gene not already in the child into the next free slot,
///    scanning slots cyclically from `b`
///
/// The free slots are exactly `b..n` followed by `0..a`, and there are as
/// many of them as genes left to place, so the child is a permutation.
///
/// # Panics
/// Panics if the parents have different lengths, or unless `a < b <= n`.
pub fn order_crossover_at(parent1: &[usize], parent2: &[usize], a: usize, b: usize) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(a < b && b <= n, "cut points must satisfy a < b <= n");

    let mut child = vec![usize::MAX; n];
    let mut placed = vec![false; n];

    for i in a..b {
        child[i] = parent1[i];
        placed[parent1[i]] = true;
    }

    let mut pos = b % n;
    for offset in 0..n {
        let gene = parent2[(b + offset) % n];
        if !placed[gene] {
            child[pos] = gene;
            placed[gene] = true;
            pos = (pos + 1) % n;
        }
    }

    child
}

// ============================================================================
// Mutation
// ============================================================================

/// Inversion mutation: reverse a random segment of a copy of `tour`.
///
/// Tours with fewer than 2 elements are returned unchanged.
///
/// # Complexity
/// O(n)
pub fn inversion_mutation<R: Rng>(tour: &[usize], rng: &mut R) -> Vec<usize> {
    if tour.len() < 2 {
        return tour.to_vec();
    }
    let (i, j) = distinct_cut_points(tour.len(), rng);
    inversion_mutation_at(tour, i, j)
}

/// Reverses the inclusive range `[i, j]` of a copy of `tour`.
///
/// # Panics
/// Panics unless `i <= j < tour.len()`.
pub fn inversion_mutation_at(tour: &[usize], i: usize, j: usize) -> Vec<usize> {
    let mut mutated = tour.to_vec();
    mutated[i..=j].reverse();
    mutated
}

// ============================================================================
// Helpers
// ============================================================================

/// Two distinct indices drawn uniformly from `0..n`, returned in ascending
/// order. Requires `n >= 2`.
fn distinct_cut_points<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let mut b = rng.random_range(0..n - 1);
    if b >= a {
        b += 1;
    }
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// Tests
// ============================================================================
