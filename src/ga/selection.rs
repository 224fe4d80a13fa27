//! Parent selection.
//!
//! Tournament selection samples a few tours and keeps the shortest.
//! The tournament size controls selection pressure: larger tournaments
//! favor the elites more strongly.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use crate::tsp::ScoredTour;
use rand::seq::index;
use rand::Rng;

/// Tournament selection without replacement.
///
/// Draws `k` distinct entries uniformly from `scored` and returns the one
/// with the smallest distance. On ties the entry drawn first wins.
///
/// # Complexity
/// O(k) per selection
///
/// # Panics
/// Panics if `k` is zero, `scored` is empty, or `scored` holds fewer than
/// `k` entries.
pub fn tournament_select<'a, R: Rng>(
    scored: &'a [ScoredTour],
    k: usize,
    rng: &mut R,
) -> &'a ScoredTour {
    assert!(k >= 1, "tournament size must be at least 1");
    assert!(!scored.is_empty(), "cannot select from empty population");
    assert!(
        scored.len() >= k,
        "tournament of {k} needs at least {k} candidates, got {}",
        scored.len()
    );

    let mut best: Option<&ScoredTour> = None;
    for idx in index::sample(rng, scored.len(), k).iter() {
        let candidate = &scored[idx];
        match best {
            Some(current) if candidate.distance >= current.distance => {}
            _ => best = Some(candidate),
        }
    }
    best.expect("k >= 1 candidates were drawn")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn make_scored(distances: &[f64]) -> Vec<ScoredTour> {
        distances
            .iter()
            .enumerate()
            .map(|(i, &d)| ScoredTour {
                tour: vec![i],
                distance: d,
            })
            .collect()
    }

    fn position(scored: &[ScoredTour], selected: &ScoredTour) -> usize {
        scored
            .iter()
            .position(|s| std::ptr::eq(s, selected))
            .unwrap()
    }

    #[test]
    fn test_full_tournament_always_picks_best() {
        // Sampling without replacement: k = len means every entry competes.
        let scored = make_scored(&[10.0, 5.0, 1.0, 8.0]);
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            let sel = tournament_select(&scored, 4, &mut rng);
            assert_eq!(sel.distance, 1.0);
        }
    }

    #[test]
    fn test_worst_never_selected() {
        // The worst entry can only win a tournament it enters alone.
        let scored = make_scored(&[3.0, 7.0, 1.0, 9.0, 4.0, 2.0]);
        let mut rng = create_rng(7);
        for _ in 0..2000 {
            let sel = tournament_select(&scored, 4, &mut rng);
            assert_ne!(sel.distance, 9.0);
        }
    }

    #[test]
    fn test_tournament_favors_best() {
        let scored = make_scored(&[10.0, 5.0, 1.0, 8.0, 6.0, 7.0, 9.0, 4.0]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 8];
        let n = 10000;
        for _ in 0..n {
            let sel = tournament_select(&scored, 4, &mut rng);
            counts[position(&scored, sel)] += 1;
        }
        // P(best in a 4-of-8 sample) = 1/2
        assert!(
            counts[2] > 4500,
            "expected best to be selected ~50% of the time, got {}/{n}",
            counts[2]
        );
        assert!(counts[2] > counts[7]);
    }

    #[test]
    fn test_size_1_is_uniform() {
        let scored = make_scored(&[10.0, 5.0, 1.0, 8.0]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            let sel = tournament_select(&scored, 1, &mut rng);
            counts[position(&scored, sel)] += 1;
        }
        for &c in &counts {
            assert!(c > 2000, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_ties_go_to_first_drawn() {
        let scored = make_scored(&[2.0, 2.0, 2.0, 2.0]);
        let mut rng = create_rng(11);
        let mut counts = [0u32; 4];
        for _ in 0..8000 {
            let sel = tournament_select(&scored, 2, &mut rng);
            counts[position(&scored, sel)] += 1;
        }
        // Each entry is equally likely to be drawn first.
        for &c in &counts {
            assert!(c > 1500, "expected roughly uniform, got {counts:?}");
        }
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let scored: Vec<ScoredTour> = vec![];
        let mut rng = create_rng(42);
        tournament_select(&scored, 4, &mut rng);
    }

    #[test]
    #[should_panic(expected = "tournament of 4 needs at least 4 candidates")]
    fn test_too_few_candidates_panics() {
        let scored = make_scored(&[1.0, 2.0, 3.0]);
        let mut rng = create_rng(42);
        tournament_select(&scored, 4, &mut rng);
    }

    #[test]
    #[should_panic(expected = "tournament size must be at least 1")]
    fn test_zero_tournament_panics() {
        let scored = make_scored(&[1.0, 2.0, 3.0]);
        let mut rng = create_rng(42);
        tournament_select(&scored, 0, &mut rng);
    }
}
