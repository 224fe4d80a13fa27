//! One generation transition.
//!
//! [`GenerationStep`] takes a population (or creates one), ranks it by tour
//! length, keeps the elites, and breeds the rest of the next population:
//! evaluation → ranking → elitism → selection → crossover → mutation.
//!
//! It never loops over generations. The caller feeds the returned
//! population back in to continue evolving.

use super::config::GenerationConfig;
use super::operators::{inversion_mutation, order_crossover};
use super::selection::tournament_select;
use crate::error::{EvolveError, InvalidInput};
use crate::random::rng_from_seed;
use crate::tsp::{check_cities, check_tour, tour_distance, City, ScoredTour, Tour};
use rand::seq::SliceRandom;
use rand::Rng;
use std::borrow::Cow;
use tracing::{debug, instrument, trace, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of one generation step.
///
/// `best_tour` and `best_distance` describe the best tour of the population
/// that was *evaluated* in this step. `population` is the next generation,
/// which has not been evaluated yet.
#[derive(Debug, Clone, PartialEq)]
pub struct Generation {
    /// The next population, elites first.
    pub population: Vec<Tour>,

    /// Shortest tour of the evaluated population.
    pub best_tour: Tour,

    /// Length of `best_tour`.
    pub best_distance: f64,

    /// Number of tours copied unchanged into `population`.
    pub elite_count: usize,
}

/// Executes a single GA generation for the TSP.
///
/// # Usage
///
/// ```
/// use tsp_evolve::ga::{GenerationConfig, GenerationStep};
/// use tsp_evolve::tsp::City;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 1.0, 0.0),
///     City::new(2, 1.0, 1.0),
///     City::new(3, 0.0, 1.0),
/// ];
/// let config = GenerationConfig::default().with_population_size(10).with_seed(42);
///
/// let first = GenerationStep::run(&cities, None, &config).unwrap();
/// let second = GenerationStep::run(&cities, Some(first.population.as_slice()), &config).unwrap();
/// assert_eq!(second.population.len(), 10);
/// ```
pub struct GenerationStep;

impl GenerationStep {
    /// Runs one generation with a generator built from `config.seed`.
    pub fn run(
        cities: &[City],
        prior: Option<&[Tour]>,
        config: &GenerationConfig,
    ) -> Result<Generation, EvolveError> {
        let mut rng = rng_from_seed(config.seed);
        Self::step(cities, prior, config, &mut rng)
    }

    /// Runs one generation drawing all randomness from `rng`.
    ///
    /// An absent or empty `prior` is replaced by `config.population_size`
    /// random tours.
    ///
    /// # Errors
    /// Returns [`EvolveError::InvalidInput`] for fewer than 3 cities, an
    /// invalid configuration, or a prior population that is too small or
    /// contains a tour that is not a permutation of the city indices.
    #[instrument(
        skip_all,
        fields(cities = cities.len(), population_size = config.population_size)
    )]
    pub fn step<R: Rng>(
        cities: &[City],
        prior: Option<&[Tour]>,
        config: &GenerationConfig,
        rng: &mut R,
    ) -> Result<Generation, EvolveError> {
        let population = ingest(cities, prior, config)
            .inspect_err(|err| warn!(%err, "rejected generation input"))?;

        let population: Cow<'_, [Tour]> = match population {
            Some(prior) => Cow::Borrowed(prior),
            None => {
                debug!("initializing random population");
                Cow::Owned(random_population(
                    cities.len(),
                    config.population_size,
                    rng,
                ))
            }
        };

        let scored = rank_population(cities, &population, config.parallel)?;
        let elite_count = config.elite_count().min(scored.len());
        trace!(
            best = scored[0].distance,
            worst = scored[scored.len() - 1].distance,
            elite_count,
            "ranked population"
        );

        let mut next: Vec<Tour> = Vec::with_capacity(config.population_size);
        next.extend(scored[..elite_count].iter().map(|s| s.tour.clone()));

        let mut mutated = 0usize;
        while next.len() < config.population_size {
            let parent1 = tournament_select(&scored, config.tournament_size, rng);
            let parent2 = tournament_select(&scored, config.tournament_size, rng);

            let mut child = order_crossover(&parent1.tour, &parent2.tour, rng);

            if rng.random_range(0.0..1.0) < config.mutation_rate {
                child = inversion_mutation(&child, rng);
                mutated += 1;
            }

            next.push(child);
        }

        let ScoredTour {
            tour: best_tour,
            distance: best_distance,
        } = scored.into_iter().next().expect("ranked population is not empty");

        debug!(
            best_distance,
            elite_count,
            offspring = next.len() - elite_count,
            mutated,
            "generation complete"
        );

        Ok(Generation {
            population: next,
            best_tour,
            best_distance,
            elite_count,
        })
    }
}

/// Scores every tour and sorts ascending by distance.
///
/// The sort is stable: tours of equal length keep their input order.
pub fn rank_population(
    cities: &[City],
    population: &[Tour],
    parallel: bool,
) -> Result<Vec<ScoredTour>, EvolveError> {
    let mut scored = evaluate_population(cities, population, parallel)?;
    scored.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    Ok(scored)
}

/// `size` independent uniform shuffles of `0..n`.
pub fn random_population<R: Rng>(n: usize, size: usize, rng: &mut R) -> Vec<Tour> {
    let base: Tour = (0..n).collect();
    (0..size)
        .map(|_| {
            let mut tour = base.clone();
            tour.shuffle(rng);
            tour
        })
        .collect()
}

/// Checks everything that enters the step. Returns the prior population when
/// one should be used, `None` when a random one must be created.
fn ingest<'a>(
    cities: &[City],
    prior: Option<&'a [Tour]>,
    config: &GenerationConfig,
) -> Result<Option<&'a [Tour]>, EvolveError> {
    check_cities(cities)?;
    config.validate()?;

    let prior = match prior {
        Some(prior) if !prior.is_empty() => prior,
        _ => return Ok(None),
    };

    if prior.len() < config.tournament_size {
        return Err(InvalidInput::TournamentTooLarge {
            size: config.tournament_size,
            population: prior.len(),
        }
        .into());
    }
    for (index, tour) in prior.iter().enumerate() {
        check_tour(tour, cities.len(), index)?;
    }
    Ok(Some(prior))
}

fn score(tour: &Tour, cities: &[City]) -> Result<ScoredTour, EvolveError> {
    Ok(ScoredTour {
        tour: tour.clone(),
        distance: tour_distance(tour, cities)?,
    })
}

fn evaluate_population(
    cities: &[City],
    population: &[Tour],
    parallel: bool,
) -> Result<Vec<ScoredTour>, EvolveError> {
    #[cfg(feature = "parallel")]
    if parallel {
        return population
            .par_iter()
            .map(|tour| score(tour, cities))
            .collect();
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    population.iter().map(|tour| score(tour, cities)).collect()
}

// ============================================================================
// Tests
// ============================================================================
