//! Generation step configuration.
//!
//! [`GenerationConfig`] holds the parameters of one generation transition.

use crate::error::{EvolveError, InvalidInput};

/// Smallest population a generation step accepts.
pub const MIN_POPULATION_SIZE: usize = 4;

/// Largest population a generation step accepts.
pub const MAX_POPULATION_SIZE: usize = 100_000;

/// Configuration for a single generation step.
///
/// # Defaults
///
/// ```
/// use tsp_evolve::ga::GenerationConfig;
///
/// let config = GenerationConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.tournament_size, 4);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tsp_evolve::ga::GenerationConfig;
///
/// let config = GenerationConfig::default()
///     .with_population_size(200)
///     .with_mutation_rate(0.2)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Number of tours in the produced population.
    pub population_size: usize,

    /// Probability of applying inversion mutation to a child (0.0–1.0).
    pub mutation_rate: f64,

    /// Fraction of the population carried forward unchanged (0.0–1.0).
    ///
    /// At least one elite is always kept.
    pub elite_ratio: f64,

    /// Number of distinct tours competing in each parent tournament.
    pub tournament_size: usize,

    /// Whether to evaluate tour lengths in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            mutation_rate: 0.1,
            elite_ratio: 0.1,
            tournament_size: 4,
            parallel: true,
            seed: None,
        }
    }
}

impl GenerationConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the elite ratio.
    pub fn with_elite_ratio(mut self, ratio: f64) -> Self {
        self.elite_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of tours carried forward unchanged:
    /// `max(1, floor(elite_ratio * population_size))`.
    pub fn elite_count(&self) -> usize {
        ((self.population_size as f64 * self.elite_ratio) as usize).max(1)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), EvolveError> {
        let minimum = MIN_POPULATION_SIZE.max(self.tournament_size);
        if self.population_size < minimum {
            return Err(InvalidInput::PopulationTooSmall {
                size: self.population_size,
                minimum,
            }
            .into());
        }
        if self.population_size > MAX_POPULATION_SIZE {
            return Err(InvalidInput::PopulationTooLarge {
                size: self.population_size,
                maximum: MAX_POPULATION_SIZE,
            }
            .into());
        }
        if self.tournament_size == 0 {
            return Err(InvalidInput::TournamentTooLarge {
                size: 0,
                population: self.population_size,
            }
            .into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(InvalidInput::MutationRateOutOfRange {
                rate: self.mutation_rate,
            }
            .into());
        }
        if !(0.0..1.0).contains(&self.elite_ratio) {
            return Err(InvalidInput::EliteRatioOutOfRange {
                ratio: self.elite_ratio,
            }
            .into());
        }
        Ok(())
    }
}
