//! Request and response types for hosting the generation step.
//!
//! A hosting service deserializes an [`EvolveRequest`], calls
//! [`EvolveRequest::evolve`], and serializes the [`EvolveResponse`]. The
//! caller keeps `population` between requests and sends it back to continue
//! evolving.
//!
//! With the `serde` feature, field defaults match the service contract:
//! `population_size = 100`, `mutation_rate = 0.1`, no prior population.

use crate::error::EvolveError;
use crate::ga::{Generation, GenerationConfig, GenerationStep};
use crate::random::rng_from_seed;
use crate::tsp::{City, Tour};
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const DEFAULT_POPULATION_SIZE: usize = 100;
const DEFAULT_MUTATION_RATE: f64 = 0.1;

fn default_population_size() -> usize {
    DEFAULT_POPULATION_SIZE
}

fn default_mutation_rate() -> f64 {
    DEFAULT_MUTATION_RATE
}

/// Input of one generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EvolveRequest {
    pub cities: Vec<City>,

    /// Population returned by the previous request, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub population: Option<Vec<Tour>>,

    #[cfg_attr(feature = "serde", serde(default = "default_population_size"))]
    pub population_size: usize,

    #[cfg_attr(feature = "serde", serde(default = "default_mutation_rate"))]
    pub mutation_rate: f64,
}

/// Output of one generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EvolveResponse {
    /// The next population to send back.
    pub population: Vec<Tour>,

    /// Best tour of the evaluated population, as cities in visiting order.
    pub best_route: Vec<City>,

    pub best_distance: f64,
}

impl EvolveRequest {
    /// A request with default parameters and no prior population.
    pub fn new(cities: Vec<City>) -> Self {
        Self {
            cities,
            population: None,
            population_size: default_population_size(),
            mutation_rate: default_mutation_rate(),
        }
    }

    /// Continues from a previously returned population.
    pub fn with_population(mut self, population: Vec<Tour>) -> Self {
        self.population = Some(population);
        self
    }

    /// The step configuration this request describes.
    ///
    /// The mutation rate is passed through unclamped so that an
    /// out-of-range value is rejected rather than silently corrected.
    pub fn config(&self) -> GenerationConfig {
        GenerationConfig {
            population_size: self.population_size,
            mutation_rate: self.mutation_rate,
            ..GenerationConfig::default()
        }
    }

    /// Runs one generation drawing randomness from `rng`.
    pub fn evolve<R: Rng>(&self, rng: &mut R) -> Result<EvolveResponse, EvolveError> {
        let generation = GenerationStep::step(
            &self.cities,
            self.population.as_deref(),
            &self.config(),
            rng,
        )?;
        EvolveResponse::from_generation(generation, &self.cities)
    }
}

impl EvolveResponse {
    /// Builds a response, expanding the best tour into city values.
    ///
    /// Returns [`EvolveError::ContractViolation`] if the best tour indexes a
    /// city outside `cities`.
    pub fn from_generation(generation: Generation, cities: &[City]) -> Result<Self, EvolveError> {
        let best_route = generation
            .best_tour
            .iter()
            .map(|&idx| {
                cities.get(idx).copied().ok_or_else(|| {
                    EvolveError::contract(format!(
                        "city index {idx} out of range for {} cities",
                        cities.len()
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            population: generation.population,
            best_route,
            best_distance: generation.best_distance,
        })
    }
}

/// Runs one generation with a freshly seeded generator.
pub fn evolve(request: &EvolveRequest) -> Result<EvolveResponse, EvolveError> {
    let mut rng = rng_from_seed(None);
    request.evolve(&mut rng)
}
