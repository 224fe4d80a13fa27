//! Error types for the generation step.
//!
//! Every failure is caused by the shape of the caller's input and is
//! reported once, before any work is done. Nothing is retried.

/// Errors returned by [`GenerationStep`](crate::ga::GenerationStep) and the
/// request boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvolveError {
    /// The caller supplied cities, a population, or parameters that the
    /// generation step cannot work with.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    /// A tour that is not a permutation of the city indices reached an
    /// operation that assumes one.
    #[error("contract violation: {reason}")]
    ContractViolation { reason: String },
}

/// The specific reason an input was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidInput {
    #[error("at least 3 cities are required, found {found}")]
    TooFewCities { found: usize },

    #[error("population size {size} is below the minimum of {minimum}")]
    PopulationTooSmall { size: usize, minimum: usize },

    #[error("population size {size} exceeds the maximum of {maximum}")]
    PopulationTooLarge { size: usize, maximum: usize },

    #[error("mutation rate {rate} is outside [0, 1]")]
    MutationRateOutOfRange { rate: f64 },

    #[error("elite ratio {ratio} is outside [0, 1)")]
    EliteRatioOutOfRange { ratio: f64 },

    #[error("tournament size {size} cannot be drawn from {population} tours")]
    TournamentTooLarge { size: usize, population: usize },

    #[error("city at position {city} has a non-finite coordinate")]
    NonFiniteCoordinate { city: usize },

    #[error("tour {index} is malformed: {reason}")]
    MalformedTour { index: usize, reason: String },
}

impl EvolveError {
    pub(crate) fn contract(reason: impl Into<String>) -> Self {
        EvolveError::ContractViolation {
            reason: reason.into(),
        }
    }
}
