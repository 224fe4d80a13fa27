//! Genetic algorithm generation step for the Traveling Salesman Problem.
//!
//! One call evolves a population of tours by exactly one generation:
//!
//! - **Evaluation**: closed-loop Euclidean length of every tour
//! - **Elitism**: the shortest tours are carried forward unchanged
//! - **Selection**: tournament selection without replacement
//! - **Crossover**: Order Crossover (OX), which always yields a permutation
//! - **Mutation**: inversion of a random segment
//!
//! The step keeps no state. The caller stores the returned population and
//! passes it back to continue the search.
//!
//! # Architecture
//!
//! - [`tsp`]: Cities, tours, and tour length
//! - [`ga`]: Operators, selection, configuration, and the generation step
//! - [`api`]: Request/response types for a hosting service
//! - [`error`]: The error taxonomy
//!
//! All randomness comes from an explicitly passed `Rng`, so a seeded
//! generator makes every step reproducible.
//!
//! # Features
//!
//! - `serde`: Serialize/Deserialize for cities, requests, and responses
//! - `parallel`: Evaluate tour lengths on the rayon thread pool
//! - `wasm`: A `wasm-bindgen` entry point taking and returning JS objects

pub mod api;
pub mod error;
pub mod ga;
pub mod random;
pub mod tsp;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{EvolveError, InvalidInput};
