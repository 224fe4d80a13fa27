//! Genetic Algorithm generation step for the TSP.
//!
//! A population of tours is ranked by length, the best tours are carried
//! forward unchanged, and the rest of the next population is bred by
//! tournament selection, order crossover, and inversion mutation.
//!
//! # Key Types
//!
//! - [`GenerationConfig`]: Step parameters (population size, rates, seed)
//! - [`GenerationStep`]: Executes one generation transition
//! - [`Generation`]: The next population plus the best tour evaluated
//!
//! # Submodules
//!
//! - [`operators`]: Order crossover (OX) and inversion mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Larrañaga et al. (1999), "Genetic Algorithms for the Travelling Salesman
//!   Problem: A Review of Representations and Operators"

mod config;
pub mod operators;
mod runner;
mod selection;

pub use config::{GenerationConfig, MAX_POPULATION_SIZE, MIN_POPULATION_SIZE};
pub use runner::{random_population, rank_population, Generation, GenerationStep};
pub use selection::tournament_select;
