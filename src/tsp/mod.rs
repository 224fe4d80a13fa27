//! Traveling Salesman Problem data model.
//!
//! A [`City`] is a fixed point in the plane. A tour is a `Vec<usize>`
//! permutation of city indices, visited in order and closed back to the
//! first city.
//!
//! # Key Items
//!
//! - [`City`]: Immutable coordinate with a caller-chosen id
//! - [`tour_distance`]: Closed-loop Euclidean tour length
//! - [`check_cities`] / [`check_tour`]: Ingestion-boundary validation

mod distance;
mod types;

pub use distance::{euclidean, tour_distance};
pub use types::{check_cities, check_tour, City, ScoredTour, Tour, MIN_CITIES};
