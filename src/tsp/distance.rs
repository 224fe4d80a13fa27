//! Closed-loop tour length.

use super::types::City;
use crate::error::EvolveError;

/// Euclidean distance between two cities.
#[inline]
pub fn euclidean(a: &City, b: &City) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Length of the closed tour visiting `cities` in `tour` order.
///
/// Sums the edge from every city to its successor, including the edge from
/// the last city back to the first.
///
/// # Errors
/// Returns [`EvolveError::ContractViolation`] if the tour length differs
/// from the number of cities or an index is out of range. Duplicate indices
/// are not detected here; tours are checked for that on ingestion.
///
/// # Complexity
/// O(n)
pub fn tour_distance(tour: &[usize], cities: &[City]) -> Result<f64, EvolveError> {
    if tour.len() != cities.len() {
        return Err(EvolveError::contract(format!(
            "tour visits {} cities but {} were given",
            tour.len(),
            cities.len()
        )));
    }

    let city = |idx: usize| {
        cities
            .get(idx)
            .ok_or_else(|| EvolveError::contract(format!("city index {idx} is out of range")))
    };

    let n = tour.len();
    let mut total = 0.0;
    for i in 0..n {
        let from = city(tour[i])?;
        let to = city(tour[(i + 1) % n])?;
        total += euclidean(from, to);
    }
    Ok(total)
}
