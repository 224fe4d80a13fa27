//! Cities, tours, and the checks applied when they enter the crate.

use crate::error::InvalidInput;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Minimum number of cities for a meaningful closed tour.
pub const MIN_CITIES: usize = 3;

/// A permutation of city indices, interpreted as a closed visiting order.
pub type Tour = Vec<usize>;

/// A point to visit.
///
/// `id` is opaque to the algorithm; tours refer to cities by their position
/// in the city sequence, not by `id`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct City {
    pub id: i64,
    pub x: f64,
    pub y: f64,
}

impl City {
    pub fn new(id: i64, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }
}

/// A tour paired with its closed-loop length. Lower is better.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredTour {
    pub tour: Tour,
    pub distance: f64,
}

/// Checks that there are enough cities and that every coordinate is finite.
pub fn check_cities(cities: &[City]) -> Result<(), InvalidInput> {
    if cities.len() < MIN_CITIES {
        return Err(InvalidInput::TooFewCities {
            found: cities.len(),
        });
    }
    if let Some(city) = cities
        .iter()
        .position(|c| !c.x.is_finite() || !c.y.is_finite())
    {
        return Err(InvalidInput::NonFiniteCoordinate { city });
    }
    Ok(())
}

/// Checks that `tour` is a permutation of `0..n`.
///
/// `index` is the tour's position in its population and is only used to
/// label the error.
pub fn check_tour(tour: &[usize], n: usize, index: usize) -> Result<(), InvalidInput> {
    if tour.len() != n {
        return Err(InvalidInput::MalformedTour {
            index,
            reason: format!("expected {n} cities, found {}", tour.len()),
        });
    }

    let mut seen = vec![false; n];
    for &city in tour {
        if city >= n {
            return Err(InvalidInput::MalformedTour {
                index,
                reason: format!("city index {city} is out of range 0..{n}"),
            });
        }
        if seen[city] {
            return Err(InvalidInput::MalformedTour {
                index,
                reason: format!("city index {city} appears more than once"),
            });
        }
        seen[city] = true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<City> {
        vec![
            City::new(0, 0.0, 0.0),
            City::new(1, 1.0, 0.0),
            City::new(2, 1.0, 1.0),
            City::new(3, 0.0, 1.0),
        ]
    }

    #[test]
    fn test_check_cities_ok() {
        assert!(check_cities(&square()).is_ok());
    }

    #[test]
    fn test_check_cities_too_few() {
        let cities = &square()[..2];
        assert_eq!(
            check_cities(cities),
            Err(InvalidInput::TooFewCities { found: 2 })
        );
    }

    #[test]
    fn test_check_cities_nan() {
        let mut cities = square();
        cities[2].y = f64::NAN;
        assert_eq!(
            check_cities(&cities),
            Err(InvalidInput::NonFiniteCoordinate { city: 2 })
        );
    }

    #[test]
    fn test_check_tour_valid() {
        assert!(check_tour(&[2, 0, 3, 1], 4, 0).is_ok());
    }

    #[test]
    fn test_check_tour_wrong_length() {
        let err = check_tour(&[0, 1, 2], 4, 5).unwrap_err();
        assert!(matches!(err, InvalidInput::MalformedTour { index: 5, .. }));
    }

    #[test]
    fn test_check_tour_out_of_range() {
        let err = check_tour(&[0, 1, 2, 4], 4, 1).unwrap_err();
        assert!(matches!(err, InvalidInput::MalformedTour { index: 1, .. }));
    }

    #[test]
    fn test_check_tour_duplicate() {
        let err = check_tour(&[0, 1, 1, 3], 4, 0).unwrap_err();
        match err {
            InvalidInput::MalformedTour { reason, .. } => {
                assert!(reason.contains("more than once"), "{reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
