//! Distance estimates from coordinates.

use geo::{Coord, Distance, Haversine, Point};
use locus_core::{DistanceDuration, DistanceMap, DistanceProvider, Place, ProviderError};

/// Road distance per unit of great-circle distance.
pub const DEFAULT_WINDING_FACTOR: f64 = 1.3;

/// Assumed average travel speed.
pub const DEFAULT_SPEED_KMH: f64 = 30.0;

/// [`DistanceProvider`] estimating road distance from coordinates.
///
/// The great-circle distance is stretched by a winding factor and converted
/// to a duration at a fixed average speed. Places without coordinates are
/// omitted from the map.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use locus_core::{DistanceProvider, Place};
/// use locus_data::EstimatedDistanceProvider;
///
/// let origin = Coord { x: 77.5946, y: 12.9716 };
/// let places = vec![
///     Place::new("near", "Cubbon Park").with_location(Coord { x: 77.5950, y: 12.9760 }),
///     Place::new("unknown", "Somewhere"),
/// ];
/// let distances = EstimatedDistanceProvider::default()
///     .distances(origin, &places)
///     .unwrap_or_default();
/// assert!(distances.contains_key("near"));
/// assert!(!distances.contains_key("unknown"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatedDistanceProvider {
    winding_factor: f64,
    speed_kmh: f64,
}

impl EstimatedDistanceProvider {
    /// Build a provider with a custom winding factor and speed.
    ///
    /// Non-finite or non-positive values fall back to the defaults.
    #[must_use]
    pub fn new(winding_factor: f64, speed_kmh: f64) -> Self {
        Self {
            winding_factor: positive_or(winding_factor, DEFAULT_WINDING_FACTOR),
            speed_kmh: positive_or(speed_kmh, DEFAULT_SPEED_KMH),
        }
    }

    /// Estimate the road distance and travel time to `target`.
    #[expect(clippy::float_arithmetic, reason = "distance and duration estimate")]
    #[must_use]
    pub fn estimate(&self, origin: Coord<f64>, target: Coord<f64>) -> DistanceDuration {
        let meters = Haversine.distance(Point::from(origin), Point::from(target)) * self.winding_factor;
        let meters_per_second = self.speed_kmh * 1000.0 / 3600.0;
        DistanceDuration::new(meters, meters / meters_per_second)
    }
}

impl Default for EstimatedDistanceProvider {
    fn default() -> Self {
        Self {
            winding_factor: DEFAULT_WINDING_FACTOR,
            speed_kmh: DEFAULT_SPEED_KMH,
        }
    }
}

impl DistanceProvider for EstimatedDistanceProvider {
    fn distances(
        &self,
        origin: Coord<f64>,
        places: &[Place],
    ) -> Result<DistanceMap, ProviderError> {
        Ok(places
            .iter()
            .filter_map(|place| {
                place
                    .location
                    .map(|location| (place.id.clone(), self.estimate(origin, location)))
            })
            .collect())
    }
}

const fn positive_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use locus_core::test_support::FIXTURE_ORIGIN;
    use rstest::rstest;

    #[rstest]
    fn same_point_is_zero() {
        let estimate = EstimatedDistanceProvider::default().estimate(FIXTURE_ORIGIN, FIXTURE_ORIGIN);
        assert_eq!(estimate.distance_meters, 0.0);
        assert_eq!(estimate.duration_seconds, 0.0);
    }

    #[rstest]
    fn one_degree_of_latitude_is_stretched() {
        let provider = EstimatedDistanceProvider::default();
        let north = Coord {
            x: FIXTURE_ORIGIN.x,
            y: FIXTURE_ORIGIN.y + 1.0,
        };
        let estimate = provider.estimate(FIXTURE_ORIGIN, north);
        // one degree of latitude is roughly 111.2 km
        assert!((estimate.distance_meters - 144_560.0).abs() < 500.0);
        let hours = estimate.duration_seconds / 3600.0;
        assert!((hours - estimate.distance_meters / 30_000.0).abs() < 1e-9);
    }

    #[rstest]
    #[case(f64::NAN, 0.0)]
    #[case(-1.0, f64::INFINITY)]
    fn invalid_settings_take_defaults(#[case] winding: f64, #[case] speed: f64) {
        assert_eq!(
            EstimatedDistanceProvider::new(winding, speed),
            EstimatedDistanceProvider::default()
        );
    }

    #[rstest]
    fn places_without_coordinates_are_omitted() {
        let places = vec![
            Place::new("a", "Known").with_location(Coord {
                x: 77.60,
                y: 12.98,
            }),
            Place::new("b", "Unknown"),
        ];
        let distances = EstimatedDistanceProvider::default()
            .distances(FIXTURE_ORIGIN, &places)
            .unwrap_or_default();
        assert_eq!(distances.len(), 1);
        assert!(distances.get("a").and_then(DistanceDuration::distance_km).is_some());
    }
}
