//! Points of interest near the analysed origin and their travel distances.

use std::collections::HashMap;

use geo::Coord;
use serde::{Deserialize, Serialize};

use crate::sanitise;

/// Highest rating a place-search provider reports.
pub const MAX_RATING: f64 = 5.0;

/// A point of interest near the analysed location.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. They are
/// optional because only the estimated-distance fallback needs them.
///
/// # Examples
/// ```
/// use locus_core::Place;
///
/// let place = Place::new("p7", "Central Metro Station")
///     .with_types(["subway_station", "transit_station"])
///     .with_vicinity("MG Road");
///
/// assert_eq!(place.id, "p7");
/// assert!(place.has_type("subway_station"));
/// assert_eq!(place.sanitised_rating(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Provider-assigned identifier, also the key into a [`DistanceMap`].
    pub id: String,
    /// Display name.
    pub name: String,
    /// Provider category tags such as `hospital` or `subway_station`.
    #[serde(default)]
    pub types: Vec<String>,
    /// Average user rating on a `0.0..=5.0` scale, when known.
    #[serde(default)]
    pub rating: Option<f64>,
    /// Free-text address or neighbourhood description.
    #[serde(default)]
    pub vicinity: String,
    /// Position of the place, when the provider reported one.
    #[serde(default)]
    pub location: Option<Coord<f64>>,
}

impl Place {
    /// Construct a place with no tags, rating, vicinity or position.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            types: Vec::new(),
            rating: None,
            vicinity: String::new(),
            location: None,
        }
    }

    /// Replace the category tags.
    #[must_use]
    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Set the user rating.
    #[must_use]
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Set the vicinity text.
    #[must_use]
    pub fn with_vicinity(mut self, vicinity: impl Into<String>) -> Self {
        self.vicinity = vicinity.into();
        self
    }

    /// Set the position.
    #[must_use]
    pub fn with_location(mut self, location: Coord<f64>) -> Self {
        self.location = Some(location);
        self
    }

    /// Return `true` when the place carries the given provider tag.
    #[must_use]
    pub fn has_type(&self, tag: &str) -> bool {
        self.types.iter().any(|candidate| candidate == tag)
    }

    /// Rating clamped into `0.0..=5.0`, or `None` when absent or non-finite.
    #[must_use]
    pub fn sanitised_rating(&self) -> Option<f64> {
        self.rating
            .filter(|rating| rating.is_finite())
            .map(|rating| sanitise::bounded(rating, 0.0, MAX_RATING))
    }
}

/// Travel distance and duration from the origin to a place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceDuration {
    /// Travel distance in metres.
    pub distance_meters: f64,
    /// Travel time in seconds.
    pub duration_seconds: f64,
}

impl DistanceDuration {
    /// Construct a distance/duration pair.
    #[must_use]
    pub const fn new(distance_meters: f64, duration_seconds: f64) -> Self {
        Self {
            distance_meters,
            duration_seconds,
        }
    }

    /// Distance in kilometres, or `None` when the reading is unusable.
    ///
    /// # Examples
    /// ```
    /// use locus_core::DistanceDuration;
    ///
    /// assert_eq!(DistanceDuration::new(1500.0, 300.0).distance_km(), Some(1.5));
    /// assert_eq!(DistanceDuration::new(f64::NAN, 300.0).distance_km(), None);
    /// assert_eq!(DistanceDuration::new(-10.0, 300.0).distance_km(), None);
    /// ```
    #[expect(clippy::float_arithmetic, reason = "unit conversion")]
    #[must_use]
    pub const fn distance_km(&self) -> Option<f64> {
        if self.distance_meters.is_finite() && self.distance_meters >= 0.0 {
            Some(self.distance_meters / 1000.0)
        } else {
            None
        }
    }
}

/// Distances keyed by [`Place::id`]. Missing entries mean "no data".
pub type DistanceMap = HashMap<String, DistanceDuration>;
