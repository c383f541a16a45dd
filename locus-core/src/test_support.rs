//! In-memory providers and fixture builders used by unit and behaviour
//! tests across the workspace.

use geo::Coord;

use crate::{
    DevelopmentStage, DistanceDuration, DistanceMap, DistanceProvider, IntelligenceProvider,
    LocationIntelligence, LocationQuery, LocationType, Place, PlaceSearchProvider, ProviderError,
};

/// Assumed travel speed for fixture durations, in metres per second.
const FIXTURE_SPEED_MPS: f64 = 10.0;

/// Builder collecting places together with their distance from the origin.
#[derive(Debug, Clone, Default)]
pub struct Neighbourhood {
    places: Vec<Place>,
    distances: DistanceMap,
}

impl Neighbourhood {
    /// Add a place `km` kilometres from the origin.
    #[expect(clippy::float_arithmetic, reason = "fixture unit conversion")]
    #[must_use]
    pub fn with(mut self, place: Place, km: f64) -> Self {
        let meters = km * 1000.0;
        self.distances.insert(
            place.id.clone(),
            DistanceDuration::new(meters, meters / FIXTURE_SPEED_MPS),
        );
        self.places.push(place);
        self
    }

    /// Add a place without a distance entry.
    #[must_use]
    pub fn with_unreachable(mut self, place: Place) -> Self {
        self.places.push(place);
        self
    }

    /// Add `count` copies of a template place, numbering their ids.
    #[must_use]
    pub fn with_many(self, count: usize, template: &Place, km: f64) -> Self {
        (0..count).fold(self, |acc, index| {
            let mut place = template.clone();
            place.id = format!("{}-{index}", template.id);
            acc.with(place, km)
        })
    }

    /// Borrow the places collected so far.
    #[must_use]
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// Split into the place list and distance map.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Place>, DistanceMap) {
        (self.places, self.distances)
    }
}

/// Build a classification with the given fields and a safety score of 5.
#[must_use]
pub fn intelligence(
    location_type: LocationType,
    development_stage: DevelopmentStage,
    investment_potential: f64,
    area_classification: &str,
    priority_score: f64,
) -> LocationIntelligence {
    LocationIntelligence {
        location_type,
        development_stage,
        investment_potential,
        area_classification: area_classification.to_owned(),
        priority_score,
        safety_score: 5.0,
    }
}

/// Origin used by fixtures: central Bengaluru.
pub const FIXTURE_ORIGIN: Coord<f64> = Coord { x: 77.5946, y: 12.9716 };

/// `PlaceSearchProvider` returning a fixed list.
#[derive(Debug, Clone, Default)]
pub struct StaticPlaceSearch {
    /// Places returned for every query.
    pub places: Vec<Place>,
}

impl PlaceSearchProvider for StaticPlaceSearch {
    fn search_nearby(
        &self,
        _origin: Coord<f64>,
        _radius_meters: u32,
    ) -> Result<Vec<Place>, ProviderError> {
        Ok(self.places.clone())
    }
}

/// `DistanceProvider` returning a fixed map.
#[derive(Debug, Clone, Default)]
pub struct StaticDistances {
    /// Distances returned for every query.
    pub distances: DistanceMap,
}

impl DistanceProvider for StaticDistances {
    fn distances(
        &self,
        _origin: Coord<f64>,
        _places: &[Place],
    ) -> Result<DistanceMap, ProviderError> {
        Ok(self.distances.clone())
    }
}

/// `IntelligenceProvider` returning a fixed classification.
#[derive(Debug, Clone, Default)]
pub struct StaticIntelligence {
    /// Classification returned for every query.
    pub intelligence: LocationIntelligence,
}

impl IntelligenceProvider for StaticIntelligence {
    fn classify(&self, _query: &LocationQuery) -> Result<LocationIntelligence, ProviderError> {
        Ok(self.intelligence.clone())
    }
}

/// Provider implementing every port by returning the same error.
#[derive(Debug, Clone)]
pub struct FailingProvider {
    /// Error returned by every call.
    pub error: ProviderError,
}

impl FailingProvider {
    /// Provider that always reports `name` as unavailable.
    #[must_use]
    pub fn unavailable(name: &str) -> Self {
        Self {
            error: ProviderError::unavailable(name, "fixture outage"),
        }
    }
}

impl PlaceSearchProvider for FailingProvider {
    fn search_nearby(
        &self,
        _origin: Coord<f64>,
        _radius_meters: u32,
    ) -> Result<Vec<Place>, ProviderError> {
        Err(self.error.clone())
    }
}

impl DistanceProvider for FailingProvider {
    fn distances(
        &self,
        _origin: Coord<f64>,
        _places: &[Place],
    ) -> Result<DistanceMap, ProviderError> {
        Err(self.error.clone())
    }
}

impl IntelligenceProvider for FailingProvider {
    fn classify(&self, _query: &LocationQuery) -> Result<LocationIntelligence, ProviderError> {
        Err(self.error.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn with_many_numbers_ids() {
        let template = Place::new("mall", "Phoenix Mall").with_types(["shopping_mall"]);
        let (places, distances) = Neighbourhood::default()
            .with_many(3, &template, 1.0)
            .into_parts();
        let ids: Vec<_> = places.iter().map(|place| place.id.as_str()).collect();
        assert_eq!(ids, ["mall-0", "mall-1", "mall-2"]);
        assert_eq!(distances.len(), 3);
    }

    #[rstest]
    fn failing_provider_fails_every_port() {
        let provider = FailingProvider::unavailable("fixture");
        let query = LocationQuery::new(FIXTURE_ORIGIN, "");
        assert!(provider.search_nearby(FIXTURE_ORIGIN, 100).is_err());
        assert!(provider.distances(FIXTURE_ORIGIN, &[]).is_err());
        assert!(provider.classify(&query).is_err());
    }
}
