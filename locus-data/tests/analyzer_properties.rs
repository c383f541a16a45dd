//! Property-based tests for the analyzer's distance fallback.
//!
//! # Invariants tested
//!
//! - **Estimate equivalence:** a failing distance provider yields the same
//!   result and breakdown as supplying the estimated distances directly,
//!   and only the failing run records the fallback.

use geo::Coord;
use locus_core::test_support::{
    FIXTURE_ORIGIN, FailingProvider, StaticDistances, StaticIntelligence, StaticPlaceSearch,
};
use locus_core::{DistanceProvider, Fallback, LocationQuery, Place};
use locus_data::{AnalysisError, AnalyzerSettings, EstimatedDistanceProvider, LocationAnalyzer};
use proptest::prelude::*;

const KINDS: &[&str] = &[
    "hospital",
    "school",
    "bank",
    "subway_station",
    "shopping_mall",
    "park",
    "police",
    "cafe",
];

fn settings() -> AnalyzerSettings {
    AnalyzerSettings {
        maps_api_key: Some("maps".into()),
        intelligence_api_key: Some("intelligence".into()),
        ..AnalyzerSettings::default()
    }
}

fn place_strategy() -> impl Strategy<Value = (usize, f64, f64, Option<f64>, bool)> {
    (
        0..KINDS.len(),
        -0.05..0.05_f64,
        -0.05..0.05_f64,
        prop::option::of(0.0..=5.0_f64),
        prop::bool::weighted(0.9),
    )
}

fn places(specs: &[(usize, f64, f64, Option<f64>, bool)]) -> Vec<Place> {
    specs
        .iter()
        .enumerate()
        .map(|(index, (kind, dx, dy, rating, located))| {
            let tag = KINDS.get(*kind).copied().unwrap_or("store");
            let mut place = Place::new(format!("p{index}"), format!("Place {index}")).with_types([tag]);
            place.rating = *rating;
            if *located {
                place.location = Some(Coord {
                    x: FIXTURE_ORIGIN.x + dx,
                    y: FIXTURE_ORIGIN.y + dy,
                });
            }
            place
        })
        .collect()
}

fn fail(error: AnalysisError) -> TestCaseError {
    TestCaseError::fail(error.to_string())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: the distance fallback is indistinguishable from supplying
    /// estimates, apart from the recorded fallback.
    #[test]
    fn failing_distances_match_direct_estimates(
        specs in prop::collection::vec(place_strategy(), 0..30),
    ) {
        let places = places(&specs);
        let query = LocationQuery::new(FIXTURE_ORIGIN, "Indiranagar, Bengaluru");
        let search = StaticPlaceSearch { places: places.clone() };
        let intelligence = StaticIntelligence::default();

        let failing = LocationAnalyzer::new(
            settings(),
            search.clone(),
            FailingProvider::unavailable("distances"),
            intelligence.clone(),
        )
        .map_err(fail)?;

        let estimates = EstimatedDistanceProvider::default()
            .distances(query.origin, &places)
            .unwrap_or_default();
        let direct = LocationAnalyzer::new(
            settings(),
            search,
            StaticDistances { distances: estimates },
            intelligence,
        )
        .map_err(fail)?;

        let recovered = failing.analyze(&query).map_err(fail)?;
        let supplied = direct.analyze(&query).map_err(fail)?;

        prop_assert_eq!(&recovered.result, &supplied.result);
        prop_assert_eq!(&recovered.breakdown, &supplied.breakdown);
        prop_assert_eq!(recovered.fallbacks, vec![Fallback::EstimatedDistances]);
        prop_assert!(supplied.fallbacks.is_empty());
    }
}
