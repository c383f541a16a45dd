//! Behavioural coverage for the analyzer's fallback paths.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use geo::Coord;
use locus_core::test_support::FIXTURE_ORIGIN;
use locus_core::{
    AnalysisReport, DistanceDuration, DistanceMap, DistanceProvider, Fallback,
    IntelligenceProvider, LocationIntelligence, LocationQuery, Place, PlaceSearchProvider,
    ProviderError,
};
use locus_data::analyzer::MAPS_CREDENTIAL;
use locus_data::{AddressProfile, AnalysisError, AnalyzerSettings, LocationAnalyzer};
use locus_scorer::compute_report;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Provider serving every port from fixed data, with per-port outages.
#[derive(Debug, Clone, Default)]
struct Upstream {
    places: Vec<Place>,
    distances: DistanceMap,
    intelligence: LocationIntelligence,
    places_down: bool,
    distances_down: bool,
    intelligence_down: bool,
    calls: Rc<Cell<u32>>,
}

impl Upstream {
    fn answer<T>(&self, down: bool, port: &str, value: T) -> Result<T, ProviderError> {
        self.calls.set(self.calls.get() + 1);
        if down {
            Err(ProviderError::unavailable(port, "scenario outage"))
        } else {
            Ok(value)
        }
    }
}

impl PlaceSearchProvider for Upstream {
    fn search_nearby(
        &self,
        _origin: Coord<f64>,
        _radius_meters: u32,
    ) -> Result<Vec<Place>, ProviderError> {
        self.answer(self.places_down, "places", self.places.clone())
    }
}

impl DistanceProvider for Upstream {
    fn distances(
        &self,
        _origin: Coord<f64>,
        _places: &[Place],
    ) -> Result<DistanceMap, ProviderError> {
        self.answer(self.distances_down, "distances", self.distances.clone())
    }
}

impl IntelligenceProvider for Upstream {
    fn classify(&self, _query: &LocationQuery) -> Result<LocationIntelligence, ProviderError> {
        self.answer(
            self.intelligence_down,
            "intelligence",
            self.intelligence.clone(),
        )
    }
}

/// Shared state for one scenario run.
pub struct FallbackContext {
    upstream: RefCell<Upstream>,
    settings: RefCell<AnalyzerSettings>,
    outcome: RefCell<Option<Result<AnalysisReport, AnalysisError>>>,
}

#[fixture]
/// Build a context with valid credentials and healthy providers.
pub fn context() -> FallbackContext {
    FallbackContext {
        upstream: RefCell::new(Upstream::default()),
        settings: RefCell::new(AnalyzerSettings {
            maps_api_key: Some("maps-key".into()),
            intelligence_api_key: Some("intelligence-key".into()),
            ..AnalyzerSettings::default()
        }),
        outcome: RefCell::new(None),
    }
}

fn nearby(id: &str, name: &str, kind: &str, offset: f64) -> Place {
    Place::new(id, name)
        .with_types([kind])
        .with_rating(4.4)
        .with_location(Coord {
            x: FIXTURE_ORIGIN.x,
            y: FIXTURE_ORIGIN.y + offset,
        })
}

#[given("three rated places around the origin")]
fn three_places(context: &FallbackContext) {
    let places = vec![
        nearby("h1", "Apollo Hospital", "hospital", 0.004),
        nearby("s1", "Delhi Public School", "school", 0.006),
        nearby("b1", "HDFC Bank", "bank", 0.008),
    ];
    let distances = places
        .iter()
        .map(|place| (place.id.clone(), DistanceDuration::new(1_000.0, 240.0)))
        .collect();
    let mut upstream = context.upstream.borrow_mut();
    upstream.places = places;
    upstream.distances = distances;
}

#[given("the place search provider is unavailable")]
fn places_down(context: &FallbackContext) {
    context.upstream.borrow_mut().places_down = true;
}

#[given("the distance provider is unavailable")]
fn distances_down(context: &FallbackContext) {
    context.upstream.borrow_mut().distances_down = true;
}

#[given("the intelligence provider is unavailable")]
fn intelligence_down(context: &FallbackContext) {
    context.upstream.borrow_mut().intelligence_down = true;
}

#[given("no maps API key is configured")]
fn no_maps_key(context: &FallbackContext) {
    context.settings.borrow_mut().maps_api_key = None;
}

fn analyse_at(context: &FallbackContext, address: &str) {
    let upstream = context.upstream.borrow().clone();
    let outcome = LocationAnalyzer::new(
        context.settings.borrow().clone(),
        upstream.clone(),
        upstream.clone(),
        upstream,
    )
    .and_then(|analyzer| analyzer.analyze(&LocationQuery::new(FIXTURE_ORIGIN, address)));
    context.outcome.replace(Some(outcome));
}

#[when("the origin is analysed")]
fn analyse(context: &FallbackContext) {
    analyse_at(context, "");
}

#[when("the origin in Andheri East, Mumbai is analysed")]
fn analyse_in_mumbai(context: &FallbackContext) {
    analyse_at(context, "Andheri East, Mumbai");
}

fn report(context: &FallbackContext) -> AnalysisReport {
    match context.outcome.borrow().as_ref() {
        Some(Ok(report)) => report.clone(),
        Some(Err(error)) => panic!("analysis failed: {error}"),
        None => panic!("the origin should have been analysed"),
    }
}

#[then("no fallbacks are recorded")]
fn no_fallbacks(context: &FallbackContext) {
    assert!(report(context).fallbacks.is_empty());
}

#[then("only the empty place search fallback is recorded")]
fn empty_place_search(context: &FallbackContext) {
    assert_eq!(report(context).fallbacks, [Fallback::EmptyPlaceSearch]);
}

#[then("only the estimated distances fallback is recorded")]
fn estimated_distances(context: &FallbackContext) {
    assert_eq!(report(context).fallbacks, [Fallback::EstimatedDistances]);
}

#[then("only the keyword classification fallback is recorded")]
fn keyword_classification(context: &FallbackContext) {
    assert_eq!(report(context).fallbacks, [Fallback::KeywordClassification]);
}

#[then("three amenities are scored")]
fn three_amenities(context: &FallbackContext) {
    assert_eq!(report(context).breakdown.amenity_count, 3);
}

#[then("no amenities are scored")]
fn no_amenities(context: &FallbackContext) {
    assert_eq!(report(context).breakdown.amenity_count, 0);
}

#[then("the result matches a metro city classification")]
fn matches_metro(context: &FallbackContext) {
    let upstream = context.upstream.borrow();
    let expected = compute_report(
        &upstream.places,
        &upstream.distances,
        &AddressProfile::Metro.intelligence(),
    );
    assert_eq!(report(context).result, expected.result);
}

#[then("the analysis fails with a missing maps API key")]
fn missing_maps_key(context: &FallbackContext) {
    match context.outcome.borrow().as_ref() {
        Some(Err(AnalysisError::MissingCredential { name })) => assert_eq!(*name, MAPS_CREDENTIAL),
        other => panic!("expected a missing credential, found {other:?}"),
    }
}

#[then("no provider was called")]
fn no_calls(context: &FallbackContext) {
    assert_eq!(context.upstream.borrow().calls.get(), 0);
}

#[scenario(path = "tests/features/fallbacks.feature", index = 0)]
fn every_collaborator_answers(context: FallbackContext) {
    let _ = context;
}

#[scenario(path = "tests/features/fallbacks.feature", index = 1)]
fn place_search_unavailable(context: FallbackContext) {
    let _ = context;
}

#[scenario(path = "tests/features/fallbacks.feature", index = 2)]
fn distance_lookup_unavailable(context: FallbackContext) {
    let _ = context;
}

#[scenario(path = "tests/features/fallbacks.feature", index = 3)]
fn classification_unavailable(context: FallbackContext) {
    let _ = context;
}

#[scenario(path = "tests/features/fallbacks.feature", index = 4)]
fn credentials_missing(context: FallbackContext) {
    let _ = context;
}
