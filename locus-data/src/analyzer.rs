//! Orchestrates the collaborator ports and the scoring engine.
//!
//! [`LocationAnalyzer`] gathers places, distances and a classification for
//! one origin, then scores them. Upstream failures never abort an analysis:
//! each port has a local fallback and the report lists every fallback that
//! fired. Only configuration problems are fatal, and they surface before any
//! provider is called.

use locus_core::{
    AnalysisReport, ConfigError, DistanceMap, DistanceProvider, Fallback, IntelligenceProvider,
    LocationIntelligence, LocationQuery, Place, PlaceSearchProvider, ScoringConfig,
};
use locus_scorer::ScoringEngine;
use thiserror::Error;

use crate::{EstimatedDistanceProvider, KeywordIntelligenceClassifier};

/// Default place search radius.
///
/// Matches the connectivity scan radius. Infrastructure aggregation applies
/// its own tighter cutoff to the places returned.
pub const DEFAULT_RADIUS_METERS: u32 = 10_000;

/// Credential name reported for the maps providers.
pub const MAPS_CREDENTIAL: &str = "maps API key";

/// Credential name reported for the intelligence provider.
pub const INTELLIGENCE_CREDENTIAL: &str = "intelligence API key";

/// Settings for a [`LocationAnalyzer`].
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerSettings {
    /// Credential for place search and distance lookup.
    pub maps_api_key: Option<String>,
    /// Credential for the intelligence provider.
    pub intelligence_api_key: Option<String>,
    /// Place search radius.
    pub radius_meters: u32,
    /// Scoring configuration handed to the engine.
    pub scoring: ScoringConfig,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            maps_api_key: None,
            intelligence_api_key: None,
            radius_meters: DEFAULT_RADIUS_METERS,
            scoring: ScoringConfig::default(),
        }
    }
}

/// Fatal errors raised by [`LocationAnalyzer`].
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A required credential is absent or blank.
    #[error("missing {name}")]
    MissingCredential {
        /// Credential that was missing.
        name: &'static str,
    },
    /// The scoring configuration failed validation.
    #[error("invalid scoring configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
    /// The queried origin is not a valid WGS84 position.
    #[error("origin ({longitude}, {latitude}) is not a valid WGS84 position")]
    InvalidOrigin {
        /// Longitude of the rejected origin.
        longitude: f64,
        /// Latitude of the rejected origin.
        latitude: f64,
    },
}

fn require_credential(value: Option<&str>, name: &'static str) -> Result<(), AnalysisError> {
    match value {
        Some(key) if !key.trim().is_empty() => Ok(()),
        _ => Err(AnalysisError::MissingCredential { name }),
    }
}

fn validate_origin(query: &LocationQuery) -> Result<(), AnalysisError> {
    let origin = query.origin;
    if (-180.0..=180.0).contains(&origin.x) && (-90.0..=90.0).contains(&origin.y) {
        Ok(())
    } else {
        Err(AnalysisError::InvalidOrigin {
            longitude: origin.x,
            latitude: origin.y,
        })
    }
}

/// Gathers inputs through the collaborator ports and scores them.
///
/// # Examples
/// ```
/// use locus_core::test_support::{StaticDistances, StaticIntelligence, StaticPlaceSearch};
/// use locus_core::LocationQuery;
/// use locus_data::{AnalyzerSettings, LocationAnalyzer};
///
/// let settings = AnalyzerSettings {
///     maps_api_key: Some("maps-key".into()),
///     intelligence_api_key: Some("ai-key".into()),
///     ..AnalyzerSettings::default()
/// };
/// let analyzer = LocationAnalyzer::new(
///     settings,
///     StaticPlaceSearch::default(),
///     StaticDistances::default(),
///     StaticIntelligence::default(),
/// )?;
/// let report = analyzer.analyze(&LocationQuery::new(geo::Coord { x: 77.59, y: 12.97 }, ""))?;
/// assert!(report.fallbacks.is_empty());
/// # Ok::<(), locus_data::AnalysisError>(())
/// ```
#[derive(Debug)]
pub struct LocationAnalyzer<P, D, I> {
    engine: ScoringEngine,
    radius_meters: u32,
    places: P,
    distances: D,
    intelligence: I,
    estimator: EstimatedDistanceProvider,
    classifier: KeywordIntelligenceClassifier,
}

impl<P, D, I> LocationAnalyzer<P, D, I>
where
    P: PlaceSearchProvider,
    D: DistanceProvider,
    I: IntelligenceProvider,
{
    /// Validate `settings` and bind the providers.
    ///
    /// # Errors
    /// Returns [`AnalysisError::MissingCredential`] when either credential is
    /// absent or blank, and [`AnalysisError::InvalidConfig`] when the scoring
    /// configuration fails validation.
    pub fn new(
        settings: AnalyzerSettings,
        places: P,
        distances: D,
        intelligence: I,
    ) -> Result<Self, AnalysisError> {
        require_credential(settings.maps_api_key.as_deref(), MAPS_CREDENTIAL)?;
        require_credential(
            settings.intelligence_api_key.as_deref(),
            INTELLIGENCE_CREDENTIAL,
        )?;
        let engine = ScoringEngine::new(settings.scoring)?;
        Ok(Self {
            engine,
            radius_meters: settings.radius_meters,
            places,
            distances,
            intelligence,
            estimator: EstimatedDistanceProvider::default(),
            classifier: KeywordIntelligenceClassifier::default(),
        })
    }

    /// Replace the distance estimator used when the distance port fails.
    #[must_use]
    pub const fn with_estimator(mut self, estimator: EstimatedDistanceProvider) -> Self {
        self.estimator = estimator;
        self
    }

    /// Place search radius.
    #[must_use]
    pub const fn radius_meters(&self) -> u32 {
        self.radius_meters
    }

    /// Engine used for scoring.
    #[must_use]
    pub const fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// Analyse one origin.
    ///
    /// # Errors
    /// Returns [`AnalysisError::InvalidOrigin`] when the origin lies outside
    /// the WGS84 range. Provider failures are recovered and recorded in
    /// [`AnalysisReport::fallbacks`].
    pub fn analyze(&self, query: &LocationQuery) -> Result<AnalysisReport, AnalysisError> {
        validate_origin(query)?;
        let mut fallbacks = Vec::new();
        let places = self.search(query, &mut fallbacks);
        let distances = self.measure(query, &places, &mut fallbacks);
        let intelligence = self.classify(query, &mut fallbacks);
        log::debug!(
            "scoring {} places with {} distances for {:?}",
            places.len(),
            distances.len(),
            query.address
        );
        let mut report = self.engine.analyze(&places, &distances, &intelligence);
        report.fallbacks = fallbacks;
        Ok(report)
    }

    fn search(&self, query: &LocationQuery, fallbacks: &mut Vec<Fallback>) -> Vec<Place> {
        match self.places.search_nearby(query.origin, self.radius_meters) {
            Ok(places) => places,
            Err(error) => {
                log::warn!("place search failed, continuing without places: {error}");
                fallbacks.push(Fallback::EmptyPlaceSearch);
                Vec::new()
            }
        }
    }

    fn measure(
        &self,
        query: &LocationQuery,
        places: &[Place],
        fallbacks: &mut Vec<Fallback>,
    ) -> DistanceMap {
        match self.distances.distances(query.origin, places) {
            Ok(distances) => distances,
            Err(error) => {
                log::warn!("distance lookup failed, estimating from coordinates: {error}");
                fallbacks.push(Fallback::EstimatedDistances);
                self.estimator
                    .distances(query.origin, places)
                    .unwrap_or_default()
            }
        }
    }

    fn classify(
        &self,
        query: &LocationQuery,
        fallbacks: &mut Vec<Fallback>,
    ) -> LocationIntelligence {
        match self.intelligence.classify(query) {
            Ok(intelligence) => intelligence,
            Err(error) => {
                log::warn!("classification failed, using address keywords: {error}");
                fallbacks.push(Fallback::KeywordClassification);
                self.classifier.classify_address(&query.address)
            }
        }
    }
}
