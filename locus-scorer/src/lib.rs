//! Location-investment scoring engine.
//!
//! The engine turns a set of nearby places, their distances from the
//! analysed origin and a location classification into an
//! [`AnalysisResult`](locus_core::AnalysisResult). It is a pure, synchronous
//! computation: it performs no I/O, holds no shared mutable state and never
//! fails. Every weight and threshold comes from a validated
//! [`ScoringConfig`].
//!
//! The stages run in a fixed order:
//! - [`aggregate`] folds places into per-category accumulators.
//! - [`connectivity`] scores airports, stations, highways and ports.
//! - [`intelligence`] turns the classification into multipliers and bonuses.
//! - [`location`] combines the above into the location score.
//! - [`viability`] classifies the tier and derives investment viability.
//! - [`growth`] forecasts business, population and property growth.
//! - [`recommendation`] grades the location and writes the label.
//!
//! # Examples
//!
//! ```
//! use locus_core::{DistanceDuration, DistanceMap, LocationIntelligence, Place};
//! use locus_scorer::compute_analysis;
//!
//! let places = vec![
//!     Place::new("h1", "City Hospital").with_types(["hospital"]).with_rating(4.5),
//! ];
//! let mut distances = DistanceMap::new();
//! distances.insert("h1".into(), DistanceDuration::new(800.0, 120.0));
//!
//! let result = compute_analysis(&places, &distances, &LocationIntelligence::neutral());
//! assert!((0.1..=5.0).contains(&result.location_score));
//! assert!(result.investment_viability <= 100);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use std::sync::LazyLock;

use locus_core::{
    AnalysisBreakdown, AnalysisReport, AnalysisResult, ConfigError, DistanceMap,
    LocationIntelligence, Place, ScoringConfig,
};

pub mod aggregate;
pub mod connectivity;
pub mod growth;
pub mod intelligence;
pub mod location;
pub mod recommendation;
mod resolved;
pub mod viability;

use growth::GrowthInputs;
use viability::ViabilityInputs;

/// Scoring engine bound to one validated configuration.
///
/// # Examples
/// ```
/// use locus_core::ScoringConfig;
/// use locus_scorer::ScoringEngine;
///
/// let mut config = ScoringConfig::default();
/// config.location.final_scale = -1.0;
/// assert!(ScoringEngine::new(config).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    /// Validate `config` and bind an engine to it.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the configuration fails validation.
    pub fn new(config: ScoringConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Borrow the configuration.
    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score one origin and return the result with its breakdown.
    ///
    /// The classification is sanitised before use. Places whose distance is
    /// missing or unusable are ignored.
    #[must_use]
    pub fn analyze(
        &self,
        places: &[Place],
        distances: &DistanceMap,
        intelligence: &LocationIntelligence,
    ) -> AnalysisReport {
        let config = &self.config;
        let classification = intelligence.sanitised();

        let summary = aggregate::aggregate(&config.aggregation, places, distances);
        let connectivity_index =
            connectivity::connectivity_index(&config.connectivity, places, distances);
        let factors = intelligence::factors(&config.intelligence, &classification);
        let score = location::location_score(
            &config.location,
            &config.intelligence,
            &summary,
            connectivity_index,
            &factors,
        );
        log::debug!(
            "aggregated {} amenities from {} places, connectivity {connectivity_index:.2}, location score {score:.3}",
            summary.amenity_count,
            summary.place_count,
        );

        let tier = viability::classify_tier(&config.viability, score, &classification);
        let investment_viability = viability::investment_viability(
            config,
            &ViabilityInputs {
                location_score: score,
                tier,
                summary: &summary,
                connectivity_index,
                intelligence: &classification,
            },
        );
        let outlook = growth::outlook(
            &config.growth,
            &summary,
            &GrowthInputs {
                location_score: score,
                viability: f64::from(investment_viability),
                amenity_count: summary.amenity_count,
                connectivity_index,
            },
            &classification,
        );
        log::debug!(
            "tier {tier:?}, viability {investment_viability}, growth {:.2}",
            outlook.prediction
        );

        AnalysisReport {
            result: AnalysisResult {
                location_score: score,
                investment_viability,
                growth_prediction: outlook.prediction,
                business_growth_rate: outlook.business_rate,
                population_growth_rate: outlook.population_rate,
                investment_recommendation: recommendation::recommendation(
                    config,
                    score,
                    investment_viability,
                    tier,
                ),
            },
            breakdown: AnalysisBreakdown {
                config_version: config.version.clone(),
                tier,
                area_category: tier.area_category().to_owned(),
                tier_risk: tier.risk().to_owned(),
                infrastructure_grade: recommendation::infrastructure_grade(
                    &config.recommendation,
                    score,
                ),
                connectivity_index,
                amenity_count: summary.amenity_count,
                signals: summary.signals,
                categories: summary.categories,
            },
            fallbacks: Vec::new(),
        }
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self {
            config: ScoringConfig::default(),
        }
    }
}

static DEFAULT_ENGINE: LazyLock<ScoringEngine> = LazyLock::new(ScoringEngine::default);

/// Score one origin with the default configuration.
#[must_use]
pub fn compute_report(
    places: &[Place],
    distances: &DistanceMap,
    intelligence: &LocationIntelligence,
) -> AnalysisReport {
    DEFAULT_ENGINE.analyze(places, distances, intelligence)
}

/// Score one origin with the default configuration, without the breakdown.
#[must_use]
pub fn compute_analysis(
    places: &[Place],
    distances: &DistanceMap,
    intelligence: &LocationIntelligence,
) -> AnalysisResult {
    compute_report(places, distances, intelligence).result
}

#[cfg(test)]
mod tests {
    use super::*;
    use locus_core::test_support::{Neighbourhood, intelligence};
    use locus_core::{DevelopmentStage, LocationType, Tier};
    use rstest::rstest;

    #[rstest]
    fn empty_rural_origin_hits_every_floor() {
        let rural = intelligence(
            LocationType::Rural,
            DevelopmentStage::Underdeveloped,
            20.0,
            "Rural",
            20.0,
        );
        let report = compute_report(&[], &DistanceMap::new(), &rural);
        assert_eq!(report.result.location_score, 0.1);
        assert!((5..=15).contains(&report.result.investment_viability));
        assert_eq!(report.result.growth_prediction, -12.0);
        assert_eq!(report.breakdown.tier, Tier::VeryPoor);
        assert!(
            report
                .result
                .investment_recommendation
                .starts_with("Not Recommended")
        );
    }

    #[rstest]
    fn report_records_config_version() {
        let (places, distances) = Neighbourhood::default()
            .with(Place::new("s", "Central Mall").with_types(["shopping_mall"]), 1.0)
            .into_parts();
        let report =
            ScoringEngine::default().analyze(&places, &distances, &LocationIntelligence::neutral());
        assert_eq!(report.breakdown.config_version, "v3-ai");
        assert!(report.fallbacks.is_empty());
        assert_eq!(report.breakdown.amenity_count, 1);
    }

    #[rstest]
    fn invalid_intelligence_is_sanitised() {
        let raw = LocationIntelligence {
            investment_potential: f64::NAN,
            priority_score: 400.0,
            ..LocationIntelligence::neutral()
        };
        let result = compute_analysis(&[], &DistanceMap::new(), &raw);
        assert!(result.location_score.is_finite());
        assert!(result.growth_prediction.is_finite());
    }

    #[rstest]
    fn engine_rejects_invalid_config() {
        let mut config = ScoringConfig::default();
        config.growth.decline.clamp.max = 2.0;
        assert!(ScoringEngine::new(config).is_err());
    }
}
