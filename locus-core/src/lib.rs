//! Core domain types for the locus location-investment engine.
//!
//! The crate defines the inputs handed to the scoring engine (places, their
//! distances from the analysed origin and an externally supplied location
//! classification), the outputs it produces, and the declarative
//! [`ScoringConfig`] that carries every weight, threshold and clamp range the
//! engine uses. Collaborator ports for place search, distance lookup and
//! location classification live in [`provider`] so the engine itself never
//! performs I/O.
//!
//! # Examples
//!
//! ```
//! use locus_core::{LocationIntelligence, LocationType, Place};
//!
//! let place = Place::new("p1", "City Hospital")
//!     .with_types(["hospital"])
//!     .with_rating(4.6);
//! assert_eq!(place.sanitised_rating(), Some(4.6));
//!
//! let intelligence = LocationIntelligence::neutral();
//! assert_eq!(intelligence.location_type, LocationType::Town);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod analysis;
pub mod config;
pub mod intelligence;
pub mod ladder;
pub mod place;
pub mod provider;
pub mod rules;
pub mod sanitise;
pub mod taxonomy;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use analysis::{
    AnalysisBreakdown, AnalysisReport, AnalysisResult, CategoryAccumulator, CategoryTotals,
    EconomicSignals, Fallback,
};
pub use config::{ConfigError, ScoringConfig};
pub use intelligence::{DevelopmentStage, LocationIntelligence, LocationQuery, LocationType};
pub use ladder::{Ladder, Step};
pub use place::{DistanceDuration, DistanceMap, Place};
pub use provider::{DistanceProvider, IntelligenceProvider, PlaceSearchProvider, ProviderError};
pub use rules::{KeywordRule, MatchText, RuleSet};
pub use taxonomy::{
    AreaFocus, Category, ConnectivityFeature, InfrastructureGrade, QualityTier,
    RecommendationBand, Signal, Subtype, Tier,
};
