//! Facade crate for the locus location-investment engine.
//!
//! This crate re-exports the core domain types and the scoring engine, and
//! exposes the provider orchestration behind the `data` feature.

#![forbid(unsafe_code)]

pub use locus_core::{
    AnalysisBreakdown, AnalysisReport, AnalysisResult, ConfigError, DevelopmentStage,
    DistanceDuration, DistanceMap, DistanceProvider, Fallback, IntelligenceProvider,
    LocationIntelligence, LocationQuery, LocationType, Place, PlaceSearchProvider, ProviderError,
    ScoringConfig, Tier,
};
pub use locus_scorer::{ScoringEngine, compute_analysis, compute_report};

#[cfg(feature = "data")]
pub use locus_data::{
    AnalysisError, AnalyzerSettings, EstimatedDistanceProvider, KeywordIntelligenceClassifier,
    LocationAnalyzer, Snapshot, SnapshotError, SnapshotProviders,
};
