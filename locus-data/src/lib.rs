//! Collaborator-side logic for the locus engine.
//!
//! Responsibilities:
//! - Supply the fallbacks used when an upstream provider fails: a keyword
//!   address classifier and a coordinate-based distance estimator.
//! - Replay recorded provider output from snapshot documents.
//! - Orchestrate place search, distance lookup, classification and scoring
//!   in [`LocationAnalyzer`].
//!
//! Boundaries:
//! - Do not encode scoring rules (live in `locus-scorer`).
//! - Transport to real mapping and AI services lives behind the ports in
//!   `locus_core::provider`.
//!
//! Invariants:
//! - Provider failures never abort an analysis.
//! - No global mutable state.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod analyzer;
pub mod classifier;
pub mod estimate;
pub mod snapshot;

pub use analyzer::{AnalysisError, AnalyzerSettings, DEFAULT_RADIUS_METERS, LocationAnalyzer};
pub use classifier::{AddressProfile, KeywordIntelligenceClassifier};
pub use estimate::{DEFAULT_SPEED_KMH, DEFAULT_WINDING_FACTOR, EstimatedDistanceProvider};
pub use snapshot::{Snapshot, SnapshotError, SnapshotProviders};
