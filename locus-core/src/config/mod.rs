//! Versioned scoring configuration.
//!
//! Every threshold, weight, ceiling and keyword table the engine uses lives
//! in a [`ScoringConfig`]. The default value reproduces the built-in `v3-ai`
//! behaviour; alternative variants can be loaded from JSON, where every
//! omitted field keeps its default.
//!
//! # Examples
//! ```
//! use locus_core::ScoringConfig;
//!
//! let config = ScoringConfig::from_json(r#"{ "version": "trial", "location": { "finalScale": 1.1 } }"#)
//!     .expect("valid config");
//! assert_eq!(config.version, "trial");
//! assert_eq!(config.location.final_scale, 1.1);
//! assert_eq!(config.location.max_score, 5.0);
//! ```

mod aggregation;
mod connectivity;
mod growth;
mod scoring;
mod viability;

pub use aggregation::{AggregationConfig, Amplifiers, DecayBand, DistanceDecay};
pub use connectivity::{ConnectivityConfig, FeatureWeights};
pub use growth::{
    BusinessFactors, BusinessGrowthConfig, DeclineConfig, GrowthConfig, Penalty,
    PopulationFactors, PopulationGrowthConfig, StandardGrowthConfig, SubFactor,
    ViabilityModifier, first_penalty,
};
pub use scoring::{
    Boost, CategoryWeights, DensityTier, EconomicBonuses, IntelligenceConfig,
    LocationScoreConfig, MetropolitanHeuristic, Normaliser, Normalisers,
};
pub use viability::{
    MarketConfig, MarketTerm, TierProfile, TierProfiles, TypeFallback, ViabilityConfig,
    ViabilityMultipliers,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ladder::Ladder;
use crate::taxonomy::{InfrastructureGrade, RecommendationBand};

/// Version tag of the built-in configuration.
pub const DEFAULT_VERSION: &str = "v3-ai";

/// Errors raised while loading or validating a [`ScoringConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A weight, multiplier or bound is negative or not finite.
    #[error("{field} must be a finite, non-negative number (got {value})")]
    InvalidWeight {
        /// Offending field path.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// A divisor or span is not strictly positive.
    #[error("{field} must be strictly positive (got {value})")]
    InvalidDivisor {
        /// Offending field path.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// A range has its lower bound above its upper bound.
    #[error("{field} has min {min} above max {max}")]
    InvertedRange {
        /// Offending field path.
        field: &'static str,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
    /// A keyword rule contains a pattern with no alphanumeric characters.
    #[error("{table} contains a blank pattern")]
    BlankPattern {
        /// Offending rule table.
        table: &'static str,
    },
    /// The version tag is empty.
    #[error("config version must not be empty")]
    MissingVersion,
    /// The JSON document could not be parsed.
    #[error("failed to parse scoring config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Closed range used for clamps and baselines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl Bounds {
    /// Construct bounds.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamp `value` into the range. `NaN` maps to `min`.
    #[must_use]
    pub const fn clamp(&self, value: f64) -> f64 {
        crate::sanitise::bounded(value, self.min, self.max)
    }

    /// Width of the range.
    #[expect(clippy::float_arithmetic, reason = "range width")]
    #[must_use]
    pub const fn span(&self) -> f64 {
        self.max - self.min
    }

    fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        check::range(field, self.min, self.max)
    }
}

/// Grade and band tables of the recommendation generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecommendationConfig {
    /// Infrastructure grade keyed by location score.
    pub grades: Ladder<InfrastructureGrade>,
    /// Recommendation band keyed by viability.
    pub bands: Ladder<RecommendationBand>,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            grades: Ladder::new(
                [
                    (4.0, InfrastructureGrade::A),
                    (3.0, InfrastructureGrade::B),
                    (2.0, InfrastructureGrade::C),
                    (1.0, InfrastructureGrade::D),
                ],
                InfrastructureGrade::E,
            ),
            bands: Ladder::new(
                [
                    (85.0, RecommendationBand::Outstanding),
                    (70.0, RecommendationBand::Excellent),
                    (55.0, RecommendationBand::Good),
                    (40.0, RecommendationBand::Limited),
                    (25.0, RecommendationBand::Speculative),
                ],
                RecommendationBand::Poor,
            ),
        }
    }
}

/// Complete, versioned scoring configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoringConfig {
    /// Version tag reported in every analysis breakdown.
    pub version: String,
    /// Infrastructure aggregation.
    pub aggregation: AggregationConfig,
    /// Connectivity analysis.
    pub connectivity: ConnectivityConfig,
    /// Location-intelligence adapter.
    pub intelligence: IntelligenceConfig,
    /// Location score.
    pub location: LocationScoreConfig,
    /// Tier classification and viability.
    pub viability: ViabilityConfig,
    /// Growth forecasts.
    pub growth: GrowthConfig,
    /// Recommendation labels.
    pub recommendation: RecommendationConfig,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_owned(),
            aggregation: AggregationConfig::default(),
            connectivity: ConnectivityConfig::default(),
            intelligence: IntelligenceConfig::default(),
            location: LocationScoreConfig::default(),
            viability: ViabilityConfig::default(),
            growth: GrowthConfig::default(),
            recommendation: RecommendationConfig::default(),
        }
    }
}

impl ScoringConfig {
    /// Parse a JSON document and validate the result.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed JSON and any validation
    /// error reported by [`ScoringConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field against its documented constraints.
    ///
    /// # Errors
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version.trim().is_empty() {
            return Err(ConfigError::MissingVersion);
        }
        self.aggregation.validate()?;
        self.connectivity.validate()?;
        self.intelligence.validate()?;
        self.location.validate()?;
        self.viability.validate()?;
        self.growth.validate()
    }
}

mod check {
    use super::ConfigError;
    use crate::rules::{MatchText, RuleSet};

    pub(super) fn weight(field: &'static str, value: f64) -> Result<(), ConfigError> {
        if value.is_finite() && value >= 0.0 {
            Ok(())
        } else {
            Err(ConfigError::InvalidWeight { field, value })
        }
    }

    pub(super) fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::InvalidDivisor { field, value })
        }
    }

    pub(super) fn range(field: &'static str, min: f64, max: f64) -> Result<(), ConfigError> {
        if min.is_finite() && max.is_finite() && min <= max {
            Ok(())
        } else {
            Err(ConfigError::InvertedRange { field, min, max })
        }
    }

    pub(super) fn patterns<T>(table: &'static str, rules: &RuleSet<T>) -> Result<(), ConfigError> {
        let blank = rules
            .iter()
            .flat_map(|rule| rule.patterns.iter())
            .any(|pattern| MatchText::new([pattern.as_str()]).is_blank());
        if blank {
            Err(ConfigError::BlankPattern { table })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{KeywordRule, RuleSet};
    use crate::taxonomy::Tier;
    use rstest::rstest;

    #[rstest]
    fn default_config_is_valid() {
        let config = ScoringConfig::default();
        assert_eq!(config.version, DEFAULT_VERSION);
        assert!(config.validate().is_ok());
    }

    #[rstest]
    fn default_config_survives_json() {
        let config = ScoringConfig::default();
        let json = serde_json::to_string(&config).expect("serialise config");
        let parsed = ScoringConfig::from_json(&json).expect("parse config");
        assert_eq!(parsed.version, config.version);
        assert_eq!(parsed.aggregation.category_rules, config.aggregation.category_rules);
        assert_eq!(parsed.viability.tier_rules, config.viability.tier_rules);
    }

    #[rstest]
    fn negative_weight_is_rejected() {
        let mut config = ScoringConfig::default();
        config.location.connectivity_weight = -0.1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWeight {
                field: "location.connectivityWeight",
                ..
            })
        ));
    }

    #[rstest]
    fn zero_divisor_is_rejected() {
        let mut config = ScoringConfig::default();
        config.location.normalisers.safety.divisor = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDivisor { .. })
        ));
    }

    #[rstest]
    fn inverted_clamp_is_rejected() {
        let mut config = ScoringConfig::default();
        config.growth.business.clamp = Bounds::new(5.0, -5.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedRange { .. })
        ));
    }

    #[rstest]
    fn blank_pattern_is_rejected() {
        let mut config = ScoringConfig::default();
        config.viability.tier_rules =
            RuleSet::new(vec![KeywordRule::new(Tier::Metro, 0.0).with_patterns(["  - "])]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BlankPattern {
                table: "viability.tierRules"
            })
        ));
    }

    #[rstest]
    fn empty_version_is_rejected() {
        assert!(matches!(
            ScoringConfig::from_json(r#"{ "version": " " }"#),
            Err(ConfigError::MissingVersion)
        ));
    }

    #[rstest]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            ScoringConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[rstest]
    fn bounds_clamp_nan_to_min() {
        let bounds = Bounds::new(-4.0, 8.0);
        assert_eq!(bounds.clamp(f64::NAN), -4.0);
        assert_eq!(bounds.clamp(9.0), 8.0);
        assert_eq!(bounds.span(), 12.0);
    }
}
