//! Location-intelligence adapter.

use locus_core::config::{Boost, IntelligenceConfig};
use locus_core::sanitise;
use locus_core::{DevelopmentStage, LocationIntelligence, LocationType};

/// Multipliers and bonuses derived from a classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntelligenceFactors {
    /// Multiplier from location type and development stage.
    pub multiplier: f64,
    /// Bonus from location type and development stage.
    pub baseline_bonus: f64,
    /// Multiplier from investment potential.
    pub potential_multiplier: f64,
    /// Bonus from the priority score.
    pub priority_bonus: f64,
}

/// Pick the boost for a classification, most specific first.
#[must_use]
pub const fn boost(config: &IntelligenceConfig, intelligence: &LocationIntelligence) -> Boost {
    match (intelligence.location_type, intelligence.development_stage) {
        (LocationType::Metropolitan, _) => config.metropolitan,
        (LocationType::City, _) => config.city,
        (_, DevelopmentStage::Developed) => config.developed,
        (_, DevelopmentStage::Developing) => config.developing,
        _ => config.fallback,
    }
}

/// Derive the adapter factors for a sanitised classification.
#[expect(clippy::float_arithmetic, reason = "potential and priority scaling")]
#[must_use]
pub fn factors(
    config: &IntelligenceConfig,
    intelligence: &LocationIntelligence,
) -> IntelligenceFactors {
    let chosen = boost(config, intelligence);
    IntelligenceFactors {
        multiplier: chosen.multiplier,
        baseline_bonus: chosen.baseline_bonus,
        potential_multiplier: sanitise::bounded(
            intelligence.investment_potential / 100.0 + config.potential_offset,
            config.potential_min,
            config.potential_max,
        ),
        priority_bonus: sanitise::bounded(
            intelligence.priority_score / 100.0,
            0.0,
            config.priority_bonus_cap,
        ),
    }
}

/// Add the baseline and priority bonuses when `score` already clears the
/// gate. Scores at or below the gate are returned unchanged.
///
/// # Examples
/// ```
/// use locus_core::config::IntelligenceConfig;
/// use locus_scorer::intelligence::{IntelligenceFactors, apply_gated_bonuses};
///
/// let config = IntelligenceConfig::default();
/// let factors = IntelligenceFactors {
///     multiplier: 2.0,
///     baseline_bonus: 1.5,
///     potential_multiplier: 1.4,
///     priority_bonus: 1.0,
/// };
/// assert_eq!(apply_gated_bonuses(&config, &factors, 0.8), 0.8);
/// assert!((apply_gated_bonuses(&config, &factors, 2.0) - 3.05).abs() < 1e-9);
/// ```
#[expect(clippy::float_arithmetic, reason = "additive bonuses")]
#[must_use]
pub fn apply_gated_bonuses(
    config: &IntelligenceConfig,
    factors: &IntelligenceFactors,
    score: f64,
) -> f64 {
    if score > config.bonus_gate {
        score
            + factors.baseline_bonus * config.baseline_bonus_share
            + factors.priority_bonus * config.priority_bonus_share
    } else {
        score
    }
}
