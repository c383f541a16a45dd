//! Location score calculator.
//!
//! Normalised category totals and the connectivity index form a base
//! infrastructure score. Economic signals, amenity density, proximity and
//! the location-intelligence factors then scale it multiplicatively before
//! the gated intelligence bonuses and the final clamp.

use locus_core::config::{EconomicBonuses, IntelligenceConfig, LocationScoreConfig, Normaliser};
use locus_core::sanitise;
use locus_core::{Category, CategoryAccumulator, CategoryTotals};

use crate::aggregate::InfrastructureSummary;
use crate::intelligence::{IntelligenceFactors, apply_gated_bonuses};

/// Economic bonuses earned by an origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SignalBonuses {
    /// Tech-hub bonus.
    pub tech_hub: f64,
    /// Financial-district bonus.
    pub financial_district: f64,
    /// Premium-residential bonus.
    pub premium_residential: f64,
    /// Metropolitan heuristic bonus.
    pub metropolitan: f64,
}

impl SignalBonuses {
    /// Sum of every bonus.
    #[expect(clippy::float_arithmetic, reason = "bonus sum")]
    #[must_use]
    pub fn total(&self) -> f64 {
        self.tech_hub + self.financial_district + self.premium_residential + self.metropolitan
    }

    /// Bonuses that also raise investment viability.
    ///
    /// Premium residential signals lift the location score only.
    #[expect(clippy::float_arithmetic, reason = "bonus sum")]
    #[must_use]
    pub fn viability_total(&self) -> f64 {
        self.tech_hub + self.financial_district + self.metropolitan
    }
}

/// Whether the summary looks like a dense metropolitan core.
#[must_use]
pub fn is_metropolitan(config: &EconomicBonuses, summary: &InfrastructureSummary) -> bool {
    let heuristic = &config.metropolitan;
    f64::from(summary.place_count) >= heuristic.min_places
        && summary.categories.transport.total >= heuristic.min_transport
        && summary.categories.commercial.total >= heuristic.min_commercial
}

/// Economic bonuses for the signals and metropolitan heuristic.
#[must_use]
pub fn signal_bonuses(config: &EconomicBonuses, summary: &InfrastructureSummary) -> SignalBonuses {
    let signals = &summary.signals;
    SignalBonuses {
        tech_hub: config.tech_hub.lookup(f64::from(signals.tech_hub)),
        financial_district: config
            .financial_district
            .lookup(f64::from(signals.financial_district)),
        premium_residential: config
            .premium_residential
            .lookup(f64::from(signals.premium_residential)),
        metropolitan: if is_metropolitan(config, summary) {
            config.metropolitan.bonus
        } else {
            0.0
        },
    }
}

/// Normalise an accumulator into `0..=ceiling` and add its premium bonus.
#[expect(clippy::float_arithmetic, reason = "premium bonus")]
#[must_use]
pub fn normalise(normaliser: &Normaliser, accumulator: &CategoryAccumulator) -> f64 {
    let base = sanitise::capped_ratio(accumulator.total, normaliser.divisor, normaliser.ceiling);
    let premium = (f64::from(accumulator.premium) * normaliser.premium_step)
        .min(normaliser.premium_cap);
    base + premium
}

/// Weighted share of each category's value contributed by close places.
#[expect(clippy::float_arithmetic, reason = "weighted ratio sum")]
#[must_use]
pub fn distance_quality_factor(config: &LocationScoreConfig, totals: &CategoryTotals) -> f64 {
    Category::ALL
        .iter()
        .map(|category| config.close_weights.get(*category) * totals.get(*category).close_ratio())
        .sum()
}

/// Base infrastructure score before the density bonus.
#[expect(clippy::float_arithmetic, reason = "weighted category sum")]
#[must_use]
pub fn weighted_infrastructure(
    config: &LocationScoreConfig,
    totals: &CategoryTotals,
    connectivity_index: f64,
) -> f64 {
    let categories: f64 = Category::ALL
        .iter()
        .map(|category| {
            config.infrastructure_weights.get(*category)
                * normalise(config.normalisers.get(*category), totals.get(*category))
        })
        .sum();
    let connectivity = sanitise::capped_ratio(
        connectivity_index,
        config.normalisers.connectivity.divisor,
        config.normalisers.connectivity.ceiling,
    );
    categories + config.connectivity_weight * connectivity
}

/// Score before the final scale, gated bonuses and clamp.
#[expect(clippy::float_arithmetic, reason = "multiplicative composition")]
#[must_use]
pub fn raw_score(
    config: &LocationScoreConfig,
    summary: &InfrastructureSummary,
    connectivity_index: f64,
    factors: &IntelligenceFactors,
) -> f64 {
    let density = config.density.lookup(f64::from(summary.amenity_count));
    let base = weighted_infrastructure(config, &summary.categories, connectivity_index)
        + density.bonus;
    let economic = 1.0 + signal_bonuses(&config.economic, summary).total();
    base * economic
        * density.multiplier
        * distance_quality_factor(config, &summary.categories)
        * factors.multiplier
        * factors.potential_multiplier
}

/// Location score in `min_score..=max_score`.
#[expect(clippy::float_arithmetic, reason = "final scaling")]
#[must_use]
pub fn location_score(
    config: &LocationScoreConfig,
    intelligence: &IntelligenceConfig,
    summary: &InfrastructureSummary,
    connectivity_index: f64,
    factors: &IntelligenceFactors,
) -> f64 {
    let scaled = raw_score(config, summary, connectivity_index, factors) * config.final_scale;
    let boosted = apply_gated_bonuses(intelligence, factors, scaled);
    sanitise::bounded(boosted, config.min_score, config.max_score)
}
