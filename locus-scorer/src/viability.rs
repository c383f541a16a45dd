//! Tier classification and investment viability.

use locus_core::config::{MarketConfig, MarketTerm, ScoringConfig, ViabilityConfig};
use locus_core::sanitise;
use locus_core::{LocationIntelligence, MatchText, Tier};

use crate::aggregate::InfrastructureSummary;
use crate::location::signal_bonuses;

/// Classify a location into a tier.
///
/// Score-driven tiers take precedence: a low location score yields
/// [`Tier::VeryPoor`] or [`Tier::Poor`] whatever the area classification
/// says. Otherwise the first matching area rule decides, falling back to
/// the location type.
///
/// # Examples
/// ```
/// use locus_core::config::ViabilityConfig;
/// use locus_core::{LocationIntelligence, Tier};
/// use locus_scorer::viability::classify_tier;
///
/// let config = ViabilityConfig::default();
/// let intelligence = LocationIntelligence {
///     area_classification: "Metro city".into(),
///     ..LocationIntelligence::neutral()
/// };
/// assert_eq!(classify_tier(&config, 3.5, &intelligence), Tier::Metro);
/// assert_eq!(classify_tier(&config, 1.8, &intelligence), Tier::Poor);
/// ```
#[must_use]
pub fn classify_tier(
    config: &ViabilityConfig,
    location_score: f64,
    intelligence: &LocationIntelligence,
) -> Tier {
    if location_score < config.very_poor_below {
        return Tier::VeryPoor;
    }
    if location_score < config.poor_below {
        return Tier::Poor;
    }
    let text = MatchText::new([intelligence.area_classification.as_str()]);
    config
        .tier_rules
        .first_match(&text, &[])
        .map_or_else(
            || config.type_fallback.tier(intelligence.location_type),
            |rule| rule.tag,
        )
}

/// Capped market fundamentals sub-scores.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MarketScore {
    /// Infrastructure maturity.
    pub infrastructure: f64,
    /// Economic activity.
    pub economic: f64,
    /// Connectivity.
    pub connectivity: f64,
    /// Demographics.
    pub demographics: f64,
    /// Transportation.
    pub transport: f64,
}

impl MarketScore {
    /// Sum of every sub-score.
    #[expect(clippy::float_arithmetic, reason = "sub-score sum")]
    #[must_use]
    pub fn total(&self) -> f64 {
        self.infrastructure + self.economic + self.connectivity + self.demographics + self.transport
    }
}

#[expect(clippy::float_arithmetic, reason = "capped proportional term")]
const fn market_term(term: MarketTerm, value: f64) -> f64 {
    (sanitise::non_negative(value) / term.divisor * term.cap).min(term.cap)
}

/// Market fundamentals of an origin.
#[expect(clippy::float_arithmetic, reason = "demographic total")]
#[must_use]
pub fn market_score(
    config: &MarketConfig,
    location_score: f64,
    summary: &InfrastructureSummary,
    connectivity_index: f64,
) -> MarketScore {
    let totals = &summary.categories;
    MarketScore {
        infrastructure: market_term(config.infrastructure, location_score),
        economic: market_term(config.economic, totals.commercial.total),
        connectivity: market_term(config.connectivity, connectivity_index),
        demographics: market_term(
            config.demographics,
            totals.education.total + totals.lifestyle.total,
        ),
        transport: market_term(config.transport, totals.transport.total),
    }
}

/// Everything the viability calculator reads.
#[derive(Debug, Clone, Copy)]
pub struct ViabilityInputs<'a> {
    /// Location score.
    pub location_score: f64,
    /// Tier from [`classify_tier`].
    pub tier: Tier,
    /// Aggregated infrastructure.
    pub summary: &'a InfrastructureSummary,
    /// Connectivity index.
    pub connectivity_index: f64,
    /// Sanitised classification.
    pub intelligence: &'a LocationIntelligence,
}

/// Additive increments of the viability multiplier, before the tier
/// multiplier.
#[expect(clippy::float_arithmetic, reason = "multiplier increments")]
#[must_use]
pub fn viability_multiplier(config: &ScoringConfig, inputs: &ViabilityInputs<'_>) -> f64 {
    let multipliers = &config.viability.multipliers;
    let summary = inputs.summary;
    let signals = signal_bonuses(&config.location.economic, summary).viability_total();
    1.0 + multipliers.connectivity.lookup(inputs.connectivity_index)
        + multipliers.amenities.lookup(f64::from(summary.amenity_count))
        + multipliers
            .commercial
            .lookup(summary.categories.commercial.total)
        + signals * multipliers.signal_scale
}

/// Investment viability as a whole percentage.
#[expect(clippy::float_arithmetic, reason = "viability composition")]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is rounded and clamped to 0..=100 first"
)]
#[must_use]
pub fn investment_viability(config: &ScoringConfig, inputs: &ViabilityInputs<'_>) -> u8 {
    let viability = &config.viability;
    let profile = viability.tiers.get(inputs.tier);
    let priority = inputs.intelligence.priority_score;

    let base_points = inputs.location_score / config.location.max_score * viability.base_points;
    let baseline = (base_points * profile.scale).max(profile.floor);
    let potential_bonus = (inputs.intelligence.investment_potential * viability.potential_rate)
        .min(viability.potential_cap);
    let priority_bonus = (priority * profile.priority_rate).min(profile.priority_cap)
        + profile.priority_extra.lookup(priority);
    let market = market_score(
        &viability.market,
        inputs.location_score,
        inputs.summary,
        inputs.connectivity_index,
    );
    let market_bonus = (market.total() * viability.market.share).min(viability.market.cap);

    let raw = (baseline + market_bonus + potential_bonus + priority_bonus)
        * viability_multiplier(config, inputs)
        * profile.multiplier.lookup(priority);
    sanitise::bounded(raw.round(), 0.0, viability.max_viability) as u8
}
