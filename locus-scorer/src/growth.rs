//! Growth predictor.
//!
//! Business and population growth rates are weighted sums of capped
//! sub-factors stretched over a baseline range. The headline growth
//! prediction takes one of two branches: locations below the decline
//! threshold always forecast a fall, everything else blends viability,
//! both growth rates and the location score.

use locus_core::config::{
    BusinessGrowthConfig, DeclineConfig, GrowthConfig, PopulationGrowthConfig,
    StandardGrowthConfig, SubFactor, first_penalty,
};
use locus_core::{AreaFocus, LocationIntelligence, LocationType, MatchText};

use crate::aggregate::InfrastructureSummary;

/// Growth figures for one origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthOutlook {
    /// Forecast annual property value change.
    pub prediction: f64,
    /// Forecast annual business growth.
    pub business_rate: f64,
    /// Forecast annual population growth.
    pub population_rate: f64,
}

#[expect(clippy::float_arithmetic, reason = "capped weighted share")]
const fn weighted(factor: SubFactor, value: f64) -> f64 {
    let points = (value.max(0.0) * factor.rate).min(factor.cap);
    factor.weight * points / factor.cap
}

#[expect(clippy::float_arithmetic, reason = "baseline interpolation")]
const fn stretch(min: f64, max: f64, strength: f64) -> f64 {
    min + (max - min) * strength
}

/// Area focus bonus for business growth.
///
/// The first matching focus rule wins. An unmatched metropolitan location
/// still takes the metro bonus.
#[must_use]
pub fn focus_bonus(config: &BusinessGrowthConfig, intelligence: &LocationIntelligence) -> f64 {
    let text = MatchText::new([intelligence.area_classification.as_str()]);
    if let Some(rule) = config.focus_rules.first_match(&text, &[]) {
        return rule.weight;
    }
    if intelligence.location_type == LocationType::Metropolitan {
        config
            .focus_rules
            .iter()
            .find(|rule| rule.tag == AreaFocus::Metro)
            .map_or(0.0, |rule| rule.weight)
    } else {
        0.0
    }
}

/// Business growth rate in the configured clamp range.
#[expect(clippy::float_arithmetic, reason = "weighted growth composition")]
#[must_use]
pub fn business_growth_rate(
    config: &BusinessGrowthConfig,
    summary: &InfrastructureSummary,
    connectivity_index: f64,
    viability: f64,
    intelligence: &LocationIntelligence,
) -> f64 {
    let factors = &config.factors;
    let totals = &summary.categories;
    let strength = weighted(factors.commercial, totals.commercial.total)
        + weighted(factors.transport, totals.transport.total)
        + weighted(factors.tech_ecosystem, f64::from(summary.signals.tech_hub))
        + weighted(
            factors.financial,
            f64::from(summary.signals.financial_district),
        )
        + weighted(factors.connectivity, connectivity_index)
        + weighted(factors.education, totals.education.total);
    let rate = stretch(config.baseline.min, config.baseline.max, strength)
        + focus_bonus(config, intelligence)
        + config.viability.adjustment(viability);
    config.clamp.clamp(rate)
}

/// Population growth rate in the configured clamp range.
#[expect(clippy::float_arithmetic, reason = "weighted growth composition")]
#[must_use]
pub fn population_growth_rate(
    config: &PopulationGrowthConfig,
    summary: &InfrastructureSummary,
    connectivity_index: f64,
    viability: f64,
) -> f64 {
    let factors = &config.factors;
    let totals = &summary.categories;
    let strength = weighted(factors.essential, totals.essential.total)
        + weighted(factors.healthcare, totals.healthcare.total)
        + weighted(factors.education, totals.education.total)
        + weighted(factors.transport, totals.transport.total)
        + weighted(factors.commercial, totals.commercial.total)
        + weighted(factors.connectivity, connectivity_index);
    let rate = stretch(config.baseline.min, config.baseline.max, strength)
        + config.viability.adjustment(viability);
    config.clamp.clamp(rate)
}

/// Inputs shared by both prediction branches.
#[derive(Debug, Clone, Copy)]
pub struct GrowthInputs {
    /// Location score.
    pub location_score: f64,
    /// Investment viability.
    pub viability: f64,
    /// Places contributing to at least one category.
    pub amenity_count: u32,
    /// Connectivity index.
    pub connectivity_index: f64,
}

#[expect(clippy::float_arithmetic, reason = "decline penalties")]
fn decline(config: &DeclineConfig, inputs: &GrowthInputs) -> f64 {
    let penalty = (config.below - inputs.location_score) * -config.slope
        + first_penalty(&config.amenity_penalties, f64::from(inputs.amenity_count))
        + first_penalty(&config.connectivity_penalties, inputs.connectivity_index)
        + first_penalty(&config.viability_penalties, inputs.viability);
    config.clamp.clamp(penalty)
}

#[expect(clippy::float_arithmetic, reason = "weighted blend")]
fn standard(
    config: &StandardGrowthConfig,
    inputs: &GrowthInputs,
    business_rate: f64,
    population_rate: f64,
) -> f64 {
    let business = (business_rate + config.business_offset).max(config.min_offset_rate)
        / config.business_span;
    let population = (population_rate + config.population_offset).max(config.min_offset_rate)
        / config.population_span;
    let blend = config.viability_weight * inputs.viability / config.viability_scale
        + config.business_weight * business
        + config.population_weight * population
        + config.location_weight * inputs.location_score / config.location_scale;
    let growth = blend * config.scale
        + config.shift
        + first_penalty(&config.amenity_penalties, f64::from(inputs.amenity_count))
        + first_penalty(&config.connectivity_penalties, inputs.connectivity_index);
    config.clamp.clamp(growth)
}

/// Growth prediction from precomputed growth rates.
#[must_use]
pub fn growth_prediction(
    config: &GrowthConfig,
    inputs: &GrowthInputs,
    business_rate: f64,
    population_rate: f64,
) -> f64 {
    if inputs.location_score < config.decline.below {
        decline(&config.decline, inputs)
    } else {
        standard(&config.standard, inputs, business_rate, population_rate)
    }
}

/// Compute every growth figure for an origin.
#[must_use]
pub fn outlook(
    config: &GrowthConfig,
    summary: &InfrastructureSummary,
    inputs: &GrowthInputs,
    intelligence: &LocationIntelligence,
) -> GrowthOutlook {
    let business_rate = business_growth_rate(
        &config.business,
        summary,
        inputs.connectivity_index,
        inputs.viability,
        intelligence,
    );
    let population_rate = population_growth_rate(
        &config.population,
        summary,
        inputs.connectivity_index,
        inputs.viability,
    );
    GrowthOutlook {
        prediction: growth_prediction(config, inputs, business_rate, population_rate),
        business_rate,
        population_rate,
    }
}
