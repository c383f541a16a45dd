//! Growth predictor settings.

use serde::{Deserialize, Serialize};

use super::{Bounds, ConfigError, check};
use crate::rules::{KeywordRule, RuleSet};
use crate::taxonomy::AreaFocus;

/// Adjustment applied when a value is strictly below `below`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Penalty {
    /// Exclusive threshold.
    pub below: f64,
    /// Signed adjustment.
    pub amount: f64,
}

impl Penalty {
    /// Construct a penalty.
    #[must_use]
    pub const fn new(below: f64, amount: f64) -> Self {
        Self { below, amount }
    }
}

/// Adjustment of the first penalty whose threshold exceeds `value`.
///
/// Returns `0.0` when `value` is not below any threshold.
#[must_use]
pub fn first_penalty(penalties: &[Penalty], value: f64) -> f64 {
    penalties
        .iter()
        .find(|penalty| value < penalty.below)
        .map_or(0.0, |penalty| penalty.amount)
}

/// Viability adjustments for low and high viability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViabilityModifier {
    /// Viability strictly below this takes `low_amount`.
    pub low_below: f64,
    /// Signed adjustment for low viability.
    pub low_amount: f64,
    /// Viability strictly above this takes `high_amount`.
    pub high_above: f64,
    /// Signed adjustment for high viability.
    pub high_amount: f64,
}

impl ViabilityModifier {
    /// Adjustment for a viability value.
    #[must_use]
    pub const fn adjustment(&self, viability: f64) -> f64 {
        if viability < self.low_below {
            self.low_amount
        } else if viability > self.high_above {
            self.high_amount
        } else {
            0.0
        }
    }
}

/// One capped, weighted input of a growth rate: `min(cap, value * rate)`
/// contributes `weight * (capped / cap)` to the weighted strength.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubFactor {
    /// Points per input unit.
    pub rate: f64,
    /// Ceiling of the points.
    pub cap: f64,
    /// Share of the weighted strength.
    pub weight: f64,
}

impl SubFactor {
    /// Construct a sub-factor.
    #[must_use]
    pub const fn new(rate: f64, cap: f64, weight: f64) -> Self {
        Self { rate, cap, weight }
    }

    fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        check::weight(field, self.rate)?;
        check::positive(field, self.cap)?;
        check::weight(field, self.weight)
    }
}

/// Sub-factors of the business growth rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BusinessFactors {
    /// Commercial total.
    pub commercial: SubFactor,
    /// Transport total.
    pub transport: SubFactor,
    /// Tech-hub signal count.
    pub tech_ecosystem: SubFactor,
    /// Financial-district signal count.
    pub financial: SubFactor,
    /// Connectivity index.
    pub connectivity: SubFactor,
    /// Education total.
    pub education: SubFactor,
}

impl Default for BusinessFactors {
    fn default() -> Self {
        Self {
            commercial: SubFactor::new(0.8, 15.0, 0.25),
            transport: SubFactor::new(0.7, 12.0, 0.20),
            tech_ecosystem: SubFactor::new(3.5, 20.0, 0.20),
            financial: SubFactor::new(5.0, 10.0, 0.10),
            connectivity: SubFactor::new(0.04, 8.0, 0.15),
            education: SubFactor::new(0.6, 10.0, 0.10),
        }
    }
}

/// Business growth rate settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BusinessGrowthConfig {
    /// Weighted inputs.
    pub factors: BusinessFactors,
    /// Baseline range spanned by a weighted strength of `0..=1`.
    pub baseline: Bounds,
    /// Area focus rules; each rule's weight is its bonus.
    pub focus_rules: RuleSet<AreaFocus>,
    /// Viability adjustment.
    pub viability: ViabilityModifier,
    /// Output clamp.
    pub clamp: Bounds,
}

impl Default for BusinessGrowthConfig {
    fn default() -> Self {
        Self {
            factors: BusinessFactors::default(),
            baseline: Bounds::new(-3.0, 9.0),
            focus_rules: default_focus_rules(),
            viability: ViabilityModifier {
                low_below: 30.0,
                low_amount: -2.0,
                high_above: 70.0,
                high_amount: 1.5,
            },
            clamp: Bounds::new(-5.0, 12.0),
        }
    }
}

impl BusinessGrowthConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        for factor in [
            self.factors.commercial,
            self.factors.transport,
            self.factors.tech_ecosystem,
            self.factors.financial,
            self.factors.connectivity,
            self.factors.education,
        ] {
            factor.validate("growth.business.factors")?;
        }
        self.baseline.validate("growth.business.baseline")?;
        check::patterns("growth.business.focusRules", &self.focus_rules)?;
        self.clamp.validate("growth.business.clamp")
    }
}

/// Sub-factors of the population growth rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PopulationFactors {
    /// Essential services total.
    pub essential: SubFactor,
    /// Healthcare total.
    pub healthcare: SubFactor,
    /// Education total.
    pub education: SubFactor,
    /// Transport total.
    pub transport: SubFactor,
    /// Commercial total.
    pub commercial: SubFactor,
    /// Connectivity index.
    pub connectivity: SubFactor,
}

impl Default for PopulationFactors {
    fn default() -> Self {
        Self {
            essential: SubFactor::new(0.5, 10.0, 0.25),
            healthcare: SubFactor::new(0.8, 12.0, 0.20),
            education: SubFactor::new(0.6, 10.0, 0.15),
            transport: SubFactor::new(0.5, 8.0, 0.15),
            commercial: SubFactor::new(0.4, 10.0, 0.15),
            connectivity: SubFactor::new(0.025, 5.0, 0.10),
        }
    }
}

/// Population growth rate settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PopulationGrowthConfig {
    /// Weighted inputs.
    pub factors: PopulationFactors,
    /// Baseline range spanned by a weighted strength of `0..=1`.
    pub baseline: Bounds,
    /// Viability adjustment.
    pub viability: ViabilityModifier,
    /// Output clamp.
    pub clamp: Bounds,
}

impl Default for PopulationGrowthConfig {
    fn default() -> Self {
        Self {
            factors: PopulationFactors::default(),
            baseline: Bounds::new(-2.0, 6.0),
            viability: ViabilityModifier {
                low_below: 25.0,
                low_amount: -1.5,
                high_above: 75.0,
                high_amount: 1.0,
            },
            clamp: Bounds::new(-4.0, 8.0),
        }
    }
}

impl PopulationGrowthConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        for factor in [
            self.factors.essential,
            self.factors.healthcare,
            self.factors.education,
            self.factors.transport,
            self.factors.commercial,
            self.factors.connectivity,
        ] {
            factor.validate("growth.population.factors")?;
        }
        self.baseline.validate("growth.population.baseline")?;
        self.clamp.validate("growth.population.clamp")
    }
}

/// Growth forecast for locations below the decline threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeclineConfig {
    /// Location scores below this always forecast decline.
    pub below: f64,
    /// Penalty per location-score point below `below`.
    pub slope: f64,
    /// Amenity-count penalties in ascending threshold order.
    pub amenity_penalties: Vec<Penalty>,
    /// Connectivity penalties in ascending threshold order.
    pub connectivity_penalties: Vec<Penalty>,
    /// Viability penalties in ascending threshold order.
    pub viability_penalties: Vec<Penalty>,
    /// Output clamp. `max` must be negative.
    pub clamp: Bounds,
}

impl Default for DeclineConfig {
    fn default() -> Self {
        Self {
            below: 2.0,
            slope: 8.0,
            amenity_penalties: vec![Penalty::new(3.0, -4.0)],
            connectivity_penalties: vec![Penalty::new(20.0, -3.0)],
            viability_penalties: vec![Penalty::new(40.0, -2.0)],
            clamp: Bounds::new(-12.0, -1.0),
        }
    }
}

/// Weights of the standard growth forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StandardGrowthConfig {
    /// Weight of `viability / viability_scale`.
    pub viability_weight: f64,
    /// Weight of the business factor.
    pub business_weight: f64,
    /// Weight of the population factor.
    pub population_weight: f64,
    /// Weight of `location_score / location_scale`.
    pub location_weight: f64,
    /// Divisor turning viability into a factor.
    pub viability_scale: f64,
    /// Divisor turning the location score into a factor.
    pub location_scale: f64,
    /// Added to the business rate before scaling.
    pub business_offset: f64,
    /// Divisor of the offset business rate.
    pub business_span: f64,
    /// Added to the population rate before scaling.
    pub population_offset: f64,
    /// Divisor of the offset population rate.
    pub population_span: f64,
    /// Lowest offset rate used for either factor.
    pub min_offset_rate: f64,
    /// Scale applied to the weighted sum.
    pub scale: f64,
    /// Shift applied after scaling.
    pub shift: f64,
    /// Amenity-count penalties in ascending threshold order.
    pub amenity_penalties: Vec<Penalty>,
    /// Connectivity penalties in ascending threshold order.
    pub connectivity_penalties: Vec<Penalty>,
    /// Output clamp.
    pub clamp: Bounds,
}

impl Default for StandardGrowthConfig {
    fn default() -> Self {
        Self {
            viability_weight: 0.4,
            business_weight: 0.3,
            population_weight: 0.2,
            location_weight: 0.1,
            viability_scale: 100.0,
            location_scale: 5.0,
            business_offset: 5.0,
            business_span: 15.0,
            population_offset: 4.0,
            population_span: 10.0,
            min_offset_rate: 0.1,
            scale: 15.0,
            shift: -5.0,
            amenity_penalties: vec![Penalty::new(8.0, -3.0), Penalty::new(15.0, -1.5)],
            connectivity_penalties: vec![Penalty::new(40.0, -2.0)],
            clamp: Bounds::new(-8.0, 12.0),
        }
    }
}

/// Settings for the growth predictor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GrowthConfig {
    /// Decline branch.
    pub decline: DeclineConfig,
    /// Standard branch.
    pub standard: StandardGrowthConfig,
    /// Business growth rate.
    pub business: BusinessGrowthConfig,
    /// Population growth rate.
    pub population: PopulationGrowthConfig,
}

impl GrowthConfig {
    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        check::weight("growth.decline.slope", self.decline.slope)?;
        self.decline.clamp.validate("growth.decline.clamp")?;
        if self.decline.clamp.max >= 0.0 {
            return Err(ConfigError::InvalidWeight {
                field: "growth.decline.clamp.max",
                value: self.decline.clamp.max,
            });
        }
        let standard = &self.standard;
        for (field, value) in [
            ("growth.standard.viabilityWeight", standard.viability_weight),
            ("growth.standard.businessWeight", standard.business_weight),
            ("growth.standard.populationWeight", standard.population_weight),
            ("growth.standard.locationWeight", standard.location_weight),
            ("growth.standard.minOffsetRate", standard.min_offset_rate),
            ("growth.standard.scale", standard.scale),
        ] {
            check::weight(field, value)?;
        }
        check::positive("growth.standard.viabilityScale", standard.viability_scale)?;
        check::positive("growth.standard.locationScale", standard.location_scale)?;
        check::positive("growth.standard.businessSpan", standard.business_span)?;
        check::positive("growth.standard.populationSpan", standard.population_span)?;
        standard.clamp.validate("growth.standard.clamp")?;
        self.business.validate()?;
        self.population.validate()
    }
}

fn default_focus_rules() -> RuleSet<AreaFocus> {
    RuleSet::new(vec![
        KeywordRule::new(AreaFocus::Technology, 4.0).with_patterns([
            "it",
            "it park",
            "it hub",
            "tech",
            "technology",
            "software",
            "cyber",
        ]),
        KeywordRule::new(AreaFocus::Metro, 3.0).with_patterns([
            "metro",
            "metropolitan",
            "megacity",
            "mega city",
        ]),
        KeywordRule::new(AreaFocus::SmartCity, 2.5).with_patterns(["smart city", "smart"]),
        KeywordRule::new(AreaFocus::Industrial, 2.0).with_patterns([
            "industrial",
            "sez",
            "manufacturing",
        ]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(5.0, -3.0)]
    #[case(10.0, -1.5)]
    #[case(15.0, 0.0)]
    fn first_penalty_uses_lowest_threshold(#[case] amenities: f64, #[case] expected: f64) {
        let penalties = StandardGrowthConfig::default().amenity_penalties;
        assert_eq!(first_penalty(&penalties, amenities), expected);
    }

    #[rstest]
    #[case(10.0, -2.0)]
    #[case(50.0, 0.0)]
    #[case(90.0, 1.5)]
    fn viability_modifier_is_exclusive(#[case] viability: f64, #[case] expected: f64) {
        let modifier = BusinessGrowthConfig::default().viability;
        assert_eq!(modifier.adjustment(viability), expected);
    }

    #[rstest]
    #[case::viability(0.0, 5.0, "growth.standard.viabilityScale")]
    #[case::location(100.0, 0.0, "growth.standard.locationScale")]
    fn standard_scales_must_be_positive(
        #[case] viability_scale: f64,
        #[case] location_scale: f64,
        #[case] expected: &str,
    ) {
        let config = GrowthConfig {
            standard: StandardGrowthConfig {
                viability_scale,
                location_scale,
                ..StandardGrowthConfig::default()
            },
            ..GrowthConfig::default()
        };
        match config.validate() {
            Err(ConfigError::InvalidDivisor { field, .. }) => assert_eq!(field, expected),
            other => panic!("expected InvalidDivisor, found {other:?}"),
        }
    }
}
