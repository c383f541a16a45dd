//! Outputs of an analysis: the core result and its optional breakdown.

use serde::{Deserialize, Serialize};

use crate::sanitise;
use crate::taxonomy::{Category, InfrastructureGrade, Tier};

/// Core investment metrics for one location.
///
/// Every field is bounded: `location_score` in `0.1..=5.0`,
/// `investment_viability` in `0..=100`, `growth_prediction` in `-12..=12`,
/// `business_growth_rate` in `-5..=12` and `population_growth_rate` in
/// `-4..=8`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Composite infrastructure and connectivity quality.
    pub location_score: f64,
    /// Investment attractiveness percentage.
    pub investment_viability: u8,
    /// Forecast annual property value change, in percent.
    pub growth_prediction: f64,
    /// Forecast annual business growth, in percent.
    pub business_growth_rate: f64,
    /// Forecast annual population growth, in percent.
    pub population_growth_rate: f64,
    /// Human-readable recommendation label.
    pub investment_recommendation: String,
}

/// Weighted contributions accumulated for one category.
///
/// Values only ever grow during aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryAccumulator {
    /// Sum of weighted scores.
    pub total: f64,
    /// Sum of weighted scores for places within the close radius.
    pub close: f64,
    /// Number of premium or hub-type matches.
    pub premium: u32,
}

impl CategoryAccumulator {
    /// Add a weighted contribution. Non-finite or negative scores are ignored.
    #[expect(clippy::float_arithmetic, reason = "accumulating weighted scores")]
    pub fn record(&mut self, score: f64, is_close: bool, is_premium: bool) {
        let contribution = sanitise::non_negative(score);
        self.total += contribution;
        if is_close {
            self.close += contribution;
        }
        if is_premium {
            self.premium = self.premium.saturating_add(1);
        }
    }

    /// Share of the total contributed by close places, capped at `1.0`.
    #[must_use]
    pub const fn close_ratio(&self) -> f64 {
        sanitise::capped_ratio(self.close, self.total, 1.0)
    }
}

/// Accumulators for every category plus the catch-all `essential` bucket.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryTotals {
    /// Healthcare.
    pub healthcare: CategoryAccumulator,
    /// Education.
    pub education: CategoryAccumulator,
    /// Transport.
    pub transport: CategoryAccumulator,
    /// Commercial.
    pub commercial: CategoryAccumulator,
    /// Lifestyle.
    pub lifestyle: CategoryAccumulator,
    /// Safety.
    pub safety: CategoryAccumulator,
    /// Environment.
    pub environment: CategoryAccumulator,
    /// Every place with at least one category.
    pub essential: CategoryAccumulator,
}

impl CategoryTotals {
    /// Borrow the accumulator for a category.
    #[must_use]
    pub const fn get(&self, category: Category) -> &CategoryAccumulator {
        match category {
            Category::Healthcare => &self.healthcare,
            Category::Education => &self.education,
            Category::Transport => &self.transport,
            Category::Commercial => &self.commercial,
            Category::Lifestyle => &self.lifestyle,
            Category::Safety => &self.safety,
            Category::Environment => &self.environment,
        }
    }

    /// Mutably borrow the accumulator for a category.
    pub const fn get_mut(&mut self, category: Category) -> &mut CategoryAccumulator {
        match category {
            Category::Healthcare => &mut self.healthcare,
            Category::Education => &mut self.education,
            Category::Transport => &mut self.transport,
            Category::Commercial => &mut self.commercial,
            Category::Lifestyle => &mut self.lifestyle,
            Category::Safety => &mut self.safety,
            Category::Environment => &mut self.environment,
        }
    }
}

/// Counts of economic signals among nearby places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EconomicSignals {
    /// Technology park and software campus matches.
    pub tech_hub: u32,
    /// Financial district matches.
    pub financial_district: u32,
    /// Premium residential matches.
    pub premium_residential: u32,
}

/// Upstream fallbacks that fired while gathering inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fallback {
    /// Place search failed; the analysis ran without places.
    EmptyPlaceSearch,
    /// Distance lookup failed; distances were estimated from coordinates.
    EstimatedDistances,
    /// Classification failed; the keyword classifier was used.
    KeywordClassification,
}

/// Intermediate values behind an [`AnalysisResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisBreakdown {
    /// Version of the scoring configuration that produced the result.
    pub config_version: String,
    /// Tier chosen for viability and recommendation.
    pub tier: Tier,
    /// Area category label.
    pub area_category: String,
    /// Tier risk label.
    pub tier_risk: String,
    /// Infrastructure grade.
    pub infrastructure_grade: InfrastructureGrade,
    /// Connectivity index in `0..=100`.
    pub connectivity_index: f64,
    /// Places within the scoring radius with at least one category.
    pub amenity_count: u32,
    /// Economic signal counts.
    pub signals: EconomicSignals,
    /// Per-category accumulators.
    pub categories: CategoryTotals,
}

/// Result plus breakdown and the fallbacks used to gather inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Core metrics.
    pub result: AnalysisResult,
    /// Intermediate values.
    pub breakdown: AnalysisBreakdown,
    /// Fallbacks that fired, empty when every collaborator answered.
    #[serde(default)]
    pub fallbacks: Vec<Fallback>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn accumulator_ignores_invalid_scores() {
        let mut acc = CategoryAccumulator::default();
        acc.record(1.5, true, true);
        acc.record(f64::NAN, true, false);
        acc.record(-2.0, false, false);
        acc.record(0.5, false, false);
        assert_eq!(acc.total, 2.0);
        assert_eq!(acc.close, 1.5);
        assert_eq!(acc.premium, 1);
        assert_eq!(acc.close_ratio(), 0.75);
    }

    #[rstest]
    fn empty_accumulator_has_zero_close_ratio() {
        assert_eq!(CategoryAccumulator::default().close_ratio(), 0.0);
    }

    #[rstest]
    fn totals_route_categories() {
        let mut totals = CategoryTotals::default();
        totals.get_mut(Category::Safety).record(1.0, false, false);
        assert_eq!(totals.safety.total, 1.0);
        assert_eq!(totals.get(Category::Safety).total, 1.0);
    }

    #[rstest]
    fn result_serialises_camel_case() {
        let result = AnalysisResult {
            location_score: 3.2,
            investment_viability: 64,
            growth_prediction: 4.1,
            business_growth_rate: 3.0,
            population_growth_rate: 1.5,
            investment_recommendation: "Good Investment Prospect".into(),
        };
        let json = serde_json::to_value(&result).expect("serialise result");
        assert_eq!(json["investmentViability"], 64);
        assert!(json.get("locationScore").is_some());
    }
}
