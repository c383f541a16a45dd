//! Recommendation generator.

use locus_core::config::{RecommendationConfig, ScoringConfig};
use locus_core::{InfrastructureGrade, Tier};

const NOT_RECOMMENDED: &str = "Not Recommended";
const HIGH_RISK: &str = "High Risk Investment";

/// Letter grade for a location score.
#[must_use]
pub fn infrastructure_grade(config: &RecommendationConfig, location_score: f64) -> InfrastructureGrade {
    config.grades.lookup(location_score)
}

/// Headline of the recommendation.
///
/// Low location scores override the viability band.
#[must_use]
pub fn headline(config: &ScoringConfig, location_score: f64, viability: u8) -> &'static str {
    if location_score < config.viability.very_poor_below {
        NOT_RECOMMENDED
    } else if location_score < config.viability.poor_below {
        HIGH_RISK
    } else {
        config
            .recommendation
            .bands
            .lookup(f64::from(viability))
            .headline()
    }
}

/// Full recommendation label.
///
/// # Examples
/// ```
/// use locus_core::{ScoringConfig, Tier};
/// use locus_scorer::recommendation::recommendation;
///
/// let config = ScoringConfig::default();
/// assert_eq!(
///     recommendation(&config, 4.3, 92, Tier::Metro),
///     "Outstanding Investment Opportunity - Metro (Low Risk), Infrastructure Grade A",
/// );
/// ```
#[must_use]
pub fn recommendation(
    config: &ScoringConfig,
    location_score: f64,
    viability: u8,
    tier: Tier,
) -> String {
    format!(
        "{} - {} ({}), Infrastructure Grade {}",
        headline(config, location_score, viability),
        tier.area_category(),
        tier.risk(),
        infrastructure_grade(&config.recommendation, location_score),
    )
}
