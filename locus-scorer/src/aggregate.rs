//! Infrastructure aggregation.
//!
//! Every place within the scoring radius contributes a base score of
//! `rating multiplier * distance multiplier` to each category it belongs to,
//! amplified by category-specific subtype and quality bonuses. Category
//! membership is not exclusive.

use std::collections::BTreeSet;

use locus_core::config::{AggregationConfig, Amplifiers, DistanceDecay};
use locus_core::{
    Category, CategoryTotals, DistanceMap, EconomicSignals, MatchText, Place, QualityTier,
    Signal, Subtype,
};

use crate::resolved::{ResolvedPlace, resolve};

/// Accumulated infrastructure evidence for one origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InfrastructureSummary {
    /// Per-category accumulators.
    pub categories: CategoryTotals,
    /// Economic signal counts among scored places.
    pub signals: EconomicSignals,
    /// Scored places with at least one category.
    pub amenity_count: u32,
    /// Every supplied place, scored or not.
    pub place_count: u32,
}

/// Multiplier for a place `km` kilometres away.
///
/// Bands apply first; past the last band the multiplier falls linearly and
/// never drops below the configured floor.
///
/// # Examples
/// ```
/// use locus_core::config::DistanceDecay;
/// use locus_scorer::aggregate::distance_multiplier;
///
/// let decay = DistanceDecay::default();
/// assert_eq!(distance_multiplier(&decay, 0.3), 2.0);
/// assert_eq!(distance_multiplier(&decay, 20.0), 0.05);
/// ```
#[expect(clippy::float_arithmetic, reason = "linear decay tail")]
#[must_use]
pub fn distance_multiplier(decay: &DistanceDecay, km: f64) -> f64 {
    if let Some(band) = decay.bands.iter().find(|band| km <= band.max_km) {
        return band.multiplier;
    }
    let tail = 1.0 - (km - decay.tail_origin_km) / decay.tail_span_km;
    tail.max(decay.floor)
}

/// Multiplier derived from a place rating.
#[expect(clippy::float_arithmetic, reason = "rating normalisation")]
#[must_use]
pub fn rating_multiplier(config: &AggregationConfig, place: &Place) -> f64 {
    place.sanitised_rating().map_or(config.unrated_multiplier, |rating| {
        (rating / locus_core::place::MAX_RATING).min(config.rating_ceiling)
    })
}

/// Quality tier from rating thresholds and name keywords.
#[must_use]
pub fn quality_tier(config: &AggregationConfig, place: &Place, text: &MatchText) -> QualityTier {
    let rating = place.sanitised_rating().unwrap_or(0.0);
    let keyword = config
        .quality_rules
        .first_match(text, &place.types)
        .map(|rule| rule.tag);
    if rating >= config.premium_rating || keyword == Some(QualityTier::Premium) {
        QualityTier::Premium
    } else if rating >= config.good_rating || keyword == Some(QualityTier::Good) {
        QualityTier::Good
    } else {
        QualityTier::Standard
    }
}

/// Categories a place belongs to, in declaration order.
#[must_use]
pub fn categories_of(config: &AggregationConfig, place: &Place, text: &MatchText) -> Vec<Category> {
    let mut categories: Vec<Category> = config
        .category_rules
        .matches(text, &place.types)
        .map(|rule| rule.tag)
        .collect();
    let rated_lodging = place.has_type("lodging") && place.sanitised_rating().is_some();
    if config.rated_lodging_is_commercial && rated_lodging {
        categories.push(Category::Commercial);
    }
    categories.sort_unstable();
    categories.dedup();
    categories
}

/// Aggregate infrastructure evidence around an origin.
///
/// Places without a usable distance, or beyond the scoring radius, are
/// skipped. `place_count` still counts every supplied place.
#[must_use]
pub fn aggregate(
    config: &AggregationConfig,
    places: &[Place],
    distances: &DistanceMap,
) -> InfrastructureSummary {
    let mut summary = InfrastructureSummary {
        place_count: u32::try_from(places.len()).unwrap_or(u32::MAX),
        ..InfrastructureSummary::default()
    };
    for resolved in resolve(places, distances)
        .iter()
        .filter(|resolved| resolved.km <= config.scoring_radius_km)
    {
        record_signals(config, resolved, &mut summary.signals);
        if record_place(config, resolved, &mut summary.categories) {
            summary.amenity_count = summary.amenity_count.saturating_add(1);
        }
    }
    summary
}

#[expect(clippy::float_arithmetic, reason = "weighted place scores")]
fn record_place(
    config: &AggregationConfig,
    resolved: &ResolvedPlace<'_>,
    totals: &mut CategoryTotals,
) -> bool {
    let categories = categories_of(config, resolved.place, &resolved.text);
    if categories.is_empty() {
        return false;
    }
    let base = rating_multiplier(config, resolved.place)
        * distance_multiplier(&config.decay, resolved.km);
    let quality = quality_tier(config, resolved.place, &resolved.text);
    let subtypes: BTreeSet<Subtype> = config
        .subtype_rules
        .matches(&resolved.text, resolved.types())
        .map(|rule| rule.tag)
        .collect();
    let rating = resolved.place.sanitised_rating();
    let is_close = resolved.km <= config.close_radius_km;
    let is_premium = quality == QualityTier::Premium;

    for category in categories {
        let boost = amplifier(&config.amplifiers, category, quality, &subtypes, rating);
        let hub = match category {
            Category::Education => subtypes.contains(&Subtype::University),
            Category::Transport => {
                subtypes.contains(&Subtype::Metro) || subtypes.contains(&Subtype::Rail)
            }
            _ => false,
        };
        totals
            .get_mut(category)
            .record(base * boost, is_close, is_premium || hub);
    }
    totals.essential.record(base, is_close, is_premium);
    true
}

/// Category amplifier for a place with the given quality and subtypes.
#[must_use]
pub fn amplifier(
    amplifiers: &Amplifiers,
    category: Category,
    quality: QualityTier,
    subtypes: &BTreeSet<Subtype>,
    rating: Option<f64>,
) -> f64 {
    let premium = quality == QualityTier::Premium;
    let good = quality == QualityTier::Good;
    let has = |subtype| subtypes.contains(&subtype);
    match category {
        Category::Healthcare if premium => amplifiers.healthcare_premium,
        Category::Healthcare if good => amplifiers.healthcare_good,
        Category::Education if has(Subtype::University) => amplifiers.education_university,
        Category::Education if has(Subtype::College) => amplifiers.education_college,
        Category::Education if premium => amplifiers.education_premium_school,
        Category::Education if good => amplifiers.education_good,
        Category::Transport if has(Subtype::Metro) => amplifiers.transport_metro,
        Category::Transport if has(Subtype::Rail) => amplifiers.transport_rail,
        Category::Transport if has(Subtype::Bus) => amplifiers.transport_bus,
        Category::Commercial if has(Subtype::Financial) => amplifiers.commercial_financial,
        Category::Lifestyle if premium && has(Subtype::Lodging) => {
            amplifiers.lifestyle_premium_lodging
        }
        Category::Lifestyle if premium && has(Subtype::Spa) => amplifiers.lifestyle_premium_spa,
        Category::Lifestyle
            if has(Subtype::Mall)
                && rating.is_some_and(|value| value >= amplifiers.lifestyle_mall_min_rating) =>
        {
            amplifiers.lifestyle_rated_mall
        }
        Category::Lifestyle if premium => amplifiers.lifestyle_premium,
        Category::Lifestyle if good => amplifiers.lifestyle_good,
        Category::Safety => amplifiers.safety,
        Category::Environment => amplifiers.environment,
        _ => 1.0,
    }
}

fn record_signals(
    config: &AggregationConfig,
    resolved: &ResolvedPlace<'_>,
    signals: &mut EconomicSignals,
) {
    for rule in config
        .signal_rules
        .iter()
        .filter(|rule| rule.matches_text(&resolved.text))
    {
        let count = match rule.tag {
            Signal::TechHub => &mut signals.tech_hub,
            Signal::FinancialDistrict => &mut signals.financial_district,
            Signal::PremiumResidential => &mut signals.premium_residential,
        };
        *count = count.saturating_add(1);
    }
}
