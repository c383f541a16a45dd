//! Macro-connectivity index.

use std::collections::{BTreeMap, BTreeSet};

use locus_core::config::ConnectivityConfig;
use locus_core::sanitise;
use locus_core::{ConnectivityFeature, DistanceMap, Place};

use crate::resolved::{ResolvedPlace, resolve};

/// Distance-decayed feature value accumulated per connectivity feature.
pub type FeatureHits = BTreeMap<ConnectivityFeature, f64>;

/// Accumulate feature hits for places within the scan radius.
///
/// A place counts at most once per feature. Each hit is the feature value
/// scaled by `max(min_multiplier, 1 - km / decay_span_km)`.
#[expect(clippy::float_arithmetic, reason = "distance-decayed feature values")]
#[must_use]
pub fn feature_hits(
    config: &ConnectivityConfig,
    places: &[Place],
    distances: &DistanceMap,
) -> FeatureHits {
    let mut hits = FeatureHits::new();
    for resolved in resolve(places, distances)
        .iter()
        .filter(|resolved| resolved.km <= config.scan_radius_km)
    {
        let multiplier = (1.0 - resolved.km / config.decay_span_km).max(config.min_multiplier);
        for (feature, value) in place_features(config, resolved) {
            *hits.entry(feature).or_insert(0.0) += value * multiplier;
        }
    }
    hits
}

fn place_features(
    config: &ConnectivityConfig,
    resolved: &ResolvedPlace<'_>,
) -> Vec<(ConnectivityFeature, f64)> {
    let international = resolved
        .text
        .contains_phrase(&config.international_keyword);
    let mut seen = BTreeSet::new();
    config
        .feature_rules
        .matches(&resolved.text, resolved.types())
        .filter(|rule| seen.insert(rule.tag))
        .map(|rule| {
            let value = if rule.tag == ConnectivityFeature::Airport && international {
                config.international_airport_value
            } else {
                rule.weight
            };
            (rule.tag, value)
        })
        .collect()
}

/// Combine feature hits into an index clamped to `0..=max_index`.
#[expect(clippy::float_arithmetic, reason = "weighted feature sum")]
#[must_use]
pub fn combine(config: &ConnectivityConfig, hits: &FeatureHits) -> f64 {
    let weighted: f64 = hits
        .iter()
        .map(|(feature, value)| config.weights.weight(*feature) * value)
        .sum();
    sanitise::bounded(weighted, 0.0, config.max_index)
}

/// Connectivity index of an origin in `0..=max_index`.
///
/// # Examples
/// ```
/// use locus_core::config::ConnectivityConfig;
/// use locus_core::{DistanceDuration, DistanceMap, Place};
/// use locus_scorer::connectivity::connectivity_index;
///
/// let places = vec![Place::new("a", "Kempegowda International Airport").with_types(["airport"])];
/// let mut distances = DistanceMap::new();
/// distances.insert("a".into(), DistanceDuration::new(5_000.0, 600.0));
///
/// let index = connectivity_index(&ConnectivityConfig::default(), &places, &distances);
/// assert!((index - 12.5).abs() < 1e-9);
/// ```
#[must_use]
pub fn connectivity_index(
    config: &ConnectivityConfig,
    places: &[Place],
    distances: &DistanceMap,
) -> f64 {
    combine(config, &feature_hits(config, places, distances))
}
