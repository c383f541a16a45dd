//! Places paired with their usable distance and normalised match text.

use locus_core::{DistanceMap, MatchText, Place};

/// A place with a finite, non-negative distance from the origin.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedPlace<'a> {
    pub(crate) place: &'a Place,
    pub(crate) km: f64,
    pub(crate) text: MatchText,
}

impl ResolvedPlace<'_> {
    pub(crate) fn types(&self) -> &[String] {
        &self.place.types
    }
}

/// Pair every place with its distance, dropping places the distance map
/// does not cover or reports an unusable reading for.
pub(crate) fn resolve<'a>(places: &'a [Place], distances: &DistanceMap) -> Vec<ResolvedPlace<'a>> {
    places
        .iter()
        .filter_map(|place| {
            let km = distances.get(&place.id)?.distance_km()?;
            Some(ResolvedPlace {
                place,
                km,
                text: MatchText::new([place.name.as_str(), place.vicinity.as_str()]),
            })
        })
        .collect()
}
