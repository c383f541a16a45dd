//! Recorded provider output replayed through the collaborator ports.
//!
//! A snapshot captures what the place search, distance and intelligence
//! providers returned for one origin. Replaying it makes an analysis
//! reproducible offline. Sections left out of the document behave like an
//! unavailable provider so the analyzer's fallbacks can be exercised.

use std::io::{self, BufReader};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use geo::Coord;
use locus_core::{
    DistanceMap, DistanceProvider, IntelligenceProvider, LocationIntelligence, LocationQuery,
    Place, PlaceSearchProvider, ProviderError,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const SNAPSHOT_PROVIDER: &str = "snapshot";

/// Recorded provider output for one origin.
///
/// # Examples
/// ```
/// use locus_data::Snapshot;
///
/// let snapshot = Snapshot::from_json(
///     r#"{"origin": {"x": 77.59, "y": 12.97}, "address": "MG Road, Bengaluru", "places": []}"#,
/// )?;
/// assert!(snapshot.distances.is_none());
/// assert_eq!(snapshot.query().address, "MG Road, Bengaluru");
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Analysed position (`x = longitude`, `y = latitude`).
    pub origin: Coord<f64>,
    /// Free-text address of the origin.
    #[serde(default)]
    pub address: String,
    /// Places returned by the search provider.
    #[serde(default)]
    pub places: Vec<Place>,
    /// Distances keyed by place id, absent when the lookup failed.
    #[serde(default)]
    pub distances: Option<DistanceMap>,
    /// Classification, absent when the provider failed.
    #[serde(default)]
    pub intelligence: Option<LocationIntelligence>,
}

/// Errors raised while loading a [`Snapshot`].
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot file could not be opened.
    #[error("failed to open snapshot at {path:?}: {source}")]
    Open {
        /// Path that was opened.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
    /// The snapshot file is not a valid snapshot document.
    #[error("failed to parse snapshot JSON at {path:?}: {source}")]
    Parse {
        /// Path that was parsed.
        path: Utf8PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

impl Snapshot {
    /// Parse a snapshot from a JSON string.
    ///
    /// # Errors
    /// Returns the JSON error when `json` is not a snapshot document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load a snapshot from disk.
    ///
    /// # Errors
    /// Returns [`SnapshotError::Open`] when the file cannot be opened and
    /// [`SnapshotError::Parse`] when it does not hold a snapshot document.
    pub fn load(path: &Utf8Path) -> Result<Self, SnapshotError> {
        let file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| {
            SnapshotError::Open {
                path: path.to_path_buf(),
                source,
            }
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| SnapshotError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Query describing the recorded origin.
    #[must_use]
    pub fn query(&self) -> LocationQuery {
        LocationQuery::new(self.origin, self.address.clone())
    }
}

/// Replays a [`Snapshot`] through every collaborator port.
#[derive(Debug, Clone)]
pub struct SnapshotProviders {
    snapshot: Snapshot,
}

impl SnapshotProviders {
    /// Wrap a snapshot.
    #[must_use]
    pub const fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    /// Borrow the wrapped snapshot.
    #[must_use]
    pub const fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

fn missing(section: &str) -> ProviderError {
    ProviderError::unavailable(SNAPSHOT_PROVIDER, format!("no {section} recorded"))
}

impl PlaceSearchProvider for SnapshotProviders {
    fn search_nearby(
        &self,
        _origin: Coord<f64>,
        _radius_meters: u32,
    ) -> Result<Vec<Place>, ProviderError> {
        Ok(self.snapshot.places.clone())
    }
}

impl DistanceProvider for SnapshotProviders {
    fn distances(
        &self,
        _origin: Coord<f64>,
        _places: &[Place],
    ) -> Result<DistanceMap, ProviderError> {
        self.snapshot
            .distances
            .clone()
            .ok_or_else(|| missing("distances"))
    }
}

impl IntelligenceProvider for SnapshotProviders {
    fn classify(&self, _query: &LocationQuery) -> Result<LocationIntelligence, ProviderError> {
        self.snapshot
            .intelligence
            .clone()
            .ok_or_else(|| missing("intelligence"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use locus_core::test_support::FIXTURE_ORIGIN;
    use locus_core::{DistanceDuration, LocationType};
    use rstest::{fixture, rstest};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const FULL: &str = r#"{
        "origin": {"x": 77.5946, "y": 12.9716},
        "address": "MG Road, Bengaluru",
        "places": [
            {"id": "h1", "name": "Apollo Hospital", "types": ["hospital"], "rating": 4.6}
        ],
        "distances": {"h1": {"distanceMeters": 900.0, "durationSeconds": 180.0}},
        "intelligence": {
            "locationType": "metropolitan",
            "developmentStage": "developed",
            "investmentPotential": 88.0,
            "areaClassification": "Metro city",
            "priorityScore": 90.0,
            "safetyScore": 7.0
        }
    }"#;

    #[fixture]
    fn full() -> Snapshot {
        Snapshot::from_json(FULL).expect("valid snapshot")
    }

    #[rstest]
    fn full_snapshot_answers_every_port(full: Snapshot) {
        let providers = SnapshotProviders::new(full);
        let places = providers
            .search_nearby(FIXTURE_ORIGIN, 5_000)
            .expect("places");
        assert_eq!(places.len(), 1);
        let distances = providers
            .distances(FIXTURE_ORIGIN, &places)
            .expect("distances");
        assert_eq!(
            distances.get("h1"),
            Some(&DistanceDuration::new(900.0, 180.0))
        );
        let intelligence = providers
            .classify(&providers.snapshot().query())
            .expect("intelligence");
        assert_eq!(intelligence.location_type, LocationType::Metropolitan);
    }

    #[rstest]
    fn absent_sections_are_unavailable() {
        let snapshot =
            Snapshot::from_json(r#"{"origin": {"x": 0.0, "y": 0.0}}"#).expect("minimal snapshot");
        let providers = SnapshotProviders::new(snapshot);
        let query = providers.snapshot().query();
        assert_eq!(providers.search_nearby(query.origin, 10), Ok(Vec::new()));
        let distance_error = providers
            .distances(query.origin, &[])
            .expect_err("distances should be missing");
        assert!(matches!(distance_error, ProviderError::Unavailable { .. }));
        let intelligence_error = providers
            .classify(&query)
            .expect_err("intelligence should be missing");
        assert_eq!(intelligence_error.provider(), SNAPSHOT_PROVIDER);
    }

    #[rstest]
    fn load_reads_from_disk(full: Snapshot) {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(FULL.as_bytes()).expect("write snapshot");
        let path = Utf8Path::from_path(file.path()).expect("utf-8 temp path");
        assert_eq!(Snapshot::load(path).expect("load snapshot"), full);
    }

    #[rstest]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = Utf8PathBuf::from_path_buf(dir.path().join("absent.json"))
            .expect("utf-8 temp path");
        let err = Snapshot::load(&path).expect_err("missing file should fail");
        assert!(matches!(err, SnapshotError::Open { .. }));
    }

    #[rstest]
    fn load_reports_malformed_json() {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(b"{\"origin\": 3}").expect("write snapshot");
        let path = Utf8Path::from_path(file.path()).expect("utf-8 temp path");
        let err = Snapshot::load(path).expect_err("malformed snapshot should fail");
        assert!(matches!(err, SnapshotError::Parse { .. }));
    }
}
