//! Test helpers for writing snapshot and configuration files.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Snapshot with every section recorded.
pub(super) const COMPLETE_SNAPSHOT: &str = r#"{
    "origin": {"x": 77.5946, "y": 12.9716},
    "address": "Indiranagar, Bengaluru",
    "places": [
        {
            "id": "m1",
            "name": "Indiranagar Metro Station",
            "types": ["subway_station"],
            "rating": 4.3,
            "location": {"x": 77.6408, "y": 12.9784}
        },
        {
            "id": "h1",
            "name": "Apollo Hospital",
            "types": ["hospital"],
            "rating": 4.6,
            "location": {"x": 77.5990, "y": 12.9730}
        },
        {
            "id": "s1",
            "name": "Delhi Public School",
            "types": ["school"],
            "rating": 4.5,
            "location": {"x": 77.5900, "y": 12.9700}
        }
    ],
    "distances": {
        "m1": {"distanceMeters": 800.0, "durationSeconds": 180.0},
        "h1": {"distanceMeters": 600.0, "durationSeconds": 150.0},
        "s1": {"distanceMeters": 700.0, "durationSeconds": 170.0}
    },
    "intelligence": {
        "locationType": "metropolitan",
        "developmentStage": "developed",
        "investmentPotential": 85.0,
        "areaClassification": "Metro city",
        "priorityScore": 88.0,
        "safetyScore": 7.0
    }
}"#;

/// Snapshot recorded while the distance and intelligence providers failed.
pub(super) const PARTIAL_SNAPSHOT: &str = r#"{
    "origin": {"x": 77.5946, "y": 12.9716},
    "address": "Indiranagar, Bengaluru",
    "places": [
        {
            "id": "h1",
            "name": "Apollo Hospital",
            "types": ["hospital"],
            "rating": 4.6,
            "location": {"x": 77.5990, "y": 12.9730}
        }
    ]
}"#;

/// Write `contents` to `path`, panicking on failure.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write test file");
}

/// Temporary workspace with UTF-8 paths.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}
