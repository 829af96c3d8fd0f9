//! Test helpers for staging datasets and feed snapshots on disk.

use camino::{Utf8Path, Utf8PathBuf};
use happyspot_core::test_support::mixed_dataset;
use tempfile::TempDir;

/// A temporary workspace with a UTF-8 root path.
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

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Write the mixed test dataset as a spot cache and return its path.
    pub(super) fn write_dataset(&self) -> Utf8PathBuf {
        let path = self.root.join("spots_cache.json");
        happyspot_data::write_cache(&path, &mixed_dataset()).expect("write dataset");
        path
    }

    /// Write one snapshot per feed under `feeds/` and return the directory.
    pub(super) fn write_snapshots(&self) -> Utf8PathBuf {
        let feeds = self.root.join("feeds");
        for (name, payload) in SNAPSHOTS {
            happyspot_fs::write_utf8(&feeds.join(name), payload).expect("write snapshot");
        }
        feeds
    }
}

const SNAPSHOTS: [(&str, &str); 3] = [
    ("art_events.json", r#"["臺北雙年展"]"#),
    (
        "air.json",
        r#"{"result": {"results": [{"name": "中山", "lat": "25.06", "lon": "121.52", "value": "18"}]}}"#,
    ),
    (
        "parks.json",
        r#"[
            {"pm_name": "大安森林公園", "pm_Latitude": "25.03", "pm_Longitude": "121.53"},
            {"pm_name": "青年公園", "pm_Latitude": 25.02, "pm_Longitude": 121.50}
        ]"#,
    ),
];
