//! JSON spot cache.
//!
//! The cache is a pretty-printed JSON array of `{name, category, lat, lon,
//! value}` records. Non-ASCII names are written verbatim.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use happyspot_core::Dataset;
use log::{debug, info, warn};

use crate::{CacheError, FeedSource, assemble_dataset};

/// Where a loaded dataset came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetOrigin {
    /// Read from an existing cache file.
    Cache,
    /// Assembled from the feeds because no usable cache existed.
    Assembled,
}

/// A dataset together with its origin.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDataset {
    /// The spot table.
    pub dataset: Dataset,
    /// Where the table came from.
    pub origin: DatasetOrigin,
}

/// Read a cached dataset.
///
/// # Errors
/// Returns [`CacheError::Read`] when the file cannot be read and
/// [`CacheError::Parse`] when it is not a list of spot records.
pub fn read_cache(path: &Utf8Path) -> Result<Dataset, CacheError> {
    let text = happyspot_fs::read_utf8(path).map_err(|source| CacheError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CacheError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `dataset` to `path`, creating parent directories as needed.
///
/// # Errors
/// Returns [`CacheError::Serialise`] or [`CacheError::Write`].
pub fn write_cache(path: &Utf8Path, dataset: &Dataset) -> Result<(), CacheError> {
    let text =
        serde_json::to_string_pretty(dataset).map_err(|source| CacheError::Serialise { source })?;
    happyspot_fs::write_utf8(path, &text).map_err(|source| CacheError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the cached dataset, assembling and caching it when necessary.
///
/// An existing cache that cannot be read or parsed is logged and replaced.
/// A freshly assembled dataset is written back unless it is empty; a failed
/// write is logged and the assembled dataset is still returned.
pub fn load_or_assemble<S>(cache_path: &Utf8Path, source: &S, seed: u64) -> LoadedDataset
where
    S: FeedSource + ?Sized,
{
    if matches!(happyspot_fs::file_is_file(cache_path), Ok(true)) {
        match read_cache(cache_path) {
            Ok(dataset) => {
                debug!("loaded {} spots from cache {cache_path}", dataset.len());
                return LoadedDataset {
                    dataset,
                    origin: DatasetOrigin::Cache,
                };
            }
            Err(err) => warn!("ignoring unusable cache: {err}"),
        }
    }

    let assembly = assemble_dataset(source, seed);
    if assembly.dataset.is_empty() {
        warn!("assembled dataset is empty; not caching it");
    } else if let Err(err) = write_cache(cache_path, &assembly.dataset) {
        warn!("could not write cache: {err}");
    } else {
        info!(
            "cached {} spots at {cache_path}",
            assembly.dataset.len()
        );
    }
    LoadedDataset {
        dataset: assembly.dataset,
        origin: DatasetOrigin::Assembled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use happyspot_core::test_support::mixed_dataset;
    use happyspot_core::{Category, Spot};
    use rstest::rstest;
    use tempfile::TempDir;

    use crate::MemoryFeedSource;

    fn cache_path(temp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(temp.path().join("cache/spots_cache.json")).expect("utf8 path")
    }

    fn parks_source() -> MemoryFeedSource {
        MemoryFeedSource::new().with_payload(
            Category::Parks,
            r#"[{"pm_name": "青年公園", "pm_Latitude": 25.02, "pm_Longitude": 121.50}]"#,
        )
    }

    #[rstest]
    fn cache_preserves_rows() {
        let temp = TempDir::new().expect("tempdir");
        let path = cache_path(&temp);
        let dataset = mixed_dataset();

        write_cache(&path, &dataset).expect("write cache");

        assert_eq!(read_cache(&path).expect("read cache"), dataset);
    }

    #[rstest]
    fn cache_writes_records_with_verbatim_names() {
        let temp = TempDir::new().expect("tempdir");
        let path = cache_path(&temp);
        let dataset = Dataset::from_spots([Spot::from_lat_lon(
            "大安森林公園",
            Category::Parks,
            25.03,
            121.53,
            1.0,
        )]);

        write_cache(&path, &dataset).expect("write cache");

        let text = std::fs::read_to_string(path.as_std_path()).expect("read raw cache");
        assert!(text.contains("大安森林公園"));
        let records: serde_json::Value = serde_json::from_str(&text).expect("json");
        assert_eq!(
            records,
            serde_json::json!([{
                "name": "大安森林公園",
                "category": "parks",
                "lat": 25.03,
                "lon": 121.53,
                "value": 1.0
            }])
        );
    }

    #[rstest]
    fn assembles_and_caches_when_absent() {
        let temp = TempDir::new().expect("tempdir");
        let path = cache_path(&temp);

        let loaded = load_or_assemble(&path, &parks_source(), 1);

        assert_eq!(loaded.origin, DatasetOrigin::Assembled);
        assert_eq!(loaded.dataset.len(), 1);
        assert_eq!(read_cache(&path).expect("cache written"), loaded.dataset);
    }

    #[rstest]
    fn prefers_an_existing_cache() {
        let temp = TempDir::new().expect("tempdir");
        let path = cache_path(&temp);
        write_cache(&path, &mixed_dataset()).expect("seed cache");

        let loaded = load_or_assemble(&path, &parks_source(), 1);

        assert_eq!(loaded.origin, DatasetOrigin::Cache);
        assert_eq!(loaded.dataset, mixed_dataset());
    }

    #[rstest]
    fn replaces_a_corrupt_cache() {
        let temp = TempDir::new().expect("tempdir");
        let path = cache_path(&temp);
        happyspot_fs::write_utf8(&path, "{ broken").expect("seed corrupt cache");

        let loaded = load_or_assemble(&path, &parks_source(), 1);

        assert_eq!(loaded.origin, DatasetOrigin::Assembled);
        assert_eq!(read_cache(&path).expect("cache repaired").len(), 1);
    }

    #[rstest]
    fn empty_assembly_is_not_cached() {
        let temp = TempDir::new().expect("tempdir");
        let path = cache_path(&temp);

        let loaded = load_or_assemble(&path, &MemoryFeedSource::new(), 1);

        assert!(loaded.dataset.is_empty());
        assert!(!happyspot_fs::file_is_file(&path).expect("stat cache"));
    }

    #[rstest]
    fn malformed_cache_reports_its_path() {
        let temp = TempDir::new().expect("tempdir");
        let path = cache_path(&temp);
        happyspot_fs::write_utf8(&path, r#"{"name": "x"}"#).expect("seed cache");

        let err = read_cache(&path).expect_err("object is not a record list");
        assert!(matches!(err, CacheError::Parse { path: ref p, .. } if *p == path));
    }
}
