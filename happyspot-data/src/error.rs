//! Error types raised while loading feeds and the spot cache.
#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use happyspot_core::Category;
use thiserror::Error;

/// Errors raised while reading or parsing one open-data feed.
///
/// Assembly treats every variant as recoverable: the feed is skipped and
/// loading continues with the remaining feeds.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FeedError {
    /// No snapshot exists or it could not be read.
    #[error("failed to read {category} feed from {path}")]
    Read {
        /// Feed that was requested.
        category: Category,
        /// Snapshot location.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The payload was not valid JSON.
    #[error("{category} feed is not valid JSON")]
    Parse {
        /// Feed being parsed.
        category: Category,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The payload lacked the envelope holding its records.
    #[error("{category} feed has no `{envelope}` record list")]
    MissingEnvelope {
        /// Feed being parsed.
        category: Category,
        /// Dotted path of the expected envelope.
        envelope: &'static str,
    },
    /// The category has no feed descriptor.
    #[error("no feed is known for category {category}")]
    UnknownFeed {
        /// Requested category.
        category: Category,
    },
}

/// Errors raised while reading or writing the JSON spot cache.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CacheError {
    /// Reading the cache file failed.
    #[error("failed to read spot cache {path}")]
    Read {
        /// Cache location.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The cache file did not hold a list of spot records.
    #[error("spot cache {path} is malformed")]
    Parse {
        /// Cache location.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Serialising the dataset failed.
    #[error("failed to serialise spot cache")]
    Serialise {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Writing the cache file failed.
    #[error("failed to write spot cache {path}")]
    Write {
        /// Cache location.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
}
