//! Feed payload sources.
#![forbid(unsafe_code)]

use std::collections::HashMap;

use camino::{Utf8Path, Utf8PathBuf};
use happyspot_core::Category;
use happyspot_fs::Dir;

use crate::FeedError;

/// Source of raw feed payloads, one per category.
///
/// Implementations return the payload text untouched; parsing happens in
/// [`FeedDescriptor::parse`](crate::FeedDescriptor::parse) and
/// [`parse_art_titles`](crate::parse_art_titles).
pub trait FeedSource {
    /// Fetch the raw payload for `category`.
    ///
    /// # Errors
    /// Returns [`FeedError`] when the payload is unavailable.
    fn fetch(&self, category: &Category) -> Result<String, FeedError>;
}

/// Feed snapshots stored as `<category>.json` files in one directory.
#[derive(Debug)]
pub struct DirectoryFeedSource {
    root: Utf8PathBuf,
    dir: Dir,
}

impl DirectoryFeedSource {
    /// Open `root` as a snapshot directory.
    ///
    /// # Errors
    /// Returns the I/O error raised while opening the directory.
    pub fn open(root: &Utf8Path) -> std::io::Result<Self> {
        let dir = happyspot_fs::open_dir(root)?;
        Ok(Self {
            root: root.to_path_buf(),
            dir,
        })
    }

    /// Directory the snapshots are read from.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// File name of the snapshot for `category`.
    #[must_use]
    pub fn file_name(category: &Category) -> String {
        format!("{}.json", category.as_str())
    }
}

impl FeedSource for DirectoryFeedSource {
    fn fetch(&self, category: &Category) -> Result<String, FeedError> {
        let name = Self::file_name(category);
        self.dir
            .read_to_string(&name)
            .map_err(|source| FeedError::Read {
                category: category.clone(),
                path: self.root.join(&name),
                source,
            })
    }
}

/// In-memory payloads keyed by category.
#[derive(Debug, Clone, Default)]
pub struct MemoryFeedSource {
    payloads: HashMap<Category, String>,
}

impl MemoryFeedSource {
    /// Create an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the payload for `category`.
    #[must_use]
    pub fn with_payload(mut self, category: Category, payload: impl Into<String>) -> Self {
        self.payloads.insert(category, payload.into());
        self
    }
}

impl FeedSource for MemoryFeedSource {
    fn fetch(&self, category: &Category) -> Result<String, FeedError> {
        self.payloads
            .get(category)
            .cloned()
            .ok_or_else(|| FeedError::Read {
                category: category.clone(),
                path: Utf8PathBuf::from(format!("memory://{}", category.as_str())),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
    }
}
