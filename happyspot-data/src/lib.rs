//! Data loading for the happyspot engine.
//!
//! Responsibilities:
//! - Parse open-data feed snapshots into [`Spot`](happyspot_core::Spot) rows,
//!   coercing numeric strings and dropping rows without coordinates.
//! - Place coordinate-less art events around the Taipei Fine Arts Museum.
//! - Assemble every feed into one [`Dataset`](happyspot_core::Dataset),
//!   skipping feeds that fail.
//! - Read and write the JSON spot cache.
//!
//! Boundaries:
//! - No HTTP: payloads come from a [`FeedSource`], typically a directory of
//!   snapshots.
//! - No scoring rules (those live in `happyspot-scorer`).
//!
//! Invariants:
//! - Assembly never fails; every error is logged and the feed skipped.
//! - No global mutable state; art event jitter is driven by an explicit seed.

#![forbid(unsafe_code)]

mod art;
mod assemble;
mod cache;
mod error;
mod feed;
mod source;

pub use art::{
    ART_EVENT_VALUE, ART_JITTER_DEGREES, MUSEUM_LAT, MUSEUM_LON, parse_art_titles,
    place_art_events,
};
pub use assemble::{Assembly, DEFAULT_ART_SEED, assemble_dataset, load_feed};
pub use cache::{DatasetOrigin, LoadedDataset, load_or_assemble, read_cache, write_cache};
pub use error::{CacheError, FeedError};
pub use feed::{Envelope, FeedDescriptor, UNNAMED_SPOT, ValueSource, coerce_f64};
pub use source::{DirectoryFeedSource, FeedSource, MemoryFeedSource};
