//! Core domain types for the happyspot recommendation engine.
//!
//! The crate describes spots gathered from open-data feeds, the moods that
//! steer recommendations, and the [`SpotScorer`] seam that scoring engines
//! implement. Everything here is plain data plus pure functions; no type
//! holds interior mutability.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod category;
pub mod color;
pub mod dataset;
pub mod distance;
pub mod mood;
pub mod scorer;
pub mod spot;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use category::Category;
pub use color::HappinessColor;
pub use dataset::Dataset;
pub use distance::{
    ARRIVAL_RADIUS_METRES, EARTH_RADIUS_KM, haversine_km, haversine_metres,
    is_within_arrival_radius,
};
pub use mood::{Mood, MoodParseError};
pub use scorer::{ScoreRequest, ScoredDataset, ScoredSpot, SpotScorer};
pub use spot::Spot;
