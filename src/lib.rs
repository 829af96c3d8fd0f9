//! Facade crate for the happyspot recommendation engine.
//!
//! This crate re-exports the core domain types and exposes the happiness
//! scorer and the data-loading collaborator behind feature flags.

#![forbid(unsafe_code)]

pub use happyspot_core::{
    ARRIVAL_RADIUS_METRES, Category, Dataset, HappinessColor, Mood, MoodParseError, ScoreRequest,
    ScoredDataset, ScoredSpot, Spot, SpotScorer, haversine_km, haversine_metres,
    is_within_arrival_radius,
};

#[cfg(feature = "scorer")]
pub use happyspot_scorer::{
    HappinessScorer, RecommendRequest, Recommendation, Recommendations, Recommender, ScorerConfig,
    SurveyError, filter_by_mood, resolve_survey_mood, select_recommendations,
};

#[cfg(feature = "data")]
pub use happyspot_data::{
    CacheError, DirectoryFeedSource, FeedError, FeedSource, LoadedDataset, load_or_assemble,
    read_cache, write_cache,
};
