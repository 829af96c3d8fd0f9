//! Happiness scoring for happyspot spots.
//!
//! The crate turns an in-memory [`Dataset`](happyspot_core::Dataset) into
//! mood-aware recommendations:
//! - **Scoring** normalises values within each category, resolves mood weights
//!   (optionally blended with a survey mood), combines them with fixed base
//!   contributions, and ranks the rows into unique integer happiness scores.
//!   [`HappinessScorer`] implements the
//!   [`SpotScorer`](happyspot_core::SpotScorer) seam.
//! - **Presentation** narrows the scored table to the categories of a mood,
//!   then selects either the requested names or the top-N rows and computes a
//!   map centre. [`Recommender`] chains these steps.
//! - **Survey resolution** maps four questionnaire answers onto a mood.
//!
//! # Examples
//!
//! ```
//! use happyspot_core::{Category, Dataset, Mood, Spot};
//! use happyspot_scorer::{HappinessScorer, RecommendRequest, Recommender};
//!
//! let dataset = Dataset::from_spots([
//!     Spot::from_lat_lon("Daan Park", Category::Parks, 25.03, 121.53, 1.0),
//!     Spot::from_lat_lon("Wanhua", Category::Air, 25.04, 121.50, 18.0),
//! ]);
//! let recommender = Recommender::new(dataset, HappinessScorer::default());
//! let result = recommender.recommend(&RecommendRequest::new(Mood::Relax));
//! assert_eq!(result.recommendations.len(), 2);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod config;
mod error;
mod filter;
mod happiness;
mod normalise;
mod recommender;
mod select;
mod survey;
mod weights;

pub use config::{DEFAULT_DISTANCE_DECAY_KM, DEFAULT_LIMIT, ScorerConfig};
pub use error::SurveyError;
pub use filter::{filter_by_mood, mood_categories};
pub use happiness::{
    FLAT_MAIN_NORM, HappinessScorer, TOP_HAPPINESS, distance_score, main_score,
    rescale_to_percent, unique_happiness,
};
pub use normalise::{CategoryStatistics, CategoryStats, Normalised};
pub use recommender::{RecommendRequest, Recommendations, Recommender};
pub use select::{DEFAULT_CENTRE, MapCentre, Recommendation, map_centre, select_recommendations};
pub use survey::{
    HIGH_STRESS, MEDIUM_STRESS, QUIET_PREFERENCE, SOLITARY_REFLECTION, STATIC_ACTIVITY,
    SURVEY_QUESTIONS, SurveyAnswers, SurveyOutcome, resolve_survey_mood,
};
pub use weights::{
    CategoryWeights, SURVEY_BLEND, UNKNOWN_CATEGORY_WEIGHT, base_contribution, mood_weight,
};
