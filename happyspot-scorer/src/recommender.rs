//! Request-time recommendation pipeline over a shared dataset.
#![forbid(unsafe_code)]

use happyspot_core::{Dataset, Mood, ScoreRequest, ScoredDataset, SpotScorer};
use log::debug;
use serde::Serialize;

use crate::{
    HappinessScorer, MapCentre, Recommendation, filter_by_mood, map_centre, select_recommendations,
};

/// Parameters of one recommendation call.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecommendRequest {
    /// Mood, survey mood and visitor position passed to the scorer.
    pub score: ScoreRequest,
    /// Explicit spot names to present, overriding the top-N selection.
    pub names: Vec<String>,
    /// Top-N cut-off; `None` uses the scorer configuration.
    pub limit: Option<usize>,
}

impl RecommendRequest {
    /// Request recommendations for `mood`.
    #[must_use]
    pub fn new(mood: Mood) -> Self {
        Self {
            score: ScoreRequest::new(mood),
            ..Self::default()
        }
    }

    /// Replace the scoring parameters.
    #[must_use]
    pub const fn with_score(mut self, score: ScoreRequest) -> Self {
        self.score = score;
        self
    }

    /// Present only the named spots.
    #[must_use]
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Override the top-N cut-off.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Result of a recommendation call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendations {
    /// Primary mood the selection was made for.
    pub mood: Mood,
    /// Centre of the presented spots.
    pub centre: MapCentre,
    /// Presented spots.
    pub recommendations: Vec<Recommendation>,
}

/// Context object pairing an immutable dataset with a scorer.
///
/// Each call scores a fresh derived table; the dataset is never modified, so
/// one recommender can serve any number of threads.
#[derive(Debug, Clone)]
pub struct Recommender<S = HappinessScorer> {
    dataset: Dataset,
    scorer: S,
    default_limit: usize,
}

impl Recommender<HappinessScorer> {
    /// Build a recommender using the happiness scorer.
    #[must_use]
    pub fn new(dataset: Dataset, scorer: HappinessScorer) -> Self {
        let default_limit = scorer.config().limit;
        Self {
            dataset,
            scorer,
            default_limit,
        }
    }
}

impl<S: SpotScorer> Recommender<S> {
    /// Build a recommender around any [`SpotScorer`].
    #[must_use]
    pub const fn with_scorer(dataset: Dataset, scorer: S, default_limit: usize) -> Self {
        Self {
            dataset,
            scorer,
            default_limit,
        }
    }

    /// Borrow the dataset.
    #[must_use]
    pub const fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Score the whole dataset and narrow it to the request's mood.
    #[must_use]
    pub fn scored_for_mood(&self, request: &ScoreRequest) -> ScoredDataset {
        let scored = self.scorer.score(self.dataset.spots(), request);
        filter_by_mood(scored, request.mood)
    }

    /// Run score, mood filter and selection for `request`.
    #[must_use]
    pub fn recommend(&self, request: &RecommendRequest) -> Recommendations {
        let filtered = self.scored_for_mood(&request.score);
        let limit = request.limit.unwrap_or(self.default_limit);
        let recommendations = select_recommendations(filtered, &request.names, limit);
        debug!(
            "recommending {} of {} spots for mood {}",
            recommendations.len(),
            self.dataset.len(),
            request.score.mood
        );
        Recommendations {
            mood: request.score.mood,
            centre: map_centre(&recommendations),
            recommendations,
        }
    }
}
