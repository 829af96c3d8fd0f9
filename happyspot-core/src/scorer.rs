//! Score a spot table for a visitor's mood.
//!
//! The [`SpotScorer`] trait turns the shared spot rows into a freshly derived
//! [`ScoredDataset`] for one [`ScoreRequest`]. Scoring operates over the
//! whole table at once because normalisation and ranking depend on every row.

use geo::Coord;

use crate::{HappinessColor, Mood, Spot};

/// Parameters for a scoring call.
///
/// # Examples
/// ```rust
/// use happyspot_core::{Mood, ScoreRequest};
///
/// let request = ScoreRequest::new(Mood::Relax)
///     .with_survey_mood(Some(Mood::Energize))
///     .with_user_lat_lon(25.03, 121.56);
/// assert_eq!(request.survey_mood, Some(Mood::Energize));
/// assert_eq!(request.user_location.map(|c| c.y), Some(25.03));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreRequest {
    /// Primary mood selecting the weight table.
    pub mood: Mood,
    /// Optional survey-derived mood blended into the primary weights.
    pub survey_mood: Option<Mood>,
    /// Optional visitor position used for informational distance scores.
    pub user_location: Option<Coord<f64>>,
}

impl ScoreRequest {
    /// Build a request for `mood` without survey or location.
    pub const fn new(mood: Mood) -> Self {
        Self {
            mood,
            survey_mood: None,
            user_location: None,
        }
    }

    /// Attach a survey mood.
    #[must_use]
    pub const fn with_survey_mood(mut self, survey_mood: Option<Mood>) -> Self {
        self.survey_mood = survey_mood;
        self
    }

    /// Attach the visitor's position.
    #[must_use]
    pub const fn with_user_location(mut self, location: Option<Coord<f64>>) -> Self {
        self.user_location = location;
        self
    }

    /// Attach the visitor's position from latitude and longitude.
    #[must_use]
    pub const fn with_user_lat_lon(self, lat: f64, lon: f64) -> Self {
        self.with_user_location(Some(Coord { x: lon, y: lat }))
    }
}

/// A spot together with every field derived while scoring it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScoredSpot {
    /// The source row.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub spot: Spot,
    /// Category-local min-max normalised value in `0.0..=1.0`.
    pub value_norm: f64,
    /// Median raw value of the spot's category.
    pub base: f64,
    /// Effective mood weight of the spot's category.
    pub weight: f64,
    /// Fixed share of the composite score for the category.
    pub base_contribution: f64,
    /// Mood adjustment applied to the contribution; equal to `weight`.
    pub mood_adjustment: f64,
    /// Raw composite score used for ranking.
    pub main_score: f64,
    /// `main_score` rescaled across the dataset into `0.0..=100.0`.
    pub main_norm: f64,
    /// Distance from the visitor in kilometres, when a position was given.
    pub distance_km: Option<f64>,
    /// Informational proximity score; never used for ranking.
    pub dist_score: f64,
    /// Dense, unique integer score: `101 - rank`.
    pub happiness: i64,
    /// Colour tier derived from `happiness`.
    pub happiness_color: HappinessColor,
}

impl ScoredSpot {
    /// Column names of a scored row, in output order.
    pub const COLUMNS: [&'static str; 16] = [
        "name",
        "category",
        "lat",
        "lon",
        "value",
        "value_norm",
        "base",
        "weight",
        "base_contribution",
        "mood_adjustment",
        "main_score",
        "main_norm",
        "distance_km",
        "dist_score",
        "happiness",
        "happiness_color",
    ];
}

/// The derived table produced by one scoring call.
///
/// Rows keep the order of the source dataset.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct ScoredDataset {
    rows: Vec<ScoredSpot>,
}

impl ScoredDataset {
    /// Wrap already-scored rows.
    pub const fn new(rows: Vec<ScoredSpot>) -> Self {
        Self { rows }
    }

    /// Column names every scored table carries, including empty ones.
    pub const fn columns(&self) -> &'static [&'static str] {
        &ScoredSpot::COLUMNS
    }

    /// Borrow the rows.
    pub fn rows(&self) -> &[ScoredSpot] {
        &self.rows
    }

    /// Iterate over the rows in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ScoredSpot> {
        self.rows.iter()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Report whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Keep only rows matching `keep`.
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&ScoredSpot) -> bool,
    {
        self.rows.retain(keep);
    }

    /// Consume the table and return its rows.
    pub fn into_rows(self) -> Vec<ScoredSpot> {
        self.rows
    }
}

impl<'a> IntoIterator for &'a ScoredDataset {
    type Item = &'a ScoredSpot;
    type IntoIter = std::slice::Iter<'a, ScoredSpot>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for ScoredDataset {
    type Item = ScoredSpot;
    type IntoIter = std::vec::IntoIter<ScoredSpot>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

/// Produce a scored table from spot rows.
///
/// Implementations must be pure: the same rows in the same order with the
/// same request yield an identical table, and the input is never mutated.
/// They must be `Send + Sync` so one scorer can serve concurrent callers.
/// The method is infallible; an empty input yields an empty table.
///
/// # Examples
///
/// ```rust
/// use happyspot_core::{ScoreRequest, ScoredDataset, Spot, SpotScorer};
///
/// struct NullScorer;
///
/// impl SpotScorer for NullScorer {
///     fn score(&self, _spots: &[Spot], _request: &ScoreRequest) -> ScoredDataset {
///         ScoredDataset::default()
///     }
/// }
///
/// let table = NullScorer.score(&[], &ScoreRequest::default());
/// assert!(table.is_empty());
/// assert_eq!(table.columns().len(), 16);
/// ```
pub trait SpotScorer: Send + Sync {
    /// Score `spots` according to `request`.
    fn score(&self, spots: &[Spot], request: &ScoreRequest) -> ScoredDataset;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn builder_sets_every_field() {
        let request = ScoreRequest::new(Mood::CultureExplore)
            .with_survey_mood(Some(Mood::Relax))
            .with_user_lat_lon(25.0, 121.0);
        assert_eq!(request.mood, Mood::CultureExplore);
        assert_eq!(request.survey_mood, Some(Mood::Relax));
        assert_eq!(request.user_location, Some(Coord { x: 121.0, y: 25.0 }));
    }

    #[rstest]
    fn empty_table_still_reports_schema() {
        let table = ScoredDataset::default();
        assert!(table.is_empty());
        assert!(table.columns().contains(&"happiness"));
        assert!(table.columns().contains(&"happiness_color"));
    }
}
