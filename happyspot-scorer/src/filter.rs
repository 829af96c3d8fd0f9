//! Mood-driven category filtering of scored tables.
#![forbid(unsafe_code)]

use happyspot_core::{Category, Mood, ScoredDataset};
use log::debug;

/// Categories a mood narrows recommendations to.
///
/// Every mood keeps parks alongside its signature category.
#[must_use]
pub const fn mood_categories(mood: Mood) -> [Category; 2] {
    match mood {
        Mood::Relax => [Category::Air, Category::Parks],
        Mood::UrbanStroll => [Category::Noise, Category::Parks],
        Mood::Energize => [Category::Sports, Category::Parks],
        Mood::CultureExplore => [Category::ArtEvents, Category::Parks],
    }
}

/// Keep only rows whose category belongs to `mood`.
///
/// When no row matches, the unfiltered table is returned so the caller always
/// has something to recommend.
///
/// # Examples
/// ```
/// use happyspot_core::{Category, Mood, ScoreRequest, Spot, SpotScorer};
/// use happyspot_scorer::{HappinessScorer, filter_by_mood};
///
/// let spots = [Spot::from_lat_lon("pool", Category::Sports, 25.0, 121.5, 1.0)];
/// let scored = HappinessScorer::default().score(&spots, &ScoreRequest::new(Mood::Relax));
/// // No air or park rows: the sports row survives through the fallback.
/// assert_eq!(filter_by_mood(scored, Mood::Relax).len(), 1);
/// ```
#[must_use]
pub fn filter_by_mood(scored: ScoredDataset, mood: Mood) -> ScoredDataset {
    let categories = mood_categories(mood);
    let matching = scored
        .iter()
        .filter(|row| categories.contains(&row.spot.category))
        .count();
    if matching == 0 {
        debug!(
            "no rows match mood {mood}; keeping all {} rows",
            scored.len()
        );
        return scored;
    }
    let mut filtered = scored;
    filtered.retain(|row| categories.contains(&row.spot.category));
    filtered
}
