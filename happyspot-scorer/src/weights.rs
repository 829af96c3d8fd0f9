//! Mood weight tables, survey blending, and base category contributions.
#![forbid(unsafe_code)]

use std::collections::HashMap;

use happyspot_core::{Category, Mood};

/// Share of the survey mood in a blended weight.
pub const SURVEY_BLEND: f64 = 0.8;

/// Weight applied to categories absent from the mood tables.
pub const UNKNOWN_CATEGORY_WEIGHT: f64 = 1.0;

/// Fixed weight of `category` for `mood`, if the tables know the category.
///
/// # Examples
/// ```
/// use happyspot_core::{Category, Mood};
/// use happyspot_scorer::mood_weight;
///
/// assert_eq!(mood_weight(Mood::Relax, &Category::Parks), Some(1.8));
/// assert_eq!(mood_weight(Mood::Relax, &Category::Other("food".into())), None);
/// ```
#[must_use]
pub const fn mood_weight(mood: Mood, category: &Category) -> Option<f64> {
    let weight = match (mood, category) {
        (Mood::Relax, Category::Parks) => 1.8,
        (Mood::Relax, Category::Air) => 1.6,
        (Mood::Relax, Category::Sports) => 0.7,
        (Mood::Relax, Category::ArtEvents) => 0.9,
        (Mood::Relax, Category::Noise) => 1.0,
        (Mood::Relax, Category::Youbike) => 0.5,
        (Mood::UrbanStroll, Category::Parks) => 1.5,
        (Mood::UrbanStroll, Category::Air) => 1.0,
        (Mood::UrbanStroll, Category::Sports) => 0.5,
        (Mood::UrbanStroll, Category::ArtEvents) => 1.2,
        (Mood::UrbanStroll, Category::Noise) => 1.8,
        (Mood::UrbanStroll, Category::Youbike) => 1.2,
        (Mood::Energize, Category::Parks) => 1.0,
        (Mood::Energize, Category::Air) => 0.7,
        (Mood::Energize, Category::Sports) => 2.0,
        (Mood::Energize, Category::ArtEvents) => 1.0,
        (Mood::Energize, Category::Noise) => 0.5,
        (Mood::Energize, Category::Youbike) => 1.8,
        (Mood::CultureExplore, Category::Parks) => 0.8,
        (Mood::CultureExplore, Category::Air) => 0.6,
        (Mood::CultureExplore, Category::Sports) => 0.8,
        (Mood::CultureExplore, Category::ArtEvents) => 2.5,
        (Mood::CultureExplore, Category::Noise) => 0.6,
        (Mood::CultureExplore, Category::Youbike) => 0.7,
        (_, Category::Other(_)) => return None,
    };
    Some(weight)
}

/// Fixed, mood-independent share of the composite score for `category`.
///
/// The five contributing categories sum to `1.0`; bike-share stations and
/// unknown categories contribute nothing.
#[must_use]
pub const fn base_contribution(category: &Category) -> f64 {
    match category {
        Category::Air | Category::Parks => 0.25,
        Category::Noise => 0.20,
        Category::ArtEvents | Category::Sports => 0.15,
        Category::Youbike | Category::Other(_) => 0.0,
    }
}

/// Effective per-category weights for one scoring call.
///
/// # Examples
/// ```
/// use happyspot_core::{Category, Mood};
/// use happyspot_scorer::{CategoryWeights, SURVEY_BLEND};
///
/// let weights = CategoryWeights::resolve(Mood::Relax, Some(Mood::Energize), SURVEY_BLEND);
/// assert!((weights.weight(&Category::Air) - 0.88).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryWeights {
    weights: HashMap<Category, f64>,
}

impl CategoryWeights {
    /// Weights of `mood` without any survey influence.
    #[must_use]
    pub fn for_mood(mood: Mood) -> Self {
        let weights = Category::known()
            .into_iter()
            .filter_map(|category| mood_weight(mood, &category).map(|w| (category, w)))
            .collect();
        Self { weights }
    }

    /// Resolve the weights for `mood` blended with an optional survey mood.
    ///
    /// When `survey_mood` is absent or equal to `mood` the primary table is
    /// returned unchanged. Otherwise each category weight becomes
    /// `primary * (1 - blend) + survey * blend`.
    #[must_use]
    pub fn resolve(mood: Mood, survey_mood: Option<Mood>, blend: f64) -> Self {
        match survey_mood {
            Some(survey) if survey != mood => Self::blended(mood, survey, blend),
            _ => Self::for_mood(mood),
        }
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "survey blending is a linear interpolation of weights"
    )]
    fn blended(mood: Mood, survey: Mood, blend: f64) -> Self {
        let weights = Category::known()
            .into_iter()
            .filter_map(|category| {
                let survey_weight = mood_weight(survey, &category)?;
                let primary = mood_weight(mood, &category).unwrap_or(UNKNOWN_CATEGORY_WEIGHT);
                let effective = primary * (1.0 - blend) + survey_weight * blend;
                Some((category, effective))
            })
            .collect();
        Self { weights }
    }

    /// Effective weight of `category`, or [`UNKNOWN_CATEGORY_WEIGHT`].
    #[must_use]
    pub fn weight(&self, category: &Category) -> f64 {
        self.weights
            .get(category)
            .copied()
            .unwrap_or(UNKNOWN_CATEGORY_WEIGHT)
    }
}
