//! The happiness model: mood-weighted contributions ranked into unique
//! integer scores.
//!
//! Scoring runs in bulk over the whole table:
//! 1. per-category min-max normalisation and medians;
//! 2. mood weight resolution, optionally blended with a survey mood;
//! 3. `main_score = value_norm * base_contribution * mood_adjustment`;
//! 4. dataset-wide rescaling of `main_score` to `main_norm` in `0..=100`;
//! 5. a stable descending rank that becomes `happiness = 101 - rank`.
//!
//! The rank, not `main_norm`, is the public score: ties in `main_score` are
//! broken by row order so every row receives a distinct integer.
#![forbid(unsafe_code)]

use geo::Coord;
use happyspot_core::{
    HappinessColor, ScoreRequest, ScoredDataset, ScoredSpot, Spot, SpotScorer, haversine_km,
};
use log::debug;

use crate::{CategoryStatistics, CategoryWeights, ScorerConfig, base_contribution};

/// Score assigned to the top-ranked row.
pub const TOP_HAPPINESS: i64 = 100;

/// `main_norm` given to every row when all main scores are equal.
pub const FLAT_MAIN_NORM: f64 = 50.0;

/// Mood-weighted happiness scorer.
///
/// # Examples
/// ```
/// use happyspot_core::{Category, Mood, ScoreRequest, Spot, SpotScorer};
/// use happyspot_scorer::HappinessScorer;
///
/// let spots = [
///     Spot::from_lat_lon("small", Category::Parks, 25.0, 121.5, 1.0),
///     Spot::from_lat_lon("medium", Category::Parks, 25.0, 121.5, 2.0),
///     Spot::from_lat_lon("large", Category::Parks, 25.0, 121.5, 3.0),
/// ];
/// let scored = HappinessScorer::default().score(&spots, &ScoreRequest::new(Mood::Relax));
/// let happiness: Vec<i64> = scored.iter().map(|row| row.happiness).collect();
/// assert_eq!(happiness, vec![98, 99, 100]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HappinessScorer {
    config: ScorerConfig,
}

impl HappinessScorer {
    /// Build a scorer from explicit configuration.
    #[must_use]
    pub const fn new(config: ScorerConfig) -> Self {
        Self { config }
    }

    /// Borrow the configuration.
    #[must_use]
    pub const fn config(&self) -> &ScorerConfig {
        &self.config
    }

    fn derive_row(
        &self,
        spot: &Spot,
        stats: &CategoryStatistics,
        weights: &CategoryWeights,
        user: Option<Coord<f64>>,
    ) -> ScoredSpot {
        let normalised = stats.normalise(spot);
        let weight = weights.weight(&spot.category);
        let contribution = base_contribution(&spot.category);
        let distance_km = user.map(|location| haversine_km(location, spot.location));
        let dist_score = distance_km.map_or(0.0, |km| {
            distance_score(km, self.config.distance_decay_km)
        });
        ScoredSpot {
            spot: spot.clone(),
            value_norm: normalised.value_norm,
            base: normalised.base,
            weight,
            base_contribution: contribution,
            mood_adjustment: weight,
            main_score: main_score(normalised.value_norm, contribution, weight),
            main_norm: FLAT_MAIN_NORM,
            distance_km,
            dist_score,
            happiness: 0,
            happiness_color: HappinessColor::Red,
        }
    }
}

impl SpotScorer for HappinessScorer {
    fn score(&self, spots: &[Spot], request: &ScoreRequest) -> ScoredDataset {
        if spots.is_empty() {
            debug!("no spots to score for mood {}", request.mood);
            return ScoredDataset::default();
        }

        let stats = CategoryStatistics::from_spots(spots);
        let weights =
            CategoryWeights::resolve(request.mood, request.survey_mood, self.config.survey_blend);
        let mut rows: Vec<ScoredSpot> = spots
            .iter()
            .map(|spot| self.derive_row(spot, &stats, &weights, request.user_location))
            .collect();

        let main_scores: Vec<f64> = rows.iter().map(|row| row.main_score).collect();
        let main_norms = rescale_to_percent(&main_scores);
        let happiness = unique_happiness(&main_scores);
        for ((row, main_norm), score) in rows.iter_mut().zip(main_norms).zip(happiness) {
            row.main_norm = main_norm;
            row.happiness = score;
            row.happiness_color = HappinessColor::from_happiness(score);
        }

        debug!(
            "scored {} spots across {} categories for mood {} (survey: {:?})",
            rows.len(),
            stats.len(),
            request.mood,
            request.survey_mood.map(|mood| mood.as_str()),
        );
        ScoredDataset::new(rows)
    }
}

/// Composite score of one row before ranking.
#[expect(
    clippy::float_arithmetic,
    reason = "the composite score is a product of normalised factors"
)]
#[must_use]
pub const fn main_score(value_norm: f64, base_contribution: f64, mood_adjustment: f64) -> f64 {
    value_norm * (base_contribution * mood_adjustment)
}

/// Min-max rescale `scores` across all rows into `0.0..=100.0`.
///
/// When every score is equal each row receives [`FLAT_MAIN_NORM`].
#[expect(
    clippy::float_arithmetic,
    reason = "rescaling divides by the dataset-wide score range"
)]
#[must_use]
pub fn rescale_to_percent(scores: &[f64]) -> Vec<f64> {
    let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max == min {
        return vec![FLAT_MAIN_NORM; scores.len()];
    }
    scores
        .iter()
        .map(|score| 100.0 * ((score - min) / (max - min)))
        .collect()
}

/// Rank `scores` descending and map rank `r` (1-based) to `101 - r`.
///
/// Ties keep their input order, so the output is always a permutation of
/// `100, 99, ..., 101 - n` and identical input yields identical output.
///
/// # Examples
/// ```
/// use happyspot_scorer::unique_happiness;
///
/// assert_eq!(unique_happiness(&[0.2, 0.5, 0.2]), vec![99, 100, 98]);
/// ```
#[must_use]
pub fn unique_happiness(scores: &[f64]) -> Vec<i64> {
    let mut order: Vec<(usize, f64)> = scores
        .iter()
        .map(|&score| rank_key(score))
        .enumerate()
        .collect();
    // `sort_by` is stable, which keeps first-seen rows ahead on ties.
    order.sort_by(|left, right| right.1.total_cmp(&left.1));

    let mut happiness = vec![0_i64; scores.len()];
    for (position, (index, _)) in order.into_iter().enumerate() {
        let offset = i64::try_from(position).unwrap_or(i64::MAX);
        if let Some(slot) = happiness.get_mut(index) {
            *slot = TOP_HAPPINESS.saturating_sub(offset);
        }
    }
    happiness
}

/// Informational proximity score: `100 * exp(-distance / decay)`.
#[expect(
    clippy::float_arithmetic,
    reason = "proximity decays exponentially with distance"
)]
#[must_use]
pub fn distance_score(distance_km: f64, decay_km: f64) -> f64 {
    if decay_km <= 0.0 {
        return 0.0;
    }
    100.0 * (-distance_km / decay_km).exp()
}

/// Totally ordered ranking key: NaN sorts last and `-0.0` equals `0.0`.
#[expect(
    clippy::float_arithmetic,
    reason = "adding zero canonicalises negative zero"
)]
const fn rank_key(score: f64) -> f64 {
    if score.is_nan() {
        f64::NEG_INFINITY
    } else {
        score + 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use happyspot_core::test_support::{dataset_from_values, mixed_dataset};
    use happyspot_core::{Category, Mood};
    use rstest::rstest;

    const TOLERANCE: f64 = 1e-9;

    #[rstest]
    fn empty_input_yields_empty_table_with_schema() {
        let scored = HappinessScorer::default().score(&[], &ScoreRequest::new(Mood::Relax));
        assert!(scored.is_empty());
        assert_eq!(scored.columns().len(), ScoredSpot::COLUMNS.len());
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "test compares floating point values"
    )]
    fn parks_scenario_ranks_by_value() {
        let dataset = dataset_from_values(&[
            (Category::Parks, 1.0),
            (Category::Parks, 2.0),
            (Category::Parks, 3.0),
        ]);
        let scored = HappinessScorer::default().score(dataset.spots(), &ScoreRequest::new(Mood::Relax));

        let norms: Vec<f64> = scored.iter().map(|row| row.value_norm).collect();
        assert_eq!(norms, vec![0.0, 0.5, 1.0]);
        let happiness: Vec<i64> = scored.iter().map(|row| row.happiness).collect();
        assert_eq!(happiness, vec![98, 99, 100]);
        for row in &scored {
            assert_eq!(row.weight, 1.8);
            assert_eq!(row.base, 2.0);
            assert!((row.main_score - row.value_norm * 0.25 * 1.8).abs() < TOLERANCE);
        }
        let main_norms: Vec<f64> = scored.iter().map(|row| row.main_norm).collect();
        assert_eq!(main_norms, vec![0.0, 50.0, 100.0]);
    }

    #[rstest]
    fn ties_are_broken_by_row_order() {
        let dataset = dataset_from_values(&[
            (Category::Sports, 1.0),
            (Category::Sports, 1.0),
            (Category::Sports, 1.0),
        ]);
        let scored = HappinessScorer::default().score(dataset.spots(), &ScoreRequest::new(Mood::Energize));
        let happiness: Vec<i64> = scored.iter().map(|row| row.happiness).collect();
        assert_eq!(happiness, vec![100, 99, 98]);
        assert!(scored.iter().all(|row| row.main_norm == FLAT_MAIN_NORM));
        assert!(scored.iter().all(|row| row.value_norm == 1.0));
    }

    #[rstest]
    fn bike_share_rows_never_outrank_contributing_rows() {
        let scored = HappinessScorer::default().score(mixed_dataset().spots(), &ScoreRequest::new(Mood::Energize));
        let youbike_best = scored
            .iter()
            .filter(|row| row.spot.category == Category::Youbike)
            .map(|row| row.main_score)
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(youbike_best, 0.0);
    }

    #[rstest]
    fn unknown_category_is_scored_but_contributes_nothing() {
        let dataset = dataset_from_values(&[
            (Category::Other("market".into()), 5.0),
            (Category::Parks, 1.0),
            (Category::Parks, 2.0),
        ]);
        let scored = HappinessScorer::default().score(dataset.spots(), &ScoreRequest::new(Mood::Relax));
        let market = scored.rows().first().expect("market row");
        assert_eq!(market.weight, 1.0);
        assert_eq!(market.base_contribution, 0.0);
        assert_eq!(market.value_norm, 1.0);
        assert_eq!(market.main_score, 0.0);
    }

    #[rstest]
    fn distance_is_informational_only() {
        let dataset = mixed_dataset();
        let scorer = HappinessScorer::default();
        let without = scorer.score(dataset.spots(), &ScoreRequest::new(Mood::Relax));
        let with = scorer.score(
            dataset.spots(),
            &ScoreRequest::new(Mood::Relax).with_user_lat_lon(25.04, 121.53),
        );
        let ranks_without: Vec<i64> = without.iter().map(|row| row.happiness).collect();
        let ranks_with: Vec<i64> = with.iter().map(|row| row.happiness).collect();
        assert_eq!(ranks_without, ranks_with);
        assert!(without.iter().all(|row| row.distance_km.is_none() && row.dist_score == 0.0));
        assert!(with.iter().all(|row| row.dist_score > 0.0 && row.dist_score <= 100.0));
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "test compares floating point values"
    )]
    fn survey_mood_changes_weights() {
        let dataset = mixed_dataset();
        let scored = HappinessScorer::default().score(
            dataset.spots(),
            &ScoreRequest::new(Mood::Relax).with_survey_mood(Some(Mood::Energize)),
        );
        let air = scored
            .iter()
            .find(|row| row.spot.category == Category::Air)
            .expect("air row");
        assert!((air.weight - 0.88).abs() < TOLERANCE);
        assert_eq!(air.mood_adjustment, air.weight);
    }

    #[rstest]
    #[case(&[], &[])]
    #[case(&[1.0], &[100])]
    #[case(&[0.1, 0.3, 0.2], &[98, 100, 99])]
    #[case(&[0.0, -0.0, 0.0], &[100, 99, 98])]
    #[case(&[f64::NAN, 0.5], &[99, 100])]
    fn unique_happiness_is_dense(#[case] scores: &[f64], #[case] expected: &[i64]) {
        assert_eq!(unique_happiness(scores), expected);
    }

    #[rstest]
    fn rescale_handles_flat_scores() {
        assert_eq!(rescale_to_percent(&[0.3, 0.3]), vec![50.0, 50.0]);
        assert!(rescale_to_percent(&[]).is_empty());
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "test compares floating point values"
    )]
    fn distance_score_decays() {
        assert!((distance_score(0.0, 2.0) - 100.0).abs() < TOLERANCE);
        assert!((distance_score(2.0, 2.0) - 100.0 / std::f64::consts::E).abs() < TOLERANCE);
        assert_eq!(distance_score(1.0, 0.0), 0.0);
    }
}
