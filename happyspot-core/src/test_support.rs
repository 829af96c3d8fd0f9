//! Test-only builders and a reference scorer used by unit, behaviour and
//! property tests across the workspace.

use crate::{
    Category, Dataset, HappinessColor, ScoreRequest, ScoredDataset, ScoredSpot, Spot, SpotScorer,
};

/// Latitude of the synthetic dataset's origin.
pub const ORIGIN_LAT: f64 = 25.04;
/// Longitude of the synthetic dataset's origin.
pub const ORIGIN_LON: f64 = 121.53;

/// Build a spot at a small deterministic offset from the origin.
///
/// `index` spreads spots apart so distance-based assertions are stable.
pub fn spot(name: &str, category: Category, value: f64, index: usize) -> Spot {
    let step = index as f64 * 0.001;
    Spot::from_lat_lon(name, category, ORIGIN_LAT + step, ORIGIN_LON + step, value)
}

/// Build a dataset from `(category, value)` pairs, naming rows `spot-<n>`.
pub fn dataset_from_values(rows: &[(Category, f64)]) -> Dataset {
    Dataset::from_spots(
        rows.iter()
            .enumerate()
            .map(|(idx, (category, value))| {
                spot(&format!("spot-{idx}"), category.clone(), *value, idx)
            }),
    )
}

/// A small dataset covering all six known categories.
pub fn mixed_dataset() -> Dataset {
    dataset_from_values(&[
        (Category::Air, 12.0),
        (Category::Air, 30.0),
        (Category::Parks, 1.0),
        (Category::Parks, 1.0),
        (Category::Noise, 50.0),
        (Category::Sports, 1.0),
        (Category::ArtEvents, 1.0),
        (Category::Youbike, 3.0),
        (Category::Youbike, 17.0),
    ])
}

/// Scorer that ranks rows by raw value, ignoring the request.
///
/// Useful where a deterministic [`SpotScorer`] is needed without pulling in
/// the full happiness model.
#[derive(Default, Debug, Copy, Clone)]
pub struct ValueOrderScorer;

impl SpotScorer for ValueOrderScorer {
    fn score(&self, spots: &[Spot], _request: &ScoreRequest) -> ScoredDataset {
        let mut order: Vec<usize> = (0..spots.len()).collect();
        order.sort_by(|&a, &b| {
            let left = spots.get(a).map_or(0.0, |s| s.value);
            let right = spots.get(b).map_or(0.0, |s| s.value);
            right.total_cmp(&left)
        });
        let mut happiness = vec![0_i64; spots.len()];
        for (rank, idx) in order.into_iter().enumerate() {
            if let Some(slot) = happiness.get_mut(idx) {
                *slot = 100 - i64::try_from(rank).unwrap_or(i64::MAX);
            }
        }
        let rows = spots
            .iter()
            .zip(happiness)
            .map(|(spot, happiness)| ScoredSpot {
                spot: spot.clone(),
                value_norm: 0.0,
                base: 0.0,
                weight: 1.0,
                base_contribution: 0.0,
                mood_adjustment: 1.0,
                main_score: spot.value,
                main_norm: 0.0,
                distance_km: None,
                dist_score: 0.0,
                happiness,
                happiness_color: HappinessColor::from_happiness(happiness),
            })
            .collect();
        ScoredDataset::new(rows)
    }
}
