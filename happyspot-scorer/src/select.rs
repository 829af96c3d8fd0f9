//! Presentation-side selection of scored rows.
#![forbid(unsafe_code)]

use std::cmp::Reverse;
use std::collections::HashMap;

use happyspot_core::{Category, HappinessColor, ScoredDataset, ScoredSpot};
use serde::Serialize;

/// A scored spot trimmed to the fields shown to a visitor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// Spot name.
    pub name: String,
    /// Source category.
    pub category: Category,
    /// Unique integer happiness.
    pub happiness: i64,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
    /// Category median raw value.
    pub base: f64,
    /// Effective mood weight.
    pub weight: f64,
    /// Category-local normalised value.
    pub value_norm: f64,
    /// Raw metric value.
    pub value: f64,
    /// Colour tier, serialised as a hex code.
    pub happiness_color: HappinessColor,
    /// Informational proximity score.
    pub dist_score: f64,
    /// Distance from the visitor, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl From<ScoredSpot> for Recommendation {
    fn from(row: ScoredSpot) -> Self {
        let lat = row.spot.lat();
        let lon = row.spot.lon();
        Self {
            name: row.spot.name,
            category: row.spot.category,
            happiness: row.happiness,
            lat,
            lon,
            base: row.base,
            weight: row.weight,
            value_norm: row.value_norm,
            value: row.spot.value,
            happiness_color: row.happiness_color,
            dist_score: row.dist_score,
            distance_km: row.distance_km,
        }
    }
}

/// Pick the rows to present.
///
/// With a non-empty `names` list the rows whose name appears in it are kept,
/// ordered by the name's first position in the list; `limit` is ignored.
/// Otherwise the `limit` rows with the highest happiness are kept.
///
/// # Examples
/// ```
/// use happyspot_core::{Category, Mood, ScoreRequest, Spot, SpotScorer};
/// use happyspot_scorer::{HappinessScorer, select_recommendations};
///
/// let spots = [
///     Spot::from_lat_lon("a", Category::Parks, 25.0, 121.5, 1.0),
///     Spot::from_lat_lon("b", Category::Parks, 25.0, 121.5, 2.0),
/// ];
/// let scored = HappinessScorer::default().score(&spots, &ScoreRequest::new(Mood::Relax));
/// let top = select_recommendations::<&str>(scored, &[], 1);
/// assert_eq!(top.len(), 1);
/// assert_eq!(top.first().map(|r| r.name.as_str()), Some("b"));
/// ```
#[must_use]
pub fn select_recommendations<S>(
    scored: ScoredDataset,
    names: &[S],
    limit: usize,
) -> Vec<Recommendation>
where
    S: AsRef<str>,
{
    let mut rows = scored.into_rows();
    if names.is_empty() {
        rows.sort_by_key(|row| Reverse(row.happiness));
        rows.truncate(limit);
    } else {
        let mut positions: HashMap<&str, usize> = HashMap::new();
        for (position, name) in names.iter().enumerate() {
            positions.entry(name.as_ref()).or_insert(position);
        }
        let mut ranked: Vec<(usize, ScoredSpot)> = rows
            .into_iter()
            .filter_map(|row| {
                positions
                    .get(row.spot.name.as_str())
                    .map(|&position| (position, row))
            })
            .collect();
        ranked.sort_by_key(|(position, _)| *position);
        rows = ranked.into_iter().map(|(_, row)| row).collect();
    }
    rows.into_iter().map(Recommendation::from).collect()
}

/// Point the map is centred on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapCentre {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

/// Taipei city centre, used when nothing is selected.
pub const DEFAULT_CENTRE: MapCentre = MapCentre {
    lat: 25.0330,
    lon: 121.5654,
};

/// Mean position of `recommendations`, or [`DEFAULT_CENTRE`] when empty.
#[expect(
    clippy::float_arithmetic,
    reason = "the centre is the arithmetic mean of coordinates"
)]
#[must_use]
pub fn map_centre(recommendations: &[Recommendation]) -> MapCentre {
    let (lat_sum, lon_sum, count) = recommendations.iter().fold(
        (0.0_f64, 0.0_f64, 0.0_f64),
        |(lat, lon, count), rec| (lat + rec.lat, lon + rec.lon, count + 1.0),
    );
    if count == 0.0 {
        return DEFAULT_CENTRE;
    }
    MapCentre {
        lat: lat_sum / count,
        lon: lon_sum / count,
    }
}
