//! Art event placement.
//!
//! The art event feed lists exhibitions without coordinates. Every event is
//! placed around the Taipei Fine Arts Museum with a small uniform jitter so
//! markers do not stack.
#![forbid(unsafe_code)]

use happyspot_core::{Category, Spot};
use rand::Rng;
use serde_json::Value;

use crate::FeedError;

/// Latitude of the Taipei Fine Arts Museum.
pub const MUSEUM_LAT: f64 = 25.0747;
/// Longitude of the Taipei Fine Arts Museum.
pub const MUSEUM_LON: f64 = 121.5209;
/// Maximum offset applied on each axis, in degrees.
pub const ART_JITTER_DEGREES: f64 = 0.005;
/// Value assigned to every event.
pub const ART_EVENT_VALUE: f64 = 1.0;

/// Parse an art event payload into titles.
///
/// The payload is a JSON array whose entries are either title strings or
/// objects carrying a `title` field; other entries are ignored.
///
/// # Errors
/// Returns [`FeedError::Parse`] for invalid JSON and
/// [`FeedError::MissingEnvelope`] when the payload is not an array.
pub fn parse_art_titles(payload: &str) -> Result<Vec<String>, FeedError> {
    let document: Value = serde_json::from_str(payload).map_err(|source| FeedError::Parse {
        category: Category::ArtEvents,
        source,
    })?;
    let entries = document
        .as_array()
        .ok_or(FeedError::MissingEnvelope {
            category: Category::ArtEvents,
            envelope: "top-level array",
        })?;
    Ok(entries
        .iter()
        .filter_map(|entry| match entry {
            Value::String(title) => Some(title.clone()),
            Value::Object(fields) => fields.get("title")?.as_str().map(str::to_owned),
            _ => None,
        })
        .collect())
}

/// Place each title near the museum using `rng` for the jitter.
///
/// # Examples
/// ```
/// use happyspot_data::{ART_JITTER_DEGREES, MUSEUM_LAT, place_art_events};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let spots = place_art_events(["Taipei Biennial"], &mut rng);
/// let lat = spots.first().map(|s| s.lat()).expect("one event");
/// assert!((lat - MUSEUM_LAT).abs() <= ART_JITTER_DEGREES);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "event positions are offsets from the museum"
)]
pub fn place_art_events<I, S, R>(titles: I, rng: &mut R) -> Vec<Spot>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
    R: Rng + ?Sized,
{
    titles
        .into_iter()
        .map(|title| {
            let lat = MUSEUM_LAT + rng.gen_range(-ART_JITTER_DEGREES..ART_JITTER_DEGREES);
            let lon = MUSEUM_LON + rng.gen_range(-ART_JITTER_DEGREES..ART_JITTER_DEGREES);
            Spot::from_lat_lon(title, Category::ArtEvents, lat, lon, ART_EVENT_VALUE)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;

    #[rstest]
    fn parses_strings_and_title_objects() {
        let titles = parse_art_titles(r#"["雙年展", {"title": "攝影展"}, {"name": "x"}, 3]"#)
            .expect("valid payload");
        assert_eq!(titles, vec!["雙年展", "攝影展"]);
    }

    #[rstest]
    fn rejects_non_array_payloads() {
        let err = parse_art_titles(r#"{"title": "x"}"#).expect_err("object payload");
        assert!(matches!(err, FeedError::MissingEnvelope { .. }));
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "assertions compare coordinate offsets"
    )]
    fn events_stay_within_jitter_of_the_museum() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let titles: Vec<String> = (0..50).map(|i| format!("event-{i}")).collect();
        let spots = place_art_events(titles, &mut rng);
        assert_eq!(spots.len(), 50);
        for spot in &spots {
            assert!((spot.lat() - MUSEUM_LAT).abs() <= ART_JITTER_DEGREES);
            assert!((spot.lon() - MUSEUM_LON).abs() <= ART_JITTER_DEGREES);
            assert_eq!(spot.value, ART_EVENT_VALUE);
            assert_eq!(spot.category, Category::ArtEvents);
        }
    }

    #[rstest]
    fn equal_seeds_place_events_identically() {
        let first = place_art_events(["a", "b"], &mut ChaCha8Rng::seed_from_u64(3));
        let second = place_art_events(["a", "b"], &mut ChaCha8Rng::seed_from_u64(3));
        assert_eq!(first, second);
    }
}
