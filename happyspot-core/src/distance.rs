//! Great-circle distances between WGS84 coordinates.
//!
//! Coordinates follow the crate convention of `x = longitude` and
//! `y = latitude`, both in degrees.

use geo::Coord;

/// Earth's mean radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distance within which a visitor counts as having arrived at a spot.
pub const ARRIVAL_RADIUS_METRES: f64 = 100.0;

/// Haversine distance between two coordinates in kilometres.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use happyspot_core::haversine_km;
///
/// let taipei_101 = Coord { x: 121.5645, y: 25.0340 };
/// let fine_arts_museum = Coord { x: 121.5209, y: 25.0747 };
/// let km = haversine_km(taipei_101, fine_arts_museum);
/// assert!((km - 6.3).abs() < 0.2);
/// ```
pub fn haversine_km(from: Coord<f64>, to: Coord<f64>) -> f64 {
    let lat1 = from.y.to_radians();
    let lat2 = to.y.to_radians();
    let dlat = lat2 - lat1;
    let dlon = (to.x - from.x).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Haversine distance between two coordinates in metres.
pub fn haversine_metres(from: Coord<f64>, to: Coord<f64>) -> f64 {
    haversine_km(from, to) * 1000.0
}

/// Report whether `user` is within [`ARRIVAL_RADIUS_METRES`] of `target`.
///
/// The boundary is inclusive.
pub fn is_within_arrival_radius(user: Coord<f64>, target: Coord<f64>) -> bool {
    haversine_metres(user, target) <= ARRIVAL_RADIUS_METRES
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TOLERANCE: f64 = 1e-6;

    #[rstest]
    fn identical_points_are_zero_apart() {
        let point = Coord { x: 121.5, y: 25.0 };
        assert!(haversine_km(point, point).abs() < TOLERANCE);
    }

    #[rstest]
    fn one_degree_of_latitude_matches_arc_length() {
        let from = Coord { x: 0.0, y: 0.0 };
        let to = Coord { x: 0.0, y: 1.0 };
        let expected = EARTH_RADIUS_KM * 1.0_f64.to_radians();
        assert!((haversine_km(from, to) - expected).abs() < TOLERANCE);
    }

    #[rstest]
    fn distance_is_symmetric() {
        let a = Coord { x: 121.52, y: 25.07 };
        let b = Coord { x: 121.56, y: 25.03 };
        assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < TOLERANCE);
    }

    #[rstest]
    #[case(0.0005, true)]
    #[case(0.0008, true)]
    #[case(0.0010, false)]
    #[case(0.0100, false)]
    fn arrival_radius_is_one_hundred_metres(#[case] lat_offset: f64, #[case] arrived: bool) {
        // 0.0009 degrees of latitude is roughly 100 metres.
        let target = Coord { x: 121.5, y: 25.0 };
        let user = Coord {
            x: 121.5,
            y: 25.0 + lat_offset,
        };
        assert_eq!(is_within_arrival_radius(user, target), arrived);
    }
}
