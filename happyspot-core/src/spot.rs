use geo::Coord;

use crate::Category;

/// One row of the working dataset.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. The meaning
/// of `value` depends on the category: PM2.5 concentration for air, available
/// bikes for bike-share stations, and a constant placeholder for the others.
///
/// # Examples
/// ```
/// use happyspot_core::{Category, Spot};
///
/// let spot = Spot::from_lat_lon("Daan Park", Category::Parks, 25.03, 121.53, 1.0);
/// assert_eq!(spot.lat(), 25.03);
/// assert_eq!(spot.location.x, 121.53);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "SpotRecord", into = "SpotRecord")
)]
pub struct Spot {
    /// Display name; not necessarily unique.
    pub name: String,
    /// Source category.
    pub category: Category,
    /// Position as `x = longitude`, `y = latitude`.
    pub location: Coord<f64>,
    /// Raw category-specific value.
    pub value: f64,
}

impl Spot {
    /// Construct a spot from a coordinate.
    pub fn new(
        name: impl Into<String>,
        category: Category,
        location: Coord<f64>,
        value: f64,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            location,
            value,
        }
    }

    /// Construct a spot from latitude and longitude in degrees.
    pub fn from_lat_lon(
        name: impl Into<String>,
        category: Category,
        lat: f64,
        lon: f64,
        value: f64,
    ) -> Self {
        Self::new(name, category, Coord { x: lon, y: lat }, value)
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.location.y
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.location.x
    }
}

/// Flat record form used by the JSON cache: `{name, category, lat, lon, value}`.
#[cfg(feature = "serde")]
#[derive(Clone, serde::Serialize, serde::Deserialize)]
struct SpotRecord {
    name: String,
    category: Category,
    lat: f64,
    lon: f64,
    value: f64,
}

#[cfg(feature = "serde")]
impl From<SpotRecord> for Spot {
    fn from(record: SpotRecord) -> Self {
        Self::from_lat_lon(
            record.name,
            record.category,
            record.lat,
            record.lon,
            record.value,
        )
    }
}

#[cfg(feature = "serde")]
impl From<Spot> for SpotRecord {
    fn from(spot: Spot) -> Self {
        Self {
            lat: spot.lat(),
            lon: spot.lon(),
            name: spot.name,
            category: spot.category,
            value: spot.value,
        }
    }
}
