//! Open-data feed descriptors and payload parsing.
//!
//! Each upstream feed publishes JSON records with its own field names. A
//! [`FeedDescriptor`] maps those names onto the `{name, lat, lon, value}`
//! columns of a [`Spot`]. Parsing is lenient in the way the upstream data
//! requires: numeric strings are accepted, rows without usable coordinates
//! are dropped, and unusable values fall back to the descriptor default.
#![forbid(unsafe_code)]

use happyspot_core::{Category, Spot};
use log::debug;
use serde_json::{Map, Value};

use crate::FeedError;

/// Name given to rows whose name field is missing.
pub const UNNAMED_SPOT: &str = "未命名地點";

/// Where a feed keeps its record list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Envelope {
    /// `{"result": {"results": [...]}}`, as served by the city data portal.
    ResultResults,
    /// The payload itself is the record array.
    TopLevel,
}

impl Envelope {
    /// Dotted path of the envelope, for error messages.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::ResultResults => "result.results",
            Self::TopLevel => "top-level array",
        }
    }

    fn records(self, payload: &Value) -> Option<&Vec<Value>> {
        match self {
            Self::ResultResults => payload.get("result")?.get("results")?.as_array(),
            Self::TopLevel => payload.as_array(),
        }
    }
}

/// How a feed's `value` column is produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueSource {
    /// Read from `field`, falling back to `default` when unusable.
    Field {
        /// Upstream field name.
        field: &'static str,
        /// Value used when the field is missing or not numeric.
        default: f64,
    },
    /// Every row receives the same placeholder value.
    Constant(f64),
}

/// Field mapping for one upstream feed.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedDescriptor {
    /// Category assigned to every parsed row.
    pub category: Category,
    /// Field holding the spot name.
    pub name_field: &'static str,
    /// Field holding the latitude.
    pub lat_field: &'static str,
    /// Field holding the longitude.
    pub lon_field: &'static str,
    /// Source of the raw value.
    pub value: ValueSource,
    /// Location of the record list.
    pub envelope: Envelope,
}

impl FeedDescriptor {
    /// Descriptor of the JSON feed for `category`.
    ///
    /// Art events have no descriptor: their feed is a title list placed by
    /// [`place_art_events`](crate::place_art_events).
    #[must_use]
    pub fn for_category(category: &Category) -> Option<Self> {
        let (name_field, lat_field, lon_field, value, envelope) = match category {
            Category::Air => (
                "name",
                "lat",
                "lon",
                ValueSource::Field {
                    field: "value",
                    default: 20.0,
                },
                Envelope::ResultResults,
            ),
            Category::Noise => (
                "測點名稱",
                "緯度",
                "經度",
                ValueSource::Constant(50.0),
                Envelope::ResultResults,
            ),
            Category::Sports => (
                "廠商名稱_市招",
                "緯度",
                "經度",
                ValueSource::Constant(1.0),
                Envelope::ResultResults,
            ),
            Category::Parks => (
                "pm_name",
                "pm_Latitude",
                "pm_Longitude",
                ValueSource::Constant(1.0),
                Envelope::TopLevel,
            ),
            Category::Youbike => (
                "sna",
                "latitude",
                "longitude",
                ValueSource::Field {
                    field: "available_rent_bikes",
                    default: 0.0,
                },
                Envelope::TopLevel,
            ),
            Category::ArtEvents | Category::Other(_) => return None,
        };
        Some(Self {
            category: category.clone(),
            name_field,
            lat_field,
            lon_field,
            value,
            envelope,
        })
    }

    /// Parse a raw JSON payload into spots.
    ///
    /// # Errors
    /// Returns [`FeedError::Parse`] for invalid JSON and
    /// [`FeedError::MissingEnvelope`] when the record list is absent.
    ///
    /// # Examples
    /// ```
    /// use happyspot_core::Category;
    /// use happyspot_data::FeedDescriptor;
    ///
    /// let parks = FeedDescriptor::for_category(&Category::Parks).expect("parks feed");
    /// let spots = parks
    ///     .parse(r#"[{"pm_name": "大安森林公園", "pm_Latitude": "25.0300", "pm_Longitude": "121.5355"}]"#)
    ///     .expect("valid payload");
    /// assert_eq!(spots.len(), 1);
    /// assert_eq!(spots.first().map(|s| s.value), Some(1.0));
    /// ```
    pub fn parse(&self, payload: &str) -> Result<Vec<Spot>, FeedError> {
        let document: Value =
            serde_json::from_str(payload).map_err(|source| FeedError::Parse {
                category: self.category.clone(),
                source,
            })?;
        let records =
            self.envelope
                .records(&document)
                .ok_or_else(|| FeedError::MissingEnvelope {
                    category: self.category.clone(),
                    envelope: self.envelope.describe(),
                })?;
        let spots: Vec<Spot> = records
            .iter()
            .filter_map(Value::as_object)
            .filter_map(|record| self.parse_record(record))
            .collect();
        debug!(
            "parsed {} of {} {} records",
            spots.len(),
            records.len(),
            self.category
        );
        Ok(spots)
    }

    fn parse_record(&self, record: &Map<String, Value>) -> Option<Spot> {
        let lat = record.get(self.lat_field).and_then(coerce_f64)?;
        let lon = record.get(self.lon_field).and_then(coerce_f64)?;
        let name = record
            .get(self.name_field)
            .and_then(coerce_name)
            .unwrap_or_else(|| UNNAMED_SPOT.to_owned());
        let value = match self.value {
            ValueSource::Field { field, default } => {
                record.get(field).and_then(coerce_f64).unwrap_or(default)
            }
            ValueSource::Constant(constant) => constant,
        };
        Some(Spot::from_lat_lon(
            name,
            self.category.clone(),
            lat,
            lon,
            value,
        ))
    }
}

/// Coerce a JSON number or numeric string into a finite `f64`.
///
/// # Examples
/// ```
/// use happyspot_data::coerce_f64;
/// use serde_json::json;
///
/// assert_eq!(coerce_f64(&json!(" 25.03 ")), Some(25.03));
/// assert_eq!(coerce_f64(&json!(12)), Some(12.0));
/// assert_eq!(coerce_f64(&json!("n/a")), None);
/// ```
#[must_use]
pub fn coerce_f64(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

fn coerce_name(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
