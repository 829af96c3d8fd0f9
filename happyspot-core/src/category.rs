//! Open-data source categories.
//!
//! Six categories are known to the engine. Anything else parses into
//! [`Category::Other`] so upstream feeds can introduce new sources without
//! breaking scoring; unknown categories are normalised but carry no
//! contribution.
//!
//! # Examples
//! ```
//! use happyspot_core::Category;
//!
//! assert_eq!(Category::ArtEvents.as_str(), "art_events");
//! assert_eq!(Category::from("parks"), Category::Parks);
//! assert_eq!(Category::from("food"), Category::Other("food".into()));
//! ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Air-quality monitoring stations (PM2.5).
    Air,
    /// Public parks.
    Parks,
    /// Noise monitoring points.
    Noise,
    /// Sports facilities.
    Sports,
    /// Art exhibitions and events.
    ArtEvents,
    /// Bike-share stations.
    Youbike,
    /// A category the engine has no tables for.
    Other(String),
}

impl Category {
    /// The six categories with contribution and mood tables, in feed order.
    ///
    /// # Examples
    /// ```
    /// use happyspot_core::Category;
    ///
    /// assert_eq!(Category::known().len(), 6);
    /// ```
    #[must_use]
    pub const fn known() -> [Self; 6] {
        [
            Self::ArtEvents,
            Self::Noise,
            Self::Sports,
            Self::Air,
            Self::Parks,
            Self::Youbike,
        ]
    }

    /// Return the canonical identifier used in datasets and feed files.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Air => "air",
            Self::Parks => "parks",
            Self::Noise => "noise",
            Self::Sports => "sports",
            Self::ArtEvents => "art_events",
            Self::Youbike => "youbike",
            Self::Other(raw) => raw.as_str(),
        }
    }

    /// Report whether the category is one of the six known sources.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Category {
    fn from(raw: &str) -> Self {
        match raw.trim() {
            "air" => Self::Air,
            "parks" => Self::Parks,
            "noise" => Self::Noise,
            "sports" => Self::Sports,
            "art_events" => Self::ArtEvents,
            "youbike" => Self::Youbike,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for Category {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Category {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Category {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from(raw))
    }
}
