//! User moods driving category weighting.
//!
//! The canonical label of each mood is the Traditional Chinese name shown to
//! visitors. ASCII slugs are accepted when parsing so command lines and
//! configuration files stay easy to type.
//!
//! # Examples
//! ```
//! use happyspot_core::Mood;
//!
//! assert_eq!(Mood::Relax.as_str(), "療癒放鬆");
//! assert_eq!("energize".parse::<Mood>(), Ok(Mood::Energize));
//! assert_eq!("文化探索".parse::<Mood>(), Ok(Mood::CultureExplore));
//! ```
use thiserror::Error;

/// One of the four visitor intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mood {
    /// 療癒放鬆: fresh air and greenery.
    #[default]
    Relax,
    /// 城市漫步: quiet streets suited to walking.
    UrbanStroll,
    /// 活力充電: sports and active transport.
    Energize,
    /// 文化探索: exhibitions and events.
    CultureExplore,
}

/// Error returned when a string names no known mood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mood '{input}'")]
pub struct MoodParseError {
    /// The rejected input.
    pub input: String,
}

impl Mood {
    /// All moods in declaration order.
    ///
    /// Survey scoring relies on this order to break ties.
    pub const ALL: [Self; 4] = [
        Self::Relax,
        Self::UrbanStroll,
        Self::Energize,
        Self::CultureExplore,
    ];

    /// Return the canonical label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Relax => "療癒放鬆",
            Self::UrbanStroll => "城市漫步",
            Self::Energize => "活力充電",
            Self::CultureExplore => "文化探索",
        }
    }

    /// Return the ASCII slug accepted on command lines.
    ///
    /// # Examples
    /// ```
    /// use happyspot_core::Mood;
    ///
    /// assert_eq!(Mood::UrbanStroll.slug(), "urban-stroll");
    /// ```
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Relax => "relax",
            Self::UrbanStroll => "urban-stroll",
            Self::Energize => "energize",
            Self::CultureExplore => "culture-explore",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mood {
    type Err = MoodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(mood) = Self::ALL.into_iter().find(|m| m.as_str() == trimmed) {
            return Ok(mood);
        }
        match trimmed.to_lowercase().replace('_', "-").as_str() {
            "relax" => Ok(Self::Relax),
            "urban-stroll" => Ok(Self::UrbanStroll),
            "energize" => Ok(Self::Energize),
            "culture-explore" => Ok(Self::CultureExplore),
            _ => Err(MoodParseError {
                input: s.to_owned(),
            }),
        }
    }
}

impl TryFrom<String> for Mood {
    type Error = MoodParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Mood {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Mood {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
