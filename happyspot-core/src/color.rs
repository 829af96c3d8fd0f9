//! Three-tier colour labels for happiness scores.

/// Presentation colour derived from an integer happiness score.
///
/// # Examples
/// ```
/// use happyspot_core::HappinessColor;
///
/// assert_eq!(HappinessColor::from_happiness(80), HappinessColor::Green);
/// assert_eq!(HappinessColor::from_happiness(79), HappinessColor::Amber);
/// assert_eq!(HappinessColor::from_happiness(49).hex(), "#EF5350");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HappinessColor {
    /// Scores of 80 and above.
    Green,
    /// Scores from 50 up to 79.
    Amber,
    /// Everything below 50.
    Red,
}

impl HappinessColor {
    /// Lowest score rendered green.
    pub const GREEN_THRESHOLD: i64 = 80;
    /// Lowest score rendered amber.
    pub const AMBER_THRESHOLD: i64 = 50;

    /// Pick the tier for a happiness score.
    #[must_use]
    pub const fn from_happiness(happiness: i64) -> Self {
        if happiness >= Self::GREEN_THRESHOLD {
            Self::Green
        } else if happiness >= Self::AMBER_THRESHOLD {
            Self::Amber
        } else {
            Self::Red
        }
    }

    /// Return the hex colour used by the map markers.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Green => "#8BC34A",
            Self::Amber => "#FFCA28",
            Self::Red => "#EF5350",
        }
    }
}

impl std::fmt::Display for HappinessColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hex())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for HappinessColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(100, HappinessColor::Green)]
    #[case(80, HappinessColor::Green)]
    #[case(79, HappinessColor::Amber)]
    #[case(50, HappinessColor::Amber)]
    #[case(49, HappinessColor::Red)]
    #[case(-250, HappinessColor::Red)]
    fn thresholds_partition_scores(#[case] happiness: i64, #[case] expected: HappinessColor) {
        assert_eq!(HappinessColor::from_happiness(happiness), expected);
    }
}
