//! Per-category min-max normalisation and medians.
#![forbid(unsafe_code)]

use std::collections::HashMap;

use happyspot_core::{Category, Spot};

/// Summary of the raw values observed within one category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryStats {
    /// Smallest raw value.
    pub min: f64,
    /// Largest raw value.
    pub max: f64,
    /// Median raw value; the mean of the two middle values for even counts.
    pub median: f64,
}

impl CategoryStats {
    /// Compute statistics for a non-empty set of values.
    ///
    /// Returns `None` when `values` is empty.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let min = *sorted.first()?;
        let max = *sorted.last()?;
        let median = median_of_sorted(&sorted)?;
        Some(Self { min, max, median })
    }

    /// Map a raw value into `0.0..=1.0` relative to this category.
    ///
    /// A category whose values are all equal maps every value to `1.0`.
    #[expect(
        clippy::float_arithmetic,
        reason = "min-max normalisation divides by the value range"
    )]
    #[must_use]
    pub fn normalise(&self, value: f64) -> f64 {
        if self.max == self.min {
            return 1.0;
        }
        (value - self.min) / (self.max - self.min)
    }
}

/// Normalised value and category base for one row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalised {
    /// Min-max normalised value within the row's category.
    pub value_norm: f64,
    /// Median raw value of the row's category.
    pub base: f64,
}

/// Statistics for every category present in a table.
///
/// # Examples
/// ```
/// use happyspot_core::{Category, Spot};
/// use happyspot_scorer::CategoryStatistics;
///
/// let spots = [
///     Spot::from_lat_lon("a", Category::Parks, 0.0, 0.0, 1.0),
///     Spot::from_lat_lon("b", Category::Parks, 0.0, 0.0, 3.0),
/// ];
/// let stats = CategoryStatistics::from_spots(&spots);
/// let parks = stats.get(&Category::Parks).expect("parks present");
/// assert_eq!(parks.median, 2.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryStatistics {
    by_category: HashMap<Category, CategoryStats>,
}

impl CategoryStatistics {
    /// Group `spots` by category and summarise each group.
    #[must_use]
    pub fn from_spots(spots: &[Spot]) -> Self {
        let mut grouped: HashMap<&Category, Vec<f64>> = HashMap::new();
        for spot in spots {
            grouped.entry(&spot.category).or_default().push(spot.value);
        }
        let by_category = grouped
            .into_iter()
            .filter_map(|(category, values)| {
                CategoryStats::from_values(&values).map(|stats| (category.clone(), stats))
            })
            .collect();
        Self { by_category }
    }

    /// Statistics for `category`, if it was present.
    #[must_use]
    pub fn get(&self, category: &Category) -> Option<&CategoryStats> {
        self.by_category.get(category)
    }

    /// Number of categories summarised.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_category.len()
    }

    /// Report whether no categories were summarised.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_category.is_empty()
    }

    /// Normalise a spot against its category.
    ///
    /// A spot whose category was not part of the summarised table is treated
    /// as a single-row category: `value_norm` is `1.0` and `base` its own
    /// value.
    #[must_use]
    pub fn normalise(&self, spot: &Spot) -> Normalised {
        self.get(&spot.category).map_or(
            Normalised {
                value_norm: 1.0,
                base: spot.value,
            },
            |stats| Normalised {
                value_norm: stats.normalise(spot.value),
                base: stats.median,
            },
        )
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    reason = "the median averages the two middle values of an even-length slice"
)]
fn median_of_sorted(sorted: &[f64]) -> Option<f64> {
    let mid = sorted.len() / 2;
    if sorted.len().is_multiple_of(2) {
        let lower = sorted.get(mid.checked_sub(1)?)?;
        let upper = sorted.get(mid)?;
        Some((lower + upper) / 2.0)
    } else {
        sorted.get(mid).copied()
    }
}
