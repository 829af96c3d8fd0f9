//! The immutable, shared spot table.
//!
//! A [`Dataset`] is assembled once and then handed to every scoring call.
//! Cloning is cheap: the rows live behind an `Arc` and are never mutated, so
//! concurrent callers can share one table while each scoring call produces
//! its own derived copy.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::{Category, Spot};

/// Immutable collection of spots.
///
/// # Examples
/// ```
/// use happyspot_core::{Category, Dataset, Spot};
///
/// let dataset = Dataset::from_spots([
///     Spot::from_lat_lon("A", Category::Parks, 25.0, 121.5, 1.0),
///     Spot::from_lat_lon("B", Category::Air, 25.1, 121.6, 14.0),
/// ]);
/// assert_eq!(dataset.len(), 2);
/// assert!(dataset.find_by_name("B").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<Spot>", into = "Vec<Spot>")
)]
pub struct Dataset {
    spots: Arc<[Spot]>,
}

impl Dataset {
    /// Construct an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect spots into a dataset, preserving their order.
    pub fn from_spots<I>(spots: I) -> Self
    where
        I: IntoIterator<Item = Spot>,
    {
        Self {
            spots: spots.into_iter().collect(),
        }
    }

    /// Borrow the rows.
    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    /// Iterate over the rows in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Spot> {
        self.spots.iter()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.spots.len()
    }

    /// Report whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    /// First spot carrying `name`, if any.
    pub fn find_by_name(&self, name: &str) -> Option<&Spot> {
        self.spots.iter().find(|spot| spot.name == name)
    }

    /// Distinct categories present in the dataset.
    pub fn categories(&self) -> BTreeSet<&Category> {
        self.spots.iter().map(|spot| &spot.category).collect()
    }
}

impl From<Vec<Spot>> for Dataset {
    fn from(spots: Vec<Spot>) -> Self {
        Self {
            spots: spots.into(),
        }
    }
}

impl From<Dataset> for Vec<Spot> {
    fn from(dataset: Dataset) -> Self {
        dataset.spots.to_vec()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Spot;
    type IntoIter = std::slice::Iter<'a, Spot>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
