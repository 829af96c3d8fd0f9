//! Tunables for the happiness scorer.
#![forbid(unsafe_code)]

use crate::SURVEY_BLEND;

/// Default decay length of the informational distance score, in kilometres.
pub const DEFAULT_DISTANCE_DECAY_KM: f64 = 2.0;

/// Default number of recommendations kept when no names are requested.
pub const DEFAULT_LIMIT: usize = 10;

/// Explicit configuration passed into [`HappinessScorer`](crate::HappinessScorer).
///
/// The scorer holds no other state, so two scorers built from equal
/// configurations always agree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScorerConfig {
    /// Share of the survey mood when blending weights.
    pub survey_blend: f64,
    /// Distance at which the proximity score falls to `100 / e`.
    pub distance_decay_km: f64,
    /// Top-N cut-off for unnamed recommendation requests.
    pub limit: usize,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            survey_blend: SURVEY_BLEND,
            distance_decay_km: DEFAULT_DISTANCE_DECAY_KM,
            limit: DEFAULT_LIMIT,
        }
    }
}
