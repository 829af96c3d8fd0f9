//! Recommend command implementation for the happyspot CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use geo::Coord;
use happyspot_core::{Mood, ScoreRequest};
use happyspot_scorer::{
    HappinessScorer, RecommendRequest, Recommendations, Recommender, ScorerConfig,
};
use log::warn;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_RECOMMEND_DATASET, ARG_RECOMMEND_LAT, ARG_RECOMMEND_LIMIT, ARG_RECOMMEND_LON,
    ARG_RECOMMEND_MOOD, ARG_RECOMMEND_NAME, ARG_RECOMMEND_SURVEY_MOOD, CliError,
    ENV_RECOMMEND_DATASET, require_file, write_json,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score a cached spot dataset for a mood and print the \
                 recommended spots with a map centre. Options can come from \
                 CLI flags, configuration files, or environment variables.",
    about = "Recommend spots for a mood"
)]
#[ortho_config(prefix = "HAPPYSPOT")]
pub(crate) struct RecommendArgs {
    /// Path to the JSON spot cache.
    #[arg(long = ARG_RECOMMEND_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Primary mood, as a label or slug (defaults to relax).
    #[arg(long = ARG_RECOMMEND_MOOD, value_name = "mood")]
    #[serde(default)]
    pub(crate) mood: Option<String>,
    /// Survey-derived mood blended into the primary weights.
    #[arg(long = ARG_RECOMMEND_SURVEY_MOOD, value_name = "mood")]
    #[serde(default)]
    pub(crate) survey_mood: Option<String>,
    /// Visitor latitude in degrees.
    #[arg(long = ARG_RECOMMEND_LAT, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Visitor longitude in degrees.
    #[arg(long = ARG_RECOMMEND_LON, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lon: Option<f64>,
    /// Present only these spots, in the given order. Repeatable.
    #[arg(long = ARG_RECOMMEND_NAME, value_name = "name")]
    #[serde(default)]
    pub(crate) names: Vec<String>,
    /// Maximum number of spots when no names are given.
    #[arg(long = ARG_RECOMMEND_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendConfig {
    pub(crate) dataset: Utf8PathBuf,
    pub(crate) mood: Mood,
    pub(crate) survey_mood: Option<Mood>,
    pub(crate) location: Option<Coord<f64>>,
    pub(crate) names: Vec<String>,
    pub(crate) limit: Option<usize>,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_file(&self.dataset, ARG_RECOMMEND_DATASET)
    }

    pub(crate) fn request(&self) -> RecommendRequest {
        let score = ScoreRequest::new(self.mood)
            .with_survey_mood(self.survey_mood)
            .with_user_location(self.location);
        let request = RecommendRequest::new(self.mood)
            .with_score(score)
            .with_names(self.names.clone());
        match self.limit {
            Some(limit) => request.with_limit(limit),
            None => request,
        }
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let dataset = args.dataset.ok_or(CliError::MissingArgument {
            field: ARG_RECOMMEND_DATASET,
            env: ENV_RECOMMEND_DATASET,
        })?;
        let mood = args
            .mood
            .as_deref()
            .map(str::parse::<Mood>)
            .transpose()?
            .unwrap_or_default();
        let survey_mood = args.survey_mood.as_deref().and_then(parse_survey_mood);
        let location = match (args.lat, args.lon) {
            (Some(lat), Some(lon)) => Some(Coord { x: lon, y: lat }),
            (None, None) => None,
            (Some(_), None) => {
                return Err(CliError::IncompleteLocation {
                    present: ARG_RECOMMEND_LAT,
                    missing: ARG_RECOMMEND_LON,
                });
            }
            (None, Some(_)) => {
                return Err(CliError::IncompleteLocation {
                    present: ARG_RECOMMEND_LON,
                    missing: ARG_RECOMMEND_LAT,
                });
            }
        };
        Ok(Self {
            dataset,
            mood,
            survey_mood,
            location,
            names: args.names,
            limit: args.limit,
        })
    }
}

/// An unrecognised survey mood is treated as absent.
fn parse_survey_mood(raw: &str) -> Option<Mood> {
    match raw.parse::<Mood>() {
        Ok(mood) => Some(mood),
        Err(err) => {
            warn!("ignoring survey mood: {err}");
            None
        }
    }
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let recommendations = execute_recommend(&config)?;
    write_json(writer, &recommendations)
}

pub(crate) fn execute_recommend(config: &RecommendConfig) -> Result<Recommendations, CliError> {
    let dataset = happyspot_data::read_cache(&config.dataset)?;
    let recommender = Recommender::new(dataset, HappinessScorer::new(ScorerConfig::default()));
    Ok(recommender.recommend(&config.request()))
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
