//! Error types emitted by the happyspot CLI.
//!
//! Keep this enum small; every command helper returns `Result<_, CliError>`
//! and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use happyspot_core::MoodParseError;
use happyspot_data::CacheError;
use happyspot_scorer::SurveyError;
use thiserror::Error;

/// Errors emitted by the happyspot CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// Only one half of a coordinate pair was supplied.
    #[error("--{present} requires --{missing}")]
    IncompleteLocation {
        present: &'static str,
        missing: &'static str,
    },
    /// A referenced input path does not exist on disk or is not a file.
    #[error("{field} path {path:?} does not exist or is not a file")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The primary mood is not one of the four moods.
    #[error(transparent)]
    InvalidMood(#[from] MoodParseError),
    /// The survey answers could not be resolved.
    #[error(transparent)]
    Survey(#[from] SurveyError),
    /// Reading the spot dataset failed.
    #[error("failed to load dataset: {0}")]
    ReadDataset(#[from] CacheError),
    /// The feed snapshot directory could not be opened.
    #[error("failed to open feed directory {path:?}: {source}")]
    OpenFeeds {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
