//! Command-line interface for the happyspot recommendation engine.
#![forbid(unsafe_code)]

use std::io::Write;

use camino::Utf8Path;
use clap::{Parser, Subcommand};
use serde::Serialize;

mod arrive;
mod assemble;
mod error;
mod recommend;
mod survey;

use arrive::{ArriveArgs, run_arrive_with};
use assemble::{AssembleArgs, run_assemble_with};
pub use error::CliError;
use recommend::{RecommendArgs, run_recommend_with};
use survey::{SurveyArgs, run_survey_with};

pub(crate) const ARG_RECOMMEND_DATASET: &str = "dataset";
pub(crate) const ARG_RECOMMEND_MOOD: &str = "mood";
pub(crate) const ARG_RECOMMEND_SURVEY_MOOD: &str = "survey-mood";
pub(crate) const ARG_RECOMMEND_LAT: &str = "lat";
pub(crate) const ARG_RECOMMEND_LON: &str = "lon";
pub(crate) const ARG_RECOMMEND_NAME: &str = "name";
pub(crate) const ARG_RECOMMEND_LIMIT: &str = "limit";
pub(crate) const ENV_RECOMMEND_DATASET: &str = "HAPPYSPOT_CMDS_RECOMMEND_DATASET";

pub(crate) const ARG_ASSEMBLE_FEEDS: &str = "feeds";
pub(crate) const ARG_ASSEMBLE_CACHE: &str = "cache";
pub(crate) const ARG_ASSEMBLE_SEED: &str = "seed";
pub(crate) const ENV_ASSEMBLE_FEEDS: &str = "HAPPYSPOT_CMDS_ASSEMBLE_FEEDS";

/// Cache file used by `assemble` when `--cache` is not given.
pub(crate) const DEFAULT_CACHE_FILE: &str = "spots_cache.json";

/// Run the happyspot CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    run_with(cli, &mut stdout)
}

fn run_with(cli: Cli, writer: &mut dyn Write) -> Result<(), CliError> {
    match cli.command {
        Command::Recommend(args) => run_recommend_with(args, writer),
        Command::Survey(args) => run_survey_with(&args, writer),
        Command::Arrive(args) => run_arrive_with(&args, writer),
        Command::Assemble(args) => run_assemble_with(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "happyspot",
    about = "Mood-driven spot recommendations over Taipei open data",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a cached dataset and print recommendations for a mood.
    Recommend(RecommendArgs),
    /// Resolve four survey answers into a mood.
    Survey(SurveyArgs),
    /// Check whether a visitor has reached a spot.
    Arrive(ArriveArgs),
    /// Build the spot cache from feed snapshots.
    Assemble(AssembleArgs),
}

/// Reject paths that are not existing regular files.
fn require_file(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match happyspot_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::MissingSourceFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Write `value` as pretty JSON followed by a newline.
fn write_json<T>(writer: &mut dyn Write, value: &T) -> Result<(), CliError>
where
    T: Serialize + ?Sized,
{
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
