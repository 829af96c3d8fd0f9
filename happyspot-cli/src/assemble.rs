//! Assemble command: build or reuse the spot cache from feed snapshots.

use std::collections::BTreeMap;
use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use happyspot_data::{DEFAULT_ART_SEED, DatasetOrigin, DirectoryFeedSource, load_or_assemble};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_ASSEMBLE_CACHE, ARG_ASSEMBLE_FEEDS, ARG_ASSEMBLE_SEED, CliError, DEFAULT_CACHE_FILE,
    ENV_ASSEMBLE_FEEDS, write_json,
};

/// CLI arguments for the `assemble` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Read feed snapshots (<category>.json) from a directory and \
                 write the combined spot cache. An existing valid cache is \
                 reused as is.",
    about = "Build the spot cache from feed snapshots"
)]
#[ortho_config(prefix = "HAPPYSPOT")]
pub(crate) struct AssembleArgs {
    /// Directory holding the feed snapshots.
    #[arg(long = ARG_ASSEMBLE_FEEDS, value_name = "dir")]
    #[serde(default)]
    pub(crate) feeds: Option<Utf8PathBuf>,
    /// Path of the spot cache to read or write.
    #[arg(long = ARG_ASSEMBLE_CACHE, value_name = "path")]
    #[serde(default)]
    pub(crate) cache: Option<Utf8PathBuf>,
    /// Seed for the art event placement jitter.
    #[arg(long = ARG_ASSEMBLE_SEED, value_name = "seed")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

impl AssembleArgs {
    pub(crate) fn into_config(self) -> Result<AssembleConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        AssembleConfig::try_from(merged)
    }
}

/// Resolved `assemble` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AssembleConfig {
    pub(crate) feeds: Utf8PathBuf,
    pub(crate) cache: Utf8PathBuf,
    pub(crate) seed: u64,
}

impl TryFrom<AssembleArgs> for AssembleConfig {
    type Error = CliError;

    fn try_from(args: AssembleArgs) -> Result<Self, Self::Error> {
        let feeds = args.feeds.ok_or(CliError::MissingArgument {
            field: ARG_ASSEMBLE_FEEDS,
            env: ENV_ASSEMBLE_FEEDS,
        })?;
        Ok(Self {
            feeds,
            cache: args
                .cache
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_CACHE_FILE)),
            seed: args.seed.unwrap_or(DEFAULT_ART_SEED),
        })
    }
}

/// Summary printed after assembling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct AssemblyReport {
    /// Cache file that was read or written.
    pub(crate) cache: Utf8PathBuf,
    /// `"cache"` when the cache was reused, `"assembled"` otherwise.
    pub(crate) origin: String,
    /// Total number of spots.
    pub(crate) rows: usize,
    /// Spot count per category.
    pub(crate) categories: BTreeMap<String, usize>,
}

pub(crate) fn execute_assemble(config: &AssembleConfig) -> Result<AssemblyReport, CliError> {
    let source =
        DirectoryFeedSource::open(&config.feeds).map_err(|source| CliError::OpenFeeds {
            path: config.feeds.clone(),
            source,
        })?;
    let loaded = load_or_assemble(&config.cache, &source, config.seed);

    let mut categories = BTreeMap::new();
    for spot in loaded.dataset.iter() {
        *categories
            .entry(spot.category.as_str().to_owned())
            .or_insert(0) += 1;
    }
    let origin = match loaded.origin {
        DatasetOrigin::Cache => "cache",
        DatasetOrigin::Assembled => "assembled",
    };
    Ok(AssemblyReport {
        cache: config.cache.clone(),
        origin: origin.to_owned(),
        rows: loaded.dataset.len(),
        categories,
    })
}

pub(crate) fn run_assemble_with(
    args: AssembleArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = execute_assemble(&config)?;
    write_json(writer, &report)
}
