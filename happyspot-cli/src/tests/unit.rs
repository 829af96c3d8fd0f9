//! Focused unit tests covering the survey, arrive and assemble commands.

use super::helpers::Workspace;
use super::*;
use crate::arrive::ArriveArgs;
use crate::assemble::{AssembleArgs, AssembleConfig, execute_assemble};
use crate::survey::SurveyArgs;
use happyspot_core::Mood;
use happyspot_data::DEFAULT_ART_SEED;
use rstest::rstest;

fn survey_output(answers: &[&str]) -> Result<serde_json::Value, CliError> {
    let args = SurveyArgs {
        answers: answers.iter().map(|answer| (*answer).to_owned()).collect(),
    };
    let mut buffer = Vec::new();
    run_survey_with(&args, &mut buffer)?;
    Ok(serde_json::from_slice(&buffer).expect("survey output is JSON"))
}

#[rstest]
#[case(&["療癒放鬆", "quiet_pref_quiet", "activity_static", "stress_high"], Mood::Relax)]
#[case(&["活力充電", "loud", "activity_dynamic", "stress_low"], Mood::Energize)]
#[case(&["獨自沉澱", "quiet_pref_quiet", "activity_static", "stress_medium"], Mood::UrbanStroll)]
fn survey_prints_the_resolved_mood(#[case] answers: &[&str], #[case] expected: Mood) {
    let output = survey_output(answers).expect("survey succeeds");
    assert_eq!(output, serde_json::json!({ "mood": expected.as_str() }));
}

#[rstest]
fn survey_rejects_short_answer_lists() {
    let err = survey_output(&["療癒放鬆", "quiet_pref_quiet"]).expect_err("two answers");
    match err {
        CliError::Survey(_) => {}
        other => panic!("expected Survey, found {other:?}"),
    }
}

#[rstest]
fn survey_answers_parse_as_positionals() {
    let cli = Cli::try_parse_from([
        "happyspot",
        "survey",
        "文化探索",
        "quiet_pref_quiet",
        "activity_static",
        "stress_low",
    ])
    .expect("parse survey");
    match cli.command {
        Command::Survey(args) => assert_eq!(args.answers.len(), 4),
        other => panic!("expected survey command, found {other:?}"),
    }
}

#[rstest]
#[case(25.0747, 121.5209, true)]
#[case(25.0752, 121.5209, true)]
#[case(25.0760, 121.5209, false)]
fn arrive_applies_the_arrival_radius(#[case] lat: f64, #[case] lon: f64, #[case] arrived: bool) {
    let args = ArriveArgs {
        lat,
        lon,
        target_lat: 25.0747,
        target_lon: 121.5209,
    };
    assert_eq!(args.report().arrived, arrived);
}

#[rstest]
fn arrive_prints_rounded_metres() {
    let cli = Cli::try_parse_from([
        "happyspot",
        "arrive",
        "--lat",
        "25.0",
        "--lon",
        "121.5",
        "--target-lat",
        "25.001",
        "--target-lon",
        "121.5",
    ])
    .expect("parse arrive");
    let mut buffer = Vec::new();
    run_with(cli, &mut buffer).expect("arrive succeeds");

    let output: serde_json::Value = serde_json::from_slice(&buffer).expect("arrive JSON");
    assert_eq!(output["distance_metres"], serde_json::json!(111.0));
    assert_eq!(output["arrived"], serde_json::json!(false));
}

#[rstest]
fn converting_assemble_without_feeds_errors() {
    let err = AssembleConfig::try_from(AssembleArgs::default()).expect_err("feeds are required");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_ASSEMBLE_FEEDS);
            assert_eq!(env, ENV_ASSEMBLE_FEEDS);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn assemble_config_defaults_cache_and_seed() {
    let args = AssembleArgs {
        feeds: Some("feeds".into()),
        ..AssembleArgs::default()
    };
    let config = AssembleConfig::try_from(args).expect("config builds");
    assert_eq!(config.cache.as_str(), DEFAULT_CACHE_FILE);
    assert_eq!(config.seed, DEFAULT_ART_SEED);
}

#[rstest]
fn assemble_reports_missing_feed_directories() {
    let workspace = Workspace::new();
    let config = AssembleConfig {
        feeds: workspace.root().join("no-such-feeds"),
        cache: workspace.root().join("cache.json"),
        seed: 1,
    };
    let err = execute_assemble(&config).expect_err("feed directory is missing");
    match err {
        CliError::OpenFeeds { path, .. } => assert_eq!(path, config.feeds),
        other => panic!("expected OpenFeeds, found {other:?}"),
    }
}

#[rstest]
fn assemble_counts_rows_per_category() {
    let workspace = Workspace::new();
    let config = AssembleConfig {
        feeds: workspace.write_snapshots(),
        cache: workspace.root().join("cache/spots.json"),
        seed: 3,
    };

    let report = execute_assemble(&config).expect("assemble succeeds");

    assert_eq!(report.rows, 4);
    assert_eq!(report.origin, "assembled");
    assert_eq!(report.categories.get("parks"), Some(&2));
    assert_eq!(report.categories.get("art_events"), Some(&1));
    assert_eq!(report.categories.get("air"), Some(&1));
    assert!(happyspot_fs::file_is_file(&config.cache).expect("stat cache"));
}
