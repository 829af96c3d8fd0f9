//! Survey command: resolve questionnaire answers into a mood.

use std::io::Write;

use clap::Parser;
use happyspot_scorer::{SurveyOutcome, resolve_survey_mood};

use crate::{CliError, write_json};

/// CLI arguments for the `survey` subcommand.
#[derive(Debug, Clone, Parser, Default)]
#[command(
    long_about = "Resolve the four survey answers (experience, noise, \
                 activity, stress) into the mood they point to.",
    about = "Resolve survey answers into a mood"
)]
pub(crate) struct SurveyArgs {
    /// Answers in question order.
    #[arg(value_name = "answer", num_args = 0..)]
    pub(crate) answers: Vec<String>,
}

pub(crate) fn run_survey_with(args: &SurveyArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let mood = resolve_survey_mood(&args.answers)?;
    write_json(writer, &SurveyOutcome { mood })
}
