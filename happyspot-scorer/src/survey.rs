//! Rule-based resolution of the four-question survey into a mood.
//!
//! Each answer awards points to one or more moods; the mood with the most
//! points wins and ties go to the mood listed first in [`Mood::ALL`].
#![forbid(unsafe_code)]

use happyspot_core::Mood;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::SurveyError;

/// Number of questions in the survey.
pub const SURVEY_QUESTIONS: usize = 4;

/// Noise answer favouring quiet places.
pub const QUIET_PREFERENCE: &str = "quiet_pref_quiet";
/// Activity answer favouring static activities.
pub const STATIC_ACTIVITY: &str = "activity_static";
/// Stress answer reporting high stress.
pub const HIGH_STRESS: &str = "stress_high";
/// Stress answer reporting medium stress.
pub const MEDIUM_STRESS: &str = "stress_medium";
/// Experience answer for solitary reflection, counted towards urban strolls.
pub const SOLITARY_REFLECTION: &str = "獨自沉澱";

/// Raw survey submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SurveyAnswers {
    /// Answers in question order: experience, noise, activity, stress.
    pub answers: Vec<String>,
}

/// Survey outcome as presented to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SurveyOutcome {
    /// The resolved mood.
    pub mood: Mood,
}

impl SurveyAnswers {
    /// Resolve these answers into a mood.
    ///
    /// # Errors
    /// Returns [`SurveyError::InsufficientAnswers`] when fewer than four
    /// answers were supplied.
    pub fn resolve(&self) -> Result<SurveyOutcome, SurveyError> {
        resolve_survey_mood(&self.answers).map(|mood| SurveyOutcome { mood })
    }
}

#[derive(Debug, Default)]
struct Tally {
    points: [u32; 4],
}

impl Tally {
    fn award(&mut self, mood: Mood, points: u32) {
        let slot = match mood {
            Mood::Relax => self.points.get_mut(0),
            Mood::UrbanStroll => self.points.get_mut(1),
            Mood::Energize => self.points.get_mut(2),
            Mood::CultureExplore => self.points.get_mut(3),
        };
        if let Some(total) = slot {
            *total = total.saturating_add(points);
        }
    }

    fn winner(&self) -> Mood {
        let mut best = Mood::default();
        let mut best_points = 0_u32;
        for (mood, &points) in Mood::ALL.into_iter().zip(self.points.iter()) {
            if points > best_points {
                best = mood;
                best_points = points;
            }
        }
        best
    }
}

/// Resolve `[experience, noise, activity, stress]` answers into a mood.
///
/// Answers beyond the fourth are ignored.
///
/// # Errors
/// Returns [`SurveyError::InsufficientAnswers`] when fewer than four answers
/// were supplied.
///
/// # Examples
/// ```
/// use happyspot_core::Mood;
/// use happyspot_scorer::resolve_survey_mood;
///
/// let mood = resolve_survey_mood(&[
///     "療癒放鬆",
///     "quiet_pref_quiet",
///     "activity_static",
///     "stress_high",
/// ])
/// .expect("four answers");
/// assert_eq!(mood, Mood::Relax);
/// ```
pub fn resolve_survey_mood<S>(answers: &[S]) -> Result<Mood, SurveyError>
where
    S: AsRef<str>,
{
    let [experience, noise, activity, stress, ..] = answers else {
        return Err(SurveyError::InsufficientAnswers {
            expected: SURVEY_QUESTIONS,
            found: answers.len(),
        });
    };

    let mut tally = Tally::default();
    if let Some(mood) = experience_mood(experience.as_ref()) {
        tally.award(mood, 50);
    }

    if noise.as_ref() == QUIET_PREFERENCE {
        tally.award(Mood::Relax, 20);
        tally.award(Mood::UrbanStroll, 20);
    } else {
        tally.award(Mood::Energize, 15);
        tally.award(Mood::CultureExplore, 10);
    }

    if activity.as_ref() == STATIC_ACTIVITY {
        tally.award(Mood::Relax, 15);
        tally.award(Mood::UrbanStroll, 15);
        tally.award(Mood::CultureExplore, 10);
    } else {
        tally.award(Mood::Energize, 30);
    }

    match stress.as_ref() {
        HIGH_STRESS => tally.award(Mood::Relax, 25),
        MEDIUM_STRESS => {
            tally.award(Mood::Relax, 10);
            tally.award(Mood::UrbanStroll, 10);
        }
        _ => {
            tally.award(Mood::Energize, 15);
            tally.award(Mood::CultureExplore, 10);
        }
    }

    let mood = tally.winner();
    debug!("survey points {:?} resolved to {mood}", tally.points);
    Ok(mood)
}

fn experience_mood(answer: &str) -> Option<Mood> {
    if answer == SOLITARY_REFLECTION {
        return Some(Mood::UrbanStroll);
    }
    answer.parse().ok()
}
