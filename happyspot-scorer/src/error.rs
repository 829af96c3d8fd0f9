//! Error types raised outside the infallible scoring path.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised while resolving a survey into a mood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurveyError {
    /// Fewer answers were supplied than the questionnaire has questions.
    #[error("survey needs {expected} answers, got {found}")]
    InsufficientAnswers {
        /// Number of questions in the survey.
        expected: usize,
        /// Number of answers received.
        found: usize,
    },
}
