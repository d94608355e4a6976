use thiserror::Error;

/// Errors raised while building or reading an assessment.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssessmentError {
    #[error("an assessment needs at least one question")]
    NoQuestions,
    #[error("not an assessment path: {raw}")]
    NotAssessmentPath { raw: String },
    #[error("invalid assessment url: {raw}")]
    InvalidUrl { raw: String },
}
