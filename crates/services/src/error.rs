//! Shared error types for the services crate.

use thiserror::Error;

use assessment_core::AssessmentError;

use crate::assessment::FlowPhase;

/// Errors emitted by `AssessmentFlow` when an operation does not fit its phase.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FlowError {
    #[error("assessment is not accepting answers (phase: {0:?})")]
    NotAnswering(FlowPhase),
    #[error("assessment is not being submitted (phase: {0:?})")]
    NotSubmitting(FlowPhase),
    #[error("assessment results are not shown (phase: {0:?})")]
    NotOnResults(FlowPhase),
    #[error("current question does not take a voice response")]
    NotVoiceQuestion,
    #[error(transparent)]
    Assessment(#[from] AssessmentError),
}
