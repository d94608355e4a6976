use std::time::Duration;

const DEFAULT_RECORDING_MS: u64 = 3_000;
const DEFAULT_GRADING_MS: u64 = 1_500;
const DEFAULT_REDIRECT_MS: u64 = 3_000;

/// Delays that stand in for recording, grading and saving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssessmentTimings {
    pub recording: Duration,
    pub grading: Duration,
    pub redirect: Duration,
}

impl Default for AssessmentTimings {
    fn default() -> Self {
        Self::from_millis(DEFAULT_RECORDING_MS, DEFAULT_GRADING_MS, DEFAULT_REDIRECT_MS)
    }
}

impl AssessmentTimings {
    #[must_use]
    pub fn from_millis(recording: u64, grading: u64, redirect: u64) -> Self {
        Self {
            recording: Duration::from_millis(recording),
            grading: Duration::from_millis(grading),
            redirect: Duration::from_millis(redirect),
        }
    }

    /// No waiting at all; used by tests and scripted runs.
    #[must_use]
    pub fn immediate() -> Self {
        Self::from_millis(0, 0, 0)
    }
}
