use std::time::Duration;

use tracing::info;

use assessment_core::model::{AssessmentPath, AssessmentResult};

use super::flow::{AssessmentFlow, FlowPhase};
use super::timings::AssessmentTimings;
use crate::Clock;
use crate::error::FlowError;

/// Orchestrates assessment flows and the delays that simulate work.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssessmentService {
    clock: Clock,
    timings: AssessmentTimings,
}

impl AssessmentService {
    #[must_use]
    pub fn new(clock: Clock, timings: AssessmentTimings) -> Self {
        Self { clock, timings }
    }

    /// Start a new assessment for the given path.
    #[must_use]
    pub fn start(&self, path: AssessmentPath) -> AssessmentFlow {
        info!(
            subject = path.subject(),
            topic = path.topic(),
            subtopic = path.subtopic(),
            "assessment started"
        );
        AssessmentFlow::new(path)
    }

    /// Wait for the recording delay. The caller hands the ticket back to the flow afterwards.
    pub async fn wait_recording(&self) {
        pause(self.timings.recording).await;
    }

    /// Wait for the grading delay only.
    pub async fn wait_grading(&self) {
        pause(self.timings.grading).await;
    }

    /// Wait for the redirect delay only.
    pub async fn wait_redirect(&self) {
        pause(self.timings.redirect).await;
    }

    /// Grade a submitted assessment without waiting.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::NotSubmitting` if the flow was not submitted.
    pub fn reveal(&self, flow: &mut AssessmentFlow) -> Result<AssessmentResult, FlowError> {
        let result = flow.reveal_results(self.clock.now())?.clone();
        info!(
            score = result.score().percent(),
            band = ?result.band(),
            answered = result.answered(),
            total = result.total(),
            "assessment graded"
        );
        Ok(result)
    }

    /// Wait for the grading delay, then grade.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::NotSubmitting` if the flow was not submitted.
    pub async fn grade(&self, flow: &mut AssessmentFlow) -> Result<AssessmentResult, FlowError> {
        if flow.phase() != FlowPhase::Submitting {
            return Err(FlowError::NotSubmitting(flow.phase()));
        }
        self.wait_grading().await;
        self.reveal(flow)
    }

    /// Complete the assessment. Results are not saved anywhere.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::NotOnResults` unless results are shown.
    pub fn finish(&self, flow: &mut AssessmentFlow) -> Result<(), FlowError> {
        flow.finish()?;
        info!(subtopic = flow.path().subtopic(), "assessment completed");
        Ok(())
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
