use chrono::{DateTime, Utc};
use tracing::debug;

use assessment_core::AssessmentError;
use assessment_core::model::{
    Answer, AnswerSet, AssessmentPath, AssessmentResult, Question, ReviewItem, build_questions,
    build_review,
};

use super::progress::FlowProgress;
use crate::error::FlowError;

//
// ─── PHASES AND OUTCOMES ───────────────────────────────────────────────────────
//

/// Where the assessment is in its linear lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowPhase {
    Answering,
    /// Last answer committed; waiting out the grading delay.
    Submitting,
    Results,
    /// Finished; the caller redirects after its delay.
    Completed,
}

/// What `advance` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// No tentative answer; nothing changed.
    NoSelection,
    /// Moved on to the question at `index`.
    Next { index: usize },
    /// The last answer was committed and the flow entered `Submitting`.
    Submitting,
}

/// Identifies one simulated recording so a late timer can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordingTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordingChange {
    /// Recording began; hand the ticket back to `complete_recording` when the timer fires.
    Started(RecordingTicket),
    /// Stopped early; the sentinel answer is already selected.
    Stopped,
}

//
// ─── FLOW ──────────────────────────────────────────────────────────────────────
//

/// In-memory controller for a single assessment run.
///
/// Steps through an immutable question list, keeps one tentative answer for
/// the displayed question, and grades the committed answers once.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentFlow {
    path: AssessmentPath,
    questions: Vec<Question>,
    current: usize,
    tentative: Option<Answer>,
    answers: AnswerSet,
    phase: FlowPhase,
    recording: Option<RecordingTicket>,
    next_ticket: u64,
    result: Option<AssessmentResult>,
}

impl AssessmentFlow {
    /// Starts a flow over the sample questions generated for `path`.
    #[must_use]
    pub fn new(path: AssessmentPath) -> Self {
        let questions = build_questions(&path);
        Self::from_parts(path, questions)
    }

    /// Starts a flow over caller-supplied questions.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::Assessment` when `questions` is empty.
    pub fn with_questions(
        path: AssessmentPath,
        questions: Vec<Question>,
    ) -> Result<Self, FlowError> {
        if questions.is_empty() {
            return Err(AssessmentError::NoQuestions.into());
        }
        Ok(Self::from_parts(path, questions))
    }

    fn from_parts(path: AssessmentPath, questions: Vec<Question>) -> Self {
        Self {
            path,
            questions,
            current: 0,
            tentative: None,
            answers: AnswerSet::new(),
            phase: FlowPhase::Answering,
            recording: None,
            next_ticket: 0,
            result: None,
        }
    }

    #[must_use]
    pub fn path(&self) -> &AssessmentPath {
        &self.path
    }

    #[must_use]
    pub fn phase(&self) -> FlowPhase {
        self.phase
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current + 1 >= self.questions.len()
    }

    #[must_use]
    pub fn tentative(&self) -> Option<&Answer> {
        self.tentative.as_ref()
    }

    #[must_use]
    pub fn is_recording(&self) -> bool {
        self.recording.is_some()
    }

    #[must_use]
    pub fn result(&self) -> Option<&AssessmentResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn progress(&self) -> FlowProgress {
        FlowProgress {
            index: self.current,
            total: self.questions.len(),
        }
    }

    /// Review rows for every question, in order.
    #[must_use]
    pub fn review(&self) -> Vec<ReviewItem> {
        build_review(&self.questions, &self.answers)
    }

    /// Replaces the tentative answer for the displayed question.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::NotAnswering` outside the answering phase.
    pub fn select_answer(&mut self, answer: Answer) -> Result<(), FlowError> {
        self.ensure_answering()?;
        debug!(question = self.current, answer = %answer, "answer selected");
        self.tentative = Some(answer);
        Ok(())
    }

    /// Toggles the simulated recording for the displayed voice question.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::NotAnswering` outside the answering phase and
    /// `FlowError::NotVoiceQuestion` for multiple-choice questions.
    pub fn record_voice_answer(&mut self) -> Result<RecordingChange, FlowError> {
        self.ensure_answering()?;
        if !self.current_question().is_some_and(Question::is_voice) {
            return Err(FlowError::NotVoiceQuestion);
        }

        if self.recording.take().is_some() {
            debug!(question = self.current, "recording stopped early");
            self.tentative = Some(Answer::voice_recorded());
            return Ok(RecordingChange::Stopped);
        }

        let ticket = RecordingTicket(self.next_ticket);
        self.next_ticket += 1;
        self.recording = Some(ticket);
        debug!(question = self.current, ticket = ticket.0, "recording started");
        Ok(RecordingChange::Started(ticket))
    }

    /// Called when a recording timer fires.
    ///
    /// Returns `false` and changes nothing when the ticket is no longer the
    /// active recording (stopped early, or the flow moved on).
    pub fn complete_recording(&mut self, ticket: RecordingTicket) -> bool {
        if self.recording != Some(ticket) {
            debug!(ticket = ticket.0, "ignoring stale recording timer");
            return false;
        }
        self.recording = None;
        self.tentative = Some(Answer::voice_recorded());
        true
    }

    /// Commits the tentative answer and moves forward.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::NotAnswering` outside the answering phase.
    pub fn advance(&mut self) -> Result<AdvanceOutcome, FlowError> {
        self.ensure_answering()?;
        let Some(answer) = self.tentative.take() else {
            return Ok(AdvanceOutcome::NoSelection);
        };
        let Some(question_id) = self.current_question().map(Question::id) else {
            return Ok(AdvanceOutcome::NoSelection);
        };

        self.answers.insert(question_id, answer);
        self.recording = None;

        if self.is_last_question() {
            self.phase = FlowPhase::Submitting;
            debug!(answered = self.answers.len(), "assessment submitted");
            Ok(AdvanceOutcome::Submitting)
        } else {
            self.current += 1;
            debug!(question = self.current, "advanced");
            Ok(AdvanceOutcome::Next {
                index: self.current,
            })
        }
    }

    /// Grades the committed answers and shows results.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::NotSubmitting` unless the flow is `Submitting`, so
    /// a result is only ever computed once.
    pub fn reveal_results(
        &mut self,
        completed_at: DateTime<Utc>,
    ) -> Result<&AssessmentResult, FlowError> {
        if self.phase != FlowPhase::Submitting {
            return Err(FlowError::NotSubmitting(self.phase));
        }
        self.phase = FlowPhase::Results;
        let result = self.result.get_or_insert_with(|| {
            AssessmentResult::grade(&self.questions, &self.answers, completed_at)
        });
        Ok(result)
    }

    /// Marks the assessment complete. Nothing is persisted.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::NotOnResults` unless results are shown.
    pub fn finish(&mut self) -> Result<(), FlowError> {
        if self.phase != FlowPhase::Results {
            return Err(FlowError::NotOnResults(self.phase));
        }
        self.phase = FlowPhase::Completed;
        Ok(())
    }

    fn ensure_answering(&self) -> Result<(), FlowError> {
        if self.phase == FlowPhase::Answering {
            Ok(())
        } else {
            Err(FlowError::NotAnswering(self.phase))
        }
    }
}
