use assessment_core::model::{Answer, QuestionKind};
use services::{
    AdvanceOutcome, AssessmentFlow, AssessmentService, FlowPhase, RecordingChange,
    RecordingTicket,
};

use crate::views::ViewError;
use crate::vm::results_vm::{ResultsVm, map_results};

/// Name of the tutor persona shown in headings.
pub const TUTOR_NAME: &str = "Model B";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssessmentIntent {
    SelectOption(usize),
    ToggleRecording,
    Advance,
    Finish,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssessmentScreen {
    Question,
    Submitting,
    Results,
    Saved,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionCardVm {
    pub prompt: String,
    pub badge: &'static str,
    pub badge_class: &'static str,
    pub is_voice: bool,
    pub options: Vec<OptionVm>,
}

/// UI wrapper around an `AssessmentFlow`.
#[derive(Clone, Debug, PartialEq)]
pub struct AssessmentVm {
    flow: AssessmentFlow,
}

impl AssessmentVm {
    #[must_use]
    pub fn new(flow: AssessmentFlow) -> Self {
        Self { flow }
    }

    #[must_use]
    pub fn flow(&self) -> &AssessmentFlow {
        &self.flow
    }

    #[must_use]
    pub fn screen(&self) -> AssessmentScreen {
        match self.flow.phase() {
            FlowPhase::Answering => AssessmentScreen::Question,
            FlowPhase::Submitting => AssessmentScreen::Submitting,
            FlowPhase::Results => AssessmentScreen::Results,
            FlowPhase::Completed => AssessmentScreen::Saved,
        }
    }

    #[must_use]
    pub fn breadcrumb(&self) -> String {
        format!("Assessment: {}", self.flow.path().breadcrumb())
    }

    #[must_use]
    pub fn subtitle(&self) -> String {
        format!(
            "Testing your understanding of {}",
            self.flow.path().display_subtopic()
        )
    }

    #[must_use]
    pub fn counter_label(&self) -> String {
        let progress = self.flow.progress();
        format!("Question {} of {}", progress.number(), progress.total)
    }

    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        self.flow.progress().percent()
    }

    #[must_use]
    pub fn question_card(&self) -> Option<QuestionCardVm> {
        let question = self.flow.current_question()?;
        let selected = self.flow.tentative().and_then(Answer::option_index);
        let (badge_class, is_voice) = match question.kind() {
            QuestionKind::MultipleChoice => ("badge badge--mcq", false),
            QuestionKind::Voice => ("badge badge--voice", true),
        };
        let options = question
            .options()
            .iter()
            .enumerate()
            .map(|(index, label)| OptionVm {
                index,
                label: label.clone(),
                selected: selected == Some(index),
            })
            .collect();

        Some(QuestionCardVm {
            prompt: question.prompt().to_string(),
            badge: question.kind().label(),
            badge_class,
            is_voice,
            options,
        })
    }

    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.flow.tentative().is_some()
    }

    #[must_use]
    pub fn next_label(&self) -> &'static str {
        if self.flow.is_last_question() {
            "Submit Assessment"
        } else {
            "Next Question"
        }
    }

    #[must_use]
    pub fn is_recording(&self) -> bool {
        self.flow.is_recording()
    }

    #[must_use]
    pub fn recording_status(&self) -> &'static str {
        if self.flow.is_recording() {
            "Recording... Click to stop"
        } else if self.flow.tentative().is_some_and(Answer::is_voice_recording) {
            "Recording complete ✓"
        } else {
            "Click to start recording"
        }
    }

    #[must_use]
    pub fn results(&self) -> Option<ResultsVm> {
        self.flow
            .result()
            .map(|result| map_results(result, &self.flow.review()))
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` when the flow no longer accepts answers.
    pub fn select_option(&mut self, index: usize) -> Result<(), ViewError> {
        self.flow
            .select_answer(Answer::option(index))
            .map_err(|_| ViewError::Unknown)
    }

    /// Returns the ticket to complete when a recording was started.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Unknown` for non-voice questions or outside answering.
    pub fn toggle_recording(&mut self) -> Result<Option<RecordingTicket>, ViewError> {
        match self.flow.record_voice_answer() {
            Ok(RecordingChange::Started(ticket)) => Ok(Some(ticket)),
            Ok(RecordingChange::Stopped) => Ok(None),
            Err(_) => Err(ViewError::Unknown),
        }
    }

    pub fn complete_recording(&mut self, ticket: RecordingTicket) -> bool {
        self.flow.complete_recording(ticket)
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` when the flow no longer accepts answers.
    pub fn advance(&mut self) -> Result<AdvanceOutcome, ViewError> {
        self.flow.advance().map_err(|_| ViewError::Unknown)
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` unless the assessment was just submitted.
    pub fn reveal(&mut self, service: &AssessmentService) -> Result<(), ViewError> {
        service
            .reveal(&mut self.flow)
            .map(|_| ())
            .map_err(|_| ViewError::Unknown)
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` unless results are showing.
    pub fn finish(&mut self, service: &AssessmentService) -> Result<(), ViewError> {
        service
            .finish(&mut self.flow)
            .map_err(|_| ViewError::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assessment_core::model::AssessmentPath;
    use assessment_core::time::fixed_clock;
    use services::AssessmentTimings;

    fn vm() -> (AssessmentVm, AssessmentService) {
        let service = AssessmentService::new(fixed_clock(), AssessmentTimings::immediate());
        let flow = service.start(AssessmentPath::new("physics", "thermo-dynamics", "heat-flow"));
        (AssessmentVm::new(flow), service)
    }

    #[test]
    fn header_labels_use_display_forms() {
        let (vm, _) = vm();
        assert_eq!(
            vm.breadcrumb(),
            "Assessment: physics / thermo dynamics / heat flow"
        );
        assert_eq!(vm.subtitle(), "Testing your understanding of heat flow");
        assert_eq!(vm.counter_label(), "Question 1 of 5");
        assert_eq!(vm.next_label(), "Next Question");
        assert!(!vm.can_advance());
    }

    #[test]
    fn selected_option_is_marked() {
        let (mut vm, _) = vm();
        vm.select_option(2).unwrap();
        let card = vm.question_card().unwrap();
        assert_eq!(card.badge, "Multiple Choice");
        assert!(!card.is_voice);
        let selected: Vec<_> = card
            .options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.index)
            .collect();
        assert_eq!(selected, vec![2]);
        assert!(vm.can_advance());
    }

    #[test]
    fn recording_status_follows_toggle() {
        let (mut vm, _) = vm();
        vm.select_option(0).unwrap();
        vm.advance().unwrap();
        assert_eq!(vm.recording_status(), "Click to start recording");
        assert!(vm.question_card().unwrap().is_voice);

        let ticket = vm.toggle_recording().unwrap().expect("recording started");
        assert_eq!(vm.recording_status(), "Recording... Click to stop");
        assert!(vm.complete_recording(ticket));
        assert_eq!(vm.recording_status(), "Recording complete ✓");
    }

    #[test]
    fn screens_follow_flow_phase() {
        let (mut vm, service) = vm();
        for step in 0..5 {
            if vm.question_card().unwrap().is_voice {
                vm.toggle_recording().unwrap();
                vm.toggle_recording().unwrap();
            } else {
                vm.select_option(0).unwrap();
            }
            if step == 4 {
                assert_eq!(vm.next_label(), "Submit Assessment");
            }
            vm.advance().unwrap();
        }
        assert_eq!(vm.screen(), AssessmentScreen::Submitting);
        assert!(vm.results().is_none());

        vm.reveal(&service).unwrap();
        assert_eq!(vm.screen(), AssessmentScreen::Results);
        let results = vm.results().unwrap();
        // Q1 correct, two voice answers: (1 + 1.4) / 5
        assert_eq!(results.score_label, "48%");

        vm.finish(&service).unwrap();
        assert_eq!(vm.screen(), AssessmentScreen::Saved);
        assert!(vm.finish(&service).is_err());
    }
}
