use assessment_core::model::{
    AssessmentResult, FeedbackBand, QuestionKind, ReviewItem, ReviewStatus,
};

use crate::vm::assessment_vm::TUTOR_NAME;
use crate::vm::time_fmt::format_datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewRowVm {
    pub title: String,
    pub status_class: &'static str,
    pub status_icon: &'static str,
    pub answer_line: String,
    pub expected_line: String,
    pub explanation: Option<String>,
}

impl From<&ReviewItem> for ReviewRowVm {
    fn from(item: &ReviewItem) -> Self {
        let (status_class, status_icon) = match item.status {
            ReviewStatus::Correct => ("review-status review-status--correct", "✓"),
            ReviewStatus::Partial => ("review-status review-status--partial", "✓"),
            ReviewStatus::Incorrect => ("review-status review-status--incorrect", "!"),
        };
        let (answer_line, expected_line) = match item.kind {
            QuestionKind::MultipleChoice => (
                format!("Your answer: {}", item.your_answer),
                format!("Correct answer: {}", item.expected),
            ),
            QuestionKind::Voice => (
                format!("Your answer: {}", item.your_answer),
                format!("{TUTOR_NAME} evaluation: {}", item.expected),
            ),
        };

        Self {
            title: format!("Question {}: {}", item.position, item.prompt),
            status_class,
            status_icon,
            answer_line,
            expected_line,
            explanation: item.explanation.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub score_label: String,
    pub answered_label: String,
    pub feedback: &'static str,
    pub feedback_class: &'static str,
    pub completed_at_str: String,
    pub review: Vec<ReviewRowVm>,
}

#[must_use]
pub fn map_results(result: &AssessmentResult, review: &[ReviewItem]) -> ResultsVm {
    let feedback_class = match result.band() {
        FeedbackBand::High => "feedback feedback--high",
        FeedbackBand::Mid => "feedback feedback--mid",
        FeedbackBand::Low => "feedback feedback--low",
    };

    ResultsVm {
        score_label: result.score().to_string(),
        answered_label: format!(
            "You answered {} out of {} questions",
            result.answered(),
            result.total()
        ),
        feedback: result.feedback(),
        feedback_class,
        completed_at_str: format_datetime(result.completed_at()),
        review: review.iter().map(ReviewRowVm::from).collect(),
    }
}
