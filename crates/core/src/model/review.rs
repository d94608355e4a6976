use serde::{Deserialize, Serialize};

use crate::model::{AnswerSet, Question, QuestionKind};

/// Evaluation shown for every voice question.
pub const VOICE_EVALUATION_NOTE: &str = "Good understanding with some room for improvement";

const NOT_ANSWERED: &str = "Not answered";
const NO_KEY: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReviewStatus {
    Correct,
    Incorrect,
    /// Voice questions: credited partially whether or not a recording exists.
    Partial,
}

/// One row of the post-assessment question review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewItem {
    pub position: usize,
    pub prompt: String,
    pub kind: QuestionKind,
    pub status: ReviewStatus,
    pub your_answer: String,
    pub expected: String,
    pub explanation: Option<String>,
}

impl ReviewItem {
    fn from_question(position: usize, question: &Question, answers: &AnswerSet) -> Self {
        let given = answers.get(question.id());
        let (status, your_answer, expected) = match question.kind() {
            QuestionKind::MultipleChoice => {
                let status = if question.is_correct(given) {
                    ReviewStatus::Correct
                } else {
                    ReviewStatus::Incorrect
                };
                let your_answer = match given {
                    Some(answer) => question.option_text(answer).unwrap_or_default(),
                    None => NOT_ANSWERED,
                };
                let expected = question
                    .correct_answer()
                    .and_then(|key| question.option_text(key))
                    .unwrap_or(NO_KEY);
                (status, your_answer.to_string(), expected.to_string())
            }
            QuestionKind::Voice => {
                let provided = if given.is_some() {
                    "provided"
                } else {
                    "not provided"
                };
                (
                    ReviewStatus::Partial,
                    format!("Voice response {provided}"),
                    VOICE_EVALUATION_NOTE.to_string(),
                )
            }
        };

        Self {
            position,
            prompt: question.prompt().to_string(),
            kind: question.kind(),
            status,
            your_answer,
            expected,
            explanation: question.explanation().map(str::to_string),
        }
    }
}

/// Builds the review rows in question order; positions start at 1.
#[must_use]
pub fn build_review(questions: &[Question], answers: &AnswerSet) -> Vec<ReviewItem> {
    questions
        .iter()
        .enumerate()
        .map(|(index, question)| ReviewItem::from_question(index + 1, question, answers))
        .collect()
}
