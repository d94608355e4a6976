use serde::{Deserialize, Serialize};

use crate::model::{Answer, QuestionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionKind {
    MultipleChoice,
    Voice,
}

impl QuestionKind {
    /// Badge text shown next to the prompt.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice => "Multiple Choice",
            QuestionKind::Voice => "Voice Response",
        }
    }
}

/// A single assessment question.
///
/// Multiple-choice questions carry their options and the correct option
/// index (stored the same way a submitted answer is). Voice questions carry
/// neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    prompt: String,
    kind: QuestionKind,
    options: Option<Vec<String>>,
    correct_answer: Option<Answer>,
    explanation: Option<String>,
}

impl Question {
    #[must_use]
    pub fn multiple_choice(
        id: QuestionId,
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_index: usize,
    ) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            kind: QuestionKind::MultipleChoice,
            options: Some(options),
            correct_answer: Some(Answer::option(correct_index)),
            explanation: None,
        }
    }

    #[must_use]
    pub fn voice(id: QuestionId, prompt: impl Into<String>) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            kind: QuestionKind::Voice,
            options: None,
            correct_answer: None,
            explanation: None,
        }
    }

    #[must_use]
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    #[must_use]
    pub fn is_voice(&self) -> bool {
        self.kind == QuestionKind::Voice
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        self.options.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn correct_answer(&self) -> Option<&Answer> {
        self.correct_answer.as_ref()
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    /// Option text an answer points at, if the answer is an in-range index.
    #[must_use]
    pub fn option_text(&self, answer: &Answer) -> Option<&str> {
        answer
            .option_index()
            .and_then(|index| self.options().get(index))
            .map(String::as_str)
    }

    /// True when this is a multiple-choice question and `answer` matches the key.
    #[must_use]
    pub fn is_correct(&self, answer: Option<&Answer>) -> bool {
        match (self.kind, answer, self.correct_answer.as_ref()) {
            (QuestionKind::MultipleChoice, Some(given), Some(expected)) => given == expected,
            _ => false,
        }
    }
}
