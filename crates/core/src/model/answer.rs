use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::QuestionId;

/// Value stored for a voice question once a (simulated) recording finishes.
pub const VOICE_ANSWER_SENTINEL: &str = "voice-answer-recorded";

/// A submitted answer: an option index rendered as a string, or the voice sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Answer(String);

impl Answer {
    #[must_use]
    pub fn option(index: usize) -> Self {
        Self(index.to_string())
    }

    #[must_use]
    pub fn voice_recorded() -> Self {
        Self(VOICE_ANSWER_SENTINEL.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn option_index(&self) -> Option<usize> {
        self.0.parse().ok()
    }

    #[must_use]
    pub fn is_voice_recording(&self) -> bool {
        self.0 == VOICE_ANSWER_SENTINEL
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Committed answers keyed by question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    answers: BTreeMap<QuestionId, Answer>,
}

impl AnswerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `answer` for `id`, replacing any earlier one.
    pub fn insert(&mut self, id: QuestionId, answer: Answer) -> Option<Answer> {
        self.answers.insert(id, answer)
    }

    #[must_use]
    pub fn get(&self, id: QuestionId) -> Option<&Answer> {
        self.answers.get(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl FromIterator<(QuestionId, Answer)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (QuestionId, Answer)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}
