use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::{AnswerSet, Question, QuestionKind};

/// Points for a correct multiple-choice answer.
pub const MCQ_POINTS: f64 = 1.0;
/// Flat credit for any recorded voice answer, regardless of content.
pub const VOICE_PARTIAL_CREDIT: f64 = 0.7;

const HIGH_BAND_MIN: u8 = 80;
const MID_BAND_MIN: u8 = 60;

/// Whole-number percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Score(u8);

impl Score {
    /// Clamps to 100.
    #[must_use]
    pub fn new(percent: u8) -> Self {
        Self(percent.min(100))
    }

    #[must_use]
    pub fn percent(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn band(self) -> FeedbackBand {
        FeedbackBand::from_score(self)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedbackBand {
    Low,
    Mid,
    High,
}

impl FeedbackBand {
    #[must_use]
    pub fn from_score(score: Score) -> Self {
        match score.percent() {
            p if p >= HIGH_BAND_MIN => FeedbackBand::High,
            p if p >= MID_BAND_MIN => FeedbackBand::Mid,
            _ => FeedbackBand::Low,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            FeedbackBand::High => {
                "Excellent work! You have a strong understanding of the concepts."
            }
            FeedbackBand::Mid => {
                "Good job! You understand the basics, but there's room for improvement in some areas."
            }
            FeedbackBand::Low => {
                "You should review this topic again. Focus on the fundamental principles and try to connect them to practical applications."
            }
        }
    }
}

/// Scores an answer set against its questions.
///
/// Multiple-choice questions earn `MCQ_POINTS` when the stored answer equals
/// the key; voice questions earn `VOICE_PARTIAL_CREDIT` when anything was
/// stored. The sum is divided by the question count and rounded to the
/// nearest percent. No questions scores zero.
#[must_use]
pub fn compute_score(questions: &[Question], answers: &AnswerSet) -> Score {
    if questions.is_empty() {
        return Score::new(0);
    }

    let points: f64 = questions
        .iter()
        .map(|question| {
            let answer = answers.get(question.id());
            match question.kind() {
                QuestionKind::MultipleChoice if question.is_correct(answer) => MCQ_POINTS,
                QuestionKind::Voice if answer.is_some() => VOICE_PARTIAL_CREDIT,
                _ => 0.0,
            }
        })
        .sum();

    #[allow(clippy::cast_precision_loss)]
    let ratio = points / questions.len() as f64;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let percent = (ratio * 100.0).round().clamp(0.0, 100.0) as u8;
    Score::new(percent)
}

/// Outcome of a graded assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    score: Score,
    band: FeedbackBand,
    answered: usize,
    total: usize,
    completed_at: DateTime<Utc>,
}

impl AssessmentResult {
    #[must_use]
    pub fn grade(
        questions: &[Question],
        answers: &AnswerSet,
        completed_at: DateTime<Utc>,
    ) -> Self {
        let score = compute_score(questions, answers);
        Self {
            score,
            band: score.band(),
            answered: answers.len(),
            total: questions.len(),
            completed_at,
        }
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    #[must_use]
    pub fn band(&self) -> FeedbackBand {
        self.band
    }

    #[must_use]
    pub fn feedback(&self) -> &'static str {
        self.band.message()
    }

    #[must_use]
    pub fn answered(&self) -> usize {
        self.answered
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }
}
