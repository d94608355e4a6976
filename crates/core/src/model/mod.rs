mod answer;
mod catalog;
mod ids;
mod path;
mod question;
mod review;
mod score;

pub use answer::{Answer, AnswerSet, VOICE_ANSWER_SENTINEL};
pub use catalog::{QUESTION_COUNT, build_questions};
pub use ids::QuestionId;
pub use path::{AssessmentPath, UNDEFINED_SEGMENT};
pub use question::{Question, QuestionKind};
pub use review::{ReviewItem, ReviewStatus, VOICE_EVALUATION_NOTE, build_review};
pub use score::{
    AssessmentResult, FeedbackBand, MCQ_POINTS, Score, VOICE_PARTIAL_CREDIT, compute_score,
};
