use crate::model::{AssessmentPath, Question, QuestionId};

/// Number of questions every generated assessment contains.
pub const QUESTION_COUNT: usize = 5;

/// Generates the sample questions for a path.
///
/// Only the subtopic is interpolated into the prompts; the rest of the
/// content is fixed.
#[must_use]
pub fn build_questions(path: &AssessmentPath) -> Vec<Question> {
    let subtopic = path.display_subtopic();

    vec![
        Question::multiple_choice(
            QuestionId::new(1),
            format!("What is the main principle behind {subtopic}?"),
            options(&[
                "Conservation of energy",
                "Newton's laws of motion",
                "Principle of superposition",
                "Quantum mechanics",
            ]),
            0,
        )
        .with_explanation(
            "The conservation of energy is a fundamental principle in physics that states that \
             energy cannot be created or destroyed, only transformed from one form to another.",
        ),
        Question::voice(
            QuestionId::new(2),
            format!("Explain in your own words how {subtopic} relates to everyday phenomena."),
        )
        .with_explanation(
            "This question tests your ability to connect theoretical concepts with practical \
             applications. A good answer would include specific examples from daily life.",
        ),
        Question::multiple_choice(
            QuestionId::new(3),
            format!("Which of the following is NOT a characteristic of {subtopic}?"),
            options(&[
                "It follows mathematical rules",
                "It can be observed experimentally",
                "It violates the laws of thermodynamics",
                "It has practical applications",
            ]),
            2,
        )
        .with_explanation(
            "The laws of thermodynamics are fundamental principles that govern physical and \
             chemical processes, and they are not violated by any legitimate scientific concept.",
        ),
        Question::multiple_choice(
            QuestionId::new(4),
            format!("What is the mathematical formula most commonly associated with {subtopic}?"),
            options(&["E = mc²", "F = ma", "PV = nRT", "a² + b² = c²"]),
            1,
        )
        .with_explanation(
            "F = ma is Newton's second law of motion, which describes the relationship between \
             force, mass, and acceleration.",
        ),
        Question::voice(
            QuestionId::new(5),
            format!(
                "Describe a scenario where understanding {subtopic} would help solve a problem in real life."
            ),
        )
        .with_explanation(
            "This question assesses your ability to apply the concepts to practical \
             problem-solving. Strong responses include specific problems and detailed solutions.",
        ),
    ]
}

fn options(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}
