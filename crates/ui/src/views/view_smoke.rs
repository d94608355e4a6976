use std::time::Duration;

use assessment_core::model::{AssessmentPath, QuestionKind};
use services::{AssessmentTimings, FlowPhase};

use super::test_harness::{
    ViewHarness, ViewKind, setup_view_harness, setup_view_harness_with_timings,
};
use crate::vm::AssessmentIntent;

fn path() -> AssessmentPath {
    AssessmentPath::new("physics", "classical-mechanics", "projectile-motion")
}

/// Answers every question correctly (voice questions via the recording timer).
async fn answer_all(harness: &mut ViewHarness) {
    for _ in 0..5 {
        let vm = harness.vm();
        let question = vm.flow().current_question().cloned().expect("question");
        match question.kind() {
            QuestionKind::MultipleChoice => {
                let index = question
                    .correct_answer()
                    .and_then(|answer| answer.option_index())
                    .expect("answer key");
                harness.dispatch(AssessmentIntent::SelectOption(index)).await;
            }
            QuestionKind::Voice => {
                harness.dispatch(AssessmentIntent::ToggleRecording).await;
                let html = harness.render();
                assert!(html.contains("Recording complete"), "missing status in {html}");
            }
        }
        harness.dispatch(AssessmentIntent::Advance).await;
    }
}

#[tokio::test(flavor = "current_thread")]
async fn assessment_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Assessment(path()), None);
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("Assessment: physics / classical mechanics / projectile motion"),
        "missing breadcrumb in {html}"
    );
    assert!(html.contains("Question 1 of 5"), "missing counter in {html}");
    assert!(html.contains("Multiple Choice"), "missing badge in {html}");
    assert!(
        html.contains("What is the main principle behind projectile motion?"),
        "missing prompt in {html}"
    );
    assert!(html.contains("Conservation of energy"), "missing option in {html}");
    assert!(html.contains("Next Question"), "missing next button in {html}");
    assert!(html.contains("Back to Classroom"), "missing back link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn assessment_view_advance_without_selection_keeps_question() {
    let mut harness = setup_view_harness(ViewKind::Assessment(path()), None);
    harness.rebuild();

    harness.dispatch(AssessmentIntent::Advance).await;
    let vm = harness.vm();
    assert_eq!(vm.flow().current_index(), 0);
    assert!(harness.render().contains("Question 1 of 5"));
}

#[tokio::test(flavor = "current_thread")]
async fn assessment_view_full_run_reaches_saved_screen() {
    let mut harness = setup_view_harness(ViewKind::Assessment(path()), None);
    harness.rebuild();
    answer_all(&mut harness).await;

    assert_eq!(harness.vm().flow().phase(), FlowPhase::Results);
    let html = harness.render();
    assert!(html.contains("Assessment Complete!"), "missing title in {html}");
    assert!(html.contains("88%"), "missing score in {html}");
    assert!(
        html.contains("You answered 5 out of 5 questions"),
        "missing answered count in {html}"
    );
    assert!(html.contains("Excellent work!"), "missing feedback in {html}");
    assert!(html.contains("Question Review"), "missing review in {html}");
    assert!(
        html.contains("Correct answer: F = ma"),
        "missing review row in {html}"
    );

    harness.dispatch(AssessmentIntent::Finish).await;
    let html = harness.render();
    assert!(
        html.contains("Assessment Saved Successfully!"),
        "missing saved screen in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn assessment_view_shows_evaluating_card_while_grading() {
    let timings = AssessmentTimings {
        grading: Duration::from_secs(600),
        redirect: Duration::from_secs(600),
        ..AssessmentTimings::immediate()
    };
    let mut harness =
        setup_view_harness_with_timings(ViewKind::Assessment(path()), None, timings);
    harness.rebuild();
    answer_all(&mut harness).await;

    assert_eq!(harness.vm().flow().phase(), FlowPhase::Submitting);
    let html = harness.render();
    assert!(
        html.contains("Evaluating Your Answers"),
        "missing submitting card in {html}"
    );
    assert!(html.contains("Model B is analyzing your responses"), "missing note in {html}");
    assert!(!html.contains("Assessment Complete!"), "results shown early in {html}");
    assert!(!html.contains("Next Question"), "question card still shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn assessment_view_redirects_to_dashboard_after_finish() {
    let timings = AssessmentTimings {
        redirect: Duration::from_millis(20),
        ..AssessmentTimings::immediate()
    };
    let mut harness =
        setup_view_harness_with_timings(ViewKind::Assessment(path()), Some(path()), timings);
    harness.rebuild();
    answer_all(&mut harness).await;
    assert_eq!(harness.vm().flow().phase(), FlowPhase::Results);

    harness.dispatch(AssessmentIntent::Finish).await;
    let html = harness
        .settle_until(|html| html.contains("not stored between runs"), 20)
        .await;

    assert!(html.contains("Dashboard"), "missing dashboard in {html}");
    assert!(html.contains("Take another assessment"), "missing link in {html}");
    assert!(
        !html.contains("Assessment Saved Successfully!"),
        "still on saved screen in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn assessment_view_shows_error_for_out_of_phase_intent() {
    let mut harness = setup_view_harness(ViewKind::Assessment(path()), None);
    harness.rebuild();

    harness.dispatch(AssessmentIntent::Finish).await;
    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_offers_another_run() {
    let mut harness = setup_view_harness(ViewKind::Dashboard, Some(path()));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Dashboard"), "missing title in {html}");
    assert!(html.contains("Take another assessment"), "missing link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn classroom_view_smoke_renders_breadcrumb() {
    let mut harness = setup_view_harness(ViewKind::Classroom(path()), None);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("physics / classical mechanics / projectile motion"),
        "missing breadcrumb in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_without_launch_path_shows_hint() {
    let mut harness = setup_view_harness(ViewKind::Home, None);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("--subject"), "missing hint in {html}");
}
