use assessment_core::model::AssessmentPath;
use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use services::AdvanceOutcome;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::{
    AssessmentIntent, AssessmentScreen, AssessmentVm, OptionVm, QuestionCardVm, ResultsVm,
    ReviewRowVm, TUTOR_NAME,
};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn AssessmentView(subject: String, topic: String, subtopic: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let service = ctx.assessment_service();
    let path = AssessmentPath::from_segments(Some(subject), Some(topic), Some(subtopic));

    let vm = {
        let path = path.clone();
        use_signal(move || AssessmentVm::new(service.start(path)))
    };
    let error = use_signal(|| None::<ViewError>);

    let dispatch_intent = use_callback(move |intent: AssessmentIntent| {
        let mut vm = vm;
        let mut error = error;

        match intent {
            AssessmentIntent::SelectOption(index) => {
                let result = vm.write().select_option(index);
                error.set(result.err());
            }
            AssessmentIntent::ToggleRecording => {
                let result = vm.write().toggle_recording();
                match result {
                    Ok(Some(ticket)) => {
                        error.set(None);
                        spawn(async move {
                            service.wait_recording().await;
                            // A stale ticket is ignored by the flow.
                            vm.write().complete_recording(ticket);
                        });
                    }
                    Ok(None) => error.set(None),
                    Err(err) => error.set(Some(err)),
                }
            }
            AssessmentIntent::Advance => {
                let result = vm.write().advance();
                match result {
                    Ok(AdvanceOutcome::Submitting) => {
                        error.set(None);
                        spawn(async move {
                            service.wait_grading().await;
                            let revealed = vm.write().reveal(&service);
                            error.set(revealed.err());
                        });
                    }
                    Ok(AdvanceOutcome::Next { .. } | AdvanceOutcome::NoSelection) => {
                        error.set(None);
                    }
                    Err(err) => error.set(Some(err)),
                }
            }
            AssessmentIntent::Finish => {
                let result = vm.write().finish(&service);
                match result {
                    Ok(()) => {
                        error.set(None);
                        spawn(async move {
                            service.wait_redirect().await;
                            tracing::debug!("redirecting to dashboard");
                            let _ = navigator.push(Route::Dashboard {});
                        });
                    }
                    Err(err) => error.set(Some(err)),
                }
            }
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<AssessmentTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    let vm_guard = vm.read();
    let screen = vm_guard.screen();
    let breadcrumb = vm_guard.breadcrumb();
    let subtitle = vm_guard.subtitle();
    let counter_label = vm_guard.counter_label();
    let progress_percent = vm_guard.progress_percent();
    let card = if screen == AssessmentScreen::Question {
        vm_guard.question_card()
    } else {
        None
    };
    let can_advance = vm_guard.can_advance();
    let next_label = vm_guard.next_label();
    let is_recording = vm_guard.is_recording();
    let recording_status = vm_guard.recording_status();
    let results = vm_guard.results();
    drop(vm_guard);

    let error_message = error().map(ViewError::message);

    rsx! {
        div { class: "page assessment-page",
            if let Some(message) = error_message {
                p { class: "assessment-error", role: "alert", "{message}" }
            }
            match screen {
                AssessmentScreen::Question | AssessmentScreen::Submitting => rsx! {
                    div { class: "assessment-header",
                        Link { to: Route::classroom(&path), "‹ Back to Classroom" }
                        span { class: "assessment-breadcrumb", "{breadcrumb}" }
                    }
                    div { class: "assessment-title",
                        div {
                            h1 { "{TUTOR_NAME} Assessment" }
                            p { class: "assessment-subtitle", "{subtitle}" }
                        }
                        span { class: "assessment-counter", "{counter_label}" }
                    }
                    progress {
                        class: "assessment-progress",
                        max: "100",
                        value: "{progress_percent}",
                    }
                    if let Some(card) = card {
                        QuestionCard {
                            card,
                            can_advance,
                            next_label,
                            is_recording,
                            recording_status,
                            on_intent: dispatch_intent,
                        }
                    } else {
                        SubmittingCard {}
                    }
                },
                AssessmentScreen::Results => rsx! {
                    if let Some(results) = results {
                        ResultsCard { results, on_intent: dispatch_intent }
                    }
                },
                AssessmentScreen::Saved => rsx! {
                    SavedCard {}
                },
            }
        }
    }
}

#[component]
fn QuestionCard(
    card: QuestionCardVm,
    can_advance: bool,
    next_label: &'static str,
    is_recording: bool,
    recording_status: &'static str,
    on_intent: EventHandler<AssessmentIntent>,
) -> Element {
    let record_class = if is_recording {
        "record-btn record-btn--active"
    } else {
        "record-btn"
    };
    let record_label = if is_recording { "Stop" } else { "Record" };

    rsx! {
        section { class: "question-card",
            header { class: "question-card__header",
                span { class: "{card.badge_class}", "{card.badge}" }
                h2 { class: "question-card__prompt", "{card.prompt}" }
            }
            div { class: "question-card__body",
                if card.is_voice {
                    p { class: "question-card__hint",
                        "Click the microphone button and explain your answer verbally. {TUTOR_NAME} will analyze your response."
                    }
                    button {
                        class: "{record_class}",
                        id: "record-toggle",
                        r#type: "button",
                        onclick: move |_| on_intent.call(AssessmentIntent::ToggleRecording),
                        "{record_label}"
                    }
                    p { class: "question-card__status", "{recording_status}" }
                } else {
                    div { class: "question-card__options", role: "radiogroup",
                        for option in card.options.iter() {
                            OptionRow { key: "{option.index}", option: option.clone(), on_intent }
                        }
                    }
                }
            }
            footer { class: "question-card__footer",
                button {
                    class: "btn btn-primary",
                    id: "assessment-next",
                    r#type: "button",
                    disabled: !can_advance,
                    onclick: move |_| on_intent.call(AssessmentIntent::Advance),
                    "{next_label}"
                }
            }
        }
    }
}

#[component]
fn OptionRow(option: OptionVm, on_intent: EventHandler<AssessmentIntent>) -> Element {
    let index = option.index;
    rsx! {
        label { class: "option-row",
            input {
                r#type: "radio",
                name: "assessment-option",
                id: "option-{index}",
                value: "{index}",
                checked: option.selected,
                onchange: move |_| on_intent.call(AssessmentIntent::SelectOption(index)),
            }
            span { "{option.label}" }
        }
    }
}

#[component]
fn SubmittingCard() -> Element {
    rsx! {
        section { class: "question-card question-card--submitting",
            h2 { "Evaluating Your Answers" }
            p { "{TUTOR_NAME} is analyzing your responses and preparing your feedback..." }
        }
    }
}

#[component]
fn ResultsCard(results: ResultsVm, on_intent: EventHandler<AssessmentIntent>) -> Element {
    rsx! {
        section { class: "results-card",
            header { class: "results-card__header",
                h2 { "Assessment Complete!" }
            }
            div { class: "results-card__score",
                div { class: "results-card__percent", "{results.score_label}" }
                p { "{results.answered_label}" }
                p { class: "results-card__time", "Completed {results.completed_at_str}" }
            }
            div { class: "{results.feedback_class}",
                h3 { "{TUTOR_NAME} Feedback" }
                p { "{results.feedback}" }
            }
            div { class: "review",
                h3 { "Question Review" }
                for (index, row) in results.review.iter().enumerate() {
                    ReviewRow { key: "{index}", row: row.clone() }
                }
            }
            footer { class: "results-card__footer",
                button {
                    class: "btn btn-primary",
                    id: "assessment-finish",
                    r#type: "button",
                    onclick: move |_| on_intent.call(AssessmentIntent::Finish),
                    "Complete Assessment"
                }
            }
        }
    }
}

#[component]
fn ReviewRow(row: ReviewRowVm) -> Element {
    rsx! {
        div { class: "review-row",
            span { class: "{row.status_class}", "{row.status_icon}" }
            div { class: "review-row__body",
                p { class: "review-row__title", "{row.title}" }
                p { class: "review-row__answer", "{row.answer_line}" }
                p { class: "review-row__expected", "{row.expected_line}" }
                if let Some(explanation) = row.explanation.as_ref() {
                    div { class: "review-row__explanation",
                        p { class: "review-row__explanation-title", "Explanation:" }
                        p { "{explanation}" }
                    }
                }
            }
        }
    }
}

#[component]
fn SavedCard() -> Element {
    rsx! {
        section { class: "saved-card",
            h2 { "Assessment Saved Successfully!" }
            p { "Your progress has been recorded. Redirecting to dashboard..." }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct AssessmentTestHandles {
    dispatch: Rc<RefCell<Option<Callback<AssessmentIntent>>>>,
    vm: Rc<RefCell<Option<Signal<AssessmentVm>>>>,
}

#[cfg(test)]
impl AssessmentTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<AssessmentIntent>, vm: Signal<AssessmentVm>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<AssessmentIntent> {
        (*self.dispatch.borrow()).expect("assessment dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<AssessmentVm> {
        (*self.vm.borrow()).expect("assessment vm registered")
    }
}
