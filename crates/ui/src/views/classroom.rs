use assessment_core::model::AssessmentPath;
use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn ClassroomView(subject: String, topic: String, subtopic: String) -> Element {
    let path = AssessmentPath::from_segments(Some(subject), Some(topic), Some(subtopic));

    rsx! {
        div { class: "page",
            h2 { "Classroom" }
            p { "{path.breadcrumb()}" }
            Link { to: Route::assessment(&path), "Take the assessment" }
        }
    }
}
