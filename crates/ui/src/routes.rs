use assessment_core::model::AssessmentPath;
use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{AssessmentView, ClassroomView, DashboardView, HomeView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/dashboard", DashboardView)] Dashboard {},
        #[route("/assessment/:subject/:topic/:subtopic", AssessmentView)]
        Assessment { subject: String, topic: String, subtopic: String },
        #[route("/classroom/:subject/:topic/:subtopic", ClassroomView)]
        Classroom { subject: String, topic: String, subtopic: String },
}

impl Route {
    #[must_use]
    pub fn assessment(path: &AssessmentPath) -> Self {
        Route::Assessment {
            subject: path.subject().to_string(),
            topic: path.topic().to_string(),
            subtopic: path.subtopic().to_string(),
        }
    }

    #[must_use]
    pub fn classroom(path: &AssessmentPath) -> Self {
        Route::Classroom {
            subject: path.subject().to_string(),
            topic: path.topic().to_string(),
            subtopic: path.subtopic().to_string(),
        }
    }
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Assess" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Dashboard {}, "Dashboard" } }
            }
        }
    }
}
