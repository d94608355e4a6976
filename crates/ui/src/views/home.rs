use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let launch = ctx.launch_path().cloned();

    let ctx_for_launch = ctx.clone();
    use_effect(move || {
        if let Some(path) = ctx_for_launch.take_launch_path() {
            tracing::debug!(route = %path.assessment_route(), "opening launch assessment");
            let _ = navigator.push(Route::assessment(&path));
        }
    });

    rsx! {
        div { class: "page",
            h2 { "Home" }
            if let Some(path) = launch {
                p { "Ready: {path.breadcrumb()}" }
                Link { to: Route::assessment(&path), "Start assessment" }
            } else {
                p { "Open an assessment with --subject, --topic and --subtopic." }
            }
        }
    }
}
