use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let again = ctx.launch_path().cloned();

    rsx! {
        div { class: "page",
            h2 { "Dashboard" }
            p { "Assessment results are not stored between runs." }
            if let Some(path) = again {
                Link { to: Route::assessment(&path), "Take another assessment" }
            }
        }
    }
}
