use dioxus::prelude::*;
use dioxus_router::Router;

use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::TUTOR_NAME;

const STYLE: Asset = asset!("/assets/style.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: STYLE }
        document::Title { "{TUTOR_NAME} Assessment" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| {
                    tracing::error!(?errors, "assessment view failed to render");
                    rsx! { FatalNotice { cause: format!("{errors:?}") } }
                },
                Router::<Route> {}
            }
        }
    }
}

/// Shown in place of the router when a view fails; answers in progress are lost.
#[component]
fn FatalNotice(cause: String) -> Element {
    let message = ViewError::Unknown.message();
    rsx! {
        section { class: "fatal",
            h1 { "{message}" }
            p { "Your current assessment could not be continued. Restart the app to begin again." }
            details {
                summary { "Details" }
                pre { "{cause}" }
            }
        }
    }
}
