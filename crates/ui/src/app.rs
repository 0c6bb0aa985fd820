use dioxus::prelude::*;
use dioxus_router::Router;

use coach_core::model::ScanSession;

use crate::routes::Route;

#[component]
pub fn App() -> Element {
    // One session for the whole app, owned by the root so in-flight
    // generation tasks outlive view navigation.
    use_context_provider(|| Signal::new(ScanSession::new()));

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Study Coach" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
