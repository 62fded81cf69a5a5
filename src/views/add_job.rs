use crate::Route;
use dioxus::prelude::*;

/// The destination of the landing page's call-to-action. The actual job form
/// lives in a later milestone; for now the route only needs to resolve.
#[component]
pub fn AddJob() -> Element {
    rsx! {
        main { class: "container",
            h1 { "add job" }
            p { "The job form is coming soon. In the meantime, head back to the start." }
            Link { to: Route::Home {}, class: "btn", "Back home" }
        }
    }
}
