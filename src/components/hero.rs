use crate::Route;
use dioxus::prelude::*;

const LANDING_CSS: Asset = asset!("/assets/styling/landing.css");
const LANDING_IMG: Asset = asset!("/assets/main.svg");

/// The hero section of the landing page: heading, pitch copy and the
/// "Get Started" call-to-action on the left, decorative illustration on the
/// right. Below the large breakpoint the two columns stack; the grid rules
/// live in landing.css.
#[component]
pub fn Hero() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: LANDING_CSS }

        section { class: "container hero",
            div { class: "hero-content",
                h1 {
                    "job "
                    span { class: "accent", "tracking" }
                    " app"
                }
                p {
                    "Jobify is a simple yet powerful job tracking app that "
                    "helps you manage your applications in one place. From "
                    "adding jobs to tracking progress and viewing insights, "
                    "it makes your job search more organized and efficient"
                }
                Link { to: Route::AddJob {}, class: "btn", "Get Started" }
            }
            img { src: LANDING_IMG, alt: "landing image" }
        }
    }
}
