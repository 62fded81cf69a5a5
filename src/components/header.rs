use dioxus::prelude::*;

const LOGO: Asset = asset!("/assets/logo.svg");

/// The brand header shown at the top of the landing page. It holds nothing
/// but the logo; navigation lives in the hero's call-to-action.
#[component]
pub fn Header() -> Element {
    rsx! {
        header { class: "container page-header",
            img { src: LOGO, alt: "jobify" }
        }
    }
}
