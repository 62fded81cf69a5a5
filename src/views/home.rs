use crate::components::{Header, Hero};
use dioxus::prelude::*;

/// The Home page component that will be rendered when the current route is `[Route::Home]`.
///
/// The landing page is entirely static: a brand header followed by the hero
/// section, always in that order.
#[component]
pub fn Home() -> Element {
    rsx! {
        Header {}
        Hero {}
    }
}
