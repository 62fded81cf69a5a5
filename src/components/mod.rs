//! The components module contains all shared components for our app. Components are the building blocks of dioxus apps.
//! They can be used to defined common UI elements like buttons, forms, and modals. In this template, we define a Header
//! and a Hero component to be used in our landing page.

mod header;
pub use header::Header;

mod hero;
pub use hero::Hero;
