//! launchpad mocks - Component gallery for the application cards
//!
//! A small web app that renders the launchpad-ui components with fixture data
//! and interactive controls.

mod demo_data;
mod mocks;
mod pages;
mod ui;

use dioxus::prelude::*;
use pages::{MockAppCard, MockAppGrid, MockIndex, Showcase};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
// Generated from ../tailwind.css by the Tailwind step of `dx serve` / `dx bundle`.
// The committed file is a stub so `asset!` resolves; without that step the
// gallery renders unstyled.
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Showcase {},
    // Mock routes (with controls)
    #[route("/mocks")]
    MockIndex {},
    #[route("/mock/app-card?:state")]
    MockAppCard { state: Option<String> },
    #[route("/mock/app-grid?:state")]
    MockAppGrid { state: Option<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}

fn main() {
    dioxus::launch(App);
}
