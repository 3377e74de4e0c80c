//! Application grid - lays out one card per catalog record

use crate::components::app_card::AppCard;
use crate::display_types::ApplicationRecord;
use dioxus::prelude::*;

pub const EMPTY_GRID_MESSAGE: &str = "No applications listed yet.";

/// Responsive grid of application cards
#[component]
pub fn AppGrid(apps: Vec<ApplicationRecord>) -> Element {
    if apps.is_empty() {
        return rsx! {
            div {
                class: "flex items-center justify-center py-24 text-zinc-500 text-sm",
                "data-testid": "app-grid-empty",
                "{EMPTY_GRID_MESSAGE}"
            }
        };
    }

    rsx! {
        div {
            class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-8",
            "data-testid": "app-grid",
            for (index , app) in apps.into_iter().enumerate() {
                AppCard { key: "{index}", app }
            }
        }
    }
}
