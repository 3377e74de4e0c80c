//! Mock pages with URL state persistence

use crate::mocks::framework::{MockPage, MockSection};
use crate::mocks::{AppCardMock, AppGridMock};
use crate::ui::LinkCard;
use crate::Route;
use dioxus::prelude::*;
use launchpad_ui::{resolve_status, ApplicationRecord, LaunchStatus, StatusBadge};

/// One badge per status branch, for the specimen card
fn badge_specimens() -> Vec<ApplicationRecord> {
    vec![
        ApplicationRecord::new("a").launched(),
        ApplicationRecord::new("b").scheduled_on("May 4"),
        ApplicationRecord::new("c").scheduled_on(""),
        ApplicationRecord::new("d").scheduled_in_weeks(1),
        ApplicationRecord::new("e").scheduled_in_weeks(3),
        ApplicationRecord::new("f").coming_soon(),
        ApplicationRecord::new("g").with_status(LaunchStatus::Unrecognized),
    ]
}

#[component]
pub fn MockIndex() -> Element {
    let sections = [
        (MockSection::Components, "Components"),
        (MockSection::Layouts, "Layouts"),
    ];

    rsx! {
        div { class: "min-h-screen bg-black text-white p-8",
            h1 { class: "text-2xl font-bold mb-6", "launchpad mocks" }

            h2 { class: "text-lg font-semibold text-zinc-400 mb-3", "Showcase" }
            div { class: "space-y-2 mb-8",
                LinkCard {
                    to: Route::Showcase {},
                    title: "Catalog",
                    description: "The fixture catalog rendered as the public listing",
                }
            }

            h2 { class: "text-lg font-semibold text-zinc-400 mb-3", "Design System" }
            div { class: "grid grid-cols-3 gap-4 mb-8",
                SpecimenCard {
                    title: "StatusBadge",
                    to: Route::MockAppCard { state: None },
                    div { class: "flex flex-wrap gap-2",
                        for app in badge_specimens() {
                            StatusBadge { status: resolve_status(&app) }
                        }
                    }
                }
            }

            for (section , heading) in sections {
                h2 { class: "text-lg font-semibold text-zinc-400 mb-3", "{heading}" }
                div { class: "space-y-2 mb-8",
                    for page in MockPage::ALL.iter().copied().filter(|p| p.section() == section) {
                        LinkCard {
                            to: page.to_route(None),
                            title: page.label(),
                            description: page.description(),
                        }
                    }
                }
            }
        }
    }
}

/// A card showing specimen samples with a link to the full page
#[component]
fn SpecimenCard(title: &'static str, to: Route, children: Element) -> Element {
    rsx! {
        Link {
            to,
            class: "block bg-zinc-950 rounded-lg p-4 hover:bg-zinc-900 transition-colors border border-zinc-800",
            h3 { class: "text-sm font-medium text-zinc-300 mb-3", "{title}" }
            div { class: "pointer-events-none", {children} }
        }
    }
}

// ============================================================================
// AppCard page wrapper
// ============================================================================

#[component]
pub fn MockAppCard(state: Option<String>) -> Element {
    rsx! {
        AppCardMock { initial_state: state }
    }
}

// ============================================================================
// AppGrid page wrapper
// ============================================================================

#[component]
pub fn MockAppGrid(state: Option<String>) -> Element {
    rsx! {
        AppGridMock { initial_state: state }
    }
}
