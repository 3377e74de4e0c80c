//! AppCard mock component

use super::framework::{ControlRegistry, ControlRegistryBuilder, MockPage, MockPanel, Preset};
use crate::Route;
use launchpad_ui::{AppCard, ApplicationRecord, LaunchStatus};
use dioxus::prelude::*;

#[component]
pub fn AppCardMock(initial_state: Option<String>) -> Element {
    let registry = ControlRegistryBuilder::new()
        .enum_control(
            "status",
            "Status",
            "launched",
            vec![
                ("launched", "Launched"),
                ("date", "On Date"),
                ("weeks", "In Weeks"),
                ("soon", "Coming Soon"),
                ("unknown", "Unknown"),
                ("missing", "Missing"),
            ],
        )
        .string_control("name", "Name", "Nightshade")
        .string_control("tagline", "Tagline", "See in the dark")
        .string_control(
            "description",
            "Description",
            "A low-light camera that turns city nights into clean, noise-free photos.",
        )
        .bool_control("has_link", "Has Link", true)
        .string_control("link", "Link", "https://nightshade.example")
        .visible_when("has_link", "1")
        .string_control("date", "Launch Date", "March 3, 2026")
        .doc("Empty shows TBA")
        .visible_when("status", "date")
        .int_control("weeks", "Weeks", 3, -5, Some(52))
        .doc("1 is singular, everything else plural")
        .visible_when("status", "weeks")
        .with_presets(vec![
            Preset::new("Launched"),
            Preset::new("On Date").set_string("status", "date"),
            Preset::new("Date TBA")
                .set_string("status", "date")
                .set_string("date", ""),
            Preset::new("One Week")
                .set_string("status", "weeks")
                .set_int("weeks", 1),
            Preset::new("Three Weeks").set_string("status", "weeks"),
            Preset::new("Coming Soon").set_string("status", "soon"),
            Preset::new("Unknown Status").set_string("status", "unknown"),
            Preset::new("Bare Record")
                .set_string("status", "missing")
                .set_string("tagline", "")
                .set_string("description", "")
                .set_bool("has_link", false),
            Preset::new("Long Name")
                .set_string("name", "The Extraordinarily Long Application Name That Wraps")
                .set_string(
                    "description",
                    "This description keeps going well past the three lines the card has room for, so the clamp at the bottom of the body has something to cut. It mentions features, pricing, platforms, and then some more features for good measure.",
                ),
        ])
        .build(initial_state);

    registry.use_url_sync(|state| Route::MockAppCard { state });

    let app = record_from_controls(&registry);

    rsx! {
        MockPanel { current_mock: MockPage::AppCard, registry,
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-8 items-start",
                div { class: "w-full max-w-sm",
                    AppCard { app: app.clone() }
                }
                pre { class: "text-xs text-zinc-500 bg-zinc-950 border border-zinc-800 rounded-lg p-4 overflow-x-auto",
                    "{record_json(&app)}"
                }
            }
        }
    }
}

fn record_from_controls(registry: &ControlRegistry) -> ApplicationRecord {
    let mut app = ApplicationRecord::new(registry.get_string("name"))
        .with_tagline(registry.get_string("tagline"))
        .with_description(registry.get_string("description"));

    if registry.get_bool("has_link") {
        app = app.with_link(registry.get_string("link"));
    }

    match registry.get_string("status").as_str() {
        "launched" => app.launched(),
        "date" => app.scheduled_on(registry.get_string("date")),
        "weeks" => app.scheduled_in_weeks(registry.get_int("weeks").into()),
        "soon" => app.coming_soon(),
        "unknown" => app.with_status(LaunchStatus::Unrecognized),
        _ => app,
    }
}

/// The record as the catalog would carry it
fn record_json(app: &ApplicationRecord) -> String {
    serde_json::to_string_pretty(app).unwrap_or_else(|e| format!("<unserializable: {e}>"))
}
