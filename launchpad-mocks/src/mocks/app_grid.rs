//! AppGrid mock component

use super::framework::{ControlRegistryBuilder, MockPage, MockPanel, Preset};
use crate::demo_data;
use crate::Route;
use dioxus::prelude::*;
use launchpad_ui::AppGrid;

#[component]
pub fn AppGridMock(initial_state: Option<String>) -> Element {
    let mut cycle = use_signal(|| 0u32);
    let catalog_len = demo_data::get_apps().len() as i32;

    let registry = ControlRegistryBuilder::new()
        .int_control("count", "Applications", catalog_len, 0, Some(catalog_len))
        .doc("Takes the first N fixture applications")
        .action("Remount", Callback::new(move |_| cycle += 1))
        .with_presets(vec![
            Preset::new("Full Catalog"),
            Preset::new("Single").set_int("count", 1),
            Preset::new("Empty").set_int("count", 0),
        ])
        .build(initial_state);

    registry.use_url_sync(|state| Route::MockAppGrid { state });

    let count = registry.get_int("count").max(0) as usize;
    let apps: Vec<_> = demo_data::get_apps().iter().take(count).cloned().collect();

    let cycle_val = cycle();

    rsx! {
        MockPanel { current_mock: MockPage::AppGrid, registry,
            div { key: "{cycle_val}", AppGrid { apps } }
        }
    }
}
