//! Auto-generated control panel UI

use super::registry::{ControlDef, ControlKind, ControlRegistry, ControlValue};
use super::viewport::{Breakpoint, MockViewport, ViewportSwitcher, DEFAULT_BREAKPOINTS};
use crate::Route;
use dioxus::prelude::*;

/// Grouping on the mock index
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MockSection {
    Components,
    Layouts,
}

/// Every mock page, for the index and the header switcher
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MockPage {
    AppCard,
    AppGrid,
}

impl MockPage {
    pub const ALL: &'static [MockPage] = &[MockPage::AppCard, MockPage::AppGrid];

    pub fn label(self) -> &'static str {
        match self {
            MockPage::AppCard => "AppCard",
            MockPage::AppGrid => "AppGrid",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MockPage::AppCard => "Single application card: every launch status, fallbacks, links",
            MockPage::AppGrid => "Listing grid with fixture applications and the empty state",
        }
    }

    pub fn section(self) -> MockSection {
        match self {
            MockPage::AppCard => MockSection::Components,
            MockPage::AppGrid => MockSection::Layouts,
        }
    }

    pub fn to_route(self, state: Option<String>) -> Route {
        match self {
            MockPage::AppCard => Route::MockAppCard { state },
            MockPage::AppGrid => Route::MockAppGrid { state },
        }
    }
}

/// Main mock panel component that renders controls, presets, and viewport
#[component]
pub fn MockPanel(
    current_mock: MockPage,
    registry: ControlRegistry,
    #[props(default = "6xl")] max_width: &'static str,
    children: Element,
) -> Element {
    let max_w_class = match max_width {
        "4xl" => "max-w-4xl",
        "6xl" => "max-w-6xl",
        _ => max_width,
    };
    let breakpoint = use_signal(|| DEFAULT_BREAKPOINTS[DEFAULT_BREAKPOINTS.len() - 1]);

    rsx! {
        div { class: "min-h-screen bg-black text-white",
            // Controls panel
            div { class: "sticky top-0 z-50 bg-zinc-900 border-b border-zinc-800 p-4",
                div { class: "{max_w_class} mx-auto",
                    MockHeader { current_mock, breakpoint }

                    if !registry.presets.is_empty() {
                        PresetBar { registry: registry.clone() }
                    }

                    ControlsRow { registry: registry.clone() }
                }
            }

            // Content area
            div { class: "{max_w_class} mx-auto p-6",
                MockViewport { width: breakpoint().width, {children} }
            }
        }
    }
}

#[component]
fn MockHeader(current_mock: MockPage, breakpoint: Signal<Breakpoint>) -> Element {
    rsx! {
        div { class: "flex items-center justify-between mb-3",
            div { class: "flex items-center gap-3",
                Link {
                    to: Route::MockIndex {},
                    class: "text-zinc-500 hover:text-white text-sm",
                    "← Mocks"
                }
                for page in MockPage::ALL.iter().copied() {
                    Link {
                        to: page.to_route(None),
                        class: if page == current_mock { "text-sm font-semibold text-white" } else { "text-sm text-zinc-500 hover:text-zinc-300" },
                        "{page.label()}"
                    }
                }
            }
            ViewportSwitcher { selected: breakpoint }
        }
    }
}

/// Preset buttons bar; the preset matching the current values is highlighted
#[component]
fn PresetBar(registry: ControlRegistry) -> Element {
    rsx! {
        div { class: "flex flex-wrap gap-2 mb-3",
            span { class: "text-xs text-zinc-500 self-center mr-2", "Presets:" }
            for preset in registry.presets.iter().cloned() {
                button {
                    class: if preset.matches(&registry) { "px-2 py-1 text-xs rounded bg-red-800 text-white" } else { "px-2 py-1 text-xs rounded bg-zinc-800 text-zinc-300 hover:bg-zinc-700" },
                    onclick: {
                        let registry = registry.clone();
                        let preset = preset.clone();
                        move |_| registry.apply_preset(&preset)
                    },
                    "{preset.name}"
                }
            }
        }
    }
}

/// Auto-generated controls: enum button groups first, then inputs
#[component]
fn ControlsRow(registry: ControlRegistry) -> Element {
    let visible: Vec<ControlDef> = registry
        .controls
        .iter()
        .filter(|c| c.is_visible(&registry))
        .cloned()
        .collect();
    let (enum_controls, input_controls): (Vec<_>, Vec<_>) = visible
        .into_iter()
        .partition(|c| matches!(c.kind, ControlKind::Enum(_)));

    rsx! {
        for control in enum_controls {
            div { class: "flex flex-wrap items-center gap-2 mb-3",
                span { class: "text-xs text-zinc-500 mr-2", "{control.label}:" }
                if let ControlKind::Enum(options) = &control.kind {
                    for (value , label) in options.iter().copied() {
                        EnumButton {
                            registry: registry.clone(),
                            control_key: control.key,
                            value,
                            label,
                            doc: control.doc,
                        }
                    }
                }
            }
        }

        if !input_controls.is_empty() {
            div { class: "flex flex-wrap items-center gap-4 text-sm",
                for control in input_controls {
                    ControlInput { registry: registry.clone(), control }
                }
            }
        }

        if !registry.actions.is_empty() {
            div { class: "flex gap-2 mt-3",
                for action in registry.actions.iter().cloned() {
                    button {
                        class: "px-3 py-1.5 text-xs rounded bg-zinc-800 text-zinc-300 hover:bg-zinc-700",
                        onclick: move |_| action.callback.call(()),
                        "{action.label}"
                    }
                }
            }
        }
    }
}

/// Individual enum button - reads signal reactively
#[component]
fn EnumButton(
    registry: ControlRegistry,
    control_key: &'static str,
    value: &'static str,
    label: &'static str,
    doc: Option<&'static str>,
) -> Element {
    // Reading inside component body creates reactive subscription
    let is_selected = registry.get_string(control_key) == value;

    rsx! {
        button {
            class: if is_selected { "px-3 py-1.5 text-sm rounded bg-red-700 text-white" } else { "px-3 py-1.5 text-sm rounded bg-zinc-800 text-zinc-300 hover:bg-zinc-700" },
            onclick: move |_| registry.set_string(control_key, value.to_string()),
            title: doc.unwrap_or(""),
            "{label}"
        }
    }
}

/// Checkbox, number or text input depending on the control kind
#[component]
fn ControlInput(registry: ControlRegistry, control: ControlDef) -> Element {
    let key = control.key;
    let doc = control.doc.unwrap_or("");

    let input = match (&control.kind, registry.get(key)) {
        (ControlKind::Bool, Some(ControlValue::Bool(checked))) => rsx! {
            input {
                r#type: "checkbox",
                checked,
                onchange: move |e| registry.set_bool(key, e.checked()),
            }
        },
        (ControlKind::Int { min, max }, Some(ControlValue::Int(current))) => {
            let (min, max) = (*min, *max);
            rsx! {
                input {
                    r#type: "number",
                    class: "w-20 px-2 py-1 rounded bg-zinc-800 text-white border border-zinc-700",
                    value: "{current}",
                    min: "{min}",
                    max: max.map(|m| m.to_string()),
                    oninput: move |e| {
                        if let Ok(parsed) = e.value().parse::<i32>() {
                            let clamped = parsed.max(min).min(max.unwrap_or(i32::MAX));
                            registry.set_int(key, clamped);
                        }
                    },
                }
            }
        }
        (_, Some(ControlValue::String(current))) => rsx! {
            input {
                r#type: "text",
                class: "w-56 px-2 py-1 rounded bg-zinc-800 text-white border border-zinc-700",
                value: "{current}",
                oninput: move |e| registry.set_string(key, e.value()),
            }
        },
        _ => rsx! {},
    };

    rsx! {
        label { class: "flex items-center gap-2 text-zinc-400", title: doc,
            "{control.label}"
            {input}
            if control.doc.is_some() {
                span { class: "text-zinc-600", "ⓘ" }
            }
        }
    }
}
