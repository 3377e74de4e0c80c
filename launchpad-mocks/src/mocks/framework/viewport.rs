//! Viewport switcher for responsive testing

use dioxus::prelude::*;

/// Breakpoint definition
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Breakpoint {
    pub name: &'static str,
    /// 0 = full width
    pub width: u32,
}

impl Breakpoint {
    pub const fn new(name: &'static str, width: u32) -> Self {
        Self { name, width }
    }
}

pub const DEFAULT_BREAKPOINTS: &[Breakpoint] = &[
    Breakpoint::new("Mobile", 375),
    Breakpoint::new("Tablet", 768),
    Breakpoint::new("Desktop", 1280),
    Breakpoint::new("Full", 0),
];

/// Row of breakpoint buttons
#[component]
pub fn ViewportSwitcher(selected: Signal<Breakpoint>) -> Element {
    let mut selected = selected;

    rsx! {
        div { class: "flex gap-1",
            for breakpoint in DEFAULT_BREAKPOINTS.iter().copied() {
                button {
                    class: if selected() == breakpoint { "px-2 py-1 text-xs rounded bg-red-700 text-white" } else { "px-2 py-1 text-xs rounded bg-zinc-800 text-zinc-400 hover:bg-zinc-700" },
                    onclick: move |_| selected.set(breakpoint),
                    "{breakpoint.name}"
                }
            }
        }
    }
}

/// Viewport container - just applies width constraint
#[component]
pub fn MockViewport(width: u32, children: Element) -> Element {
    let style = if width > 0 {
        format!("width: {}px; max-width: 100%; margin: 0 auto;", width)
    } else {
        String::new()
    };

    rsx! {
        div { class: "w-full transition-all", style, {children} }
    }
}
