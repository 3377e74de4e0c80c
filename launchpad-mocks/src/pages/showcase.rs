//! Showcase page - the fixture catalog as a listing

use crate::demo_data;
use crate::Route;
use dioxus::prelude::*;
use launchpad_ui::AppGrid;

#[component]
pub fn Showcase() -> Element {
    let apps = demo_data::get_apps().to_vec();

    rsx! {
        div { class: "min-h-screen bg-black text-white",
            header { class: "max-w-6xl mx-auto px-6 pt-16 pb-10 flex items-end justify-between",
                div {
                    h1 { class: "text-5xl font-black uppercase tracking-tighter", "Launchpad" }
                    p { class: "text-zinc-500 mt-2", "Everything we have shipped and everything on the way." }
                }
                Link {
                    to: Route::MockIndex {},
                    class: "text-sm text-zinc-500 hover:text-red-500 transition-colors",
                    "Mocks →"
                }
            }
            main { class: "max-w-6xl mx-auto px-6 pb-24",
                AppGrid { apps }
            }
        }
    }
}
