//! Application card component - pure view over one catalog record

use crate::components::icons::{ExternalLinkIcon, InfoIcon};
use crate::components::status::{resolve_status, StatusBadge, StatusDisplay};
use crate::components::theme::BannerTheme;
use crate::display_types::ApplicationRecord;
use dioxus::prelude::*;

pub const NO_DESCRIPTION: &str = "No description available.";
pub const LINK_LABEL: &str = "Click Here";
pub const INFO_ONLY_LABEL: &str = "Info Only";

/// Card body text
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardBody {
    Description(String),
    /// Shown when the record has no description
    Placeholder,
}

impl CardBody {
    pub fn text(&self) -> &str {
        match self {
            CardBody::Description(text) => text,
            CardBody::Placeholder => NO_DESCRIPTION,
        }
    }
}

/// What the button at the bottom of the card does
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallToAction {
    /// Outbound link, opened in a new tab without opener access
    Link { href: String },
    /// Disabled placeholder
    InfoOnly,
}

impl CallToAction {
    pub const TARGET: &'static str = "_blank";
    pub const REL: &'static str = "noopener noreferrer";

    pub fn label(&self) -> &'static str {
        match self {
            CallToAction::Link { .. } => LINK_LABEL,
            CallToAction::InfoOnly => INFO_ONLY_LABEL,
        }
    }
}

/// Everything a card shows, resolved from a record in one pass.
///
/// Building a `CardView` never fails and never reads anything but the record,
/// so the same record always yields an equal view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub theme: BannerTheme,
    pub title: String,
    pub tagline: Option<String>,
    pub status: StatusDisplay,
    pub body: CardBody,
    pub action: CallToAction,
}

impl CardView {
    pub fn from_record(app: &ApplicationRecord) -> Self {
        let body = match app.description() {
            Some(text) => CardBody::Description(text.to_string()),
            None => CardBody::Placeholder,
        };
        let action = match app.external_link() {
            Some(href) => CallToAction::Link {
                href: href.to_string(),
            },
            None => CallToAction::InfoOnly,
        };

        Self {
            theme: BannerTheme::for_name(&app.name),
            title: app.name.clone(),
            tagline: app.tagline().map(str::to_string),
            status: resolve_status(app),
            body,
            action,
        }
    }
}

impl From<&ApplicationRecord> for CardView {
    fn from(app: &ApplicationRecord) -> Self {
        Self::from_record(app)
    }
}

/// Individual application card
///
/// Pure view component - gradient banner with name, tagline and status badge,
/// then the description and a call-to-action.
#[component]
pub fn AppCard(app: ApplicationRecord) -> Element {
    let view = CardView::from(&app);
    let gradient = view.theme.gradient_class();
    let title = view.title.clone();

    let card_class = "group relative bg-zinc-950 border border-zinc-800 rounded-2xl overflow-hidden hover:border-red-800 transition-all duration-500 hover:shadow-[0_0_30px_rgba(220,38,38,0.15)] hover:-translate-y-2 flex flex-col h-full";

    rsx! {
        div { class: "{card_class}", "data-testid": "app-card",
            // Banner
            div { class: "w-full aspect-video relative overflow-hidden bg-gradient-to-br {gradient}",
                div { class: "absolute inset-0 bg-grid-pattern bg-[length:20px_20px] opacity-10" }
                div { class: "absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-40 h-40 bg-red-600/20 rounded-full blur-[50px] group-hover:bg-red-600/30 transition-all duration-700" }

                div { class: "absolute inset-0 flex flex-col items-center justify-center p-6 text-center z-10",
                    h3 {
                        class: "text-4xl sm:text-5xl font-black uppercase tracking-tighter text-transparent bg-clip-text bg-gradient-to-b from-white via-zinc-200 to-zinc-500 drop-shadow-2xl group-hover:scale-110 transition-transform duration-700 ease-in-out break-words w-full line-clamp-2 leading-[0.9]",
                        "{title}"
                    }
                    if let Some(tagline) = &view.tagline {
                        div { class: "mt-3 overflow-hidden",
                            p {
                                class: "text-xs sm:text-sm font-bold text-red-500/90 uppercase tracking-[0.3em] translate-y-4 group-hover:translate-y-0 transition-transform duration-500 opacity-0 group-hover:opacity-100 delay-100",
                                "data-testid": "app-card-tagline",
                                "{tagline}"
                            }
                        }
                    }
                }

                div { class: "absolute top-4 right-4 z-20",
                    StatusBadge { status: view.status.clone() }
                }
            }

            // Body
            div { class: "p-6 flex-1 flex flex-col relative",
                div { class: "mb-4",
                    h3 {
                        class: "text-xl font-bold text-white mb-2 line-clamp-1 group-hover:text-red-500 transition-colors duration-300",
                        title: "{title}",
                        "{title}"
                    }
                    {
                        match &view.body {
                            CardBody::Description(text) => rsx! {
                                p { class: "text-zinc-400 text-sm leading-relaxed line-clamp-3 min-h-[4.5em]",
                                    "{text}"
                                }
                            },
                            CardBody::Placeholder => rsx! {
                                p { class: "text-zinc-600 text-sm italic min-h-[4.5em] flex items-center gap-2",
                                    InfoIcon { class: "w-3.5 h-3.5" }
                                    "{NO_DESCRIPTION}"
                                }
                            },
                        }
                    }
                    div { class: "h-px w-full bg-zinc-800/50 mt-4 group-hover:bg-red-900/30 transition-colors" }
                }

                div { class: "mt-auto pt-2",
                    CardAction { action: view.action.clone() }
                }
            }
        }
    }
}

#[component]
fn CardAction(action: CallToAction) -> Element {
    let label = action.label();

    match action {
        CallToAction::Link { href } => rsx! {
            a {
                href: "{href}",
                target: CallToAction::TARGET,
                rel: CallToAction::REL,
                class: "w-full relative overflow-hidden flex items-center justify-center gap-2 bg-gradient-to-r from-red-700 to-red-600 hover:from-red-600 hover:to-red-500 text-white py-3 rounded-xl font-bold uppercase tracking-wider text-sm transition-all shadow-lg shadow-red-900/20 group-hover:shadow-red-900/40",
                "data-testid": "app-card-link",
                span { class: "relative z-10 flex items-center gap-2",
                    "{label}"
                    ExternalLinkIcon {}
                }
                div { class: "absolute inset-0 -translate-x-full group-hover:translate-x-full transition-transform duration-700 bg-gradient-to-r from-transparent via-white/20 to-transparent" }
            }
        },
        CallToAction::InfoOnly => rsx! {
            button {
                disabled: true,
                class: "w-full py-3 bg-zinc-900/50 text-zinc-600 border border-zinc-800 rounded-xl font-medium text-sm uppercase tracking-wider cursor-not-allowed",
                "data-testid": "app-card-info-only",
                "{label}"
            }
        },
    }
}
