//! Shared UI components

pub mod app_card;
pub mod app_grid;
pub mod icons;
pub mod status;
pub mod theme;

pub use app_card::{AppCard, CallToAction, CardBody, CardView};
pub use app_grid::AppGrid;
pub use icons::{CalendarIcon, ClockIcon, ExternalLinkIcon, InfoIcon, RocketIcon};
pub use status::{resolve_status, StatusBadge, StatusDisplay, StatusIcon, StatusTone};
pub use theme::BannerTheme;
