//! launchpad-ui - Application listing cards
//!
//! Contains display types, the status and theme decision functions, and pure
//! view components used by any host that lists applications.

pub mod catalog;
pub mod components;
pub mod display_types;

pub use catalog::{parse_catalog, CatalogError};
pub use components::*;
pub use display_types::*;
