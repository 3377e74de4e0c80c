//! Shared UI components for launchpad-mocks

mod link_card;

pub use link_card::LinkCard;
