//! Component mocks with interactive controls

mod app_card;
mod app_grid;
pub mod framework;
pub mod url_state;

pub use app_card::AppCardMock;
pub use app_grid::AppGridMock;
