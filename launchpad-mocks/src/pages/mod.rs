//! Gallery pages

mod mock_index;
mod showcase;

pub use mock_index::{MockAppCard, MockAppGrid, MockIndex};
pub use showcase::Showcase;
