//! Terminal rendering of cards and result lists.

pub mod items;
pub mod results;

pub use items::render_card;
pub use results::{render_results, render_suggestions};
