//! Renderers for the Showroom page.
//!
//! Views are pure functions from products to markup and status text.

mod product_card;
mod product_grid;

pub use product_card::{action_attribute, badge_html, card_html, escape_html, price_label};
pub use product_grid::{grid_class, grid_html, search_status, shown_status, LOADING_STATUS};
