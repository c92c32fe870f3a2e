//! Product grid markup and status text.

use showroom_core::Product;

use super::product_card::card_html;
use crate::model::ViewMode;

/// Status shown while a full-list render is pending.
pub const LOADING_STATUS: &str = "Loading products...";

/// Markup for a list of products, one card each.
pub fn grid_html(products: &[Product]) -> String {
    products.iter().map(card_html).collect()
}

/// Layout class for the grid container.
pub fn grid_class(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::Grid => "grid",
        ViewMode::List => "grid grid--list",
    }
}

/// Status after a full-list render.
pub fn shown_status(count: usize) -> String {
    format!("{count} product(s) shown")
}

/// Status after a search.
pub fn search_status(query: &str, count: usize) -> String {
    format!("Search results for \"{query}\": {count} item(s)")
}

#[cfg(test)]
mod tests {
    use super::*;
    use showroom_core::Catalog;

    #[test]
    fn test_grid_html_one_card_per_product() {
        let catalog = Catalog::sample();
        let html = grid_html(catalog.products());
        assert_eq!(html.matches("<article class=\"card\">").count(), 9);
        assert!(grid_html(&[]).is_empty());
    }

    #[test]
    fn test_grid_class() {
        assert_eq!(grid_class(ViewMode::Grid), "grid");
        assert_eq!(grid_class(ViewMode::List), "grid grid--list");
    }

    #[test]
    fn test_status_text() {
        insta::assert_snapshot!(shown_status(3), @"3 product(s) shown");
        insta::assert_snapshot!(search_status("ebike", 3), @r#"Search results for "ebike": 3 item(s)"#);
    }
}
