//! Query engine: pure filter, sort and search over the catalog.
//!
//! The full-list pipeline is fixed: category predicate, then price-range
//! predicate, then a stable sort. Search bypasses all three.

use std::cmp::Ordering;

use crate::error::QueryError;
use crate::product::{Catalog, Product};
use crate::selection::{FilterSelection, PriceRange, SortMode};

/// Check whether a product falls in any of the selected price ranges.
///
/// No ranges means no constraint. Malformed ranges never match.
pub fn match_price(product: &Product, selected_ranges: &[String]) -> bool {
    if selected_ranges.is_empty() {
        return true;
    }

    selected_ranges
        .iter()
        .any(|raw| match PriceRange::parse(raw) {
            Ok(range) => range.contains(product.price),
            Err(e) => {
                tracing::warn!("{} - excluding product {}", e, product.id);
                false
            }
        })
}

/// Return a sorted copy of `list`. The input is left untouched.
pub fn sort_products(list: &[Product], mode: SortMode) -> Vec<Product> {
    let mut sorted = list.to_vec();
    // `sort_by` is stable: equal keys keep their relative order.
    match mode {
        SortMode::PriceAsc => sorted.sort_by(|a, b| a.price.cmp(&b.price)),
        SortMode::PriceDesc => sorted.sort_by(|a, b| b.price.cmp(&a.price)),
        SortMode::NameAsc => sorted.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortMode::Featured => {}
    }
    sorted
}

/// Case-insensitive name ordering with a raw-name tie break.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Run the full-list pipeline for the given selection.
pub fn filter_products(catalog: &Catalog, selection: &FilterSelection) -> Vec<Product> {
    let filtered: Vec<Product> = catalog
        .products()
        .iter()
        .filter(|p| selection.category.matches(p.category))
        .filter(|p| match_price(p, &selection.price_ranges))
        .cloned()
        .collect();

    tracing::debug!(
        category = selection.category.as_str(),
        ranges = ?selection.price_ranges,
        sort = selection.sort.as_str(),
        "Filtered {} of {} products",
        filtered.len(),
        catalog.len()
    );

    sort_products(&filtered, selection.sort)
}

/// Normalize a raw search input: trimmed and lowercased.
pub fn normalize_query(raw: &str) -> Result<String, QueryError> {
    let query = raw.trim().to_lowercase();
    if query.is_empty() {
        return Err(QueryError::EmptyQuery);
    }
    Ok(query)
}

/// Drop punctuation so `ebike` matches `E-Bike`.
fn fold(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Search product names, ignoring category, price and sort.
///
/// Returns matches in catalog order.
pub fn search_products(catalog: &Catalog, raw_query: &str) -> Result<Vec<Product>, QueryError> {
    let query = normalize_query(raw_query)?;
    let folded = fold(&query);

    let found: Vec<Product> = catalog
        .products()
        .iter()
        .filter(|p| {
            if folded.trim().is_empty() {
                p.name.to_lowercase().contains(&query)
            } else {
                fold(&p.name).contains(&folded)
            }
        })
        .cloned()
        .collect();

    tracing::debug!("Search {:?} matched {} products", query, found.len());
    Ok(found)
}
