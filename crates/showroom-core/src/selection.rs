//! Filter selection types.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::QueryError;
use crate::product::Category;

/// Category control value: everything, or a single category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parse a control value. Unknown values fall back to `All`.
    pub fn from_control(value: &str) -> Self {
        match value.parse::<Category>() {
            Ok(category) => CategoryFilter::Only(category),
            Err(()) => {
                if value != "all" {
                    tracing::debug!("Unknown category value {:?}, showing all", value);
                }
                CategoryFilter::All
            }
        }
    }

    /// Control value for this filter.
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

/// Sort order for the product grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortMode {
    /// Catalog order.
    #[default]
    Featured,
    PriceAsc,
    PriceDesc,
    NameAsc,
}

impl SortMode {
    /// Parse a control value. Unknown values keep catalog order.
    pub fn from_control(value: &str) -> Self {
        match value {
            "priceAsc" => SortMode::PriceAsc,
            "priceDesc" => SortMode::PriceDesc,
            "nameAsc" => SortMode::NameAsc,
            _ => SortMode::Featured,
        }
    }

    /// Control value for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Featured => "featured",
            SortMode::PriceAsc => "priceAsc",
            SortMode::PriceDesc => "priceDesc",
            SortMode::NameAsc => "nameAsc",
        }
    }
}

/// Half-open price interval `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    /// Parse a `"min-max"` range. `max` may be `inf` for an open upper bound.
    pub fn parse(s: &str) -> Result<Self, QueryError> {
        let invalid = || QueryError::InvalidRangeFormat {
            range: s.to_string(),
        };

        let (min, max) = s.split_once('-').ok_or_else(invalid)?;
        let min = parse_bound(min).ok_or_else(invalid)?;
        let max = parse_bound(max).ok_or_else(invalid)?;
        Ok(Self { min, max })
    }

    /// Check whether a price falls inside this range.
    pub fn contains(&self, price: u32) -> bool {
        let price = f64::from(price);
        price >= self.min && price < self.max
    }
}

fn parse_bound(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    f64::from_str(s).ok().filter(|v| !v.is_nan())
}

/// The combination of category, price ranges and sort currently active.
///
/// Derived from control state on every render; never stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    pub category: CategoryFilter,

    /// Raw checkbox values such as `"0-500"`. Empty means no price constraint.
    pub price_ranges: Vec<String>,

    pub sort: SortMode,
}

impl FilterSelection {
    /// Build a selection from raw control values.
    pub fn from_controls(category: &str, sort: &str, price_ranges: Vec<String>) -> Self {
        Self {
            category: CategoryFilter::from_control(category),
            price_ranges,
            sort: SortMode::from_control(sort),
        }
    }
}
