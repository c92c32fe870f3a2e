//! Product and Catalog types.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::CatalogError;

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Ebike,
    Scooter,
    Atv,
    Kids,
    Gadgets,
}

impl Category {
    /// All categories in control order.
    pub const ALL: [Category; 5] = [
        Category::Ebike,
        Category::Scooter,
        Category::Atv,
        Category::Kids,
        Category::Gadgets,
    ];

    /// Control value for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Ebike => "ebike",
            Category::Scooter => "scooter",
            Category::Atv => "atv",
            Category::Kids => "kids",
            Category::Gadgets => "gadgets",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or(())
    }
}

/// A product is the atomic unit of the catalog.
///
/// Products are immutable once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier within the catalog.
    pub id: u32,

    /// Display name. Also the payload carried by card actions.
    pub name: String,

    pub category: Category,

    /// Price in whole dollars.
    pub price: u32,

    /// Short badge label, e.g. "New" or "Sale".
    pub tag: String,

    /// Image reference path.
    pub image: String,
}

impl Product {
    /// Create a product with the conventional `images/<id>.jpg` image path.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        category: Category,
        price: u32,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            price,
            tag: tag.into(),
            image: format!("images/{id}.jpg"),
        }
    }
}

/// Ordered, immutable list of products.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }
        Ok(Self { products })
    }

    /// The built-in demo catalog.
    pub fn sample() -> Self {
        Self {
            products: vec![
                Product::new(1, "Urban E-Bike 750W", Category::Ebike, 1299, "Featured"),
                Product::new(2, "Foldable E-Bike 500W", Category::Ebike, 899, "New"),
                Product::new(3, "City Scooter Pro", Category::Scooter, 699, "Top"),
                Product::new(4, "Off-Road ATV Mini", Category::Atv, 1599, "Popular"),
                Product::new(5, "Kids Electric Car", Category::Kids, 299, "Sale"),
                Product::new(6, "Smart Gadget Bundle", Category::Gadgets, 199, "Deal"),
                Product::new(7, "3-Wheel Mobility Scooter", Category::Scooter, 999, "Featured"),
                Product::new(8, "Electric Go-Kart", Category::Kids, 549, "New"),
                Product::new(9, "Adventure E-Bike 1000W", Category::Ebike, 1799, "Top"),
            ],
        }
    }

    /// Parse a catalog from a JSON array of products.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(products)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(
            "Loaded {} products from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by display name (first match).
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}
