//! Core types for the Showroom catalog browser.
//!
//! This crate contains everything that does not touch a page:
//! - Product and Catalog types
//! - Filter selection (category, price ranges, sort)
//! - The query engine (filter, sort, search)
//! - Card action payloads
//! - Configuration and error types

mod action;
mod config;
mod error;
mod product;
pub mod query;
mod selection;

pub use action::{CardAction, CardActionKind};
pub use config::{config_dir, config_path, AppConfig, CatalogConfig, TimingConfig};
pub use error::{CatalogError, ConfigError, QueryError};
pub use product::{Catalog, Category, Product};
pub use query::{filter_products, match_price, search_products, sort_products};
pub use selection::{CategoryFilter, FilterSelection, PriceRange, SortMode};
